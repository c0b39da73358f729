//! Canonical mesh representation and the builder that produces it.

use std::collections::HashMap;

use orthoview_math::{Aabb, Point3, Vec3, DEGENERATE_AREA_EPS};

use crate::error::{Result, StlError};

/// A triangle face: three indices into the owning mesh's vertex list plus
/// the normal recorded in the source file.
///
/// Winding order is preserved from the input. The normal is never
/// recomputed from the vertices; visibility classification downstream
/// relies on the authored normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Vertex indices, all distinct and valid for the owning mesh.
    pub indices: [u32; 3],
    /// Face normal as stored in the file.
    pub normal: Vec3,
}

/// An immutable, deduplicated, normalized triangle mesh.
///
/// Constructed once by [`MeshBuilder::build`], consumed by the projection
/// engine, then discarded. After construction the bounding box is centered
/// at the origin and the largest axis extent spans 1.0 unit (up to
/// floating-point rounding).
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Unique vertices; no two entries share identical coordinates.
    pub vertices: Vec<Point3>,
    /// Faces referencing `vertices`. Always non-empty.
    pub faces: Vec<Face>,
    /// Axis-aligned bounding box, recomputed after normalization.
    pub bounds: Aabb,
}

impl Mesh {
    /// Number of unique vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }
}

/// Exact-coordinate key for vertex deduplication.
///
/// Bit patterns distinguish -0.0 from 0.0 and any NaN payloads, which is
/// acceptable: dedup is an exact-match optimization, not a welding pass.
fn coord_key(p: &Point3) -> [u64; 3] {
    [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]
}

/// Accumulates parsed triangles, deduplicating vertices and dropping
/// degenerate faces as they arrive.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    vertices: Vec<Point3>,
    faces: Vec<Face>,
    index_of: HashMap<[u64; 3], u32>,
}

impl MeshBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder sized for an expected triangle count.
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangles * 3),
            faces: Vec::with_capacity(triangles),
            index_of: HashMap::with_capacity(triangles * 3),
        }
    }

    /// Intern a vertex, reusing the index of a previously seen identical
    /// coordinate triple.
    fn intern(&mut self, p: Point3) -> u32 {
        let key = coord_key(&p);
        if let Some(&idx) = self.index_of.get(&key) {
            return idx;
        }
        let idx = self.vertices.len() as u32;
        self.vertices.push(p);
        self.index_of.insert(key, idx);
        idx
    }

    /// Add a triangle with its authored normal.
    ///
    /// Degenerate triangles (collinear or coincident corners, cross-product
    /// magnitude at or below [`DEGENERATE_AREA_EPS`]) are silently dropped.
    pub fn add_triangle(&mut self, corners: [Point3; 3], normal: Vec3) {
        let e1 = corners[1] - corners[0];
        let e2 = corners[2] - corners[0];
        if e1.cross(&e2).norm() <= DEGENERATE_AREA_EPS {
            return;
        }

        let indices = [
            self.intern(corners[0]),
            self.intern(corners[1]),
            self.intern(corners[2]),
        ];
        self.faces.push(Face { indices, normal });
    }

    /// Number of triangles accepted so far.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Finalize: reject empty/zero-size meshes, then translate to the
    /// origin and scale the largest extent to 1.0.
    pub fn build(self) -> Result<Mesh> {
        let Self {
            mut vertices,
            faces,
            ..
        } = self;

        if faces.is_empty() {
            return Err(StlError::NoValidFaces);
        }

        let bounds = Aabb::from_points(vertices.iter());
        let size = bounds.max_extent();
        if size == 0.0 {
            return Err(StlError::ZeroExtent);
        }

        let center = bounds.center();
        let scale = 1.0 / size;
        for v in &mut vertices {
            *v = Point3::new(
                (v.x - center.x) * scale,
                (v.y - center.y) * scale,
                (v.z - center.z) * scale,
            );
        }

        let bounds = Aabb::from_points(vertices.iter());
        Ok(Mesh {
            vertices,
            faces,
            bounds,
        })
    }
}
