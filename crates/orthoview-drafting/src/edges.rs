//! Edge adjacency and silhouette visibility classification.

use std::collections::HashMap;

use orthoview_math::{round_to, COORD_DECIMALS};
use orthoview_stl::Mesh;

use crate::types::{Line2D, Point2D, ViewDirection};

/// Collect the visible edges of `mesh` for one view, projected into the
/// view plane with coordinates rounded to stabilize downstream direction
/// bucketing.
///
/// An edge is visible when its single incident face is front-facing
/// (boundary edge), or when exactly one of its two incident faces is
/// front-facing (silhouette edge). Edges with three or more incident
/// faces come from non-manifold input and fall through to not visible.
pub(crate) fn collect_visible_segments(mesh: &Mesh, direction: ViewDirection) -> Vec<Line2D> {
    let view = direction.view_vector();

    // A face is front-facing when its authored normal points strictly
    // toward the viewer; dot == 0 (grazing) counts as back-facing.
    let front_facing: Vec<bool> = mesh
        .faces
        .iter()
        .map(|f| f.normal.dot(&view) > 0.0)
        .collect();

    let mut adjacency: HashMap<(u32, u32), Vec<usize>> = HashMap::new();
    for (face_idx, face) in mesh.faces.iter().enumerate() {
        let [a, b, c] = face.indices;
        for (v0, v1) in [(a, b), (b, c), (c, a)] {
            adjacency.entry(edge_key(v0, v1)).or_default().push(face_idx);
        }
    }

    // Sorted key order keeps output deterministic across runs.
    let mut edges: Vec<_> = adjacency.into_iter().collect();
    edges.sort_unstable_by_key(|(key, _)| *key);

    let mut segments = Vec::new();
    for ((v0, v1), incident) in edges {
        let visible = match incident.as_slice() {
            [f] => front_facing[*f],
            [f, g] => front_facing[*f] != front_facing[*g],
            _ => false,
        };
        if !visible {
            continue;
        }

        let start = round_point(direction.project(&mesh.vertices[v0 as usize]));
        let end = round_point(direction.project(&mesh.vertices[v1 as usize]));
        segments.push(Line2D::new(start, end));
    }

    segments
}

/// Order-independent edge key: the lexicographically smaller of the two
/// endpoint orderings.
fn edge_key(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 {
        (v0, v1)
    } else {
        (v1, v0)
    }
}

fn round_point(p: Point2D) -> Point2D {
    Point2D::new(round_to(p.x, COORD_DECIMALS), round_to(p.y, COORD_DECIMALS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use orthoview_math::{Point3, Vec3};
    use orthoview_stl::MeshBuilder;

    fn single_triangle(normal: Vec3) -> Mesh {
        let mut b = MeshBuilder::new();
        b.add_triangle(
            [
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            normal,
        );
        b.build().unwrap()
    }

    #[test]
    fn test_boundary_edges_of_front_facing_triangle() {
        // Normal points at the front viewer (-Z).
        let mesh = single_triangle(Vec3::new(0.0, 0.0, -1.0));
        let segments = collect_visible_segments(&mesh, ViewDirection::Front);
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn test_back_facing_triangle_invisible() {
        let mesh = single_triangle(Vec3::new(0.0, 0.0, 1.0));
        let segments = collect_visible_segments(&mesh, ViewDirection::Front);
        assert!(segments.is_empty());
    }

    #[test]
    fn test_grazing_face_is_back_facing() {
        // Normal perpendicular to the front view direction: dot == 0.
        let mesh = single_triangle(Vec3::new(1.0, 0.0, 0.0));
        let segments = collect_visible_segments(&mesh, ViewDirection::Front);
        assert!(segments.is_empty());
    }

    #[test]
    fn test_silhouette_edge_between_front_and_back() {
        let mut b = MeshBuilder::new();
        let shared = [Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
        // One face toward the front viewer, one away.
        b.add_triangle(
            [shared[0], Point3::new(1.0, 0.0, 0.5), shared[1]],
            Vec3::new(0.0, 0.0, -1.0),
        );
        b.add_triangle(
            [shared[0], shared[1], Point3::new(-1.0, 0.0, 0.5)],
            Vec3::new(0.0, 0.0, 1.0),
        );
        let mesh = b.build().unwrap();

        let segments = collect_visible_segments(&mesh, ViewDirection::Front);
        // Silhouette edge plus the front face's two boundary edges.
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn test_interior_edge_between_two_front_faces_hidden() {
        let mut b = MeshBuilder::new();
        let n = Vec3::new(0.0, 0.0, -1.0);
        let shared = [Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
        b.add_triangle([shared[0], Point3::new(1.0, 0.0, 0.0), shared[1]], n);
        b.add_triangle([shared[0], shared[1], Point3::new(-1.0, 0.0, 0.0)], n);
        let mesh = b.build().unwrap();

        let segments = collect_visible_segments(&mesh, ViewDirection::Front);
        // Four boundary edges visible, the shared edge hidden.
        assert_eq!(segments.len(), 4);
    }

    #[test]
    fn test_non_manifold_edge_not_visible() {
        let mut b = MeshBuilder::new();
        let n = Vec3::new(0.0, 0.0, -1.0);
        let shared = [Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
        // Three faces fanning around one edge.
        b.add_triangle([shared[0], Point3::new(1.0, 0.0, 0.0), shared[1]], n);
        b.add_triangle([shared[0], shared[1], Point3::new(-1.0, 0.0, 0.0)], n);
        b.add_triangle([shared[0], shared[1], Point3::new(0.0, 0.0, 1.0)], n);
        let mesh = b.build().unwrap();

        let segments = collect_visible_segments(&mesh, ViewDirection::Front);
        // The shared edge falls through to not visible; only the six
        // outer boundary edges remain (seven would mean it leaked).
        assert_eq!(segments.len(), 6);
    }
}
