//! ASCII STL parsing via whole-buffer token scanning.
//!
//! The scanner collects every `vertex x y z` triple and every
//! `facet normal nx ny nz` triple in order of appearance and pairs the
//! i-th group of three vertices with the i-th normal. It does not
//! re-validate the `outer loop`/`endfacet` structure between keywords;
//! well-formed interleaving is assumed, matching what a full-buffer
//! pattern extraction would accept.

use orthoview_math::{Point3, Vec3};

use crate::error::{Result, StlError};
use crate::mesh::MeshBuilder;

/// Parse an ASCII STL buffer into the builder.
///
/// Fails with [`StlError::Format`] when no vertex triple is found.
/// A trailing partial group of one or two vertices is ignored.
pub(crate) fn parse_ascii(data: &[u8], builder: &mut MeshBuilder) -> Result<()> {
    let text = String::from_utf8_lossy(data);
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let mut vertices: Vec<Point3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        if token.eq_ignore_ascii_case("vertex") {
            if let Some([x, y, z]) = take_triple(&tokens, i + 1) {
                vertices.push(Point3::new(x, y, z));
                i += 4;
                continue;
            }
        } else if token.eq_ignore_ascii_case("facet")
            && tokens
                .get(i + 1)
                .is_some_and(|t| t.eq_ignore_ascii_case("normal"))
        {
            if let Some([nx, ny, nz]) = take_triple(&tokens, i + 2) {
                normals.push(Vec3::new(nx, ny, nz));
                i += 5;
                continue;
            }
        }
        i += 1;
    }

    if vertices.is_empty() {
        return Err(StlError::format("no vertex data found in ASCII STL"));
    }

    for (tri, corners) in vertices.chunks_exact(3).enumerate() {
        // A missing normal dots to zero against every view direction and
        // classifies as back-facing, the same convention grazing faces get.
        let normal = normals.get(tri).copied().unwrap_or_else(Vec3::zeros);
        builder.add_triangle([corners[0], corners[1], corners[2]], normal);
    }

    Ok(())
}

/// Parse three consecutive numeric tokens starting at `start`.
///
/// Accepts integer, decimal, and exponential notation with optional sign
/// (everything `f64::from_str` accepts).
fn take_triple(tokens: &[&str], start: usize) -> Option<[f64; 3]> {
    let x = tokens.get(start)?.parse().ok()?;
    let y = tokens.get(start + 1)?.parse().ok()?;
    let z = tokens.get(start + 2)?.parse().ok()?;
    Some([x, y, z])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE_FACET: &str = "\
solid single
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid single
";

    #[test]
    fn test_single_facet() {
        let mut b = MeshBuilder::new();
        parse_ascii(SINGLE_FACET.as_bytes(), &mut b).unwrap();
        let mesh = b.build().unwrap();
        assert_eq!(mesh.num_faces(), 1);
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.faces[0].normal, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_exponential_and_signed_numbers() {
        let text = "\
solid e
facet normal -0.0 0.0 1.0e0
outer loop
vertex -1.5e-1 0 0
vertex 2E-1 0 0
vertex 0 +3.25e1 0
endloop
endfacet
endsolid e
";
        let mut b = MeshBuilder::new();
        parse_ascii(text.as_bytes(), &mut b).unwrap();
        let mesh = b.build().unwrap();
        assert_eq!(mesh.num_faces(), 1);
        let xs: Vec<f64> = mesh.faces[0]
            .indices
            .iter()
            .map(|&i| mesh.vertices[i as usize].x)
            .collect();
        // Normalized, but relative ordering of the parsed x values survives.
        assert!(xs[0] < xs[1]);
    }

    #[test]
    fn test_no_vertices_is_format_error() {
        let mut b = MeshBuilder::new();
        let err = parse_ascii(b"solid nothing here endsolid", &mut b).unwrap_err();
        assert!(matches!(err, StlError::Format(_)));
    }

    #[test]
    fn test_trailing_partial_group_ignored() {
        let text = "\
solid t
facet normal 0 0 1
outer loop
vertex 0 0 0
vertex 1 0 0
vertex 0 1 0
endloop
endfacet
endsolid t
vertex 9 9 9
";
        let mut b = MeshBuilder::new();
        parse_ascii(text.as_bytes(), &mut b).unwrap();
        assert_eq!(b.num_faces(), 1);
    }
}
