//! Binary STL parsing.
//!
//! Layout: 80-byte header (ignored), u32 little-endian triangle count,
//! then 50 bytes per triangle: 3xf32 normal, 3x3xf32 vertices, 2-byte
//! attribute field (ignored).

use orthoview_math::{Point3, Vec3};

use crate::error::{Result, StlError};
use crate::mesh::MeshBuilder;

const HEADER_LEN: usize = 80;
const COUNT_LEN: usize = 4;
const TRIANGLE_LEN: usize = 50;

/// Parse a binary STL buffer into the builder.
///
/// Fails with [`StlError::Format`] when the buffer cannot hold the header
/// and count, and [`StlError::Truncated`] when the declared triangle count
/// overruns the buffer.
pub(crate) fn parse_binary(data: &[u8], builder: &mut MeshBuilder) -> Result<()> {
    if data.len() < HEADER_LEN + COUNT_LEN {
        return Err(StlError::format(format!(
            "binary STL needs at least 84 bytes, found {}",
            data.len()
        )));
    }

    let count = u32::from_le_bytes([data[80], data[81], data[82], data[83]]) as usize;
    let expected = HEADER_LEN + COUNT_LEN + count * TRIANGLE_LEN;
    if expected > data.len() {
        return Err(StlError::Truncated {
            expected,
            actual: data.len(),
        });
    }

    let mut offset = HEADER_LEN + COUNT_LEN;
    for _ in 0..count {
        let normal = Vec3::new(
            read_f32(data, offset),
            read_f32(data, offset + 4),
            read_f32(data, offset + 8),
        );
        offset += 12;

        let mut corners = [Point3::origin(); 3];
        for corner in &mut corners {
            *corner = Point3::new(
                read_f32(data, offset),
                read_f32(data, offset + 4),
                read_f32(data, offset + 8),
            );
            offset += 12;
        }

        // Attribute byte count, unused.
        offset += 2;

        builder.add_triangle(corners, normal);
    }

    Ok(())
}

fn read_f32(data: &[u8], offset: usize) -> f64 {
    f64::from(f32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encode triangles into a binary STL buffer.
    fn encode(triangles: &[([f32; 3], [[f32; 3]; 3])]) -> Vec<u8> {
        let mut data = vec![0u8; HEADER_LEN];
        data.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
        for (normal, corners) in triangles {
            for c in normal {
                data.extend_from_slice(&c.to_le_bytes());
            }
            for corner in corners {
                for c in corner {
                    data.extend_from_slice(&c.to_le_bytes());
                }
            }
            data.extend_from_slice(&0u16.to_le_bytes());
        }
        data
    }

    #[test]
    fn test_single_triangle() {
        let data = encode(&[(
            [0.0, 0.0, 1.0],
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        )]);
        let mut b = MeshBuilder::new();
        parse_binary(&data, &mut b).unwrap();
        let mesh = b.build().unwrap();
        assert_eq!(mesh.num_faces(), 1);
        assert_eq!(mesh.num_vertices(), 3);
    }

    #[test]
    fn test_too_small_is_format_error() {
        let mut b = MeshBuilder::new();
        let err = parse_binary(&[0u8; 40], &mut b).unwrap_err();
        assert!(matches!(err, StlError::Format(_)));
    }

    #[test]
    fn test_overdeclared_count_is_truncation() {
        let mut data = vec![0u8; HEADER_LEN];
        data.extend_from_slice(&5u32.to_le_bytes());
        // Only one triangle's worth of payload for a declared count of 5.
        data.extend_from_slice(&[0u8; TRIANGLE_LEN]);

        let mut b = MeshBuilder::new();
        let err = parse_binary(&data, &mut b).unwrap_err();
        match err {
            StlError::Truncated { expected, actual } => {
                assert_eq!(expected, 84 + 5 * TRIANGLE_LEN);
                assert_eq!(actual, 84 + TRIANGLE_LEN);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_count_parses_but_builds_empty() {
        let mut data = vec![0u8; HEADER_LEN];
        data.extend_from_slice(&0u32.to_le_bytes());
        let mut b = MeshBuilder::new();
        parse_binary(&data, &mut b).unwrap();
        assert!(matches!(b.build(), Err(StlError::NoValidFaces)));
    }
}
