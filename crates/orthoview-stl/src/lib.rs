#![warn(missing_docs)]

//! STL decoding for the orthoview projection pipeline.
//!
//! Consumes a raw byte buffer holding an ASCII or binary STL file and
//! produces a canonical [`Mesh`]: vertices deduplicated by exact
//! coordinate, degenerate triangles removed, coordinates translated to
//! the origin and uniformly scaled so the largest extent spans 1.0.
//!
//! # Example
//!
//! ```ignore
//! use orthoview_stl::decode_stl;
//!
//! let bytes = std::fs::read("part.stl")?;
//! let mesh = decode_stl(&bytes)?;
//! println!("{} faces, {} vertices", mesh.num_faces(), mesh.num_vertices());
//! ```

pub mod error;
pub mod mesh;

mod ascii;
mod binary;

pub use error::{Result, StlError};
pub use mesh::{Face, Mesh, MeshBuilder};

use std::path::Path;

/// Decode an STL byte buffer into a normalized mesh.
///
/// Format detection is a heuristic: a buffer whose first five bytes spell
/// `solid` (case-insensitively) is parsed as ASCII, everything else as
/// binary. A binary file whose 80-byte header happens to begin with
/// "solid" is therefore misclassified; this is a known limitation of the
/// format itself, not something the decoder special-cases.
pub fn decode_stl(data: &[u8]) -> Result<Mesh> {
    let mut builder = MeshBuilder::new();
    if is_ascii_stl(data) {
        ascii::parse_ascii(data, &mut builder)?;
    } else {
        binary::parse_binary(data, &mut builder)?;
    }
    builder.build()
}

/// Read and decode an STL file from a path.
pub fn decode_stl_file(path: impl AsRef<Path>) -> Result<Mesh> {
    let data = std::fs::read(path)?;
    decode_stl(&data)
}

/// ASCII/binary detection heuristic: first five bytes spell `solid`.
fn is_ascii_stl(data: &[u8]) -> bool {
    data.len() >= 5 && data[..5].eq_ignore_ascii_case(b"solid")
}
