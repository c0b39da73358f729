#![warn(missing_docs)]

//! orthoview — STL to six-view orthographic line drawings.
//!
//! Converts a triangulated surface mesh (ASCII or binary STL bytes) into
//! six 2D line drawings (front, back, left, right, top, bottom) with
//! hidden surfaces removed, the way a mechanical drafting projection
//! would draw them.
//!
//! The pipeline is strictly one-way: bytes → [`Mesh`] → six
//! [`ProjectionView`] records. The decoder normalizes the mesh into a
//! unit-scaled, origin-centered frame; the projection engine then
//! computes each view independently, so the six views fan out in
//! parallel and reassemble in the fixed output order.
//!
//! This crate owns no transport: it takes a fully materialized byte
//! buffer and returns plain values. Upload handling, size caps, and
//! rendering belong to the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! let bytes = std::fs::read("part.stl").unwrap();
//! let views = orthoview::generate_projections(&bytes).unwrap();
//! for view in &views {
//!     println!("{}: {} lines", view.name, view.lines.len());
//! }
//! ```

use rayon::prelude::*;
use thiserror::Error;

pub use orthoview_drafting::{
    project_view, BoundingBox2D, Line2D, Point2D, ProjectionView, ViewDirection,
};
pub use orthoview_stl::{decode_stl, decode_stl_file, Face, Mesh, StlError};

/// The single failure mode the caller sees.
///
/// Every decoder or projection failure is terminal for the call and
/// wrapped here with its cause; there is no partial result — either all
/// six views are produced or none are.
#[derive(Error, Debug)]
pub enum OrthoviewError {
    /// The input bytes could not yield a valid mesh.
    #[error("processing failed: {0}")]
    Processing(#[from] StlError),
}

/// Result type for the end-to-end pipeline.
pub type Result<T> = std::result::Result<T, OrthoviewError>;

/// Decode an STL buffer and compute all six orthographic views.
///
/// Views are always returned in the fixed order front, back, left,
/// right, top, bottom.
pub fn generate_projections(data: &[u8]) -> Result<Vec<ProjectionView>> {
    let mesh = decode_stl(data)?;
    Ok(project_all_views(&mesh))
}

/// Compute all six views of an already-decoded mesh.
///
/// The per-view computations have no data dependency on one another;
/// they run in parallel and the fixed order is applied at collection.
pub fn project_all_views(mesh: &Mesh) -> Vec<ProjectionView> {
    ViewDirection::ALL
        .par_iter()
        .map(|&direction| project_view(mesh, direction))
        .collect()
}
