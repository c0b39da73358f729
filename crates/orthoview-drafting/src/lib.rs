#![warn(missing_docs)]

//! Six-view orthographic projection for the orthoview pipeline.
//!
//! Takes the decoder's normalized [`Mesh`](orthoview_stl::Mesh) and, for
//! one of the six canonical view directions, produces the visible 2D
//! edges with hidden surfaces removed:
//!
//! 1. Build an edge-adjacency index over the faces.
//! 2. Classify each edge: boundary edges of front-facing faces and
//!    silhouette edges (exactly one front-facing neighbor) are visible.
//! 3. Project visible edges into the view plane, rounding coordinates.
//! 4. Merge collinear runs sharing a direction bucket.
//! 5. Compute a padded bounding box.
//!
//! Each view is a pure function of the mesh; views share no state and may
//! run in parallel.
//!
//! # Example
//!
//! ```ignore
//! use orthoview_drafting::{project_view, ViewDirection};
//!
//! let view = project_view(&mesh, ViewDirection::Front);
//! for [[x0, y0], [x1, y1]] in &view.lines {
//!     println!("({x0}, {y0}) -> ({x1}, {y1})");
//! }
//! ```

pub mod types;

mod edges;
mod merge;

pub use types::{BoundingBox2D, Line2D, Point2D, ProjectionView, ViewDirection};

use orthoview_stl::Mesh;

/// Compute one orthographic view of a mesh.
pub fn project_view(mesh: &Mesh, direction: ViewDirection) -> ProjectionView {
    let segments = edges::collect_visible_segments(mesh, direction);
    let lines = merge::merge_collinear(segments);
    ProjectionView::from_lines(direction, lines)
}
