//! Core types for orthographic view generation.

use serde::{Deserialize, Serialize};

use orthoview_math::{Point3, Vec3};

/// A 2D point in view coordinates.
///
/// We use a custom type instead of nalgebra::Point2 to enable serde
/// serialization without requiring nalgebra's serde feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a new 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A projected line segment in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2D {
    /// Start point.
    pub start: Point2D,
    /// End point.
    pub end: Point2D,
}

impl Line2D {
    /// Create a new segment.
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Length of the segment.
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}

/// One of the six canonical axis-aligned viewing directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ViewDirection {
    /// Front view: looking along -Z, drawing (x, y).
    #[default]
    Front,
    /// Back view: looking along +Z, drawing (-x, y).
    Back,
    /// Left view: looking along +X, drawing (-z, y).
    Left,
    /// Right view: looking along -X, drawing (z, y).
    Right,
    /// Top view: looking along -Y, drawing (x, -z).
    Top,
    /// Bottom view: looking along +Y, drawing (x, z).
    Bottom,
}

impl ViewDirection {
    /// All six views in the fixed output order.
    pub const ALL: [ViewDirection; 6] = [
        ViewDirection::Front,
        ViewDirection::Back,
        ViewDirection::Left,
        ViewDirection::Right,
        ViewDirection::Top,
        ViewDirection::Bottom,
    ];

    /// Canonical lowercase name of the view.
    pub fn name(&self) -> &'static str {
        match self {
            ViewDirection::Front => "front",
            ViewDirection::Back => "back",
            ViewDirection::Left => "left",
            ViewDirection::Right => "right",
            ViewDirection::Top => "top",
            ViewDirection::Bottom => "bottom",
        }
    }

    /// Unit vector pointing from the viewer into the model.
    pub fn view_vector(&self) -> Vec3 {
        match self {
            ViewDirection::Front => Vec3::new(0.0, 0.0, -1.0),
            ViewDirection::Back => Vec3::new(0.0, 0.0, 1.0),
            ViewDirection::Left => Vec3::new(1.0, 0.0, 0.0),
            ViewDirection::Right => Vec3::new(-1.0, 0.0, 0.0),
            ViewDirection::Top => Vec3::new(0.0, -1.0, 0.0),
            ViewDirection::Bottom => Vec3::new(0.0, 1.0, 0.0),
        }
    }

    /// Map a 3D point into this view's 2D drawing plane.
    ///
    /// Each mapping looks into the model along [`Self::view_vector`] with a
    /// consistent up/right convention.
    pub fn project(&self, p: &Point3) -> Point2D {
        match self {
            ViewDirection::Front => Point2D::new(p.x, p.y),
            ViewDirection::Back => Point2D::new(-p.x, p.y),
            ViewDirection::Left => Point2D::new(-p.z, p.y),
            ViewDirection::Right => Point2D::new(p.z, p.y),
            ViewDirection::Top => Point2D::new(p.x, -p.z),
            ViewDirection::Bottom => Point2D::new(p.x, p.z),
        }
    }
}

/// 2D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundingBox2D {
    /// Minimum X coordinate.
    pub min_x: f64,
    /// Minimum Y coordinate.
    pub min_y: f64,
    /// Maximum X coordinate.
    pub max_x: f64,
    /// Maximum Y coordinate.
    pub max_y: f64,
}

impl BoundingBox2D {
    /// Create an empty bounding box.
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Expand the bounding box to include a point.
    pub fn include_point(&mut self, p: Point2D) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if the bounding box is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Pad each axis by `fraction` of its span, or by `fallback` on an
    /// axis whose span is zero.
    pub fn padded(&self, fraction: f64, fallback: f64) -> Self {
        let pad_x = if self.width() > 0.0 {
            self.width() * fraction
        } else {
            fallback
        };
        let pad_y = if self.height() > 0.0 {
            self.height() * fraction
        } else {
            fallback
        };
        Self {
            min_x: self.min_x - pad_x,
            min_y: self.min_y - pad_y,
            max_x: self.max_x + pad_x,
            max_y: self.max_y + pad_y,
        }
    }

    /// `[xmin, ymin, xmax, ymax]` array form.
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

impl Default for BoundingBox2D {
    fn default() -> Self {
        Self::empty()
    }
}

/// A complete projected view: the output unit handed to the caller.
///
/// Uses array representation for the lines and bbox so the serialized form
/// matches the boundary contract directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionView {
    /// Canonical view name.
    pub name: String,
    /// Visible, merged segments as `[[x0, y0], [x1, y1]]` pairs.
    pub lines: Vec<[[f64; 2]; 2]>,
    /// Padded bounding box `[xmin, ymin, xmax, ymax]`.
    pub bbox: [f64; 4],
}

impl ProjectionView {
    /// Assemble a view from merged segments, computing the padded box.
    ///
    /// A view with no surviving lines gets the fixed box `[0, 0, 1, 1]`.
    pub fn from_lines(direction: ViewDirection, lines: Vec<Line2D>) -> Self {
        let bbox = if lines.is_empty() {
            [0.0, 0.0, 1.0, 1.0]
        } else {
            let mut bounds = BoundingBox2D::empty();
            for line in &lines {
                bounds.include_point(line.start);
                bounds.include_point(line.end);
            }
            bounds.padded(0.05, 0.5).to_array()
        };

        Self {
            name: direction.name().to_string(),
            lines: lines
                .iter()
                .map(|l| [[l.start.x, l.start.y], [l.end.x, l.end.y]])
                .collect(),
            bbox,
        }
    }
}
