#![warn(missing_docs)]

//! Math types for the orthoview projection pipeline.
//!
//! Thin wrappers around nalgebra providing the point/vector types shared
//! by the STL decoder and the projection engine, plus the tolerance
//! constants both sides agree on.

use nalgebra::{Vector2, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A point in 2D view space.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D view space.
pub type Vec2 = Vector2<f64>;

/// Cross-product magnitude at or below which a triangle counts as degenerate.
pub const DEGENERATE_AREA_EPS: f64 = 1e-10;

/// Perpendicular-distance and minimum-length tolerance for segment merging.
pub const MERGE_EPS: f64 = 1e-6;

/// Decimal places kept when rounding projected coordinates and direction keys.
pub const COORD_DECIMALS: i32 = 6;

/// Round `value` to `decimals` decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb {
    /// Empty box (inverted infinities), ready to accumulate points.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Expand the box to include a point.
    pub fn include_point(&mut self, p: &Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Box enclosing a set of points. Empty input yields an empty box.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Self {
        let mut aabb = Self::empty();
        for p in points {
            aabb.include_point(p);
        }
        aabb
    }

    /// Center of the box.
    pub fn center(&self) -> Point3 {
        Point3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Extent along each axis.
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Largest of the three axis extents.
    pub fn max_extent(&self) -> f64 {
        let e = self.extents();
        e.x.max(e.y).max(e.z)
    }

    /// Check that the box has accumulated at least one point.
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }
}
