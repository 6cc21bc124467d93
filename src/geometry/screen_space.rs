//! The 2D footprint of a projected box.

use nalgebra::{Point2, Vector2};
use serde_derive::{Deserialize, Serialize};

/// A rectangle in normalized device coordinates, where the visible screen is [-1, 1]².
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct ScreenSpaceBounds {
    min: Point2<f64>,
    max: Point2<f64>,
}

impl ScreenSpaceBounds {
    pub fn new(min: Point2<f64>, max: Point2<f64>) -> Self {
        ScreenSpaceBounds { min, max }
    }

    /// The whole viewport.
    pub fn full_screen() -> Self {
        Self::new(Point2::new(-1., -1.), Point2::new(1., 1.))
    }

    /// The bounding rectangle of `points`. Without any point the result is inverted. A NaN
    /// coordinate makes that side of the rectangle NaN rather than being skipped.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point2<f64>>,
    {
        let inverted = Self::new(
            Point2::new(std::f64::INFINITY, std::f64::INFINITY),
            Point2::new(std::f64::NEG_INFINITY, std::f64::NEG_INFINITY),
        );
        points.into_iter().fold(inverted, |mut bounds, p| {
            bounds.min.x = nan_or(bounds.min.x, p.x, f64::min);
            bounds.min.y = nan_or(bounds.min.y, p.y, f64::min);
            bounds.max.x = nan_or(bounds.max.x, p.x, f64::max);
            bounds.max.y = nan_or(bounds.max.y, p.y, f64::max);
            bounds
        })
    }

    pub fn min(&self) -> &Point2<f64> {
        &self.min
    }

    pub fn max(&self) -> &Point2<f64> {
        &self.max
    }

    pub fn span(&self) -> Vector2<f64> {
        self.max - self.min
    }

    /// Half of the span along each axis. Note that this is not the midpoint of the rectangle.
    pub fn centroid(&self) -> Vector2<f64> {
        self.span() / 2.
    }

    /// Side lengths of the rectangle in pixels.
    pub fn size_in_pixels(&self, resolution: &Vector2<f64>) -> Vector2<f64> {
        self.span().component_mul(resolution) / 2.
    }

    /// Projected area for a viewport of `resolution` pixels.
    ///
    /// The bounds are mapped from [-1, 1] to [0, 1] and then clamped to
    /// [0, resolution] per axis, not to [0, 1]. Callers that rely on the clamp to cut off
    /// off-screen parts must clamp their NDC bounds themselves.
    pub fn area(&self, resolution: &Vector2<f64>) -> f64 {
        let to_unit = |v: f64| v * 0.5 + 0.5;
        let clamp = |v: f64, limit: f64| v.min(limit).max(0.);

        let min_x = clamp(to_unit(self.min.x), resolution.x);
        let min_y = clamp(to_unit(self.min.y), resolution.y);
        let max_x = clamp(to_unit(self.max.x), resolution.x);
        let max_y = clamp(to_unit(self.max.y), resolution.y);

        (max_x - min_x) * (max_y - min_y) * resolution.x * resolution.y
    }

    /// The four corners as a closed line loop: (min, min), (max, min), (max, max), (min, max).
    pub fn outline_vertices(&self) -> [f64; 8] {
        [
            self.min.x, self.min.y, //
            self.max.x, self.min.y, //
            self.max.x, self.max.y, //
            self.min.x, self.max.y, //
        ]
    }
}

// `f64::min` and `f64::max` return the other operand for NaN.
fn nan_or(a: f64, b: f64, op: fn(f64, f64) -> f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        std::f64::NAN
    } else {
        op(a, b)
    }
}
