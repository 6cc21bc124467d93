//! Tunables for culling and level-of-detail selection.

use crate::errors::*;
use crate::math::DegenerateW;
use nalgebra::Vector2;
use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseLod {
    No,
    Yes,
}

impl Default for UseLod {
    fn default() -> Self {
        UseLod::No
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Viewport size in pixels, width first.
    pub resolution: [f64; 2],
    pub degenerate_w: DegenerateW,
    /// Boxes narrower or lower than this many pixels are not selected.
    pub min_pixels: f64,
    /// Boxes covering fewer pixels than this are not selected.
    pub min_pixels_sq: f64,
    pub use_lod: UseLod,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            resolution: [1920., 1080.],
            degenerate_w: DegenerateW::default(),
            min_pixels: 12.,
            min_pixels_sq: 120.,
            use_lod: UseLod::default(),
        }
    }
}

impl Settings {
    pub fn resolution(&self) -> Vector2<f64> {
        Vector2::new(self.resolution[0], self.resolution[1])
    }

    pub fn validate(&self) -> Result<()> {
        let [width, height] = self.resolution;
        let valid = |v: f64| v.is_finite() && v > 0.;
        if !valid(width) || !valid(height) {
            return Err(ErrorKind::InvalidResolution(width, height).into());
        }
        Ok(())
    }
}
