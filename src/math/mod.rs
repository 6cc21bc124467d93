// Copyright 2016 Google Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::errors::*;
use crate::geometry::ScreenSpaceBounds;
use log::debug;
use nalgebra::{Matrix4, Point2, Point3};
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod frustum;
pub mod perspective;
pub use frustum::*;
pub use perspective::*;

/// Smallest clip-space w that is still treated as in front of the eye.
pub const MIN_W: f64 = 1e-6;

/// Builds a matrix from 16 values in column-major order, the layout graphics APIs use.
pub fn matrix_from_column_slice(values: &[f64]) -> Result<Matrix4<f64>> {
    if values.len() != 16 {
        return Err(ErrorKind::InvalidMatrixLength(values.len()).into());
    }
    Ok(Matrix4::from_column_slice(values))
}

/// What to do when a corner lands at or behind the eye plane (w <= [`MIN_W`]) while
/// projecting, where dividing by w no longer yields a meaningful screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateW {
    /// Divide anyway. Corners behind the eye get mirrored and the bounds can be arbitrary. A
    /// corner with w == 0 yields infinite or NaN coordinates, and a NaN is carried into the
    /// bounds.
    Divide,
    /// Treat the box as covering the whole viewport.
    FullScreen,
}

impl Default for DegenerateW {
    fn default() -> Self {
        DegenerateW::FullScreen
    }
}

impl FromStr for DegenerateW {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "divide" => Ok(DegenerateW::Divide),
            "full-screen" | "full_screen" => Ok(DegenerateW::FullScreen),
            other => Err(format!(
                "Unknown policy '{}', expected 'divide' or 'full-screen'.",
                other
            )),
        }
    }
}

impl fmt::Display for DegenerateW {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DegenerateW::Divide => write!(f, "divide"),
            DegenerateW::FullScreen => write!(f, "full-screen"),
        }
    }
}

/// Transforms `points` into clip space, divides by w and returns the bounding rectangle of the
/// resulting x and y.
pub fn project_to_ndc(
    clip_from_world: &Matrix4<f64>,
    points: &[Point3<f64>],
    degenerate_w: DegenerateW,
) -> ScreenSpaceBounds {
    if degenerate_w == DegenerateW::FullScreen
        && points
            .iter()
            .any(|p| (clip_from_world * p.to_homogeneous()).w <= MIN_W)
    {
        debug!("Box reaches behind the eye plane, assuming it covers the full screen.");
        return ScreenSpaceBounds::full_screen();
    }
    ScreenSpaceBounds::from_points(points.iter().map(|p| {
        let clip = clip_from_world * p.to_homogeneous();
        let ndc = clip / clip.w;
        Point2::new(ndc.x, ndc.y)
    }))
}
