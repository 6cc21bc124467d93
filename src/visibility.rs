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

//! Per-frame culling and level-of-detail selection over many boxes.

use crate::config::{Settings, UseLod};
use crate::errors::*;
use crate::geometry::Aabb;
use crate::math::Visibility;
use log::debug;
use nalgebra::{Matrix4, Vector2};
use serde_derive::Serialize;
use std::cmp::{self, Ordering};

/// What one frame knows about a box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub visibility: Visibility,
    /// See [`crate::geometry::ScreenSpaceBounds::area`]. 0 for boxes outside the frustum.
    pub screen_area: f64,
    /// Width and height of the footprint in pixels.
    pub pixels: Vector2<f64>,
}

/// Culls `aabb` and, unless it is outside, projects it. The box keeps the projected bounds, or
/// loses any old ones when it is outside.
///
/// `settings` must have passed [`Settings::validate`], otherwise the area and pixel sizes are
/// meaningless.
pub fn evaluate(aabb: &mut Aabb, clip_from_world: &Matrix4<f64>, settings: &Settings) -> Evaluation {
    let visibility = aabb.clip_and_apply(clip_from_world).visibility();
    if !visibility.is_visible() {
        return Evaluation {
            visibility,
            screen_area: 0.,
            pixels: Vector2::zeros(),
        };
    }
    let resolution = settings.resolution();
    let bounds = aabb.calculate_screen_space_bounds(clip_from_world, settings.degenerate_w);
    Evaluation {
        visibility,
        screen_area: aabb.screen_space_area(&resolution),
        pixels: bounds.size_in_pixels(&resolution),
    }
}

/// A box together with the number of points it holds.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub aabb: Aabb,
    pub num_points: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibleBox {
    /// Index into the candidates handed to [`select_visible`].
    pub index: usize,
    pub visibility: Visibility,
    /// Keep every n-th point.
    pub level_of_detail: u64,
    pub pixels: Vector2<f64>,
}

impl VisibleBox {
    pub fn pixel_area(&self) -> f64 {
        self.pixels.x * self.pixels.y
    }
}

/// Returns the candidates that are in view and large enough on screen, biggest first.
pub fn select_visible(
    candidates: &mut [Candidate],
    clip_from_world: &Matrix4<f64>,
    settings: &Settings,
) -> Result<Vec<VisibleBox>> {
    settings.validate()?;
    let mut visible = Vec::new();
    for (index, candidate) in candidates.iter_mut().enumerate() {
        if candidate.aabb.is_empty() {
            debug!("Skipping empty box {}.", index);
            continue;
        }
        let evaluation = evaluate(&mut candidate.aabb, clip_from_world, settings);
        if !evaluation.visibility.is_visible() {
            continue;
        }

        let pixels = evaluation.pixels;
        let visible_pixels = pixels.x * pixels.y;
        if pixels.x < settings.min_pixels
            || pixels.y < settings.min_pixels
            || visible_pixels < settings.min_pixels_sq
        {
            continue;
        }

        let level_of_detail = match settings.use_lod {
            UseLod::No => 1,
            // Simple heuristic: keep one point for every four pixels.
            UseLod::Yes => cmp::max(
                1,
                (candidate.num_points as f64 / (visible_pixels / 4.)) as u64,
            ),
        };

        visible.push(VisibleBox {
            index,
            visibility: evaluation.visibility,
            level_of_detail,
            pixels,
        });
    }

    visible.sort_by(|a, b| {
        b.pixel_area()
            .partial_cmp(&a.pixel_area())
            .unwrap_or(Ordering::Equal)
    });
    debug!(
        "{} of {} boxes selected for drawing.",
        visible.len(),
        candidates.len()
    );
    Ok(visible)
}
