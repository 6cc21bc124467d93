//! Culling a box against the view frustum of a clip-space transform.

use crate::geometry::Aabb;
use log::trace;
use nalgebra::{Matrix4, Vector4};
use serde_derive::{Deserialize, Serialize};

/// Where a box lies with respect to a frustum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Visibility {
    Outside = 0,
    Partial = 1,
    Inside = 2,
}

impl Visibility {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_visible(self) -> bool {
        self != Visibility::Outside
    }
}

/// The outcome of [`ClipPlanes::classify`]. Classifying never touches the box; a box that is
/// outside still carries its old screen-space bounds until the result is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipResult {
    visibility: Visibility,
    invalidates_screen_space: bool,
}

impl ClipResult {
    pub fn new(visibility: Visibility) -> Self {
        ClipResult {
            visibility,
            invalidates_screen_space: visibility == Visibility::Outside,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// True if the box's stored screen-space bounds are stale and should be dropped.
    pub fn invalidates_screen_space(&self) -> bool {
        self.invalidates_screen_space
    }

    pub fn apply(&self, aabb: &mut Aabb) {
        if self.invalidates_screen_space {
            aabb.clear_screen_space_bounds();
        }
    }
}

const PLANE_NAMES: [&str; 6] = ["left", "right", "bottom", "top", "near", "far"];

/// The six planes bounding the clip volume, in world coordinates. A point p lies inside a plane
/// if `plane · (p, 1) >= 0`.
///
/// The planes are extracted from the rows of the clip-from-world matrix (Gribb and Hartmann,
/// "Fast Extraction of Viewing Frustum Planes from the World-View-Projection Matrix"): the
/// w-row plus and minus each of the x, y and z rows. They are not normalized, since only the
/// sign of the distance matters.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipPlanes {
    planes: [Vector4<f64>; 6],
}

impl ClipPlanes {
    pub fn from_matrix(clip_from_world: &Matrix4<f64>) -> Self {
        let row = |i: usize| clip_from_world.row(i).transpose();
        let w = row(3);
        ClipPlanes {
            planes: [
                w + row(0),
                w - row(0),
                w + row(1),
                w - row(1),
                w + row(2),
                w - row(2),
            ],
        }
    }

    /// Left, right, bottom, top, near and far, in that order.
    pub fn planes(&self) -> &[Vector4<f64>; 6] {
        &self.planes
    }

    /// Tests the corners of `aabb` against each plane in turn. The first plane with no corner
    /// on its inner side makes the box `Outside`; the first plane with corners on both sides
    /// makes it `Partial`. A corner exactly on a plane counts as inside.
    pub fn classify(&self, aabb: &Aabb) -> ClipResult {
        let corners = aabb.corners();
        for (plane, name) in self.planes.iter().zip(PLANE_NAMES.iter()) {
            let outside = corners
                .iter()
                .filter(|corner| plane.dot(&corner.to_homogeneous()) < 0.)
                .count();
            let inside = corners.len() - outside;
            trace!("{} plane: {} corners inside, {} outside", name, inside, outside);

            if inside == 0 {
                return ClipResult::new(Visibility::Outside);
            }
            if outside > 0 {
                return ClipResult::new(Visibility::Partial);
            }
        }
        ClipResult::new(Visibility::Inside)
    }
}
