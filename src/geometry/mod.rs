//! Contains geometric primitives: the bounding box itself and its footprint on screen.
mod aabb;
mod screen_space;

pub use aabb::*;
pub use screen_space::*;
