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

//! Bounding boxes for point clouds: building them, culling them against a view frustum and
//! measuring how much of the screen they cover.

#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;

pub mod config;
// error_chain still generates `description()`.
#[allow(deprecated)]
pub mod errors;
pub mod geometry;
pub mod math;
pub mod report;
pub mod visibility;

pub use crate::geometry::{Aabb, ScreenSpaceBounds};
pub use crate::math::{ClipPlanes, ClipResult, DegenerateW, Visibility};
