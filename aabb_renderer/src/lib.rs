// Copyright 2016 The Cartographer Authors
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

//! Wireframe drawing of bounding boxes and their screen-space footprints on top of any line
//! drawing backend.

pub mod backend;
pub mod box_drawer;
pub mod screen_space_drawer;

pub use crate::backend::{Color, LineBackend};
pub use crate::box_drawer::BoxDrawer;
pub use crate::screen_space_drawer::ScreenSpaceBoundsDrawer;
