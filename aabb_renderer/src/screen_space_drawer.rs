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

use crate::backend::{Color, LineBackend};
use aabb_engine::geometry::Aabb;
use log::info;

const NUM_CORNERS: usize = 4;

/// Outlines the screen-space rectangle last computed for a box.
pub struct ScreenSpaceBoundsDrawer<B: LineBackend> {
    buffer_position: B::Buffer,
}

impl<B: LineBackend> ScreenSpaceBoundsDrawer<B> {
    pub fn new(backend: &mut B) -> Self {
        info!("Creating screen-space bounds vertex buffer.");
        ScreenSpaceBoundsDrawer {
            buffer_position: backend.create_vertex_buffer(NUM_CORNERS * 2),
        }
    }

    /// Does nothing if the box has no screen-space bounds.
    pub fn draw(&self, backend: &mut B, aabb: &Aabb, color: &Color) {
        let bounds = match aabb.screen_space_bounds() {
            Some(bounds) => bounds,
            None => return,
        };
        let mut vertices = [0f32; NUM_CORNERS * 2];
        for (dst, src) in vertices.iter_mut().zip(bounds.outline_vertices().iter()) {
            *dst = *src as f32;
        }
        backend.upload_vertices(&self.buffer_position, &vertices);
        backend.draw_line_loop(&self.buffer_position, NUM_CORNERS, color);
    }
}
