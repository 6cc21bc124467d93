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
use aabb_engine::geometry::{Aabb, EDGE_INDICES};
use log::info;
use nalgebra::Matrix4;

const NUM_VERTEX_FLOATS: usize = 8 * 3;

pub struct BoxDrawer<B: LineBackend> {
    // vertex buffer: the 8 corners, rewritten on every draw
    buffer_position: B::Buffer,
    // index buffer for the 12 edges of the box
    buffer_indices: B::Buffer,
}

impl<B: LineBackend> BoxDrawer<B> {
    pub fn new(backend: &mut B) -> Self {
        info!("Creating AABB vertex buffers.");
        let buffer_position = backend.create_vertex_buffer(NUM_VERTEX_FLOATS);
        let buffer_indices = backend.create_index_buffer(&EDGE_INDICES);
        BoxDrawer {
            buffer_position,
            buffer_indices,
        }
    }

    // Draws the outline of 'aabb' using 'color'. The corners are given in world space and
    // 'world_to_gl' takes them into clip space.
    pub fn draw_outlines(
        &self,
        backend: &mut B,
        aabb: &Aabb,
        world_to_gl: &Matrix4<f32>,
        color: &Color,
    ) {
        let mut vertices = [0f32; NUM_VERTEX_FLOATS];
        for (dst, src) in vertices.iter_mut().zip(aabb.extract_vertices().iter()) {
            *dst = *src as f32;
        }
        backend.upload_vertices(&self.buffer_position, &vertices);
        backend.draw_indexed_lines(
            &self.buffer_position,
            &self.buffer_indices,
            EDGE_INDICES.len(),
            world_to_gl,
            color,
        );
    }
}
