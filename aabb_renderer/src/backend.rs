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

use nalgebra::Matrix4;

/// RGBA, each channel in [0, 1].
pub type Color = [f32; 4];

/// The little a graphics API has to offer for drawing line lists and loops.
///
/// Buffers are created up front and handed back on every draw, so an implementation never has
/// to create GPU resources in the middle of a frame.
pub trait LineBackend {
    type Buffer;

    /// A dynamic buffer holding `len` floats.
    fn create_vertex_buffer(&mut self, len: usize) -> Self::Buffer;

    /// A static buffer holding `indices`.
    fn create_index_buffer(&mut self, indices: &[u8]) -> Self::Buffer;

    fn upload_vertices(&mut self, buffer: &Self::Buffer, vertices: &[f32]);

    /// Draws `count` indices as a line list of 3D vertices transformed by `transform`.
    fn draw_indexed_lines(
        &mut self,
        vertices: &Self::Buffer,
        indices: &Self::Buffer,
        count: usize,
        transform: &Matrix4<f32>,
        color: &Color,
    );

    /// Draws the first `count` 2D vertices as a closed loop, already in normalized device
    /// coordinates.
    fn draw_line_loop(&mut self, vertices: &Self::Buffer, count: usize, color: &Color);
}
