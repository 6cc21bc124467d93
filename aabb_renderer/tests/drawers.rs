use aabb_engine::geometry::{Aabb, EDGE_INDICES};
use aabb_engine::math::DegenerateW;
use aabb_renderer::{BoxDrawer, Color, LineBackend, ScreenSpaceBoundsDrawer};
use nalgebra::Matrix4;

#[derive(Debug, PartialEq)]
enum Call {
    CreateVertexBuffer(usize),
    CreateIndexBuffer(Vec<u8>),
    Upload(usize, Vec<f32>),
    DrawIndexedLines { vertices: usize, indices: usize, count: usize },
    DrawLineLoop { vertices: usize, count: usize },
}

#[derive(Default)]
struct RecordingBackend {
    next_id: usize,
    calls: Vec<Call>,
}

impl RecordingBackend {
    fn new_id(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }
}

impl LineBackend for RecordingBackend {
    type Buffer = usize;

    fn create_vertex_buffer(&mut self, len: usize) -> usize {
        self.calls.push(Call::CreateVertexBuffer(len));
        self.new_id()
    }

    fn create_index_buffer(&mut self, indices: &[u8]) -> usize {
        self.calls.push(Call::CreateIndexBuffer(indices.to_vec()));
        self.new_id()
    }

    fn upload_vertices(&mut self, buffer: &usize, vertices: &[f32]) {
        self.calls.push(Call::Upload(*buffer, vertices.to_vec()));
    }

    fn draw_indexed_lines(
        &mut self,
        vertices: &usize,
        indices: &usize,
        count: usize,
        _transform: &Matrix4<f32>,
        _color: &Color,
    ) {
        self.calls.push(Call::DrawIndexedLines {
            vertices: *vertices,
            indices: *indices,
            count,
        });
    }

    fn draw_line_loop(&mut self, vertices: &usize, count: usize, _color: &Color) {
        self.calls.push(Call::DrawLineLoop {
            vertices: *vertices,
            count,
        });
    }
}

const WHITE: Color = [1., 1., 1., 1.];

#[test]
fn box_drawer_creates_buffers_once() {
    let mut backend = RecordingBackend::default();
    let drawer = BoxDrawer::new(&mut backend);
    assert_eq!(
        backend.calls,
        vec![
            Call::CreateVertexBuffer(24),
            Call::CreateIndexBuffer(EDGE_INDICES.to_vec()),
        ]
    );

    let aabb = Aabb::from_bounds([0., 0., 0.], [1., 2., 3.]);
    drawer.draw_outlines(&mut backend, &aabb, &Matrix4::identity(), &WHITE);
    drawer.draw_outlines(&mut backend, &aabb, &Matrix4::identity(), &WHITE);

    let creations = backend
        .calls
        .iter()
        .filter(|c| match c {
            Call::CreateVertexBuffer(_) | Call::CreateIndexBuffer(_) => true,
            _ => false,
        })
        .count();
    assert_eq!(creations, 2);
    assert_eq!(backend.calls.len(), 6);
}

#[test]
fn box_drawer_uploads_corners_and_draws_all_edges() {
    let mut backend = RecordingBackend::default();
    let drawer = BoxDrawer::new(&mut backend);
    let aabb = Aabb::from_bounds([0., 0., 0.], [1., 2., 3.]);
    drawer.draw_outlines(&mut backend, &aabb, &Matrix4::identity(), &WHITE);

    let expected: Vec<f32> = aabb.extract_vertices().iter().map(|v| *v as f32).collect();
    assert_eq!(backend.calls[2], Call::Upload(1, expected));
    assert_eq!(
        backend.calls[3],
        Call::DrawIndexedLines {
            vertices: 1,
            indices: 2,
            count: 24
        }
    );
}

#[test]
fn screen_space_drawer_skips_boxes_without_bounds() {
    let mut backend = RecordingBackend::default();
    let drawer = ScreenSpaceBoundsDrawer::new(&mut backend);
    let aabb = Aabb::from_bounds([-0.5, -0.5, -0.5], [0.5, 0.5, 0.5]);
    drawer.draw(&mut backend, &aabb, &WHITE);
    assert_eq!(backend.calls, vec![Call::CreateVertexBuffer(8)]);
}

#[test]
fn screen_space_drawer_draws_closed_loop() {
    let mut backend = RecordingBackend::default();
    let drawer = ScreenSpaceBoundsDrawer::new(&mut backend);
    let mut aabb = Aabb::from_bounds([-0.5, -0.25, -0.5], [0.5, 0.75, 0.5]);
    aabb.calculate_screen_space_bounds(&Matrix4::identity(), DegenerateW::Divide);
    drawer.draw(&mut backend, &aabb, &WHITE);
    assert_eq!(
        backend.calls[1..],
        [
            Call::Upload(1, vec![-0.5, -0.25, 0.5, -0.25, 0.5, 0.75, -0.5, 0.75]),
            Call::DrawLineLoop {
                vertices: 1,
                count: 4
            },
        ]
    );
}
