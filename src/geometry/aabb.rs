//! Axis-aligned bounding box.

use crate::errors::*;
use crate::geometry::ScreenSpaceBounds;
use crate::math::{self, ClipPlanes, ClipResult, DegenerateW};
use log::debug;
use nalgebra::{Matrix4, Point3, Vector2, Vector3};
use serde_derive::{Deserialize, Serialize};

/// Start value of the running minimum (and negated, of the running maximum) when scanning a
/// point cloud. Coordinates are assumed to be well inside this range.
pub const EMPTY_EXTENT: f64 = 5_000_000.0;

/// Line list over the corners returned by [`Aabb::corners`]: the bottom quad, the top quad and
/// the four vertical edges connecting them.
pub const EDGE_INDICES: [u8; 24] = [
    0, 1, 1, 2, 2, 3, 3, 0, // bottom
    4, 5, 5, 6, 6, 7, 7, 4, // top
    0, 4, 1, 5, 2, 6, 3, 7, // vertical
];

/// An axis-aligned bounding box, optionally carrying its last projected footprint in
/// normalized device coordinates.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Aabb {
    mins: Point3<f64>,
    maxs: Point3<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    screen_space_bounds: Option<ScreenSpaceBounds>,
}

impl Aabb {
    /// Creates a box from its extents as given. Nothing checks that `mins <= maxs`.
    pub fn new(mins: Point3<f64>, maxs: Point3<f64>) -> Self {
        Aabb {
            mins,
            maxs,
            screen_space_bounds: None,
        }
    }

    pub fn from_bounds(mins: [f64; 3], maxs: [f64; 3]) -> Self {
        Self::new(
            Point3::new(mins[0], mins[1], mins[2]),
            Point3::new(maxs[0], maxs[1], maxs[2]),
        )
    }

    /// The inverted box every scan starts from. It stays like this if no point is seen.
    pub fn empty() -> Self {
        Self::new(
            Point3::new(EMPTY_EXTENT, EMPTY_EXTENT, EMPTY_EXTENT),
            Point3::new(-EMPTY_EXTENT, -EMPTY_EXTENT, -EMPTY_EXTENT),
        )
    }

    /// Computes the bounds of a flat list of x, y, z triples. An empty list yields
    /// [`Aabb::empty`], which is not an error.
    pub fn from_point_cloud(points: &[f64]) -> Result<Self> {
        if points.len() % 3 != 0 {
            return Err(ErrorKind::InvalidPointCloudLength(points.len()).into());
        }
        debug!("Calculating AABB for {} points.", points.len() / 3);
        let mut aabb = Self::empty();
        for xyz in points.chunks_exact(3) {
            aabb.grow(Point3::new(xyz[0], xyz[1], xyz[2]));
        }
        Ok(aabb)
    }

    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point3<f64>>,
    {
        points.into_iter().fold(Self::empty(), |mut aabb, p| {
            aabb.grow(*p);
            aabb
        })
    }

    pub fn min(&self) -> &Point3<f64> {
        &self.mins
    }

    pub fn max(&self) -> &Point3<f64> {
        &self.maxs
    }

    pub fn grow(&mut self, p: Point3<f64>) {
        for i in 0..3 {
            self.mins[i] = self.mins[i].min(p[i]);
            self.maxs[i] = self.maxs[i].max(p[i]);
        }
    }

    /// True if the box is inverted along any axis, e.g. because it was built from no points.
    pub fn is_empty(&self) -> bool {
        (0..3).any(|i| self.mins[i] > self.maxs[i])
    }

    pub fn contains(&self, p: &Point3<f64>) -> bool {
        nalgebra::partial_le(&self.mins, p) && nalgebra::partial_le(p, &self.maxs)
    }

    /// The eight corners. The bottom quad (y = min) comes first, walked from
    /// (min x, min z) over (min x, max z), (max x, max z) to (max x, min z), followed by the
    /// same walk at y = max. [`EDGE_INDICES`] and the frustum tests rely on this order.
    pub fn corners(&self) -> [Point3<f64>; 8] {
        let (lo, hi) = (&self.mins, &self.maxs);
        [
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
            Point3::new(hi.x, hi.y, lo.z),
        ]
    }

    /// [`Aabb::corners`] flattened into 24 coordinates, ready for a vertex buffer.
    pub fn extract_vertices(&self) -> [f64; 24] {
        let mut vertices = [0.; 24];
        for (chunk, corner) in vertices.chunks_exact_mut(3).zip(self.corners().iter()) {
            chunk.copy_from_slice(corner.coords.as_slice());
        }
        vertices
    }

    pub fn centroid(&self) -> Point3<f64> {
        nalgebra::center(&self.mins, &self.maxs)
    }

    pub fn diag(&self) -> Vector3<f64> {
        self.maxs - self.mins
    }

    pub fn span_length(&self) -> f64 {
        self.diag().norm()
    }

    /// Areas of the faces orthogonal to x, y and z, i.e. (yz, xz, xy).
    pub fn face_areas(&self) -> Vector3<f64> {
        let d = self.diag();
        Vector3::new(d.y * d.z, d.x * d.z, d.x * d.y)
    }

    /// Converts between y-up and z-up: y takes the old z and z takes the negated old y, for
    /// both extents.
    pub fn swap_yz(&mut self) {
        fn swap(p: &mut Point3<f64>) {
            let y = p.y;
            p.y = p.z;
            p.z = -y;
        }
        swap(&mut self.mins);
        swap(&mut self.maxs);
    }

    /// Classifies the box against the frustum of `clip_from_world`. The box is not modified;
    /// see [`ClipResult::apply`].
    pub fn clip(&self, clip_from_world: &Matrix4<f64>) -> ClipResult {
        ClipPlanes::from_matrix(clip_from_world).classify(self)
    }

    /// Like [`Aabb::clip`], but drops the screen-space bounds right away if the box is outside.
    pub fn clip_and_apply(&mut self, clip_from_world: &Matrix4<f64>) -> ClipResult {
        let result = self.clip(clip_from_world);
        result.apply(self);
        result
    }

    pub fn screen_space_bounds(&self) -> Option<&ScreenSpaceBounds> {
        self.screen_space_bounds.as_ref()
    }

    pub fn clear_screen_space_bounds(&mut self) {
        self.screen_space_bounds = None;
    }

    /// Projects the corners with `clip_from_world` and stores their bounding rectangle in
    /// normalized device coordinates.
    pub fn calculate_screen_space_bounds(
        &mut self,
        clip_from_world: &Matrix4<f64>,
        degenerate_w: DegenerateW,
    ) -> ScreenSpaceBounds {
        let bounds = math::project_to_ndc(clip_from_world, &self.corners(), degenerate_w);
        self.screen_space_bounds = Some(bounds);
        bounds
    }

    /// Screen-space area for `resolution`, or 0 if no bounds have been computed.
    pub fn screen_space_area(&self, resolution: &Vector2<f64>) -> f64 {
        self.screen_space_bounds
            .as_ref()
            .map_or(0., |bounds| bounds.area(resolution))
    }

    pub fn screen_space_centroid(&self) -> Option<Vector2<f64>> {
        self.screen_space_bounds.as_ref().map(|b| b.centroid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_points() -> Vec<f64> {
        vec![
            1.0, -2.0, 3.0, //
            -4.5, 0.25, 7.0, //
            2.0, 8.0, -1.0, //
            0.0, 0.0, 0.0, //
        ]
    }

    #[test]
    fn builds_from_point_cloud() {
        let aabb = Aabb::from_point_cloud(&sample_points()).unwrap();
        assert_eq!(*aabb.min(), Point3::new(-4.5, -2.0, -1.0));
        assert_eq!(*aabb.max(), Point3::new(2.0, 8.0, 7.0));
        assert!(!aabb.is_empty());
        assert!(aabb.screen_space_bounds().is_none());
    }

    #[test]
    fn all_points_are_contained() {
        let points = sample_points();
        let aabb = Aabb::from_point_cloud(&points).unwrap();
        for i in 0..3 {
            assert!(aabb.min()[i] <= aabb.max()[i]);
        }
        for xyz in points.chunks(3) {
            assert!(aabb.contains(&Point3::new(xyz[0], xyz[1], xyz[2])));
        }
    }

    #[test]
    fn single_point_gives_degenerate_box() {
        let aabb = Aabb::from_point_cloud(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(aabb.min(), aabb.max());
        assert!(!aabb.is_empty());
    }

    #[test]
    fn empty_point_cloud_gives_inverted_box() {
        let aabb = Aabb::from_point_cloud(&[]).unwrap();
        assert_eq!(*aabb.min(), Point3::new(5e6, 5e6, 5e6));
        assert_eq!(*aabb.max(), Point3::new(-5e6, -5e6, -5e6));
        assert!(aabb.is_empty());
        assert_eq!(aabb, Aabb::empty());
    }

    #[test]
    fn rejects_incomplete_triples() {
        let err = Aabb::from_point_cloud(&[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidPointCloudLength(4) => (),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn typed_points_match_flat_points() {
        let flat = sample_points();
        let points: Vec<Point3<f64>> = flat
            .chunks(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        assert_eq!(
            Aabb::from_points(&points),
            Aabb::from_point_cloud(&flat).unwrap()
        );
    }

    #[test]
    fn from_bounds_does_not_reorder() {
        let aabb = Aabb::from_bounds([1., 1., 1.], [0., 0., 0.]);
        assert_eq!(*aabb.min(), Point3::new(1., 1., 1.));
        assert!(aabb.is_empty());
    }

    #[test]
    fn vertices_follow_documented_order() {
        let aabb = Aabb::from_bounds([0., 10., 20.], [1., 11., 21.]);
        #[rustfmt::skip]
        let expected = [
            0., 10., 20.,
            0., 10., 21.,
            1., 10., 21.,
            1., 10., 20.,
            0., 11., 20.,
            0., 11., 21.,
            1., 11., 21.,
            1., 11., 20.,
        ];
        assert_eq!(aabb.extract_vertices(), expected);
    }

    #[test]
    fn corners_cover_all_combinations() {
        let aabb = Aabb::from_bounds([-1., -2., -3.], [1., 2., 3.]);
        let corners = aabb.corners();
        for &x in &[-1., 1.] {
            for &y in &[-2., 2.] {
                for &z in &[-3., 3.] {
                    let count = corners
                        .iter()
                        .filter(|c| **c == Point3::new(x, y, z))
                        .count();
                    assert_eq!(count, 1);
                }
            }
        }
    }

    #[test]
    fn edges_connect_corners_differing_in_one_axis() {
        let aabb = Aabb::from_bounds([0., 0., 0.], [1., 2., 3.]);
        let corners = aabb.corners();
        for edge in EDGE_INDICES.chunks(2) {
            let delta = corners[edge[1] as usize] - corners[edge[0] as usize];
            let differing_axes = delta.iter().filter(|d| **d != 0.).count();
            assert_eq!(differing_axes, 1, "edge {:?}", edge);
        }
    }

    #[test]
    fn centroid_is_midpoint() {
        let aabb = Aabb::from_bounds([0., 0., 0.], [2., 4., 6.]);
        assert_eq!(aabb.centroid(), Point3::new(1., 2., 3.));
    }

    #[test]
    fn face_areas_per_axis() {
        let aabb = Aabb::from_bounds([0., 0., 0.], [2., 3., 4.]);
        assert_eq!(aabb.face_areas(), Vector3::new(12., 8., 6.));
    }

    #[test]
    fn span_length_is_diagonal() {
        let aabb = Aabb::from_bounds([0., 0., 0.], [1., 2., 2.]);
        assert_relative_eq!(aabb.span_length(), 3.);
    }

    #[test]
    fn swap_yz_reads_before_writing() {
        let mut aabb = Aabb::from_bounds([1., 2., 3.], [4., 5., 6.]);
        aabb.swap_yz();
        assert_eq!(*aabb.min(), Point3::new(1., 3., -2.));
        assert_eq!(*aabb.max(), Point3::new(4., 6., -5.));
    }

    #[test]
    fn swap_yz_twice_negates_y_and_z() {
        let original = Aabb::from_bounds([1., 2., 3.], [4., 5., 6.]);
        let mut aabb = original.clone();
        aabb.swap_yz();
        aabb.swap_yz();
        assert_eq!(*aabb.min(), Point3::new(1., -2., -3.));
        assert_eq!(*aabb.max(), Point3::new(4., -5., -6.));
        aabb.swap_yz();
        aabb.swap_yz();
        assert_eq!(aabb, original);
    }

    #[test]
    fn area_without_bounds_is_zero() {
        let aabb = Aabb::from_bounds([0., 0., 0.], [1., 1., 1.]);
        assert_eq!(aabb.screen_space_area(&Vector2::new(640., 480.)), 0.);
        assert!(aabb.screen_space_centroid().is_none());
    }

    #[test]
    fn serializes_without_absent_bounds() {
        let aabb = Aabb::from_bounds([0., 0., 0.], [1., 1., 1.]);
        let json = serde_json::to_string(&aabb).unwrap();
        assert!(!json.contains("screen_space_bounds"));
        let parsed: Aabb = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, aabb);
    }
}
