//! Evaluates a single point cloud against a camera, as described by a JSON scene file.

use crate::config::Settings;
use crate::errors::*;
use crate::geometry::Aabb;
use crate::math::{self, Perspective};
use crate::visibility;
use log::{info, warn};
use nalgebra::{Matrix4, Point3, Vector2, Vector3};
use serde_derive::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A symmetric perspective camera at `eye`, looking down -z.
#[derive(Debug, Clone, Deserialize)]
pub struct Camera {
    pub fovy_degrees: f64,
    pub near: f64,
    pub far: f64,
    #[serde(default)]
    pub eye: [f64; 3],
}

impl Camera {
    pub fn validate(&self) -> Result<()> {
        let invalid =
            |reason: String| -> Result<()> { Err(ErrorKind::InvalidCamera(reason).into()) };
        let fovy = self.fovy_degrees;
        if !(fovy.is_finite() && fovy > 0. && fovy < 180.) {
            return invalid(format!("fovy_degrees must be in (0, 180), got {}.", fovy));
        }
        if !(self.near.is_finite() && self.far.is_finite() && self.near > 0.) {
            return invalid(format!(
                "near and far must be finite with near > 0, got near {} and far {}.",
                self.near, self.far
            ));
        }
        if self.near >= self.far {
            return invalid(format!(
                "near must be less than far, got near {} and far {}.",
                self.near, self.far
            ));
        }
        if self.eye.iter().any(|v| !v.is_finite()) {
            return invalid(format!("eye must be finite, got {:?}.", self.eye));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    /// Flat x, y, z triples.
    pub points: Vec<f64>,
    /// Clip-from-world transform, 16 values in column-major order. Takes precedence over
    /// `camera`.
    #[serde(default)]
    pub matrix: Option<Vec<f64>>,
    #[serde(default)]
    pub camera: Option<Camera>,
    #[serde(default)]
    pub settings: Settings,
}

impl Scene {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .chain_err(|| format!("Could not open scene {}", path.display()))?;
        let scene = serde_json::from_reader(BufReader::new(file))
            .chain_err(|| format!("Could not parse scene {}", path.display()))?;
        Ok(scene)
    }

    pub fn clip_from_world(&self) -> Result<Matrix4<f64>> {
        if let Some(values) = &self.matrix {
            return math::matrix_from_column_slice(values);
        }
        let camera = self
            .camera
            .as_ref()
            .ok_or("A scene needs either a `matrix` or a `camera`.")?;
        camera.validate()?;
        self.settings.validate()?;
        let resolution = self.settings.resolution();
        let perspective = Perspective::new_fov(
            camera.fovy_degrees.to_radians(),
            resolution.x / resolution.y,
            camera.near,
            camera.far,
        );
        let eye = Vector3::new(camera.eye[0], camera.eye[1], camera.eye[2]);
        Ok(perspective.as_matrix() * Matrix4::new_translation(&-eye))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub aabb: Aabb,
    pub empty: bool,
    pub vertices: Vec<f64>,
    pub centroid: Point3<f64>,
    pub face_areas: Vector3<f64>,
    pub span_length: f64,
    /// 0 = outside, 1 = partially inside, 2 = inside.
    pub visibility: u8,
    pub screen_space_area: f64,
    pub screen_space_centroid: Option<Vector2<f64>>,
    pub pixels: Vector2<f64>,
}

pub fn build_report(scene: &Scene) -> Result<Report> {
    scene.settings.validate()?;
    let clip_from_world = scene.clip_from_world()?;
    let mut aabb = Aabb::from_point_cloud(&scene.points)?;
    if aabb.is_empty() {
        warn!("The scene has no points, the bounding box is empty.");
    }

    let evaluation = visibility::evaluate(&mut aabb, &clip_from_world, &scene.settings);
    info!(
        "Box {:?} - {:?} is {:?}.",
        aabb.min(),
        aabb.max(),
        evaluation.visibility
    );

    Ok(Report {
        empty: aabb.is_empty(),
        vertices: aabb.extract_vertices().to_vec(),
        centroid: aabb.centroid(),
        face_areas: aabb.face_areas(),
        span_length: aabb.span_length(),
        visibility: evaluation.visibility.as_u8(),
        screen_space_area: evaluation.screen_area,
        screen_space_centroid: aabb.screen_space_centroid(),
        pixels: evaluation.pixels,
        aabb,
    })
}
