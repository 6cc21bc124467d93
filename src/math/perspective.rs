use nalgebra::Matrix4;
use serde_derive::{Deserialize, Serialize};

/// An OpenGL-style perspective projection looking down -z in eye space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Perspective {
    matrix: Matrix4<f64>,
}

impl Perspective {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Self {
        assert!(
            left <= right,
            "`left` cannot be greater than `right`, found: left: {:?} right: {:?}",
            left,
            right
        );
        assert!(
            bottom <= top,
            "`bottom` cannot be greater than `top`, found: bottom: {:?} top: {:?}",
            bottom,
            top
        );
        assert!(
            near <= far,
            "`near` cannot be greater than `far`, found: near: {:?} far: {:?}",
            near,
            far
        );

        let r0c0 = (2. * near) / (right - left);
        let r0c2 = (right + left) / (right - left);

        let r1c1 = (2. * near) / (top - bottom);
        let r1c2 = (top + bottom) / (top - bottom);

        let r2c2 = -(far + near) / (far - near);
        let r2c3 = -(2. * far * near) / (far - near);

        #[rustfmt::skip]
        let matrix = Matrix4::new(
            r0c0, 0.,   r0c2, 0.,
            0.,   r1c1, r1c2, 0.,
            0.,   0.,   r2c2, r2c3,
            0.,   0.,   -1.,  0.,
        );
        Self { matrix }
    }

    /// Symmetric frustum from a vertical field of view in radians and an aspect ratio
    /// (width / height).
    pub fn new_fov(fovy: f64, aspect: f64, near: f64, far: f64) -> Self {
        let ymax = near * (0.5 * fovy).tan();
        let xmax = ymax * aspect;

        Self::new(-xmax, xmax, -ymax, ymax, near, far)
    }

    pub fn as_matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }
}
