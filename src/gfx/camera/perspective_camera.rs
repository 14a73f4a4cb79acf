use super::camera_utils::Camera;
use cgmath::*;

/// Fixed perspective camera looking from `eye` towards `target`.
///
/// Matches the camera the classroom scenes set up: 60° vertical field of
/// view, near plane 0.1, far plane 1000, Y up.
#[derive(Debug, Clone, Copy)]
pub struct PerspectiveCamera {
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera for PerspectiveCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye);
        let target = Point3::from_vec(self.target);
        let view = Matrix4::look_at_rh(eye, target, self.up);
        let proj = perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    fn eye(&self) -> Vector3<f32> {
        self.eye
    }
}

impl PerspectiveCamera {
    pub fn new(eye: Vector3<f32>, target: Vector3<f32>, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vector3::unit_y(),
            aspect,
            fovy: Deg(60.0).into(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    pub fn with_fovy<A: Into<Rad<f32>>>(mut self, fovy: A) -> Self {
        self.fovy = fovy.into();
        self
    }

    pub fn with_clip_planes(mut self, znear: f32, zfar: f32) -> Self {
        self.znear = znear;
        self.zfar = zfar;
        self
    }

    /// Point the camera at a new target without moving it
    pub fn look_at(&mut self, target: Vector3<f32>) {
        self.target = target;
    }

    pub fn set_position(&mut self, eye: Vector3<f32>) {
        self.eye = eye;
    }

    /// Unit vector from the eye towards the target
    pub fn forward(&self) -> Vector3<f32> {
        (self.target - self.eye).normalize()
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        // A minimised window reports 0x0; keep the last usable aspect
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }
}
