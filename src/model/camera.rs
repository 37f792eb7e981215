use glam::{Mat4, Vec3};

/// Camera that circles the origin on the XZ plane, always looking at it.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Rotation about +Y in radians.
    pub angle: f32,
    pub radius: f32,
    /// Radians per second.
    pub angular_speed: f32,
    pub up: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl OrbitCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            angle: -0.5,
            radius: 15.0,
            angular_speed: 1.0,
            up: Vec3::Y,
            fov_y: 45f32.to_radians(),
            aspect: width.max(1) as f32 / height.max(1) as f32,
            z_near: 1.0,
            z_far: 100.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.angle += dt * self.angular_speed;
    }

    pub fn eye(&self) -> Vec3 {
        Mat4::from_rotation_y(self.angle).transform_point3(Vec3::new(0.0, 0.0, self.radius))
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, self.up)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_stays_on_orbit() {
        let mut cam = OrbitCamera::new(800, 480);
        for _ in 0..10 {
            cam.advance(0.37);
            let eye = cam.eye();
            assert!((eye.length() - cam.radius).abs() < 1e-4);
            assert!(eye.y.abs() < 1e-6);
        }
    }

    #[test]
    fn test_zero_angle_looks_down_negative_z() {
        let mut cam = OrbitCamera::new(800, 480);
        cam.angle = 0.0;
        let eye = cam.eye();
        assert!((eye - Vec3::new(0.0, 0.0, 15.0)).length() < 1e-5);

        // Origin projects to the centre of the screen
        let clip = cam.view_proj() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((clip.x / clip.w).abs() < 1e-5);
        assert!((clip.y / clip.w).abs() < 1e-5);
    }

    #[test]
    fn test_advance_scales_with_speed() {
        let mut cam = OrbitCamera::new(800, 480);
        let start = cam.angle;
        cam.angular_speed = 2.0;
        cam.advance(0.25);
        assert!((cam.angle - (start + 0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_set_aspect_ignores_zero() {
        let mut cam = OrbitCamera::new(800, 400);
        cam.set_aspect(0, 300);
        assert!((cam.aspect - 2.0).abs() < 1e-6);
        cam.set_aspect(300, 300);
        assert!((cam.aspect - 1.0).abs() < 1e-6);
    }
}
