use glam::{Mat4, Vec3};

/// Perspective camera with an explicit look-at target.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            fov_y_deg,
            aspect,
            near,
            far,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn looking_at(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    /// Update the projection aspect for new viewport dimensions. Must run
    /// before the next frame renders.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_aspect_ratio() {
        let mut camera = Camera::new(65.0, 800.0 / 600.0, 0.4, 900.0);
        camera.resize(1200, 800);
        assert!((camera.aspect - 1.5).abs() < 1e-6);
    }

    #[test]
    fn resize_ignores_zero_height() {
        let mut camera = Camera::new(65.0, 1.5, 0.1, 100.0);
        camera.resize(800, 0);
        assert_eq!(camera.aspect, 1.5);
    }

    #[test]
    fn view_matrix_moves_world_opposite_to_camera() {
        let camera = Camera::new(80.0, 1.0, 0.1, 100.0)
            .with_position(Vec3::new(0.0, 0.0, 7.0))
            .looking_at(Vec3::ZERO);
        let view = camera.view_matrix();
        let origin_in_view = view.transform_point3(Vec3::ZERO);
        assert!((origin_in_view.z + 7.0).abs() < 1e-5);
    }

    #[test]
    fn projection_depends_on_aspect() {
        let narrow = Camera::new(65.0, 1.0, 0.1, 100.0).projection_matrix();
        let wide = Camera::new(65.0, 2.0, 0.1, 100.0).projection_matrix();
        assert!((narrow.x_axis.x / wide.x_axis.x - 2.0).abs() < 1e-5);
    }
}
