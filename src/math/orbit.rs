use glam::Vec3;

/// Circular motion around a fixed center, advanced once per rendered frame.
///
/// The angle accumulates without wrapping; only its sine and cosine are ever
/// consumed, so unbounded growth is fine. The per-frame increment is not
/// delta-time scaled, so perceived speed follows the refresh rate.
#[derive(Debug, Clone, Copy)]
pub struct OrbitState {
    pub angle: f32,
    pub angular_speed: f32,
    pub radius: f32,
    pub center: Vec3,
}

impl OrbitState {
    pub fn new(angular_speed: f32, radius: f32, center: Vec3) -> Self {
        Self {
            angle: 0.0,
            angular_speed,
            radius,
            center,
        }
    }

    /// Step the angle and project to the new (x, z) position. The vertical
    /// coordinate stays with the caller; orbiting bodies keep their height.
    pub fn advance(&mut self) -> (f32, f32) {
        self.angle += self.angular_speed;
        self.position_xz()
    }

    /// Current projected position without stepping.
    pub fn position_xz(&self) -> (f32, f32) {
        (
            self.center.x + self.radius * self.angle.cos(),
            self.center.z + self.radius * self.angle.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn advance_steps_angle_by_speed() {
        let mut orbit = OrbitState::new(0.25, 2.0, Vec3::ZERO);
        orbit.advance();
        orbit.advance();
        assert!((orbit.angle - 0.5).abs() < 1e-6);
    }

    #[test]
    fn position_lies_on_circle() {
        let center = Vec3::new(-1.0, 0.5, 3.0);
        let mut orbit = OrbitState::new(0.1, 1.7, center);
        for _ in 0..37 {
            let (x, z) = orbit.advance();
            let dx = x - center.x;
            let dz = z - center.z;
            assert!(((dx * dx + dz * dz).sqrt() - 1.7).abs() < 1e-4);
        }
    }

    #[test]
    fn full_period_returns_to_start() {
        let speed = 0.006;
        let mut orbit = OrbitState::new(speed, 1.7, Vec3::new(-1.0, 0.0, 0.0));
        let (x0, z0) = orbit.position_xz();

        let steps = (TAU / speed).round() as u32;
        for _ in 0..steps {
            orbit.advance();
        }

        let residual = (orbit.angle % TAU + TAU) % TAU;
        let wrapped = residual.min(TAU - residual);
        assert!(wrapped < 0.01, "angle residual {wrapped}");

        let (x1, z1) = orbit.position_xz();
        assert!((x1 - x0).abs() < 0.02);
        assert!((z1 - z0).abs() < 0.02);
    }
}
