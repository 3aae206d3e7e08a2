use glam::{Quat, Vec3};

/// Placement for a unit-length, Y-axis primitive stretched between two
/// points: midpoint position, rotation taking +Y onto (b − a), and the
/// distance to scale the long axis by.
#[derive(Debug, Clone, Copy)]
pub struct SegmentTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub length: f32,
    pub radius: f32,
}

/// Compute the transform placing a primitive between `a` and `b`.
///
/// Precondition: `a != b`. A zero-length segment cannot define a direction;
/// the result keeps the primitive's default +Y orientation (unspecified by
/// contract, but never a crash or a NaN).
pub fn between(a: Vec3, b: Vec3, radius: f32) -> SegmentTransform {
    let delta = b - a;
    let length = delta.length();
    let direction = delta.try_normalize().unwrap_or(Vec3::Y);

    SegmentTransform {
        position: (a + b) * 0.5,
        rotation: Quat::from_rotation_arc(Vec3::Y, direction),
        length,
        radius,
    }
}
