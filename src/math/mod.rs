mod orbit;
mod segment;
mod surface;

pub use orbit::OrbitState;
pub use segment::{between, SegmentTransform};
pub use surface::SurfaceFunction;
