pub mod camera;
pub mod cli;
pub mod controller;
pub mod demos;
pub mod frame;
pub mod math;
pub mod mesh;
pub mod renderer;
pub mod scene;
pub mod surface;
pub mod texture;

pub use demos::{create_demo, Demo, DemoKind, EarthViewDemo, FunctionGrapherDemo, MethaneDemo};
pub use math::{between, OrbitState, SegmentTransform, SurfaceFunction};
pub use surface::SurfacePlot;
