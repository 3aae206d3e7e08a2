mod common;
mod earth_view;
mod function_grapher;
mod methane;

pub use earth_view::EarthViewDemo;
pub use function_grapher::FunctionGrapherDemo;
pub use methane::MethaneDemo;

use crate::camera::Camera;
use crate::controller::Button;
use crate::frame::FrameInfo;
use crate::math::SurfaceFunction;
use crate::scene::Scene;

/// Which demo the viewer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DemoKind {
    /// Earth with an orbiting moon
    EarthView,
    /// Parametric function grapher
    FunctionGrapher,
    /// Methane ball-and-stick model
    Methane,
}

/// One self-contained demo: a scene, a camera, and a per-frame step.
///
/// `update` must be called exactly once per rendered frame; all animation
/// increments are per-frame, so the drive rate is the motion rate.
pub trait Demo {
    fn name(&self) -> &'static str;

    fn scene(&self) -> &Scene;

    fn camera(&self) -> &Camera;

    fn camera_mut(&mut self) -> &mut Camera;

    /// Advance animation state by one frame.
    fn update(&mut self, frame: &FrameInfo);

    /// Keyboard edge (press/release).
    fn input(&mut self, _button: Button, _pressed: bool) {}

    /// Current surface selection, for demos that expose the function
    /// dropdown. `None` hides the selector in the viewer overlay.
    fn selected_surface(&self) -> Option<SurfaceFunction> {
        None
    }

    /// Selection-changed signal from the UI; rebuilds synchronously.
    fn select_surface(&mut self, _function: SurfaceFunction) {}
}

pub fn create_demo(kind: DemoKind) -> Box<dyn Demo> {
    match kind {
        DemoKind::EarthView => Box::new(EarthViewDemo::new()),
        DemoKind::FunctionGrapher => Box::new(FunctionGrapherDemo::new()),
        DemoKind::Methane => Box::new(MethaneDemo::new()),
    }
}
