use glam::Vec3;

use super::Demo;
use crate::camera::Camera;
use crate::frame::FrameInfo;
use crate::math::SurfaceFunction;
use crate::scene::{Light, Scene};
use crate::surface::SurfacePlot;

const GRID_SIZE: f32 = 2.0;
const GRID_SEGMENTS: u32 = 20;

/// Plots one of the four surface functions over a 2x2 grid; the selection
/// dropdown swaps the plotted function, rebuilding the mesh in place.
pub struct FunctionGrapherDemo {
    scene: Scene,
    camera: Camera,
    plot: SurfacePlot,
}

impl FunctionGrapherDemo {
    pub fn new() -> Self {
        let mut scene = Scene::new();
        scene.background = [0.086, 0.086, 0.086]; // 0x161616

        scene.lights.push(Light::Directional {
            direction: Vec3::splat(-1.0).normalize(),
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
        });
        scene.lights.push(Light::Ambient {
            color: [1.0, 1.0, 1.0],
            intensity: 0.5,
        });

        let plot = SurfacePlot::install(
            &mut scene,
            SurfaceFunction::default(),
            GRID_SIZE,
            GRID_SIZE,
            GRID_SEGMENTS,
            GRID_SEGMENTS,
        );

        let camera = Camera::new(80.0, 1.0, 0.1, 100.0)
            .with_position(Vec3::new(1.0, 1.5, 1.0).normalize() * 2.5)
            .looking_at(Vec3::ZERO);

        Self {
            scene,
            camera,
            plot,
        }
    }

    pub fn plot(&self) -> &SurfacePlot {
        &self.plot
    }
}

impl Default for FunctionGrapherDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for FunctionGrapherDemo {
    fn name(&self) -> &'static str {
        "function-grapher"
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    fn update(&mut self, _frame: &FrameInfo) {
        // Static scene; redraw only.
    }

    fn selected_surface(&self) -> Option<SurfaceFunction> {
        Some(self.plot.function())
    }

    fn select_surface(&mut self, function: SurfaceFunction) {
        self.plot.select(&mut self.scene, function);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_default_function() {
        let demo = FunctionGrapherDemo::new();
        assert_eq!(
            demo.selected_surface(),
            Some(SurfaceFunction::HyperbolicParaboloid)
        );
        assert_eq!(demo.scene().draw_list().len(), 1);
    }

    #[test]
    fn selection_change_rebuilds_exactly_once() {
        let mut demo = FunctionGrapherDemo::new();
        demo.select_surface(SurfaceFunction::Cone);
        assert_eq!(demo.plot().rebuild_count(), 1);
        assert_eq!(demo.selected_surface(), Some(SurfaceFunction::Cone));
        assert_eq!(demo.scene().live_mesh_count(), 1);
    }

    #[test]
    fn camera_sits_at_fixed_distance() {
        let demo = FunctionGrapherDemo::new();
        assert!((demo.camera().position.length() - 2.5).abs() < 1e-5);
    }
}
