use glam::{Quat, Vec3};

use super::common::hex_color;
use super::Demo;
use crate::camera::Camera;
use crate::frame::FrameInfo;
use crate::math::OrbitState;
use crate::mesh::Mesh;
use crate::scene::{Light, Material, NodeId, Scene, Transform};
use crate::texture::TextureHandle;

const EARTH_TEXTURE: &str = "assets/textures/earth.png";
const MOON_TEXTURE: &str = "assets/textures/moon.png";

const EARTH_SPIN: f32 = -0.003;
const MOON_SPIN: f32 = 0.003;
const MOON_ORBIT_SPEED: f32 = 0.006;
const MOON_ORBIT_RADIUS: f32 = 1.7;

/// Earth/moon system: both bodies spin about Y, the moon orbits the earth in
/// the XZ plane at constant height.
pub struct EarthViewDemo {
    scene: Scene,
    camera: Camera,
    earth: NodeId,
    moon: NodeId,
    orbit: OrbitState,
    earth_angle: f32,
    moon_angle: f32,
}

impl EarthViewDemo {
    pub fn new() -> Self {
        let mut scene = Scene::new();
        scene.background = [0.0, 0.0, 0.0];

        scene.lights.push(Light::Directional {
            direction: Vec3::new(-50.0, 0.0, -30.0).normalize(),
            color: [1.0, 1.0, 1.0],
            intensity: 1.4,
        });
        scene.lights.push(Light::Ambient {
            color: hex_color(0x404040),
            intensity: 0.5,
        });
        scene.lights.push(Light::Point {
            position: Vec3::new(10.0, 10.0, 10.0),
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
            distance: 50.0,
            decay: 2.0,
        });

        let earth_position = Vec3::new(-1.0, 0.0, 0.0);
        let earth = scene.add_mesh_node(
            None,
            Mesh::sphere(1.0, 32, 32),
            Material {
                base_color: hex_color(0x2a5faa),
                texture: Some(TextureHandle::load(EARTH_TEXTURE)),
                normal_shading: false,
            },
            Transform::from_translation(earth_position),
        );

        let moon = scene.add_mesh_node(
            None,
            Mesh::sphere(0.35, 32, 32),
            Material {
                base_color: hex_color(0x9a9a9a),
                texture: Some(TextureHandle::load(MOON_TEXTURE)),
                normal_shading: false,
            },
            Transform::from_translation(Vec3::new(1.0, 0.0, 0.0)),
        );

        let camera = Camera::new(65.0, 1.0, 0.4, 900.0)
            .with_position(Vec3::new(0.0, 0.0, 7.0))
            .looking_at(Vec3::ZERO);

        Self {
            scene,
            camera,
            earth,
            moon,
            orbit: OrbitState::new(MOON_ORBIT_SPEED, MOON_ORBIT_RADIUS, earth_position),
            earth_angle: 0.0,
            moon_angle: 0.0,
        }
    }

    pub fn orbit(&self) -> &OrbitState {
        &self.orbit
    }

    pub fn moon_node(&self) -> NodeId {
        self.moon
    }
}

impl Default for EarthViewDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for EarthViewDemo {
    fn name(&self) -> &'static str {
        "earth-view"
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
        self.earth_angle += EARTH_SPIN;
        self.moon_angle += MOON_SPIN;

        if let Some(t) = self.scene.transform_mut(self.earth) {
            t.rotation = Quat::from_rotation_y(self.earth_angle);
        }

        let (x, z) = self.orbit.advance();
        if let Some(t) = self.scene.transform_mut(self.moon) {
            t.rotation = Quat::from_rotation_y(self.moon_angle);
            // Height stays wherever the moon was placed.
            t.translation.x = x;
            t.translation.z = z;
        }
    }
}
