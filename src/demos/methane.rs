use glam::Vec3;

use super::common::hex_color;
use super::Demo;
use crate::camera::Camera;
use crate::controller::Button;
use crate::frame::FrameInfo;
use crate::math::between;
use crate::mesh::Mesh;
use crate::scene::{Light, Material, NodeId, Scene, Transform};

const BOND_RADIUS: f32 = 0.3;
const BOND_RADIAL_SEGMENTS: u32 = 22;
const HYDROGEN_RING_RADIUS: f32 = 6.0;
const HYDROGEN_RING_HEIGHT: f32 = -3.0;

/// CH4 ball-and-stick model: a central carbon, four hydrogens (three on a
/// circle below, one on top), cylinders for the bonds, and a ground plane.
/// The molecule sits in a group the arrow keys move in fixed steps.
pub struct MethaneDemo {
    scene: Scene,
    camera: Camera,
    group: NodeId,
}

impl MethaneDemo {
    pub fn new() -> Self {
        let mut scene = Scene::new();

        scene.lights.push(Light::Directional {
            direction: Vec3::new(-10.0, -20.0, -10.0).normalize(),
            color: [1.0, 1.0, 1.0],
            intensity: 4.0,
        });
        scene.lights.push(Light::Ambient {
            color: hex_color(0x404040),
            intensity: 4.0,
        });

        let group = scene.add_node(None, Transform::IDENTITY);

        let carbon = Vec3::ZERO;
        let hydrogens = Self::hydrogen_positions();

        Self::add_atom(&mut scene, group, carbon, hex_color(0xaa2020), 2.0);
        for h in hydrogens {
            Self::add_atom(&mut scene, group, h, hex_color(0x0000aa), 1.0);
            Self::add_bond(&mut scene, group, carbon, h);
        }

        // Ground plane below the molecule.
        scene.add_mesh_node(
            None,
            Mesh::plane(100.0, 100.0, 1, 1),
            Material::color(hex_color(0x73e873)),
            Transform::from_translation(Vec3::new(0.0, -7.0, 0.0)),
        );

        let camera = Camera::new(65.0, 1.0, 0.1, 900.0)
            .with_position(Vec3::new(0.0, 0.0, 30.0))
            .looking_at(Vec3::ZERO);

        Self {
            scene,
            camera,
            group,
        }
    }

    /// Three hydrogens on a circle around the carbon plus one straight up.
    fn hydrogen_positions() -> [Vec3; 4] {
        let mut positions = [Vec3::ZERO; 4];
        for (i, angle_deg) in [0.0f32, 120.0, 240.0].iter().enumerate() {
            let angle = angle_deg.to_radians();
            positions[i] = Vec3::new(
                HYDROGEN_RING_RADIUS * angle.cos(),
                HYDROGEN_RING_HEIGHT,
                HYDROGEN_RING_RADIUS * angle.sin(),
            );
        }
        positions[3] = Vec3::new(0.0, 6.0, 0.0);
        positions
    }

    fn add_atom(scene: &mut Scene, group: NodeId, position: Vec3, color: [f32; 3], radius: f32) {
        scene.add_mesh_node(
            Some(group),
            Mesh::sphere(radius, 32, 32),
            Material::color(color),
            Transform::from_translation(position),
        );
    }

    fn add_bond(scene: &mut Scene, group: NodeId, a: Vec3, b: Vec3) {
        let segment = between(a, b, BOND_RADIUS);
        scene.add_mesh_node(
            Some(group),
            Mesh::cylinder(segment.radius, segment.length, BOND_RADIAL_SEGMENTS),
            Material::color(hex_color(0xfefefe)),
            Transform {
                translation: segment.position,
                rotation: segment.rotation,
                scale: Vec3::ONE,
            },
        );
    }

    pub fn group(&self) -> NodeId {
        self.group
    }
}

impl Default for MethaneDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for MethaneDemo {
    fn name(&self) -> &'static str {
        "methane"
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
        // Motion comes only from keyboard nudges.
    }

    fn input(&mut self, button: Button, pressed: bool) {
        if pressed {
            self.scene.translate(self.group, button.nudge());
        }
    }
}
