use glam::{Mat4, Quat, Vec3};

use crate::mesh::Mesh;
use crate::texture::TextureHandle;

/// Local TRS transform of a scene node.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Appearance of a node's mesh.
#[derive(Debug, Clone)]
pub struct Material {
    pub base_color: [f32; 3],
    pub texture: Option<TextureHandle>,
    /// Color the surface from its world normal instead of lighting it
    /// (the grapher's shading).
    pub normal_shading: bool,
}

impl Material {
    pub fn color(base_color: [f32; 3]) -> Self {
        Self {
            base_color,
            texture: None,
            normal_shading: false,
        }
    }

    pub fn textured(texture: TextureHandle) -> Self {
        Self {
            base_color: [1.0, 1.0, 1.0],
            texture: Some(texture),
            normal_shading: false,
        }
    }

    pub fn normal() -> Self {
        Self {
            base_color: [1.0, 1.0, 1.0],
            texture: None,
            normal_shading: true,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::color([1.0, 1.0, 1.0])
    }
}

/// Light sources consumed by the renderer's shading.
#[derive(Debug, Clone, Copy)]
pub enum Light {
    Directional {
        direction: Vec3,
        color: [f32; 3],
        intensity: f32,
    },
    Ambient {
        color: [f32; 3],
        intensity: f32,
    },
    Point {
        position: Vec3,
        color: [f32; 3],
        intensity: f32,
        distance: f32,
        decay: f32,
    },
}

/// Handle to a node slot. Stale after the node is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Handle to a mesh slot owned by the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(usize);

impl MeshId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Node {
    transform: Transform,
    mesh: Option<MeshId>,
    material: Material,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// One renderable item flattened out of the node tree.
#[derive(Debug, Clone)]
pub struct DrawItem {
    pub mesh: MeshId,
    pub material: Material,
    pub model: Mat4,
}

/// Retained scene: a tree of owned nodes addressed by handles plus the mesh
/// slots they reference. Removing a subtree frees its mesh slots, so a
/// discarded mesh can never be traversed again.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<Option<Node>>,
    free_nodes: Vec<usize>,
    meshes: Vec<Option<Mesh>>,
    free_meshes: Vec<usize>,
    roots: Vec<NodeId>,
    pub lights: Vec<Light>,
    pub background: [f32; 3],
    revision: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            background: [0.02, 0.02, 0.02],
            ..Self::default()
        }
    }

    /// Bumped whenever geometry is added or removed; the renderer uses it to
    /// refresh GPU buffers.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshId {
        self.revision += 1;
        match self.free_meshes.pop() {
            Some(slot) => {
                self.meshes[slot] = Some(mesh);
                MeshId(slot)
            }
            None => {
                self.meshes.push(Some(mesh));
                MeshId(self.meshes.len() - 1)
            }
        }
    }

    pub fn mesh(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id.0).and_then(|m| m.as_ref())
    }

    /// Create an empty node (a group) under `parent`, or as a root.
    pub fn add_node(&mut self, parent: Option<NodeId>, transform: Transform) -> NodeId {
        let node = Node {
            transform,
            mesh: None,
            material: Material::default(),
            parent,
            children: Vec::new(),
        };
        let id = match self.free_nodes.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        };
        match parent {
            Some(p) => {
                if let Some(parent_node) = self.node_mut(p) {
                    parent_node.children.push(id);
                }
            }
            None => self.roots.push(id),
        }
        id
    }

    /// Create a node carrying a mesh and material.
    pub fn add_mesh_node(
        &mut self,
        parent: Option<NodeId>,
        mesh: Mesh,
        material: Material,
        transform: Transform,
    ) -> NodeId {
        let mesh_id = self.add_mesh(mesh);
        let id = self.add_node(parent, transform);
        if let Some(node) = self.node_mut(id) {
            node.mesh = Some(mesh_id);
            node.material = material;
        }
        id
    }

    /// Remove a node and its whole subtree, releasing every mesh slot the
    /// subtree referenced.
    pub fn remove_node(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get_mut(id.0).and_then(Option::take) else {
            return;
        };
        self.free_nodes.push(id.0);

        if let Some(mesh_id) = node.mesh {
            self.meshes[mesh_id.0] = None;
            self.free_meshes.push(mesh_id.0);
            self.revision += 1;
        }

        match node.parent {
            Some(parent) => {
                if let Some(parent_node) = self.node_mut(parent) {
                    parent_node.children.retain(|c| *c != id);
                }
            }
            None => self.roots.retain(|r| *r != id),
        }

        for child in node.children {
            self.remove_subtree(child);
        }
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get_mut(id.0).and_then(Option::take) else {
            return;
        };
        self.free_nodes.push(id.0);
        if let Some(mesh_id) = node.mesh {
            self.meshes[mesh_id.0] = None;
            self.free_meshes.push(mesh_id.0);
            self.revision += 1;
        }
        for child in node.children {
            self.remove_subtree(child);
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.get(id.0).is_some_and(Option::is_some)
    }

    pub fn live_node_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn live_mesh_count(&self) -> usize {
        self.meshes.iter().filter(|m| m.is_some()).count()
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(|n| n.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(|n| n.as_mut())
    }

    pub fn transform(&self, id: NodeId) -> Option<Transform> {
        self.node(id).map(|n| n.transform)
    }

    pub fn transform_mut(&mut self, id: NodeId) -> Option<&mut Transform> {
        self.node_mut(id).map(|n| &mut n.transform)
    }

    pub fn material_mut(&mut self, id: NodeId) -> Option<&mut Material> {
        self.node_mut(id).map(|n| &mut n.material)
    }

    /// Translate a node by a fixed offset (keyboard nudges).
    pub fn translate(&mut self, id: NodeId, offset: Vec3) {
        if let Some(node) = self.node_mut(id) {
            node.transform.translation += offset;
        }
    }

    /// World matrix via the parent chain.
    pub fn world_transform(&self, id: NodeId) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut current = Some(id);
        while let Some(cid) = current {
            let Some(node) = self.node(cid) else { break };
            matrix = node.transform.matrix() * matrix;
            current = node.parent;
        }
        matrix
    }

    /// Flatten the tree into renderable items, pre-order from the roots.
    pub fn draw_list(&self) -> Vec<DrawItem> {
        let mut items = Vec::new();
        for root in &self.roots {
            self.collect_draws(*root, Mat4::IDENTITY, &mut items);
        }
        items
    }

    fn collect_draws(&self, id: NodeId, parent: Mat4, items: &mut Vec<DrawItem>) {
        let Some(node) = self.node(id) else { return };
        let model = parent * node.transform.matrix();
        if let Some(mesh) = node.mesh {
            items.push(DrawItem {
                mesh,
                material: node.material.clone(),
                model,
            });
        }
        for child in &node.children {
            self.collect_draws(*child, model, items);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;

    fn unit_mesh() -> Mesh {
        Mesh::plane(1.0, 1.0, 1, 1)
    }

    #[test]
    fn mesh_node_appears_in_draw_list() {
        let mut scene = Scene::new();
        let id = scene.add_mesh_node(
            None,
            unit_mesh(),
            Material::color([1.0, 0.0, 0.0]),
            Transform::from_translation(Vec3::new(2.0, 0.0, 0.0)),
        );
        let draws = scene.draw_list();
        assert_eq!(draws.len(), 1);
        assert!(scene.contains(id));
        let translation = draws[0].model.w_axis.truncate();
        assert!((translation - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn child_inherits_parent_transform() {
        let mut scene = Scene::new();
        let group = scene.add_node(None, Transform::from_translation(Vec3::new(0.0, 1.0, 0.0)));
        let child = scene.add_mesh_node(
            Some(group),
            unit_mesh(),
            Material::default(),
            Transform::from_translation(Vec3::new(3.0, 0.0, 0.0)),
        );
        let world = scene.world_transform(child);
        let translation = world.w_axis.truncate();
        assert!((translation - Vec3::new(3.0, 1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn removing_node_frees_mesh_and_leaves_traversal() {
        let mut scene = Scene::new();
        let id = scene.add_mesh_node(None, unit_mesh(), Material::default(), Transform::IDENTITY);
        assert_eq!(scene.live_mesh_count(), 1);

        let before = scene.revision();
        scene.remove_node(id);
        assert!(!scene.contains(id));
        assert_eq!(scene.live_mesh_count(), 0);
        assert!(scene.draw_list().is_empty());
        assert!(scene.revision() > before);
    }

    #[test]
    fn removing_group_removes_whole_subtree() {
        let mut scene = Scene::new();
        let group = scene.add_node(None, Transform::IDENTITY);
        for i in 0..4 {
            scene.add_mesh_node(
                Some(group),
                unit_mesh(),
                Material::default(),
                Transform::from_translation(Vec3::new(i as f32, 0.0, 0.0)),
            );
        }
        assert_eq!(scene.draw_list().len(), 4);

        scene.remove_node(group);
        assert_eq!(scene.live_node_count(), 0);
        assert_eq!(scene.live_mesh_count(), 0);
        assert!(scene.draw_list().is_empty());
    }

    #[test]
    fn slots_are_reused_after_removal() {
        let mut scene = Scene::new();
        let a = scene.add_mesh_node(None, unit_mesh(), Material::default(), Transform::IDENTITY);
        scene.remove_node(a);
        let b = scene.add_mesh_node(None, unit_mesh(), Material::default(), Transform::IDENTITY);
        assert!(scene.contains(b));
        assert_eq!(scene.draw_list().len(), 1);
        assert_eq!(scene.live_node_count(), 1);
    }

    #[test]
    fn translate_moves_node_by_fixed_step() {
        let mut scene = Scene::new();
        let group = scene.add_node(None, Transform::IDENTITY);
        scene.translate(group, Vec3::new(0.0, 0.1, 0.0));
        scene.translate(group, Vec3::new(0.0, 0.1, 0.0));
        let t = scene.transform(group).unwrap().translation;
        assert!((t.y - 0.2).abs() < 1e-6);
    }
}
