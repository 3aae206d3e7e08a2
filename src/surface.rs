use crate::math::SurfaceFunction;
use crate::mesh::Mesh;
use crate::scene::{Material, NodeId, Scene, Transform};

/// The grapher's surface: one node in the scene whose mesh is regenerated
/// whenever a new function is selected.
///
/// A rebuild is atomic from the caller's point of view: the old node and its
/// mesh slot are released before the replacement is installed, so a renderer
/// traversing the scene afterwards can only ever see the new surface.
/// Rebuilds run on the single driver thread; they are not reentrant.
#[derive(Debug)]
pub struct SurfacePlot {
    function: SurfaceFunction,
    width: f32,
    height: f32,
    segments_x: u32,
    segments_z: u32,
    node: NodeId,
    rebuilds: u64,
}

impl SurfacePlot {
    /// Build the initial surface and attach it to the scene.
    pub fn install(
        scene: &mut Scene,
        function: SurfaceFunction,
        width: f32,
        height: f32,
        segments_x: u32,
        segments_z: u32,
    ) -> Self {
        let mesh = Mesh::surface(function, width, height, segments_x, segments_z);
        let node = scene.add_mesh_node(None, mesh, Material::normal(), Transform::IDENTITY);
        Self {
            function,
            width,
            height,
            segments_x,
            segments_z,
            node,
            rebuilds: 0,
        }
    }

    pub fn function(&self) -> SurfaceFunction {
        self.function
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Rebuilds performed since installation.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Handle a selection-changed signal: discard the current surface and
    /// build the newly selected one.
    pub fn select(&mut self, scene: &mut Scene, function: SurfaceFunction) {
        scene.remove_node(self.node);
        let mesh = Mesh::surface(function, self.width, self.height, self.segments_x, self.segments_z);
        self.node = scene.add_mesh_node(None, mesh, Material::normal(), Transform::IDENTITY);
        self.function = function;
        self.rebuilds += 1;
    }

    /// Selection by raw tag; unknown tags take the documented default.
    pub fn select_tag(&mut self, scene: &mut Scene, tag: &str) {
        self.select(scene, SurfaceFunction::from_tag(tag));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_builds_selected_function() {
        let mut scene = Scene::new();
        let plot = SurfacePlot::install(&mut scene, SurfaceFunction::Saddle, 2.0, 2.0, 20, 20);

        let mesh = scene
            .mesh(scene.draw_list()[0].mesh)
            .expect("surface mesh present");
        assert_eq!(mesh.vertex_count(), 441);
        for p in &mesh.positions {
            assert!((p.y - p.x * p.z).abs() < 1e-6);
        }
        assert_eq!(plot.rebuild_count(), 0);
    }

    #[test]
    fn selecting_new_function_rebuilds_once_and_discards_old_mesh() {
        let mut scene = Scene::new();
        let mut plot = SurfacePlot::install(&mut scene, SurfaceFunction::Saddle, 2.0, 2.0, 20, 20);
        let old_node = plot.node();

        plot.select_tag(&mut scene, "cone");

        assert_eq!(plot.rebuild_count(), 1);
        assert_eq!(plot.function(), SurfaceFunction::Cone);
        assert!(!scene.contains(old_node));
        assert_eq!(scene.live_mesh_count(), 1);

        let draws = scene.draw_list();
        assert_eq!(draws.len(), 1);
        let mesh = scene.mesh(draws[0].mesh).unwrap();
        for p in &mesh.positions {
            let expected = (p.x * p.x + p.z * p.z).sqrt();
            assert!((p.y - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn unknown_tag_rebuilds_with_default() {
        let mut scene = Scene::new();
        let mut plot = SurfacePlot::install(&mut scene, SurfaceFunction::Cone, 2.0, 2.0, 10, 10);
        plot.select_tag(&mut scene, "nonsense");
        assert_eq!(plot.function(), SurfaceFunction::HyperbolicParaboloid);
        assert_eq!(plot.rebuild_count(), 1);
    }
}
