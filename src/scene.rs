use glam::{EulerRot, Mat4, Vec2, Vec3};

use crate::error::SceneError;
use crate::geometry::{GeometryCatalog, Shape};
use crate::material::{MaterialCatalog, MaterialId};
use crate::traits::RenderEngine;

/// x position of the leftmost instance
pub const LAYOUT_START_X: f32 = -12.0;
/// Horizontal gap between neighbouring instances
pub const LAYOUT_SPACING: f32 = 6.0;

/// Identity of one renderable instance; never reused within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

/// One positioned, shaded copy of the active shape
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableInstance {
    pub id: InstanceId,
    pub shape: Shape,
    pub material: MaterialId,
    pub position: Vec3,
    /// Rotation around x and y in radians, unbounded
    pub rotation: Vec2,
}

impl RenderableInstance {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }
}

/// x offset for the instance at `index` in catalog order
pub fn layout_x(index: usize) -> f32 {
    LAYOUT_START_X + LAYOUT_SPACING * index as f32
}

/// Owns the visible set and rebuilds it whenever the active shape changes
#[derive(Debug)]
pub struct SceneComposer {
    geometry: GeometryCatalog,
    active: Option<Shape>,
    visible: Vec<RenderableInstance>,
    next_id: u64,
}

impl SceneComposer {
    pub fn new() -> Self {
        Self {
            geometry: GeometryCatalog::new(),
            active: None,
            visible: Vec::new(),
            next_id: 0,
        }
    }

    /// Replace the visible set with one instance of `name` per material.
    ///
    /// An unknown name fails with `UnknownShape` before anything is removed.
    pub fn set_active_shape<E: RenderEngine>(
        &mut self,
        name: &str,
        materials: &MaterialCatalog,
        engine: &mut E,
    ) -> Result<(), SceneError> {
        let shape = self.geometry.lookup(name)?.shape;
        self.activate(shape, materials, engine);
        Ok(())
    }

    /// Replace the visible set for a shape already known to be in the catalog
    pub fn activate<E: RenderEngine>(
        &mut self,
        shape: Shape,
        materials: &MaterialCatalog,
        engine: &mut E,
    ) {
        for instance in self.visible.drain(..) {
            engine.remove_instance(instance.id);
        }

        let descriptor = self.geometry.get(shape);
        for (index, material) in materials.ids().enumerate() {
            let instance = RenderableInstance {
                id: InstanceId(self.next_id),
                shape,
                material,
                position: Vec3::new(layout_x(index), 0.0, 0.0),
                rotation: Vec2::ZERO,
            };
            self.next_id += 1;
            engine.add_instance(&instance, descriptor);
            self.visible.push(instance);
        }

        self.active = Some(shape);
        log::debug!("active shape is now {} ({} instances)", shape, self.visible.len());
    }

    pub fn active_shape(&self) -> Option<Shape> {
        self.active
    }

    pub fn visible(&self) -> &[RenderableInstance] {
        &self.visible
    }

    pub fn visible_mut(&mut self) -> &mut [RenderableInstance] {
        &mut self.visible
    }

    pub fn geometry(&self) -> &GeometryCatalog {
        &self.geometry
    }
}

impl Default for SceneComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ShapeDescriptor;
    use crate::traits::SceneView;
    use std::collections::HashSet;
    use std::convert::Infallible;

    // Engine that only tracks which instances are in its scene graph
    #[derive(Default)]
    struct MockEngine {
        live: HashSet<InstanceId>,
    }

    impl RenderEngine for MockEngine {
        type Error = Infallible;

        fn add_instance(&mut self, instance: &RenderableInstance, _shape: &ShapeDescriptor) {
            self.live.insert(instance.id);
        }

        fn remove_instance(&mut self, id: InstanceId) {
            self.live.remove(&id);
        }

        fn draw(&mut self, _view: &SceneView<'_>) -> Result<(), Infallible> {
            Ok(())
        }

        fn resize(&mut self, _width: u32, _height: u32) {}
    }

    #[test]
    fn test_starts_empty() {
        let composer = SceneComposer::new();
        assert!(composer.visible().is_empty());
        assert_eq!(composer.active_shape(), None);
    }

    #[test]
    fn test_layout_positions() {
        let xs: Vec<f32> = (0..4).map(layout_x).collect();
        assert_eq!(xs, [-12.0, -6.0, 0.0, 6.0]);
    }

    #[test]
    fn test_engine_mirrors_visible_set() {
        let materials = MaterialCatalog::new();
        let mut engine = MockEngine::default();
        let mut composer = SceneComposer::new();

        composer.set_active_shape("Cone", &materials, &mut engine).unwrap();
        composer.set_active_shape("Torus", &materials, &mut engine).unwrap();

        let visible: HashSet<_> = composer.visible().iter().map(|i| i.id).collect();
        assert_eq!(engine.live, visible);
    }

    #[test]
    fn test_instance_ids_are_fresh() {
        let materials = MaterialCatalog::new();
        let mut engine = MockEngine::default();
        let mut composer = SceneComposer::new();

        composer.set_active_shape("Box", &materials, &mut engine).unwrap();
        let first: Vec<_> = composer.visible().iter().map(|i| i.id).collect();
        composer.set_active_shape("Box", &materials, &mut engine).unwrap();
        let second: Vec<_> = composer.visible().iter().map(|i| i.id).collect();

        assert!(first.iter().all(|id| !second.contains(id)));
    }

    #[test]
    fn test_model_matrix_applies_translation() {
        let instance = RenderableInstance {
            id: InstanceId(0),
            shape: Shape::Box,
            material: MaterialCatalog::new().ids().next().unwrap(),
            position: Vec3::new(-6.0, 0.0, 0.0),
            rotation: Vec2::new(0.3, 0.7),
        };
        let origin = instance.model_matrix().transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(-6.0, 0.0, 0.0)).length() < 1e-6);
    }
}
