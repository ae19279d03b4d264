use crate::controls::GlobalControlState;
use crate::material::MaterialCatalog;
use crate::scene::RenderableInstance;
use crate::traits::{CameraController, RenderEngine, SceneView};

/// Add the rotation speed to both angles of every instance while rotation is enabled
pub fn advance_rotation(instances: &mut [RenderableInstance], controls: &GlobalControlState) {
    if !controls.rotation_enabled {
        return;
    }

    for instance in instances {
        instance.rotation.x += controls.rotation_speed;
        instance.rotation.y += controls.rotation_speed;
    }
}

/// One display refresh: rotate, draw, then tick the camera controls.
///
/// Draw failures are logged and never interrupt the loop.
pub fn run_frame<E, C>(
    instances: &mut [RenderableInstance],
    controls: &GlobalControlState,
    materials: &MaterialCatalog,
    engine: &mut E,
    camera: &mut C,
) where
    E: RenderEngine,
    C: CameraController,
{
    advance_rotation(instances, controls);

    let view = SceneView {
        instances: &*instances,
        materials,
        view_projection: camera.view_projection(),
        eye: camera.position(),
    };
    if let Err(err) = engine.draw(&view) {
        log::warn!("frame draw failed: {err}");
    }

    camera.update();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Shape;
    use crate::scene::SceneComposer;
    use crate::traits::RenderEngine;
    use glam::Vec2;

    struct NullEngine;

    impl RenderEngine for NullEngine {
        type Error = std::convert::Infallible;

        fn add_instance(&mut self, _: &RenderableInstance, _: &crate::geometry::ShapeDescriptor) {}
        fn remove_instance(&mut self, _: crate::scene::InstanceId) {}
        fn draw(&mut self, _: &SceneView<'_>) -> Result<(), Self::Error> {
            Ok(())
        }
        fn resize(&mut self, _: u32, _: u32) {}
    }

    fn sphere_instances() -> Vec<RenderableInstance> {
        let mut composer = SceneComposer::new();
        composer.activate(Shape::Sphere, &MaterialCatalog::new(), &mut NullEngine);
        composer.visible().to_vec()
    }

    #[test]
    fn test_advance_adds_speed_to_both_axes() {
        let mut instances = sphere_instances();
        let controls = GlobalControlState::new(Shape::Sphere, 0.02, true);

        advance_rotation(&mut instances, &controls);

        for instance in &instances {
            assert!((instance.rotation - Vec2::splat(0.02)).length() < 1e-6);
        }
    }

    #[test]
    fn test_advance_disabled_is_noop() {
        let mut instances = sphere_instances();
        instances[2].rotation = Vec2::new(1.5, -0.25);
        let before = instances.clone();
        let controls = GlobalControlState::new(Shape::Sphere, 0.05, false);

        for _ in 0..100 {
            advance_rotation(&mut instances, &controls);
        }

        assert_eq!(instances, before);
    }

    #[test]
    fn test_advance_empty_set() {
        let mut instances: Vec<RenderableInstance> = Vec::new();
        advance_rotation(&mut instances, &GlobalControlState::default());
        assert!(instances.is_empty());
    }

    #[test]
    fn test_rotation_is_not_wrapped() {
        let mut instances = sphere_instances();
        let controls = GlobalControlState::new(Shape::Sphere, 0.1, true);

        for _ in 0..100 {
            advance_rotation(&mut instances, &controls);
        }

        // 100 * 0.1 = 10 rad, well past a full turn
        assert!(instances[0].rotation.x > std::f32::consts::TAU);
    }
}
