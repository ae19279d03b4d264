use crate::animation;
use crate::controls::{clamp_rotation_speed, ControlEvent, GlobalControlState, PanelLayout};
use crate::error::SceneError;
use crate::material::MaterialCatalog;
use crate::scene::{RenderableInstance, SceneComposer};
use crate::traits::{CameraController, RenderEngine};

/// Owning context for the whole demo: control state, catalogs, the visible
/// set and the external collaborators it drives.
pub struct Showcase<E: RenderEngine, C: CameraController> {
    controls: GlobalControlState,
    materials: MaterialCatalog,
    composer: SceneComposer,
    layout: PanelLayout,
    engine: E,
    camera: C,
}

impl<E: RenderEngine, C: CameraController> Showcase<E, C> {
    /// Build the context and show the initial shape
    pub fn new(engine: E, camera: C, controls: GlobalControlState) -> Self {
        let materials = MaterialCatalog::new();
        let layout = PanelLayout::build(&materials);
        let mut showcase = Self {
            controls,
            materials,
            composer: SceneComposer::new(),
            layout,
            engine,
            camera,
        };
        showcase
            .composer
            .activate(controls.shape, &showcase.materials, &mut showcase.engine);
        log::info!(
            "showcase ready: {} with {} materials",
            controls.shape,
            showcase.materials.len()
        );
        showcase
    }

    /// Apply one panel change; takes effect on the next frame
    pub fn apply(&mut self, event: ControlEvent) -> Result<(), SceneError> {
        match event {
            ControlEvent::ShapeSelected(shape) => {
                self.composer.activate(shape, &self.materials, &mut self.engine);
                self.controls.shape = shape;
            }
            ControlEvent::RotationSpeed(speed) => {
                self.controls.rotation_speed = clamp_rotation_speed(speed);
            }
            ControlEvent::RotationEnabled(enabled) => {
                self.controls.rotation_enabled = enabled;
            }
            ControlEvent::MaterialChanged {
                material,
                param,
                value,
            } => {
                self.materials
                    .get_mut(material)
                    .set(param, param.clamp(value))?;
            }
        }
        Ok(())
    }

    /// Select a shape by name, leaving everything untouched on failure
    pub fn set_active_shape(&mut self, name: &str) -> Result<(), SceneError> {
        self.composer
            .set_active_shape(name, &self.materials, &mut self.engine)?;
        if let Some(shape) = self.composer.active_shape() {
            self.controls.shape = shape;
        }
        Ok(())
    }

    /// One display refresh
    pub fn frame(&mut self) {
        animation::run_frame(
            self.composer.visible_mut(),
            &self.controls,
            &self.materials,
            &mut self.engine,
            &mut self.camera,
        );
    }

    /// Reconfigure viewport and camera; the visible set is not touched
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.engine.resize(width, height);
        self.camera.set_aspect(width, height);
    }

    pub fn controls(&self) -> &GlobalControlState {
        &self.controls
    }

    pub fn materials(&self) -> &MaterialCatalog {
        &self.materials
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    pub fn visible(&self) -> &[RenderableInstance] {
        self.composer.visible()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }
}
