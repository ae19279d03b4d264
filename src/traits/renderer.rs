use glam::{Mat4, Vec3};

use crate::geometry::ShapeDescriptor;
use crate::material::MaterialCatalog;
use crate::scene::{InstanceId, RenderableInstance};

/// Everything the engine needs to draw one frame
pub struct SceneView<'a> {
    pub instances: &'a [RenderableInstance],
    pub materials: &'a MaterialCatalog,
    pub view_projection: Mat4,
    pub eye: Vec3,
}

/// Rendering engine - owns the scene graph and draws it each frame
pub trait RenderEngine {
    type Error: std::error::Error;

    /// Add a drawable instance to the scene graph
    fn add_instance(&mut self, instance: &RenderableInstance, shape: &ShapeDescriptor);

    /// Remove a drawable instance from the scene graph
    fn remove_instance(&mut self, id: InstanceId);

    /// Draw the current scene against a camera
    fn draw(&mut self, view: &SceneView<'_>) -> Result<(), Self::Error>;

    /// Resize the drawable surface
    fn resize(&mut self, width: u32, height: u32);
}
