use glam::{Mat4, Vec3};

/// Camera movement and control abstraction
pub trait CameraController {
    /// Advance damped motion by one frame
    fn update(&mut self);

    /// Combined projection * view matrix for rendering
    fn view_projection(&self) -> Mat4;

    /// Get the camera position in world space
    fn position(&self) -> Vec3;

    /// Recompute the projection for a new viewport size
    fn set_aspect(&mut self, width: u32, height: u32);
}
