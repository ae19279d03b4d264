use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::camera::OrbitCamera;

/// Pixels of trackpad scroll treated as one wheel notch
const PIXELS_PER_NOTCH: f32 = 50.0;

/// Drag gesture currently in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drag {
    Orbit,
    Pan,
}

/// Adapter that bridges Winit pointer events to the orbit camera
#[derive(Debug, Clone, Default)]
pub struct OrbitInputAdapter {
    drag: Option<Drag>,
    /// Last cursor position (relative to window)
    cursor: Option<(f32, f32)>,
}

impl OrbitInputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and forward gestures to the camera
    pub fn process_event(&mut self, event: &WindowEvent, camera: &mut OrbitCamera) {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                let drag = match button {
                    MouseButton::Left => Drag::Orbit,
                    MouseButton::Right | MouseButton::Middle => Drag::Pan,
                    _ => return,
                };
                match state {
                    ElementState::Pressed => self.press(drag),
                    ElementState::Released => self.release(drag),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32, camera);
            }
            WindowEvent::CursorLeft { .. } => {
                self.drag = None;
                self.cursor = None;
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_NOTCH,
                };
                camera.zoom(notches);
            }
            _ => {}
        }
    }

    pub fn press(&mut self, drag: Drag) {
        if self.drag.is_none() {
            self.drag = Some(drag);
        }
    }

    pub fn release(&mut self, drag: Drag) {
        if self.drag == Some(drag) {
            self.drag = None;
        }
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32, camera: &mut OrbitCamera) {
        if let (Some(drag), Some((last_x, last_y))) = (self.drag, self.cursor) {
            let (dx, dy) = (x - last_x, y - last_y);
            match drag {
                Drag::Orbit => camera.rotate(dx, dy),
                Drag::Pan => camera.pan(dx, dy),
            }
        }
        self.cursor = Some((x, y));
    }

    pub fn drag(&self) -> Option<Drag> {
        self.drag
    }
}
