use winit::event::WindowEvent;
use winit::window::Window;

/// Tessellated egui output waiting to be drawn on top of the scene
pub struct OverlayFrame {
    pub primitives: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

/// egui context plus its winit integration
pub struct Overlay {
    ctx: egui::Context,
    state: egui_winit::State,
}

impl Overlay {
    pub fn new(window: &Window) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        Self { ctx, state }
    }

    /// Returns true when egui consumed the event
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Run one UI pass and tessellate its output
    pub fn run(&mut self, window: &Window, build_ui: impl FnMut(&egui::Context)) -> OverlayFrame {
        let raw_input = self.state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, build_ui);

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let pixels_per_point = full_output.pixels_per_point;
        OverlayFrame {
            primitives: self.ctx.tessellate(full_output.shapes, pixels_per_point),
            textures_delta: full_output.textures_delta,
            pixels_per_point,
        }
    }
}
