use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use material_showcase::cli::Cli;
use material_showcase::core::{Clock, FpsCounter, OrbitInputAdapter};
use material_showcase::overlay::Overlay;
use material_showcase::{panel, OrbitCamera, Showcase, ShowcaseRenderer};

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    overlay: Option<Overlay>,
    showcase: Option<Showcase<ShowcaseRenderer, OrbitCamera>>,
    input: OrbitInputAdapter,
    clock: Clock,
    fps: FpsCounter,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            overlay: None,
            showcase: None,
            input: OrbitInputAdapter::new(),
            clock: Clock::new(),
            fps: FpsCounter::new(),
        }
    }

    fn redraw(&mut self) {
        let delta = self.clock.tick();
        if let Some(fps) = self.fps.record(delta) {
            log::debug!("{fps:.0} fps");
        }

        let (Some(window), Some(overlay), Some(showcase)) =
            (&self.window, &mut self.overlay, &mut self.showcase)
        else {
            return;
        };

        if !self.cli.no_ui {
            let mut events = Vec::new();
            let frame = overlay.run(window, |ctx| {
                events = panel::show(
                    ctx,
                    showcase.layout(),
                    showcase.controls(),
                    showcase.materials(),
                );
            });

            for event in events {
                if let Err(e) = showcase.apply(event) {
                    log::warn!("ignoring panel change: {e}");
                }
            }
            showcase.engine_mut().queue_overlay(frame);
        }

        showcase.frame();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Material Showcase")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(ShowcaseRenderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let camera = OrbitCamera::new(size.width, size.height);

        self.overlay = Some(Overlay::new(&window));
        self.showcase = Some(Showcase::new(renderer, camera, self.cli.control_state()));
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(overlay), Some(window)) = (&mut self.overlay, &self.window) {
            if !self.cli.no_ui && overlay.on_window_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(showcase) = &mut self.showcase {
                    showcase.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            ref pointer_event => {
                if let Some(showcase) = &mut self.showcase {
                    self.input
                        .process_event(pointer_event, showcase.camera_mut());
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::info!(
        "starting with {} at rotation speed {}",
        cli.shape,
        cli.control_state().rotation_speed
    );

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(cli);

    event_loop
        .run_app(&mut app)
        .context("event loop terminated with an error")?;

    Ok(())
}
