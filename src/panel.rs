//! egui rendering of the settings panel.
//!
//! Widgets edit local copies; every change comes back as a [`ControlEvent`]
//! so the owning context applies it before the frame is drawn.

use crate::controls::{
    rotation_speed_range, ControlEvent, GlobalControlState, PanelLayout, PANEL_WIDTH,
    ROTATION_SPEED_STEP,
};
use crate::material::MaterialCatalog;

/// Draw the panel and collect the changes made this pass
pub fn show(
    ctx: &egui::Context,
    layout: &PanelLayout,
    controls: &GlobalControlState,
    materials: &MaterialCatalog,
) -> Vec<ControlEvent> {
    let mut events = Vec::new();

    egui::Window::new("Settings")
        .default_width(PANEL_WIDTH)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            let mut shape = controls.shape;
            egui::ComboBox::from_label("Shape")
                .selected_text(shape.name())
                .show_ui(ui, |ui| {
                    for &option in &layout.shapes {
                        ui.selectable_value(&mut shape, option, option.name());
                    }
                });
            if shape != controls.shape {
                events.push(ControlEvent::ShapeSelected(shape));
            }

            let mut speed = controls.rotation_speed;
            let changed = ui
                .add(
                    egui::Slider::new(&mut speed, rotation_speed_range())
                        .step_by(ROTATION_SPEED_STEP as f64)
                        .text("rotationSpeed"),
                )
                .changed();
            if changed {
                events.push(ControlEvent::RotationSpeed(speed));
            }

            let mut enabled = controls.rotation_enabled;
            if ui.checkbox(&mut enabled, "rotate").changed() {
                events.push(ControlEvent::RotationEnabled(enabled));
            }

            for folder in &layout.folders {
                let material = materials.get(folder.material);
                egui::CollapsingHeader::new(folder.title.as_str())
                    .default_open(true)
                    .show(ui, |ui| {
                        for slider in &folder.sliders {
                            let Some(mut value) = material.get(slider.param) else {
                                continue;
                            };
                            let changed = ui
                                .add(
                                    egui::Slider::new(&mut value, slider.range.clone())
                                        .text(slider.param.name()),
                                )
                                .changed();
                            if changed {
                                events.push(ControlEvent::MaterialChanged {
                                    material: folder.material,
                                    param: slider.param,
                                    value,
                                });
                            }
                        }
                    });
            }
        });

    events
}
