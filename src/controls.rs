//! Control panel model: global state, change events and the folder layout
//! generated from each material's shading model.

use std::ops::RangeInclusive;

use crate::geometry::Shape;
use crate::material::{MaterialCatalog, MaterialId, MaterialKind, MaterialParam};

pub const DEFAULT_ROTATION_SPEED: f32 = 0.01;
pub const ROTATION_SPEED_MIN: f32 = 0.0;
pub const ROTATION_SPEED_MAX: f32 = 0.1;
pub const ROTATION_SPEED_STEP: f32 = 0.001;
const ROTATION_SPEED_STEPS_PER_UNIT: f32 = 1000.0;

/// Logical width of the settings panel
pub const PANEL_WIDTH: f32 = 250.0;

/// Global settings shared by the panel and the animation driver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalControlState {
    pub shape: Shape,
    pub rotation_speed: f32,
    pub rotation_enabled: bool,
}

impl GlobalControlState {
    pub fn new(shape: Shape, rotation_speed: f32, rotation_enabled: bool) -> Self {
        Self {
            shape,
            rotation_speed: clamp_rotation_speed(rotation_speed),
            rotation_enabled,
        }
    }
}

impl Default for GlobalControlState {
    fn default() -> Self {
        Self::new(Shape::Sphere, DEFAULT_ROTATION_SPEED, true)
    }
}

/// Clamp to the slider domain and snap to its step
pub fn clamp_rotation_speed(speed: f32) -> f32 {
    if !speed.is_finite() {
        return ROTATION_SPEED_MIN;
    }
    let snapped = (speed * ROTATION_SPEED_STEPS_PER_UNIT).round() / ROTATION_SPEED_STEPS_PER_UNIT;
    snapped.clamp(ROTATION_SPEED_MIN, ROTATION_SPEED_MAX)
}

pub fn rotation_speed_range() -> RangeInclusive<f32> {
    ROTATION_SPEED_MIN..=ROTATION_SPEED_MAX
}

/// A single change emitted by a panel control
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    ShapeSelected(Shape),
    RotationSpeed(f32),
    RotationEnabled(bool),
    MaterialChanged {
        material: MaterialId,
        param: MaterialParam,
        value: f32,
    },
}

/// One bounded slider bound to a material parameter
#[derive(Debug, Clone, PartialEq)]
pub struct SliderBinding {
    pub param: MaterialParam,
    pub range: RangeInclusive<f32>,
}

/// Group of sliders for one material
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialFolder {
    pub material: MaterialId,
    pub title: String,
    pub sliders: Vec<SliderBinding>,
}

/// Panel structure, independent of the widget toolkit that draws it
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub shapes: [Shape; 6],
    pub folders: Vec<MaterialFolder>,
}

impl PanelLayout {
    /// Build one folder per material, in catalog order
    pub fn build(materials: &MaterialCatalog) -> Self {
        let folders = materials
            .all_materials()
            .map(|(id, material)| MaterialFolder {
                material: id,
                title: material.name.clone(),
                sliders: sliders_for(&material.kind),
            })
            .collect();

        Self {
            shapes: Shape::ALL,
            folders,
        }
    }
}

fn sliders_for(kind: &MaterialKind) -> Vec<SliderBinding> {
    kind.params()
        .iter()
        .map(|&param| SliderBinding {
            param,
            range: param.range(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider_params(folder: &MaterialFolder) -> Vec<MaterialParam> {
        folder.sliders.iter().map(|s| s.param).collect()
    }

    #[test]
    fn test_default_state() {
        let state = GlobalControlState::default();
        assert_eq!(state.shape, Shape::Sphere);
        assert_eq!(state.rotation_speed, 0.01);
        assert!(state.rotation_enabled);
    }

    #[test]
    fn test_rotation_speed_clamped() {
        assert_eq!(clamp_rotation_speed(0.5), 0.1);
        assert_eq!(clamp_rotation_speed(-1.0), 0.0);
        assert_eq!(clamp_rotation_speed(f32::NAN), 0.0);
    }

    #[test]
    fn test_rotation_speed_snaps_to_step() {
        assert!((clamp_rotation_speed(0.0234) - 0.023).abs() < 1e-6);
        assert!((clamp_rotation_speed(0.0236) - 0.024).abs() < 1e-6);
    }

    #[test]
    fn test_folder_per_material() {
        let layout = PanelLayout::build(&MaterialCatalog::new());
        let titles: Vec<_> = layout.folders.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, ["lambert", "standard", "physical", "phong"]);
    }

    #[test]
    fn test_sliders_follow_material_kind() {
        use MaterialParam::*;
        let layout = PanelLayout::build(&MaterialCatalog::new());

        assert!(layout.folders[0].sliders.is_empty());
        assert_eq!(slider_params(&layout.folders[1]), [Roughness, Metalness]);
        assert_eq!(
            slider_params(&layout.folders[2]),
            [Roughness, Metalness, Clearcoat, ClearcoatRoughness]
        );
        assert_eq!(slider_params(&layout.folders[3]), [Shininess]);
    }

    #[test]
    fn test_sliders_only_bind_declared_params() {
        let materials = MaterialCatalog::new();
        let layout = PanelLayout::build(&materials);
        for folder in &layout.folders {
            let material = materials.get(folder.material);
            for slider in &folder.sliders {
                assert!(material.get(slider.param).is_some());
            }
            assert_eq!(folder.sliders.len(), material.kind.params().len());
        }
    }

    #[test]
    fn test_slider_ranges() {
        let layout = PanelLayout::build(&MaterialCatalog::new());
        assert_eq!(layout.folders[3].sliders[0].range, 0.0..=200.0);
        assert_eq!(layout.folders[2].sliders[3].range, 0.0..=1.0);
    }
}
