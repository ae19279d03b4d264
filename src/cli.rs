// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::controls::{GlobalControlState, DEFAULT_ROTATION_SPEED};
use crate::geometry::Shape;

#[derive(Parser, Debug, Clone)]
#[command(name = "material-showcase")]
#[command(about = "Rotating row of primitives under four shading models", long_about = None)]
pub struct Cli {
    /// Initial shape (Sphere, Box, Cone, Cylinder, Torus, TorusKnot)
    #[arg(long, default_value = "Sphere", value_parser = parse_shape)]
    pub shape: Shape,

    /// Radians added to each axis per frame, clamped to [0, 0.1]
    #[arg(long = "rotation-speed", default_value_t = DEFAULT_ROTATION_SPEED)]
    pub rotation_speed: f32,

    /// Start with rotation disabled
    #[arg(long, default_value = "false")]
    pub paused: bool,

    /// Hide the settings panel
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    /// Initial control state, with the speed clamped to the slider domain
    pub fn control_state(&self) -> GlobalControlState {
        GlobalControlState::new(self.shape, self.rotation_speed, !self.paused)
    }
}

fn parse_shape(name: &str) -> Result<Shape, String> {
    name.parse().map_err(|err: crate::error::SceneError| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["material-showcase"]).unwrap();
        assert_eq!(cli.control_state(), GlobalControlState::default());
        assert!(!cli.no_ui);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "material-showcase",
            "--shape",
            "TorusKnot",
            "--rotation-speed",
            "0.05",
            "--paused",
            "--no-ui",
        ])
        .unwrap();

        let state = cli.control_state();
        assert_eq!(state.shape, Shape::TorusKnot);
        assert_eq!(state.rotation_speed, 0.05);
        assert!(!state.rotation_enabled);
        assert!(cli.no_ui);
    }

    #[test]
    fn test_unknown_shape_rejected() {
        assert!(Cli::try_parse_from(["material-showcase", "--shape", "Teapot"]).is_err());
    }

    #[test]
    fn test_rotation_speed_clamped() {
        let cli = Cli::try_parse_from(["material-showcase", "--rotation-speed", "3"]).unwrap();
        assert_eq!(cli.control_state().rotation_speed, 0.1);
    }
}
