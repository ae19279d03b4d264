pub mod animation;
pub mod app;
pub mod camera;
pub mod cli;
pub mod controls;
pub mod core;
pub mod error;
pub mod geometry;
pub mod material;
pub mod mesh;
pub mod overlay;
pub mod panel;
pub mod renderer;
pub mod scene;
pub mod traits;
pub mod types;

pub use app::Showcase;
pub use camera::OrbitCamera;
pub use controls::{ControlEvent, GlobalControlState, PanelLayout};
pub use error::{RenderError, SceneError};
pub use geometry::{GeometryCatalog, Shape};
pub use material::{MaterialCatalog, MaterialId, MaterialKind, MaterialParam};
pub use renderer::ShowcaseRenderer;
pub use scene::{InstanceId, RenderableInstance, SceneComposer};
