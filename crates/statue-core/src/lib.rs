pub mod animate;
pub mod constants;
pub mod geometry;
pub mod layout;
pub mod lights;
pub mod render;
pub mod scene;
pub mod session;
pub mod state;
pub mod statue;
pub mod texture;
pub mod trail;
pub mod tween;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");

pub use layout::{Breakpoint, Placement};
pub use render::Renderer;
pub use session::{Session, SessionParams};
pub use state::*;
