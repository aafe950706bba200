pub mod catalog;
pub mod constants;
pub mod cursor;
pub mod particles;
pub mod pointer;
pub mod resources;
pub mod scene;
pub mod tilt;
pub mod viewport;

// Shaders bundled as string constants
pub static BACKGROUND_WGSL: &str = include_str!("../../shaders/background.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
