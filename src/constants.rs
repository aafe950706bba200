/// Scene engine tuning constants.
///
/// These express the intended feel of the background (a viscous pointer,
/// slow upward dust, a wide noise plane) and keep magic numbers out of the
/// frame loop.
// Per-frame weight used to ease the displayed pointer toward its target
pub const POINTER_SMOOTHING: f32 = 0.05;
// Pointer rests at the middle of the surface until the first input
pub const POINTER_REST: [f32; 2] = [0.5, 0.5];

// Device orientation mapping (degrees)
pub const ORIENTATION_GAMMA_SPAN_DEG: f32 = 90.0;
pub const ORIENTATION_BETA_REST_DEG: f32 = 45.0; // typical reading angle
pub const ORIENTATION_BETA_SPAN_DEG: f32 = 90.0;

// Particle field
pub const PARTICLE_COUNT: usize = 120;
pub const PARTICLE_Y_MIN: f32 = -5.0;
pub const PARTICLE_Y_MAX: f32 = 5.0;
pub const PARTICLE_DRIFT_PER_FRAME: f32 = 0.002;
pub const PARTICLE_SPREAD_X_WIDE: f32 = 30.0;
pub const PARTICLE_SPREAD_X_NARROW: f32 = 12.0;
pub const PARTICLE_SPREAD_Y: f32 = 10.0;
pub const PARTICLE_SPREAD_Z: f32 = 5.0;
pub const NARROW_VIEWPORT_CSS_PX: f32 = 768.0;

// Pointer repulsion
pub const REPULSION_RADIUS: f32 = 2.0;
pub const REPULSION_STRENGTH: f32 = 0.01;
// Maps the smoothed pointer (0..1) onto the particle plane
pub const POINTER_WORLD_SPAN: [f32; 2] = [10.0, 6.0];

// Whole-field rotation
pub const FIELD_SPIN_PER_SEC: f32 = 0.02;
pub const FIELD_TILT_PER_POINTER_Y: f32 = 0.1;

// Particle look
pub const PARTICLE_SIZE: f32 = 0.04;
pub const PARTICLE_OPACITY: f32 = 0.3;
pub const PARTICLE_COLOR: [f32; 3] = [0.8, 0.867, 1.0]; // #ccddff
pub const SPRITE_TEXTURE_SIZE: u32 = 32;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_Z: f32 = 5.0;

// Output
pub const MAX_DEVICE_PIXEL_RATIO: f32 = 2.0;
pub const CLEAR_COLOR: [f64; 3] = [0.0196, 0.0196, 0.0627]; // #050510
