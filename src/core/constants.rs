// Tilt card and cursor tuning constants shared by the engines and their presentation sinks.

// Pointer-driven tilt
pub const HOVER_MAX_ROTATION_DEG: f32 = 8.0;
pub const HOVER_MAX_PARALLAX_PX: f32 = 15.0;
pub const HOVER_SHINE_OPACITY: f32 = 0.15;

// Orientation-driven tilt
pub const ORIENTATION_NEUTRAL_BETA_DEG: f32 = 45.0;
pub const ORIENTATION_CLAMP_DEG: f32 = 20.0;
pub const ORIENTATION_ROTATION_GAIN: f32 = 0.5; // ±20° input -> ±10° tilt
pub const ORIENTATION_PARALLAX_GAIN: f32 = 0.8;
pub const ORIENTATION_SHINE_BASE: f32 = 0.1;
pub const ORIENTATION_SHINE_PER_DEG: f32 = 1.0 / 40.0;

// Idle breathing: amplitudes and angular rates per axis
pub const IDLE_ROTATE_X_AMP_DEG: f32 = 2.0;
pub const IDLE_ROTATE_X_RATE: f32 = 0.5;
pub const IDLE_ROTATE_Y_AMP_DEG: f32 = 3.0;
pub const IDLE_ROTATE_Y_RATE: f32 = 0.3;
pub const IDLE_PARALLAX_AMP_PX: f32 = 4.0;
pub const IDLE_SHINE_BASE: f32 = 0.3;
pub const IDLE_SHINE_AMP: f32 = 0.15;
pub const IDLE_SHINE_RATE: f32 = 0.8;
pub const IDLE_SHINE_SCALE: f32 = 0.15;
// Seconds of idle phase between neighbouring gallery cards (phi squared)
pub const IDLE_PHASE_STEP_SEC: f32 = 2.618;

// Presentation
pub const IMAGE_OVERSCALE: f32 = 1.15;
pub const IMAGE_DEPTH_PX: f32 = -20.0;
pub const SHINE_BASE_ANGLE_DEG: f32 = 135.0;
pub const SHINE_ANGLE_PER_ROTATE_Y: f32 = 2.0;
pub const SNAP_TRANSITION_SEC: f32 = 0.1;
pub const SETTLE_TRANSITION_SEC: f32 = 1.0;

// Custom cursor
pub const CURSOR_SMOOTHING: f32 = 0.15;
pub const CURSOR_SIZE_PX: f32 = 12.0;
pub const CURSOR_HOVER_SIZE_PX: f32 = 64.0;
pub const CURSOR_HOVER_OPACITY: f32 = 0.8;
pub const CURSOR_DEFAULT_LABEL: &str = "Ouvrir";
pub const CURSOR_INTERACTIVE_SELECTOR: &str = "a, button, input, textarea, .cursor-pointer";
pub const CURSOR_TEXT_ATTR: &str = "data-cursor-text";
// Size and opacity ease; the position is already smoothed per frame
pub const CURSOR_TRANSITION: &str = "width 0.3s ease-out, height 0.3s ease-out, opacity 0.3s ease-out";
pub const CURSOR_LABEL_TRANSITION: &str = "opacity 0.2s";
