use crate::constants::{
    ORIENTATION_BETA_REST_DEG, ORIENTATION_BETA_SPAN_DEG, ORIENTATION_GAMMA_SPAN_DEG,
    POINTER_REST, POINTER_SMOOTHING, POINTER_WORLD_SPAN,
};
use glam::Vec2;

/// Which physical input drives an engine on this platform.
///
/// Resolved once at mount from capability probing; the frame loops never
/// look at the environment again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSourceKind {
    Pointer,
    Orientation,
}

impl InputSourceKind {
    #[inline]
    pub fn resolve(touch_capable: bool) -> Self {
        if touch_capable {
            InputSourceKind::Orientation
        } else {
            InputSourceKind::Pointer
        }
    }
}

/// Raw and smoothed pointer position in normalized surface space
/// (`[0,1]²`, y up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub target: Vec2,
    pub current: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        let rest = Vec2::from(POINTER_REST);
        Self {
            target: rest,
            current: rest,
        }
    }
}

impl PointerState {
    #[inline]
    pub fn set_target(&mut self, uv: Vec2) {
        if uv.is_finite() {
            self.target = uv.clamp(Vec2::ZERO, Vec2::ONE);
        }
    }

    /// Ease `current` one frame toward `target`.
    #[inline]
    pub fn smooth(&mut self) {
        self.current = smooth_toward(self.current, self.target, POINTER_SMOOTHING);
    }

    /// Smoothed pointer projected onto the particle plane.
    #[inline]
    pub fn world(&self) -> Vec2 {
        pointer_world(self.current)
    }
}

#[inline]
pub fn smooth_toward(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}

/// Client-space pointer coordinates to `[0,1]²` with y flipped
/// (screen-down to shader-up).
#[inline]
pub fn normalize_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::from(POINTER_REST);
    }
    let u = (client_x / width).clamp(0.0, 1.0);
    let v = 1.0 - (client_y / height).clamp(0.0, 1.0);
    Vec2::new(u, v)
}

/// Device orientation to the pointer's coordinate space, assuming the phone
/// is held upright at a reading angle. Missing components read as 0°.
#[inline]
pub fn normalize_orientation(beta: Option<f32>, gamma: Option<f32>) -> Vec2 {
    let beta = beta.filter(|b| b.is_finite()).unwrap_or(0.0);
    let gamma = gamma.filter(|g| g.is_finite()).unwrap_or(0.0);
    let x = 0.5 + gamma / ORIENTATION_GAMMA_SPAN_DEG;
    let y = 0.5 - (beta - ORIENTATION_BETA_REST_DEG) / ORIENTATION_BETA_SPAN_DEG;
    Vec2::new(x.clamp(0.0, 1.0), y.clamp(0.0, 1.0))
}

#[inline]
pub fn pointer_world(uv: Vec2) -> Vec2 {
    (uv - Vec2::splat(0.5)) * Vec2::from(POINTER_WORLD_SPAN)
}
