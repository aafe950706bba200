use crate::core::constants::*;
use crate::core::pointer::InputSourceKind;
use glam::Vec2;

/// Latest device orientation reading, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub beta: f32,
    pub gamma: f32,
}

/// Which input drives a card on a given frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltPolicy {
    Hover,
    Orientation,
    Idle,
}

/// CSS transition applied to the card and image layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Quick follow while the pointer is over the card.
    Snap,
    /// Slow ease back once the pointer leaves.
    Settle,
}

impl Transition {
    #[inline]
    pub fn duration_sec(self) -> f32 {
        match self {
            Transition::Snap => SNAP_TRANSITION_SEC,
            Transition::Settle => SETTLE_TRANSITION_SEC,
        }
    }

    pub fn css(self) -> String {
        match self {
            Transition::Snap => format!("transform {}s ease-out", SNAP_TRANSITION_SEC),
            Transition::Settle => format!("transform {}s ease-in-out", SETTLE_TRANSITION_SEC),
        }
    }
}

/// Per-frame card transform. Derived, never stored by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltTransform {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub image_offset: Vec2,
    pub shine_opacity: f32,
    pub shine_angle: f32,
}

impl Default for TiltTransform {
    fn default() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            image_offset: Vec2::ZERO,
            shine_opacity: 0.0,
            shine_angle: SHINE_BASE_ANGLE_DEG,
        }
    }
}

impl TiltTransform {
    pub fn card_css(&self) -> String {
        format!(
            "rotateX({:.3}deg) rotateY({:.3}deg)",
            self.rotate_x, self.rotate_y
        )
    }

    pub fn image_css(&self) -> String {
        format!(
            "scale({}) translate3d({:.3}px, {:.3}px, {}px)",
            IMAGE_OVERSCALE, self.image_offset.x, self.image_offset.y, IMAGE_DEPTH_PX
        )
    }

    pub fn shine_css(&self) -> String {
        format!(
            "linear-gradient({:.3}deg, rgba(255,255,255,{:.4}) 0%, rgba(255,255,255,0) 100%)",
            self.shine_angle,
            self.shine_opacity.clamp(0.0, 1.0)
        )
    }
}

/// Pointer-driven tilt from a card-local position and the card size.
///
/// Offsets are normalized by the half extents and clamped, so positions far
/// outside the card still land on the ±8° / ±15px limits.
pub fn hover_transform(local: Vec2, size: Vec2) -> TiltTransform {
    if !(size.x > 0.0 && size.y > 0.0) || !local.is_finite() {
        return TiltTransform {
            shine_opacity: HOVER_SHINE_OPACITY,
            ..TiltTransform::default()
        };
    }
    let half = size * 0.5;
    let n = ((local - half) / half).clamp(Vec2::NEG_ONE, Vec2::ONE);
    TiltTransform {
        rotate_x: -n.y * HOVER_MAX_ROTATION_DEG,
        rotate_y: n.x * HOVER_MAX_ROTATION_DEG,
        image_offset: n * -HOVER_MAX_PARALLAX_PX,
        shine_opacity: HOVER_SHINE_OPACITY,
        shine_angle: SHINE_BASE_ANGLE_DEG,
    }
}

/// Orientation-driven tilt, offset from a phone held at a reading angle.
pub fn orientation_transform(o: Orientation) -> TiltTransform {
    let tilt_x = (o.beta - ORIENTATION_NEUTRAL_BETA_DEG)
        .clamp(-ORIENTATION_CLAMP_DEG, ORIENTATION_CLAMP_DEG);
    let tilt_y = o.gamma.clamp(-ORIENTATION_CLAMP_DEG, ORIENTATION_CLAMP_DEG);
    let rotate_x = -tilt_x * ORIENTATION_ROTATION_GAIN;
    let rotate_y = tilt_y * ORIENTATION_ROTATION_GAIN;
    TiltTransform {
        rotate_x,
        rotate_y,
        image_offset: Vec2::new(-tilt_y, -tilt_x) * ORIENTATION_PARALLAX_GAIN,
        shine_opacity: ORIENTATION_SHINE_BASE
            + (rotate_x.abs() + rotate_y.abs()) * ORIENTATION_SHINE_PER_DEG,
        shine_angle: SHINE_BASE_ANGLE_DEG + rotate_y * SHINE_ANGLE_PER_ROTATE_Y,
    }
}

/// Autonomous breathing motion at time `t` (seconds, phase already applied).
pub fn idle_transform(t: f32) -> TiltTransform {
    let (sin_x, cos_y) = ((t * IDLE_ROTATE_X_RATE).sin(), (t * IDLE_ROTATE_Y_RATE).cos());
    let shine = IDLE_SHINE_BASE + (t * IDLE_SHINE_RATE).sin() * IDLE_SHINE_AMP;
    TiltTransform {
        rotate_x: sin_x * IDLE_ROTATE_X_AMP_DEG,
        rotate_y: cos_y * IDLE_ROTATE_Y_AMP_DEG,
        image_offset: Vec2::new(cos_y, sin_x) * -IDLE_PARALLAX_AMP_PX,
        shine_opacity: shine * IDLE_SHINE_SCALE,
        shine_angle: SHINE_BASE_ANGLE_DEG,
    }
}

/// Idle phase for the card at `index` in the gallery, so siblings never
/// breathe in lockstep.
#[inline]
pub fn phase_offset_for_index(index: usize) -> f32 {
    index as f32 * IDLE_PHASE_STEP_SEC
}

/// State of one tilt card between frames.
pub struct TiltState {
    input: InputSourceKind,
    phase: f32,
    hovered: bool,
    orientation: Option<Orientation>,
    pointer: Option<(Vec2, Vec2)>,
    transition: Transition,
    last: TiltTransform,
}

impl TiltState {
    pub fn new(input: InputSourceKind, phase: f32) -> Self {
        let phase = if phase.is_finite() { phase } else { 0.0 };
        Self {
            input,
            phase,
            hovered: false,
            orientation: None,
            pointer: None,
            transition: Transition::Settle,
            last: idle_transform(phase),
        }
    }

    #[inline]
    pub fn input(&self) -> InputSourceKind {
        self.input
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[inline]
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    #[inline]
    pub fn transition(&self) -> Transition {
        self.transition
    }

    #[inline]
    pub fn last_transform(&self) -> TiltTransform {
        self.last
    }

    pub fn pointer_enter(&mut self) -> Transition {
        self.hovered = true;
        self.transition = Transition::Snap;
        self.transition
    }

    pub fn pointer_leave(&mut self) -> Transition {
        self.hovered = false;
        self.pointer = None;
        self.transition = Transition::Settle;
        self.transition
    }

    /// Record a pointer sample and return the transform to write right away.
    ///
    /// Returns `None` when the card is not hovered; the frame loop owns the
    /// card then.
    pub fn pointer_move(&mut self, local: Vec2, size: Vec2) -> Option<TiltTransform> {
        if !self.hovered {
            return None;
        }
        self.pointer = Some((local, size));
        self.last = hover_transform(local, size);
        Some(self.last)
    }

    /// Store an orientation reading. Partial readings are ignored.
    pub fn set_orientation(&mut self, beta: Option<f32>, gamma: Option<f32>) {
        if let (Some(beta), Some(gamma)) = (beta, gamma) {
            if beta.is_finite() && gamma.is_finite() {
                self.orientation = Some(Orientation { beta, gamma });
            }
        }
    }

    /// Hover beats orientation, which beats idle breathing.
    pub fn policy(&self) -> TiltPolicy {
        if self.hovered {
            TiltPolicy::Hover
        } else if self.input == InputSourceKind::Orientation && self.orientation.is_some() {
            TiltPolicy::Orientation
        } else {
            TiltPolicy::Idle
        }
    }

    /// Transform for the frame at `elapsed_sec` since mount.
    pub fn frame(&mut self, elapsed_sec: f32) -> TiltTransform {
        let t = match self.policy() {
            TiltPolicy::Hover => match self.pointer {
                Some((local, size)) => hover_transform(local, size),
                None => self.last,
            },
            TiltPolicy::Orientation => match self.orientation {
                Some(o) => orientation_transform(o),
                None => idle_transform(elapsed_sec + self.phase),
            },
            TiltPolicy::Idle => idle_transform(elapsed_sec + self.phase),
        };
        self.last = t;
        t
    }
}
