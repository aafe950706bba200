use crate::core::constants::{
    CURSOR_DEFAULT_LABEL, CURSOR_HOVER_OPACITY, CURSOR_HOVER_SIZE_PX, CURSOR_SIZE_PX,
    CURSOR_SMOOTHING,
};
use crate::core::pointer::smooth_toward;
use glam::Vec2;

/// Size, opacity and label visibility of the cursor disc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorLook {
    pub size_px: f32,
    pub opacity: f32,
    pub label_opacity: f32,
}

/// Custom cursor state: raw mouse position, the lagging displayed position
/// and the hover state over interactive elements.
///
/// Positions are client-space CSS pixels. The cursor starts at the top-left
/// corner until the first mouse move.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorState {
    target: Vec2,
    current: Vec2,
    hovering: bool,
    label: String,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            target: Vec2::ZERO,
            current: Vec2::ZERO,
            hovering: false,
            label: CURSOR_DEFAULT_LABEL.to_string(),
        }
    }
}

impl CursorState {
    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn mouse_moved(&mut self, client: Vec2) {
        if client.is_finite() {
            self.target = client;
        }
    }

    /// Ease the displayed position one frame toward the mouse.
    pub fn step(&mut self) -> Vec2 {
        self.current = smooth_toward(self.current, self.target, CURSOR_SMOOTHING);
        self.current
    }

    /// Enter an interactive element. A missing or empty label falls back to
    /// the default one.
    pub fn enter_interactive(&mut self, label: Option<&str>) {
        self.hovering = true;
        self.label = match label {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => CURSOR_DEFAULT_LABEL.to_string(),
        };
    }

    /// Leave an interactive element. The label is kept so it does not flash
    /// while the disc fades out.
    pub fn leave_interactive(&mut self) {
        self.hovering = false;
    }

    pub fn look(&self) -> CursorLook {
        if self.hovering {
            CursorLook {
                size_px: CURSOR_HOVER_SIZE_PX,
                opacity: CURSOR_HOVER_OPACITY,
                label_opacity: 1.0,
            }
        } else {
            CursorLook {
                size_px: CURSOR_SIZE_PX,
                opacity: 1.0,
                label_opacity: 0.0,
            }
        }
    }

    /// Centred on the displayed position.
    pub fn transform_css(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%)",
            self.current.x, self.current.y
        )
    }
}
