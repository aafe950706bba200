use crate::constants::MAX_DEVICE_PIXEL_RATIO;

/// Host viewport in CSS pixels plus the device pixel ratio reported with it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        let sane = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            width: sane(width),
            height: sane(height),
            device_pixel_ratio: sane(device_pixel_ratio),
        }
    }

    /// Device pixel ratio capped to keep fill cost bounded on dense screens.
    #[inline]
    pub fn pixel_ratio(&self) -> f32 {
        if self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio.min(MAX_DEVICE_PIXEL_RATIO)
        } else {
            1.0
        }
    }

    /// Shader resolution uniform in physical pixels.
    #[inline]
    pub fn resolution(&self) -> [f32; 2] {
        let (w, h) = self.surface_size();
        [w as f32, h as f32]
    }

    /// Renderer output size; never zero so surface configuration stays valid.
    #[inline]
    pub fn surface_size(&self) -> (u32, u32) {
        let r = self.pixel_ratio();
        let w = (self.width * r).round() as u32;
        let h = (self.height * r).round() as u32;
        (w.max(1), h.max(1))
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}
