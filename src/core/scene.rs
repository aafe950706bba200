use crate::camera;
use crate::constants::PARTICLE_COUNT;
use crate::core::particles::{spread_x_for_width, Particle, ParticleField};
use crate::core::pointer::{normalize_orientation, InputSourceKind, PointerState};
use crate::core::viewport::Viewport;
use glam::{Mat4, Vec2};

/// Scene engine configuration, resolved once at mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub particle_spread_x: f32,
    pub seed: u64,
    pub input: InputSourceKind,
}

impl SceneConfig {
    pub fn for_viewport(viewport: &Viewport, seed: u64, input: InputSourceKind) -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            particle_spread_x: spread_x_for_width(viewport.width),
            seed,
            input,
        }
    }
}

/// Values one frame hands to the renderer, computed after input smoothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneFrame {
    pub time: f32,
    pub pointer: [f32; 2],
    pub resolution: [f32; 2],
    pub surface_size: (u32, u32),
    pub view_proj: Mat4,
    pub field_model: Mat4,
}

/// Everything the scene engine mutates between frames.
///
/// Input handlers only write the pointer target or the pending viewport;
/// [`SceneState::advance`] is the single place the frame is computed.
pub struct SceneState {
    config: SceneConfig,
    clock_time: f32,
    pointer: PointerState,
    field: ParticleField,
    viewport: Viewport,
    view_proj: Mat4,
}

impl SceneState {
    pub fn new(config: SceneConfig, viewport: Viewport) -> Self {
        Self {
            config,
            clock_time: 0.0,
            pointer: PointerState::default(),
            field: ParticleField::new(config.particle_count, config.particle_spread_x, config.seed),
            viewport,
            view_proj: camera::view_projection(&viewport),
        }
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[inline]
    pub fn clock_time(&self) -> f32 {
        self.clock_time
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }

    #[inline]
    pub fn particle_bytes(&self) -> &[u8] {
        self.field.as_bytes()
    }

    pub fn pointer_moved(&mut self, uv: Vec2) {
        self.pointer.set_target(uv);
    }

    pub fn orientation_changed(&mut self, beta: Option<f32>, gamma: Option<f32>) {
        self.pointer.set_target(normalize_orientation(beta, gamma));
    }

    /// Apply a new viewport. Applying the same viewport again is a no-op.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.view_proj = camera::view_projection(&viewport);
    }

    /// Advance one frame to `elapsed_sec` since mount.
    ///
    /// Order: clock, pointer smoothing, particles, field rotation. The
    /// returned frame is complete before anything is drawn.
    pub fn advance(&mut self, elapsed_sec: f32) -> SceneFrame {
        if elapsed_sec.is_finite() && elapsed_sec > self.clock_time {
            self.clock_time = elapsed_sec;
        }
        self.pointer.smooth();
        self.field.step(self.pointer.world());
        self.field.orient(self.clock_time, self.pointer.current.y);
        self.frame()
    }

    /// Current frame values without advancing anything.
    pub fn frame(&self) -> SceneFrame {
        SceneFrame {
            time: self.clock_time,
            pointer: self.pointer.current.to_array(),
            resolution: self.viewport.resolution(),
            surface_size: self.viewport.surface_size(),
            view_proj: self.view_proj,
            field_model: self.field.model_matrix(),
        }
    }
}
