use crate::constants::{
    FIELD_SPIN_PER_SEC, FIELD_TILT_PER_POINTER_Y, NARROW_VIEWPORT_CSS_PX, PARTICLE_DRIFT_PER_FRAME,
    PARTICLE_SPREAD_X_NARROW, PARTICLE_SPREAD_X_WIDE, PARTICLE_SPREAD_Y, PARTICLE_SPREAD_Z,
    PARTICLE_Y_MAX, PARTICLE_Y_MIN, REPULSION_RADIUS, REPULSION_STRENGTH,
};
use glam::{Mat4, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One dust particle as uploaded to the GPU instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Particle {
    pub position: [f32; 3],
    pub scale: f32,
}

/// Fixed-size ambient particle field.
///
/// The backing vector is allocated once in [`ParticleField::new`] and only
/// mutated in place afterwards, so its buffer can be re-uploaded verbatim
/// every frame.
pub struct ParticleField {
    particles: Vec<Particle>,
    rotation: Vec2,
}

/// Narrow (phone) viewports get a tighter horizontal spread so the dust stays
/// on screen.
#[inline]
pub fn spread_x_for_width(css_width: f32) -> f32 {
    if css_width < NARROW_VIEWPORT_CSS_PX {
        PARTICLE_SPREAD_X_NARROW
    } else {
        PARTICLE_SPREAD_X_WIDE
    }
}

impl ParticleField {
    pub fn new(count: usize, spread_x: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| {
                let x = (rng.gen::<f32>() - 0.5) * spread_x;
                let y = (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD_Y;
                let z = (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD_Z;
                Particle {
                    position: [x, y.clamp(PARTICLE_Y_MIN, PARTICLE_Y_MAX), z],
                    scale: rng.gen::<f32>(),
                }
            })
            .collect();
        Self {
            particles,
            rotation: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Instance data ready for `Queue::write_buffer`.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.particles)
    }

    /// Drift every particle upward, push those near `pointer_world` away from
    /// it, then wrap the vertical coordinate back into range.
    pub fn step(&mut self, pointer_world: Vec2) {
        for p in self.particles.iter_mut() {
            p.position[1] += PARTICLE_DRIFT_PER_FRAME;
            let dx = p.position[0] - pointer_world.x;
            let dy = p.position[1] - pointer_world.y;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < REPULSION_RADIUS {
                let force = (REPULSION_RADIUS - dist) * REPULSION_STRENGTH;
                p.position[0] += dx * force;
                p.position[1] += dy * force;
            }
            p.position[1] = wrap_vertical(p.position[1]);
        }
    }

    /// Update the whole-field rotation: slow spin around Y from elapsed time,
    /// tilt around X from the smoothed pointer height.
    #[inline]
    pub fn orient(&mut self, elapsed_sec: f32, pointer_y: f32) {
        self.rotation = field_rotation(elapsed_sec, pointer_y);
    }

    #[inline]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    #[inline]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation.x) * Mat4::from_rotation_y(self.rotation.y)
    }
}

#[inline]
pub fn wrap_vertical(y: f32) -> f32 {
    if y > PARTICLE_Y_MAX || y < PARTICLE_Y_MIN || !y.is_finite() {
        PARTICLE_Y_MIN
    } else {
        y
    }
}

#[inline]
pub fn field_rotation(elapsed_sec: f32, pointer_y: f32) -> Vec2 {
    Vec2::new(
        pointer_y * FIELD_TILT_PER_POINTER_Y,
        elapsed_sec * FIELD_SPIN_PER_SEC,
    )
}

/// RGBA8 texels of a soft round sprite: opaque white at the centre fading to
/// fully transparent at the rim.
pub fn sprite_texels(size: u32) -> Vec<u8> {
    let n = size.max(1);
    let center = n as f32 * 0.5;
    let mut out = Vec::with_capacity((n * n * 4) as usize);
    for y in 0..n {
        for x in 0..n {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let t = ((dx * dx + dy * dy).sqrt() / center).clamp(0.0, 1.0);
            let alpha = ((1.0 - t) * 255.0).round() as u8;
            out.extend_from_slice(&[255, 255, 255, alpha]);
        }
    }
    out
}
