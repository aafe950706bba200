// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_constants_are_consistent() {
    assert!(POINTER_SMOOTHING > 0.0 && POINTER_SMOOTHING < 1.0);
    assert!(PARTICLE_Y_MIN < PARTICLE_Y_MAX);
    assert_eq!(PARTICLE_SPREAD_Y, PARTICLE_Y_MAX - PARTICLE_Y_MIN);
    assert!(PARTICLE_SPREAD_X_NARROW < PARTICLE_SPREAD_X_WIDE);
    assert!(PARTICLE_DRIFT_PER_FRAME > 0.0);
    assert!(PARTICLE_DRIFT_PER_FRAME < PARTICLE_SPREAD_Y);
    assert!(REPULSION_RADIUS > 0.0 && REPULSION_STRENGTH > 0.0);
    // Full repulsion never moves a particle further than the radius itself
    assert!(REPULSION_RADIUS * REPULSION_STRENGTH < 1.0);
    assert!(CAMERA_NEAR < CAMERA_Z && CAMERA_Z < CAMERA_FAR);
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(PARTICLE_OPACITY > 0.0 && PARTICLE_OPACITY <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tilt_constants_are_consistent() {
    assert!(SNAP_TRANSITION_SEC < SETTLE_TRANSITION_SEC);
    assert_eq!(ORIENTATION_CLAMP_DEG * ORIENTATION_ROTATION_GAIN, 10.0);
    assert!(IDLE_SHINE_BASE - IDLE_SHINE_AMP > 0.0);
    assert!(IDLE_ROTATE_X_AMP_DEG < HOVER_MAX_ROTATION_DEG);
    assert!(IDLE_ROTATE_Y_AMP_DEG < HOVER_MAX_ROTATION_DEG);
    assert!(IMAGE_OVERSCALE > 1.0);
    assert!(IDLE_PHASE_STEP_SEC > 0.0);
}
