// Host-side tests for pointer normalization and smoothing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
}

use crate::core::pointer::*;
use glam::Vec2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn input_kind_follows_touch_capability() {
    assert_eq!(InputSourceKind::resolve(true), InputSourceKind::Orientation);
    assert_eq!(InputSourceKind::resolve(false), InputSourceKind::Pointer);
}

#[test]
fn pointer_starts_at_rest_in_the_middle() {
    let p = PointerState::default();
    assert_eq!(p.target, Vec2::splat(0.5));
    assert_eq!(p.current, Vec2::splat(0.5));
    assert_eq!(p.world(), Vec2::ZERO);
}

#[test]
fn client_coordinates_flip_y() {
    let uv = normalize_client(0.0, 0.0, 800.0, 600.0);
    assert_eq!(uv, Vec2::new(0.0, 1.0));
    let uv = normalize_client(800.0, 600.0, 800.0, 600.0);
    assert_eq!(uv, Vec2::new(1.0, 0.0));
    let uv = normalize_client(200.0, 150.0, 800.0, 600.0);
    assert!(approx(uv.x, 0.25) && approx(uv.y, 0.75));
}

#[test]
fn client_coordinates_are_clamped_and_survive_empty_viewports() {
    let uv = normalize_client(-50.0, 10_000.0, 800.0, 600.0);
    assert_eq!(uv, Vec2::new(0.0, 0.0));
    assert_eq!(normalize_client(10.0, 10.0, 0.0, 600.0), Vec2::splat(0.5));
    assert_eq!(normalize_client(10.0, 10.0, 800.0, -1.0), Vec2::splat(0.5));
}

#[test]
fn orientation_maps_reading_angle_to_rest() {
    let uv = normalize_orientation(Some(45.0), Some(0.0));
    assert!(approx(uv.x, 0.5) && approx(uv.y, 0.5));

    // Tilting right moves x up, tilting back moves y down
    let uv = normalize_orientation(Some(67.5), Some(22.5));
    assert!(approx(uv.x, 0.75));
    assert!(approx(uv.y, 0.25));
}

#[test]
fn orientation_is_clamped_and_missing_components_read_as_zero() {
    let uv = normalize_orientation(Some(180.0), Some(-180.0));
    assert_eq!(uv, Vec2::new(0.0, 0.0));

    // beta 0 is 45 degrees away from the reading angle: y = 0.5 + 0.5
    let uv = normalize_orientation(None, None);
    assert!(approx(uv.x, 0.5));
    assert!(approx(uv.y, 1.0));

    let uv = normalize_orientation(Some(f32::NAN), Some(f32::INFINITY));
    assert!(uv.is_finite());
}

#[test]
fn smoothing_converges_without_overshoot() {
    let mut p = PointerState::default();
    p.set_target(Vec2::ONE);
    let mut last_gap = (p.target - p.current).length();
    for frame in 0..130 {
        p.smooth();
        let gap = (p.target - p.current).length();
        assert!(gap < last_gap, "frame {}: gap did not shrink", frame);
        assert!(p.current.x <= 1.0 && p.current.y <= 1.0, "overshoot");
        last_gap = gap;
    }
    assert!((p.current - Vec2::ONE).abs().max_element() < 1e-3);
}

#[test]
fn smoothing_is_a_fixed_fraction_per_frame() {
    let next = smooth_toward(Vec2::ZERO, Vec2::new(1.0, -1.0), 0.05);
    assert!(approx(next.x, 0.05));
    assert!(approx(next.y, -0.05));
}

#[test]
fn ten_frames_are_not_enough_to_arrive() {
    let mut p = PointerState::default();
    p.set_target(Vec2::ZERO);
    for _ in 0..10 {
        p.smooth();
    }
    assert!(p.current.x > 0.25, "pointer should still lag: {:?}", p.current);
}

#[test]
fn set_target_clamps_and_ignores_garbage() {
    let mut p = PointerState::default();
    p.set_target(Vec2::new(2.0, -3.0));
    assert_eq!(p.target, Vec2::new(1.0, 0.0));
    p.set_target(Vec2::new(f32::NAN, 0.3));
    assert_eq!(p.target, Vec2::new(1.0, 0.0));
}

#[test]
fn world_projection_spans_the_particle_plane() {
    assert_eq!(pointer_world(Vec2::ZERO), Vec2::new(-5.0, -3.0));
    assert_eq!(pointer_world(Vec2::ONE), Vec2::new(5.0, 3.0));
}
