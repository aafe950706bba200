// Host-side tests for the tilt policy and transforms.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
    pub mod tilt {
        include!("../src/core/tilt.rs");
    }
}

use crate::core::pointer::InputSourceKind;
use crate::core::tilt::*;
use glam::Vec2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

const CARD: Vec2 = Vec2::new(300.0, 400.0);

#[test]
fn policy_priority_covers_every_combination() {
    for input in [InputSourceKind::Pointer, InputSourceKind::Orientation] {
        for hovered in [false, true] {
            for reading in [false, true] {
                let mut s = TiltState::new(input, 0.0);
                if hovered {
                    s.pointer_enter();
                }
                if reading {
                    s.set_orientation(Some(60.0), Some(10.0));
                }
                let expected = if hovered {
                    TiltPolicy::Hover
                } else if reading && input == InputSourceKind::Orientation {
                    TiltPolicy::Orientation
                } else {
                    TiltPolicy::Idle
                };
                assert_eq!(
                    s.policy(),
                    expected,
                    "input={:?} hovered={} reading={}",
                    input,
                    hovered,
                    reading
                );
            }
        }
    }
}

#[test]
fn hover_centre_is_flat() {
    let t = hover_transform(CARD * 0.5, CARD);
    assert!(approx(t.rotate_x, 0.0) && approx(t.rotate_y, 0.0));
    assert!(approx(t.image_offset.length(), 0.0));
    assert!(approx(t.shine_opacity, 0.15));
}

#[test]
fn hover_edges_reach_the_limits() {
    // Right edge, vertical centre
    let t = hover_transform(Vec2::new(CARD.x, CARD.y * 0.5), CARD);
    assert!(approx(t.rotate_y, 8.0));
    assert!(approx(t.rotate_x, 0.0));
    assert!(approx(t.image_offset.x, -15.0));

    // Top-left corner tilts the top toward the viewer
    let t = hover_transform(Vec2::ZERO, CARD);
    assert!(approx(t.rotate_x, 8.0));
    assert!(approx(t.rotate_y, -8.0));
    assert!(approx(t.image_offset.x, 15.0) && approx(t.image_offset.y, 15.0));
}

#[test]
fn hover_is_clamped_far_outside_the_card() {
    let t = hover_transform(Vec2::new(1.0e6, -1.0e6), CARD);
    assert!(t.rotate_x.abs() <= 8.0 && t.rotate_y.abs() <= 8.0);
    assert!(t.image_offset.abs().max_element() <= 15.0);
}

#[test]
fn hover_on_a_collapsed_card_is_neutral() {
    let t = hover_transform(Vec2::new(10.0, 10.0), Vec2::ZERO);
    assert_eq!(t.rotate_x, 0.0);
    assert_eq!(t.rotate_y, 0.0);
    assert!(approx(t.shine_opacity, 0.15));
    let t = hover_transform(Vec2::new(f32::NAN, 1.0), CARD);
    assert_eq!(t.image_offset, Vec2::ZERO);
}

#[test]
fn orientation_at_reading_angle_is_flat() {
    let t = orientation_transform(Orientation {
        beta: 45.0,
        gamma: 0.0,
    });
    assert!(approx(t.rotate_x, 0.0) && approx(t.rotate_y, 0.0));
    assert!(approx(t.shine_opacity, 0.1));
    assert!(approx(t.shine_angle, 135.0));
}

#[test]
fn orientation_is_clamped_to_ten_degrees() {
    let t = orientation_transform(Orientation {
        beta: 170.0,
        gamma: 90.0,
    });
    assert!(approx(t.rotate_x, -10.0));
    assert!(approx(t.rotate_y, 10.0));
    assert!(approx(t.image_offset.x, -16.0) && approx(t.image_offset.y, -16.0));
    assert!(approx(t.shine_opacity, 0.6));
    assert!(approx(t.shine_angle, 155.0));

    let t = orientation_transform(Orientation {
        beta: -90.0,
        gamma: -90.0,
    });
    assert!(t.rotate_x.abs() <= 10.0 && t.rotate_y.abs() <= 10.0);
}

#[test]
fn idle_matches_closed_form() {
    let t = idle_transform(2.0);
    assert!(approx(t.rotate_x, 1.0f32.sin() * 2.0));
    assert!(approx(t.rotate_y, 0.6f32.cos() * 3.0));
    assert!(approx(t.image_offset.x, -(0.6f32.cos()) * 4.0));
    assert!(approx(t.image_offset.y, -(1.0f32.sin()) * 4.0));
    assert!(approx(t.shine_opacity, (0.3 + 1.6f32.sin() * 0.15) * 0.15));
}

#[test]
fn untouched_card_runs_idle_for_two_seconds() {
    // Touch card, no hover, no orientation reading yet
    let mut s = TiltState::new(InputSourceKind::Orientation, 0.0);
    let mut last = s.frame(0.0);
    for i in 1..=120 {
        last = s.frame(i as f32 / 60.0);
        assert_eq!(s.policy(), TiltPolicy::Idle, "frame {}", i);
    }
    assert_eq!(last, idle_transform(2.0));
    assert!(approx(last.rotate_x, 1.0f32.sin() * 2.0));
    assert!(approx(last.rotate_y, 0.6f32.cos() * 3.0));
    assert!(last.rotate_x.abs() > 0.1 && last.rotate_y.abs() > 0.1);
    assert_ne!(last, hover_transform(CARD * 0.5, CARD));
}

#[test]
fn idle_stays_within_amplitudes() {
    for i in 0..2000 {
        let t = idle_transform(i as f32 * 0.05);
        assert!(t.rotate_x.abs() <= 2.0 + 1e-5);
        assert!(t.rotate_y.abs() <= 3.0 + 1e-5);
        assert!(t.image_offset.abs().max_element() <= 4.0 + 1e-5);
        assert!(t.shine_opacity > 0.02 && t.shine_opacity < 0.07);
    }
}

#[test]
fn transitions_render_css() {
    assert_eq!(Transition::Snap.css(), "transform 0.1s ease-out");
    assert_eq!(Transition::Settle.css(), "transform 1s ease-in-out");
    assert!(Transition::Snap.duration_sec() < Transition::Settle.duration_sec());
}

#[test]
fn transform_css_strings() {
    let t = TiltTransform::default();
    assert_eq!(t.card_css(), "rotateX(0.000deg) rotateY(0.000deg)");
    assert_eq!(
        t.image_css(),
        "scale(1.15) translate3d(0.000px, 0.000px, -20px)"
    );
    assert_eq!(
        t.shine_css(),
        "linear-gradient(135.000deg, rgba(255,255,255,0.0000) 0%, rgba(255,255,255,0) 100%)"
    );

    let t = TiltTransform {
        rotate_x: -2.5,
        rotate_y: 8.0,
        image_offset: Vec2::new(1.25, -3.0),
        shine_opacity: 0.15,
        shine_angle: 135.0,
    };
    assert_eq!(t.card_css(), "rotateX(-2.500deg) rotateY(8.000deg)");
    assert!(t.image_css().contains("translate3d(1.250px, -3.000px, -20px)"));
    assert!(t.shine_css().contains("rgba(255,255,255,0.1500) 0%"));
}

#[test]
fn enter_and_leave_switch_transitions() {
    let mut s = TiltState::new(InputSourceKind::Pointer, 0.0);
    assert_eq!(s.transition(), Transition::Settle);
    assert_eq!(s.pointer_enter(), Transition::Snap);
    assert!(s.is_hovered());
    assert_eq!(s.pointer_leave(), Transition::Settle);
    assert!(!s.is_hovered());
    assert_eq!(s.policy(), TiltPolicy::Idle);
}

#[test]
fn pointer_move_only_applies_while_hovered() {
    let mut s = TiltState::new(InputSourceKind::Pointer, 0.0);
    assert!(s.pointer_move(Vec2::ZERO, CARD).is_none());

    s.pointer_enter();
    let t = s.pointer_move(Vec2::ZERO, CARD).expect("hovered");
    assert_eq!(t, hover_transform(Vec2::ZERO, CARD));
    assert_eq!(s.frame(3.0), t);
    assert_eq!(s.last_transform(), t);
}

#[test]
fn hover_without_a_sample_holds_the_last_transform() {
    let phase = 1.5;
    let mut s = TiltState::new(InputSourceKind::Pointer, phase);
    s.pointer_enter();
    assert_eq!(s.frame(10.0), idle_transform(phase));
}

#[test]
fn leaving_resumes_idle_with_phase() {
    let phase = 2.618;
    let mut s = TiltState::new(InputSourceKind::Pointer, phase);
    s.pointer_enter();
    s.pointer_move(Vec2::ZERO, CARD);
    s.pointer_leave();
    assert_eq!(s.frame(4.0), idle_transform(4.0 + phase));
}

#[test]
fn orientation_drives_touch_cards_until_hovered() {
    let mut s = TiltState::new(InputSourceKind::Orientation, 0.0);
    assert_eq!(s.frame(1.0), idle_transform(1.0));

    s.set_orientation(Some(55.0), Some(-8.0));
    let o = Orientation {
        beta: 55.0,
        gamma: -8.0,
    };
    assert_eq!(s.orientation(), Some(o));
    assert_eq!(s.frame(1.0), orientation_transform(o));

    s.pointer_enter();
    s.pointer_move(CARD * 0.5, CARD);
    assert_eq!(s.frame(1.0), hover_transform(CARD * 0.5, CARD));
}

#[test]
fn partial_orientation_readings_are_ignored() {
    let mut s = TiltState::new(InputSourceKind::Orientation, 0.0);
    s.set_orientation(Some(50.0), None);
    s.set_orientation(None, Some(3.0));
    s.set_orientation(Some(f32::NAN), Some(3.0));
    assert_eq!(s.orientation(), None);
    assert_eq!(s.policy(), TiltPolicy::Idle);
}

#[test]
fn pointer_cards_ignore_orientation() {
    let mut s = TiltState::new(InputSourceKind::Pointer, 0.0);
    s.set_orientation(Some(80.0), Some(20.0));
    assert_eq!(s.policy(), TiltPolicy::Idle);
}

#[test]
fn sibling_cards_are_out_of_phase() {
    assert_eq!(phase_offset_for_index(0), 0.0);
    assert!(approx(phase_offset_for_index(3), 7.854));

    let mut a = TiltState::new(InputSourceKind::Pointer, phase_offset_for_index(0));
    let mut b = TiltState::new(InputSourceKind::Pointer, phase_offset_for_index(1));
    let (ta, tb) = (a.frame(5.0), b.frame(5.0));
    assert!((ta.rotate_x - tb.rotate_x).abs() > 0.1 || (ta.rotate_y - tb.rotate_y).abs() > 0.1);
}

#[test]
fn non_finite_phase_falls_back_to_zero() {
    let s = TiltState::new(InputSourceKind::Pointer, f32::NAN);
    assert_eq!(s.phase(), 0.0);
    assert_eq!(s.input(), InputSourceKind::Pointer);
}
