//! Integration tests for flipswitch-widgets.
//!
//! These drive the controller and widget through whole gestures and check
//! that every entry path converges on a rest pose matching the value.

use flipswitch_core::{Point, Rect, Size};
use flipswitch_widgets::{ToggleConfig, ToggleInteractionController};
use proptest::prelude::*;

fn controller(width: f32, height: f32) -> ToggleInteractionController {
    ToggleInteractionController::new(Size::new(width, height), ToggleConfig::default())
}

fn settle(c: &mut ToggleInteractionController) {
    for _ in 0..120 {
        c.tick(1.0 / 60.0);
    }
    assert!(!c.is_animating(), "toggle should be at rest");
}

fn assert_at_rest(c: &ToggleInteractionController) {
    let expected = if c.is_on() { 1.0 } else { 0.0 };
    assert_eq!(c.thumb().progress(), expected);
    assert!(!c.thumb().has_timeline());
    assert_eq!(c.thumb().is_on(), c.is_on());
    assert_eq!(c.thumb_x(), c.geometry().rest_x(c.is_on()));
}

// =============================================================================
// Geometry Scenarios
// =============================================================================

#[test]
fn test_short_container_scenario() {
    let mut c = controller(100.0, 30.0);
    let g = *c.geometry();
    assert_eq!(g.side(), 0.0);
    assert_eq!(g.min_x(), 17.0);
    assert_eq!(g.max_offset(), 66.0);
    assert_eq!(g.max_x(), 83.0);

    c.begin_track(Point::new(20.0, 15.0));
    c.continue_track(Point::new(20.0, 15.0));
    assert_eq!(c.thumb().progress(), 0.0);

    c.continue_track(Point::new(53.0, 15.0));
    assert_eq!(c.thumb_x(), 50.0);
    assert!((c.thumb().progress() - 0.5).abs() < 1e-9);

    c.continue_track(Point::new(86.0, 15.0));
    assert_eq!(c.thumb_x(), 83.0);
    assert_eq!(c.thumb().progress(), 1.0);
}

#[test]
fn test_start_on_drag_to_off() {
    let mut c = controller(315.0, 175.0);
    c.set_on(true, false);
    assert_eq!(c.thumb_x(), 157.0);

    c.begin_track(Point::new(230.0, 80.0));
    c.continue_track(Point::new(90.0, 80.0));
    assert_eq!(c.thumb_x(), 17.0);
    // Progress is measured away from the committed side
    assert_eq!(c.drag_progress(), 1.0);
    assert_eq!(c.thumb().progress(), 0.0);

    c.end_track(c.thumb_center_x());
    assert!(!c.is_on());
    settle(&mut c);
    assert_at_rest(&c);
}

#[test]
fn test_begin_then_cancel_keeps_state() {
    let mut c = controller(315.0, 175.0);
    c.set_on(true, false);
    c.begin_track(Point::new(230.0, 80.0));
    c.cancel_track();
    assert!(c.is_on());
    assert!(!c.is_dragging());
    assert_at_rest(&c);
}

// =============================================================================
// Convergence
// =============================================================================

#[test]
fn test_tap_converges() {
    let mut c = controller(315.0, 175.0);
    assert!(c.handle_tap());
    settle(&mut c);
    assert!(c.is_on());
    assert_at_rest(&c);
}

#[test]
fn test_drag_release_converges() {
    let mut c = controller(315.0, 175.0);
    c.begin_track(Point::new(80.0, 80.0));
    c.continue_track(Point::new(190.0, 80.0));
    c.end_track(c.thumb_center_x());
    settle(&mut c);
    assert!(c.is_on());
    assert_at_rest(&c);
}

#[test]
fn test_cancel_converges() {
    let mut c = controller(315.0, 175.0);
    c.begin_track(Point::new(80.0, 80.0));
    c.continue_track(Point::new(190.0, 80.0));
    c.cancel_track();
    settle(&mut c);
    assert!(!c.is_on());
    assert_at_rest(&c);
}

#[test]
fn test_programmatic_set_mid_drag_converges() {
    let mut c = controller(315.0, 175.0);
    c.begin_track(Point::new(80.0, 80.0));
    c.continue_track(Point::new(120.0, 80.0));
    c.set_on(true, true);
    assert!(!c.is_dragging());
    settle(&mut c);
    assert_at_rest(&c);
}

#[test]
fn test_tap_interrupting_commit_converges() {
    let mut c = controller(315.0, 175.0);
    c.set_on(true, true);
    c.tick(0.1);
    assert!(c.handle_tap());
    assert!(!c.is_on());
    settle(&mut c);
    assert_at_rest(&c);
}

#[test]
fn test_cancel_interrupting_commit_converges() {
    let mut c = controller(315.0, 175.0);
    c.set_on(true, true);
    c.tick(0.15);
    c.begin_track(Point::new(100.0, 80.0));
    c.cancel_track();
    settle(&mut c);
    assert!(c.is_on());
    assert_at_rest(&c);
}

#[test]
fn test_stray_cancel_during_tap_converges() {
    let mut c = controller(315.0, 175.0);
    c.handle_tap();
    c.tick(0.05);
    c.cancel_track();
    assert!(c.thumb().has_timeline());
    settle(&mut c);
    assert!(c.is_on());
    assert_at_rest(&c);
}

// =============================================================================
// Tap Suppression
// =============================================================================

#[test]
fn test_tap_suppressed_until_next_gesture() {
    let mut c = controller(315.0, 175.0);
    c.begin_track(Point::new(80.0, 80.0));
    c.continue_track(Point::new(200.0, 80.0));
    c.end_track(c.thumb_center_x());
    assert!(c.is_on());
    assert!(!c.handle_tap());
    assert!(c.is_on());

    c.begin_track(Point::new(200.0, 80.0));
    c.end_track(c.thumb_center_x());
    assert!(c.handle_tap());
    assert!(!c.is_on());
}

#[test]
fn test_tap_guard_released_after_settle() {
    let mut c = controller(315.0, 175.0);
    c.begin_track(Point::new(80.0, 80.0));
    c.continue_track(Point::new(200.0, 80.0));
    c.end_track(c.thumb_center_x());
    assert!(c.ignores_tap());
    settle(&mut c);
    assert!(!c.ignores_tap());
}

// =============================================================================
// Idempotence and Reversal
// =============================================================================

#[test]
fn test_unanimated_set_is_idempotent() {
    let mut c = controller(315.0, 175.0);
    for value in [true, true, false, false, true] {
        c.set_on(value, false);
        let snapshot = c.clone();
        c.set_on(value, false);
        assert_eq!(c, snapshot);
        assert_at_rest(&c);
    }
}

#[test]
fn test_drag_reversal_keeps_fixed_baseline() {
    let mut c = controller(315.0, 175.0);
    c.begin_track(Point::new(100.0, 80.0));
    c.continue_track(Point::new(205.0, 80.0));
    assert_eq!(c.thumb_x(), 122.0);
    assert!((c.thumb().progress() - 0.75).abs() < 1e-9);

    // Back past the start: offsets stay relative to the original touch
    c.continue_track(Point::new(40.0, 80.0));
    assert_eq!(c.thumb_x(), 17.0);
    assert_eq!(c.thumb().progress(), 0.0);

    c.continue_track(Point::new(135.0, 80.0));
    assert_eq!(c.thumb_x(), 52.0);
    assert!((c.thumb().progress() - 0.25).abs() < 1e-9);
}

#[test]
fn test_resize_while_on() {
    let mut c = controller(315.0, 175.0);
    c.set_on(true, false);
    c.set_bounds(Rect::new(0.0, 0.0, 100.0, 30.0));
    assert_eq!(c.thumb_x(), 83.0);
    assert_at_rest(&c);
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_thumb_x_always_clamped(
        start_on in any::<bool>(),
        start_x in -200.0f32..600.0,
        moves in prop::collection::vec(-800.0f32..800.0, 1..20),
    ) {
        let mut c = controller(315.0, 175.0);
        c.set_on(start_on, false);
        c.begin_track(Point::new(start_x, 80.0));
        for x in moves {
            c.continue_track(Point::new(x, 80.0));
            prop_assert!(c.thumb_x() >= c.geometry().min_x());
            prop_assert!(c.thumb_x() <= c.geometry().max_x());
            let p = c.thumb().progress();
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn prop_progress_monotonic_when_starting_off(
        mut offsets in prop::collection::vec(0.0f32..300.0, 2..20),
    ) {
        offsets.sort_by(f32::total_cmp);
        let mut c = controller(315.0, 175.0);
        c.begin_track(Point::new(50.0, 80.0));
        let mut last = 0.0;
        for dx in offsets {
            c.continue_track(Point::new(50.0 + dx, 80.0));
            let p = c.thumb().progress();
            prop_assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn prop_every_gesture_converges(
        start_on in any::<bool>(),
        dx in -400.0f32..400.0,
        ending in 0u8..3,
    ) {
        let mut c = controller(315.0, 175.0);
        c.set_on(start_on, false);
        c.begin_track(Point::new(150.0, 80.0));
        c.continue_track(Point::new(150.0 + dx, 80.0));
        match ending {
            0 => c.end_track(c.thumb_center_x()),
            1 => c.cancel_track(),
            _ => {
                c.end_track(c.thumb_center_x());
                c.begin_track(Point::new(10.0, 10.0));
                c.end_track(c.thumb_center_x());
                c.handle_tap();
            }
        }
        for _ in 0..120 {
            c.tick(1.0 / 60.0);
        }
        let expected = if c.is_on() { 1.0 } else { 0.0 };
        prop_assert_eq!(c.thumb().progress(), expected);
        prop_assert_eq!(c.thumb_x(), c.geometry().rest_x(c.is_on()));
    }
}
