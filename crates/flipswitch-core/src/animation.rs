//! Animation primitives: easing, interpolation and scrubbable timelines.
//!
//! A [`TimelineHandle`] animates one property from a start value to an end
//! value over a fixed duration. Unlike a free-running tween it starts frozen
//! and is driven by [`TimelineHandle::seek`], so a drag gesture can scrub it
//! to any intermediate pose. [`TimelineHandle::play`] releases the freeze and
//! the host's frame ticks run it to an end.

use crate::color::Color;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Shortest duration a timeline accepts, in seconds.
const MIN_DURATION: f64 = 1e-6;

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

// =============================================================================
// EasedValue - fire-and-forget tween
// =============================================================================

/// An easing-based animated value.
#[derive(Debug, Clone, PartialEq)]
pub struct EasedValue {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Elapsed time
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl EasedValue {
    /// Create new eased animation.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing: Easing::EaseInOut,
        }
    }

    /// Set easing function.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        let eased = self.easing.apply(self.progress());
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Update animation.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

// =============================================================================
// Interpolate Trait
// =============================================================================

/// Trait for types that can be interpolated.
pub trait Interpolate {
    /// Interpolate between two values.
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (to - from).mul_add(t, *from)
    }
}

impl Interpolate for f32 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (*to - *from).mul_add(t as Self, *from)
    }
}

impl Interpolate for Point {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        Self {
            x: f32::interpolate(&from.x, &to.x, t),
            y: f32::interpolate(&from.y, &to.y, t),
        }
    }
}

impl Interpolate for Color {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        from.lerp(to, t as f32)
    }
}

// =============================================================================
// TimelineHandle - scrubbable from/to timeline
// =============================================================================

/// Which end of the animation a timeline starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Progress 0 shows the start value, 1 shows the end value
    #[default]
    Forward,
    /// Progress 0 shows the end value, 1 shows the start value
    Reverse,
}

/// Playback state of a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PlaybackState {
    /// Held at its offset, only moved by `seek`
    #[default]
    Frozen,
    /// Advancing on every tick; negative speed runs backwards
    Playing {
        /// Progress units per second, relative to the duration
        speed: f64,
    },
    /// Reached the end it was playing towards
    Finished,
}

/// A single property animation that can be frozen, scrubbed and played.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineHandle<T> {
    key: &'static str,
    from: T,
    to: T,
    duration: f64,
    direction: Direction,
    offset: f64,
    state: PlaybackState,
}

impl<T: Interpolate + Clone> TimelineHandle<T> {
    /// Build a frozen timeline at progress 0.
    ///
    /// With [`Direction::Reverse`] the endpoints are swapped, so progress 0
    /// always means "where this timeline starts".
    #[must_use]
    pub fn build(key: &'static str, from: T, to: T, duration: f64, direction: Direction) -> Self {
        let (from, to) = match direction {
            Direction::Forward => (from, to),
            Direction::Reverse => (to, from),
        };
        Self {
            key,
            from,
            to,
            duration: duration.max(MIN_DURATION),
            direction,
            offset: 0.0,
            state: PlaybackState::Frozen,
        }
    }

    /// Property key this timeline animates.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Direction chosen at build time.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Duration in seconds.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Current time offset in seconds.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Current playback state.
    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// Progress in [0, 1], relative to the timeline's direction.
    #[must_use]
    pub fn progress(&self) -> f64 {
        (self.offset / self.duration).clamp(0.0, 1.0)
    }

    /// Value shown at progress 0.
    #[must_use]
    pub const fn start_value(&self) -> &T {
        &self.from
    }

    /// Value shown at progress 1.
    #[must_use]
    pub const fn end_value(&self) -> &T {
        &self.to
    }

    /// Interpolated value at the current offset.
    #[must_use]
    pub fn value(&self) -> T {
        T::interpolate(&self.from, &self.to, self.progress())
    }

    /// Freeze the timeline at `progress`, clamped to [0, 1].
    pub fn seek(&mut self, progress: f64) {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.offset = progress * self.duration;
        self.state = PlaybackState::Frozen;
    }

    /// Release the freeze and run at `speed`.
    ///
    /// Positive speeds run to progress 1, negative speeds back to 0. A zero
    /// speed leaves the timeline frozen.
    pub fn play(&mut self, speed: f64) {
        if speed == 0.0 || speed.is_nan() {
            self.state = PlaybackState::Frozen;
            return;
        }
        self.state = PlaybackState::Playing { speed };
        self.advance(0.0);
    }

    /// Advance playback by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        if dt > 0.0 {
            self.advance(dt);
        }
    }

    /// Jump a playing timeline to the end it is playing towards.
    pub fn finish(&mut self) {
        if let PlaybackState::Playing { speed } = self.state {
            self.offset = if speed > 0.0 { self.duration } else { 0.0 };
            self.state = PlaybackState::Finished;
        }
    }

    /// Whether the timeline is advancing on ticks.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { .. })
    }

    /// Whether playback reached its end.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, PlaybackState::Finished)
    }

    fn advance(&mut self, dt: f64) {
        let PlaybackState::Playing { speed } = self.state else {
            return;
        };
        self.offset = dt.mul_add(speed, self.offset);
        if speed > 0.0 && self.offset >= self.duration {
            self.offset = self.duration;
            self.state = PlaybackState::Finished;
        } else if speed < 0.0 && self.offset <= 0.0 {
            self.offset = 0.0;
            self.state = PlaybackState::Finished;
        }
    }
}

// =============================================================================
// AnimatedProperty - model value plus optional timeline
// =============================================================================

/// A rendered property: a baseline (model) value, optionally overridden by a
/// timeline while one is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedProperty<T> {
    baseline: T,
    timeline: Option<TimelineHandle<T>>,
}

impl<T: Interpolate + Clone> AnimatedProperty<T> {
    /// Create a property resting at `baseline`.
    #[must_use]
    pub const fn new(baseline: T) -> Self {
        Self {
            baseline,
            timeline: None,
        }
    }

    /// The model value shown when no timeline is attached.
    #[must_use]
    pub const fn baseline(&self) -> &T {
        &self.baseline
    }

    /// Replace the model value.
    pub fn set_baseline(&mut self, value: T) {
        self.baseline = value;
    }

    /// Attach a timeline, replacing any previous one.
    pub fn attach(&mut self, timeline: TimelineHandle<T>) {
        self.timeline = Some(timeline);
    }

    /// The attached timeline, if any.
    #[must_use]
    pub const fn timeline(&self) -> Option<&TimelineHandle<T>> {
        self.timeline.as_ref()
    }

    /// Rendered value.
    #[must_use]
    pub fn value(&self) -> T {
        self.timeline
            .as_ref()
            .map_or_else(|| self.baseline.clone(), TimelineHandle::value)
    }
}

/// Object-safe control surface shared by every animated property, so the
/// properties of a group can be driven in lockstep.
pub trait Scrub {
    /// Freeze at `progress`. No-op without a timeline.
    fn seek(&mut self, progress: f64);

    /// Start playback at `speed`. No-op without a timeline.
    fn play(&mut self, speed: f64);

    /// Advance playback by `dt` seconds.
    fn tick(&mut self, dt: f64);

    /// Jump playback to its target.
    fn finish(&mut self);

    /// Drop the timeline and any in-flight playback.
    fn reset(&mut self);

    /// Direction-relative progress, `None` without a timeline.
    fn progress(&self) -> Option<f64>;

    /// Playback state, `None` without a timeline.
    fn playback(&self) -> Option<PlaybackState>;
}

impl<T: Interpolate + Clone> Scrub for AnimatedProperty<T> {
    fn seek(&mut self, progress: f64) {
        if let Some(timeline) = &mut self.timeline {
            timeline.seek(progress);
        }
    }

    fn play(&mut self, speed: f64) {
        if let Some(timeline) = &mut self.timeline {
            timeline.play(speed);
        }
    }

    fn tick(&mut self, dt: f64) {
        if let Some(timeline) = &mut self.timeline {
            timeline.tick(dt);
        }
    }

    fn finish(&mut self) {
        if let Some(timeline) = &mut self.timeline {
            timeline.finish();
        }
    }

    fn reset(&mut self) {
        self.timeline = None;
    }

    fn progress(&self) -> Option<f64> {
        self.timeline.as_ref().map(TimelineHandle::progress)
    }

    fn playback(&self) -> Option<PlaybackState> {
        self.timeline.as_ref().map(TimelineHandle::state)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // -------------------------------------------------------------------------
    // Easing tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_easing_linear() {
        assert!((Easing::Linear.apply(0.0) - 0.0).abs() < 0.001);
        assert!((Easing::Linear.apply(0.5) - 0.5).abs() < 0.001);
        assert!((Easing::Linear.apply(1.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_easing_clamps_input() {
        assert!((Easing::Linear.apply(-0.5) - 0.0).abs() < 0.001);
        assert!((Easing::Linear.apply(1.5) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_easing_ease_in() {
        let val = Easing::EaseIn.apply(0.5);
        assert!(val < 0.5);
    }

    #[test]
    fn test_easing_ease_out() {
        let val = Easing::EaseOut.apply(0.5);
        assert!(val > 0.5);
    }

    #[test]
    fn test_easing_ease_in_out() {
        let val = Easing::EaseInOut.apply(0.5);
        assert!((val - 0.5).abs() < 0.01);
    }

    // -------------------------------------------------------------------------
    // EasedValue tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_eased_value_runs_to_target() {
        let mut v = EasedValue::new(17.0, 157.0, 0.3).with_easing(Easing::EaseIn);
        assert_eq!(v.value(), 17.0);
        v.update(0.15);
        assert!(v.value() > 17.0 && v.value() < 87.0);
        v.update(1.0);
        assert!(v.is_complete());
        assert_eq!(v.value(), 157.0);
    }

    #[test]
    fn test_eased_value_zero_duration() {
        let v = EasedValue::new(0.0, 10.0, 0.0);
        assert_eq!(v.progress(), 1.0);
        assert_eq!(v.value(), 10.0);
    }

    // -------------------------------------------------------------------------
    // Interpolate tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_interpolate_f32_and_f64() {
        assert_eq!(f32::interpolate(&0.0, &10.0, 0.25), 2.5);
        assert_eq!(f64::interpolate(&10.0, &20.0, 0.5), 15.0);
    }

    #[test]
    fn test_interpolate_point() {
        let p = Point::interpolate(&Point::new(0.0, 0.0), &Point::new(10.0, -20.0), 0.5);
        assert_eq!(p, Point::new(5.0, -10.0));
    }

    #[test]
    fn test_interpolate_color() {
        let c = Color::interpolate(&Color::BLACK, &Color::WHITE, 0.5);
        assert!((c.r - 0.5).abs() < 0.001);
        assert_eq!(c.a, 1.0);
    }

    // -------------------------------------------------------------------------
    // TimelineHandle tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_timeline_builds_frozen_at_start() {
        let t = TimelineHandle::build("opacity", 0.0f32, 0.5, 0.3, Direction::Forward);
        assert_eq!(t.key(), "opacity");
        assert_eq!(t.state(), PlaybackState::Frozen);
        assert_eq!(t.progress(), 0.0);
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn test_timeline_reverse_swaps_endpoints() {
        let t = TimelineHandle::build("opacity", 0.0f32, 0.5, 0.3, Direction::Reverse);
        assert_eq!(t.direction(), Direction::Reverse);
        assert_eq!(*t.start_value(), 0.5);
        assert_eq!(*t.end_value(), 0.0);
        assert_eq!(t.value(), 0.5);
    }

    #[test]
    fn test_timeline_seek_clamps() {
        let mut t = TimelineHandle::build("x", 0.0f32, 100.0, 0.3, Direction::Forward);
        t.seek(0.25);
        assert!((t.offset() - 0.075).abs() < 1e-9);
        assert!((t.value() - 25.0).abs() < 0.001);

        t.seek(1.7);
        assert_eq!(t.progress(), 1.0);
        t.seek(-3.0);
        assert_eq!(t.progress(), 0.0);
        t.seek(f64::NAN);
        assert_eq!(t.progress(), 0.0);
    }

    #[test]
    fn test_timeline_seek_freezes_playback() {
        let mut t = TimelineHandle::build("x", 0.0f32, 1.0, 0.3, Direction::Forward);
        t.play(1.0);
        assert!(t.is_playing());
        t.seek(0.5);
        assert_eq!(t.state(), PlaybackState::Frozen);
        t.tick(0.1);
        assert_eq!(t.progress(), 0.5);
    }

    #[test]
    fn test_timeline_play_forward_stops_at_one() {
        let mut t = TimelineHandle::build("x", 0.0f32, 1.0, 0.3, Direction::Forward);
        t.seek(0.4);
        t.play(1.0);
        t.tick(0.1);
        assert!(t.is_playing());
        t.tick(0.5);
        assert!(t.is_finished());
        assert_eq!(t.progress(), 1.0);
        assert_eq!(t.value(), 1.0);
    }

    #[test]
    fn test_timeline_play_backward_stops_at_zero() {
        let mut t = TimelineHandle::build("x", 0.0f32, 1.0, 0.3, Direction::Forward);
        t.seek(0.4);
        t.play(-1.0);
        t.tick(1.0);
        assert!(t.is_finished());
        assert_eq!(t.progress(), 0.0);
    }

    #[test]
    fn test_timeline_play_at_end_finishes_immediately() {
        let mut t = TimelineHandle::build("x", 0.0f32, 1.0, 0.3, Direction::Forward);
        t.play(-1.0);
        assert!(t.is_finished());
    }

    #[test]
    fn test_timeline_zero_speed_stays_frozen() {
        let mut t = TimelineHandle::build("x", 0.0f32, 1.0, 0.3, Direction::Forward);
        t.play(0.0);
        assert_eq!(t.state(), PlaybackState::Frozen);
    }

    #[test]
    fn test_timeline_finish_jumps_to_target() {
        let mut t = TimelineHandle::build("x", 0.0f32, 1.0, 0.3, Direction::Forward);
        t.seek(0.7);
        t.play(-1.0);
        t.finish();
        assert!(t.is_finished());
        assert_eq!(t.progress(), 0.0);

        let mut frozen = TimelineHandle::build("x", 0.0f32, 1.0, 0.3, Direction::Forward);
        frozen.seek(0.3);
        frozen.finish();
        assert_eq!(frozen.state(), PlaybackState::Frozen);
        assert!((frozen.progress() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_timeline_degenerate_duration() {
        let mut t = TimelineHandle::build("x", 0.0f32, 1.0, 0.0, Direction::Forward);
        assert!(t.duration() > 0.0);
        t.play(1.0);
        t.tick(0.001);
        assert_eq!(t.value(), 1.0);
    }

    // -------------------------------------------------------------------------
    // AnimatedProperty / Scrub tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_property_renders_baseline_without_timeline() {
        let p = AnimatedProperty::new(Color::WHITE);
        assert_eq!(p.value(), Color::WHITE);
        assert!(p.timeline().is_none());
        assert_eq!(Scrub::progress(&p), None);
        assert_eq!(p.playback(), None);
    }

    #[test]
    fn test_property_timeline_overrides_baseline() {
        let mut p = AnimatedProperty::new(0.0f32);
        p.attach(TimelineHandle::build("o", 0.0, 0.5, 0.3, Direction::Forward));
        Scrub::seek(&mut p, 0.5);
        assert!((p.value() - 0.25).abs() < 0.001);
        assert_eq!(*p.baseline(), 0.0);
    }

    #[test]
    fn test_property_reset_restores_baseline() {
        let mut p = AnimatedProperty::new(1.0f32);
        p.attach(TimelineHandle::build("o", 0.0, 0.5, 0.3, Direction::Forward));
        Scrub::play(&mut p, 1.0);
        Scrub::reset(&mut p);
        assert!(p.timeline().is_none());
        assert_eq!(p.value(), 1.0);
    }

    #[test]
    fn test_scrub_without_timeline_is_noop() {
        let mut p = AnimatedProperty::new(Point::new(1.0, 2.0));
        Scrub::seek(&mut p, 0.5);
        Scrub::play(&mut p, 1.0);
        Scrub::tick(&mut p, 1.0);
        Scrub::finish(&mut p);
        assert_eq!(p.value(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_scrub_lockstep_group() {
        let mut a = AnimatedProperty::new(0.0f32);
        let mut b = AnimatedProperty::new(Color::WHITE);
        a.attach(TimelineHandle::build("a", 0.0, 1.0, 0.3, Direction::Forward));
        b.attach(TimelineHandle::build(
            "b",
            Color::WHITE,
            Color::BLACK,
            0.3,
            Direction::Forward,
        ));
        {
            let mut group: [&mut dyn Scrub; 2] = [&mut a, &mut b];
            for property in &mut group {
                property.seek(0.5);
            }
        }
        assert_eq!(Scrub::progress(&a), Scrub::progress(&b));
    }

    proptest! {
        #[test]
        fn prop_seek_progress_in_unit_range(p in -10.0f64..10.0) {
            let mut t = TimelineHandle::build("x", 0.0f32, 1.0, 0.3, Direction::Forward);
            t.seek(p);
            prop_assert!((0.0..=1.0).contains(&t.progress()));
        }

        #[test]
        fn prop_playback_converges(start in 0.0f64..1.0, forward in any::<bool>(), steps in 1usize..40) {
            let mut t = TimelineHandle::build("x", 0.0f32, 1.0, 0.3, Direction::Forward);
            t.seek(start);
            t.play(if forward { 1.0 } else { -1.0 });
            for _ in 0..steps {
                t.tick(1.0 / 60.0);
            }
            t.tick(1.0);
            prop_assert!(t.is_finished());
            prop_assert_eq!(t.progress(), if forward { 1.0 } else { 0.0 });
        }
    }
}
