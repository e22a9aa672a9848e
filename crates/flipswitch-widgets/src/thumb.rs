//! Thumb animation state: the glyph morph and background fade.
//!
//! The thumb face shows an X in the off pose and a check mark in the on pose.
//! Both glyphs are the same two rounded bars; the morph rotates, stretches and
//! moves each bar while the thumb fill fades between the off and on colors and
//! its shadow fades in.
//!
//! Three groups of [`AnimatedProperty`]s (glyph 1, glyph 2, background) are
//! always driven together, either scrubbed by a drag through
//! [`ThumbAnimationState::set_progress`] or played by
//! [`ThumbAnimationState::commit`] and the host's frame ticks.

use crate::config::ToggleConfig;
use flipswitch_core::{
    AnimatedProperty, Color, Direction, PlaybackState, Point, Rect, Scrub, TimelineHandle,
};
use std::f32::consts::{FRAC_PI_4, PI};
use tracing::{debug, trace};

/// Number of animated properties across all three groups.
const PROPERTY_COUNT: usize = 8;

/// Inward shift of the glyph center from the thumb center.
const GLYPH_CENTER_SHIFT: f32 = 4.0;

/// Rendered pose of one glyph bar, in thumb-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPose {
    /// Rotation in radians around the bar center
    pub rotation: f32,
    /// Bar length along its unrotated vertical axis
    pub length: f32,
    /// Bar center
    pub center: Point,
    /// Bar thickness
    pub width: f32,
}

impl GlyphPose {
    /// The unrotated bar, centered on the origin.
    #[must_use]
    pub fn bar_rect(&self) -> Rect {
        Rect::new(
            -self.width / 2.0,
            -self.length / 2.0,
            self.width,
            self.length,
        )
    }
}

/// Off and on values of one glyph's properties.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GlyphKeyframes {
    rotation: (f32, f32),
    length: (f32, f32),
    center: (Point, Point),
}

impl GlyphKeyframes {
    /// Keyframes for both glyphs of a thumb with the given side.
    fn for_side(side: f32, glyph_width: f32) -> [Self; 2] {
        let half = side / 2.0;
        let length = (half - glyph_width).max(0.0);
        let center = Point::new(half - GLYPH_CENTER_SHIFT + glyph_width / 2.0, half);

        [
            Self {
                rotation: (FRAC_PI_4, -PI + FRAC_PI_4),
                length: (length, length + 7.0),
                center: (center, Point::new(center.x + 10.0, center.y + 4.0)),
            },
            Self {
                rotation: (-FRAC_PI_4, -PI - FRAC_PI_4),
                length: (length, length / 2.0 + 6.0),
                center: (center, Point::new(center.x - 25.0, center.y + 17.0)),
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
struct GlyphGroup {
    keyframes: GlyphKeyframes,
    rotation: AnimatedProperty<f32>,
    length: AnimatedProperty<f32>,
    center: AnimatedProperty<Point>,
}

impl GlyphGroup {
    fn new(keyframes: GlyphKeyframes) -> Self {
        Self {
            keyframes,
            rotation: AnimatedProperty::new(keyframes.rotation.0),
            length: AnimatedProperty::new(keyframes.length.0),
            center: AnimatedProperty::new(keyframes.center.0),
        }
    }

    fn rest(&mut self, on: bool) {
        let pick = |(off, on_value): (f32, f32)| if on { on_value } else { off };
        self.rotation.set_baseline(pick(self.keyframes.rotation));
        self.length.set_baseline(pick(self.keyframes.length));
        let (off, on_value) = self.keyframes.center;
        self.center.set_baseline(if on { on_value } else { off });
    }

    fn rebuild(&mut self, keys: [&'static str; 3], duration: f64, direction: Direction) {
        let k = self.keyframes;
        self.rotation.attach(TimelineHandle::build(
            keys[0],
            k.rotation.0,
            k.rotation.1,
            duration,
            direction,
        ));
        self.length.attach(TimelineHandle::build(
            keys[1],
            k.length.0,
            k.length.1,
            duration,
            direction,
        ));
        self.center.attach(TimelineHandle::build(
            keys[2],
            k.center.0,
            k.center.1,
            duration,
            direction,
        ));
    }

    fn pose(&self, width: f32) -> GlyphPose {
        GlyphPose {
            rotation: self.rotation.value(),
            length: self.length.value(),
            center: self.center.value(),
            width,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct BackgroundGroup {
    fill: AnimatedProperty<Color>,
    shadow_opacity: AnimatedProperty<f32>,
}

const GLYPH_KEYS: [[&str; 3]; 2] = [
    ["glyph1.rotation", "glyph1.length", "glyph1.center"],
    ["glyph2.rotation", "glyph2.length", "glyph2.center"],
];

/// Animation state of the thumb face.
///
/// `is_on` here is the thumb's own notion of the committed value; the
/// controller keeps it in sync through [`commit`](Self::commit).
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbAnimationState {
    side: f32,
    glyph_width: f32,
    duration: f64,
    max_shadow_opacity: f32,
    thumb_color: Color,
    on_thumb_color: Color,
    shadow_color: Color,
    is_on: bool,
    tracking: bool,
    glyphs: [GlyphGroup; 2],
    background: BackgroundGroup,
}

impl ThumbAnimationState {
    /// Create a thumb at rest in the off pose.
    #[must_use]
    pub fn new(side: f32, config: &ToggleConfig) -> Self {
        let [first, second] = GlyphKeyframes::for_side(side, config.glyph_width);
        Self {
            side,
            glyph_width: config.glyph_width,
            duration: config.animation_duration,
            max_shadow_opacity: config.max_shadow_opacity,
            thumb_color: config.thumb_color,
            on_thumb_color: config.on_thumb_color,
            shadow_color: config.shadow_color,
            is_on: false,
            tracking: false,
            glyphs: [GlyphGroup::new(first), GlyphGroup::new(second)],
            background: BackgroundGroup {
                fill: AnimatedProperty::new(config.thumb_color),
                shadow_opacity: AnimatedProperty::new(0.0),
            },
        }
    }

    // ===== Driving =====

    /// Begin a scrubbing session.
    ///
    /// Rebuilds every timeline from the current committed value and freezes
    /// them at progress 0. Does nothing if a session is already open.
    pub fn start_tracking(&mut self) {
        if self.tracking {
            return;
        }
        self.reset_timelines();
        self.rebuild(self.is_on);
        self.tracking = true;
        debug!(is_on = self.is_on, "thumb tracking started");
    }

    /// Scrub every property to `progress`, clamped to [0, 1].
    pub fn set_progress(&mut self, progress: f64) {
        if !self.tracking {
            self.start_tracking();
        }
        for property in self.properties_mut() {
            property.seek(progress);
        }
        trace!(progress, "thumb progress");
    }

    /// Commit to `is_on`, ending any scrubbing session.
    ///
    /// Without animation the thumb jumps to its rest pose. With animation an
    /// existing timeline plays towards `is_on` from wherever it is; a thumb
    /// at rest builds a fresh timeline from its previous value.
    pub fn commit(&mut self, is_on: bool, animated: bool) {
        let previous = self.is_on;
        self.is_on = is_on;
        self.tracking = false;

        if !animated {
            self.settle();
            debug!(is_on, animated, "thumb committed");
            return;
        }

        match self.direction() {
            Some(direction) => {
                let ends_on = direction == Direction::Forward;
                let speed = if ends_on == is_on { 1.0 } else { -1.0 };
                self.play(speed);
            }
            None if previous == is_on => {}
            None => {
                self.rebuild(previous);
                self.play(1.0);
            }
        }
        debug!(is_on, animated, from = previous, "thumb committed");
    }

    /// Flip the committed value, as a tap does.
    ///
    /// An in-flight animation is first completed to its target so the flip
    /// always starts from a rest pose.
    pub fn toggle_tap(&mut self, animated: bool) {
        for property in self.properties_mut() {
            property.finish();
        }
        self.settle();
        self.commit(!self.is_on, animated);
    }

    /// Advance playback. Returns whether the thumb is still animating.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.has_timeline() {
            return false;
        }
        for property in self.properties_mut() {
            property.tick(dt);
        }
        let finished = self
            .properties()
            .iter()
            .all(|p| p.playback() == Some(PlaybackState::Finished));
        if finished {
            self.settle();
            debug!(is_on = self.is_on, "thumb animation settled");
            return false;
        }
        self.is_animating()
    }

    /// Update the thumb side after a resize.
    ///
    /// Applies to the rest pose immediately and to timelines at their next
    /// rebuild.
    pub fn set_side(&mut self, side: f32) {
        if (side - self.side).abs() < f32::EPSILON {
            return;
        }
        self.side = side;
        let frames = GlyphKeyframes::for_side(side, self.glyph_width);
        for (glyph, keyframes) in self.glyphs.iter_mut().zip(frames) {
            glyph.keyframes = keyframes;
        }
        if !self.has_timeline() {
            self.apply_rest_pose();
        }
    }

    // ===== Style =====

    /// Set the off-pose thumb fill.
    pub fn set_thumb_color(&mut self, color: Color) {
        self.thumb_color = color;
        if !self.has_timeline() {
            self.apply_rest_pose();
        }
    }

    /// Set the on-pose thumb fill.
    pub fn set_on_thumb_color(&mut self, color: Color) {
        self.on_thumb_color = color;
        if !self.has_timeline() {
            self.apply_rest_pose();
        }
    }

    /// Set the shadow color.
    pub fn set_shadow_color(&mut self, color: Color) {
        self.shadow_color = color;
    }

    /// Off-pose thumb fill.
    #[must_use]
    pub const fn thumb_color(&self) -> Color {
        self.thumb_color
    }

    /// On-pose thumb fill.
    #[must_use]
    pub const fn on_thumb_color(&self) -> Color {
        self.on_thumb_color
    }

    /// Shadow color, before opacity is applied.
    #[must_use]
    pub const fn shadow_color(&self) -> Color {
        self.shadow_color
    }

    // ===== Queries =====

    /// Committed value as seen by the thumb.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.is_on
    }

    /// Whether a scrubbing session is open.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Whether any property is playing.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.properties()
            .iter()
            .any(|p| matches!(p.playback(), Some(PlaybackState::Playing { .. })))
    }

    /// Whether timelines are attached (scrubbing or playing).
    #[must_use]
    pub fn has_timeline(&self) -> bool {
        self.background.fill.timeline().is_some()
    }

    /// Direction of the attached timelines.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.background.fill.timeline().map(TimelineHandle::direction)
    }

    /// Direction-relative timeline progress, `None` at rest.
    #[must_use]
    pub fn timeline_progress(&self) -> Option<f64> {
        Scrub::progress(&self.background.fill)
    }

    /// Appearance on an absolute scale: 0 is fully off, 1 is fully on.
    #[must_use]
    pub fn progress(&self) -> f64 {
        match (self.direction(), self.timeline_progress()) {
            (Some(Direction::Forward), Some(p)) => p,
            (Some(Direction::Reverse), Some(p)) => 1.0 - p,
            _ if self.is_on => 1.0,
            _ => 0.0,
        }
    }

    /// Thumb side length.
    #[must_use]
    pub const fn side(&self) -> f32 {
        self.side
    }

    /// Rendered glyph poses.
    #[must_use]
    pub fn glyphs(&self) -> [GlyphPose; 2] {
        [
            self.glyphs[0].pose(self.glyph_width),
            self.glyphs[1].pose(self.glyph_width),
        ]
    }

    /// Rendered thumb fill.
    #[must_use]
    pub fn fill(&self) -> Color {
        self.background.fill.value()
    }

    /// Rendered shadow opacity.
    #[must_use]
    pub fn shadow_opacity(&self) -> f32 {
        self.background.shadow_opacity.value()
    }

    // ===== Internals =====

    fn properties(&self) -> [&dyn Scrub; PROPERTY_COUNT] {
        let [a, b] = &self.glyphs;
        [
            &a.rotation,
            &a.length,
            &a.center,
            &b.rotation,
            &b.length,
            &b.center,
            &self.background.fill,
            &self.background.shadow_opacity,
        ]
    }

    fn properties_mut(&mut self) -> [&mut dyn Scrub; PROPERTY_COUNT] {
        let [a, b] = &mut self.glyphs;
        [
            &mut a.rotation,
            &mut a.length,
            &mut a.center,
            &mut b.rotation,
            &mut b.length,
            &mut b.center,
            &mut self.background.fill,
            &mut self.background.shadow_opacity,
        ]
    }

    fn play(&mut self, speed: f64) {
        for property in self.properties_mut() {
            property.play(speed);
        }
    }

    fn reset_timelines(&mut self) {
        for property in self.properties_mut() {
            property.reset();
        }
    }

    /// Build timelines starting from the `from_on` pose.
    fn rebuild(&mut self, from_on: bool) {
        let direction = if from_on {
            Direction::Reverse
        } else {
            Direction::Forward
        };
        let duration = self.duration;
        for (glyph, keys) in self.glyphs.iter_mut().zip(GLYPH_KEYS) {
            glyph.rebuild(keys, duration, direction);
        }
        self.background.fill.attach(TimelineHandle::build(
            "background.fill",
            self.thumb_color,
            self.on_thumb_color,
            duration,
            direction,
        ));
        self.background.shadow_opacity.attach(TimelineHandle::build(
            "background.shadow_opacity",
            0.0,
            self.max_shadow_opacity,
            duration,
            direction,
        ));
    }

    /// Drop every timeline and rest in the pose for the committed value.
    fn settle(&mut self) {
        self.tracking = false;
        self.reset_timelines();
        self.apply_rest_pose();
    }

    fn apply_rest_pose(&mut self) {
        let on = self.is_on;
        for glyph in &mut self.glyphs {
            glyph.rest(on);
        }
        self.background.fill.set_baseline(if on {
            self.on_thumb_color
        } else {
            self.thumb_color
        });
        self.background
            .shadow_opacity
            .set_baseline(if on { self.max_shadow_opacity } else { 0.0 });
    }
}
