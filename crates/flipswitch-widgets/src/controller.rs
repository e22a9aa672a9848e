//! Drag and tap interaction for the toggle.
//!
//! [`ToggleInteractionController`] owns the committed value, the thumb's
//! horizontal position and the tap-versus-drag bookkeeping. It turns pointer
//! positions into a clamped thumb position and a scrub progress for the
//! [`ThumbAnimationState`], and commits a final value on release.
//!
//! All coordinates are local to the toggle (origin at its top-left corner).

use crate::config::ToggleConfig;
use crate::thumb::ThumbAnimationState;
use flipswitch_core::{EasedValue, Easing, Point, Rect, Size};
use tracing::{debug, trace, warn};

/// Thumb travel derived from the container size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbGeometry {
    size: Size,
    margin: f32,
    side: f32,
    min_x: f32,
    max_offset: f32,
}

impl ThumbGeometry {
    /// Geometry for a container of `size` with `margin` on every side.
    #[must_use]
    pub fn new(size: Size, margin: f32) -> Self {
        let side = Rect::from_size(size).inset(margin).height;
        Self {
            size,
            margin,
            side,
            min_x: margin,
            max_offset: 2.0f32.mul_add(-margin, size.width - side),
        }
    }

    /// Container size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Border margin.
    #[must_use]
    pub const fn margin(&self) -> f32 {
        self.margin
    }

    /// Thumb side length.
    #[must_use]
    pub const fn side(&self) -> f32 {
        self.side
    }

    /// Thumb x in the off position.
    #[must_use]
    pub const fn min_x(&self) -> f32 {
        self.min_x
    }

    /// Horizontal travel, possibly negative in a too-narrow container.
    #[must_use]
    pub const fn max_offset(&self) -> f32 {
        self.max_offset
    }

    /// Thumb x in the on position.
    #[must_use]
    pub fn max_x(&self) -> f32 {
        self.min_x + self.max_offset.max(0.0)
    }

    /// Distance between the two rest positions.
    #[must_use]
    pub fn travel(&self) -> f32 {
        self.max_x() - self.min_x
    }

    /// Horizontal midpoint deciding the committed side on release.
    #[must_use]
    pub fn midpoint(&self) -> f32 {
        Rect::from_size(self.size).mid_x()
    }

    /// Clamp a thumb x into `[min_x, max_x]`. NaN bounds are ignored.
    #[must_use]
    pub fn clamp_x(&self, x: f32) -> f32 {
        x.max(self.min_x).min(self.max_x())
    }

    /// Thumb x at rest for a committed value.
    #[must_use]
    pub fn rest_x(&self, on: bool) -> f32 {
        if on {
            self.max_x()
        } else {
            self.min_x
        }
    }

    /// Scrub progress of a thumb at `x`, relative to the committed value.
    ///
    /// Starting off, progress grows towards `max_x`; starting on it grows
    /// towards `min_x`. Zero travel always reports 0.
    #[must_use]
    pub fn progress_for(&self, x: f32, is_on: bool) -> f64 {
        let travel = self.travel();
        if travel.is_nan() || travel <= 0.0 {
            return 0.0;
        }
        let x = self.clamp_x(x);
        let moved = if is_on { self.max_x() - x } else { x - self.min_x };
        f64::from(moved / travel).clamp(0.0, 1.0)
    }

    /// Thumb rectangle with its left edge at `x`.
    #[must_use]
    pub fn thumb_rect(&self, x: f32) -> Rect {
        Rect::new(x, self.margin, self.side, self.side)
    }
}

/// Interaction bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToggleState {
    /// Committed value
    pub is_on: bool,
    /// A drag gesture is in progress
    pub is_dragging: bool,
    /// The current gesture moved the thumb; a trailing tap must be ignored
    pub ignore_tap: bool,
    /// Pointer position when the drag began
    pub drag_start_point: Point,
    /// Thumb x when the drag began
    pub drag_start_thumb_x: f32,
}

/// State machine behind the toggle's drag and tap handling.
///
/// ```text
/// Idle --begin_track--> Dragging
/// Dragging --continue_track--> Dragging
/// Dragging --end_track--> Idle      (commit side of midpoint)
/// Dragging --cancel_track--> Idle   (commit pre-drag value)
/// Idle --handle_tap--> Idle         (commit flipped value)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleInteractionController {
    config: ToggleConfig,
    geometry: ThumbGeometry,
    state: ToggleState,
    thumb_x: f32,
    slide: Option<EasedValue>,
    thumb: ThumbAnimationState,
}

impl ToggleInteractionController {
    /// Create a controller, off and at rest. An empty size falls back to the
    /// configured default.
    ///
    /// Out-of-range config fields are replaced by their defaults.
    #[must_use]
    pub fn new(size: Size, config: ToggleConfig) -> Self {
        if let Err(err) = config.validate() {
            warn!(%err, "invalid toggle config; out-of-range fields use defaults");
        }
        let config = config.sanitized();
        let size = if size.is_empty() {
            config.default_size
        } else {
            size
        };
        let geometry = ThumbGeometry::new(size, config.border_margin);
        let thumb = ThumbAnimationState::new(geometry.side(), &config);
        let thumb_x = geometry.rest_x(false);
        Self {
            config,
            geometry,
            state: ToggleState {
                drag_start_thumb_x: thumb_x,
                ..ToggleState::default()
            },
            thumb_x,
            slide: None,
            thumb,
        }
    }

    // ===== Gestures =====

    /// Start a drag at `point`. Always accepts the gesture.
    pub fn begin_track(&mut self, point: Point) -> bool {
        self.state.ignore_tap = false;
        self.slide = None;
        self.state.drag_start_point = point;
        self.state.drag_start_thumb_x = self.thumb_x;
        self.thumb.start_tracking();
        self.state.is_dragging = true;
        debug!(
            x = point.x,
            y = point.y,
            thumb_x = self.thumb_x,
            is_on = self.state.is_on,
            "drag began"
        );
        true
    }

    /// Follow the pointer to `point`.
    ///
    /// The thumb moves by the horizontal distance from the drag start and is
    /// clamped to its travel; the glyph morph is scrubbed to match.
    pub fn continue_track(&mut self, point: Point) -> bool {
        if !self.state.is_dragging {
            warn!(
                x = point.x,
                "continue_track without begin_track; using stored drag origin"
            );
            self.state.is_dragging = true;
            self.slide = None;
        }
        self.state.ignore_tap = true;

        let offset_x = point.x - self.state.drag_start_point.x;
        let candidate = self
            .geometry
            .clamp_x(self.state.drag_start_thumb_x + offset_x);
        self.thumb_x = candidate;

        let progress = self.geometry.progress_for(candidate, self.state.is_on);
        self.thumb.set_progress(progress);
        trace!(offset_x, thumb_x = candidate, progress, "drag moved");
        true
    }

    /// Finish a drag with the thumb center at `final_thumb_center_x`.
    ///
    /// Commits whichever side of the midpoint the thumb ended on. The tap
    /// guard stays up until that commit settles or the next drag begins.
    pub fn end_track(&mut self, final_thumb_center_x: f32) {
        self.state.is_dragging = false;
        let on = final_thumb_center_x > self.geometry.midpoint();
        debug!(
            center_x = final_thumb_center_x,
            midpoint = self.geometry.midpoint(),
            on,
            "drag ended"
        );
        self.set_on(on, true);
    }

    /// Abandon a drag, returning to the pre-drag value. Does nothing when no
    /// drag is in progress.
    pub fn cancel_track(&mut self) {
        if !self.state.is_dragging {
            return;
        }
        self.state.is_dragging = false;
        let moved = self.state.ignore_tap;
        debug!(is_on = self.state.is_on, moved, "drag cancelled, snapping back");
        if moved {
            self.set_on(self.state.is_on, true);
        } else {
            // The idle scrubbing session shows the rest pose already. The
            // thumb may still sit where an interrupted slide left it.
            self.thumb.commit(self.state.is_on, false);
            self.slide_to_rest(true);
        }
        self.state.ignore_tap = false;
    }

    /// Handle a recognized tap. Returns whether the value flipped.
    pub fn handle_tap(&mut self) -> bool {
        if self.state.ignore_tap {
            debug!("tap suppressed after drag");
            return false;
        }
        self.thumb.toggle_tap(true);
        self.set_on(!self.state.is_on, true);
        debug!(is_on = self.state.is_on, "tap toggled");
        true
    }

    // ===== Programmatic control =====

    /// Commit `value`, sliding the thumb when `animated`.
    pub fn set_on(&mut self, value: bool, animated: bool) {
        self.state.is_on = value;
        self.state.is_dragging = false;
        self.thumb.commit(value, animated);
        self.slide_to_rest(animated);
    }

    /// Apply new container bounds. An empty rect falls back to the
    /// configured default size.
    pub fn set_bounds(&mut self, bounds: Rect) {
        let size = if bounds.is_empty() {
            self.config.default_size
        } else {
            bounds.size()
        };
        if size == self.geometry.size() {
            return;
        }
        self.geometry = ThumbGeometry::new(size, self.config.border_margin);
        self.thumb.set_side(self.geometry.side());
        if self.state.is_dragging {
            self.thumb_x = self.geometry.clamp_x(self.thumb_x);
        } else {
            self.slide = None;
            self.thumb_x = self.geometry.rest_x(self.state.is_on);
        }
        debug!(
            width = size.width,
            height = size.height,
            side = self.geometry.side(),
            "toggle bounds changed"
        );
    }

    /// Advance the slide and the thumb animation by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        if let Some(slide) = &mut self.slide {
            slide.update(dt);
            self.thumb_x = slide.value() as f32;
            if slide.is_complete() {
                self.slide = None;
            }
        }
        self.thumb.tick(dt);

        if !self.state.is_dragging && !self.is_animating() && !self.thumb.is_tracking() {
            self.state.ignore_tap = false;
        }
    }

    // ===== Queries =====

    /// Committed value.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.state.is_on
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    /// Whether a tap would currently be ignored.
    #[must_use]
    pub const fn ignores_tap(&self) -> bool {
        self.state.ignore_tap
    }

    /// Whether the slide or the thumb animation is playing.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.slide.is_some() || self.thumb.is_animating()
    }

    /// Interaction bookkeeping.
    #[must_use]
    pub const fn state(&self) -> &ToggleState {
        &self.state
    }

    /// Left edge of the thumb.
    #[must_use]
    pub const fn thumb_x(&self) -> f32 {
        self.thumb_x
    }

    /// Horizontal center of the thumb.
    #[must_use]
    pub fn thumb_center_x(&self) -> f32 {
        self.thumb_x + self.geometry.side() / 2.0
    }

    /// Current thumb rectangle.
    #[must_use]
    pub fn thumb_rect(&self) -> Rect {
        self.geometry.thumb_rect(self.thumb_x)
    }

    /// Thumb travel geometry.
    #[must_use]
    pub const fn geometry(&self) -> &ThumbGeometry {
        &self.geometry
    }

    /// Scrub progress implied by the current thumb position.
    #[must_use]
    pub fn drag_progress(&self) -> f64 {
        self.geometry.progress_for(self.thumb_x, self.state.is_on)
    }

    /// Thumb face animation.
    #[must_use]
    pub const fn thumb(&self) -> &ThumbAnimationState {
        &self.thumb
    }

    /// Mutable thumb face animation, for style changes.
    pub fn thumb_mut(&mut self) -> &mut ThumbAnimationState {
        &mut self.thumb
    }

    /// Configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &ToggleConfig {
        &self.config
    }

    // ===== Internals =====

    /// Move the thumb to the rest x of the committed value.
    fn slide_to_rest(&mut self, animated: bool) {
        let target = self.geometry.rest_x(self.state.is_on);
        if animated && (target - self.thumb_x).abs() > f32::EPSILON {
            self.slide = Some(
                EasedValue::new(
                    f64::from(self.thumb_x),
                    f64::from(target),
                    self.config.animation_duration,
                )
                .with_easing(Easing::EaseIn),
            );
        } else {
            self.slide = None;
            self.thumb_x = target;
        }
    }
}
