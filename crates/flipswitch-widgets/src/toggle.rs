//! Toggle switch widget.
//!
//! Adapts host events to the [`ToggleInteractionController`] and paints the
//! track, the shadowed thumb and its two glyph bars.

use crate::config::ToggleConfig;
use crate::controller::ToggleInteractionController;
use crate::thumb::GlyphPose;
use flipswitch_core::{
    widget::{AccessibleRole, LayoutResult},
    BoxStyle, Canvas, Color, Constraints, Event, Point, Rect, Shadow, Size, TrackPhase,
    TrackSource, Transform2D, TypeId, Widget,
};
use std::any::Any;

/// Message emitted when toggle state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleChanged {
    /// The new toggle state
    pub on: bool,
}

/// Toggle switch widget (on/off) with a draggable thumb.
#[derive(Debug, Clone)]
pub struct Toggle {
    controller: ToggleInteractionController,
    /// Bounds in host coordinates
    bounds: Rect,
    /// Whether the toggle is disabled
    disabled: bool,
    /// Device currently dragging the thumb
    active: Option<TrackSource>,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new(Rect::default())
    }
}

impl Toggle {
    /// Create a toggle occupying `frame`. An empty frame uses the default
    /// 50x30 size at the frame's origin.
    #[must_use]
    pub fn new(frame: Rect) -> Self {
        Self::with_config(frame, ToggleConfig::default())
    }

    /// Create a toggle with a custom configuration.
    #[must_use]
    pub fn with_config(frame: Rect, config: ToggleConfig) -> Self {
        let controller = ToggleInteractionController::new(frame.size(), config);
        let bounds = Rect::from_size(controller.geometry().size()).with_origin(frame.origin());
        Self {
            controller,
            bounds,
            disabled: false,
            active: None,
            accessible_name_value: None,
            test_id_value: None,
        }
    }

    /// Set the initial state without animation.
    #[must_use]
    pub fn with_state(mut self, on: bool) -> Self {
        self.controller.set_on(on, false);
        self
    }

    /// Set whether the toggle is disabled.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the off-pose thumb color.
    #[must_use]
    pub fn with_thumb_color(mut self, color: Color) -> Self {
        self.set_thumb_color(color);
        self
    }

    /// Set the on-pose thumb color.
    #[must_use]
    pub fn with_on_thumb_color(mut self, color: Color) -> Self {
        self.set_on_thumb_color(color);
        self
    }

    /// Set the shadow color.
    #[must_use]
    pub fn with_shadow_color(mut self, color: Color) -> Self {
        self.set_shadow_color(color);
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    // ===== State =====

    /// Get current state.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.controller.is_on()
    }

    /// Set the state without animation.
    pub fn set_on_value(&mut self, on: bool) {
        self.controller.set_on(on, false);
    }

    /// Set the state, optionally animating the thumb.
    pub fn set_on(&mut self, on: bool, animated: bool) {
        self.controller.set_on(on, animated);
    }

    /// Get disabled state.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Advance animations by `dt` seconds. Call once per frame.
    pub fn tick(&mut self, dt: f64) {
        self.controller.tick(dt);
    }

    /// Whether a frame tick would change the rendering.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    /// Interaction state machine.
    #[must_use]
    pub const fn controller(&self) -> &ToggleInteractionController {
        &self.controller
    }

    // ===== Style =====

    /// Off-pose thumb color.
    #[must_use]
    pub const fn thumb_color(&self) -> Color {
        self.controller.thumb().thumb_color()
    }

    /// Set the off-pose thumb color.
    pub fn set_thumb_color(&mut self, color: Color) {
        self.controller.thumb_mut().set_thumb_color(color);
    }

    /// On-pose thumb color.
    #[must_use]
    pub const fn on_thumb_color(&self) -> Color {
        self.controller.thumb().on_thumb_color()
    }

    /// Set the on-pose thumb color.
    pub fn set_on_thumb_color(&mut self, color: Color) {
        self.controller.thumb_mut().set_on_thumb_color(color);
    }

    /// Shadow color.
    #[must_use]
    pub const fn shadow_color(&self) -> Color {
        self.controller.thumb().shadow_color()
    }

    /// Set the shadow color.
    pub fn set_shadow_color(&mut self, color: Color) {
        self.controller.thumb_mut().set_shadow_color(color);
    }

    // ===== Internals =====

    fn hit_test(&self, position: Point) -> bool {
        self.bounds.contains_point(&position)
    }

    fn to_local(&self, position: Point) -> Point {
        position - self.bounds.origin()
    }

    fn begin(&mut self, position: Point) {
        self.controller.begin_track(self.to_local(position));
    }

    fn end(&mut self, was_on: bool) -> Option<Box<dyn Any + Send>> {
        let center = self.controller.thumb_center_x();
        self.controller.end_track(center);
        self.changed(was_on)
    }

    fn changed(&self, was_on: bool) -> Option<Box<dyn Any + Send>> {
        let on = self.controller.is_on();
        (on != was_on).then(|| Box::new(ToggleChanged { on }) as Box<dyn Any + Send>)
    }

    fn paint_glyph(&self, canvas: &mut dyn Canvas, thumb: Rect, glyph: &GlyphPose, color: Color) {
        let place = Transform2D::rotate(glyph.rotation).then(&Transform2D::translate(
            thumb.x + glyph.center.x,
            thumb.y + glyph.center.y,
        ));
        canvas.push_transform(place);
        canvas.fill_rounded_rect(glyph.bar_rect(), glyph.width / 2.0, color);
        canvas.pop_transform();
    }
}

impl Widget for Toggle {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.controller.geometry().size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.controller.set_bounds(Rect::from_size(bounds.size()));
        let size = self.controller.geometry().size();
        self.bounds = Rect::from_size(size).with_origin(bounds.origin());
        LayoutResult { size }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let config = self.controller.config();
        let thumb = self.controller.thumb();

        canvas.fill_rounded_rect(self.bounds, self.bounds.height / 2.0, config.track_color);

        let thumb_rect = self
            .controller
            .thumb_rect()
            .offset(self.bounds.x, self.bounds.y);
        let shadow_color = thumb.shadow_color();
        let style = BoxStyle::fill(thumb.fill()).with_shadow(Shadow {
            color: shadow_color.with_alpha(shadow_color.a * thumb.shadow_opacity()),
            offset_x: config.shadow_offset.x,
            offset_y: config.shadow_offset.y,
            blur: config.shadow_radius,
        });
        canvas.draw_box(thumb_rect, thumb_rect.height / 2.0, &style);

        for glyph in &thumb.glyphs() {
            self.paint_glyph(canvas, thumb_rect, glyph, config.glyph_color);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            return None;
        }

        let was_on = self.controller.is_on();
        if let Event::GestureTap { position, .. } = event {
            if !self.hit_test(*position) {
                return None;
            }
            self.controller.handle_tap();
            return self.changed(was_on);
        }

        let input = event.track_input()?;
        match input.phase {
            TrackPhase::Down => {
                if self.active.is_none() {
                    if let Some(position) = input.position.filter(|p| self.hit_test(*p)) {
                        self.active = Some(input.source);
                        self.begin(position);
                    }
                }
                None
            }
            // Only the device that started the drag may continue it
            _ if self.active != Some(input.source) => None,
            TrackPhase::Move => {
                if let Some(position) = input.position {
                    self.controller.continue_track(self.to_local(position));
                }
                None
            }
            TrackPhase::Up => {
                self.active = None;
                self.end(was_on)
            }
            TrackPhase::Cancel => {
                self.active = None;
                self.controller.cancel_track();
                self.changed(was_on)
            }
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
