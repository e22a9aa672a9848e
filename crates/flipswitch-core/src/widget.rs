//! The [`Widget`] and [`Canvas`] seams between a control and its host.
//!
//! A host drives each widget through measure, layout and paint, and forwards
//! input through [`Widget::event`]. An event may produce a message for the
//! host; for a toggle that is the newly committed value.
//!
//! ```
//! use flipswitch_core::TypeId;
//!
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::color::Color;
use crate::constraints::Constraints;
use crate::draw::{BoxStyle, Transform2D};
use crate::event::Event;
use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Identifies a widget's concrete type, so hosts can diff trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Type identifier of `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Outcome of [`Widget::layout`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutResult {
    /// Size the widget settled on
    pub size: Size,
}

/// A UI element the host can measure, place, paint and feed input to.
pub trait Widget: Send + Sync {
    /// Concrete type of this widget.
    fn type_id(&self) -> TypeId;

    /// Preferred size within `constraints`.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept `bounds` from the parent.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Paint the current frame.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle one input event, returning a message for the host if the
    /// event changed something it should know about.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Child widgets.
    fn children(&self) -> &[Box<dyn Widget>];

    /// Child widgets, mutably.
    fn children_mut(&mut self) -> &mut [Box<dyn Widget>];

    /// Whether the widget currently reacts to input.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Whether the widget can take keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Name announced by screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Role announced by screen readers.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Stable identifier for UI tests.
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Bounds from the last layout, in host coordinates.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Paint target. Coordinates pass through the pushed transform stack.
pub trait Canvas {
    /// Fill a rect with uniformly rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    /// Draw a rounded box with its fill and drop shadow.
    fn draw_box(&mut self, rect: Rect, radius: f32, style: &BoxStyle);

    /// Compose `transform` onto the stack; it applies before the ones
    /// already pushed.
    fn push_transform(&mut self, transform: Transform2D);

    /// Undo the last [`Canvas::push_transform`].
    fn pop_transform(&mut self);
}

/// Screen-reader role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// No specific role
    #[default]
    Generic,
    /// Push button
    Button,
    /// Checkbox
    Checkbox,
    /// On/off switch
    Switch,
}
