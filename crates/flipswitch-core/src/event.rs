//! Input events delivered by the host to widgets.
//!
//! Gesture recognition belongs to the host: it forwards raw pointer traffic
//! as `Pointer*`/`Mouse*` events and reports recognized taps as
//! [`Event::GestureTap`]. Draggable controls see the raw traffic through
//! [`Event::track_input`], which folds mouse and pointer events into one
//! shape.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Press position
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Release position
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Pointer (touch, pen, mouse) went down
    PointerDown {
        /// Pointer ID
        pointer_id: PointerId,
        /// Device kind
        pointer_type: PointerType,
        /// Position
        position: Point,
        /// Whether this is the primary pointer
        is_primary: bool,
    },
    /// Pointer moved
    PointerMove {
        /// Pointer ID
        pointer_id: PointerId,
        /// Position
        position: Point,
    },
    /// Pointer lifted
    PointerUp {
        /// Pointer ID
        pointer_id: PointerId,
        /// Position
        position: Point,
    },
    /// Pointer taken away by the system, e.g. a competing gesture won
    PointerCancel {
        /// Pointer ID
        pointer_id: PointerId,
    },
    /// Tap recognized by the host
    GestureTap {
        /// Position
        position: Point,
        /// Number of taps (1 = single, 2 = double)
        count: u8,
    },
}

/// Pointer identifier for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

/// Kind of pointing device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerType {
    /// Mouse
    #[default]
    Mouse,
    /// Finger
    Touch,
    /// Pen or stylus
    Pen,
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
    /// Wheel click
    Middle,
}

/// Device that owns a drag. Only events from the owning source continue it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackSource {
    /// The mouse, driven by its primary button
    Mouse,
    /// A pointer stream
    Pointer(PointerId),
}

/// Stage of a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackPhase {
    /// Contact began
    Down,
    /// Contact moved
    Move,
    /// Contact ended normally
    Up,
    /// Contact was taken away
    Cancel,
}

/// An event reduced to what drag tracking needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackInput {
    /// Stage of the drag
    pub phase: TrackPhase,
    /// Device that produced the event
    pub source: TrackSource,
    /// Position, absent for a cancel
    pub position: Option<Point>,
}

impl Event {
    /// Drag-tracking view of this event.
    ///
    /// Mouse traffic counts only for the left button; taps and other
    /// buttons yield `None`.
    #[must_use]
    pub const fn track_input(&self) -> Option<TrackInput> {
        let (phase, source, position) = match *self {
            Self::MouseDown {
                position,
                button: MouseButton::Left,
            } => (TrackPhase::Down, TrackSource::Mouse, Some(position)),
            Self::MouseMove { position } => (TrackPhase::Move, TrackSource::Mouse, Some(position)),
            Self::MouseUp {
                position,
                button: MouseButton::Left,
            } => (TrackPhase::Up, TrackSource::Mouse, Some(position)),
            Self::PointerDown {
                pointer_id,
                position,
                ..
            } => (
                TrackPhase::Down,
                TrackSource::Pointer(pointer_id),
                Some(position),
            ),
            Self::PointerMove {
                pointer_id,
                position,
            } => (
                TrackPhase::Move,
                TrackSource::Pointer(pointer_id),
                Some(position),
            ),
            Self::PointerUp {
                pointer_id,
                position,
            } => (
                TrackPhase::Up,
                TrackSource::Pointer(pointer_id),
                Some(position),
            ),
            Self::PointerCancel { pointer_id } => {
                (TrackPhase::Cancel, TrackSource::Pointer(pointer_id), None)
            }
            Self::MouseDown { .. } | Self::MouseUp { .. } | Self::GestureTap { .. } => {
                return None
            }
        };
        Some(TrackInput {
            phase,
            source,
            position,
        })
    }
}
