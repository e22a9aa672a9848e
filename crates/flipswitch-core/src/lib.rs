//! Core types and traits for flipswitch controls.
//!
//! This crate provides the foundation the toggle widget is built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`], folded into drag terms by [`Event::track_input`]
//! - The [`Widget`] and [`Canvas`] traits, plus a [`RecordingCanvas`]
//! - Scrubbable animation: [`TimelineHandle`], [`AnimatedProperty`], [`Scrub`]

pub mod animation;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use animation::{
    AnimatedProperty, Direction, EasedValue, Easing, Interpolate, PlaybackState, Scrub,
    TimelineHandle,
};
pub use canvas::RecordingCanvas;
pub use color::Color;
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, Shadow, Transform2D};
pub use event::{
    Event, MouseButton, PointerId, PointerType, TrackInput, TrackPhase, TrackSource,
};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use widget::{AccessibleRole, Canvas, LayoutResult, TypeId, Widget};
