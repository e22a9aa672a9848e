//! Drag-and-tap toggle switch for flipswitch.
//!
//! The toggle is split into layers that can be tested on their own:
//! - [`ThumbAnimationState`]: the scrubbable X-to-check glyph morph
//! - [`ToggleInteractionController`]: drag tracking, clamping and tap handling
//! - [`Toggle`]: the [`Widget`](flipswitch_core::Widget) adapting host events
//!
//! Library code logs through `tracing` and never installs a subscriber.

pub mod config;
pub mod controller;
pub mod error;
pub mod thumb;
pub mod toggle;

pub use config::ToggleConfig;
pub use controller::{ThumbGeometry, ToggleInteractionController, ToggleState};
pub use error::{Result, ToggleError};
pub use thumb::{GlyphPose, ThumbAnimationState};
pub use toggle::{Toggle, ToggleChanged};
