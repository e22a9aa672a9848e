//! Canvas that records paint calls instead of rasterizing them.

use crate::draw::{BoxStyle, DrawCommand, Transform2D};
use crate::widget::Canvas;
use crate::{Color, CornerRadius, Rect};

/// A [`Canvas`] that records every paint call as a [`DrawCommand`].
///
/// Used by tests to check what a widget painted, and by hosts that replay
/// commands on their own renderer. A command drawn while a transform is
/// pushed is recorded inside a [`DrawCommand::Group`] carrying the composed
/// transform.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Transform2D>,
}

impl RecordingCanvas {
    /// Empty canvas with no transform pushed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far, in paint order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been painted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget all commands and transforms, ready for the next frame.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transform_stack.clear();
    }

    /// Composed transform in effect (identity when none is pushed).
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or_else(Transform2D::identity)
    }

    /// Number of pushed transforms.
    #[must_use]
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }

    fn record(&mut self, command: DrawCommand) {
        let command = match self.transform_stack.last() {
            Some(transform) => command.with_transform(*transform),
            None => command,
        };
        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.record(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn draw_box(&mut self, rect: Rect, radius: f32, style: &BoxStyle) {
        self.record(DrawCommand::Rect {
            bounds: rect,
            radius: CornerRadius::uniform(radius),
            style: style.clone(),
        });
    }

    fn push_transform(&mut self, transform: Transform2D) {
        let composed = transform.then(&self.current_transform());
        self.transform_stack.push(composed);
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }
}
