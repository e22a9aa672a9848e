//! Draw commands recorded by canvases.
//!
//! A toggle paints nothing but rounded boxes: the track, the shadowed thumb
//! and two glyph bars placed by a rotate-then-translate transform.

use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// Fill and optional drop shadow of a box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Drop shadow (None = no shadow)
    pub shadow: Option<Shadow>,
}

impl BoxStyle {
    /// Solid fill, no shadow.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            shadow: None,
        }
    }

    /// Attach a drop shadow.
    #[must_use]
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}

/// Drop shadow under a box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color, alpha already multiplied by the shadow opacity
    pub color: Color,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
}

/// Affine 2D transform stored column-major as `[a, b, c, d, e, f]`:
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements
    pub matrix: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Move by `(x, y)`.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Rotate about the origin by `angle` radians.
    #[must_use]
    pub fn rotate(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            matrix: [cos, sin, -sin, cos, 0.0, 0.0],
        }
    }

    /// `self` followed by `next`: `a.then(b).apply(p) == b.apply(a.apply(p))`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        let a = next.matrix;
        let b = self.matrix;
        Self {
            matrix: [
                a[0].mul_add(b[0], a[2] * b[1]),
                a[1].mul_add(b[0], a[3] * b[1]),
                a[0].mul_add(b[2], a[2] * b[3]),
                a[1].mul_add(b[2], a[3] * b[3]),
                a[0].mul_add(b[4], a[2].mul_add(b[5], a[4])),
                a[1].mul_add(b[4], a[3].mul_add(b[5], a[5])),
            ],
        }
    }

    /// Map a point through the transform.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let m = self.matrix;
        Point::new(
            m[0].mul_add(point.x, m[2].mul_add(point.y, m[4])),
            m[1].mul_add(point.x, m[3].mul_add(point.y, m[5])),
        )
    }
}

/// Recorded drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A styled box
    Rect {
        /// Box bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Fill and shadow
        style: BoxStyle,
    },

    /// Commands drawn under a transform
    Group {
        /// Child commands
        children: Vec<DrawCommand>,
        /// Composed transform in effect for the children
        transform: Transform2D,
    },
}

impl DrawCommand {
    /// A filled box with uniformly rounded corners.
    #[must_use]
    pub const fn rounded_rect(bounds: Rect, radius: f32, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            style: BoxStyle::fill(color),
        }
    }

    /// Wrap in a single-child group under `transform`.
    #[must_use]
    pub fn with_transform(self, transform: Transform2D) -> Self {
        Self::Group {
            children: vec![self],
            transform,
        }
    }
}
