//! Size bounds handed to [`Widget::measure`](crate::Widget::measure).

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Minimum and maximum size a parent allows a child.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create constraints from explicit bounds.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Only `size` is allowed.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Anything from zero up to `size`.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Fit `size` into the bounds. The maximum wins over the minimum when
    /// the two disagree, and NaN bounds are ignored.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.max(self.min_width).min(self.max_width),
            size.height.max(self.min_height).min(self.max_height),
        )
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tight_forces_size() {
        let c = Constraints::tight(Size::new(50.0, 30.0));
        assert_eq!(c.constrain(Size::new(10.0, 100.0)), Size::new(50.0, 30.0));
    }

    #[test]
    fn test_loose_caps_size() {
        let c = Constraints::loose(Size::new(100.0, 40.0));
        assert_eq!(c.constrain(Size::new(315.0, 175.0)), Size::new(100.0, 40.0));
        assert_eq!(c.constrain(Size::new(50.0, 30.0)), Size::new(50.0, 30.0));
    }

    #[test]
    fn test_default_accepts_any_size() {
        let c = Constraints::default();
        assert_eq!(c.constrain(Size::new(1e6, 1e6)), Size::new(1e6, 1e6));
    }

    #[test]
    fn test_conflicting_or_nan_bounds_do_not_panic() {
        let inverted = Constraints::new(80.0, 40.0, 0.0, 30.0);
        assert_eq!(inverted.constrain(Size::new(60.0, 30.0)).width, 40.0);

        let nan = Constraints::new(f32::NAN, 100.0, 0.0, f32::NAN);
        assert_eq!(nan.constrain(Size::new(50.0, 30.0)), Size::new(50.0, 30.0));
    }
}
