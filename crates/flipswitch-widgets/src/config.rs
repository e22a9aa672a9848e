//! Toggle configuration.
//!
//! Every constant the toggle uses lives here with its default, so a host can
//! load a style from TOML or JSON and omit any field it does not care about.
//!
//! ```
//! use flipswitch_widgets::ToggleConfig;
//!
//! let config = ToggleConfig::from_toml_str("border_margin = 4.0").unwrap();
//! assert_eq!(config.border_margin, 4.0);
//! assert_eq!(config.animation_duration, 0.3);
//! ```

use crate::error::{Result, ToggleError};
use flipswitch_core::{Color, Point, Size};
use serde::{Deserialize, Serialize};

/// Static configuration of a toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Gap between the container edge and the thumb, on every side
    pub border_margin: f32,
    /// Duration of the glyph morph and the committed slide, in seconds
    pub animation_duration: f64,
    /// Size used when the toggle is created with an empty frame
    pub default_size: Size,
    /// Width of each glyph bar
    pub glyph_width: f32,
    /// Blur radius of the thumb shadow
    pub shadow_radius: f32,
    /// Offset of the thumb shadow
    pub shadow_offset: Point,
    /// Shadow opacity in the fully-on pose
    pub max_shadow_opacity: f32,
    /// Track (container) fill
    pub track_color: Color,
    /// Thumb fill in the off pose
    pub thumb_color: Color,
    /// Thumb fill in the on pose
    pub on_thumb_color: Color,
    /// Thumb shadow color
    pub shadow_color: Color,
    /// Glyph bar fill
    pub glyph_color: Color,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            border_margin: 17.0,
            animation_duration: 0.3,
            default_size: Size::new(50.0, 30.0),
            glyph_width: 7.0,
            shadow_radius: 4.0,
            shadow_offset: Point::new(0.0, 7.0),
            max_shadow_opacity: 0.5,
            track_color: Color::WHITE,
            thumb_color: Color::WHITE,
            on_thumb_color: Color::WHITE,
            shadow_color: Color::GRAY,
            glyph_color: Color::WHITE,
        }
    }
}

impl ToggleConfig {
    /// Parse and validate a TOML config.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every numeric field is in range.
    pub fn validate(&self) -> Result<()> {
        non_negative("border_margin", self.border_margin)?;
        non_negative("glyph_width", self.glyph_width)?;
        non_negative("shadow_radius", self.shadow_radius)?;

        if !valid_duration(self.animation_duration) {
            return Err(ToggleError::invalid(
                "animation_duration",
                format!("must be finite and > 0, got {}", self.animation_duration),
            ));
        }

        if !valid_size(self.default_size) {
            let Size { width, height } = self.default_size;
            return Err(ToggleError::invalid(
                "default_size",
                format!("must be positive, got {width}x{height}"),
            ));
        }

        if !finite_point(self.shadow_offset) {
            return Err(ToggleError::invalid("shadow_offset", "must be finite"));
        }

        if !unit_interval(self.max_shadow_opacity) {
            return Err(ToggleError::invalid(
                "max_shadow_opacity",
                format!("must be in [0, 1], got {}", self.max_shadow_opacity),
            ));
        }

        Ok(())
    }

    /// Replace every field [`validate`](Self::validate) would reject with its
    /// default. Valid fields are kept.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let pick = |ok: bool, value: f32, default: f32| if ok { value } else { default };
        Self {
            border_margin: pick(
                is_non_negative(self.border_margin),
                self.border_margin,
                defaults.border_margin,
            ),
            glyph_width: pick(
                is_non_negative(self.glyph_width),
                self.glyph_width,
                defaults.glyph_width,
            ),
            shadow_radius: pick(
                is_non_negative(self.shadow_radius),
                self.shadow_radius,
                defaults.shadow_radius,
            ),
            max_shadow_opacity: pick(
                unit_interval(self.max_shadow_opacity),
                self.max_shadow_opacity,
                defaults.max_shadow_opacity,
            ),
            animation_duration: if valid_duration(self.animation_duration) {
                self.animation_duration
            } else {
                defaults.animation_duration
            },
            default_size: if valid_size(self.default_size) {
                self.default_size
            } else {
                defaults.default_size
            },
            shadow_offset: if finite_point(self.shadow_offset) {
                self.shadow_offset
            } else {
                defaults.shadow_offset
            },
            ..self
        }
    }

    /// Set the border margin.
    #[must_use]
    pub const fn with_border_margin(mut self, margin: f32) -> Self {
        self.border_margin = margin;
        self
    }

    /// Set the animation duration.
    #[must_use]
    pub const fn with_animation_duration(mut self, seconds: f64) -> Self {
        self.animation_duration = seconds;
        self
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if is_non_negative(value) {
        Ok(())
    } else {
        Err(ToggleError::invalid(
            field,
            format!("must be finite and >= 0, got {value}"),
        ))
    }
}

fn is_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

fn unit_interval(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

fn valid_duration(seconds: f64) -> bool {
    seconds.is_finite() && seconds > 0.0
}

fn valid_size(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

fn finite_point(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}
