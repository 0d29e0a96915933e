//! Declared property values.
//!
//! Only three value shapes exist: a keyword, a pixel length, and an RGBA
//! colour. Percentages, `em`, and functional notations are not parsed.

use std::fmt;

use serde::Serialize;

/// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// Only absolute pixels are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    /// `px`
    Px,
}

/// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
///
/// An sRGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0-255, 255 = opaque)
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    /// Create a colour from its four channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Serialised as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// A declared value: `keyword | length(px) | color(#rrggbb)`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    /// An identifier such as `auto` or `block`.
    Keyword(String),
    /// A numeric length with its unit.
    Length(f64, Unit),
    /// A colour literal.
    Color(Color),
}

impl Value {
    /// Shorthand for a `Keyword`.
    #[must_use]
    pub fn keyword(name: &str) -> Self {
        Self::Keyword(name.to_string())
    }

    /// Shorthand for a pixel `Length`.
    #[must_use]
    pub const fn px(value: f64) -> Self {
        Self::Length(value, Unit::Px)
    }

    /// The `auto` keyword.
    #[must_use]
    pub fn auto() -> Self {
        Self::keyword("auto")
    }

    /// True for the keyword `auto`.
    #[must_use]
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Keyword(k) if k == "auto")
    }

    /// The length in pixels; keywords and colours count as zero.
    #[must_use]
    pub const fn to_px(&self) -> f64 {
        match self {
            Self::Length(value, Unit::Px) => *value,
            Self::Keyword(_) | Self::Color(_) => 0.0,
        }
    }
}

/// Units are ignored: two lengths are equal when their numbers are.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Keyword(a), Self::Keyword(b)) => a == b,
            #[allow(clippy::float_cmp)]
            (Self::Length(a, _), Self::Length(b, _)) => a == b,
            (Self::Color(a), Self::Color(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(k) => f.write_str(k),
            Self::Length(value, Unit::Px) => write!(f, "{value}px"),
            Self::Color(color) => write!(f, "{color}"),
        }
    }
}
