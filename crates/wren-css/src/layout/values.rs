//! Auto-or-length values used while resolving widths and margins.

use crate::values::Value;

/// A length that may still be `auto`.
///
/// [§ 10.3.3](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
/// `width`, `margin-left` and `margin-right` may be `auto`; their used
/// values follow from the constraint equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutoOr {
    /// The keyword `auto`.
    Auto,
    /// A resolved length in pixels.
    Length(f64),
}

impl AutoOr {
    /// True for `auto`.
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// The pixel length, or `default` for `auto`.
    #[must_use]
    pub const fn to_px_or(self, default: f64) -> f64 {
        match self {
            Self::Auto => default,
            Self::Length(px) => px,
        }
    }
}

/// Keywords other than `auto`, and colours, resolve to zero pixels.
impl From<&Value> for AutoOr {
    fn from(value: &Value) -> Self {
        if value.is_auto() {
            Self::Auto
        } else {
            Self::Length(value.to_px())
        }
    }
}
