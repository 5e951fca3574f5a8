//! Color handling for Trellis diagrams
//!
//! This module provides the [`Color`] type, a validated color token carried
//! by the styling fields of nodes and edges. Validation is deliberately
//! permissive: the editor accepts hex forms (`#rgb` up to `#rrggbbaa`) and
//! bare alphabetic names (`red`, `transparent`), and keeps the exact spelling
//! it was given so documents round-trip byte for byte.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::InvalidValue;

/// A validated color string.
///
/// # Examples
///
/// ```
/// use trellis_core::color::Color;
///
/// let red = Color::new("#ff0000").unwrap();
/// let blue = Color::new("blue").unwrap();
/// assert_eq!(red.as_str(), "#ff0000");
/// assert!(Color::new("not-a-color").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Create a new `Color` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidValue`] when the string is neither `#` followed by
    /// 3 to 8 hex digits nor a non-empty run of ASCII letters.
    pub fn new(color_str: &str) -> Result<Self, InvalidValue> {
        if Self::is_valid(color_str) {
            Ok(Self(color_str.to_string()))
        } else {
            Err(InvalidValue::new("color", color_str))
        }
    }

    /// Returns `true` if `value` would be accepted by [`Color::new`].
    pub fn is_valid(value: &str) -> bool {
        match value.strip_prefix('#') {
            Some(hex) => (3..=8).contains(&hex.len()) && hex.chars().all(|c| c.is_ascii_hexdigit()),
            None => !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()),
        }
    }

    /// The color exactly as it was written.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Color {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Color {
    type Error = InvalidValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidValue::new("color", value))
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
