//! Hex colors as produced by `<input type="color">` and the theme table.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PreferenceError;

/// A validated `#RGB` or `#RRGGBB` color.
///
/// The original spelling is kept so the string written to storage, the CSS
/// variable, and the picker value are all byte-identical.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse a hex color, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, PreferenceError> {
        let trimmed = raw.trim();
        if is_hex_color(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(PreferenceError::InvalidColor(raw.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = PreferenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.0
    }
}

/// `#` followed by exactly three or six hex digits, nothing else.
fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}
