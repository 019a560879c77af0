//! Terminal color themes.
//!
//! The registry is fixed at compile time. A theme supplies the four root
//! color variables; everything else on the page derives from them in CSS.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PreferenceError;

/// Identifier of a registered theme. Serialized as its storage spelling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Matrix,
    Cyber,
    Retro,
    Neon,
}

impl ThemeId {
    pub const ALL: [ThemeId; 4] = [ThemeId::Matrix, ThemeId::Cyber, ThemeId::Retro, ThemeId::Neon];

    /// The value stored under `terminal-theme` and used by the `<select>`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Matrix => "matrix",
            ThemeId::Cyber => "cyber",
            ThemeId::Retro => "retro",
            ThemeId::Neon => "neon",
        }
    }

    #[must_use]
    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeId::Matrix => &MATRIX,
            ThemeId::Cyber => &CYBER,
            ThemeId::Retro => &RETRO,
            ThemeId::Neon => &NEON,
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| PreferenceError::UnknownTheme(s.to_owned()))
    }
}

/// Four root colors plus a human-readable name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub display_name: &'static str,
}

pub const MATRIX: Theme = Theme {
    primary: "#00FF41",
    secondary: "#00CC33",
    accent: "#00FF00",
    background: "#000000",
    display_name: "Matrix Green",
};

pub const CYBER: Theme = Theme {
    primary: "#00FFFF",
    secondary: "#0080FF",
    accent: "#00CCCC",
    background: "#0A0A0A",
    display_name: "Cyber Blue",
};

pub const RETRO: Theme = Theme {
    primary: "#FFB000",
    secondary: "#FF8C00",
    accent: "#FFD700",
    background: "#1A1A00",
    display_name: "Retro Amber",
};

pub const NEON: Theme = Theme {
    primary: "#FF00FF",
    secondary: "#CC00CC",
    accent: "#FF0080",
    background: "#1A001A",
    display_name: "Neon Purple",
};
