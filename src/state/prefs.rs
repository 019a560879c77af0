//! The persisted preference set and its keys.
//!
//! DESIGN
//! ======
//! Raw control and storage values are strings. They are parsed once into a
//! typed [`Preference`] and everything downstream (applier, storage write,
//! in-memory set) works from that value, so a value that reaches the screen
//! is always one that would also survive a reload.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts;
use crate::error::PreferenceError;
use crate::theme::ThemeId;

pub const DEFAULT_NEON_INTENSITY: u8 = 50;
pub const DEFAULT_TYPEWRITER_SPEED_MS: u32 = 100;
pub const MAX_NEON_INTENSITY: u8 = 100;

/// One of the five user-adjustable settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    SelectedTheme,
    NeonIntensity,
    TypewriterSpeedMs,
    PrimaryColorOverride,
    AccentColorOverride,
}

impl PreferenceKey {
    /// Load order. The theme comes first because selecting a theme resets
    /// the color overrides that follow it.
    pub const ALL: [PreferenceKey; 5] = [
        PreferenceKey::SelectedTheme,
        PreferenceKey::NeonIntensity,
        PreferenceKey::TypewriterSpeedMs,
        PreferenceKey::PrimaryColorOverride,
        PreferenceKey::AccentColorOverride,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PreferenceKey::SelectedTheme => "selectedTheme",
            PreferenceKey::NeonIntensity => "neonIntensity",
            PreferenceKey::TypewriterSpeedMs => "typewriterSpeedMs",
            PreferenceKey::PrimaryColorOverride => "primaryColorOverride",
            PreferenceKey::AccentColorOverride => "accentColorOverride",
        }
    }

    /// Key in the persistent store.
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            PreferenceKey::SelectedTheme => consts::KEY_THEME,
            PreferenceKey::NeonIntensity => consts::KEY_NEON_INTENSITY,
            PreferenceKey::TypewriterSpeedMs => consts::KEY_TYPEWRITER_SPEED,
            PreferenceKey::PrimaryColorOverride => consts::KEY_PRIMARY_COLOR,
            PreferenceKey::AccentColorOverride => consts::KEY_ACCENT_COLOR,
        }
    }

    /// Element id of the panel control bound to this key.
    #[must_use]
    pub fn control_id(self) -> &'static str {
        match self {
            PreferenceKey::SelectedTheme => consts::ID_THEME_SELECT,
            PreferenceKey::NeonIntensity => consts::ID_NEON_INTENSITY,
            PreferenceKey::TypewriterSpeedMs => consts::ID_TYPEWRITER_SPEED,
            PreferenceKey::PrimaryColorOverride => consts::ID_PRIMARY_COLOR,
            PreferenceKey::AccentColorOverride => consts::ID_ACCENT_COLOR,
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PreferenceKey {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PreferenceKey::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| PreferenceError::UnknownKey(s.to_owned()))
    }
}

/// A validated value for one key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Preference {
    Theme(ThemeId),
    NeonIntensity(u8),
    TypewriterSpeedMs(u32),
    PrimaryColor(Color),
    AccentColor(Color),
}

impl Preference {
    /// Parse a raw control or storage string for `key`.
    pub fn parse(key: PreferenceKey, raw: &str) -> Result<Self, PreferenceError> {
        let raw = raw.trim();
        match key {
            PreferenceKey::SelectedTheme => raw.parse().map(Preference::Theme),
            PreferenceKey::NeonIntensity => {
                let v = parse_integer(raw)?;
                match u8::try_from(v) {
                    Ok(pct) if pct <= MAX_NEON_INTENSITY => Ok(Preference::NeonIntensity(pct)),
                    _ => Err(PreferenceError::IntensityOutOfRange(v)),
                }
            }
            PreferenceKey::TypewriterSpeedMs => {
                let v = parse_integer(raw)?;
                match u32::try_from(v) {
                    Ok(ms) if ms > 0 => Ok(Preference::TypewriterSpeedMs(ms)),
                    _ => Err(PreferenceError::SpeedNotPositive(v)),
                }
            }
            PreferenceKey::PrimaryColorOverride => Color::parse(raw).map(Preference::PrimaryColor),
            PreferenceKey::AccentColorOverride => Color::parse(raw).map(Preference::AccentColor),
        }
    }

    #[must_use]
    pub fn key(&self) -> PreferenceKey {
        match self {
            Preference::Theme(_) => PreferenceKey::SelectedTheme,
            Preference::NeonIntensity(_) => PreferenceKey::NeonIntensity,
            Preference::TypewriterSpeedMs(_) => PreferenceKey::TypewriterSpeedMs,
            Preference::PrimaryColor(_) => PreferenceKey::PrimaryColorOverride,
            Preference::AccentColor(_) => PreferenceKey::AccentColorOverride,
        }
    }

    /// The string written to storage and to the bound control.
    #[must_use]
    pub fn stored_value(&self) -> String {
        match self {
            Preference::Theme(id) => id.as_str().to_owned(),
            Preference::NeonIntensity(v) => v.to_string(),
            Preference::TypewriterSpeedMs(v) => v.to_string(),
            Preference::PrimaryColor(c) | Preference::AccentColor(c) => c.as_str().to_owned(),
        }
    }
}

fn parse_integer(raw: &str) -> Result<i64, PreferenceError> {
    raw.parse::<i64>().map_err(|_| PreferenceError::NotAnInteger(raw.to_owned()))
}

/// All persisted display settings for this browser profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSet {
    pub selected_theme: ThemeId,
    pub neon_intensity: u8,
    pub typewriter_speed_ms: u32,
    pub primary_color_override: Option<Color>,
    pub accent_color_override: Option<Color>,
}

impl Default for PreferenceSet {
    fn default() -> Self {
        Self {
            selected_theme: ThemeId::default(),
            neon_intensity: DEFAULT_NEON_INTENSITY,
            typewriter_speed_ms: DEFAULT_TYPEWRITER_SPEED_MS,
            primary_color_override: None,
            accent_color_override: None,
        }
    }
}

impl PreferenceSet {
    /// Record a validated value. Selecting a theme drops both color overrides.
    pub fn apply(&mut self, pref: &Preference) {
        match pref {
            Preference::Theme(id) => {
                self.selected_theme = *id;
                self.primary_color_override = None;
                self.accent_color_override = None;
            }
            Preference::NeonIntensity(v) => self.neon_intensity = *v,
            Preference::TypewriterSpeedMs(v) => self.typewriter_speed_ms = *v,
            Preference::PrimaryColor(c) => self.primary_color_override = Some(c.clone()),
            Preference::AccentColor(c) => self.accent_color_override = Some(c.clone()),
        }
    }

    /// Color shown in the primary slot (`--terminal-green`).
    #[must_use]
    pub fn primary_color(&self) -> &str {
        self.primary_color_override
            .as_ref()
            .map_or(self.selected_theme.theme().primary, Color::as_str)
    }

    /// Color shown in the secondary slot (`--terminal-cyan`), which the
    /// accent picker drives.
    #[must_use]
    pub fn secondary_color(&self) -> &str {
        self.accent_color_override
            .as_ref()
            .map_or(self.selected_theme.theme().secondary, Color::as_str)
    }

    /// Tick used for terminal output lines: half the command speed, at least 1 ms.
    #[must_use]
    pub fn output_speed_ms(&self) -> u32 {
        (self.typewriter_speed_ms / 2).max(1)
    }
}
