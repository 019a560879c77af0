//! Intersection-triggered reveals: skill bars and section fade-in.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::str::FromStr;

/// Proficiency label carried in a skill bar's `data-level` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    #[must_use]
    pub fn width_percent(self) -> u8 {
        match self {
            SkillLevel::Beginner => 25,
            SkillLevel::Intermediate => 50,
            SkillLevel::Advanced => 75,
            SkillLevel::Expert => 100,
        }
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(SkillLevel::Beginner),
            "Intermediate" => Ok(SkillLevel::Intermediate),
            "Advanced" => Ok(SkillLevel::Advanced),
            "Expert" => Ok(SkillLevel::Expert),
            other => Err(format!("unknown skill level: {other}")),
        }
    }
}

/// CSS `width` for a bar; missing or unknown levels stay empty.
#[must_use]
pub fn skill_bar_width(level: Option<&str>) -> String {
    let pct = match level.map(str::parse::<SkillLevel>) {
        Some(Ok(level)) => level.width_percent(),
        _ => 0,
    };
    format!("{pct}%")
}

/// Inline styles for a section before it scrolls into view.
pub const FADE_HIDDEN: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

/// Inline styles once the section is visible.
pub const FADE_SHOWN: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];
