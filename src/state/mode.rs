//! Display mode toggles (terminal / neon / minimal) and the settings panel.
//!
//! Neither is persisted; both are plain presentation state that is
//! re-derived from the markup on every load.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use crate::consts;
use crate::surface::Surface;

/// Body-level presentation mode selected by the header toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Terminal,
    Neon,
    Minimal,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [DisplayMode::Terminal, DisplayMode::Neon, DisplayMode::Minimal];

    #[must_use]
    pub fn body_class(self) -> &'static str {
        match self {
            DisplayMode::Terminal => consts::CLASS_TERMINAL_MODE,
            DisplayMode::Neon => consts::CLASS_NEON_MODE,
            DisplayMode::Minimal => consts::CLASS_MINIMAL_MODE,
        }
    }

    #[must_use]
    pub fn toggle_id(self) -> &'static str {
        match self {
            DisplayMode::Terminal => consts::ID_TERMINAL_TOGGLE,
            DisplayMode::Neon => consts::ID_NEON_TOGGLE,
            DisplayMode::Minimal => consts::ID_MINIMAL_TOGGLE,
        }
    }

    /// Mode bound to a toggle button id.
    #[must_use]
    pub fn from_toggle_id(id: &str) -> Option<Self> {
        DisplayMode::ALL.into_iter().find(|mode| mode.toggle_id() == id)
    }

    /// The terminal intro block is only shown in terminal mode.
    #[must_use]
    pub fn shows_intro(self) -> bool {
        self == DisplayMode::Terminal
    }

    /// Make this the only active mode on `surface`.
    pub fn apply(self, surface: &mut impl Surface) {
        for mode in DisplayMode::ALL {
            let on = mode == self;
            surface.set_class(mode.toggle_id(), consts::CLASS_ACTIVE, on);
            surface.set_body_class(mode.body_class(), on);
        }
        surface.set_shown(consts::SEL_INTRO, self.shows_intro());
    }
}

/// Open or close the customization panel.
pub fn set_panel_open(surface: &mut impl Surface, open: bool) {
    surface.set_class(consts::ID_PANEL, consts::CLASS_OPEN, open);
    surface.set_class(consts::ID_PANEL_OPEN, consts::CLASS_HIDDEN, open);
}
