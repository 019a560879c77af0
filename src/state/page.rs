//! Runtime aggregate mutated by dispatch handlers.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::applier::Applier;
use crate::state::mode::{self, DisplayMode};
use crate::store::PreferenceStore;
use crate::surface::Surface;

/// Everything a control event can change.
pub struct Page<S, D> {
    pub applier: Applier<S, D>,
    pub mode: DisplayMode,
    pub panel_open: bool,
}

impl<S: PreferenceStore, D: Surface> Page<S, D> {
    pub fn new(store: S, surface: D) -> Self {
        Self { applier: Applier::new(store, surface), mode: DisplayMode::default(), panel_open: false }
    }

    /// Startup pass: stored preferences, then the default display mode.
    pub fn start(&mut self) {
        self.applier.load_preferences();
        self.mode.apply(self.applier.surface_mut());
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        mode.apply(self.applier.surface_mut());
    }

    pub fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
        mode::set_panel_open(self.applier.surface_mut(), open);
    }
}
