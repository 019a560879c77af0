//! Control id → handler table.
//!
//! Built once at startup. The browser adapter subscribes one listener per
//! entry and forwards the control's current value; tests call
//! [`DispatchTable::dispatch`] directly.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use crate::consts;
use crate::state::Page;
use crate::state::mode::DisplayMode;
use crate::state::prefs::PreferenceKey;
use crate::store::PreferenceStore;
use crate::surface::Surface;

/// DOM event a handler is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Change,
    Input,
    Click,
}

impl EventKind {
    /// DOM event type name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Change => "change",
            EventKind::Input => "input",
            EventKind::Click => "click",
        }
    }
}

/// Handler receiving the page and the control's current value
/// (empty for buttons).
pub type Handler<S, D> = fn(&mut Page<S, D>, &str);

pub struct Binding<S, D> {
    pub control_id: &'static str,
    pub event: EventKind,
    pub handler: Handler<S, D>,
}

pub struct DispatchTable<S, D> {
    bindings: Vec<Binding<S, D>>,
}

impl<S: PreferenceStore, D: Surface> DispatchTable<S, D> {
    /// The fixed table for the portfolio page.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self { bindings: Vec::new() };
        table.bind(consts::ID_THEME_SELECT, EventKind::Change, |page, value| {
            page.applier.set_preference(PreferenceKey::SelectedTheme, value);
        });
        table.bind(consts::ID_NEON_INTENSITY, EventKind::Input, |page, value| {
            page.applier.set_preference(PreferenceKey::NeonIntensity, value);
        });
        table.bind(consts::ID_TYPEWRITER_SPEED, EventKind::Input, |page, value| {
            page.applier.set_preference(PreferenceKey::TypewriterSpeedMs, value);
        });
        table.bind(consts::ID_PRIMARY_COLOR, EventKind::Input, |page, value| {
            page.applier.set_preference(PreferenceKey::PrimaryColorOverride, value);
        });
        table.bind(consts::ID_ACCENT_COLOR, EventKind::Input, |page, value| {
            page.applier.set_preference(PreferenceKey::AccentColorOverride, value);
        });
        table.bind(consts::ID_RESET, EventKind::Click, |page, _| page.applier.reset_preferences());
        table.bind(consts::ID_PANEL_OPEN, EventKind::Click, |page, _| page.set_panel_open(true));
        table.bind(consts::ID_PANEL_CLOSE, EventKind::Click, |page, _| page.set_panel_open(false));
        table.bind(consts::ID_TERMINAL_TOGGLE, EventKind::Click, |page, _| {
            page.set_mode(DisplayMode::Terminal);
        });
        table.bind(consts::ID_NEON_TOGGLE, EventKind::Click, |page, _| page.set_mode(DisplayMode::Neon));
        table.bind(consts::ID_MINIMAL_TOGGLE, EventKind::Click, |page, _| {
            page.set_mode(DisplayMode::Minimal);
        });
        table
    }

    fn bind(&mut self, control_id: &'static str, event: EventKind, handler: Handler<S, D>) {
        self.bindings.push(Binding { control_id, event, handler });
    }

    #[must_use]
    pub fn bindings(&self) -> &[Binding<S, D>] {
        &self.bindings
    }

    /// Run the handler bound to `(control_id, event)`. Returns `false` when
    /// nothing is bound.
    pub fn dispatch(&self, page: &mut Page<S, D>, control_id: &str, event: EventKind, value: &str) -> bool {
        let Some(binding) = self.bindings.iter().find(|b| b.control_id == control_id && b.event == event)
        else {
            return false;
        };
        (binding.handler)(page, value);
        true
    }
}
