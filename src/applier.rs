//! Preference store & applier.
//!
//! Keeps what the page shows (root CSS variables, panel control values and
//! their labels) equal to the last-written [`PreferenceSet`], both right after
//! a change and after a reload.
//!
//! DESIGN
//! ======
//! The applier owns its two collaborators: a [`PreferenceStore`] for
//! persistence and a [`Surface`] for visual state. Each operation is one
//! synchronous pass; events arrive one at a time, so nothing here needs to
//! guard against interleaving. Failures never surface: invalid input is
//! dropped with a `debug` log, storage failures are logged at `warn`.

#[cfg(test)]
#[path = "applier_test.rs"]
mod applier_test;

use crate::consts;
use crate::state::prefs::{
    DEFAULT_NEON_INTENSITY, DEFAULT_TYPEWRITER_SPEED_MS, Preference, PreferenceKey, PreferenceSet,
};
use crate::store::PreferenceStore;
use crate::surface::Surface;
use crate::theme::{Theme, ThemeId};

pub struct Applier<S, D> {
    store: S,
    surface: D,
    prefs: PreferenceSet,
}

impl<S: PreferenceStore, D: Surface> Applier<S, D> {
    /// Wrap a store and a surface. Nothing is read or written until
    /// [`Applier::load_preferences`].
    pub fn new(store: S, surface: D) -> Self {
        Self { store, surface, prefs: PreferenceSet::default() }
    }

    #[must_use]
    pub fn preferences(&self) -> &PreferenceSet {
        &self.prefs
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    /// Give back the collaborators, e.g. to simulate a reload against the same store.
    pub fn into_parts(self) -> (S, D) {
        (self.store, self.surface)
    }

    /// Write a theme's four colors to the root and sync the color pickers.
    ///
    /// The accent picker mirrors the theme's secondary color because it
    /// drives the secondary slot (see [`PreferenceSet::secondary_color`]).
    pub fn apply_theme(&mut self, theme: &Theme) {
        self.surface.set_style_var(consts::VAR_PRIMARY, theme.primary);
        self.surface.set_style_var(consts::VAR_SECONDARY, theme.secondary);
        self.surface.set_style_var(consts::VAR_ACCENT, theme.accent);
        self.surface.set_style_var(consts::VAR_BACKGROUND, theme.background);
        self.surface.set_control_value(consts::ID_PRIMARY_COLOR, theme.primary);
        self.surface.set_control_value(consts::ID_ACCENT_COLOR, theme.secondary);
    }

    /// Validate, show, and persist one preference.
    ///
    /// Returns `false` (and changes nothing) when `raw` is outside the
    /// domain of `key`.
    pub fn set_preference(&mut self, key: PreferenceKey, raw: &str) -> bool {
        let pref = match Preference::parse(key, raw) {
            Ok(pref) => pref,
            Err(err) => {
                log::debug!("ignoring {key} input: {err}");
                return false;
            }
        };

        self.show(&pref);
        self.prefs.apply(&pref);
        self.persist(key, &pref.stored_value());
        if key == PreferenceKey::SelectedTheme {
            self.forget(PreferenceKey::PrimaryColorOverride);
            self.forget(PreferenceKey::AccentColorOverride);
        }
        true
    }

    /// Show the compiled-in defaults, then every valid stored value on top.
    pub fn load_preferences(&mut self) {
        self.show_defaults();
        self.prefs = PreferenceSet::default();

        for key in PreferenceKey::ALL {
            let Some(raw) = self.store.get(key.storage_key()) else {
                continue;
            };
            match Preference::parse(key, &raw) {
                Ok(pref) => {
                    self.show(&pref);
                    self.prefs.apply(&pref);
                }
                Err(err) => log::debug!("ignoring stored {}: {err}", key.storage_key()),
            }
        }
        log::debug!("preferences loaded: theme={}", self.prefs.selected_theme);
    }

    /// Back to the default theme and control values; every key leaves the store.
    pub fn reset_preferences(&mut self) {
        self.show_defaults();
        self.prefs = PreferenceSet::default();
        for key in PreferenceKey::ALL {
            self.forget(key);
        }
        log::info!("preferences reset");
    }

    fn show_defaults(&mut self) {
        self.show(&Preference::Theme(ThemeId::default()));
        self.show(&Preference::NeonIntensity(DEFAULT_NEON_INTENSITY));
        self.show(&Preference::TypewriterSpeedMs(DEFAULT_TYPEWRITER_SPEED_MS));
    }

    fn show(&mut self, pref: &Preference) {
        let control = pref.key().control_id();
        match pref {
            Preference::Theme(id) => {
                self.apply_theme(id.theme());
                self.surface.set_control_value(control, id.as_str());
            }
            Preference::NeonIntensity(pct) => {
                let value = pct.to_string();
                self.surface.set_style_var(consts::VAR_NEON_INTENSITY, &value);
                self.surface.set_control_value(control, &value);
                self.surface.set_control_label(control, &format!("{pct}%"));
            }
            Preference::TypewriterSpeedMs(ms) => {
                self.surface.set_control_value(control, &ms.to_string());
                self.surface.set_control_label(control, &format!("{ms}ms"));
            }
            Preference::PrimaryColor(color) => {
                self.surface.set_style_var(consts::VAR_PRIMARY, color.as_str());
                self.surface.set_control_value(control, color.as_str());
            }
            Preference::AccentColor(color) => {
                self.surface.set_style_var(consts::VAR_SECONDARY, color.as_str());
                self.surface.set_control_value(control, color.as_str());
            }
        }
    }

    fn persist(&mut self, key: PreferenceKey, value: &str) {
        if let Err(err) = self.store.set(key.storage_key(), value) {
            log::warn!("preference not saved: {err}");
        }
    }

    fn forget(&mut self, key: PreferenceKey) {
        if let Err(err) = self.store.remove(key.storage_key()) {
            log::warn!("preference not cleared: {err}");
        }
    }
}
