use super::*;
use crate::store::MemoryStore;
use crate::surface::MemorySurface;

type TestPage = Page<MemoryStore, MemorySurface>;

fn started() -> (DispatchTable<MemoryStore, MemorySurface>, TestPage) {
    let surface = MemorySurface::with_elements(
        consts::PREFERENCE_CONTROL_IDS
            .into_iter()
            .chain(consts::TOGGLE_IDS)
            .chain([consts::ID_PANEL, consts::ID_PANEL_OPEN]),
    );
    let mut page = Page::new(MemoryStore::new(), surface);
    page.start();
    (DispatchTable::standard(), page)
}

#[test]
fn every_control_is_bound_once() {
    let table = DispatchTable::<MemoryStore, MemorySurface>::standard();
    let mut ids: Vec<_> = table.bindings().iter().map(|b| b.control_id).collect();
    assert_eq!(ids.len(), 11);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 11);
}

#[test]
fn event_kinds_match_control_types() {
    let table = DispatchTable::<MemoryStore, MemorySurface>::standard();
    let kind = |id: &str| table.bindings().iter().find(|b| b.control_id == id).map(|b| b.event);
    assert_eq!(kind(consts::ID_THEME_SELECT), Some(EventKind::Change));
    assert_eq!(kind(consts::ID_NEON_INTENSITY), Some(EventKind::Input));
    assert_eq!(kind(consts::ID_ACCENT_COLOR), Some(EventKind::Input));
    assert_eq!(kind(consts::ID_RESET), Some(EventKind::Click));
    assert_eq!(EventKind::Change.as_str(), "change");
}

#[test]
fn theme_change_applies_and_persists() {
    let (table, mut page) = started();
    assert!(table.dispatch(&mut page, consts::ID_THEME_SELECT, EventKind::Change, "cyber"));
    assert_eq!(page.applier.surface().style_var(consts::VAR_PRIMARY), Some("#00FFFF"));
    assert_eq!(page.applier.store().get(consts::KEY_THEME).as_deref(), Some("cyber"));
}

#[test]
fn slider_input_updates_label() {
    let (table, mut page) = started();
    table.dispatch(&mut page, consts::ID_NEON_INTENSITY, EventKind::Input, "65");
    table.dispatch(&mut page, consts::ID_TYPEWRITER_SPEED, EventKind::Input, "120");
    assert_eq!(page.applier.surface().control_label(consts::ID_NEON_INTENSITY), Some("65%"));
    assert_eq!(page.applier.surface().control_label(consts::ID_TYPEWRITER_SPEED), Some("120ms"));
}

#[test]
fn reset_click_clears_store() {
    let (table, mut page) = started();
    table.dispatch(&mut page, consts::ID_PRIMARY_COLOR, EventKind::Input, "#0000ff");
    assert!(!page.applier.store().is_empty());
    table.dispatch(&mut page, consts::ID_RESET, EventKind::Click, "");
    assert!(page.applier.store().is_empty());
    assert_eq!(page.applier.surface().style_var(consts::VAR_PRIMARY), Some("#00FF41"));
}

#[test]
fn panel_buttons_open_and_close() {
    let (table, mut page) = started();
    table.dispatch(&mut page, consts::ID_PANEL_OPEN, EventKind::Click, "");
    assert!(page.panel_open);
    table.dispatch(&mut page, consts::ID_PANEL_CLOSE, EventKind::Click, "");
    assert!(!page.panel_open);
}

#[test]
fn mode_toggles_switch_mode() {
    let (table, mut page) = started();
    table.dispatch(&mut page, consts::ID_NEON_TOGGLE, EventKind::Click, "");
    assert_eq!(page.mode, DisplayMode::Neon);
    table.dispatch(&mut page, consts::ID_MINIMAL_TOGGLE, EventKind::Click, "");
    assert_eq!(page.mode, DisplayMode::Minimal);
    table.dispatch(&mut page, consts::ID_TERMINAL_TOGGLE, EventKind::Click, "");
    assert_eq!(page.mode, DisplayMode::Terminal);
}

#[test]
fn unknown_control_or_wrong_event_is_ignored() {
    let (table, mut page) = started();
    assert!(!table.dispatch(&mut page, "nope", EventKind::Click, ""));
    assert!(!table.dispatch(&mut page, consts::ID_THEME_SELECT, EventKind::Click, "cyber"));
    assert_eq!(page.applier.preferences().selected_theme, crate::theme::ThemeId::Matrix);
}
