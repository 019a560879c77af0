//! WebAssembly entry point.
//!
//! Installs console logging, waits for the DOM if needed, then builds the
//! page from `localStorage` + the live document and subscribes one listener
//! per dispatch binding.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Event, Window};

use crate::dispatch::{DispatchTable, EventKind};
use crate::state::Page;
use crate::util::dom::{DomSurface, checked, control_value};
use crate::util::effects;
use crate::util::storage::LocalStore;

type BrowserPage = Page<LocalStore, DomSurface>;

thread_local! {
    static PAGE: RefCell<Option<Rc<RefCell<BrowserPage>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let win = window.clone();
        let on_ready = Closure::once_into_js(move || mount(&win, &doc));
        checked(
            "DOMContentLoaded",
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()),
        );
    } else {
        mount(&window, &document);
    }
}

/// Current preference set as JSON, or `undefined` before the page is mounted.
#[wasm_bindgen]
pub fn current_preferences() -> Option<String> {
    PAGE.with(|slot| {
        let slot = slot.borrow();
        let page = slot.as_ref()?.borrow();
        match serde_json::to_string(page.applier.preferences()) {
            Ok(json) => Some(json),
            Err(err) => {
                log::warn!("preferences not serializable: {err}");
                None
            }
        }
    })
}

fn mount(window: &Window, document: &Document) {
    effects::set_current_year(document);

    let mut page = Page::new(LocalStore::from_window(window), DomSurface::new(document.clone()));
    page.start();
    let prefs = page.applier.preferences().clone();
    let page = Rc::new(RefCell::new(page));

    let table = Rc::new(DispatchTable::standard());
    for binding in table.bindings() {
        subscribe(document, &table, &page, binding.control_id, binding.event);
    }

    effects::wire_scroll(window, document);
    effects::wire_anchors(document);
    effects::start_typewriters(document, &prefs);
    effects::observe_skills(document);
    effects::fade_in_sections(document);

    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    log::info!("folio mounted: theme={}", prefs.selected_theme);
}

fn subscribe(
    document: &Document,
    table: &Rc<DispatchTable<LocalStore, DomSurface>>,
    page: &Rc<RefCell<BrowserPage>>,
    control_id: &'static str,
    event: EventKind,
) {
    let Some(control) = document.get_element_by_id(control_id) else {
        log::debug!("#{control_id} not on page; {} not bound", event.as_str());
        return;
    };
    let table = Rc::clone(table);
    let page = Rc::clone(page);
    let source = control.clone();
    let cb = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        let value = control_value(&source);
        match page.try_borrow_mut() {
            Ok(mut page) => {
                table.dispatch(&mut page, control_id, event, &value);
            }
            Err(err) => log::warn!("{control_id} {} dropped: {err}", event.as_str()),
        }
    });
    checked(
        control_id,
        control.add_event_listener_with_callback(event.as_str(), cb.as_ref().unchecked_ref()),
    );
    cb.forget();
}
