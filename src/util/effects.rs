//! Browser drivers for the page effects: footer year, scroll handling,
//! typewriter timers, and intersection reveals.
//!
//! Listeners installed here live for the whole page, so their closures are
//! leaked with `forget` once registered.

use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
    Window,
};

use crate::consts;
use crate::effects::reveal::{self, FADE_HIDDEN, FADE_SHOWN};
use crate::effects::scroll;
use crate::effects::typewriter::{Typewriter, TypingJob};
use crate::state::prefs::PreferenceSet;
use crate::util::dom::{checked, html_elements, query_all, set_style};

pub fn set_current_year(document: &Document) {
    if let Some(el) = document.get_element_by_id(consts::ID_CURRENT_YEAR) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    checked(event, target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()));
    cb.forget();
}

// ── Scroll ──────────────────────────────────────────────────────

/// Scroll-to-top button and active nav link, both recomputed on every scroll.
pub fn wire_scroll(window: &Window, document: &Document) {
    let button = document.get_element_by_id(consts::ID_SCROLL_TO_TOP);
    let sections = query_all(document, consts::SEL_SECTION);
    let links = query_all(document, consts::SEL_NAV_LINK);

    if let Some(button) = &button {
        let win = window.clone();
        listen(button, "click", move |_: Event| {
            let opts = ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&opts);
        });
    }

    let win = window.clone();
    listen(window, "scroll", move |_: Event| {
        let Some(y) = checked("scrollY", win.scroll_y()) else {
            return;
        };
        if let Some(button) = &button {
            let visible = scroll::scroll_to_top_visible(y);
            checked("scroll-top", button.class_list().toggle_with_force(consts::CLASS_VISIBLE, visible));
        }
        highlight_nav(&sections, &links, y);
    });
}

fn highlight_nav(sections: &[HtmlElement], links: &[HtmlElement], scroll_y: f64) {
    let ids: Vec<String> = sections.iter().map(|el| el.id()).collect();
    let current = scroll::current_section(
        ids.iter().zip(sections).map(|(id, el)| (id.as_str(), f64::from(el.offset_top()))),
        scroll_y,
    );
    for link in links {
        let href = link.get_attribute("href").unwrap_or_default();
        checked(
            "nav-link",
            link.class_list().toggle_with_force(consts::CLASS_ACTIVE, scroll::is_active_link(&href, current)),
        );
    }
}

/// In-page anchors scroll smoothly instead of jumping.
pub fn wire_anchors(document: &Document) {
    for anchor in query_all(document, consts::SEL_ANCHOR) {
        let doc = document.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |event: Event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            if let Some(Some(target)) = checked(&href, doc.query_selector(&href)) {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}

// ── Typewriter ──────────────────────────────────────────────────

/// Blank every terminal line and the tagline now, then type them back in.
pub fn start_typewriters(document: &Document, prefs: &PreferenceSet) {
    for (i, el) in query_all(document, consts::SEL_COMMAND).into_iter().enumerate() {
        type_later(el, TypingJob::command(i, prefs));
    }
    for (i, el) in query_all(document, consts::SEL_OUTPUT).into_iter().enumerate() {
        type_later(el, TypingJob::output(i, prefs));
    }
    if let Some(el) = query_all(document, consts::SEL_TAGLINE).into_iter().next() {
        type_later(el, TypingJob::tagline());
    }
}

fn type_later(el: HtmlElement, job: TypingJob) {
    let text = el.text_content().unwrap_or_default();
    el.set_text_content(Some(""));
    spawn_local(async move {
        sleep(Duration::from_millis(u64::from(job.delay_ms))).await;
        for frame in Typewriter::new(&text) {
            el.set_text_content(Some(&frame));
            sleep(Duration::from_millis(u64::from(job.tick_ms))).await;
        }
    });
}

// ── Reveal ──────────────────────────────────────────────────────

fn observe(
    threshold: f64,
    mut on_visible: impl FnMut(&Element, &IntersectionObserver) + 'static,
) -> Option<IntersectionObserver> {
    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(&entry.target(), &observer);
                }
            }
        },
    );
    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&threshold.into());
    let observer = checked(
        "IntersectionObserver",
        IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts),
    );
    cb.forget();
    observer
}

/// Fill skill bars the first time the skills section is half visible.
pub fn observe_skills(document: &Document) {
    let Some(skills) = document.get_element_by_id(consts::ID_SKILLS) else {
        return;
    };
    let observer = observe(consts::SKILLS_THRESHOLD, |section, observer| {
        if let Some(list) = checked("skill bars", section.query_selector_all(consts::SEL_SKILL_BAR)) {
            for bar in html_elements(&list) {
                let width = reveal::skill_bar_width(bar.get_attribute(consts::ATTR_LEVEL).as_deref());
                spawn_local(async move {
                    sleep(Duration::from_millis(u64::from(consts::SKILL_FILL_DELAY_MS))).await;
                    set_style(&bar, "width", &width);
                });
            }
        }
        observer.unobserve(section);
    });
    if let Some(observer) = observer {
        observer.observe(&skills);
    }
}

/// Hide every section and fade each in as it enters the viewport.
pub fn fade_in_sections(document: &Document) {
    let sections = query_all(document, consts::SEL_SECTION);
    let Some(observer) = observe(consts::FADE_THRESHOLD, |section, _| {
        if let Some(section) = section.dyn_ref::<HtmlElement>() {
            for (prop, value) in FADE_SHOWN {
                set_style(section, prop, value);
            }
        }
    }) else {
        return;
    };
    for section in sections {
        for (prop, value) in FADE_HIDDEN {
            set_style(&section, prop, value);
        }
        observer.observe(&section);
    }
}
