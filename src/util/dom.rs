//! `web-sys` implementation of [`Surface`] plus small DOM helpers.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, NodeList};

use crate::surface::Surface;

/// Log a failed DOM call at `debug` and keep going.
pub(crate) fn checked<T>(what: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("{what} failed: {err:?}");
            None
        }
    }
}

/// Every `HtmlElement` in a node list, in document order.
pub(crate) fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<HtmlElement>().cloned())
        .collect()
}

/// `querySelectorAll` on the document, as `HtmlElement`s.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    checked(selector, document.query_selector_all(selector)).map_or_else(Vec::new, |list| html_elements(&list))
}

pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    checked(property, el.style().set_property(property, value));
}

/// Current value of an `<input>` or `<select>`; empty for anything else.
pub(crate) fn control_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

impl Surface for DomSurface {
    fn set_style_var(&mut self, name: &str, value: &str) {
        let root = self.document.document_element().and_then(|el| el.dyn_ref::<HtmlElement>().cloned());
        if let Some(root) = root {
            set_style(&root, name, value);
        }
    }

    fn set_control_value(&mut self, id: &str, value: &str) {
        let Some(el) = self.element(id) else {
            return;
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn set_control_label(&mut self, id: &str, text: &str) {
        if let Some(label) = self.element(id).and_then(|el| el.next_element_sibling()) {
            label.set_text_content(Some(text));
        }
    }

    fn set_class(&mut self, id: &str, class: &str, on: bool) {
        if let Some(el) = self.element(id) {
            checked(class, el.class_list().toggle_with_force(class, on));
        }
    }

    fn set_body_class(&mut self, class: &str, on: bool) {
        if let Some(body) = self.document.body() {
            checked(class, body.class_list().toggle_with_force(class, on));
        }
    }

    fn set_shown(&mut self, selector: &str, shown: bool) {
        for el in query_all(&self.document, selector) {
            set_style(&el, "display", if shown { "block" } else { "none" });
        }
    }
}
