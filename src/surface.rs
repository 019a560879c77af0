//! The document as seen by the behavior layer.
//!
//! Everything the crate writes to the page goes through [`Surface`]. The
//! browser implementation is `util::dom::DomSurface`; [`MemorySurface`]
//! records writes so tests can read the applied state back.
//!
//! Every method tolerates a missing element by doing nothing. The page
//! markup is fixed, but a trimmed-down page (no customization panel, say)
//! must still work.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::collections::{BTreeMap, BTreeSet};

/// Write-only view of the document.
pub trait Surface {
    /// Set a custom property on the document root element.
    fn set_style_var(&mut self, name: &str, value: &str);

    /// Set the `value` of the form control with element id `id`.
    fn set_control_value(&mut self, id: &str, value: &str);

    /// Set the text of the label element rendered right after control `id`.
    fn set_control_label(&mut self, id: &str, text: &str);

    /// Add or remove `class` on the element with id `id`.
    fn set_class(&mut self, id: &str, class: &str, on: bool);

    /// Add or remove `class` on `<body>`.
    fn set_body_class(&mut self, class: &str, on: bool);

    /// Show or hide (`display: none`) every element matching `selector`.
    fn set_shown(&mut self, selector: &str, shown: bool);
}

/// In-memory [`Surface`] with a configurable set of present elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySurface {
    present: BTreeSet<String>,
    style_vars: BTreeMap<String, String>,
    values: BTreeMap<String, String>,
    labels: BTreeMap<String, String>,
    classes: BTreeMap<String, BTreeSet<String>>,
    body_classes: BTreeSet<String>,
    shown: BTreeMap<String, bool>,
}

impl MemorySurface {
    /// A surface containing exactly the elements with the given ids.
    #[must_use]
    pub fn with_elements<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            present: ids.into_iter().map(str::to_owned).collect(),
            ..Self::default()
        }
    }

    /// Remove an element, as if the page markup did not include it.
    #[must_use]
    pub fn without(mut self, id: &str) -> Self {
        self.present.remove(id);
        self
    }

    #[must_use]
    pub fn style_var(&self, name: &str) -> Option<&str> {
        self.style_vars.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn control_value(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn control_label(&self, id: &str) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.classes.get(id).is_some_and(|set| set.contains(class))
    }

    #[must_use]
    pub fn body_has_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    /// `None` when nothing was ever written for `selector`.
    #[must_use]
    pub fn is_shown(&self, selector: &str) -> Option<bool> {
        self.shown.get(selector).copied()
    }

    fn has(&self, id: &str) -> bool {
        self.present.contains(id)
    }
}

impl Surface for MemorySurface {
    fn set_style_var(&mut self, name: &str, value: &str) {
        self.style_vars.insert(name.to_owned(), value.to_owned());
    }

    fn set_control_value(&mut self, id: &str, value: &str) {
        if self.has(id) {
            self.values.insert(id.to_owned(), value.to_owned());
        }
    }

    fn set_control_label(&mut self, id: &str, text: &str) {
        if self.has(id) {
            self.labels.insert(id.to_owned(), text.to_owned());
        }
    }

    fn set_class(&mut self, id: &str, class: &str, on: bool) {
        if !self.has(id) {
            return;
        }
        let set = self.classes.entry(id.to_owned()).or_default();
        if on {
            set.insert(class.to_owned());
        } else {
            set.remove(class);
        }
    }

    fn set_body_class(&mut self, class: &str, on: bool) {
        if on {
            self.body_classes.insert(class.to_owned());
        } else {
            self.body_classes.remove(class);
        }
    }

    fn set_shown(&mut self, selector: &str, shown: bool) {
        self.shown.insert(selector.to_owned(), shown);
    }
}
