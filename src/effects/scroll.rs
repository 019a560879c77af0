//! Scroll-position decisions: scroll-to-top visibility and the current section.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts;

#[must_use]
pub fn scroll_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > consts::SCROLL_TOP_THRESHOLD_PX
}

/// Id of the section the reader is in.
///
/// `sections` are `(id, offset_top)` pairs in document order. The last
/// section whose top is within [`consts::SECTION_LEAD_PX`] of the scroll
/// offset wins.
pub fn current_section<'a>(sections: impl IntoIterator<Item = (&'a str, f64)>, scroll_y: f64) -> Option<&'a str> {
    sections
        .into_iter()
        .filter(|(_, top)| scroll_y >= top - consts::SECTION_LEAD_PX)
        .last()
        .map(|(id, _)| id)
}

/// Whether a nav link pointing at `href` should be highlighted.
#[must_use]
pub fn is_active_link(href: &str, current: Option<&str>) -> bool {
    match (href.strip_prefix('#'), current) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}
