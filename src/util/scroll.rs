//! Viewport scrolling: offset reads and smooth in-page navigation.

use leptos::prelude::*;

use crate::content::SectionId;
use crate::state::nav::NavState;

/// Current vertical scroll offset of the viewport, in CSS pixels.
///
/// Returns `0.0` outside a browser environment.
#[must_use]
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smooth-scroll the viewport to a section's element.
///
/// Returns `false` when the element is missing from the document
/// (markup drift); callers treat that as a no-op rather than an error.
pub fn scroll_to_section(section: SectionId) -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    let Some(element) = document.get_element_by_id(section.dom_id()) else {
        log::debug!("navigation target missing from document: {}", section.dom_id());
        return false;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Navigate to a section and close the mobile menu.
///
/// Closing is unconditional once the target is found, even from desktop
/// navigation where the menu is already closed. A missing target leaves
/// both the scroll position and the menu state untouched.
pub fn navigate(nav: RwSignal<NavState>, section: SectionId) {
    if scroll_to_section(section) {
        nav.update(NavState::close_menu);
    }
}
