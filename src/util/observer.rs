//! Intersection-driven fade-in reveals.
//!
//! Fade targets register themselves here on mount and deregister on
//! cleanup — an explicit subscription list, never a document-wide scan.
//! Reveal state lives in [`VisibilitySet`], so the one-way transition
//! rule is testable off-browser; this module only adapts it to
//! `IntersectionObserver`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::{LocalStorage, StoredValue};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::state::visibility::{FADE_VISIBLE_RATIO, VisibilitySet};

/// Attribute stamped on watched elements so callbacks can find their
/// registry entry.
const FADE_ID_ATTR: &str = "data-fade-id";

/// Class that moves a fade target to its final visible style.
pub const VISIBLE_CLASS: &str = "visible";

/// Context handle for the shell-scoped observer. `None` means the
/// observer could not be built; targets then render visible at once.
pub type FadeHandle = StoredValue<Option<FadeObserver>, LocalStorage>;

/// Shell-scoped wrapper over one `IntersectionObserver`.
///
/// Created once per shell mount and dropped with it; dropping
/// disconnects the underlying observer, so remounts never leak watchers.
pub struct FadeObserver {
    observer: IntersectionObserver,
    seen: Rc<RefCell<VisibilitySet>>,
    next_id: Cell<u32>,
    _on_intersect: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl FadeObserver {
    /// Build the observer with the 10% visibility threshold.
    ///
    /// Returns `None` (with a warning) when the browser rejects the
    /// construction; callers fall back to instantly-visible targets.
    #[must_use]
    pub fn install() -> Option<Self> {
        let seen = Rc::new(RefCell::new(VisibilitySet::new()));
        let seen_in_callback = Rc::clone(&seen);
        let on_intersect = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    reveal_if_crossed(&seen_in_callback, &entry, &observer);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(FADE_VISIBLE_RATIO));
        let observer = match IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("intersection observer unavailable: {err:?}");
                return None;
            }
        };

        Some(Self {
            observer,
            seen,
            next_id: Cell::new(0),
            _on_intersect: on_intersect,
        })
    }

    /// Start watching an element. Idempotent for elements that are
    /// already registered.
    pub fn watch(&self, element: &Element) {
        if element.get_attribute(FADE_ID_ATTR).is_some() {
            return;
        }
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        let _ = element.set_attribute(FADE_ID_ATTR, &id.to_string());
        self.observer.observe(element);
    }

    /// Stop watching an element and drop it from the registry.
    pub fn unwatch(&self, element: &Element) {
        self.observer.unobserve(element);
        if let Some(id) = fade_id_of(element) {
            self.seen.borrow_mut().retire(id);
        }
    }
}

impl Drop for FadeObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn reveal_if_crossed(
    seen: &Rc<RefCell<VisibilitySet>>,
    entry: &IntersectionObserverEntry,
    observer: &IntersectionObserver,
) {
    let target = entry.target();
    let Some(id) = fade_id_of(&target) else {
        return;
    };
    if seen
        .borrow_mut()
        .apply_crossing(id, entry.intersection_ratio())
    {
        let _ = target.class_list().add_1(VISIBLE_CLASS);
        // Revealed targets never hide again; stop watching them.
        observer.unobserve(&target);
    }
}

fn fade_id_of(element: &Element) -> Option<u32> {
    element.get_attribute(FADE_ID_ATTR)?.parse().ok()
}
