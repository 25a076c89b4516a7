//! Root application component: shared state, window listeners, and the
//! fixed section composition.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::garden::Garden;
use crate::components::hero::Hero;
use crate::components::moments::Moments;
use crate::components::navbar::Navbar;
use crate::components::particle_veil::ParticleVeil;
use crate::components::recipe::Recipe;
use crate::components::testimonial::Testimonial;
use crate::state::nav::NavState;
use crate::util::observer::{FadeHandle, FadeObserver};
use crate::util::scroll;

/// Root component.
///
/// Owns the two shell flags (bar compaction, mobile menu) and the fade
/// observer, wires the window scroll listener, and renders every
/// section in fixed order over the particle veil. The listener and the
/// observer are both released on teardown, so a remount never doubles
/// them up.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let nav = RwSignal::new(NavState::default());
    provide_context(nav);

    let fade: FadeHandle = StoredValue::new_local(FadeObserver::install());
    provide_context(fade);

    // Track the compaction threshold; the signal is written only on a
    // crossing, so repeated events at the same offset are free.
    let scroll_cb = Closure::wrap(Box::new(move || sync_scrolled(nav)) as Box<dyn FnMut()>);
    if let Some(window) = web_sys::window() {
        let _ =
            window.add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
    }
    // The JS closure is `!Send`; hold it in the owner-scoped local store
    // so the cleanup closure captures only the `Send` handle.
    let scroll_cb = StoredValue::new_local(scroll_cb);
    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            let _ = scroll_cb.try_with_value(|scroll_cb| {
                window.remove_event_listener_with_callback(
                    "scroll",
                    scroll_cb.as_ref().unchecked_ref(),
                )
            });
        }
    });

    // Pages opened on an anchor start mid-scroll; fold the initial
    // offset in once.
    Effect::new(move || sync_scrolled(nav));

    view! {
        <Title text="Chalé 66 — Refúgios com Alma"/>
        <Meta
            name="description"
            content="Chalés A-frame nas montanhas capixabas: refúgio particular e investimento com alma em Domingos Martins."
        />

        <div class="page">
            <ParticleVeil/>
            <Navbar/>
            <main>
                <Hero/>
                <Moments/>
                <Recipe/>
                <Garden/>
                <Testimonial/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}

/// Fold the current scroll offset into the nav state, writing the
/// signal only when the threshold crossing changes it.
fn sync_scrolled(nav: RwSignal<NavState>) {
    let offset = scroll::scroll_offset();
    if nav.with_untracked(|state| NavState::compact_at(offset) != state.scrolled) {
        nav.update(|state| {
            state.apply_scroll(offset);
        });
    }
}
