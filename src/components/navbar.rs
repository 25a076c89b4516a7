//! Top navigation bar: brand, section links, contact CTA, burger menu.

use leptos::prelude::*;

use crate::components::icons::{IconClose, IconMenu};
use crate::components::logo::Logo;
use crate::content::{NAV_SECTIONS, SectionId};
use crate::state::nav::NavState;
use crate::util::scroll;

/// Fixed navigation bar.
///
/// Tall and transparent at the top of the page; compacts to a
/// translucent, blurred strip once the viewport scrolls past the
/// threshold. The burger button drives the mobile menu; every
/// successful navigation closes it.
#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    let bar_class = move || {
        if nav.get().scrolled {
            "navbar navbar--compact"
        } else {
            "navbar"
        }
    };
    let links_class = move || {
        if nav.get().menu_open {
            "navbar__links navbar__links--open"
        } else {
            "navbar__links"
        }
    };

    view! {
        <nav class=bar_class>
            <div class="navbar__inner">
                <Logo/>
                <div class=links_class>
                    {NAV_SECTIONS
                        .iter()
                        .map(|(section, label)| {
                            let section = *section;
                            view! {
                                <button
                                    class="navbar__link"
                                    on:click=move |_| scroll::navigate(nav, section)
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        class="navbar__cta"
                        on:click=move |_| scroll::navigate(nav, SectionId::Contato)
                    >
                        "Envie uma carta"
                    </button>
                </div>
                <button
                    class="navbar__burger"
                    aria-label="Abrir ou fechar o menu"
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || {
                        if nav.get().menu_open {
                            view! { <IconClose/> }.into_any()
                        } else {
                            view! { <IconMenu/> }.into_any()
                        }
                    }}
                </button>
            </div>
        </nav>
    }
}
