//! Hero section: the invitation headline, primary actions, and the
//! stat strip.

use leptos::prelude::*;

use crate::components::icons::IconChevronDown;
use crate::content::{HERO_IMAGE_URL, HERO_STATS, SectionId};
use crate::state::nav::NavState;
use crate::util::scroll;

/// Full-height opening section (`home`).
#[component]
pub fn Hero() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <section id="home" class="hero">
            <div class="hero__backdrop" aria-hidden="true">
                <img class="hero__photo" src=HERO_IMAGE_URL alt=""/>
                <div class="hero__wash"></div>
            </div>

            <div class="hero__content">
                <span class="hero__whisper">"Entre. Tire os sapatos."</span>
                <h1 class="hero__title">
                    "Um lar para" <br/>
                    <span class="hero__title-accent">"respirar."</span>
                </h1>
                <p class="hero__lead">
                    "Esta não é apenas uma página de investimentos. É o convite para o seu refúgio particular nas montanhas capixabas."
                </p>
                <div class="hero__actions">
                    <button
                        class="hero__cta"
                        on:click=move |_| scroll::navigate(nav, SectionId::Receita)
                    >
                        "Comece Sua História"
                    </button>
                    <button
                        class="hero__hint"
                        on:click=move |_| scroll::navigate(nav, SectionId::Momentos)
                    >
                        <span>"ou sinta o clima"</span>
                        <IconChevronDown/>
                    </button>
                </div>
                <div class="hero__stats">
                    {HERO_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="hero__stat">
                                    <span class="hero__stat-value">{stat.value}</span>
                                    <span class="hero__stat-label">{stat.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
