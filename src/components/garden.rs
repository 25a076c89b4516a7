//! "Jardim" section: the three investment tiers.

use leptos::prelude::*;

use crate::components::fade_section::FadeSection;
use crate::components::icons::IconArrowRight;
use crate::content::{PLANS, SectionId};
use crate::state::nav::NavState;
use crate::util::scroll;

/// Plans section (`jardim`).
#[component]
pub fn Garden() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <section id="jardim" class="garden">
            <div class="container">
                <FadeSection class="garden__header">
                    <h2 class="section-title">"O Jardim de Oportunidades"</h2>
                    <p class="section-whisper">"Plante sua semente e veja seu refúgio crescer."</p>
                </FadeSection>

                <div class="garden__grid">
                    {PLANS
                        .iter()
                        .map(|plan| {
                            let card_class = format!("garden-card {}", plan.accent.css_class());
                            view! {
                                <FadeSection>
                                    <div class=card_class>
                                        <span class="garden-card__tag">{plan.tag}</span>
                                        <h3 class="garden-card__title">{plan.title}</h3>
                                        <p class="garden-card__detail">{plan.detail}</p>
                                        <div class="garden-card__price">{plan.price}</div>
                                        <button
                                            class="garden-card__cta"
                                            on:click=move |_| scroll::navigate(nav, SectionId::Contato)
                                        >
                                            "Plantar Esta Ideia"
                                            <IconArrowRight/>
                                        </button>
                                    </div>
                                </FadeSection>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
