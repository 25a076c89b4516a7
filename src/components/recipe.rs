//! "Receita" section: the three-step process list beside a framed
//! atmosphere photo.

use leptos::prelude::*;

use crate::components::fade_section::FadeSection;
use crate::components::icons::{IconCoffee, IconHeart, IconSparkles};
use crate::content::{PROCESS_STEPS, RECIPE_IMAGE_URL, StepIcon};

/// Process section (`receita`).
#[component]
pub fn Recipe() -> impl IntoView {
    view! {
        <section id="receita" class="recipe">
            <div class="container recipe__grid">
                <FadeSection>
                    <span class="section-whisper">"A Cozinha da Criação"</span>
                    <h2 class="section-title recipe__title">
                        "Receita para histórias" <br/> "que alimentam a alma."
                    </h2>
                    <p class="recipe__lead">
                        "Não construímos apenas chalés. Cultivamos o ambiente perfeito para o que realmente importa."
                    </p>

                    <div class="recipe__steps">
                        {PROCESS_STEPS
                            .iter()
                            .map(|step| {
                                view! {
                                    <div class="recipe__step">
                                        <div class="recipe__step-icon">
                                            <StepGlyph icon=step.icon/>
                                        </div>
                                        <div>
                                            <h4 class="recipe__step-title">{step.title}</h4>
                                            <p class="recipe__step-detail">{step.detail}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </FadeSection>

                <FadeSection class="recipe__aside">
                    <div class="recipe__frame">
                        <img class="recipe__photo" src=RECIPE_IMAGE_URL alt="Clima de chalé entre as árvores"/>
                        <div class="recipe__note">
                            <span class="recipe__note-badge">"10"</span>
                            <p class="recipe__note-text">"Minutos do centro, um mundo de distância."</p>
                        </div>
                    </div>
                    <div class="recipe__halo" aria-hidden="true"></div>
                </FadeSection>
            </div>
        </section>
    }
}

/// Maps a step's icon tag to its glyph component.
#[component]
fn StepGlyph(icon: StepIcon) -> impl IntoView {
    match icon {
        StepIcon::Sparkles => view! { <IconSparkles/> }.into_any(),
        StepIcon::Heart => view! { <IconHeart/> }.into_any(),
        StepIcon::Coffee => view! { <IconCoffee/> }.into_any(),
    }
}
