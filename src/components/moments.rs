//! "Momentos" gallery: three framed photographs with handwritten
//! captions.

use leptos::prelude::*;

use crate::components::fade_section::FadeSection;
use crate::content::GALLERY_ITEMS;

/// Gallery section (`momentos`).
#[component]
pub fn Moments() -> impl IntoView {
    view! {
        <section id="momentos" class="moments">
            <div class="container">
                <FadeSection class="moments__header">
                    <h2 class="section-title">"Paredes que guardam memórias"</h2>
                    <p class="section-whisper">"Cada família pinta seu chalé com momentos únicos."</p>
                </FadeSection>

                <div class="moments__grid">
                    {GALLERY_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <FadeSection class="moments__cell">
                                    <figure class="moments__card">
                                        <div class="moments__photo-frame">
                                            <img class="moments__photo" src=item.image_url alt=item.caption/>
                                        </div>
                                        <figcaption class="moments__caption">{item.caption}</figcaption>
                                    </figure>
                                </FadeSection>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
