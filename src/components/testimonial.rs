//! Testimonial: a single guest quote over the A-frame watermark.

use leptos::prelude::*;

use crate::components::fade_section::FadeSection;
use crate::components::icons::IconQuote;
use crate::content::{TESTIMONIAL_AUTHOR, TESTIMONIAL_PHOTO_URL, TESTIMONIAL_QUOTE, TESTIMONIAL_SINCE};

/// Testimonial section (no navigation id; it sits between the plans and
/// the contact section).
#[component]
pub fn Testimonial() -> impl IntoView {
    view! {
        <section class="testimonial">
            <div class="container">
                <FadeSection class="testimonial__body">
                    <IconQuote/>
                    <h3 class="testimonial__quote">{TESTIMONIAL_QUOTE}</h3>
                    <div class="testimonial__author">
                        <img class="testimonial__photo" src=TESTIMONIAL_PHOTO_URL alt=TESTIMONIAL_AUTHOR/>
                        <p class="testimonial__name">{TESTIMONIAL_AUTHOR}</p>
                        <p class="testimonial__since">{TESTIMONIAL_SINCE}</p>
                    </div>
                </FadeSection>
            </div>
            <div class="testimonial__watermark" aria-hidden="true">
                <svg viewBox="0 0 100 100">
                    <path d="M10 80 L50 20 L90 80" fill="currentColor"/>
                </svg>
            </div>
        </section>
    }
}
