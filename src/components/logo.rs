//! Brand mark: A-frame cabin silhouette plus wordmark.

use leptos::prelude::*;

use crate::content::SectionId;
use crate::state::nav::NavState;
use crate::util::scroll;

/// Clickable brand block; returns the viewport to the hero section.
#[component]
pub fn Logo() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <div class="brand" on:click=move |_| scroll::navigate(nav, SectionId::Home)>
            <svg class="brand__mark" viewBox="0 0 100 100" aria-hidden="true">
                <path d="M10 80 L50 20 L90 80" fill="none" stroke="currentColor" stroke-width="3" stroke-linecap="round"/>
                <path d="M45 80 L45 65 L55 65 L55 80" fill="none" stroke="currentColor" stroke-width="2"/>
                <text x="60" y="75" class="brand__mark-number">"66"</text>
            </svg>
            <div class="brand__words">
                <span class="brand__name">"Chalé 66"</span>
                <span class="brand__tagline">"Refúgios com Alma"</span>
            </div>
        </div>
    }
}
