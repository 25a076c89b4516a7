//! Inline stroke icons used across the page chrome.
//!
//! Hand-drawn 24x24 strokes sized by the surrounding CSS; each icon is
//! a standalone component so views stay declarative.

use leptos::prelude::*;

/// Burger menu glyph.
#[component]
pub fn IconMenu() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" aria-hidden="true">
            <line x1="4" y1="7" x2="20" y2="7"/>
            <line x1="4" y1="12" x2="20" y2="12"/>
            <line x1="4" y1="17" x2="20" y2="17"/>
        </svg>
    }
}

/// Close (X) glyph.
#[component]
pub fn IconClose() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" aria-hidden="true">
            <line x1="6" y1="6" x2="18" y2="18"/>
            <line x1="18" y1="6" x2="6" y2="18"/>
        </svg>
    }
}

/// Downward chevron.
#[component]
pub fn IconChevronDown() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="m6 9 6 6 6-6"/>
        </svg>
    }
}

/// Rightward arrow.
#[component]
pub fn IconArrowRight() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <line x1="5" y1="12" x2="19" y2="12"/>
            <path d="m13 6 6 6-6 6"/>
        </svg>
    }
}

/// Telephone handset.
#[component]
pub fn IconPhone() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M4 4h5l2 5-3 2a12 12 0 0 0 5 5l2-3 5 2v5a2 2 0 0 1-2 2A18 18 0 0 1 2 6a2 2 0 0 1 2-2z"/>
        </svg>
    }
}

/// Map pin.
#[component]
pub fn IconMapPin() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M12 21s-7-6.1-7-11a7 7 0 0 1 14 0c0 4.9-7 11-7 11z"/>
            <circle cx="12" cy="10" r="2.5"/>
        </svg>
    }
}

/// Instagram mark.
#[component]
pub fn IconInstagram() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <rect x="3" y="3" width="18" height="18" rx="5"/>
            <circle cx="12" cy="12" r="4"/>
            <line x1="17.2" y1="6.8" x2="17.2" y2="6.8"/>
        </svg>
    }
}

/// LinkedIn mark.
#[component]
pub fn IconLinkedin() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <rect x="3" y="3" width="18" height="18" rx="2"/>
            <line x1="8" y1="11" x2="8" y2="17"/>
            <line x1="8" y1="7.5" x2="8" y2="7.5"/>
            <path d="M12 17v-4a2.5 2.5 0 0 1 5 0v4"/>
        </svg>
    }
}

/// Oversized quotation mark for the testimonial.
#[component]
pub fn IconQuote() -> impl IntoView {
    view! {
        <svg class="icon icon--quote" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d="M9.5 6C6.5 6 4.5 8 4.5 11v7h6v-6h-4c0-2 1-3 3-3V6zm10 0c-3 0-5 2-5 5v7h6v-6h-4c0-2 1-3 3-3V6z"/>
        </svg>
    }
}

/// Sparkle cluster (process step).
#[component]
pub fn IconSparkles() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M12 4l1.6 4.4L18 10l-4.4 1.6L12 16l-1.6-4.4L6 10l4.4-1.6L12 4z"/>
            <line x1="19" y1="16" x2="19" y2="20"/>
            <line x1="17" y1="18" x2="21" y2="18"/>
        </svg>
    }
}

/// Heart (process step).
#[component]
pub fn IconHeart() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.29 1.51 4.04 3 5.5l7 7z"/>
        </svg>
    }
}

/// Coffee cup (process step).
#[component]
pub fn IconCoffee() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M17 8h1a4 4 0 0 1 0 8h-1"/>
            <path d="M3 8h14v7a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4V8z"/>
            <line x1="7" y1="2" x2="7" y2="4"/>
            <line x1="11" y1="2" x2="11" y2="4"/>
        </svg>
    }
}
