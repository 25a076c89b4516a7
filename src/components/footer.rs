//! Page footer: brand, legal links, copyright.

use leptos::prelude::*;

use crate::components::logo::Logo;

/// Footer strip closing the page.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer__inner">
                <Logo/>
                <div class="footer__legal">
                    <span class="footer__legal-link">"Privacidade"</span>
                    <span class="footer__legal-link">"Termos de Uso"</span>
                </div>
                <p class="footer__copyright">
                    "© 2024 Chalé 66 — Uma marca do Grupo Refúgios de Luxo"
                </p>
                <div class="footer__dots" aria-hidden="true">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </div>
        </footer>
    }
}
