//! "Contato" section: contact details and the lead-capture form.

use leptos::prelude::*;

use crate::components::fade_section::FadeSection;
use crate::components::icons::{IconInstagram, IconLinkedin, IconMapPin, IconPhone};
use crate::content::{CONTACT_LOCATION, CONTACT_PHONE};
use crate::state::lead::{InquiryKind, LeadInquiry};

/// Contact section (`contato`).
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contato" class="contact">
            <div class="container contact__grid">
                <FadeSection>
                    <span class="contact__whisper">"Leve um pedaço deste lar com você."</span>
                    <h2 class="contact__title">"Vamos construir" <br/> "sua nova história?"</h2>

                    <div class="contact__channels">
                        <div class="contact__channel">
                            <div class="contact__channel-icon"><IconPhone/></div>
                            <div>
                                <p class="contact__channel-label">"Envie uma carta digital"</p>
                                <p class="contact__channel-value">{CONTACT_PHONE}</p>
                            </div>
                        </div>
                        <div class="contact__channel">
                            <div class="contact__channel-icon"><IconMapPin/></div>
                            <div>
                                <p class="contact__channel-label">"Nossa localização"</p>
                                <p class="contact__channel-value">{CONTACT_LOCATION}</p>
                            </div>
                        </div>
                    </div>

                    <div class="contact__social">
                        <IconInstagram/>
                        <IconLinkedin/>
                    </div>
                </FadeSection>

                <FadeSection>
                    <LeadForm/>
                </FadeSection>
            </div>
        </section>
    }
}

/// Lead-capture form.
///
/// Deliberately a stub: submission assembles and logs the lead record,
/// then swaps the form for a local acknowledgment. The record's
/// transport is an external collaborator outside this page's scope, so
/// no network call is made and no failure path exists yet.
#[component]
fn LeadForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let interest = RwSignal::new(InquiryKind::default());
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let inquiry = LeadInquiry {
            name: name.get_untracked().trim().to_owned(),
            phone: phone.get_untracked().trim().to_owned(),
            email: String::new(),
            interest: interest.get_untracked(),
        };
        match serde_json::to_string(&inquiry) {
            Ok(payload) => log::info!("lead captured locally, no transport wired: {payload}"),
            Err(err) => log::warn!("lead record failed to serialize: {err}"),
        }
        submitted.set(true);
    };

    view! {
        <Show
            when=move || !submitted.get()
            fallback=|| {
                view! {
                    <div class="lead-form lead-form--thanks">
                        <p class="lead-form__thanks-title">"Sua carta foi enviada com carinho!"</p>
                        <p class="lead-form__thanks-note">"Responderemos em breve."</p>
                    </div>
                }
            }
        >
            <form class="lead-form" on:submit=on_submit>
                <label class="lead-form__field">
                    <span class="lead-form__label">"Como devemos te chamar?"</span>
                    <input
                        class="lead-form__input"
                        type="text"
                        placeholder="Seu nome"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="lead-form__field">
                    <span class="lead-form__label">"Seu WhatsApp"</span>
                    <input
                        class="lead-form__input"
                        type="tel"
                        placeholder="(00) 00000-0000"
                        required
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <label class="lead-form__field">
                    <span class="lead-form__label">"Qual história quer contar?"</span>
                    <select
                        class="lead-form__input lead-form__select"
                        on:change=move |ev| interest.set(InquiryKind::from_label(&event_target_value(&ev)))
                    >
                        {InquiryKind::ALL
                            .iter()
                            .map(|kind| view! { <option>{kind.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <button class="lead-form__submit" type="submit">
                    "Enviar Mensagem"
                </button>
                <p class="lead-form__promise">"Prometemos cuidar bem dos seus dados."</p>
            </form>
        </Show>
    }
}
