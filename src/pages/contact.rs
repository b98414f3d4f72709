use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::CONTACT_SUBMIT_DELAY_MS;
use crate::validation::looks_like_email;

/// Subjects offered by the contact form: (value, label).
pub const CONTACT_TYPES: &[(&str, &str)] = &[
    ("general", "Informações Gerais"),
    ("school", "Projeto Escolar"),
    ("community", "Projeto Comunitário"),
    ("partnership", "Parceria"),
    ("media", "Imprensa"),
];

const CONTACT_CHANNELS: &[(&str, &str, &str)] = &[
    ("Email", "contato@germinah.com.br", "mailto:contato@germinah.com.br"),
    ("Telefone", "+55 (11) 99999-9999", "tel:+5511999999999"),
    ("Localização", "São Paulo, SP - Brasil", "#contact"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub message: String,
    pub kind: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            organization: String::new(),
            message: String::new(),
            kind: "general".to_string(),
        }
    }
}

impl ContactForm {
    /// Name, a plausible email and a message are required; organization is optional.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && looks_like_email(&self.email) && !self.message.trim().is_empty()
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let (submitting, set_submitting) = signal(false);
    let (notice, set_notice) = signal::<Option<&'static str>>(None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        if !current.is_complete() {
            set_notice.set(Some("Preencha nome, email e mensagem."));
            return;
        }

        set_submitting.set(true);
        set_notice.set(None);
        tracing::info!("Sending contact message ({})", current.kind);
        spawn_local(async move {
            TimeoutFuture::new(CONTACT_SUBMIT_DELAY_MS).await;
            form.try_set(ContactForm::default());
            set_notice.try_set(Some("Mensagem enviada com sucesso! Entraremos em contato em breve."));
            set_submitting.try_set(false);
        });
    };

    let channels = CONTACT_CHANNELS
        .iter()
        .map(|&(title, value, link)| {
            view! {
                <a class="contact-channel" href=link>
                    <span class="contact-channel-title">{title}</span>
                    <span class="contact-channel-value">{value}</span>
                </a>
            }
        })
        .collect_view();

    let type_options = CONTACT_TYPES
        .iter()
        .map(|&(value, label)| view! { <option value=value>{label}</option> })
        .collect_view();

    view! {
        <section id="contact" class="section contact-section">
            <h2 class="section-title">"Entre em Contato"</h2>
            <p class="section-lead">
                "Tem interesse no projeto Germinah? Quer implementar em sua escola ou comunidade? Entre em contato conosco!"
            </p>

            <div class="contact-grid">
                <form class="card contact-form" on:submit=on_submit>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="contact-name">"Nome"</label>
                            <input
                                id="contact-name"
                                class="input"
                                type="text"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="contact-email">"Email"</label>
                            <input
                                id="contact-email"
                                class="input"
                                type="email"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="contact-organization">"Organização"</label>
                            <input
                                id="contact-organization"
                                class="input"
                                type="text"
                                prop:value=move || form.with(|f| f.organization.clone())
                                on:input=move |ev| form.update(|f| f.organization = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="contact-type">"Tipo de contato"</label>
                            <select
                                id="contact-type"
                                class="input"
                                prop:value=move || form.with(|f| f.kind.clone())
                                on:change=move |ev| form.update(|f| f.kind = event_target_value(&ev))
                            >
                                {type_options}
                            </select>
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="contact-message">"Mensagem"</label>
                        <textarea
                            id="contact-message"
                            class="input"
                            rows="5"
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                    </div>

                    <Show when=move || notice.get().is_some()>
                        <p class="status-text">{move || notice.get().unwrap_or_default()}</p>
                    </Show>

                    <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Enviando..." } else { "Enviar Mensagem" }}
                    </button>
                </form>

                <div class="contact-info">
                    {channels}
                    <div class="contact-social">
                        <a href="https://instagram.com/germinah" target="_blank" rel="noopener noreferrer">
                            "Instagram"
                        </a>
                        <a href="https://youtube.com/germinah" target="_blank" rel="noopener noreferrer">
                            "YouTube"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_is_general_and_empty() {
        let form = ContactForm::default();
        assert_eq!(form.kind, "general");
        assert!(!form.is_complete());
    }

    #[test]
    fn test_organization_is_optional() {
        let form = ContactForm {
            name: "Escola Municipal".to_string(),
            email: "diretoria@escola.org".to_string(),
            message: "Queremos uma horta vertical.".to_string(),
            kind: "school".to_string(),
            ..ContactForm::default()
        };
        assert!(form.is_complete());
        assert!(!ContactForm { email: "sem-arroba".to_string(), ..form.clone() }.is_complete());
        assert!(!ContactForm { message: "   ".to_string(), ..form }.is_complete());
    }

    #[test]
    fn test_contact_types_start_with_default() {
        assert_eq!(CONTACT_TYPES[0].0, ContactForm::default().kind);
    }
}
