use leptos::prelude::*;

use crate::help::{faq_categories, filter_faqs, toggle_expanded, FaqCategory, TUTORIALS};

/// Shortcut cards at the top of the page: (title, description, action).
const QUICK_ACTIONS: &[(&str, &str, &str)] = &[
    ("Primeiros Passos", "Aprenda a configurar e usar seu sistema Germinah do zero", "Começar agora"),
    ("Vídeos Tutoriais", "Assista tutoriais práticos sobre montagem e manutenção", "Ver vídeos"),
    ("Suporte", "Entre em contato com nossa equipe de suporte", "Falar conosco"),
];

#[component]
pub fn HelpPage() -> impl IntoView {
    let categories: StoredValue<Vec<FaqCategory>> = StoredValue::new(faq_categories());
    let (search, set_search) = signal(String::new());
    let (expanded, set_expanded) = signal::<Option<String>>(None);

    let filtered = Memo::new(move |_| {
        let term = search.get();
        categories.with_value(|all| filter_faqs(all, &term))
    });

    let quick_actions = QUICK_ACTIONS
        .iter()
        .map(|&(title, description, action)| {
            view! {
                <div class="card quick-action">
                    <h3>{title}</h3>
                    <p>{description}</p>
                    <a href="#help-faq" class="btn btn-outline">{action}</a>
                </div>
            }
        })
        .collect_view();

    let tutorials = TUTORIALS
        .iter()
        .map(|t| {
            view! {
                <div class="card tutorial-card">
                    <span class=format!("chip tutorial-{}", t.kind.label().to_lowercase())>{t.kind.label()}</span>
                    <h3>{t.title}</h3>
                    <p>{t.description}</p>
                    <div class="tutorial-footer">
                        <span class="tutorial-duration">{t.duration}</span>
                        <button class="btn btn-outline">"Assistir"</button>
                    </div>
                </div>
            }
        })
        .collect_view();

    let faq_view = move || {
        filtered
            .get()
            .into_iter()
            .map(|category| {
                let questions = category
                    .questions
                    .into_iter()
                    .map(|faq| {
                        let is_open = move || expanded.with(|e| e.as_deref() == Some(faq.id));
                        view! {
                            <div class="faq-item" class:open=is_open>
                                <button
                                    class="faq-question"
                                    on:click=move |_| {
                                        set_expanded.update(|e| *e = toggle_expanded(e.as_deref(), faq.id))
                                    }
                                >
                                    <span>{faq.question}</span>
                                    <span class="faq-chevron">
                                        {move || if is_open() { "\u{25b2}" } else { "\u{25bc}" }}
                                    </span>
                                </button>
                                <Show when=is_open>
                                    <p class="faq-answer">{faq.answer}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="faq-category">
                        <h3>{category.title}</h3>
                        {questions}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page help-page">
            <div class="page-header">
                <div>
                    <h1>"Central de Ajuda"</h1>
                    <p class="page-description">"Encontre respostas e aprenda a usar o Germinah"</p>
                </div>
            </div>

            <input
                type="text"
                class="input search-input"
                placeholder="Buscar por dúvidas, problemas ou tutoriais..."
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />

            <div class="card-grid">{quick_actions}</div>

            <section class="help-section">
                <h2>"Tutoriais"</h2>
                <div class="card-grid">{tutorials}</div>
            </section>

            <section id="help-faq" class="help-section">
                <h2>"Perguntas Frequentes"</h2>
                <Show
                    when=move || filtered.with(|f| !f.is_empty())
                    fallback=|| {
                        view! {
                            <div class="empty-state">
                                <h3>"Nenhuma pergunta encontrada"</h3>
                                <p>"Tente buscar com outras palavras"</p>
                            </div>
                        }
                    }
                >
                    {faq_view}
                </Show>
            </section>

            <section class="card help-contact">
                <h2>"Ainda precisa de ajuda?"</h2>
                <p>"Nossa equipe está pronta para ajudar você com qualquer dúvida"</p>
                <div class="help-contact-actions">
                    <a class="btn btn-primary" href="mailto:suporte@germinah.com.br">"Email"</a>
                    <a class="btn btn-outline" href="tel:+5511999999999">"Telefone"</a>
                </div>
            </section>
        </div>
    }
}
