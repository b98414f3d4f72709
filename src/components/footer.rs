use leptos::prelude::*;

use crate::scroll::scroll_to_section;

/// Footer link groups: (title, [(label, section id)]).
const FOOTER_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Projeto",
        &[
            ("Sobre o Germinah", "about"),
            ("Como Funciona", "how-it-works"),
            ("Aplicativo", "app"),
            ("Resultados", "results"),
        ],
    ),
    (
        "Impacto",
        &[
            ("Social e Ambiental", "impact"),
            ("Público-Alvo", "target"),
            ("ODS da ONU", "impact"),
            ("Sustentabilidade", "about"),
        ],
    ),
    (
        "Participação",
        &[
            ("Para Escolas", "contact"),
            ("Para ONGs", "contact"),
            ("Parcerias", "contact"),
            ("Voluntariado", "contact"),
        ],
    ),
];

#[component]
pub fn Footer() -> impl IntoView {
    let groups = FOOTER_SECTIONS
        .iter()
        .map(|&(title, links)| {
            view! {
                <div class="footer-group">
                    <h4>{title}</h4>
                    <ul>
                        {links
                            .iter()
                            .map(|&(label, id)| {
                                view! {
                                    <li>
                                        <button
                                            class="footer-link"
                                            on:click=move |_| {
                                                scroll_to_section(id);
                                            }
                                        >
                                            {label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>"\u{1f331} Germinah"</h3>
                    <p>
                        "Plantando o futuro com inovação. Sistema de irrigação vertical automatizado, sustentável e acessível para todos."
                    </p>
                    <div class="footer-social">
                        <a href="mailto:contato@germinah.com.br">"Email"</a>
                        <a href="https://instagram.com/germinah" target="_blank" rel="noopener noreferrer">
                            "Instagram"
                        </a>
                        <a href="https://youtube.com/germinah" target="_blank" rel="noopener noreferrer">
                            "YouTube"
                        </a>
                    </div>
                </div>
                {groups}
            </div>
            <div class="footer-stats">
                <div><strong>"Zero"</strong><span>"Desperdício de Água"</span></div>
                <div><strong>"100%"</strong><span>"Tecnologia Aberta"</span></div>
                <div><strong>"\u{221e}"</strong><span>"Potencial de Impacto"</span></div>
            </div>
            <p class="footer-note">"Feito com \u{2764} para um futuro mais sustentável"</p>
        </footer>
    }
}
