//! Marketing page: the informational sections in page order, framed by the
//! fixed header and the footer.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::contact::ContactSection;
use crate::scroll::scroll_to_section;

/// A titled blurb: (title, description).
type Blurb = (&'static str, &'static str);

const AUDIENCES: &[Blurb] = &[
    ("Hortas Domésticas", "Cultivo em pequenos espaços urbanos"),
    ("Escolas", "Educação ambiental prática"),
    ("Comunidades", "Projetos sociais em áreas carentes"),
    ("ONGs", "Iniciativas sustentáveis e educativas"),
];

const STEPS: &[Blurb] = &[
    ("Estrutura Vertical", "Garrafas PET dispostas verticalmente como vasos sustentáveis"),
    ("Sensores Inteligentes", "Monitoramento contínuo da umidade do solo em tempo real"),
    ("Automação Arduino", "Microcontrolador ativa bomba apenas quando necessário"),
    ("Irrigação Eficiente", "Sistema por gravidade com reaproveitamento de água"),
];

const BENEFITS: &[Blurb] = &[
    ("Economia de Água", "Até 70% menos consumo comparado à irrigação tradicional"),
    ("Energia Mínima", "Consumo energético baixíssimo com Arduino"),
    ("Baixo Custo", "Entre R$ 80 e R$ 150 para montar o sistema completo"),
    ("Fácil Montagem", "Instruções simples para replicação em qualquer lugar"),
];

const APP_FEATURES: &[Blurb] = &[
    ("Monitoramento em Tempo Real", "Acompanhe dados de umidade e temperatura instantaneamente"),
    ("Instruções Passo a Passo", "Guias detalhados para montagem e manutenção do sistema"),
    ("Relatórios de Consumo", "Análise detalhada do uso de água e energia"),
    ("Comunidade Educativa", "Compartilhe experiências com outros usuários"),
];

const SDGS: &[&str] = &[
    "Erradicação da Pobreza",
    "Fome Zero",
    "Saúde e Bem-Estar",
    "Água Limpa",
    "Cidades Sustentáveis",
    "Ação Climática",
];

/// (title, description, highlight)
const IMPACTS: &[(&str, &str, &str)] = &[
    (
        "Acesso a Alimentos Frescos",
        "Cultivo doméstico de vegetais nutritivos em pequenos espaços urbanos",
        "100% orgânico",
    ),
    (
        "Redução do Desperdício",
        "Irrigação inteligente que economiza até 70% da água utilizada",
        "70% economia",
    ),
    (
        "Geração de Renda",
        "Oportunidades de venda local e desenvolvimento de microeconomia",
        "R$ 200-500/mês",
    ),
    (
        "Educação Ambiental",
        "Conscientização sobre sustentabilidade e tecnologia verde",
        "Ensino prático",
    ),
];

/// (value, caption)
const IMPACT_NUMBERS: &[(&str, &str)] = &[
    ("70%", "Redução no desperdício de água"),
    ("33M+", "Brasileiros que podem se beneficiar"),
    ("R$ 150", "Custo máximo do sistema completo"),
    ("24/7", "Monitoramento automatizado"),
];

struct Audience {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    reach: &'static str,
}

const TARGETS: &[Audience] = &[
    Audience {
        title: "Moradores Urbanos",
        description: "Pessoas que vivem em apartamentos ou casas com pouco espaço para cultivo",
        tags: &["Cultivo em varandas", "Alimentos frescos", "Economia doméstica"],
        reach: "85% da população brasileira",
    },
    Audience {
        title: "Escolas e Educadores",
        description: "Instituições de ensino interessadas em educação ambiental prática",
        tags: &["Ensino STEM", "Sustentabilidade", "Projeto interdisciplinar"],
        reach: "180 mil escolas no Brasil",
    },
    Audience {
        title: "Comunidades Vulneráveis",
        description: "Áreas com insegurança alimentar e necessidade de geração de renda",
        tags: &["Segurança alimentar", "Renda extra", "Desenvolvimento social"],
        reach: "33+ milhões de pessoas",
    },
    Audience {
        title: "ONGs e Hortas Comunitárias",
        description: "Organizações focadas em projetos ambientais e sociais",
        tags: &["Projetos sustentáveis", "Impacto social", "Tecnologia acessível"],
        reach: "290 mil ONGs ativas",
    },
];

/// (milestone, description, state)
const MILESTONES: &[(&str, &str, &str)] = &[
    ("Protótipo Funcional", "Sistema físico testado com sucesso em ambiente controlado", "Concluído"),
    ("Irrigação Inteligente", "Ativação automática apenas quando necessário, comprovada em testes", "Validado"),
    ("Economia Comprovada", "Redução significativa no consumo de água e energia elétrica", "Medido"),
    ("Potencial de Escala", "Viabilidade técnica e econômica para replicação em larga escala", "Avaliado"),
];

/// (metric, value)
const METRICS: &[(&str, &str)] = &[
    ("Economia de Água", "70%"),
    ("Consumo Energético", "0,12 kWh/dia"),
    ("Taxa de Sobrevivência", "95%"),
    ("Custo Total", "R$ 127"),
];

/// (phase, period, description)
const TIMELINE: &[(&str, &str, &str)] = &[
    ("Pesquisa e Desenvolvimento", "Março - Maio 2024", "Estudo de viabilidade e desenvolvimento do conceito inicial"),
    ("Prototipagem", "Junho - Agosto 2024", "Construção e testes do primeiro protótipo funcional"),
    ("Validação e Testes", "Setembro - Novembro 2024", "Testes extensivos e coleta de dados de performance"),
    ("Otimização e Escala", "Dezembro 2024 - ...", "Melhorias no sistema e preparação para produção em escala"),
];

fn blurb_cards(items: &'static [Blurb]) -> impl IntoView {
    items
        .iter()
        .map(|&(title, description)| {
            view! {
                <div class="card feature-card">
                    <h3>{title}</h3>
                    <p>{description}</p>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <Header />
            <main>
                <HeroSection />
                <AboutSection />
                <HowItWorksSection />
                <EducationalAppSection />
                <ImpactSection />
                <TargetAudienceSection />
                <ResultsSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="section hero">
            <h1 class="hero-title">
                <span>"Plantando o Futuro"</span>
                <span class="hero-accent">"com Inovação"</span>
            </h1>
            <p class="hero-lead">
                "Automação, sustentabilidade e educação ambiental em um só projeto. "
                "Sistema de irrigação vertical inteligente e acessível."
            </p>
            <div class="hero-actions">
                <a href="/cadastro" class="btn btn-primary">"Acessar o app"</a>
                <button
                    class="btn btn-outline"
                    on:click=move |_| {
                        scroll_to_section("about");
                    }
                >
                    "Saiba mais"
                </button>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <h2 class="section-title">"Sobre o Germinah"</h2>
            <p class="section-lead">
                "Um sistema de irrigação vertical automatizado que reaproveita garrafas PET e usa sensores "
                "de umidade para regar apenas quando o solo precisa."
            </p>
            <div class="card-grid">{blurb_cards(AUDIENCES)}</div>
        </section>
    }
}

#[component]
fn HowItWorksSection() -> impl IntoView {
    let steps = STEPS
        .iter()
        .enumerate()
        .map(|(i, &(title, description))| {
            view! {
                <div class="card step-card">
                    <span class="step-number">{i + 1}</span>
                    <h3>{title}</h3>
                    <p>{description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="how-it-works" class="section how-it-works">
            <h2 class="section-title">"Como Funciona"</h2>
            <div class="card-grid">{steps}</div>
            <h3 class="subsection-title">"Benefícios"</h3>
            <div class="card-grid">{blurb_cards(BENEFITS)}</div>
        </section>
    }
}

#[component]
fn EducationalAppSection() -> impl IntoView {
    view! {
        <section id="app" class="section educational-app">
            <h2 class="section-title">"App Educativo"</h2>
            <p class="section-lead">
                "Acompanhe sua horta pelo celular e aprenda enquanto cultiva."
            </p>
            <div class="card-grid">{blurb_cards(APP_FEATURES)}</div>
            <a href="/cadastro" class="btn btn-primary">"Criar conta gratuita"</a>
        </section>
    }
}

#[component]
fn ImpactSection() -> impl IntoView {
    let sdgs = SDGS.iter().map(|&goal| view! { <span class="chip">{goal}</span> }).collect_view();
    let impacts = IMPACTS
        .iter()
        .map(|&(title, description, highlight)| {
            view! {
                <div class="card impact-card">
                    <h3>{title}</h3>
                    <p>{description}</p>
                    <strong class="impact-highlight">{highlight}</strong>
                </div>
            }
        })
        .collect_view();
    let numbers = IMPACT_NUMBERS
        .iter()
        .map(|&(value, caption)| {
            view! {
                <div class="stat">
                    <strong class="stat-value">{value}</strong>
                    <span class="stat-caption">{caption}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="impact" class="section impact">
            <h2 class="section-title">"Impacto Social e Ambiental"</h2>
            <div class="chip-row">{sdgs}</div>
            <div class="card-grid">{impacts}</div>
            <div class="stat-row">{numbers}</div>
        </section>
    }
}

#[component]
fn TargetAudienceSection() -> impl IntoView {
    let audiences = TARGETS
        .iter()
        .map(|a| {
            let tags = a.tags.iter().map(|&t| view! { <li>{t}</li> }).collect_view();
            view! {
                <div class="card audience-card">
                    <h3>{a.title}</h3>
                    <p>{a.description}</p>
                    <ul class="tag-list">{tags}</ul>
                    <span class="audience-reach">{a.reach}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="target" class="section target-audience">
            <h2 class="section-title">"Público-Alvo"</h2>
            <div class="card-grid">{audiences}</div>
        </section>
    }
}

#[component]
fn ResultsSection() -> impl IntoView {
    let milestones = MILESTONES
        .iter()
        .map(|&(title, description, state)| {
            view! {
                <div class="card milestone-card">
                    <span class="chip">{state}</span>
                    <h3>{title}</h3>
                    <p>{description}</p>
                </div>
            }
        })
        .collect_view();
    let metrics = METRICS
        .iter()
        .map(|&(metric, value)| {
            view! {
                <div class="stat">
                    <strong class="stat-value">{value}</strong>
                    <span class="stat-caption">{metric}</span>
                </div>
            }
        })
        .collect_view();
    let timeline = TIMELINE
        .iter()
        .map(|&(phase, period, description)| {
            view! {
                <li class="timeline-item">
                    <span class="timeline-period">{period}</span>
                    <h4>{phase}</h4>
                    <p>{description}</p>
                </li>
            }
        })
        .collect_view();

    view! {
        <section id="results" class="section results">
            <h2 class="section-title">"Resultados"</h2>
            <div class="card-grid">{milestones}</div>
            <div class="stat-row">{metrics}</div>
            <ol class="timeline">{timeline}</ol>
        </section>
    }
}
