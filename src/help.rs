//! Help-center content and FAQ search.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqCategory {
    pub title: &'static str,
    pub questions: Vec<Faq>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialKind {
    Video,
    Guide,
}

impl TutorialKind {
    pub fn label(self) -> &'static str {
        match self {
            TutorialKind::Video => "Vídeo",
            TutorialKind::Guide => "Tutorial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tutorial {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub kind: TutorialKind,
}

const fn faq(id: &'static str, question: &'static str, answer: &'static str) -> Faq {
    Faq { id, question, answer }
}

const GETTING_STARTED: &[Faq] = &[
    faq(
        "setup-1",
        "Como configurar meu primeiro sistema Germinah?",
        "Para configurar seu sistema, você precisará de: garrafas PET, sensor de umidade, Arduino, bomba de água e mangueiras. Siga o guia de montagem disponível na seção \"Como Funciona\" do site principal.",
    ),
    faq(
        "setup-2",
        "Quais materiais preciso para montar o sistema?",
        "Lista completa: 4-6 garrafas PET de 2L, 1 Arduino Uno, 1 sensor de umidade do solo, 1 bomba de água 12V, mangueiras, conectores, protoboard e cabos jumper. Custo total entre R$ 80-150.",
    ),
    faq(
        "setup-3",
        "Como conectar o sistema à internet?",
        "Use um módulo ESP32 ou ESP8266 para conectividade Wi-Fi. Configure as credenciais da rede no código Arduino e sincronize com o aplicativo através do menu de configurações.",
    ),
];

const IRRIGATION: &[Faq] = &[
    faq(
        "irrigation-1",
        "Por que meu sistema não está irrigando automaticamente?",
        "Verifique: 1) Se a irrigação automática está ativada nas configurações, 2) Se o sensor de umidade está funcionando corretamente, 3) Se há água no reservatório, 4) Se a bomba está conectada adequadamente.",
    ),
    faq(
        "irrigation-2",
        "Como calibrar o sensor de umidade?",
        "Coloque o sensor em solo completamente seco (0%) e depois em água (100%). Ajuste os valores no código Arduino conforme essas leituras para obter medições precisas.",
    ),
    faq(
        "irrigation-3",
        "Qual a frequência ideal de irrigação?",
        "Depende da planta e clima. Geralmente, verificações a cada 30 minutos são suficientes. Configure umidade mínima entre 40-50% para a maioria das plantas.",
    ),
];

const APP: &[Faq] = &[
    faq(
        "app-1",
        "Como sincronizar dados entre o sistema e o app?",
        "Certifique-se de que o Arduino está conectado à internet. Os dados são enviados automaticamente a cada leitura do sensor. Verifique a conexão Wi-Fi se os dados não estiverem atualizando.",
    ),
    faq(
        "app-2",
        "Por que não recebo notificações?",
        "Verifique se as notificações estão habilitadas nas configurações do app e do navegador. Para notificações por email, confirme se o endereço está correto em sua conta.",
    ),
    faq(
        "app-3",
        "Como interpretar os gráficos de umidade?",
        "O gráfico mostra a variação da umidade ao longo do tempo. Picos indicam irrigações, vales mostram quando a planta absorveu água. Uma linha estável indica boa calibração.",
    ),
];

const TECHNICAL: &[Faq] = &[
    faq(
        "tech-1",
        "O sistema não liga ou não responde",
        "Verifique: 1) Alimentação elétrica, 2) Conexões dos cabos, 3) Se o código foi carregado corretamente no Arduino, 4) Se não há curto-circuito nos componentes.",
    ),
    faq(
        "tech-2",
        "Leituras de umidade inconsistentes",
        "Pode ser devido a: sensor mal posicionado, solo muito compactado, interferência elétrica ou sensor danificado. Teste o sensor em diferentes condições para verificar.",
    ),
    faq(
        "tech-3",
        "Bomba de água não funciona",
        "Verifique: 1) Alimentação da bomba (12V), 2) Conexão com o relé, 3) Se não há obstrução nas mangueiras, 4) Se a bomba não está danificada.",
    ),
];

pub fn faq_categories() -> Vec<FaqCategory> {
    [
        ("Primeiros Passos", GETTING_STARTED),
        ("Irrigação e Sensores", IRRIGATION),
        ("Aplicativo e Monitoramento", APP),
        ("Problemas Técnicos", TECHNICAL),
    ]
    .into_iter()
    .map(|(title, questions)| FaqCategory {
        title,
        questions: questions.to_vec(),
    })
    .collect()
}

pub const TUTORIALS: &[Tutorial] = &[
    Tutorial {
        title: "Montagem Completa do Sistema",
        description: "Guia passo a passo para montar seu primeiro sistema Germinah",
        duration: "15 min",
        kind: TutorialKind::Video,
    },
    Tutorial {
        title: "Configuração do Arduino",
        description: "Como programar e configurar o microcontrolador",
        duration: "8 min",
        kind: TutorialKind::Video,
    },
    Tutorial {
        title: "Calibração de Sensores",
        description: "Aprenda a calibrar sensores para leituras precisas",
        duration: "5 min",
        kind: TutorialKind::Guide,
    },
    Tutorial {
        title: "Manutenção Preventiva",
        description: "Dicas para manter seu sistema funcionando perfeitamente",
        duration: "10 min",
        kind: TutorialKind::Guide,
    },
];

/// Keep questions whose question or answer contains `term`
/// (case-insensitive); categories left empty are dropped.
pub fn filter_faqs(categories: &[FaqCategory], term: &str) -> Vec<FaqCategory> {
    let needle = term.trim().to_lowercase();
    categories
        .iter()
        .filter_map(|cat| {
            let questions: Vec<Faq> = cat
                .questions
                .iter()
                .filter(|q| {
                    q.question.to_lowercase().contains(&needle)
                        || q.answer.to_lowercase().contains(&needle)
                })
                .copied()
                .collect();
            (!questions.is_empty()).then(|| FaqCategory {
                title: cat.title,
                questions,
            })
        })
        .collect()
}

/// Accordion toggle: opening one question closes the other.
pub fn toggle_expanded(current: Option<&str>, id: &str) -> Option<String> {
    match current {
        Some(open) if open == id => None,
        _ => Some(id.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_search_keeps_everything() {
        let all = faq_categories();
        let filtered = filter_faqs(&all, "");
        assert_eq!(filtered, all);
        assert_eq!(filtered.iter().map(|c| c.questions.len()).sum::<usize>(), 12);
    }

    #[test]
    fn test_search_matches_answers_and_drops_empty_categories() {
        let filtered = filter_faqs(&faq_categories(), "ESP32");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Primeiros Passos");
        assert_eq!(filtered[0].questions[0].id, "setup-3");
    }

    #[test]
    fn test_search_is_case_insensitive_across_categories() {
        let filtered = filter_faqs(&faq_categories(), "BOMBA");
        let ids: Vec<&str> = filtered
            .iter()
            .flat_map(|c| c.questions.iter().map(|q| q.id))
            .collect();
        assert!(ids.contains(&"tech-3"));
        assert!(ids.contains(&"irrigation-1"));
    }

    #[test]
    fn test_no_match() {
        assert!(filter_faqs(&faq_categories(), "blockchain").is_empty());
    }

    #[test]
    fn test_toggle_expanded() {
        assert_eq!(toggle_expanded(None, "app-1"), Some("app-1".to_string()));
        assert_eq!(toggle_expanded(Some("app-1"), "app-1"), None);
        assert_eq!(toggle_expanded(Some("app-1"), "app-2"), Some("app-2".to_string()));
    }
}
