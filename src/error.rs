use thiserror::Error;

pub type Result<T> = std::result::Result<T, GerminahError>;

#[derive(Debug, Error)]
pub enum GerminahError {
    #[error("Auth error: {0}")]
    Auth(String),

    #[error("User already registered")]
    EmailTaken,

    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("Auth backend is not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GerminahError {
    /// Text shown inline next to a form when this error aborts a submission.
    ///
    /// Provider rejections keep their own message, known cases get a fixed
    /// translation and everything else collapses to a generic retry hint.
    pub fn user_message(&self) -> String {
        match self {
            GerminahError::Auth(msg) => msg.clone(),
            GerminahError::EmailTaken => "Este email já está cadastrado".to_string(),
            GerminahError::InvalidCredentials => "Email ou senha incorretos".to_string(),
            _ => GENERIC_RETRY.to_string(),
        }
    }
}

pub const GENERIC_RETRY: &str = "Erro inesperado. Tente novamente.";

impl From<gloo_net::Error> for GerminahError {
    fn from(err: gloo_net::Error) -> Self {
        GerminahError::Network(err.to_string())
    }
}
