use thiserror::Error;

/// Ошибки обращения к серверу отбора
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Order number or password not accepted by the backend
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No items for the selected sectors")]
    Empty,

    /// Backend answered but refused the operation
    #[error("Operation rejected: {0}")]
    Failure(String),

    #[error("HTTP {status}: {body}")]
    Comm { status: u16, body: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown in the screen's error area
    pub fn user_message(&self) -> String {
        match self {
            ApiError::NotFound(what) => what.clone(),
            ApiError::Empty => "Nenhum item encontrado para os setores selecionados".to_string(),
            ApiError::Failure(message) if message.trim().is_empty() => {
                "Não foi possível concluir a operação".to_string()
            }
            ApiError::Failure(message) => message.clone(),
            ApiError::Comm { status, .. } => {
                format!("Erro de comunicação com o servidor (HTTP {})", status)
            }
            ApiError::Connection(_) => {
                "Falha de conexão com o servidor. Verifique a rede e tente novamente".to_string()
            }
            ApiError::Decode(_) => "Resposta inválida do servidor".to_string(),
        }
    }
}
