use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDeliveryResponse {
    pub success: bool,
    #[serde(rename = "mensagem", default)]
    pub message: Option<String>,
}
