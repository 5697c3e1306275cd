use serde::{Deserialize, Serialize};

/// Регистрация выдачи (POST /entrega/gravar).
/// The backend has no confirmation step wired for it yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitDeliveryRequest {
    #[serde(rename = "numeroPedido")]
    pub order_number: String,

    #[serde(rename = "itens")]
    pub items: Vec<DeliveryCommitItem>,

    #[serde(rename = "usuario")]
    pub user_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryCommitItem {
    #[serde(rename = "codigo")]
    pub product_code: String,
    #[serde(rename = "setor")]
    pub sector: String,
    #[serde(rename = "quantidade")]
    pub quantity: f64,
}
