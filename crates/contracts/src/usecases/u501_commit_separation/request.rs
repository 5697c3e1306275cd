use serde::{Deserialize, Serialize};

/// Фиксация отбора выбранных позиций (POST /separacao/gravar)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitSeparationRequest {
    #[serde(rename = "numeroPedido")]
    pub order_number: String,

    #[serde(rename = "itens")]
    pub items: Vec<SeparationCommitItem>,

    /// User name returned by password validation
    #[serde(rename = "usuario")]
    pub user_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparationCommitItem {
    #[serde(rename = "codigo")]
    pub product_code: String,
    #[serde(rename = "setor")]
    pub sector: String,
    #[serde(rename = "unidade")]
    pub unit: String,
}
