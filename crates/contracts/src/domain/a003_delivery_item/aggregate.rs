use serde::{Deserialize, Serialize};

/// Запрос списка позиций для выдачи (POST /entrega/listar)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryListRequest {
    #[serde(rename = "numeroPedido")]
    pub order_number: String,
    #[serde(rename = "setores")]
    pub sectors: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryListResponse {
    pub success: bool,
    #[serde(rename = "itens", default)]
    pub items: Vec<DeliveryItem>,
}

/// Позиция, уже отобранная и ожидающая выдачи
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryItem {
    #[serde(rename = "codigo")]
    pub product_code: String,

    #[serde(rename = "descricao", default)]
    pub description: String,

    #[serde(rename = "quantidade", default)]
    pub quantity: f64,

    #[serde(rename = "quantidadeSeparada", default)]
    pub separated_quantity: f64,

    /// Remaining quantity still to be delivered
    #[serde(rename = "saldoEntregar", default)]
    pub balance_to_deliver: f64,

    #[serde(rename = "unidade", default)]
    pub unit: String,

    #[serde(rename = "setor", default)]
    pub sector: String,

    #[serde(rename = "origem", default)]
    pub origin: String,

    #[serde(rename = "codigoLocal", default)]
    pub location_code: String,
}

impl DeliveryItem {
    pub fn is_deliverable(&self) -> bool {
        self.balance_to_deliver > 0.0
    }
}
