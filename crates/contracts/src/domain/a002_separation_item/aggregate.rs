use serde::{Deserialize, Serialize};

/// Запрос списка позиций для отбора (POST /separacao/listar)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeparationListRequest {
    #[serde(rename = "numeroPedido")]
    pub order_number: String,

    /// Quoted, comma separated sector codes: `'0001','0004'`
    #[serde(rename = "setores")]
    pub sectors: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeparationListResponse {
    pub success: bool,
    #[serde(rename = "itens", default)]
    pub items: Vec<SeparationItem>,
}

/// Where an item sits in the warehouse
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemLocation {
    /// Raw location code, used for the local filter buckets. Blank = no location
    #[serde(rename = "codigoLocal")]
    pub code: String,
    #[serde(rename = "local")]
    pub place: String,
    #[serde(rename = "corredor")]
    pub aisle: String,
    #[serde(rename = "prateleira")]
    pub shelf: String,
    #[serde(rename = "descricaoLocal")]
    pub description: String,
}

impl ItemLocation {
    pub fn is_blank(&self) -> bool {
        self.code.trim().is_empty()
    }

    /// "place / aisle / shelf" with empty parts skipped
    pub fn summary(&self) -> String {
        [&self.place, &self.aisle, &self.shelf]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

/// Позиция заказа, кандидат на отбор
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeparationItem {
    #[serde(rename = "codigo")]
    pub product_code: String,

    #[serde(rename = "descricao", default)]
    pub description: String,

    /// Original ordered quantity
    #[serde(rename = "quantidade", default)]
    pub quantity: f64,

    /// Remaining quantity still to be separated
    #[serde(rename = "saldo", default)]
    pub balance: f64,

    #[serde(rename = "quantidadeSeparar", default)]
    pub quantity_to_separate: f64,

    #[serde(rename = "unidade", default)]
    pub unit: String,

    #[serde(rename = "quantidadeSegundaUnidade", default)]
    pub secondary_unit_quantity: f64,

    #[serde(rename = "setor", default)]
    pub sector: String,

    #[serde(flatten)]
    pub location: ItemLocation,

    #[serde(rename = "usuarioSeparacao", default)]
    pub separated_by: Option<String>,

    /// YYYYMMDD
    #[serde(rename = "dataSeparacao", default)]
    pub separated_at: Option<String>,

    #[serde(rename = "faltaPendente", default)]
    pub pending_shortage: bool,
}

impl SeparationItem {
    /// Zero balance means the item was already separated
    pub fn is_separable(&self) -> bool {
        self.balance > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_parses_with_optional_fields_missing() {
        let json = r#"{
            "success": true,
            "itens": [{
                "codigo": "P-100",
                "descricao": "Tubo 20x20",
                "quantidade": 10,
                "saldo": 4,
                "quantidadeSeparar": 4,
                "unidade": "PC",
                "setor": "0002",
                "codigoLocal": "A1",
                "corredor": "3"
            }]
        }"#;
        let response: SeparationListResponse = serde_json::from_str(json).unwrap();
        let item = &response.items[0];

        assert!(item.is_separable());
        assert_eq!(item.location.code, "A1");
        assert_eq!(item.location.summary(), "3");
        assert!(item.separated_by.is_none());
        assert!(!item.pending_shortage);
    }

    #[test]
    fn test_zero_balance_is_not_separable() {
        let json = r#"{"codigo": "P-1", "saldo": 0, "usuarioSeparacao": "ana", "dataSeparacao": "20250110"}"#;
        let item: SeparationItem = serde_json::from_str(json).unwrap();
        assert!(!item.is_separable());
        assert!(item.location.is_blank());
        assert_eq!(item.separated_by.as_deref(), Some("ana"));
    }
}
