use crate::shared::date_format::{format_backend_date, is_unset};
use serde::{Deserialize, Serialize};

/// Запрос истории заказа (POST /pedido/historico)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRequest {
    #[serde(rename = "numeroPedido")]
    pub order_number: String,
}

/// Raw history payload. Dates are `YYYYMMDD`, `"00000000"` = unset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub success: bool,

    #[serde(rename = "dataVenda", default)]
    pub sale_date: String,

    #[serde(rename = "dataInclusao", default)]
    pub inclusion_date: String,

    #[serde(rename = "dataLiberacaoPcp", default)]
    pub pcp_release_date: String,

    #[serde(rename = "dataGeracaoOp", default)]
    pub production_order_date: String,

    #[serde(rename = "dataInicioEmbalagem", default)]
    pub packaging_start_date: String,

    #[serde(rename = "entregas", default)]
    pub deliveries: Vec<DeliveryRegistration>,
}

/// One delivery registered against the order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRegistration {
    #[serde(rename = "ordemProducao", default)]
    pub production_order: String,

    #[serde(rename = "produto", default)]
    pub product: String,

    #[serde(rename = "quantidade", default)]
    pub quantity: f64,

    #[serde(rename = "dataRetirada", default)]
    pub withdrawal_date: String,

    #[serde(rename = "colaborador", default)]
    pub collaborator: String,

    #[serde(rename = "setor", default)]
    pub sector: String,
}

impl DeliveryRegistration {
    pub fn withdrawal_date_display(&self) -> String {
        format_backend_date(&self.withdrawal_date)
    }
}

/// Этапы жизненного цикла заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilestoneKind {
    Sale,
    Inclusion,
    PcpRelease,
    ProductionOrder,
    PackagingStart,
}

impl MilestoneKind {
    pub fn label(&self) -> &'static str {
        match self {
            MilestoneKind::Sale => "Venda",
            MilestoneKind::Inclusion => "Inclusão",
            MilestoneKind::PcpRelease => "Liberação PCP",
            MilestoneKind::ProductionOrder => "Geração da OP",
            MilestoneKind::PackagingStart => "Início da embalagem",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub kind: MilestoneKind,
    /// Backend value as received
    pub raw_date: String,
}

impl Milestone {
    pub fn is_set(&self) -> bool {
        !is_unset(&self.raw_date)
    }

    pub fn display_date(&self) -> String {
        format_backend_date(&self.raw_date)
    }
}

/// История заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub order_number: String,
    /// Always in lifecycle order: sale, inclusion, PCP, OP, packaging
    pub milestones: Vec<Milestone>,
    /// In the order the backend registered them
    pub deliveries: Vec<DeliveryRegistration>,
}

impl HistoryRecord {
    pub fn from_response(order_number: &str, response: HistoryResponse) -> Self {
        let milestones = vec![
            (MilestoneKind::Sale, response.sale_date),
            (MilestoneKind::Inclusion, response.inclusion_date),
            (MilestoneKind::PcpRelease, response.pcp_release_date),
            (MilestoneKind::ProductionOrder, response.production_order_date),
            (MilestoneKind::PackagingStart, response.packaging_start_date),
        ]
        .into_iter()
        .map(|(kind, raw_date)| Milestone { kind, raw_date })
        .collect();

        Self {
            order_number: order_number.to_string(),
            milestones,
            deliveries: response.deliveries,
        }
    }

    pub fn milestone(&self, kind: MilestoneKind) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.kind == kind)
    }
}
