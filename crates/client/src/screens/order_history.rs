use super::ticket::{RequestGuard, Ticket};
use crate::shared::api::{ApiError, PickingGateway};
use contracts::domain::a004_order_history::HistoryRecord;

/// Row of the milestone table, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneRow {
    pub label: &'static str,
    pub date: String,
    pub is_set: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRow {
    pub production_order: String,
    pub product: String,
    pub quantity: f64,
    pub date: String,
    pub collaborator: String,
    pub sector: String,
}

/// История заказа
#[derive(Debug)]
pub struct OrderHistoryScreen {
    order_number: String,
    pub loading: bool,
    pub error: Option<String>,
    record: Option<HistoryRecord>,
    guard: RequestGuard,
}

impl OrderHistoryScreen {
    pub fn new(order_number: &str) -> Self {
        Self {
            order_number: order_number.to_string(),
            loading: false,
            error: None,
            record: None,
            guard: RequestGuard::default(),
        }
    }

    pub fn record(&self) -> Option<&HistoryRecord> {
        self.record.as_ref()
    }

    pub fn begin_fetch(&mut self) -> Ticket {
        self.loading = true;
        self.error = None;
        self.guard.issue()
    }

    pub fn apply_fetch(&mut self, ticket: Ticket, result: Result<HistoryRecord, ApiError>) {
        if !self.guard.is_current(ticket) {
            tracing::debug!("Dropping stale history for order {}", self.order_number);
            return;
        }
        self.loading = false;
        match result {
            Ok(record) => self.record = Some(record),
            Err(e) => {
                tracing::warn!("History of order {} failed: {}", self.order_number, e);
                self.record = None;
                self.error = Some(e.user_message());
            }
        }
    }

    pub async fn fetch(&mut self, gateway: &dyn PickingGateway) {
        let ticket = self.begin_fetch();
        let result = gateway.fetch_history(&self.order_number).await;
        self.apply_fetch(ticket, result);
    }

    pub fn milestone_rows(&self) -> Vec<MilestoneRow> {
        self.record
            .iter()
            .flat_map(|r| r.milestones.iter())
            .map(|m| MilestoneRow {
                label: m.kind.label(),
                date: m.display_date(),
                is_set: m.is_set(),
            })
            .collect()
    }

    pub fn delivery_rows(&self) -> Vec<DeliveryRow> {
        self.record
            .iter()
            .flat_map(|r| r.deliveries.iter())
            .map(|d| DeliveryRow {
                production_order: d.production_order.clone(),
                product: d.product.clone(),
                quantity: d.quantity,
                date: d.withdrawal_date_display(),
                collaborator: d.collaborator.clone(),
                sector: d.sector.clone(),
            })
            .collect()
    }

    pub fn leave(&mut self) {
        self.guard.invalidate();
        self.loading = false;
    }
}
