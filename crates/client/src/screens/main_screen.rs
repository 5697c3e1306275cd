use super::ticket::{RequestGuard, Ticket};
use crate::integrations::voice_search::order_number_from_transcript;
use crate::shared::api::{ApiError, PickingGateway};
use contracts::domain::a001_order::Order;

/// Поиск заказа по номеру
#[derive(Debug, Default)]
pub struct MainScreen {
    order_input: String,
    pub loading: bool,
    pub error: Option<String>,
    guard: RequestGuard,
}

impl MainScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_input(&self) -> &str {
        &self.order_input
    }

    pub fn set_order_input(&mut self, value: &str) {
        self.order_input = value.to_string();
        self.error = None;
    }

    /// Fill the search field from a speech transcript. Returns `false` and
    /// leaves the field untouched when no number was recognized.
    pub fn set_from_voice(&mut self, transcript: &str) -> bool {
        match order_number_from_transcript(transcript) {
            Some(number) => {
                self.set_order_input(&number);
                true
            }
            None => {
                self.error = Some("Não foi possível reconhecer o número do pedido".to_string());
                false
            }
        }
    }

    /// Validate the input and start a lookup
    pub fn begin_lookup(&mut self) -> Option<(Ticket, String)> {
        let number = self.order_input.trim().to_string();
        if number.is_empty() {
            self.error = Some("Informe o número do pedido".to_string());
            return None;
        }
        if !number.chars().all(|c| c.is_ascii_digit()) {
            self.error = Some("O número do pedido deve conter apenas dígitos".to_string());
            return None;
        }

        self.loading = true;
        self.error = None;
        Some((self.guard.issue(), number))
    }

    /// Apply the lookup result; the found order is returned so the caller can
    /// move to sector selection
    pub fn apply_lookup(&mut self, ticket: Ticket, result: Result<Order, ApiError>) -> Option<Order> {
        if !self.guard.is_current(ticket) {
            tracing::debug!("Dropping stale order lookup result");
            return None;
        }
        self.loading = false;

        match result {
            Ok(order) => {
                tracing::info!(
                    "Order {} found for '{}', {} sectors available",
                    order.number,
                    order.customer_name,
                    order.available_sectors().len()
                );
                Some(order)
            }
            Err(e) => {
                tracing::warn!("Order lookup failed: {}", e);
                self.error = Some(e.user_message());
                None
            }
        }
    }

    pub async fn lookup(&mut self, gateway: &dyn PickingGateway) -> Option<Order> {
        let (ticket, number) = self.begin_lookup()?;
        let result = gateway.lookup_order(&number).await;
        self.apply_lookup(ticket, result)
    }

    /// Called when the screen is left; in-flight results are ignored
    pub fn leave(&mut self) {
        self.guard.invalidate();
        self.loading = false;
    }
}
