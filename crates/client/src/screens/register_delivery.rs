use super::flow::OrderContext;
use super::selection::{ItemList, LocationKey};
use super::ticket::{RequestGuard, Ticket};
use crate::shared::api::{ApiError, PickingGateway};
use contracts::domain::a003_delivery_item::DeliveryItem;
use contracts::enums::format_sectors;
use contracts::usecases::u502_commit_delivery::{CommitDeliveryRequest, DeliveryCommitItem};

/// Регистрация выдачи отобранного материала
#[derive(Debug)]
pub struct RegisterDeliveryScreen {
    context: OrderContext,
    pub loading: bool,
    pub error: Option<String>,
    pub info: Option<String>,
    list: ItemList<DeliveryItem>,
    guard: RequestGuard,
}

impl RegisterDeliveryScreen {
    pub fn new(context: OrderContext) -> Self {
        Self {
            context,
            loading: false,
            error: None,
            info: None,
            list: ItemList::new(),
            guard: RequestGuard::default(),
        }
    }

    pub fn context(&self) -> &OrderContext {
        &self.context
    }

    pub fn list(&self) -> &ItemList<DeliveryItem> {
        &self.list
    }

    pub fn sectors_filter(&self) -> String {
        format_sectors(self.context.sectors.iter().map(|s| s.display_name()))
    }

    pub fn begin_fetch(&mut self) -> Ticket {
        self.loading = true;
        self.error = None;
        self.guard.issue()
    }

    pub fn apply_fetch(&mut self, ticket: Ticket, result: Result<Vec<DeliveryItem>, ApiError>) {
        if !self.guard.is_current(ticket) {
            tracing::debug!(
                "Dropping stale delivery list for order {}",
                self.context.order_number
            );
            return;
        }
        self.loading = false;

        match result {
            Ok(items) => self.list.replace(items),
            Err(e) => {
                tracing::warn!(
                    "Delivery list for order {} failed: {}",
                    self.context.order_number,
                    e
                );
                self.list.clear();
                self.error = Some(e.user_message());
            }
        }
    }

    pub async fn fetch(&mut self, gateway: &dyn PickingGateway) {
        let ticket = self.begin_fetch();
        let sectors = self.sectors_filter();
        let result = gateway
            .list_for_delivery(&self.context.order_number, &sectors)
            .await;
        self.apply_fetch(ticket, result);
    }

    pub fn toggle(&mut self, product_code: &str) -> bool {
        self.info = None;
        self.list.toggle(product_code)
    }

    pub fn apply_filter(&mut self, key: LocationKey) {
        self.list.apply_filter(key);
    }

    pub fn select_all_visible(&mut self) {
        self.list.select_all_visible();
    }

    pub fn clear_selection(&mut self) {
        self.list.clear_selection();
    }

    /// One-shot "everything delivered" modal
    pub fn take_completion(&mut self) -> bool {
        self.list.take_completion()
    }

    /// Each selected item is delivered with its whole remaining balance
    pub fn commit_request(&self, user_name: &str) -> CommitDeliveryRequest {
        CommitDeliveryRequest {
            order_number: self.context.order_number.clone(),
            items: self
                .list
                .selected_items()
                .into_iter()
                .map(|item| DeliveryCommitItem {
                    product_code: item.product_code.clone(),
                    sector: item.sector.clone(),
                    quantity: item.balance_to_deliver,
                })
                .collect(),
            user_name: user_name.to_string(),
        }
    }

    pub fn begin_commit(&mut self) -> Option<Ticket> {
        self.info = None;
        if self.list.selection().is_empty() {
            self.error = Some("Selecione ao menos um item".to_string());
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(self.guard.issue())
    }

    pub fn apply_commit(&mut self, ticket: Ticket, result: Result<(), ApiError>) -> bool {
        if !self.guard.is_current(ticket) {
            tracing::debug!("Dropping stale delivery commit result");
            return false;
        }
        self.loading = false;
        match result {
            Ok(()) => {
                self.list.clear_selection();
                self.info = Some("Entrega registrada".to_string());
                true
            }
            Err(e) => {
                self.error = Some(e.user_message());
                false
            }
        }
    }

    /// Register the selected deliveries and reload the list
    pub async fn commit(&mut self, gateway: &dyn PickingGateway, user_name: &str) -> bool {
        let ticket = match self.begin_commit() {
            Some(ticket) => ticket,
            None => return false,
        };
        let request = self.commit_request(user_name);
        let result = gateway.commit_delivery(&request).await;
        if !self.apply_commit(ticket, result) {
            return false;
        }
        self.fetch(gateway).await;
        true
    }

    pub fn leave(&mut self) {
        self.guard.invalidate();
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{delivery_item, FakeGateway};
    use contracts::enums::Sector;

    fn context() -> OrderContext {
        OrderContext {
            order_number: "777".into(),
            customer_name: "Cliente Y".into(),
            sectors: vec![Sector::Tubo],
        }
    }

    #[tokio::test]
    async fn test_only_deliverable_items_selectable() {
        let gateway = FakeGateway::default();
        gateway.push_delivery(Ok(vec![
            delivery_item("A", 0.0, "D1"),
            delivery_item("B", 2.0, "D1"),
        ]));
        let mut screen = RegisterDeliveryScreen::new(context());
        screen.fetch(&gateway).await;

        assert!(!screen.toggle("A"));
        assert!(screen.toggle("B"));
        assert_eq!(screen.list().selection().len(), 1);
    }

    #[tokio::test]
    async fn test_commit_sends_balances_and_refetches() {
        let gateway = FakeGateway::default();
        gateway.push_delivery(Ok(vec![
            delivery_item("A", 3.0, "D1"),
            delivery_item("B", 2.0, ""),
        ]));
        gateway.push_delivery(Ok(vec![
            delivery_item("A", 0.0, "D1"),
            delivery_item("B", 0.0, ""),
        ]));
        let mut screen = RegisterDeliveryScreen::new(context());
        screen.fetch(&gateway).await;
        screen.select_all_visible();

        assert!(screen.commit(&gateway, "ana").await);

        let commits = gateway.delivery_commits.lock().unwrap().clone();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].items.len(), 2);
        assert_eq!(commits[0].items[0].quantity, 3.0);
        assert_eq!(commits[0].user_name, "ana");
        assert!(screen.take_completion());
        assert_eq!(screen.info.as_deref(), Some("Entrega registrada"));
    }

    #[tokio::test]
    async fn test_filter_drops_hidden_selection() {
        let gateway = FakeGateway::default();
        gateway.push_delivery(Ok(vec![
            delivery_item("A", 3.0, "D1"),
            delivery_item("B", 2.0, "D2"),
        ]));
        let mut screen = RegisterDeliveryScreen::new(context());
        screen.fetch(&gateway).await;
        screen.select_all_visible();

        screen.apply_filter(LocationKey::Code("D2".into()));
        let selected: Vec<&str> = screen
            .list()
            .selection()
            .iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(selected, vec!["B"]);
    }
}
