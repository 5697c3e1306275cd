use super::flow::OrderContext;
use super::selection::{ItemList, LocationKey};
use super::ticket::{RequestGuard, Ticket};
use crate::integrations::shortage_notifier::{
    NotifyError, ShortageLine, ShortageNotifier, ShortageReport,
};
use crate::shared::api::{ApiError, PickingGateway};
use crate::shared::config::NotificationsConfig;
use contracts::domain::a002_separation_item::SeparationItem;
use contracts::enums::format_sectors;
use contracts::usecases::u501_commit_separation::{CommitSeparationRequest, SeparationCommitItem};

/// Отбор материала: список позиций, выбор и фиксация
#[derive(Debug)]
pub struct SeparationMaterialScreen {
    context: OrderContext,
    pub loading: bool,
    pub error: Option<String>,
    /// Set after a successful commit, until the next action
    pub info: Option<String>,
    list: ItemList<SeparationItem>,
    user_name: Option<String>,
    guard: RequestGuard,
}

impl SeparationMaterialScreen {
    pub fn new(context: OrderContext) -> Self {
        Self {
            context,
            loading: false,
            error: None,
            info: None,
            list: ItemList::new(),
            user_name: None,
            guard: RequestGuard::default(),
        }
    }

    pub fn context(&self) -> &OrderContext {
        &self.context
    }

    pub fn list(&self) -> &ItemList<SeparationItem> {
        &self.list
    }

    /// User name of the last successful password validation
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// `setores` filter for the listing request
    pub fn sectors_filter(&self) -> String {
        format_sectors(self.context.sectors.iter().map(|s| s.display_name()))
    }

    pub fn begin_fetch(&mut self) -> Ticket {
        self.loading = true;
        self.error = None;
        self.guard.issue()
    }

    pub fn apply_fetch(&mut self, ticket: Ticket, result: Result<Vec<SeparationItem>, ApiError>) {
        if !self.guard.is_current(ticket) {
            tracing::debug!(
                "Dropping stale separation list for order {}",
                self.context.order_number
            );
            return;
        }
        self.loading = false;

        match result {
            Ok(items) => {
                tracing::info!(
                    "Order {}: {} items, {} separable",
                    self.context.order_number,
                    items.len(),
                    items.iter().filter(|i| i.is_separable()).count()
                );
                self.list.replace(items);
            }
            Err(e) => {
                tracing::warn!(
                    "Separation list for order {} failed: {}",
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
            .list_for_separation(&self.context.order_number, &sectors)
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

    /// One-shot "everything separated" modal
    pub fn take_completion(&mut self) -> bool {
        self.list.take_completion()
    }

    /// Check preconditions of a commit and start it
    pub fn begin_commit(&mut self, password: &str) -> Option<Ticket> {
        self.info = None;
        if self.list.selection().is_empty() {
            self.error = Some("Selecione ao menos um item".to_string());
            return None;
        }
        if password.trim().is_empty() {
            self.error = Some("Informe a senha".to_string());
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(self.guard.issue())
    }

    /// Password answer. Returns the user name to commit under
    pub fn apply_password(&mut self, ticket: Ticket, result: Result<String, ApiError>) -> Option<String> {
        if !self.guard.is_current(ticket) {
            tracing::debug!("Dropping stale password validation");
            return None;
        }
        match result {
            Ok(user_name) => {
                self.user_name = Some(user_name.clone());
                Some(user_name)
            }
            Err(e) => {
                self.loading = false;
                self.error = Some(e.user_message());
                None
            }
        }
    }

    /// Selected items in list order, as the backend expects them
    pub fn commit_request(&self, user_name: &str) -> CommitSeparationRequest {
        CommitSeparationRequest {
            order_number: self.context.order_number.clone(),
            items: self
                .list
                .selected_items()
                .into_iter()
                .map(|item| SeparationCommitItem {
                    product_code: item.product_code.clone(),
                    sector: item.sector.clone(),
                    unit: item.unit.clone(),
                })
                .collect(),
            user_name: user_name.to_string(),
        }
    }

    /// `true` when the backend accepted the separation
    pub fn apply_commit(&mut self, ticket: Ticket, result: Result<(), ApiError>) -> bool {
        if !self.guard.is_current(ticket) {
            tracing::debug!("Dropping stale separation commit result");
            return false;
        }
        self.loading = false;
        match result {
            Ok(()) => {
                self.list.clear_selection();
                self.info = Some("Separação registrada".to_string());
                true
            }
            Err(e) => {
                self.error = Some(e.user_message());
                false
            }
        }
    }

    /// Validate password, commit the selected items and reload the list
    pub async fn commit(&mut self, gateway: &dyn PickingGateway, password: &str) -> bool {
        let ticket = match self.begin_commit(password) {
            Some(ticket) => ticket,
            None => return false,
        };

        let validation = gateway.validate_password(password).await;
        let user_name = match self.apply_password(ticket, validation) {
            Some(user_name) => user_name,
            None => return false,
        };

        let request = self.commit_request(&user_name);
        let result = gateway.commit_separation(&request).await;
        if !self.apply_commit(ticket, result) {
            return false;
        }

        self.fetch(gateway).await;
        true
    }

    /// Build the missing-material report from the selected items
    pub fn shortage_report(&self, reporter: &str) -> ShortageReport {
        ShortageReport {
            order_number: self.context.order_number.clone(),
            customer_name: self.context.customer_name.clone(),
            sectors: self.context.sectors.clone(),
            reporter: reporter.to_string(),
            lines: self
                .list
                .selected_items()
                .into_iter()
                .map(ShortageLine::from_item)
                .collect(),
            reported_at: chrono::Local::now(),
        }
    }

    pub async fn report_shortage(
        &mut self,
        notifier: &dyn ShortageNotifier,
        config: &NotificationsConfig,
        reporter: &str,
    ) -> bool {
        let result = match self.shortage_report(reporter).compose(config) {
            Ok(message) => notifier.send(&message).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {
                self.info = Some("Falta de material informada".to_string());
                true
            }
            Err(e @ NotifyError::Delivery(_)) => {
                tracing::error!(
                    "Shortage report for order {} not sent: {}",
                    self.context.order_number,
                    e
                );
                self.error = Some(e.user_message());
                false
            }
            Err(e) => {
                self.error = Some(e.user_message());
                false
            }
        }
    }

    /// Called when the screen is left
    pub fn leave(&mut self) {
        self.guard.invalidate();
        self.loading = false;
    }
}
