use super::error::ApiError;
use async_trait::async_trait;
use contracts::domain::a001_order::Order;
use contracts::domain::a002_separation_item::SeparationItem;
use contracts::domain::a003_delivery_item::DeliveryItem;
use contracts::domain::a004_order_history::HistoryRecord;
use contracts::usecases::u501_commit_separation::CommitSeparationRequest;
use contracts::usecases::u502_commit_delivery::CommitDeliveryRequest;

/// Operations of the picking backend used by the screens.
///
/// `sectors` arguments are already formatted filters (`'0001','0004'`),
/// see [`contracts::enums::format_sectors`].
#[async_trait]
pub trait PickingGateway: Send + Sync {
    async fn lookup_order(&self, order_number: &str) -> Result<Order, ApiError>;

    async fn list_for_separation(
        &self,
        order_number: &str,
        sectors: &str,
    ) -> Result<Vec<SeparationItem>, ApiError>;

    async fn list_for_delivery(
        &self,
        order_number: &str,
        sectors: &str,
    ) -> Result<Vec<DeliveryItem>, ApiError>;

    /// Returns the user name bound to the password
    async fn validate_password(&self, password: &str) -> Result<String, ApiError>;

    async fn commit_separation(&self, request: &CommitSeparationRequest) -> Result<(), ApiError>;

    async fn commit_delivery(&self, request: &CommitDeliveryRequest) -> Result<(), ApiError>;

    async fn fetch_history(&self, order_number: &str) -> Result<HistoryRecord, ApiError>;

    /// JPEG bytes, `None` when the product has no image on the server
    async fn fetch_product_image(&self, product_code: &str) -> Result<Option<Vec<u8>>, ApiError>;

    async fn upload_product_image(&self, product_code: &str, jpeg: &[u8]) -> Result<(), ApiError>;
}
