pub mod aggregate;

pub use aggregate::{DeliveryItem, DeliveryListRequest, DeliveryListResponse};
