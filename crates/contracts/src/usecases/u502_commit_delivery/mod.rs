pub mod request;
pub mod response;

pub use request::{CommitDeliveryRequest, DeliveryCommitItem};
pub use response::CommitDeliveryResponse;
