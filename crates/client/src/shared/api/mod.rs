pub mod endpoints;
pub mod error;
pub mod gateway;
pub mod http_gateway;

pub use error::ApiError;
pub use gateway::PickingGateway;
pub use http_gateway::HttpPickingGateway;
