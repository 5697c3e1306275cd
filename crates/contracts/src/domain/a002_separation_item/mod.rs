pub mod aggregate;

pub use aggregate::{ItemLocation, SeparationItem, SeparationListRequest, SeparationListResponse};
