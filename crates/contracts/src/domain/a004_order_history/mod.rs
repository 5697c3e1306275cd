pub mod aggregate;

pub use aggregate::{
    DeliveryRegistration, HistoryRecord, HistoryRequest, HistoryResponse, Milestone,
    MilestoneKind,
};
