pub mod request;
pub mod response;

pub use request::{CommitSeparationRequest, SeparationCommitItem};
pub use response::CommitSeparationResponse;
