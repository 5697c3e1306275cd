pub mod u501_commit_separation;
pub mod u502_commit_delivery;
