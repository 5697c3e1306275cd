pub mod api;
pub mod config;
pub mod image_store;
