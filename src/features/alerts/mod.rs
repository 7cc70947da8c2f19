//! Keyword alerts raised by the backend while indexing documents.

pub mod handlers;
pub mod models;
pub mod services;

pub use services::AlertService;
