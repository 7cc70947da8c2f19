//! Vector stores and the documents granted to them.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;

pub use services::VectorStoreService;
