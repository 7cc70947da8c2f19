//! Documents: listing, ingestion into a vector store and ingestion status tracking.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;

pub use services::DocumentService;
