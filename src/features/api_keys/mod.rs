//! OpenAI API keys registered for the tenant.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;

pub use services::ApiKeyService;
