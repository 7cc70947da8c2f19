pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;

pub use services::AssistantService;
