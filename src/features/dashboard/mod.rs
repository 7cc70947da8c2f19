//! Landing summary: resource counts and the latest alerts.

pub mod dtos;
pub mod handlers;
pub mod services;

pub use services::DashboardService;
