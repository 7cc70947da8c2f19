//! Tenant users and the logged-in user's own profile.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
