//! Login, registration and the client-side session.

pub mod dtos;
pub mod handlers;
pub mod services;
pub mod session;
