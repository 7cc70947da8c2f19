//! Conversation threads, their messages and assistant runs.

pub mod chat;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
