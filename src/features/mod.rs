pub mod alerts;
pub mod api_keys;
pub mod assistants;
pub mod auth;
pub mod dashboard;
pub mod documents;
pub mod threads;
pub mod users;
pub mod vector_stores;
