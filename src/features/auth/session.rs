use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::users::models::User;

/// Authenticated state shared by every resource service
#[derive(Default)]
struct SessionState {
    token: Option<String>,
    current_user: Option<User>,
}

/// Session context injected into the API client.
///
/// Established by login (or a pre-issued token), cleared by logout or by the
/// backend rejecting the token. Only kept in memory.
#[derive(Clone, Default)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session that starts out authenticated with a known token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState {
                token: Some(token.into()),
                current_user: None,
            })),
        }
    }

    pub async fn token(&self) -> Option<String> {
        self.state.read().await.token.clone()
    }

    /// Token for building authenticated URLs
    pub async fn require_token(&self) -> Result<String> {
        self.token()
            .await
            .ok_or_else(|| AppError::Unauthorized("Not logged in".to_string()))
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.token.is_some()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.current_user.clone()
    }

    /// Start a session after a successful login
    pub async fn establish(&self, token: String, user: Option<User>) {
        let mut state = self.state.write().await;
        if let Some(ref u) = user {
            tracing::info!("Session established for user {}", u.username);
        } else {
            tracing::info!("Session established");
        }
        state.token = Some(token);
        state.current_user = user;
    }

    pub async fn set_current_user(&self, user: User) {
        self.state.write().await.current_user = Some(user);
    }

    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        if state.token.is_some() {
            tracing::info!("Session cleared");
        }
        *state = SessionState::default();
    }
}
