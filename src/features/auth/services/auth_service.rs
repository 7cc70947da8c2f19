use serde_json::Value;
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::http::ApiClient;
use crate::features::auth::dtos::{LoginRequestDto, LoginResponseDto, RegisterRequestDto};
use crate::features::users::models::User;

/// Service for authentication operations (register, login, logout, profile)
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Register a new user together with their tenant
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<Value> {
        dto.validate()?;

        let url = self.client.public_url("register");
        let response = self.client.post(&url, &dto).await?;

        tracing::info!("Registered user {} for tenant {}", dto.username, dto.tenant_name);
        Ok(response)
    }

    /// Login with username and password and establish the session
    pub async fn login(&self, dto: LoginRequestDto) -> Result<Option<User>> {
        dto.validate()?;

        let url = self.client.public_url("login");
        let response: LoginResponseDto = self.client.post(&url, &dto).await?;

        let token = response
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Unauthorized("Login failed".to_string()))?;

        self.client
            .session()
            .establish(token, response.user.clone())
            .await;

        tracing::info!("Logged in as {}", dto.username);
        Ok(response.user)
    }

    /// End the session on the backend.
    ///
    /// The local session is cleared whatever the backend answers.
    pub async fn logout(&self) -> Result<()> {
        let session = self.client.session();
        let Some(token) = session.token().await else {
            session.clear().await;
            return Err(AppError::Unauthorized("No token found".to_string()));
        };

        let url = self
            .client
            .public_url(&format!("logout/{}", urlencoding::encode(&token)));
        let outcome = self
            .client
            .send_unit(reqwest::Method::POST, &url, Some(&serde_json::json!({})))
            .await;
        session.clear().await;

        match outcome {
            Ok(()) => {
                tracing::info!("Logged out");
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Logout request failed, session cleared locally: {}", e);
                Err(e)
            }
        }
    }

    /// Fetch the logged-in user's profile and remember it on the session
    pub async fn load_profile(&self) -> Result<User> {
        let url = self.client.resource_url("user", "profile").await?;
        let user: User = self.client.get(&url).await?;

        self.client.session().set_current_user(user.clone()).await;
        Ok(user)
    }
}
