use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::http::{segment, ApiClient};
use crate::features::users::dtos::UserOperationDto;
use crate::features::users::models::User;

const RESOURCE: &str = "user";

/// Service for tenant user management
pub struct UserService {
    client: Arc<ApiClient>,
}

impl UserService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let url = self.client.resource_url(RESOURCE, "list").await?;
        self.client.get(&url).await
    }

    pub async fn get(&self, user_id: &str) -> Result<User> {
        let url = self.client.resource_url(RESOURCE, &segment(user_id)).await?;
        self.client.get(&url).await
    }

    pub async fn create(&self, dto: UserOperationDto) -> Result<User> {
        let missing = dto.missing_for_create();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }
        dto.validate()?;

        let url = self.client.resource_url(RESOURCE, "create").await?;
        let user: User = self.client.post(&url, &dto).await?;

        tracing::info!("Created user {} ({})", user.username, user.id);
        Ok(user)
    }

    pub async fn update(&self, user_id: &str, dto: UserOperationDto) -> Result<User> {
        ensure_changes(&dto)?;
        dto.validate()?;

        let url = self.client.resource_url(RESOURCE, &segment(user_id)).await?;
        let user: User = self.client.put(&url, &dto).await?;

        tracing::info!("Updated user {}", user_id);
        Ok(user)
    }

    pub async fn delete(&self, user_id: &str) -> Result<()> {
        let url = self.client.resource_url(RESOURCE, &segment(user_id)).await?;
        self.client.delete(&url).await?;

        tracing::info!("Deleted user {}", user_id);
        Ok(())
    }

    /// Update the logged-in user's own profile
    pub async fn update_profile(&self, dto: UserOperationDto) -> Result<User> {
        ensure_changes(&dto)?;
        dto.validate()?;

        let current = self
            .client
            .session()
            .current_user()
            .await
            .ok_or_else(|| AppError::Unauthorized("No user logged in".to_string()))?;

        let suffix = format!("{}/profile", segment(&current.id));
        let url = self.client.resource_url(RESOURCE, &suffix).await?;
        let user: User = self.client.put(&url, &dto).await?;

        self.client.session().set_current_user(user.clone()).await;
        tracing::info!("Updated profile of {}", user.username);
        Ok(user)
    }
}

fn ensure_changes(dto: &UserOperationDto) -> Result<()> {
    if dto.is_empty() {
        return Err(AppError::Validation("Nothing to update".to_string()));
    }
    Ok(())
}
