use std::sync::Arc;
use validator::Validate;

use crate::core::error::Result;
use crate::core::http::{segment, ApiClient};
use crate::features::api_keys::dtos::{CreateApiKeyDto, UpdateApiKeyDto};
use crate::features::api_keys::models::ApiKey;

const RESOURCE: &str = "openai-key";

pub struct ApiKeyService {
    client: Arc<ApiClient>,
}

impl ApiKeyService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<ApiKey>> {
        let url = self.client.resource_url(RESOURCE, "list").await?;
        self.client.get(&url).await
    }

    pub async fn get(&self, key_id: &str) -> Result<ApiKey> {
        let url = self.client.resource_url(RESOURCE, &segment(key_id)).await?;
        self.client.get(&url).await
    }

    pub async fn create(&self, api_key: &str, name: Option<String>) -> Result<ApiKey> {
        let dto = CreateApiKeyDto {
            api_key: api_key.trim().to_string(),
            name: name.filter(|n| !n.trim().is_empty()),
        };
        dto.validate()?;

        let url = self.client.resource_url(RESOURCE, "").await?;
        let key: ApiKey = self.client.post(&url, &dto).await?;

        tracing::info!("Registered API key {} ({})", key.masked_key, key.id);
        Ok(key)
    }

    pub async fn update(&self, key_id: &str, name: Option<String>) -> Result<ApiKey> {
        let dto = UpdateApiKeyDto { name };
        dto.validate()?;

        let url = self.client.resource_url(RESOURCE, &segment(key_id)).await?;
        self.client.put(&url, &dto).await
    }

    pub async fn delete(&self, key_id: &str) -> Result<()> {
        let url = self.client.resource_url(RESOURCE, &segment(key_id)).await?;
        self.client.delete(&url).await?;

        tracing::info!("Deleted API key {}", key_id);
        Ok(())
    }
}
