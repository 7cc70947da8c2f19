use std::sync::Arc;
use validator::Validate;

use crate::core::error::Result;
use crate::core::http::{segment, ApiClient};
use crate::features::assistants::dtos::AssistantDto;
use crate::features::assistants::models::Assistant;

const RESOURCE: &str = "assistant";

pub struct AssistantService {
    client: Arc<ApiClient>,
}

impl AssistantService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Assistant>> {
        let url = self.client.resource_url(RESOURCE, "list").await?;
        self.client.get(&url).await
    }

    pub async fn get(&self, assistant_id: &str) -> Result<Assistant> {
        let url = self.client.resource_url(RESOURCE, &segment(assistant_id)).await?;
        self.client.get(&url).await
    }

    pub async fn create(&self, dto: AssistantDto) -> Result<Assistant> {
        let dto = dto.normalized();
        dto.validate()?;

        let url = self.client.resource_url(RESOURCE, "").await?;
        let assistant: Assistant = self.client.post(&url, &dto).await?;

        tracing::info!("Created assistant {} ({})", assistant.name, assistant.id);
        Ok(assistant)
    }

    pub async fn update(&self, assistant_id: &str, dto: AssistantDto) -> Result<Assistant> {
        let dto = dto.normalized();
        dto.validate()?;

        let url = self.client.resource_url(RESOURCE, &segment(assistant_id)).await?;
        self.client.put(&url, &dto).await
    }

    pub async fn delete(&self, assistant_id: &str) -> Result<()> {
        let url = self.client.resource_url(RESOURCE, &segment(assistant_id)).await?;
        self.client.delete(&url).await?;

        tracing::info!("Deleted assistant {}", assistant_id);
        Ok(())
    }
}
