use std::sync::Arc;
use validator::Validate;

use crate::core::error::Result;
use crate::core::http::{segment, ApiClient};
use crate::features::threads::dtos::CreateRunDto;
use crate::features::threads::models::Run;

const RESOURCE: &str = "run";

pub struct RunService {
    client: Arc<ApiClient>,
}

impl RunService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Ask the backend to run an assistant against a thread
    pub async fn create(&self, thread_id: &str, assistant_id: &str) -> Result<Run> {
        let dto = CreateRunDto {
            thread_id: thread_id.to_string(),
            assistant_id: assistant_id.to_string(),
        };
        dto.validate()?;

        let url = self.client.resource_url(RESOURCE, "").await?;
        let run: Run = self.client.post(&url, &dto).await?;

        tracing::info!(
            "Started run {} (assistant {}, thread {}): {}",
            run.id,
            assistant_id,
            thread_id,
            run.status
        );
        Ok(run)
    }

    pub async fn get(&self, run_id: &str) -> Result<Run> {
        let url = self.client.resource_url(RESOURCE, &segment(run_id)).await?;
        self.client.get(&url).await
    }
}
