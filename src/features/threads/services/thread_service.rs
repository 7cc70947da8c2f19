use std::sync::Arc;
use validator::Validate;

use crate::core::error::Result;
use crate::core::http::{segment, ApiClient};
use crate::features::threads::dtos::ThreadDto;
use crate::features::threads::models::{Message, Thread};

const RESOURCE: &str = "thread";

/// Service for conversation threads and their message lists
pub struct ThreadService {
    client: Arc<ApiClient>,
}

impl ThreadService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Thread>> {
        let url = self.client.resource_url(RESOURCE, "list").await?;
        self.client.get(&url).await
    }

    pub async fn get(&self, thread_id: &str) -> Result<Thread> {
        let url = self.client.resource_url(RESOURCE, &segment(thread_id)).await?;
        self.client.get(&url).await
    }

    pub async fn create(&self, vector_store_id: &str) -> Result<Thread> {
        let dto = ThreadDto {
            vector_store_id: vector_store_id.to_string(),
        };
        dto.validate()?;

        let url = self.client.resource_url(RESOURCE, "").await?;
        let thread: Thread = self.client.post(&url, &dto).await?;

        tracing::info!("Created thread {} on vector store {}", thread.id, vector_store_id);
        Ok(thread)
    }

    /// Point an existing thread at another vector store
    pub async fn update(&self, thread_id: &str, vector_store_id: &str) -> Result<Thread> {
        let dto = ThreadDto {
            vector_store_id: vector_store_id.to_string(),
        };
        dto.validate()?;

        let url = self.client.resource_url(RESOURCE, &segment(thread_id)).await?;
        self.client.put(&url, &dto).await
    }

    pub async fn delete(&self, thread_id: &str) -> Result<()> {
        let url = self.client.resource_url(RESOURCE, &segment(thread_id)).await?;
        self.client.delete(&url).await?;

        tracing::info!("Deleted thread {}", thread_id);
        Ok(())
    }

    /// All messages of a thread, in whatever order the backend returns them
    pub async fn list_messages(&self, thread_id: &str) -> Result<Vec<Message>> {
        let suffix = format!("{}/messages", segment(thread_id));
        let url = self.client.resource_url(RESOURCE, &suffix).await?;
        self.client.get(&url).await
    }
}
