use std::sync::Arc;
use validator::Validate;

use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::threads::dtos::CreateMessageDto;
use crate::features::threads::models::Message;

pub struct MessageService {
    client: Arc<ApiClient>,
}

impl MessageService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Persist a user message; returns the server copy with its real id and timestamp
    pub async fn create(&self, thread_id: &str, content: &str) -> Result<Message> {
        let dto = CreateMessageDto {
            thread_id: thread_id.to_string(),
            content: content.to_string(),
        };
        dto.validate()?;

        let url = self.client.resource_url("message", "").await?;
        let message: Message = self.client.post(&url, &dto).await?;

        tracing::debug!("Persisted message {} in thread {}", message.id, thread_id);
        Ok(message)
    }
}
