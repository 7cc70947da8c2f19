use serde::Serialize;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::http::{segment, ApiClient};
use crate::features::alerts::models::DocumentAlert;

const RESOURCE: &str = "document-alert";

#[derive(Serialize)]
struct DocumentFilter<'a> {
    document_id: &'a str,
}

pub struct AlertService {
    client: Arc<ApiClient>,
}

impl AlertService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, document_id: Option<&str>) -> Result<Vec<DocumentAlert>> {
        let url = self.client.resource_url(RESOURCE, "list").await?;
        match document_id {
            Some(document_id) => {
                self.client
                    .get_with_query(&url, &DocumentFilter { document_id })
                    .await
            }
            None => self.client.get(&url).await,
        }
    }

    pub async fn get(&self, alert_id: &str) -> Result<DocumentAlert> {
        let url = self.client.resource_url(RESOURCE, &segment(alert_id)).await?;
        self.client.get(&url).await
    }

    pub async fn delete(&self, alert_id: &str) -> Result<()> {
        let url = self.client.resource_url(RESOURCE, &segment(alert_id)).await?;
        self.client.delete(&url).await?;

        tracing::info!("Dismissed alert {}", alert_id);
        Ok(())
    }
}
