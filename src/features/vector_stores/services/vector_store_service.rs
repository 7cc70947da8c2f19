use serde::Serialize;
use std::sync::Arc;
use validator::Validate;

use crate::core::error::Result;
use crate::core::http::{segment, ApiClient};
use crate::features::vector_stores::dtos::{DocumentAccessDto, VectorStoreDto};
use crate::features::vector_stores::models::{DocumentAccess, VectorStore};

const RESOURCE: &str = "vector-store";
const ACCESS_RESOURCE: &str = "document-access";
const ACCESS_REMOVE_RESOURCE: &str = "document-access/remove";

#[derive(Serialize)]
struct VectorStoreFilter<'a> {
    vector_store_id: &'a str,
}

pub struct VectorStoreService {
    client: Arc<ApiClient>,
}

impl VectorStoreService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<VectorStore>> {
        let url = self.client.resource_url(RESOURCE, "list").await?;
        self.client.get(&url).await
    }

    pub async fn get(&self, vector_store_id: &str) -> Result<VectorStore> {
        let url = self.client.resource_url(RESOURCE, &segment(vector_store_id)).await?;
        self.client.get(&url).await
    }

    pub async fn create(&self, name: &str) -> Result<VectorStore> {
        let dto = VectorStoreDto {
            name: name.trim().to_string(),
        };
        dto.validate()?;

        let url = self.client.resource_url(RESOURCE, "").await?;
        let store: VectorStore = self.client.post(&url, &dto).await?;

        tracing::info!("Created vector store {} ({})", store.name, store.id);
        Ok(store)
    }

    pub async fn update(&self, vector_store_id: &str, name: &str) -> Result<VectorStore> {
        let dto = VectorStoreDto {
            name: name.trim().to_string(),
        };
        dto.validate()?;

        let url = self.client.resource_url(RESOURCE, &segment(vector_store_id)).await?;
        self.client.put(&url, &dto).await
    }

    pub async fn delete(&self, vector_store_id: &str) -> Result<()> {
        let url = self.client.resource_url(RESOURCE, &segment(vector_store_id)).await?;
        self.client.delete(&url).await?;

        tracing::info!("Deleted vector store {}", vector_store_id);
        Ok(())
    }

    pub async fn add_documents(&self, vector_store_id: &str, document_ids: &[String]) -> Result<()> {
        let dto = access_dto(vector_store_id, document_ids)?;
        let url = self.client.resource_url(ACCESS_RESOURCE, "").await?;
        self.client
            .send_unit(reqwest::Method::POST, &url, Some(&dto))
            .await?;

        tracing::info!(
            "Granted {} document(s) to vector store {}",
            document_ids.len(),
            vector_store_id
        );
        Ok(())
    }

    pub async fn remove_documents(
        &self,
        vector_store_id: &str,
        document_ids: &[String],
    ) -> Result<()> {
        let dto = access_dto(vector_store_id, document_ids)?;
        let url = self.client.resource_url(ACCESS_REMOVE_RESOURCE, "").await?;
        self.client
            .send_unit(reqwest::Method::PUT, &url, Some(&dto))
            .await?;

        tracing::info!(
            "Revoked {} document(s) from vector store {}",
            document_ids.len(),
            vector_store_id
        );
        Ok(())
    }

    pub async fn list_document_access(&self, vector_store_id: &str) -> Result<Vec<DocumentAccess>> {
        let url = self.client.resource_url(ACCESS_RESOURCE, "list").await?;
        self.client
            .get_with_query(&url, &VectorStoreFilter { vector_store_id })
            .await
    }
}

fn access_dto(vector_store_id: &str, document_ids: &[String]) -> Result<DocumentAccessDto> {
    let dto = DocumentAccessDto {
        vector_store_id: vector_store_id.to_string(),
        document_ids: document_ids.to_vec(),
    };
    dto.validate()?;
    Ok(dto)
}
