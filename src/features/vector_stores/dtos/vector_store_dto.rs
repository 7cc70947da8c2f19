use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VectorStoreDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
}

/// Grant or revoke documents on a vector store
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DocumentAccessDto {
    #[validate(length(min = 1, message = "Vector store is required"))]
    pub vector_store_id: String,

    #[validate(length(min = 1, message = "At least one document is required"))]
    pub document_ids: Vec<String>,
}
