use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorStore {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_count: Option<u64>,
}

/// A document made searchable through a vector store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAccess {
    #[serde(alias = "document")]
    pub document_id: String,
    #[serde(default, alias = "title", skip_serializing_if = "Option::is_none")]
    pub document_title: Option<String>,
    #[serde(default, alias = "vector_store", skip_serializing_if = "Option::is_none")]
    pub vector_store_id: Option<String>,
}
