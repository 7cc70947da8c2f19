use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ingestion state of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl IngestStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, IngestStatus::Completed | IngestStatus::Failed)
    }
}

impl std::fmt::Display for IngestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestStatus::Pending => write!(f, "pending"),
            IngestStatus::Processing => write!(f, "processing"),
            IngestStatus::Completed => write!(f, "completed"),
            IngestStatus::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(default, alias = "vector_store", skip_serializing_if = "Option::is_none")]
    pub vector_store_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_store_name: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    /// Free-form on the list endpoint; see [`DocumentStatus`] for the typed check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Response of the status endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStatus {
    pub status: IngestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
