use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Conversation thread bound to a vector store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,

    #[serde(default, alias = "vector_store")]
    pub vector_store_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_store_name: Option<String>,

    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
