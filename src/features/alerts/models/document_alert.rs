use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAlert {
    pub id: String,
    #[serde(alias = "document_id")]
    pub document: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title: Option<String>,
    pub keyword: String,
    #[serde(alias = "text_snippet")]
    pub snippet: String,
    pub created_at: DateTime<Utc>,
}

/// The `limit` newest alerts, newest first
pub fn most_recent(mut alerts: Vec<DocumentAlert>, limit: usize) -> Vec<DocumentAlert> {
    alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    alerts.truncate(limit);
    alerts
}
