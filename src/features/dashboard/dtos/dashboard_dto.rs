use serde::Serialize;

use crate::features::alerts::models::DocumentAlert;

/// Counts of every resource the tenant owns, plus the newest alerts
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardSummaryDto {
    pub documents: usize,
    pub vector_stores: usize,
    pub assistants: usize,
    pub threads: usize,
    pub alerts: usize,
    pub recent_alerts: Vec<DocumentAlert>,
    /// Sections whose fetch failed and were counted as empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unavailable: Vec<&'static str>,
}
