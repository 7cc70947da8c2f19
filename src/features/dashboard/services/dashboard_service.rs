use std::sync::Arc;

use crate::core::error::Result;
use crate::features::alerts::models::most_recent;
use crate::features::alerts::AlertService;
use crate::features::assistants::AssistantService;
use crate::features::dashboard::dtos::DashboardSummaryDto;
use crate::features::documents::DocumentService;
use crate::features::threads::services::ThreadService;
use crate::features::vector_stores::VectorStoreService;
use crate::shared::constants::DASHBOARD_RECENT_ALERTS;

/// Service for the dashboard summary
pub struct DashboardService {
    documents: Arc<DocumentService>,
    vector_stores: Arc<VectorStoreService>,
    assistants: Arc<AssistantService>,
    threads: Arc<ThreadService>,
    alerts: Arc<AlertService>,
}

impl DashboardService {
    pub fn new(
        documents: Arc<DocumentService>,
        vector_stores: Arc<VectorStoreService>,
        assistants: Arc<AssistantService>,
        threads: Arc<ThreadService>,
        alerts: Arc<AlertService>,
    ) -> Self {
        Self {
            documents,
            vector_stores,
            assistants,
            threads,
            alerts,
        }
    }

    /// Fetch all sections concurrently; a failing section counts as empty
    pub async fn summary(&self) -> DashboardSummaryDto {
        let (documents, vector_stores, assistants, threads, alerts) = futures::join!(
            self.documents.list(None),
            self.vector_stores.list(),
            self.assistants.list(),
            self.threads.list(),
            self.alerts.list(None),
        );

        let mut unavailable = Vec::new();
        let documents = or_empty("documents", documents, &mut unavailable);
        let vector_stores = or_empty("vector stores", vector_stores, &mut unavailable);
        let assistants = or_empty("assistants", assistants, &mut unavailable);
        let threads = or_empty("threads", threads, &mut unavailable);
        let alerts = or_empty("alerts", alerts, &mut unavailable);

        DashboardSummaryDto {
            documents: documents.len(),
            vector_stores: vector_stores.len(),
            assistants: assistants.len(),
            threads: threads.len(),
            alerts: alerts.len(),
            recent_alerts: most_recent(alerts, DASHBOARD_RECENT_ALERTS),
            unavailable,
        }
    }
}

fn or_empty<T>(
    section: &'static str,
    result: Result<Vec<T>>,
    unavailable: &mut Vec<&'static str>,
) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Failed to load {} for dashboard: {}", section, e);
            unavailable.push(section);
            Vec::new()
        }
    }
}
