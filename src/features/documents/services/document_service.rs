use reqwest::multipart::{Form, Part};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::http::{segment, ApiClient};
use crate::features::documents::dtos::{IngestResponseDto, IngestS3Dto, IngestSource};
use crate::features::documents::models::{Document, DocumentStatus};
use crate::shared::polling::{PollError, PollStep, Poller, TeardownSignal};

const RESOURCE: &str = "document";

#[derive(Serialize)]
struct VectorStoreFilter<'a> {
    vector_store_id: &'a str,
}

pub struct DocumentService {
    client: Arc<ApiClient>,
}

impl DocumentService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Documents visible to the session, optionally limited to one vector store
    pub async fn list(&self, vector_store_id: Option<&str>) -> Result<Vec<Document>> {
        let url = self.client.resource_url(RESOURCE, "list").await?;
        match vector_store_id {
            Some(id) => {
                self.client
                    .get_with_query(&url, &VectorStoreFilter { vector_store_id: id })
                    .await
            }
            None => self.client.get(&url).await,
        }
    }

    pub async fn get(&self, document_id: &str) -> Result<Document> {
        let url = self.client.resource_url(RESOURCE, &segment(document_id)).await?;
        self.client.get(&url).await
    }

    pub async fn delete(&self, document_id: &str) -> Result<()> {
        let url = self.client.resource_url(RESOURCE, &segment(document_id)).await?;
        self.client.delete(&url).await?;

        tracing::info!("Deleted document {}", document_id);
        Ok(())
    }

    pub async fn status(&self, document_id: &str) -> Result<DocumentStatus> {
        let suffix = format!("{}/status", segment(document_id));
        let url = self.client.resource_url(RESOURCE, &suffix).await?;
        self.client.get(&url).await
    }

    /// Hand a file or an S3 object to the backend for ingestion
    pub async fn ingest(
        &self,
        vector_store_id: &str,
        source: IngestSource,
    ) -> Result<IngestResponseDto> {
        if vector_store_id.trim().is_empty() {
            return Err(AppError::Validation("Vector store is required".to_string()));
        }
        let url = self.client.resource_url(RESOURCE, "ingest").await?;

        match source {
            IngestSource::File(path) => {
                let form = file_form(vector_store_id, &path).await?;
                tracing::info!(
                    "Uploading {} into vector store {}",
                    path.display(),
                    vector_store_id
                );
                self.client.post_multipart(&url, form).await
            }
            IngestSource::S3Url(s3_file_url) => {
                let dto = IngestS3Dto {
                    vector_store_id: vector_store_id.to_string(),
                    s3_file_url,
                };
                dto.validate()?;

                tracing::info!(
                    "Ingesting {} into vector store {}",
                    dto.s3_file_url,
                    vector_store_id
                );
                self.client.post(&url, &dto).await
            }
        }
    }

    /// Poll ingestion status until it is completed or failed.
    ///
    /// Returns `Ok(None)` when `teardown` fires first.
    pub async fn watch_status(
        &self,
        document_id: &str,
        poller: Poller,
        teardown: TeardownSignal,
    ) -> Result<Option<DocumentStatus>> {
        let outcome = poller
            .run(teardown, move || async move {
                let status = self.status(document_id).await?;
                tracing::info!("Document {} is {}", document_id, status.status);

                let step = if status.status.is_terminal() {
                    PollStep::Done(status)
                } else {
                    PollStep::Pending
                };
                Ok::<_, AppError>(step)
            })
            .await;

        match outcome {
            Ok(status) => Ok(Some(status)),
            Err(PollError::Cancelled) => Ok(None),
            Err(PollError::Gone(_)) => Err(AppError::NotFound("Document not found".to_string())),
            Err(PollError::Rejected(e)) => Err(e),
        }
    }
}

async fn file_form(vector_store_id: &str, path: &Path) -> Result<Form> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::Validation(format!("Not a file: {}", path.display())))?;

    Ok(Form::new()
        .text("vector_store_id", vector_store_id.to_string())
        .part("file", Part::bytes(bytes).file_name(file_name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::polling::Teardown;
    use crate::shared::test_helpers::api_client_for;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header_regex, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn status_body(status: &str) -> serde_json::Value {
        serde_json::json!({ "status": status })
    }

    #[tokio::test]
    async fn test_list_filters_by_vector_store() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/document/tok/list/"))
            .and(query_param("vector_store_id", "vs1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "d1", "title": "a.pdf", "vector_store": "vs1", "uploaded_at": "2024-03-02T08:30:00Z"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let service = DocumentService::new(api_client_for(&server, "tok"));
        let docs = service.list(Some("vs1")).await.unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].vector_store_id.as_deref(), Some("vs1"));
    }

    #[tokio::test]
    async fn test_ingest_s3_url_posts_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/document/tok/ingest/"))
            .and(body_json(serde_json::json!({
                "vector_store_id": "vs1",
                "s3_file_url": "https://bucket.s3.amazonaws.com/a.pdf"
            })))
            .respond_with(
                ResponseTemplate::new(202).set_body_json(serde_json::json!({"id": "d7"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let service = DocumentService::new(api_client_for(&server, "tok"));
        let ack = service
            .ingest(
                "vs1",
                IngestSource::S3Url("https://bucket.s3.amazonaws.com/a.pdf".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(ack.id.as_deref(), Some("d7"));
    }

    #[tokio::test]
    async fn test_ingest_file_uploads_multipart() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/document/tok/ingest/"))
            .and(header_regex("content-type", "^multipart/form-data"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let file = std::env::temp_dir().join(format!("ragdesk-{}.txt", uuid::Uuid::new_v4()));
        tokio::fs::write(&file, b"quarterly numbers").await.unwrap();

        let service = DocumentService::new(api_client_for(&server, "tok"));
        let ack = service
            .ingest("vs1", IngestSource::File(file.clone()))
            .await
            .unwrap();
        assert!(ack.id.is_none());

        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains("name=\"vector_store_id\""));
        assert!(body.contains("quarterly numbers"));

        tokio::fs::remove_file(&file).await.unwrap();
    }

    #[tokio::test]
    async fn test_ingest_missing_file_is_io_error() {
        let server = MockServer::start().await;
        let service = DocumentService::new(api_client_for(&server, "tok"));

        let err = service
            .ingest("vs1", IngestSource::File("/nonexistent/ragdesk.pdf".into()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Io(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_watch_status_checks_immediately_until_terminal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/document/tok/d1/status/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_body("processing")))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/document/tok/d1/status/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_body("completed")))
            .mount(&server)
            .await;

        let service = DocumentService::new(api_client_for(&server, "tok"));
        let teardown = Teardown::new();
        let status = service
            .watch_status(
                "d1",
                Poller::immediate(Duration::from_millis(10)),
                teardown.signal(),
            )
            .await
            .unwrap()
            .unwrap();

        assert!(status.status.is_terminal());
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_watch_status_tolerates_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/document/tok/d1/status/"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/document/tok/d1/status/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_body("failed")))
            .mount(&server)
            .await;

        let service = DocumentService::new(api_client_for(&server, "tok"));
        let teardown = Teardown::new();
        let status = service
            .watch_status(
                "d1",
                Poller::immediate(Duration::from_millis(10)),
                teardown.signal(),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(status.status, crate::features::documents::models::IngestStatus::Failed);
    }

    #[tokio::test]
    async fn test_watch_status_stops_on_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/document/tok/gone/status/"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let service = DocumentService::new(api_client_for(&server, "tok"));
        let teardown = Teardown::new();
        let err = service
            .watch_status(
                "gone",
                Poller::immediate(Duration::from_millis(10)),
                teardown.signal(),
            )
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: Document not found");
    }

    #[tokio::test]
    async fn test_watch_status_stops_when_session_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/document/tok/d1/status/"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"detail": "Invalid token."})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let service = DocumentService::new(api_client_for(&server, "tok"));
        let teardown = Teardown::new();
        let err = service
            .watch_status(
                "d1",
                Poller::immediate(Duration::from_millis(10)),
                teardown.signal(),
            )
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_watch_status_after_teardown_returns_none() {
        let server = MockServer::start().await;
        let service = DocumentService::new(api_client_for(&server, "tok"));
        let teardown = Teardown::new();
        teardown.fire();

        let outcome = service
            .watch_status(
                "d1",
                Poller::immediate(Duration::from_millis(10)),
                teardown.signal(),
            )
            .await
            .unwrap();

        assert!(outcome.is_none());
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
