use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// Where the ingested content comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestSource {
    /// Local file uploaded as multipart form data
    File(PathBuf),
    /// Object already stored in S3, referenced by URL
    S3Url(String),
}

/// JSON body for S3 ingestion
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IngestS3Dto {
    #[validate(length(min = 1, message = "Vector store is required"))]
    pub vector_store_id: String,

    #[validate(url(message = "S3 file URL must be a valid URL"))]
    pub s3_file_url: String,
}

/// What the ingest endpoint acknowledges with
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestResponseDto {
    #[serde(default, alias = "document_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
