use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error body shapes the backend is known to send
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Longest raw body kept in an error message when the body is not JSON
const MAX_RAW_DETAIL_LEN: usize = 200;

impl AppError {
    /// Map a non-success HTTP response onto the error taxonomy
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let detail = extract_detail(body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

        match status {
            StatusCode::BAD_REQUEST => AppError::BadRequest(detail),
            StatusCode::UNPROCESSABLE_ENTITY => AppError::Validation(detail),
            StatusCode::UNAUTHORIZED => AppError::Unauthorized(detail),
            StatusCode::FORBIDDEN => AppError::Forbidden(detail),
            StatusCode::NOT_FOUND => AppError::NotFound(detail),
            StatusCode::CONFLICT => AppError::Conflict(detail),
            s if s.is_server_error() => {
                AppError::ExternalServiceError(format!("HTTP {} - {}", s.as_u16(), detail))
            }
            s => AppError::BadRequest(format!("HTTP {} - {}", s.as_u16(), detail)),
        }
    }

    /// Whether the error means the addressed resource no longer exists
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }

    /// The message without the variant prefix, for showing to a user
    pub fn detail(&self) -> String {
        match self {
            AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::Conflict(msg)
            | AppError::ExternalServiceError(msg)
            | AppError::Network(msg)
            | AppError::Decode(msg)
            | AppError::Internal(msg) => msg.clone(),
            AppError::Io(e) => e.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Decode(e.to_string())
        } else {
            AppError::Network(e.to_string())
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();

        AppError::Validation(messages.join("; "))
    }
}

/// Pull a human readable message out of an error response body
pub fn extract_detail(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(trimmed) {
        let detail = match parsed.detail {
            Some(serde_json::Value::String(s)) => Some(s),
            Some(serde_json::Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };
        if let Some(msg) = detail.or(parsed.message).or(parsed.error) {
            return Some(msg);
        }
    }

    if trimmed.starts_with('{') || trimmed.starts_with('<') {
        return None;
    }

    Some(trimmed.chars().take(MAX_RAW_DETAIL_LEN).collect())
}

pub type Result<T> = std::result::Result<T, AppError>;
