//! Shared REST client.
//!
//! The backend addresses every authenticated resource as
//! `{base}/{resource}/{token}/{suffix}/`, so URL building needs the session.
//! A `401` from any call clears the session.

use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::config::ApiConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::session::Session;

#[derive(Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Session) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// URL of an unauthenticated endpoint such as `login/`
    pub fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, with_trailing_slash(path))
    }

    /// URL of an authenticated endpoint: `{base}/{resource}/{token}/{suffix}`
    pub async fn resource_url(&self, resource: &str, suffix: &str) -> Result<String> {
        let token = self.session.require_token().await?;
        Ok(build_resource_url(&self.base_url, resource, &token, suffix))
    }

    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.send_json(self.request(Method::GET, url)).await
    }

    pub async fn get_with_query<T, Q>(&self, url: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send_json(self.request(Method::GET, url).query(query))
            .await
    }

    pub async fn post<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.request(Method::POST, url).json(body))
            .await
    }

    pub async fn post_multipart<T: DeserializeOwned>(&self, url: &str, form: Form) -> Result<T> {
        self.send_json(self.request(Method::POST, url).multipart(form))
            .await
    }

    pub async fn put<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.request(Method::PUT, url).json(body))
            .await
    }

    /// Send a request whose response body is irrelevant
    pub async fn send_unit<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<()> {
        let mut request = self.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await?;
        Ok(())
    }

    pub async fn delete(&self, url: &str) -> Result<()> {
        self.execute(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, redact_url(url, &self.base_url));
        self.http_client.request(method, url)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.execute(request).await?;
        let body = response.text().await?;

        // Empty bodies still deserialize into unit-like or optional targets
        let body = if body.trim().is_empty() { "null" } else { &body };

        serde_json::from_str::<T>(body).map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            AppError::Decode(e.to_string())
        })
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = AppError::from_status(status, &body);

        if error.is_unauthorized() {
            tracing::warn!("Backend rejected session token, clearing session");
            self.session.clear().await;
        } else if status.is_server_error() {
            tracing::error!("API error: HTTP {} - {}", status, body);
        } else {
            tracing::debug!("API error: HTTP {} - {}", status, body);
        }

        Err(error)
    }
}

fn build_resource_url(base_url: &str, resource: &str, token: &str, suffix: &str) -> String {
    let suffix = suffix.trim_matches('/');
    if suffix.is_empty() {
        format!("{}/{}/{}/", base_url, resource, urlencoding::encode(token))
    } else {
        format!(
            "{}/{}/{}/{}/",
            base_url,
            resource,
            urlencoding::encode(token),
            suffix
        )
    }
}

fn with_trailing_slash(path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

/// Encode an identifier for use as a single path segment
pub fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Hide the session token segment when logging URLs
fn redact_url(url: &str, base_url: &str) -> String {
    let Some(rest) = url.strip_prefix(base_url) else {
        return url.to_string();
    };
    let mut parts: Vec<&str> = rest.split('/').collect();
    // ["", resource, token, ...]
    if parts.len() > 3 {
        parts[2] = "***";
    }
    format!("{}{}", base_url, parts.join("/"))
}
