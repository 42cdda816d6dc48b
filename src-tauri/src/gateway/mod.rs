//! API Gateway Client
//!
//! Every REST call to the ERP backend and the identity provider goes through
//! `ApiGateway`. Endpoint groups live in submodules as `impl ApiGateway` blocks.
//! No retries, no caching.

mod admin;
mod agents;
mod finance;
mod hr;
mod identity;
mod projects;

#[cfg(test)]
mod tests;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use erp_core::DomainError;

use crate::config::GatewayConfig;

/// Gateway failures, before they are folded into `DomainError`
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// Request never produced a response
    Transport(String),
    /// Non-2xx response; `detail` is the backend's error text
    Status { status: u16, detail: String },
    /// Response body did not match the expected shape
    Decode(String),
    /// A required setting is missing
    NotConfigured(&'static str),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Transport(msg) => write!(f, "request failed: {}", msg),
            GatewayError::Status { status, detail } => write!(f, "HTTP {}: {}", status, detail),
            GatewayError::Decode(msg) => write!(f, "unexpected response: {}", msg),
            GatewayError::NotConfigured(what) => write!(f, "{} is not configured", what),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        GatewayError::Transport(e.to_string())
    }
}

impl From<GatewayError> for DomainError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::Transport(msg) => DomainError::Network(msg),
            GatewayError::Status { status: 404, detail } => DomainError::NotFound(detail),
            GatewayError::Status { status: 400 | 422, detail } => DomainError::InvalidInput(detail),
            GatewayError::Status { status: 409, detail } => DomainError::Conflict(detail),
            other @ GatewayError::Status { .. } => DomainError::Network(other.to_string()),
            GatewayError::Decode(msg) => DomainError::Internal(msg),
            GatewayError::NotConfigured(what) => DomainError::Internal(format!("{} is not configured", what)),
        }
    }
}

/// Pull the human-readable error out of an error body.
/// FastAPI sends `{"detail": "..."}` or, for validation, `{"detail": [{"msg": ...}]}`.
pub(crate) fn extract_detail(status: StatusCode, body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let detail = parsed.as_ref().and_then(|v| v.get("detail"));
    match detail {
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
            .collect::<Vec<_>>()
            .join("; "),
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => status.canonical_reason().unwrap_or("request failed").to_string(),
    }
}

pub struct ApiGateway {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl ApiGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.config.access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> GatewayResult<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                detail: extract_detail(status, &body),
            });
        }
        serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        log::debug!("GET {}", path);
        let response = self.request(Method::GET, path).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> GatewayResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("{} {}", method, path);
        let response = self.request(method, path).json(body).send().await?;
        Self::decode(response).await
    }

    /// DELETE whose reply body is ignored
    pub(crate) async fn delete(&self, path: &str) -> GatewayResult<()> {
        log::debug!("DELETE {}", path);
        let response = self.request(Method::DELETE, path).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(GatewayError::Status {
            status: status.as_u16(),
            detail: extract_detail(status, &body),
        })
    }
}
