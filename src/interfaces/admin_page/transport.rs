//! Request/response contract behind `POST /all`

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};
use ureq::Agent;

use super::RenderError;
use crate::services::LinkService;

/// Raw status and body, before any interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends a POST and hands back whatever came back
#[async_trait]
pub trait ListTransport: Send + Sync {
    async fn post(&self, path: &str, body: &str) -> Result<RawResponse, RenderError>;

    /// Transport name for logs
    fn name(&self) -> &'static str;
}

/// `/all` answered directly from the link service
pub struct ServiceTransport {
    service: Arc<LinkService>,
}

impl ServiceTransport {
    pub fn new(service: Arc<LinkService>) -> Self {
        Self { service }
    }
}

/// The `/all` response, shared with the HTTP handler
pub async fn all_links_response(service: &LinkService) -> RawResponse {
    match service.list().await {
        Ok(links) => match serde_json::to_string(&links) {
            Ok(body) => RawResponse::new(200, body),
            Err(e) => RawResponse::new(500, e.to_string()),
        },
        Err(e) => {
            warn!("Failed to list links: {}", e);
            RawResponse::new(e.http_status().as_u16(), e.message().to_string())
        }
    }
}

#[async_trait]
impl ListTransport for ServiceTransport {
    async fn post(&self, path: &str, _body: &str) -> Result<RawResponse, RenderError> {
        match path {
            "/all" => Ok(all_links_response(&self.service).await),
            other => Ok(RawResponse::new(404, format!("no route for {}", other))),
        }
    }

    fn name(&self) -> &'static str {
        "service"
    }
}

const HTTP_TIMEOUT_SECS: u64 = 30;

static HTTP_AGENT: OnceLock<Agent> = OnceLock::new();

fn get_agent() -> &'static Agent {
    HTTP_AGENT.get_or_init(|| {
        Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))
            .http_status_as_error(false)
            .build()
            .into()
    })
}

/// Blocking HTTP against a running server
pub struct UreqTransport {
    base_url: String,
}

impl UreqTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 同步发送，在 spawn_blocking 中调用
    fn post_sync(url: String, body: String) -> Result<RawResponse, RenderError> {
        let mut resp = get_agent()
            .post(&url)
            .send(body)
            .map_err(|e| RenderError::Transport(format!("POST {} failed: {}", url, e)))?;

        let status = resp.status().as_u16();
        let body = resp
            .body_mut()
            .read_to_string()
            .map_err(|e| RenderError::Transport(format!("reading {} failed: {}", url, e)))?;

        debug!("POST {} -> {} ({} bytes)", url, status, body.len());
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl ListTransport for UreqTransport {
    async fn post(&self, path: &str, body: &str) -> Result<RawResponse, RenderError> {
        let url = format!("{}{}", self.base_url, path);
        let body = body.to_string();

        tokio::task::spawn_blocking(move || Self::post_sync(url, body))
            .await
            .map_err(|e| RenderError::Transport(format!("request task failed: {}", e)))?
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Fixed response, for tests and benchmarks
pub struct StaticTransport {
    response: RawResponse,
}

impl StaticTransport {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            response: RawResponse::new(status, body),
        }
    }
}

#[async_trait]
impl ListTransport for StaticTransport {
    async fn post(&self, _path: &str, _body: &str) -> Result<RawResponse, RenderError> {
        Ok(self.response.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ureq_transport_trims_base_url() {
        assert_eq!(UreqTransport::new("http://h:1/").base_url, "http://h:1");
    }

    #[tokio::test]
    async fn test_ureq_transport_reports_connection_failure() {
        let transport = UreqTransport::new("http://linkboard.invalid");
        let result = transport.post("/all", "").await;
        assert!(matches!(result, Err(RenderError::Transport(_))));
    }

    #[tokio::test]
    async fn test_static_transport() {
        let transport = StaticTransport::new(500, "server error");
        let resp = transport.post("/all", "").await.unwrap();
        assert_eq!(resp, RawResponse::new(500, "server error"));
    }
}
