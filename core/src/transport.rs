//! Execution of `HttpRequest` values.
//!
//! # Design
//! `Transport` is the single I/O seam of the crate. `UreqTransport` drives a
//! blocking ureq agent on tokio's blocking pool; tests plug in scripted
//! transports instead.

use std::future::Future;

use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
///
/// Implementations report a non-2xx status as a normal `HttpResponse`; only
/// failures that produce no response at all become `RequestError::Transport`.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, RequestError>> + Send;
}

/// ureq-backed transport.
///
/// Relative request paths (the default `/api` base) are resolved against
/// `origin`, the way a browser resolves them against the page.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    origin: Option<String>,
}

impl UreqTransport {
    /// Transport for absolute base URLs.
    pub fn new() -> Self {
        Self {
            agent: agent(),
            origin: None,
        }
    }

    /// Transport that prefixes relative paths with `origin`,
    /// e.g. `http://127.0.0.1:3000`.
    pub fn with_origin(origin: &str) -> Self {
        Self {
            agent: agent(),
            origin: Some(origin.trim_end_matches('/').to_string()),
        }
    }

    fn resolve(&self, path: &str) -> String {
        match &self.origin {
            Some(origin) if path.starts_with('/') => format!("{origin}{path}"),
            _ => path.to_string(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        let agent = self.agent.clone();
        let url = self.resolve(&request.path);
        tokio::task::spawn_blocking(move || execute_blocking(&agent, &url, request))
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?
    }
}

/// ureq treats 4xx/5xx as errors by default. That is switched off so status
/// interpretation stays in `NotesClient::parse_*`.
fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn execute_blocking(
    agent: &ureq::Agent,
    url: &str,
    request: HttpRequest,
) -> Result<HttpResponse, RequestError> {
    let content_type = request
        .headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .map(|(_, value)| value.clone())
        .unwrap_or_else(|| "application/json".to_string());

    let result = match (request.method, request.body) {
        (HttpMethod::Get, _) => agent.get(url).call(),
        (HttpMethod::Delete, _) => agent.delete(url).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(url)
            .content_type(content_type.as_str())
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(url).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(url)
            .content_type(content_type.as_str())
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(url).send_empty(),
    };
    let mut response = result.map_err(|e| RequestError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| RequestError::Transport(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
