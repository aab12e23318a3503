//! Executes core `HttpRequest`s over the network with ureq.
//!
//! ureq's status-as-error behaviour is disabled so 4xx/5xx responses come
//! back as data and the core client decides what they mean. Only connection
//! and I/O failures surface as `TransportError`.

use portfolio_core::{HttpMethod, HttpRequest, HttpResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{method} {url} failed: {source}")]
    Request {
        method: HttpMethod,
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("failed to read response from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: ureq::Error,
    },
}

#[derive(Clone)]
pub struct Transport {
    agent: ureq::Agent,
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn execute(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let HttpRequest {
            method, path, body, ..
        } = req;
        tracing::debug!(%method, url = %path, "sending request");

        let result = match (method, body) {
            (HttpMethod::Get, _) => self.agent.get(&path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&path).send_empty(),
        };

        let mut response = result.map_err(|source| TransportError::Request {
            method,
            url: path.clone(),
            source,
        })?;

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
            .map_err(|source| TransportError::Body { url: path.clone(), source })?;

        tracing::debug!(status, url = %path, "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
