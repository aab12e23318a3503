//! Stateless HTTP request builder and response parser for the projects API.
//!
//! # Design
//! `ProjectsClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    HealthResponse, HttpValidationError, Project, ProjectCreate, ProjectUpdate, ProjectsResponse,
};

pub const HEALTH_PATH: &str = "/_healthz";
pub const PROJECTS_PATH: &str = "/routes/projects";
pub const INITIALIZE_PATH: &str = "/routes/projects/initialize";

/// Synchronous, stateless client for the projects API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct ProjectsClient {
    base_url: String,
}

impl ProjectsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_check_health(&self) -> HttpRequest {
        self.request(HttpMethod::Get, HEALTH_PATH.to_string())
    }

    pub fn build_list_projects(&self) -> HttpRequest {
        self.request(HttpMethod::Get, PROJECTS_PATH.to_string())
    }

    pub fn build_get_project(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, project_path(id))
    }

    pub fn build_create_project(&self, input: &ProjectCreate) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, PROJECTS_PATH.to_string(), input)
    }

    pub fn build_update_project(
        &self,
        id: i64,
        input: &ProjectUpdate,
    ) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, project_path(id), input)
    }

    pub fn build_delete_project(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, project_path(id))
    }

    pub fn build_initialize_projects(&self) -> HttpRequest {
        self.request(HttpMethod::Post, INITIALIZE_PATH.to_string())
    }

    pub fn parse_check_health(&self, response: HttpResponse) -> Result<HealthResponse, ApiError> {
        check_status(&response, &[200])?;
        decode(&response)
    }

    pub fn parse_list_projects(&self, response: HttpResponse) -> Result<ProjectsResponse, ApiError> {
        check_status(&response, &[200])?;
        decode(&response)
    }

    pub fn parse_get_project(&self, response: HttpResponse) -> Result<Project, ApiError> {
        check_status(&response, &[200])?;
        decode(&response)
    }

    pub fn parse_create_project(&self, response: HttpResponse) -> Result<Project, ApiError> {
        check_status(&response, &[201, 200])?;
        decode(&response)
    }

    pub fn parse_update_project(&self, response: HttpResponse) -> Result<Project, ApiError> {
        check_status(&response, &[200])?;
        decode(&response)
    }

    /// The store answers 204 with no body; a 200 with any payload is accepted too.
    pub fn parse_delete_project(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, &[204, 200])?;
        Ok(())
    }

    pub fn parse_initialize_projects(
        &self,
        response: HttpResponse,
    ) -> Result<ProjectsResponse, ApiError> {
        check_status(&response, &[200, 201])?;
        decode(&response)
    }

    fn request(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn project_path(id: i64) -> String {
    format!("{PROJECTS_PATH}/{id}")
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
///
/// A 4xx carrying a non-empty `detail` list is a validation failure, whatever
/// the exact status. A plain 404 is `NotFound`; the rest is opaque.
fn check_status(response: &HttpResponse, accepted: &[u16]) -> Result<(), ApiError> {
    if accepted.contains(&response.status) {
        return Ok(());
    }
    if (400..500).contains(&response.status) {
        if let Ok(envelope) = serde_json::from_str::<HttpValidationError>(&response.body) {
            if !envelope.detail.is_empty() {
                tracing::debug!(
                    status = response.status,
                    entries = envelope.detail.len(),
                    "request rejected"
                );
                return Err(ApiError::Validation(envelope));
            }
        }
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
