//! Synchronous API client core for the portfolio projects service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `ProjectsClient` is stateless: it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Malformed-input rejections decode into a typed `ApiError::Validation`;
//!   every other failure is opaque.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.
//! - `catalog`, `form` and `sample` hold the caller-side conventions of the
//!   portfolio pages: derived categories, editor checks and seed data.

pub mod catalog;
pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod sample;
pub mod types;

pub use catalog::{categories, filter_by_category, parse_tags, CategoryFilter};
pub use client::ProjectsClient;
pub use error::ApiError;
pub use form::{FormError, ProjectForm};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use sample::sample_projects;
pub use types::{
    HealthResponse, HttpValidationError, LocSegment, Project, ProjectCreate, ProjectUpdate,
    ProjectsResponse, ValidationErrorItem,
};
