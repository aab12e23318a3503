//! Portfolio projects store served over HTTP.
//!
//! Routes:
//! - `GET /_healthz`
//! - `GET|POST /routes/projects`
//! - `POST /routes/projects/initialize`
//! - `GET|PUT|DELETE /routes/projects/{project_id}`

pub mod config;
pub mod models;
pub mod store;
pub mod validation;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;

pub use models::{HealthResponse, Project, ProjectCreate, ProjectUpdate, ProjectsResponse};
pub use store::{Store, StoreError};
use validation::{ApiRejection, ProjectBody, ProjectId};

/// Router over a fresh in-memory store.
pub fn app() -> Router {
    router(Store::in_memory())
}

pub fn router(store: Store) -> Router {
    Router::new()
        .route("/_healthz", get(check_health))
        .route("/routes/projects", get(list_projects).post(create_project))
        .route("/routes/projects/initialize", post(initialize_projects))
        .route(
            "/routes/projects/{project_id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve `store` until ctrl-c.
pub async fn serve(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

async fn check_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

async fn list_projects(State(store): State<Store>) -> Json<ProjectsResponse> {
    let projects = store.list().await;
    tracing::debug!(count = projects.len(), "listing projects");
    Json(ProjectsResponse { projects })
}

async fn create_project(
    State(store): State<Store>,
    ProjectBody(input): ProjectBody<ProjectCreate>,
) -> Result<(StatusCode, Json<Project>), ApiRejection> {
    let project = store.create(input).await?;
    tracing::info!(id = project.id, title = %project.title, "created project");
    Ok((StatusCode::CREATED, Json(project)))
}

async fn get_project(
    State(store): State<Store>,
    ProjectId(id): ProjectId,
) -> Result<Json<Project>, ApiRejection> {
    Ok(Json(store.get(id).await?))
}

async fn update_project(
    State(store): State<Store>,
    ProjectId(id): ProjectId,
    ProjectBody(patch): ProjectBody<ProjectUpdate>,
) -> Result<Json<Project>, ApiRejection> {
    let project = store.update(id, patch).await?;
    tracing::info!(id, "updated project");
    Ok(Json(project))
}

async fn delete_project(
    State(store): State<Store>,
    ProjectId(id): ProjectId,
) -> Result<StatusCode, ApiRejection> {
    store.delete(id).await?;
    tracing::info!(id, "deleted project");
    Ok(StatusCode::NO_CONTENT)
}

async fn initialize_projects(
    State(store): State<Store>,
) -> Result<Json<ProjectsResponse>, ApiRejection> {
    let projects = store.initialize().await?;
    Ok(Json(ProjectsResponse { projects }))
}
