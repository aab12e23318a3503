//! One request per operation: build with the core client, execute, parse.

use portfolio_core::{
    sample_projects, ApiError, HealthResponse, Project, ProjectCreate, ProjectUpdate,
    ProjectsClient, ProjectsResponse,
};
use thiserror::Error;

use crate::transport::{Transport, TransportError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub struct Session {
    client: ProjectsClient,
    transport: Transport,
}

impl Session {
    pub fn new(server: &str) -> Self {
        Self {
            client: ProjectsClient::new(server),
            transport: Transport::new(),
        }
    }

    pub fn server(&self) -> &str {
        self.client.base_url()
    }

    pub fn health(&self) -> Result<HealthResponse, SessionError> {
        let response = self.transport.execute(self.client.build_check_health())?;
        Ok(self.client.parse_check_health(response)?)
    }

    pub fn list(&self) -> Result<ProjectsResponse, SessionError> {
        let response = self.transport.execute(self.client.build_list_projects())?;
        Ok(self.client.parse_list_projects(response)?)
    }

    pub fn get(&self, id: i64) -> Result<Project, SessionError> {
        let response = self.transport.execute(self.client.build_get_project(id))?;
        Ok(self.client.parse_get_project(response)?)
    }

    pub fn create(&self, input: &ProjectCreate) -> Result<Project, SessionError> {
        let request = self.client.build_create_project(input)?;
        let response = self.transport.execute(request)?;
        Ok(self.client.parse_create_project(response)?)
    }

    pub fn update(&self, id: i64, patch: &ProjectUpdate) -> Result<Project, SessionError> {
        let request = self.client.build_update_project(id, patch)?;
        let response = self.transport.execute(request)?;
        Ok(self.client.parse_update_project(response)?)
    }

    pub fn delete(&self, id: i64) -> Result<(), SessionError> {
        let response = self.transport.execute(self.client.build_delete_project(id))?;
        Ok(self.client.parse_delete_project(response)?)
    }

    pub fn initialize(&self) -> Result<ProjectsResponse, SessionError> {
        let response = self.transport.execute(self.client.build_initialize_projects())?;
        Ok(self.client.parse_initialize_projects(response)?)
    }

    /// Load what the public projects page shows.
    ///
    /// An empty store is seeded first. When the store cannot be reached or
    /// refuses, the local sample set is shown instead.
    pub fn gallery(&self) -> Gallery {
        let listed = match self.list() {
            Ok(listed) => listed,
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch projects, using sample data");
                return Gallery::fallback();
            }
        };
        if !listed.projects.is_empty() {
            return Gallery {
                projects: listed.projects,
                source: GallerySource::Store,
            };
        }

        match self.initialize() {
            Ok(seeded) => Gallery {
                projects: seeded.projects,
                source: GallerySource::Initialized,
            },
            Err(e) => {
                tracing::warn!(error = %e, "failed to initialize projects, using sample data");
                Gallery::fallback()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GallerySource {
    Store,
    Initialized,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Gallery {
    pub projects: Vec<Project>,
    pub source: GallerySource,
}

impl Gallery {
    fn fallback() -> Self {
        Self {
            projects: sample_projects(),
            source: GallerySource::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_server() -> std::net::SocketAddr {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                projects_server::run(listener).await
            })
            .unwrap();
        });

        addr
    }

    fn unreachable_addr() -> std::net::SocketAddr {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    }

    #[test]
    fn gallery_seeds_empty_store_then_reads_it() {
        let session = Session::new(&format!("http://{}", start_server()));

        let first = session.gallery();
        assert_eq!(first.source, GallerySource::Initialized);
        assert_eq!(first.projects.len(), 6);

        let second = session.gallery();
        assert_eq!(second.source, GallerySource::Store);
        assert_eq!(second.projects, first.projects);
    }

    #[test]
    fn gallery_falls_back_when_store_is_down() {
        let session = Session::new(&format!("http://{}", unreachable_addr()));
        let gallery = session.gallery();
        assert_eq!(gallery.source, GallerySource::Fallback);
        assert_eq!(gallery.projects, sample_projects());
    }

    #[test]
    fn transport_failure_is_not_an_api_error() {
        let session = Session::new(&format!("http://{}", unreachable_addr()));
        assert!(matches!(session.health(), Err(SessionError::Transport(_))));
    }

    #[test]
    fn missing_project_is_an_api_error() {
        let session = Session::new(&format!("http://{}", start_server()));
        assert!(matches!(
            session.get(12),
            Err(SessionError::Api(ApiError::NotFound))
        ));
    }
}
