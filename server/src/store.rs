//! In-memory project collection with optional JSON file persistence.
//!
//! # Design
//! Projects live in a `Vec` so list order is insertion order. Every mutation
//! builds the next collection, persists it, and only then swaps it in, all
//! under the write lock. A failed write therefore leaves memory untouched
//! and concurrent writers never interleave.
//!
//! The data file is replaced atomically: the next collection goes to a
//! temporary file in the same directory which is then renamed over it.

use std::collections::HashSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::NamedTempFile;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{Project, ProjectCreate, ProjectUpdate};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("project {0} not found")]
    NotFound(i64),

    #[error("failed to load {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} holds more than one project with id {id}")]
    DuplicateId { path: PathBuf, id: i64 },

    #[error("no project ids left after {0}")]
    IdsExhausted(i64),

    #[error("{0}")]
    Persist(#[from] io::Error),

    #[error("{0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default)]
pub struct Store {
    projects: Arc<RwLock<Vec<Project>>>,
    data_file: Option<Arc<PathBuf>>,
}

impl Store {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open a file-backed store. A missing file is an empty store.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let projects: Vec<Project> = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(StoreError::Load { path, source }),
        };

        let mut seen = HashSet::with_capacity(projects.len());
        if let Some(dup) = projects.iter().find(|p| !seen.insert(p.id)) {
            return Err(StoreError::DuplicateId { path, id: dup.id });
        }
        tracing::info!(path = %path.display(), count = projects.len(), "loaded projects");
        Ok(Self {
            projects: Arc::new(RwLock::new(projects)),
            data_file: Some(Arc::new(path)),
        })
    }

    pub fn data_file(&self) -> Option<&Path> {
        self.data_file.as_deref().map(PathBuf::as_path)
    }

    pub async fn list(&self) -> Vec<Project> {
        self.projects.read().await.clone()
    }

    pub async fn get(&self, id: i64) -> Result<Project, StoreError> {
        let projects = self.projects.read().await;
        projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// New ids are one past the current maximum, or 1 for an empty store.
    pub async fn create(&self, input: ProjectCreate) -> Result<Project, StoreError> {
        let mut projects = self.projects.write().await;
        let max = projects.iter().map(|p| p.id).max().unwrap_or(0);
        let id = max.checked_add(1).ok_or(StoreError::IdsExhausted(max))?;
        let project = Project::from_create(id, input);

        let mut next = projects.clone();
        next.push(project.clone());
        self.commit(&mut projects, next).await?;
        Ok(project)
    }

    pub async fn update(&self, id: i64, patch: ProjectUpdate) -> Result<Project, StoreError> {
        let mut projects = self.projects.write().await;
        let index = position(&projects, id)?;

        let mut next = projects.clone();
        next[index].apply(patch);
        let updated = next[index].clone();
        self.commit(&mut projects, next).await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut projects = self.projects.write().await;
        let index = position(&projects, id)?;

        let mut next = projects.clone();
        next.remove(index);
        self.commit(&mut projects, next).await
    }

    /// Seed an empty store with the sample set. A populated store is left as
    /// is. Either way the current collection is returned.
    pub async fn initialize(&self) -> Result<Vec<Project>, StoreError> {
        let mut projects = self.projects.write().await;
        if projects.is_empty() {
            let seed: Vec<Project> = portfolio_core::sample_projects()
                .into_iter()
                .map(Project::from)
                .collect();
            self.commit(&mut projects, seed).await?;
            tracing::info!(count = projects.len(), "seeded sample projects");
        }
        Ok(projects.clone())
    }

    async fn commit(&self, current: &mut Vec<Project>, next: Vec<Project>) -> Result<(), StoreError> {
        if let Some(path) = &self.data_file {
            let bytes = serde_json::to_vec_pretty(&next)?;
            let path = Arc::clone(path);
            tokio::task::spawn_blocking(move || replace_file(&path, &bytes))
                .await
                .map_err(io::Error::other)??;
        }
        *current = next;
        Ok(())
    }
}

/// Write `bytes` next to `dest` and rename over it, so readers only ever see
/// the old or the new contents.
fn replace_file(dest: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}

fn position(projects: &[Project], id: i64) -> Result<usize, StoreError> {
    projects
        .iter()
        .position(|p| p.id == id)
        .ok_or(StoreError::NotFound(id))
}
