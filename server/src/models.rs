//! Wire types owned by the store.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectCreate {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub tags: Vec<String>,
}

/// Partial update; `null` and absent fields both mean "keep".
#[derive(Debug, Default, Deserialize)]
pub struct ProjectUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl Project {
    pub fn from_create(id: i64, input: ProjectCreate) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            category: input.category,
            image_url: input.image_url,
            tags: input.tags,
        }
    }

    pub fn apply(&mut self, patch: ProjectUpdate) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}

impl From<portfolio_core::Project> for Project {
    fn from(p: portfolio_core::Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            category: p.category,
            image_url: p.image_url,
            tags: p.tags,
        }
    }
}
