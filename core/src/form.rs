//! Client-side checks for the project editor before anything is sent.
//!
//! Title, description, category and image URL must all be filled in; tags
//! are typed as one comma-separated string.

use thiserror::Error;

use crate::catalog::{format_tags, parse_tags};
use crate::types::{Project, ProjectCreate, ProjectUpdate};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Editable state of a project form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub tags_input: String,
}

impl ProjectForm {
    /// Pre-fill the form for editing an existing project.
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            category: project.category.clone(),
            image_url: project.image_url.clone(),
            tags_input: format_tags(&project.tags),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let missing: Vec<&'static str> = [
            ("title", &self.title),
            ("description", &self.description),
            ("category", &self.category),
            ("imageUrl", &self.image_url),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }

    pub fn into_create(self) -> Result<ProjectCreate, FormError> {
        self.validate()?;
        Ok(ProjectCreate {
            tags: parse_tags(&self.tags_input),
            title: self.title,
            description: self.description,
            category: self.category,
            image_url: self.image_url,
        })
    }

    /// A full replacement patch: the editor always submits every field.
    pub fn into_update(self) -> Result<ProjectUpdate, FormError> {
        self.validate()?;
        Ok(ProjectUpdate {
            tags: Some(parse_tags(&self.tags_input)),
            title: Some(self.title),
            description: Some(self.description),
            category: Some(self.category),
            image_url: Some(self.image_url),
        })
    }
}
