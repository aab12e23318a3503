//! Domain DTOs for the projects API.
//!
//! # Design
//! These types mirror the store's schema but are defined independently of
//! the server crate. Integration tests catch any schema drift between the
//! two. Field names follow the wire format, so `image_url` is renamed to the
//! camelCase `imageUrl` the store speaks.

use serde::{Deserialize, Serialize};

/// A single portfolio project returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub tags: Vec<String>,
}

/// Request payload for creating a new project. Every field is required; the
/// store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectCreate {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub tags: Vec<String>,
}

/// Request payload for updating an existing project. Only the fields present
/// in the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ProjectUpdate {
    /// True when the patch would leave a project untouched.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.image_url.is_none()
            && self.tags.is_none()
    }
}

/// Envelope for list and initialize responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

/// Body of the health check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

/// One segment of a validation error location: a field name or a list index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LocSegment {
    Index(i64),
    Key(String),
}

impl std::fmt::Display for LocSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocSegment::Index(i) => write!(f, "{i}"),
            LocSegment::Key(k) => f.write_str(k),
        }
    }
}

/// A single rejected input, as reported by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationErrorItem {
    pub loc: Vec<LocSegment>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationErrorItem {
    /// Location rendered as a dotted path, e.g. `body.title`.
    pub fn location(&self) -> String {
        self.loc
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// The `{detail: [...]}` envelope returned for malformed input.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpValidationError {
    pub detail: Vec<ValidationErrorItem>,
}

impl std::fmt::Display for HttpValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries: Vec<String> = self
            .detail
            .iter()
            .map(|item| format!("{}: {}", item.location(), item.msg))
            .collect();
        f.write_str(&entries.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_uses_camel_case_image_url() {
        let project = Project {
            id: 7,
            title: "Poster".to_string(),
            description: "A poster".to_string(),
            category: "Print".to_string(),
            image_url: "https://example.com/p.jpg".to_string(),
            tags: vec!["Print".to_string()],
        };
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/p.jpg");
        assert!(json.get("image_url").is_none());
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn update_skips_absent_fields() {
        let patch = ProjectUpdate {
            title: Some("X".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"title": "X"}));
    }

    #[test]
    fn update_treats_null_as_absent() {
        let patch: ProjectUpdate =
            serde_json::from_str(r#"{"title":null,"tags":["a"]}"#).unwrap();
        assert!(patch.title.is_none());
        assert_eq!(patch.tags, Some(vec!["a".to_string()]));
        assert!(!patch.is_empty());
        assert!(ProjectUpdate::default().is_empty());
    }

    #[test]
    fn validation_loc_accepts_strings_and_integers() {
        let err: HttpValidationError = serde_json::from_str(
            r#"{"detail":[{"loc":["body","tags",0],"msg":"Input should be a valid string","type":"string_type"}]}"#,
        )
        .unwrap();
        assert_eq!(err.detail[0].location(), "body.tags.0");
        assert_eq!(err.detail[0].kind, "string_type");
        assert_eq!(err.to_string(), "body.tags.0: Input should be a valid string");
    }
}
