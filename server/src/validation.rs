//! Request validation and the error envelopes the store answers with.
//!
//! Malformed input is rejected with 422 and `{"detail": [{loc, msg, type}]}`,
//! one entry per offending field. Bodies are checked field by field against
//! the project schema before they are decoded, so every problem is reported
//! at once rather than only the first one serde trips over.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Map, Value};

use crate::models::{ProjectCreate, ProjectUpdate};
use crate::store::StoreError;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<Value>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FieldError {
    fn new(loc: Vec<Value>, msg: impl Into<String>, kind: &'static str) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind,
        }
    }

    fn body(msg: impl Into<String>, kind: &'static str) -> Self {
        Self::new(vec![json!("body")], msg, kind)
    }

    fn field(name: &str, msg: impl Into<String>, kind: &'static str) -> Self {
        Self::new(vec![json!("body"), json!(name)], msg, kind)
    }
}

/// Everything a handler can fail with, rendered the way clients expect.
#[derive(Debug)]
pub enum ApiRejection {
    Validation(Vec<FieldError>),
    NotFound,
    Storage(String),
    Internal(String),
    /// Framework-level rejection (unreadable body, missing path segment).
    Rejected { status: StatusCode, message: String },
}

impl From<StoreError> for ApiRejection {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiRejection::NotFound,
            err @ (StoreError::Persist(_) | StoreError::Encode(_)) => {
                ApiRejection::Storage(err.to_string())
            }
            other => ApiRejection::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiRejection {
    fn into_response(self) -> Response {
        match self {
            ApiRejection::Validation(detail) => {
                tracing::warn!(entries = detail.len(), "rejecting malformed request");
                (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": detail }))).into_response()
            }
            ApiRejection::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": "Project not found" }))).into_response()
            }
            ApiRejection::Storage(message) => {
                tracing::error!(%message, "failed to save projects");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": format!("Failed to save projects: {message}") })),
                )
                    .into_response()
            }
            ApiRejection::Internal(message) => {
                tracing::error!(%message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": message }))).into_response()
            }
            ApiRejection::Rejected { status, message } => {
                (status, Json(json!({ "detail": message }))).into_response()
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum FieldKind {
    Str { min_len: usize },
    StrList,
}

const PROJECT_FIELDS: [(&str, FieldKind); 5] = [
    ("title", FieldKind::Str { min_len: 1 }),
    ("description", FieldKind::Str { min_len: 0 }),
    ("category", FieldKind::Str { min_len: 0 }),
    ("imageUrl", FieldKind::Str { min_len: 0 }),
    ("tags", FieldKind::StrList),
];

/// Check a decoded JSON body against the project schema.
///
/// With `required` every field must be present and non-null; otherwise
/// absent and `null` fields are skipped.
pub fn check_project_body(body: &Value, required: bool) -> Vec<FieldError> {
    let Some(object) = body.as_object() else {
        return vec![FieldError::body(
            "Input should be a valid dictionary or object to extract fields from",
            "model_attributes_type",
        )];
    };

    let mut errors = Vec::new();
    for (name, kind) in PROJECT_FIELDS {
        check_field(object, name, kind, required, &mut errors);
    }
    errors
}

fn check_field(
    object: &Map<String, Value>,
    name: &str,
    kind: FieldKind,
    required: bool,
    errors: &mut Vec<FieldError>,
) {
    let value = match object.get(name) {
        Some(value) if required || !value.is_null() => value,
        Some(_) => return,
        None if required => {
            errors.push(FieldError::field(name, "Field required", "missing"));
            return;
        }
        None => return,
    };

    match (kind, value) {
        (FieldKind::Str { min_len }, Value::String(s)) => {
            if s.chars().count() < min_len {
                errors.push(FieldError::field(
                    name,
                    format!("String should have at least {min_len} character"),
                    "string_too_short",
                ));
            }
        }
        (FieldKind::Str { .. }, _) => {
            errors.push(FieldError::field(name, "Input should be a valid string", "string_type"));
        }
        (FieldKind::StrList, Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                if !item.is_string() {
                    errors.push(FieldError::new(
                        vec![json!("body"), json!(name), json!(index)],
                        "Input should be a valid string",
                        "string_type",
                    ));
                }
            }
        }
        (FieldKind::StrList, _) => {
            errors.push(FieldError::field(name, "Input should be a valid list", "list_type"));
        }
    }
}

/// Request bodies that go through the field-by-field check.
pub trait ProjectSchema: DeserializeOwned {
    const ALL_REQUIRED: bool;
}

impl ProjectSchema for ProjectCreate {
    const ALL_REQUIRED: bool = true;
}

impl ProjectSchema for ProjectUpdate {
    const ALL_REQUIRED: bool = false;
}

/// JSON body extractor that answers with the validation envelope.
pub struct ProjectBody<T>(pub T);

impl<S, T> FromRequest<S> for ProjectBody<T>
where
    S: Send + Sync,
    T: ProjectSchema,
{
    type Rejection = ApiRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiRejection::Rejected {
                status: e.status(),
                message: e.body_text(),
            })?;

        if bytes.is_empty() {
            return Err(ApiRejection::Validation(vec![FieldError::body(
                "Field required",
                "missing",
            )]));
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            ApiRejection::Validation(vec![FieldError::body(
                format!("JSON decode error: {e}"),
                "json_invalid",
            )])
        })?;

        let errors = check_project_body(&value, T::ALL_REQUIRED);
        if !errors.is_empty() {
            return Err(ApiRejection::Validation(errors));
        }

        serde_json::from_value(value)
            .map(ProjectBody)
            .map_err(|e| ApiRejection::Validation(vec![FieldError::body(e.to_string(), "value_error")]))
    }
}

/// Integer project id taken from the `{project_id}` path segment.
pub struct ProjectId(pub i64);

impl<S> FromRequestParts<S> for ProjectId
where
    S: Send + Sync,
{
    type Rejection = ApiRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiRejection::Rejected {
                status: e.status(),
                message: e.body_text(),
            })?;

        raw.trim().parse::<i64>().map(ProjectId).map_err(|_| {
            ApiRejection::Validation(vec![FieldError::new(
                vec![json!("path"), json!("project_id")],
                "Input should be a valid integer, unable to parse string as an integer",
                "int_parsing",
            )])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn complete_create_body_passes() {
        let body = json!({
            "title": "T", "description": "", "category": "", "imageUrl": "", "tags": []
        });
        assert!(check_project_body(&body, true).is_empty());
    }

    #[test]
    fn create_reports_every_missing_field() {
        let errors = check_project_body(&json!({"title": "T"}), true);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0].loc, vec![json!("body"), json!("description")]);
        assert!(kinds(&errors).iter().all(|k| *k == "missing"));
    }

    #[test]
    fn empty_title_is_too_short() {
        let body = json!({
            "title": "", "description": "", "category": "", "imageUrl": "", "tags": []
        });
        let errors = check_project_body(&body, true);
        assert_eq!(kinds(&errors), vec!["string_too_short"]);
        assert_eq!(errors[0].msg, "String should have at least 1 character");
    }

    #[test]
    fn wrong_types_are_reported() {
        let body = json!({
            "title": 5, "description": "", "category": "", "imageUrl": null, "tags": ["ok", 3]
        });
        let errors = check_project_body(&body, true);
        assert_eq!(kinds(&errors), vec!["string_type", "string_type", "string_type"]);
        assert_eq!(errors[2].loc, vec![json!("body"), json!("tags"), json!(1)]);
    }

    #[test]
    fn update_skips_absent_and_null() {
        assert!(check_project_body(&json!({}), false).is_empty());
        assert!(check_project_body(&json!({"title": null, "tags": null}), false).is_empty());

        let errors = check_project_body(&json!({"title": "", "tags": "a,b"}), false);
        assert_eq!(kinds(&errors), vec!["string_too_short", "list_type"]);
    }

    #[test]
    fn non_object_body_is_rejected() {
        let errors = check_project_body(&json!([1, 2]), true);
        assert_eq!(kinds(&errors), vec!["model_attributes_type"]);
        assert_eq!(errors[0].loc, vec![json!("body")]);
    }
}
