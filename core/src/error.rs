//! Error types for the projects API client.
//!
//! # Design
//! The store reports malformed input with a structured `detail` envelope;
//! that becomes the typed `Validation` variant so callers can show each
//! rejected field. `NotFound` gets its own variant because callers frequently
//! distinguish "the project does not exist" from other failures. Everything
//! else is opaque: the raw status and body are kept for debugging only.

use thiserror::Error;

use crate::types::HttpValidationError;

/// Errors returned by `ProjectsClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The store rejected the request input.
    #[error("validation failed: {0}")]
    Validation(HttpValidationError),

    /// The server returned 404: the requested project does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-success status without a validation envelope.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// True for failures that carry no structured information for the caller.
    pub fn is_transport_opaque(&self) -> bool {
        !matches!(self, ApiError::Validation(_) | ApiError::NotFound)
    }

    /// The rejected inputs, if this is a validation failure.
    pub fn validation_detail(&self) -> Option<&HttpValidationError> {
        match self {
            ApiError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LocSegment, ValidationErrorItem};

    #[test]
    fn validation_display_lists_entries() {
        let err = ApiError::Validation(HttpValidationError {
            detail: vec![ValidationErrorItem {
                loc: vec![LocSegment::Key("body".into()), LocSegment::Key("title".into())],
                msg: "Field required".into(),
                kind: "missing".into(),
            }],
        });
        assert_eq!(err.to_string(), "validation failed: body.title: Field required");
        assert!(!err.is_transport_opaque());
        assert_eq!(err.validation_detail().unwrap().detail.len(), 1);
    }

    #[test]
    fn http_error_is_opaque() {
        let err = ApiError::HttpError {
            status: 502,
            body: "bad gateway".into(),
        };
        assert!(err.is_transport_opaque());
        assert!(err.validation_detail().is_none());
        assert!(!ApiError::NotFound.is_transport_opaque());
    }
}
