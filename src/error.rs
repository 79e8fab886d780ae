//! Error taxonomy shared across the crate.
//!
//! Every fallible operation resolves to an [`ApiError`]. The variants are
//! deliberately coarse on the transport side and precise on the client side:
//! validation failures name the offending fields before anything touches the
//! wire, while authorization rejections are kept distinct from generic remote
//! failures so the session lifecycle can react to them centrally.

use thiserror::Error;

/// A single rejected field from draft or patch validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// The full set of fields rejected by one validation pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationIssues(pub Vec<FieldError>);

impl ValidationIssues {
    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if the given field was rejected.
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl std::fmt::Display for ValidationIssues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for e in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Faults of the local JSON key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors surfaced by collection and session operations.
///
/// `SessionExpired` is special: it is raised for any authorization rejection
/// after a token was previously accepted, and the application controller
/// clears the session before re-surfacing it, so the UI can distinguish
/// "your session ended" from "the operation failed".
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-detected, field-specific, never sent over the wire.
    #[error("validation failed: {0}")]
    Validation(ValidationIssues),

    /// Token issuance was rejected.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Authorization rejected on a call made with a previously accepted token.
    #[error("session expired, please log in again")]
    SessionExpired,

    /// The referenced movie does not exist.
    #[error("movie not found")]
    NotFound,

    /// Any other non-2xx response, carrying the server message when available.
    #[error("request failed ({status}): {message}")]
    Remote { status: u16, message: String },

    /// The request could not be completed at all.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Local persistence failure, the local-mode counterpart of `Transport`.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ApiError {
    /// True for authorization rejections that must tear down the session.
    pub fn is_session_expiry(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }
}
