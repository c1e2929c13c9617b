//! Cross-cutting error types for clubhouse.
//!
//! `StoreError` is the transport-agnostic failure of any record-store call.
//! Transport-specific errors (e.g. `ApiError` in `club-api`) convert into it at
//! the store boundary. `CoreError` is what engine operations raise to callers.

use thiserror::Error;

/// Failure of a single call against the external record store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached (connection refused, DNS, TLS, ...).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store answered but refused the operation.
    #[error("store rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The addressed record does not exist in the store.
    #[error("{entity_type} {id} not found in store")]
    NotFound { entity_type: String, id: String },

    /// The call did not complete within the configured per-call timeout.
    #[error("store call timed out after {millis}ms")]
    Timeout { millis: u64 },

    /// The store's response could not be decoded.
    #[error("undecodable store response: {0}")]
    Decode(String),
}

/// Errors raised by engine operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A composition entry was proposed with a non-positive duration.
    #[error("Invalid duration: {minutes} minutes (must be greater than zero)")]
    InvalidDuration { minutes: i64 },

    /// Input failed validation before any store call was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// The external record store failed.
    #[error("Persistence error: {0}")]
    Persistence(#[from] StoreError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a `NotFound` error.
    pub fn not_found(entity_type: &str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.into(),
        }
    }

    /// Whether the error was raised before any store call (bad input).
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidDuration { .. } | Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_classification() {
        assert!(CoreError::InvalidDuration { minutes: 0 }.is_validation());
        assert!(CoreError::Validation("missing exercise".into()).is_validation());
        assert!(!CoreError::not_found("composition_entry", "x").is_validation());
        assert!(!CoreError::from(StoreError::Timeout { millis: 10 }).is_validation());
    }

    #[test]
    fn store_error_converts_into_persistence() {
        let err: CoreError = StoreError::Unavailable("connection refused".into()).into();
        assert!(matches!(err, CoreError::Persistence(StoreError::Unavailable(_))));
        assert_eq!(
            err.to_string(),
            "Persistence error: store unavailable: connection refused"
        );
    }

    #[test]
    fn rejected_message_includes_status() {
        let err = StoreError::Rejected {
            status: 422,
            message: "behavior must be between 0 and 10".into(),
        };
        assert_eq!(
            err.to_string(),
            "store rejected request (422): behavior must be between 0 and 10"
        );
    }
}
