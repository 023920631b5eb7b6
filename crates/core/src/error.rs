//! Domain error model.

use thiserror::Error;

/// Result type used across the planning core.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, missing entities, malformed feeds). Transport and presentation
/// concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. non-positive order quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A forecast feed line had the wrong shape (field count, unparseable
    /// date). Numeric cell failures are *not* errors; they flow through as
    /// `NaN` and callers decide what to do with non-finite records.
    #[error("malformed feed line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// A referenced entity does not exist in the snapshot.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A conflict occurred (e.g. concurrent write to the same entity).
    #[error("conflict: {0}")]
    Conflict(String),

    /// An external repository fetch failed or returned an unexpected shape.
    /// The surrounding system may substitute a fallback dataset; the core
    /// operates identically on fallback or live data.
    #[error("upstream source {origin} unavailable: {reason}")]
    Upstream { origin: &'static str, reason: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn upstream(origin: &'static str, reason: impl Into<String>) -> Self {
        Self::Upstream {
            origin,
            reason: reason.into(),
        }
    }
}
