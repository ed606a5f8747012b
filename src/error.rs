//! Error handling

use thiserror::Error;

use crate::logic::lifecycle::InvestigationStatus;

pub type CoreResult<T> = Result<T, CoreError>;

/// Crate-wide error type.
///
/// `Validation` and `InvalidTransition` are always raised before any
/// mutation is applied, so a failed operation leaves the entity in its
/// prior state.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed entity or sub-record: dangling evidence reference,
    /// detail list present without its governing boolean, duplicate id.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Requested lifecycle transition is not in the allowed table.
    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition {
        from: InvestigationStatus,
        to: InvestigationStatus,
    },

    /// Collaborator lookup by identifier yielded nothing.
    #[error("not found: {0}")]
    NotFound(String),

    /// Input that is not even structurally valid JSON.
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
}
