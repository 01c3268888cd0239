//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CatchUpError`]
//! via `#[from]` (or an explicit `From` impl for boxed storage errors).

/// Top-level error returned by application services and ports.
#[derive(Debug, thiserror::Error)]
pub enum CatchUpError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A looked-up record does not exist.
    #[error("entity not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store rejected or failed an operation.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("model must not be empty")]
    EmptyModel,

    #[error("color must not be empty")]
    EmptyColor,

    #[error("identifier is not a valid integer")]
    InvalidId,
}

/// A record with the given identifier does not exist.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
