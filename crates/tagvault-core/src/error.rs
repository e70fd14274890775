//! Error types for secret store operations

use thiserror::Error;

/// Errors surfaced by `SecretStore` write operations
///
/// Only two kinds exist. Retrieval never produces either of them; see
/// `SecretStore::lookup` for the form that does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecretStoreError {
    /// The domain and key could not be combined into a backend tag
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The backend reported a non-success status where success was expected
    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

pub type SecretStoreResult<T> = Result<T, SecretStoreError>;

/// Errors that can occur while constructing a `SecretStore`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No domain given and no application identifier could be resolved")]
    Unresolved,

    #[error("Domain must not be empty")]
    Empty,

    #[error("Unknown backend: {0}")]
    UnknownBackend(String),
}
