//! Core trait and errors for credential backends

use thiserror::Error;

/// Errors reported by backend primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("No record matches the tag")]
    NotFound,

    #[error("A record with this tag already exists")]
    Duplicate,

    #[error("Tag not accepted by backend: {0}")]
    InvalidTag(String),

    #[error("Backend not available: {0}")]
    Unavailable(String),

    #[error("Backend error: {0}")]
    Other(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

/// A platform-level secure keyed-value store
///
/// Records are addressed by exact tag bytes. Implementations provide the
/// atomicity of each individual call; nothing composes calls on their behalf.
///
/// Implementations:
/// - `MemoryBackend`: in-process map for tests and ephemeral use
/// - `KeychainBackend`: the OS credential store via the `keyring` crate
pub trait CredentialBackend: Send + Sync {
    /// Human-readable name of this backend
    fn name(&self) -> &str;

    /// Check if this backend can be reached
    ///
    /// A keychain backend might not be available on a headless server.
    fn is_available(&self) -> bool {
        true
    }

    /// Look up the value stored under exactly `tag`
    ///
    /// Returns `Ok(None)` when no record matches.
    fn find_exact(&self, tag: &[u8]) -> BackendResult<Option<Vec<u8>>>;

    /// Create a new record
    ///
    /// Fails with `BackendError::Duplicate` if the tag is already present.
    fn insert(&self, tag: &[u8], value: &[u8]) -> BackendResult<()>;

    /// Overwrite the value of an existing record
    ///
    /// Fails with `BackendError::NotFound` if no record matches.
    fn update(&self, tag: &[u8], value: &[u8]) -> BackendResult<()>;

    /// Delete the record matching `tag`
    ///
    /// Fails with `BackendError::NotFound` if nothing was removed.
    fn remove(&self, tag: &[u8]) -> BackendResult<()>;
}
