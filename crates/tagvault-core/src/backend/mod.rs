//! Credential backend abstractions and implementations
//!
//! This module provides the storage capability a `SecretStore` runs on:
//! - `CredentialBackend` trait with the four primitive operations
//! - Built-in implementations: `MemoryBackend`, `KeychainBackend`
//! - A registry for discovering and creating backends by name

mod traits;
mod memory;
mod keychain;
mod registry;

pub use traits::{CredentialBackend, BackendError, BackendResult};
pub use memory::MemoryBackend;
pub use keychain::{KeychainBackend, DEFAULT_SERVICE};
pub use registry::{
    register_backend, create_backend, list_backends, has_backend, unregister_backend,
    BackendDefinition, BackendFactory,
};
