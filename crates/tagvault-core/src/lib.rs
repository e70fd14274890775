//! tagvault Core
//!
//! Domain-scoped secret storage over the platform credential store.
//! Secrets are opaque byte blobs kept under `"{domain}.{key}"` tags; the
//! backend (OS keychain, or an in-memory map for tests) owns durability,
//! encryption and access control.
//!
//! ```rust
//! use std::sync::Arc;
//! use tagvault_core::{secret_keys, MemoryBackend, SecretStore};
//!
//! secret_keys! {
//!     pub enum AppSecret {
//!         ApiToken => "api_token",
//!     }
//! }
//!
//! let store = SecretStore::new("com.example.app", Arc::new(MemoryBackend::new()));
//! store.store_string_for("sk-test", &AppSecret::ApiToken).unwrap();
//! assert_eq!(store.retrieve_string("api_token"), Some("sk-test".to_string()));
//! ```

pub mod error;
pub mod tag;
pub mod backend;
pub mod store;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{SecretStoreError, SecretStoreResult, DomainError};

pub use tag::{SecretTag, SecretKey};

pub use backend::{
    CredentialBackend, BackendError, BackendResult,
    MemoryBackend, KeychainBackend,
    register_backend, create_backend, list_backends,
};

pub use store::SecretStore;

pub use config::{StoreConfig, ConfigFile, ConfigLevel, ConfigError, resolve_default_domain};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger};
