//! `SecretStore`: namespaced store/retrieve/delete over a credential backend

use std::sync::Arc;

use crate::backend::{create_backend, CredentialBackend, KeychainBackend};
use crate::config::{resolve_default_domain, StoreConfig};
use crate::error::{DomainError, SecretStoreError, SecretStoreResult};
use crate::logging::{NoOpLogger, SharedLogger};
use crate::tag::{SecretKey, SecretTag};
use crate::{log_debug, log_warn};

/// Secret storage scoped to a domain
///
/// Every key is stored under the tag `"{domain}.{key}"`, so two stores with
/// different domains never see each other's secrets even on one backend.
/// The store holds no secret state of its own: each call goes straight to the
/// backend.
///
/// The store is `Send + Sync` and can be shared behind an `Arc`. Writes are
/// an update attempt followed by an insert attempt, which is not atomic as a
/// whole; concurrent first writes of one key are arbitrated by the backend.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tagvault_core::{MemoryBackend, SecretStore};
///
/// let store = SecretStore::new("com.example.app", Arc::new(MemoryBackend::new()));
///
/// store.store_string("sk-test", "api_token").unwrap();
/// assert_eq!(store.retrieve_string("api_token"), Some("sk-test".to_string()));
///
/// store.delete("api_token").unwrap();
/// assert_eq!(store.retrieve("api_token"), None);
/// ```
pub struct SecretStore {
    domain: String,
    backend: Arc<dyn CredentialBackend>,
    logger: SharedLogger,
}

impl SecretStore {
    /// Create a store for `domain` on the given backend
    pub fn new(domain: impl Into<String>, backend: Arc<dyn CredentialBackend>) -> Self {
        Self {
            domain: domain.into(),
            backend,
            logger: Arc::new(NoOpLogger),
        }
    }

    /// Create a store for `domain` on the system keychain
    pub fn keychain(domain: impl Into<String>) -> Self {
        Self::new(domain, Arc::new(KeychainBackend::new()))
    }

    /// Create a store named after the host application
    ///
    /// See [`resolve_default_domain`] for how the name is found. Fails with
    /// `DomainError::Unresolved` when no name is available.
    pub fn with_default_domain(backend: Arc<dyn CredentialBackend>) -> Result<Self, DomainError> {
        Ok(Self::new(resolve_default_domain()?, backend))
    }

    /// Create a store from settings, looking the backend up in the registry
    pub fn from_config(config: &StoreConfig) -> Result<Self, DomainError> {
        let domain = config.resolve_domain()?;
        let backend = create_backend(&config.backend, Some(config.service_name()))
            .ok_or_else(|| DomainError::UnknownBackend(config.backend.clone()))?;
        Ok(Self::new(domain, backend))
    }

    /// Attach a logger for store diagnostics
    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    /// The backend tag `key` maps to in this store's domain
    pub fn tag_for(&self, key: &str) -> SecretStoreResult<SecretTag> {
        SecretTag::new(&self.domain, key)
    }

    /// Store `secret` under `key`, overwriting any existing value
    ///
    /// Tries to update an existing record first and inserts a new one when
    /// the update does not succeed. Fails with `OperationFailed` when neither
    /// does.
    pub fn store(&self, secret: &[u8], key: &str) -> SecretStoreResult<()> {
        let tag = self.tag_for(key)?;

        match self.backend.update(tag.as_bytes(), secret) {
            Ok(()) => {
                log_debug!(self.logger, "updated '{}' ({} bytes)", tag, secret.len());
                return Ok(());
            }
            Err(e) => log_debug!(self.logger, "update of '{}' did not apply: {}", tag, e),
        }

        match self.backend.insert(tag.as_bytes(), secret) {
            Ok(()) => {
                log_debug!(self.logger, "inserted '{}' ({} bytes)", tag, secret.len());
                Ok(())
            }
            Err(e) => {
                log_warn!(self.logger, "store of '{}' failed: {}", tag, e);
                Err(SecretStoreError::OperationFailed(format!(
                    "could not store '{}': {}",
                    tag, e
                )))
            }
        }
    }

    /// Store a string secret as its UTF-8 bytes
    pub fn store_string(&self, secret: &str, key: &str) -> SecretStoreResult<()> {
        self.store(secret.as_bytes(), key)
    }

    /// Look up the secret under `key`, keeping failures distinct
    ///
    /// `Ok(None)` means the backend holds no record. Bad keys are
    /// `InvalidInput` and backend errors are `OperationFailed`.
    pub fn lookup(&self, key: &str) -> SecretStoreResult<Option<Vec<u8>>> {
        let tag = self.tag_for(key)?;
        self.backend.find_exact(tag.as_bytes()).map_err(|e| {
            log_warn!(self.logger, "lookup of '{}' failed: {}", tag, e);
            SecretStoreError::OperationFailed(format!("could not read '{}': {}", tag, e))
        })
    }

    /// Retrieve the secret under `key`
    ///
    /// Returns `None` when there is no record, when the key is invalid, and
    /// when the backend fails. Use [`lookup`](Self::lookup) to tell these
    /// apart.
    pub fn retrieve(&self, key: &str) -> Option<Vec<u8>> {
        self.lookup(key).ok().flatten()
    }

    /// Retrieve the secret under `key` as a string
    ///
    /// Returns `None` if the stored bytes are not valid UTF-8.
    pub fn retrieve_string(&self, key: &str) -> Option<String> {
        self.retrieve(key).and_then(|bytes| String::from_utf8(bytes).ok())
    }

    /// Check if a secret is stored under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.retrieve(key).is_some()
    }

    /// Delete the secret under `key`
    ///
    /// A key with no record is reported the same way as any other backend
    /// refusal, as `OperationFailed`.
    pub fn delete(&self, key: &str) -> SecretStoreResult<()> {
        let tag = self.tag_for(key)?;
        self.backend.remove(tag.as_bytes()).map_err(|e| {
            log_warn!(self.logger, "delete of '{}' failed: {}", tag, e);
            SecretStoreError::OperationFailed(format!("could not delete '{}': {}", tag, e))
        })?;
        log_debug!(self.logger, "deleted '{}'", tag);
        Ok(())
    }

    /// [`store`](Self::store) keyed by a `SecretKey`
    pub fn store_for<K: SecretKey + ?Sized>(&self, secret: &[u8], key: &K) -> SecretStoreResult<()> {
        self.store(secret, key.raw_key())
    }

    /// [`store_string`](Self::store_string) keyed by a `SecretKey`
    pub fn store_string_for<K: SecretKey + ?Sized>(&self, secret: &str, key: &K) -> SecretStoreResult<()> {
        self.store_string(secret, key.raw_key())
    }

    /// [`lookup`](Self::lookup) keyed by a `SecretKey`
    pub fn lookup_for<K: SecretKey + ?Sized>(&self, key: &K) -> SecretStoreResult<Option<Vec<u8>>> {
        self.lookup(key.raw_key())
    }

    /// [`retrieve`](Self::retrieve) keyed by a `SecretKey`
    pub fn retrieve_for<K: SecretKey + ?Sized>(&self, key: &K) -> Option<Vec<u8>> {
        self.retrieve(key.raw_key())
    }

    /// [`retrieve_string`](Self::retrieve_string) keyed by a `SecretKey`
    pub fn retrieve_string_for<K: SecretKey + ?Sized>(&self, key: &K) -> Option<String> {
        self.retrieve_string(key.raw_key())
    }

    /// [`delete`](Self::delete) keyed by a `SecretKey`
    pub fn delete_for<K: SecretKey + ?Sized>(&self, key: &K) -> SecretStoreResult<()> {
        self.delete(key.raw_key())
    }
}

impl std::fmt::Debug for SecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretStore")
            .field("domain", &self.domain)
            .field("backend", &self.backend.name())
            .finish()
    }
}
