//! System keychain credential backend
//!
//! Uses the OS keychain for secure secret storage:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring, KWallet)

use keyring::Entry;

use super::traits::{BackendError, BackendResult, CredentialBackend};
use crate::logging::file_logger as log;

/// Service name used when none is configured
pub const DEFAULT_SERVICE: &str = "tagvault";

const MODULE: &str = "KeychainBackend";

const AVAILABILITY_ACCOUNT: &str = "__tagvault_availability_check__";

/// Credential backend on the system keychain
///
/// Each record is a keychain entry under this backend's service name, with
/// the tag as the entry's account. The keychain keeps the value encrypted and
/// enforces its own access control.
///
/// `insert` reads the entry and then writes it, and the keychain write
/// overwrites. Two concurrent inserts of one new tag can therefore both
/// succeed, with the later value kept, instead of one of them seeing
/// `BackendError::Duplicate` as it would on `MemoryBackend`.
///
/// # Example
///
/// ```no_run
/// use tagvault_core::backend::{CredentialBackend, KeychainBackend};
///
/// let backend = KeychainBackend::new();
/// backend.insert(b"com.example.app.token", b"s3cret").unwrap();
/// assert!(backend.find_exact(b"com.example.app.token").unwrap().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct KeychainBackend {
    service_name: String,
}

impl KeychainBackend {
    /// Create a keychain backend with the default service name "tagvault"
    pub fn new() -> Self {
        Self::with_service(DEFAULT_SERVICE)
    }

    /// Create a keychain backend with a custom service name
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service_name: service.into(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Get a keyring entry for the given tag
    fn entry(&self, tag: &[u8]) -> BackendResult<Entry> {
        let account = std::str::from_utf8(tag)
            .map_err(|e| BackendError::InvalidTag(format!("tag is not valid UTF-8: {}", e)))?;
        Entry::new(&self.service_name, account).map_err(map_keyring_error)
    }

    fn read(&self, entry: &Entry) -> BackendResult<Option<Vec<u8>>> {
        match entry.get_secret() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(map_keyring_error(e)),
        }
    }
}

impl Default for KeychainBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a keychain call got an answer from the credential store
///
/// A missing entry still means the store responded.
fn keychain_answered(result: &keyring::Result<()>) -> bool {
    !matches!(
        result,
        Err(keyring::Error::NoStorageAccess(_)) | Err(keyring::Error::PlatformFailure(_))
    )
}

fn map_keyring_error(err: keyring::Error) -> BackendError {
    match err {
        keyring::Error::NoEntry => BackendError::NotFound,
        keyring::Error::NoStorageAccess(e) => BackendError::Unavailable(e.to_string()),
        keyring::Error::PlatformFailure(e) => BackendError::Unavailable(e.to_string()),
        keyring::Error::TooLong(attr, limit) => {
            BackendError::InvalidTag(format!("{} exceeds {} characters", attr, limit))
        }
        keyring::Error::Invalid(attr, reason) => {
            BackendError::InvalidTag(format!("{}: {}", attr, reason))
        }
        other => BackendError::Other(other.to_string()),
    }
}

impl CredentialBackend for KeychainBackend {
    fn name(&self) -> &str {
        "keychain"
    }

    fn is_available(&self) -> bool {
        // Entry creation is local; only a read reaches the keychain daemon
        let answer = Entry::new(&self.service_name, AVAILABILITY_ACCOUNT)
            .and_then(|entry| entry.get_secret().map(|_| ()));
        let available = keychain_answered(&answer);
        if let Err(e) = answer {
            if !available {
                log::warn(MODULE, &format!("is_available() = false, error: {:?}", e));
            }
        }
        available
    }

    fn find_exact(&self, tag: &[u8]) -> BackendResult<Option<Vec<u8>>> {
        let entry = self.entry(tag)?;
        let found = self.read(&entry)?;
        log::debug(
            MODULE,
            &format!(
                "find_exact() service='{}' found={} len={}",
                self.service_name,
                found.is_some(),
                found.as_ref().map_or(0, Vec::len)
            ),
        );
        Ok(found)
    }

    fn insert(&self, tag: &[u8], value: &[u8]) -> BackendResult<()> {
        let entry = self.entry(tag)?;
        if self.read(&entry)?.is_some() {
            log::debug(MODULE, "insert() refused, record exists");
            return Err(BackendError::Duplicate);
        }
        entry.set_secret(value).map_err(|e| {
            log::error(MODULE, &format!("insert() set_secret failed: {:?}", e));
            map_keyring_error(e)
        })
    }

    fn update(&self, tag: &[u8], value: &[u8]) -> BackendResult<()> {
        let entry = self.entry(tag)?;
        if self.read(&entry)?.is_none() {
            log::debug(MODULE, "update() found no record");
            return Err(BackendError::NotFound);
        }
        entry.set_secret(value).map_err(|e| {
            log::error(MODULE, &format!("update() set_secret failed: {:?}", e));
            map_keyring_error(e)
        })
    }

    fn remove(&self, tag: &[u8]) -> BackendResult<()> {
        let entry = self.entry(tag)?;
        entry.delete_credential().map_err(map_keyring_error)?;
        log::info(MODULE, &format!("remove() deleted entry from service '{}'", self.service_name));
        Ok(())
    }
}
