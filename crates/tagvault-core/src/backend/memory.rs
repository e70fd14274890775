//! In-memory credential backend

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::{BackendError, BackendResult, CredentialBackend};

/// In-memory backend for testing and ephemeral use
///
/// Follows the same record semantics as a platform credential store:
/// `insert` refuses existing tags, `update` and `remove` refuse missing ones.
/// Records are lost when the backend is dropped.
///
/// # Thread Safety
///
/// The record map sits behind a `RwLock`, so each primitive is atomic.
///
/// # Example
///
/// ```
/// use tagvault_core::backend::{CredentialBackend, MemoryBackend};
///
/// let backend = MemoryBackend::new();
/// backend.insert(b"app.token", b"s3cret").unwrap();
/// assert_eq!(backend.find_exact(b"app.token").unwrap(), Some(b"s3cret".to_vec()));
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    records: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryBackend {
    /// Create a new empty memory backend
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Create a memory backend with initial records
    pub fn with_records(initial: HashMap<Vec<u8>, Vec<u8>>) -> Self {
        Self {
            records: RwLock::new(initial),
        }
    }

    /// Remove every record
    pub fn clear(&self) {
        self.records.write().clear();
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether a record exists for `tag`
    pub fn contains(&self, tag: &[u8]) -> bool {
        self.records.read().contains_key(tag)
    }
}

impl CredentialBackend for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    fn find_exact(&self, tag: &[u8]) -> BackendResult<Option<Vec<u8>>> {
        Ok(self.records.read().get(tag).cloned())
    }

    fn insert(&self, tag: &[u8], value: &[u8]) -> BackendResult<()> {
        let mut records = self.records.write();
        if records.contains_key(tag) {
            return Err(BackendError::Duplicate);
        }
        records.insert(tag.to_vec(), value.to_vec());
        Ok(())
    }

    fn update(&self, tag: &[u8], value: &[u8]) -> BackendResult<()> {
        let mut records = self.records.write();
        match records.get_mut(tag) {
            Some(existing) => {
                *existing = value.to_vec();
                Ok(())
            }
            None => Err(BackendError::NotFound),
        }
    }

    fn remove(&self, tag: &[u8]) -> BackendResult<()> {
        self.records
            .write()
            .remove(tag)
            .map(|_| ())
            .ok_or(BackendError::NotFound)
    }
}

impl Clone for MemoryBackend {
    fn clone(&self) -> Self {
        Self {
            records: RwLock::new(self.records.read().clone()),
        }
    }
}
