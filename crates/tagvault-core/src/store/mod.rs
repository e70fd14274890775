//! The domain-scoped secret store

mod secret_store;

pub use secret_store::SecretStore;
