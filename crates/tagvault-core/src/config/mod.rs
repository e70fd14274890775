//! Store configuration
//!
//! - `StoreConfig`: domain, backend and service selection
//! - `ConfigFile`: YAML file-based (user/workspace level) persistence
//! - `resolve_default_domain`: the host application's identifier

mod settings;
mod file;

pub use settings::{StoreConfig, ConfigError, ConfigResult, resolve_default_domain, DOMAIN_ENV_VAR};
pub use file::{ConfigFile, ConfigLevel};
