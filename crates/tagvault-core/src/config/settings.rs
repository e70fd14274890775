//! Store settings and default-domain resolution

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::backend::DEFAULT_SERVICE;
use crate::error::DomainError;

/// Environment variable that overrides the default domain
pub const DOMAIN_ENV_VAR: &str = "TAGVAULT_DOMAIN";

/// Settings used to build a `SecretStore`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Namespace prefix; resolved from the host application when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Registered backend name
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Keychain service name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

fn default_backend() -> String {
    "keychain".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            domain: None,
            backend: default_backend(),
            service: None,
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = backend.into();
        self
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Service name the keychain backend will use
    pub fn service_name(&self) -> &str {
        self.service.as_deref().unwrap_or(DEFAULT_SERVICE)
    }

    /// The configured domain, or the host application's identifier
    pub fn resolve_domain(&self) -> Result<String, DomainError> {
        match self.domain.as_deref().map(str::trim) {
            Some("") => Err(DomainError::Empty),
            Some(domain) => Ok(domain.to_string()),
            None => resolve_default_domain(),
        }
    }
}

/// Resolve the host application's identifier
///
/// Resolution order:
/// 1. `TAGVAULT_DOMAIN` env var (trimmed, non-empty)
/// 2. File stem of the running executable
pub fn resolve_default_domain() -> Result<String, DomainError> {
    let exe = env::current_exe().ok();
    resolve_from(env::var(DOMAIN_ENV_VAR).ok(), exe.as_deref())
}

fn resolve_from(env_value: Option<String>, exe: Option<&Path>) -> Result<String, DomainError> {
    if let Some(value) = env_value {
        let value = value.trim();
        if !value.is_empty() {
            return Ok(value.to_string());
        }
    }

    exe.and_then(Path::file_stem)
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or(DomainError::Unresolved)
}

/// Errors that can occur while loading or saving configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.backend, "keychain");
        assert_eq!(config.domain, None);
        assert_eq!(config.service_name(), "tagvault");
    }

    #[test]
    fn test_builder() {
        let config = StoreConfig::new()
            .with_domain("com.example.app")
            .with_backend("memory")
            .with_service("example");
        assert_eq!(config.resolve_domain().unwrap(), "com.example.app");
        assert_eq!(config.backend, "memory");
        assert_eq!(config.service_name(), "example");
    }

    #[test]
    fn test_blank_domain_is_rejected() {
        let config = StoreConfig::new().with_domain("   ");
        assert_eq!(config.resolve_domain(), Err(DomainError::Empty));
    }

    #[test]
    fn test_resolve_prefers_env_value() {
        let exe = PathBuf::from("/usr/bin/my-tool");
        let domain = resolve_from(Some(" com.example.env ".to_string()), Some(&exe)).unwrap();
        assert_eq!(domain, "com.example.env");
    }

    #[test]
    fn test_resolve_falls_back_to_executable() {
        let exe = PathBuf::from("/opt/app/bin/my-tool.exe");
        assert_eq!(resolve_from(Some(String::new()), Some(&exe)).unwrap(), "my-tool");
        assert_eq!(resolve_from(None, Some(&exe)).unwrap(), "my-tool");
    }

    #[test]
    fn test_resolve_without_sources_is_unresolved() {
        assert_eq!(resolve_from(None, None), Err(DomainError::Unresolved));
        assert_eq!(resolve_from(None, Some(Path::new("/"))), Err(DomainError::Unresolved));
    }

    #[test]
    fn test_yaml_fills_defaults() {
        let config: StoreConfig = serde_yaml::from_str("domain: com.example\n").unwrap();
        assert_eq!(config.domain.as_deref(), Some("com.example"));
        assert_eq!(config.backend, "keychain");
    }
}
