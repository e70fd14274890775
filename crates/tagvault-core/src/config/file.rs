//! File-based store configuration (YAML)
//!
//! Supports user-level (~/.config/tagvault/config.yaml) and workspace-level (.config/tagvault/config.yaml) config.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::settings::{ConfigResult, StoreConfig};

/// Config level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    /// User-level config (~/.config/tagvault/config.yaml)
    User,
    /// Workspace-level config (.config/tagvault/config.yaml in workspace root)
    Workspace,
}

impl ConfigLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::User => "user",
            ConfigLevel::Workspace => "workspace",
        }
    }
}

/// A `StoreConfig` persisted as YAML
///
/// A missing file reads as `StoreConfig::default()`.
///
/// # Example
///
/// ```no_run
/// use tagvault_core::config::ConfigFile;
///
/// let config = ConfigFile::user().get().unwrap();
/// println!("backend: {}", config.backend);
/// ```
pub struct ConfigFile {
    path: PathBuf,
    level: ConfigLevel,
    cache: RwLock<Option<StoreConfig>>,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>, level: ConfigLevel) -> Self {
        Self {
            path: path.into(),
            level,
            cache: RwLock::new(None),
        }
    }

    /// User-level config (~/.config/tagvault/config.yaml)
    pub fn user() -> Self {
        // XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        let path = config_dir.join("tagvault").join("config.yaml");
        Self::new(path, ConfigLevel::User)
    }

    /// Workspace-level config (.config/tagvault/config.yaml)
    pub fn workspace(workspace_root: impl AsRef<Path>) -> Self {
        let path = workspace_root.as_ref().join(".config").join("tagvault").join("config.yaml");
        Self::new(path, ConfigLevel::Workspace)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> ConfigLevel {
        self.level
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> ConfigResult<StoreConfig> {
        if !self.path.exists() {
            return Ok(StoreConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(StoreConfig::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Cached config, loading from disk on first use
    pub fn get(&self) -> ConfigResult<StoreConfig> {
        if let Some(config) = self.cache.read().as_ref() {
            return Ok(config.clone());
        }

        let config = self.load()?;
        *self.cache.write() = Some(config.clone());
        Ok(config)
    }

    /// Reload config from disk (invalidate cache)
    pub fn reload(&self) -> ConfigResult<StoreConfig> {
        let config = self.load()?;
        *self.cache.write() = Some(config.clone());
        Ok(config)
    }

    /// Write config to disk, creating parent directories as needed
    pub fn save(&self, config: &StoreConfig) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(config)?;
        fs::write(&self.path, content)?;

        *self.cache.write() = Some(config.clone());
        Ok(())
    }

    /// Copy the current file next to itself with a `.backup` suffix
    pub fn backup(&self) -> ConfigResult<Option<PathBuf>> {
        if !self.exists() {
            return Ok(None);
        }

        let backup_path = self.path.with_extension("yaml.backup");
        fs::copy(&self.path, &backup_path)?;
        Ok(Some(backup_path))
    }

    pub fn export_json(&self) -> ConfigResult<String> {
        let config = self.get()?;
        Ok(serde_json::to_string_pretty(&config)?)
    }

    /// Replace the stored config with one given as JSON
    pub fn import_json(&self, json: &str) -> ConfigResult<()> {
        let config: StoreConfig = serde_json::from_str(json)?;
        self.save(&config)
    }
}

impl std::fmt::Debug for ConfigFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigFile")
            .field("path", &self.path)
            .field("level", &self.level)
            .field("exists", &self.exists())
            .finish()
    }
}
