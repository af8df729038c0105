//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for persisted paste settings
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the settings file.
    ///
    /// # Returns
    /// An empty config when the file does not exist yet
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Write the settings file, creating parent directories.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the settings file
    fn path(&self) -> PathBuf;

    /// Whether the settings file exists
    fn exists(&self) -> bool;

    /// Write a settings file holding the defaults.
    /// Fails with [`ConfigError::AlreadyExists`] if one is present.
    async fn init(&self) -> Result<(), ConfigError>;
}
