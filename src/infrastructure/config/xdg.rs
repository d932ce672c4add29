//! XDG config store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Overrides the config file location
pub const CONFIG_PATH_ENV: &str = "CLIP_MONITOR_CONFIG";

/// XDG-compliant config store
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Create a config store at `$CLIP_MONITOR_CONFIG`, or the XDG default path
    pub fn new() -> Self {
        match std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            Some(path) => Self::with_path(path),
            None => Self::with_path(Self::default_path()),
        }
    }

    /// `<config dir>/clip-monitor/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("clip-monitor")
            .join("config.toml")
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse TOML content into AppConfig
    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Serialize AppConfig to TOML
    fn to_toml(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config)
            .map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            // Return empty config if file doesn't exist
            return Ok(AppConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = Self::to_toml(config)?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.to_string_lossy().to_string(),
            ));
        }

        let defaults = AppConfig::defaults();
        self.save(&defaults).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_xdg() {
        let path = XdgConfigStore::default_path();
        assert!(path.to_string_lossy().contains("clip-monitor"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn custom_path() {
        let store = XdgConfigStore::with_path("/custom/path/config.toml");
        assert_eq!(store.path(), PathBuf::from("/custom/path/config.toml"));
    }

    #[test]
    fn parse_toml_flat_format() {
        let content = r#"
host_url = "http://127.0.0.1:7878"
refresh_interval_ms = 500
clipboard_tool = "wl-copy"
"#;

        let config = XdgConfigStore::parse_toml(content).unwrap();
        assert_eq!(config.host_url, Some("http://127.0.0.1:7878".to_string()));
        assert_eq!(config.refresh_interval_ms, Some(500));
        assert_eq!(config.clipboard_tool, Some("wl-copy".to_string()));
        assert!(config.time_format.is_none());
    }

    #[test]
    fn parse_toml_rejects_wrong_types() {
        let result = XdgConfigStore::parse_toml("refresh_interval_ms = \"fast\"");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let config = store.load().await.unwrap();
        assert!(config.host_url.is_none());
        assert!(config.refresh_interval_ms.is_none());
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("nested").join("config.toml"));
        let config = AppConfig {
            host_url: Some("http://host".to_string()),
            time_format: Some("%H:%M".to_string()),
            ..Default::default()
        };

        store.save(&config).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded.host_url, config.host_url);
        assert_eq!(loaded.time_format, config.time_format);
        assert!(loaded.html_output.is_none());
    }

    #[tokio::test]
    async fn init_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));

        store.init().await.unwrap();
        assert!(store.exists());
        assert_eq!(store.load().await.unwrap().refresh_interval_ms, Some(2000));
        assert!(matches!(
            store.init().await,
            Err(ConfigError::AlreadyExists(_))
        ));
    }
}
