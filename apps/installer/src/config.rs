//! Installer configuration.
//!
//! Stored as TOML at `$XDG_CONFIG_HOME/gwfinstall/installer.toml`, falling
//! back to `~/.config/gwfinstall/installer.toml`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Installer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Wait for Enter before exiting.
    #[serde(default = "default_true")]
    pub pause_on_exit: bool,

    /// `User-Agent` header sent with downloads.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Directory for downloaded and extracted files (empty = system temp).
    #[serde(default)]
    pub temp_dir: String,
}

fn default_true() -> bool {
    true
}

fn default_user_agent() -> String {
    format!("gwfinstall/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pause_on_exit: default_true(),
            user_agent: default_user_agent(),
            temp_dir: String::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the default location.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Loads configuration from `path`, writing defaults there if the file
    /// does not exist yet.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("invalid configuration in {}", path.display()))?;
            tracing::debug!(path = %path.display(), "configuration loaded");
            Ok(config)
        } else {
            let config = Config::default();
            if let Err(e) = config.save_to(path) {
                tracing::warn!(path = %path.display(), error = %e, "could not write default configuration");
            }
            Ok(config)
        }
    }

    /// Saves the configuration to `path`.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Directory for temporary downloads and staged archive entries.
    pub fn staging_dir(&self) -> PathBuf {
        if self.temp_dir.is_empty() {
            std::env::temp_dir()
        } else {
            PathBuf::from(&self.temp_dir)
        }
    }
}

/// Returns the configuration file path.
fn config_path() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
            PathBuf::from(home).join(".config")
        });
    base.join("gwfinstall").join("installer.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.pause_on_exit);
        assert!(config.user_agent.starts_with("gwfinstall/"));
        assert!(config.temp_dir.is_empty());
    }

    #[test]
    fn config_partial_toml() {
        let config: Config = toml::from_str("pause_on_exit = false").unwrap();
        assert!(!config.pause_on_exit);
        assert!(config.user_agent.starts_with("gwfinstall/"));
        assert!(config.temp_dir.is_empty());
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = Config {
            pause_on_exit: false,
            user_agent: "custom/1.0".into(),
            temp_dir: "/var/tmp/gwf".into(),
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert!(!parsed.pause_on_exit);
        assert_eq!(parsed.user_agent, "custom/1.0");
        assert_eq!(parsed.temp_dir, "/var/tmp/gwf");
    }

    #[test]
    fn load_missing_writes_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("gwfinstall").join("installer.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(config.pause_on_exit);
        assert!(path.exists());

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.user_agent, config.user_agent);
    }

    #[test]
    fn load_invalid_toml_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("installer.toml");
        std::fs::write(&path, "pause_on_exit = \"sometimes\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("invalid configuration"));
    }

    #[test]
    fn staging_dir_defaults_to_system_temp() {
        assert_eq!(Config::default().staging_dir(), std::env::temp_dir());

        let config = Config {
            temp_dir: "/var/tmp/gwf".into(),
            ..Config::default()
        };
        assert_eq!(config.staging_dir(), PathBuf::from("/var/tmp/gwf"));
    }

    #[test]
    fn config_path_not_empty() {
        let path = config_path();
        assert!(path.ends_with("gwfinstall/installer.toml"));
    }
}
