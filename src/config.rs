use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct InspireConfig {
    pub storage: StorageConfig,
    pub log: LogConfig,
    pub history: HistoryConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    /// Most entries kept in the seen-quote history; 0 keeps everything.
    pub max_entries: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_inspire_dir()
            .join("inspire.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_entries: 500 }
    }
}

/// Returns `~/.inspire/`, or `./.inspire/` when there is no home directory.
pub fn default_inspire_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".inspire")
}

/// Returns the default config file path: `~/.inspire/config.toml`
pub fn default_config_path() -> PathBuf {
    default_inspire_dir().join("config.toml")
}

impl InspireConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            InspireConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (INSPIRE_DB, INSPIRE_LOG_LEVEL,
    /// INSPIRE_HISTORY_MAX).
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("INSPIRE_DB") {
            self.storage.db_path = val;
        }
        if let Some(val) = lookup("INSPIRE_LOG_LEVEL") {
            self.log.level = val;
        }
        if let Some(val) = lookup("INSPIRE_HISTORY_MAX") {
            match val.trim().parse() {
                Ok(max) => self.history.max_entries = max,
                Err(_) => tracing::warn!(value = %val, "ignoring non-numeric INSPIRE_HISTORY_MAX"),
            }
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_config_is_valid() {
        let config = InspireConfig::default();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.history.max_entries, 500);
        assert!(config.storage.db_path.ends_with("inspire.db"));
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[log]
level = "debug"

[storage]
db_path = "/tmp/test.db"
"#;
        let config: InspireConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.storage.db_path, "/tmp/test.db");
        // defaults still apply for unset sections
        assert_eq!(config.history.max_entries, 500);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(InspireConfig::load_from(tmp.path().join("absent.toml")).is_ok());
    }

    #[test]
    fn load_from_rejects_bad_toml() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[history]\nmax_entries = \"lots\"\n").unwrap();
        assert!(InspireConfig::load_from(&path).is_err());
    }

    #[test]
    fn overrides_apply() {
        let vars = HashMap::from([
            ("INSPIRE_DB", "/tmp/override.db"),
            ("INSPIRE_LOG_LEVEL", "trace"),
            ("INSPIRE_HISTORY_MAX", "25"),
        ]);
        let mut config = InspireConfig::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.storage.db_path, "/tmp/override.db");
        assert_eq!(config.log.level, "trace");
        assert_eq!(config.history.max_entries, 25);
    }

    #[test]
    fn non_numeric_history_max_ignored() {
        let vars = HashMap::from([("INSPIRE_HISTORY_MAX", "lots")]);
        let mut config = InspireConfig::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.history.max_entries, 500);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn expand_tilde_leaves_absolute_paths() {
        assert_eq!(expand_tilde("/var/db.sqlite"), PathBuf::from("/var/db.sqlite"));
    }
}
