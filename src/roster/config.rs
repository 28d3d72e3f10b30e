use crate::error::{RosterError, Result};
use crate::session::Credentials;
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "roster.json";

/// Configuration for roster, stored as `roster.json` in the scope directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Record file name, relative to the scope directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// The one credential pair the login gate accepts
    #[serde(default)]
    pub credentials: Credentials,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            credentials: Credentials::default(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content)
            .map_err(|e| RosterError::Config(format!("{}: {}", config_path.display(), e)))
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Where the record file lives for a given scope directory.
    pub fn data_path(&self, scope_dir: &Path) -> PathBuf {
        let file = Path::new(&self.data_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            scope_dir.join(file)
        }
    }

    /// Display value for a key. The password is never shown.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "username" => Some(self.credentials.username.clone()),
            "password" => Some("*".repeat(self.credentials.password.len())),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = value.to_string();
            }
            "username" => self.credentials.username = value.to_string(),
            "password" => self.credentials.password = value.to_string(),
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["data-file", "username", "password"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.data_file, "data_mahasiswa.json");
        assert_eq!(config.credentials, Credentials::default());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = RosterConfig::default();
        config.set("data-file", "students.json").unwrap();
        config.set("username", "admin").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, "students.json");
        assert_eq!(loaded.credentials.username, "admin");
        assert_eq!(loaded.credentials.password, "123");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"data_file": "x.json"}"#).unwrap();
        let loaded = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, "x.json");
        assert_eq!(loaded.credentials, Credentials::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{").unwrap();
        assert!(matches!(
            RosterConfig::load(dir.path()),
            Err(RosterError::Config(_))
        ));
    }

    #[test]
    fn test_data_path_relative_and_absolute() {
        let mut config = RosterConfig::default();
        let scope_dir = Path::new("/srv/roster");
        assert_eq!(
            config.data_path(scope_dir),
            PathBuf::from("/srv/roster/data_mahasiswa.json")
        );
        config.data_file = "/tmp/other.json".to_string();
        assert_eq!(config.data_path(scope_dir), PathBuf::from("/tmp/other.json"));
    }

    #[test]
    fn test_password_is_masked() {
        let config = RosterConfig::default();
        assert_eq!(config.get("password").as_deref(), Some("***"));
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut config = RosterConfig::default();
        assert!(config.set("theme", "dark").is_err());
        assert!(config.set("data-file", "  ").is_err());
    }
}
