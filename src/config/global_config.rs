//! Global configuration management
//!
//! Provides configuration stored in ~/.mtree/config.toml

use crate::core::error::{MtreeError, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Delimiter the original command-line tools split their item list on
pub const DEFAULT_DELIMITER: &str = ", ";
/// File a single rendered tree is written to
pub const DEFAULT_TREE_FILE: &str = "merkle.tree";
/// File a numbered pair of rendered trees is written to
pub const DEFAULT_TREES_FILE: &str = "merkle.trees";

/// Global configuration for mtree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Input configuration
    pub input: InputConfig,
    /// Output configuration
    pub output: OutputConfig,
}

/// How item lists given on the command line are read
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Separator between items in a single argument
    pub delimiter: Option<String>,
}

/// Where and how results are written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Rendering file for `build`
    pub tree_file: Option<String>,
    /// Rendering file for `consistency`
    pub trees_file: Option<String>,
    /// Print JSON instead of human-readable output
    pub json: Option<bool>,
}

/// Configuration value types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    String(String),
    Boolean(bool),
}

/// Configuration key for setting values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    InputDelimiter,
    OutputTreeFile,
    OutputTreesFile,
    OutputJson,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::InputDelimiter,
        ConfigKey::OutputTreeFile,
        ConfigKey::OutputTreesFile,
        ConfigKey::OutputJson,
    ];

    pub fn from_str(key: &str) -> Option<Self> {
        match key {
            "input.delimiter" => Some(ConfigKey::InputDelimiter),
            "output.tree_file" => Some(ConfigKey::OutputTreeFile),
            "output.trees_file" => Some(ConfigKey::OutputTreesFile),
            "output.json" => Some(ConfigKey::OutputJson),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            ConfigKey::InputDelimiter => "input.delimiter",
            ConfigKey::OutputTreeFile => "output.tree_file",
            ConfigKey::OutputTreesFile => "output.trees_file",
            ConfigKey::OutputJson => "output.json",
        }
    }
}

impl GlobalConfig {
    /// Load global configuration from disk
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| MtreeError::configuration(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration, using defaults if the file cannot be read
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring unreadable configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Save global configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| MtreeError::configuration(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the global configuration file
    pub fn get_config_path() -> Result<PathBuf> {
        let user_dirs = UserDirs::new().ok_or(MtreeError::HomeDirectoryNotFound)?;
        Ok(user_dirs.home_dir().join(".mtree").join("config.toml"))
    }

    /// Get a configuration value
    pub fn get(&self, key: ConfigKey) -> Option<ConfigValue> {
        match key {
            ConfigKey::InputDelimiter => self.input.delimiter.clone().map(ConfigValue::String),
            ConfigKey::OutputTreeFile => self.output.tree_file.clone().map(ConfigValue::String),
            ConfigKey::OutputTreesFile => self.output.trees_file.clone().map(ConfigValue::String),
            ConfigKey::OutputJson => self.output.json.map(ConfigValue::Boolean),
        }
    }

    /// Set a configuration value
    pub fn set(&mut self, key: ConfigKey, value: ConfigValue) -> Result<()> {
        match (key, value) {
            (ConfigKey::InputDelimiter, ConfigValue::String(delimiter)) => {
                if delimiter.is_empty() {
                    return Err(MtreeError::configuration(
                        "input.delimiter must not be empty",
                    ));
                }
                self.input.delimiter = Some(delimiter);
            }
            (ConfigKey::OutputTreeFile, ConfigValue::String(file)) => {
                self.output.tree_file = Some(file);
            }
            (ConfigKey::OutputTreesFile, ConfigValue::String(file)) => {
                self.output.trees_file = Some(file);
            }
            (ConfigKey::OutputJson, ConfigValue::Boolean(json)) => {
                self.output.json = Some(json);
            }
            (ConfigKey::OutputJson, _) => {
                return Err(MtreeError::configuration("output.json must be a boolean"));
            }
            (key, _) => {
                return Err(MtreeError::configuration(format!(
                    "{} must be a string",
                    key.to_str()
                )));
            }
        }
        Ok(())
    }

    /// Unset a configuration value
    pub fn unset(&mut self, key: ConfigKey) {
        match key {
            ConfigKey::InputDelimiter => self.input.delimiter = None,
            ConfigKey::OutputTreeFile => self.output.tree_file = None,
            ConfigKey::OutputTreesFile => self.output.trees_file = None,
            ConfigKey::OutputJson => self.output.json = None,
        }
    }

    /// List all explicitly set configuration values
    pub fn list(&self) -> Vec<(String, String)> {
        ConfigKey::ALL
            .iter()
            .filter_map(|key| self.get(*key).map(|value| (key.to_str().to_string(), value.to_string())))
            .collect()
    }

    pub fn delimiter(&self) -> &str {
        self.input.delimiter.as_deref().unwrap_or(DEFAULT_DELIMITER)
    }

    pub fn tree_file(&self) -> PathBuf {
        PathBuf::from(self.output.tree_file.as_deref().unwrap_or(DEFAULT_TREE_FILE))
    }

    pub fn trees_file(&self) -> PathBuf {
        PathBuf::from(self.output.trees_file.as_deref().unwrap_or(DEFAULT_TREES_FILE))
    }

    pub fn json(&self) -> bool {
        self.output.json.unwrap_or(false)
    }
}

impl ConfigValue {
    /// Interpret a raw command-line value for `key`
    pub fn parse_for(key: ConfigKey, raw: &str) -> Result<Self> {
        match key {
            ConfigKey::OutputJson => raw
                .parse::<bool>()
                .map(ConfigValue::Boolean)
                .map_err(|_| MtreeError::configuration("output.json must be true or false")),
            _ => Ok(ConfigValue::String(raw.to_string())),
        }
    }
}

impl std::fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigValue::String(s) => write!(f, "{}", s),
            ConfigValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_creation_and_defaults() {
        let config = GlobalConfig::default();

        assert_eq!(config.delimiter(), ", ");
        assert_eq!(config.tree_file(), PathBuf::from("merkle.tree"));
        assert_eq!(config.trees_file(), PathBuf::from("merkle.trees"));
        assert!(!config.json());
        assert!(config.list().is_empty());
    }

    #[test]
    fn test_config_set_and_get() -> Result<()> {
        let mut config = GlobalConfig::default();

        config.set(
            ConfigKey::InputDelimiter,
            ConfigValue::String(";".to_string()),
        )?;
        config.set(ConfigKey::OutputJson, ConfigValue::Boolean(true))?;

        assert_eq!(config.delimiter(), ";");
        assert!(config.json());
        assert_eq!(
            config.get(ConfigKey::InputDelimiter),
            Some(ConfigValue::String(";".to_string()))
        );

        config.unset(ConfigKey::InputDelimiter);
        assert_eq!(config.delimiter(), ", ");

        Ok(())
    }

    #[test]
    fn test_config_rejects_wrong_types() {
        let mut config = GlobalConfig::default();
        assert!(config
            .set(ConfigKey::OutputJson, ConfigValue::String("yes".to_string()))
            .is_err());
        assert!(config
            .set(ConfigKey::OutputTreeFile, ConfigValue::Boolean(true))
            .is_err());
        assert!(config
            .set(ConfigKey::InputDelimiter, ConfigValue::String(String::new()))
            .is_err());
        assert!(ConfigValue::parse_for(ConfigKey::OutputJson, "maybe").is_err());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("config.toml");

        assert_eq!(GlobalConfig::load_from(&path)?, GlobalConfig::default());

        let mut config = GlobalConfig::default();
        config.set(
            ConfigKey::OutputTreesFile,
            ConfigValue::String("out.trees".to_string()),
        )?;
        config.save_to(&path)?;

        let loaded = GlobalConfig::load_from(&path)?;
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.list(),
            vec![("output.trees_file".to_string(), "out.trees".to_string())]
        );
        Ok(())
    }

    #[test]
    fn test_config_key_parsing() {
        for key in ConfigKey::ALL {
            assert_eq!(ConfigKey::from_str(key.to_str()), Some(key));
        }
        assert_eq!(ConfigKey::from_str("custom.key"), None);
    }
}
