use crate::error::{ContactsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "contacts.json";
const DEFAULT_EXPORT_FILE: &str = "contacts.csv";

/// Configuration for the contact book, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactsConfig {
    /// Contact file; relative paths are resolved against the home directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Default CSV export target; relative paths are resolved against the working directory
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            export_file: default_export_file(),
        }
    }
}

impl ContactsConfig {
    pub const KEYS: [&'static str; 2] = ["data-file", "export-file"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ContactsError::Io)?;
        let config: ContactsConfig =
            serde_json::from_str(&content).map_err(ContactsError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ContactsError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ContactsError::Serialization)?;
        fs::write(config_path, content).map_err(ContactsError::Io)?;
        Ok(())
    }

    pub fn data_path(&self, home: &Path) -> PathBuf {
        let path = Path::new(&self.data_file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            home.join(path)
        }
    }

    pub fn export_path(&self) -> PathBuf {
        PathBuf::from(&self.export_file)
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        match key {
            "data-file" => Ok(self.data_file.as_str()),
            "export-file" => Ok(self.export_file.as_str()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ContactsError::Config(format!("{} cannot be empty", key)));
        }
        match key {
            "data-file" => self.data_file = value.to_string(),
            "export-file" => self.export_file = value.to_string(),
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ContactsError {
    ContactsError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        ContactsConfig::KEYS.join(", ")
    ))
}
