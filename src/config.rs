use crate::classify::Rotation;
use crate::convert::DEFAULT_DELIMITER;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOCAL_CONFIG_FILE: &str = ".casecycle.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub delimiter: char,
    pub rotation: Rotation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            rotation: Rotation::Full,
        }
    }
}

/// Settings read from one config file; absent keys leave the layer below untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    pub delimiter: Option<char>,
    pub rotation: Option<Rotation>,
}

impl ConfigFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "reading config file");
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(delimiter: Option<char>, rotation: Option<Rotation>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(ConfigFile::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            config = config.merge(ConfigFile::from_file(&local_path)?);
        }

        config = config.merge(ConfigFile {
            delimiter,
            rotation,
        });

        config.validate()?;
        Ok(config)
    }

    fn merge(mut self, layer: ConfigFile) -> Self {
        if let Some(delimiter) = layer.delimiter {
            self.delimiter = delimiter;
        }
        if let Some(rotation) = layer.rotation {
            self.rotation = rotation;
        }
        self
    }

    /// The delimiter must be able to separate words without being part of one.
    pub fn validate(&self) -> Result<()> {
        let d = self.delimiter;
        if d.is_alphanumeric() || d.is_whitespace() || d.is_control() {
            return Err(Error::InvalidDelimiter(d));
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "casecycle").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
