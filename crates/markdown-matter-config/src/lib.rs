use markdown_matter_engine::{FrontMatterOptions, OptionsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid front matter options: {0}")]
    InvalidOptions(#[from] OptionsError),
}

/// User settings for the `markdown-matter` binary.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Marker unit repeated to open and close a front-matter block.
    pub marker: String,
    /// Minimum number of marker units in the opening run.
    pub min_markers: usize,
    /// Indent JSON output.
    pub pretty: bool,
    /// File or directory to read when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: FrontMatterOptions::DEFAULT_MARKER.to_string(),
            min_markers: FrontMatterOptions::DEFAULT_MIN_MARKERS,
            pretty: true,
            default_path: None,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the default document path
        config.default_path = config
            .default_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-matter");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Validated parser options built from `marker` and `min_markers`.
    pub fn front_matter_options(&self) -> Result<FrontMatterOptions, ConfigError> {
        Ok(FrontMatterOptions::new(self.marker.as_str(), self.min_markers)?)
    }

    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
