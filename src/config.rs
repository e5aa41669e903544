use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use bikestats_io::{City, ReaderConfig};

/// Top-level bikestats configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BikestatsConfig {
    /// Dataset location settings.
    #[serde(default)]
    pub data: DataConfig,
}

/// Where the city CSV exports live.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Directory searched for the default per-city file names.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// Optional file override for the Chicago export.
    #[serde(default)]
    pub chicago: Option<PathBuf>,
    /// Optional file override for the New York City export.
    #[serde(default)]
    pub new_york_city: Option<PathBuf>,
    /// Optional file override for the Washington export.
    #[serde(default)]
    pub washington: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            chicago: None,
            new_york_city: None,
            washington: None,
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

impl BikestatsConfig {
    /// Builds the reader configuration, with `data_dir` (from the CLI)
    /// taking precedence over the configured directory.
    pub fn reader_config(&self, data_dir: Option<&Path>) -> ReaderConfig {
        let dir = data_dir.unwrap_or(&self.data.dir);
        let mut reader = ReaderConfig::default().with_data_dir(dir);

        let overrides = [
            (City::Chicago, &self.data.chicago),
            (City::NewYorkCity, &self.data.new_york_city),
            (City::Washington, &self.data.washington),
        ];
        for (city, path) in overrides {
            if let Some(path) = path {
                reader = reader.with_city_file(city, path);
            }
        }
        reader
    }
}

/// Loads configuration from `path`.
///
/// A missing file is not an error: the built-in defaults apply, so the
/// tool runs without any configuration present. A file that exists but
/// fails to parse is an error.
pub fn load(path: &Path) -> Result<BikestatsConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(BikestatsConfig::default());
    }

    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}
