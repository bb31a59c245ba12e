// Mon Oct 19 2026 - Alex

use crate::discovery::Dialect;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    pub url: String,
    pub dialect: Dialect,
    /// A previously fetched payload for this source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<PathBuf>,
}

impl SourceConfig {
    pub fn new(name: &str, url: &str, dialect: Dialect) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            dialect,
            snapshot: None,
        }
    }

    pub fn with_snapshot(mut self, snapshot: PathBuf) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    /// Snapshot path, relative ones taken from `base`.
    pub fn resolve_snapshot(&self, base: &Path) -> Option<PathBuf> {
        let snapshot = self.snapshot.as_ref()?;
        if snapshot.is_absolute() {
            Some(snapshot.clone())
        } else {
            Some(base.join(snapshot))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    pub sources: Vec<SourceConfig>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            sources: vec![
                SourceConfig::new(
                    "markmods",
                    "https://www.markmods.com/swat4serverlist/",
                    Dialect::Plain,
                ),
                SourceConfig::new("mytteam", "https://mytteam.com/", Dialect::Plain),
                SourceConfig::new(
                    "swat4stats-master",
                    "https://master.swat4stats.com/api/servers",
                    Dialect::MasterServer,
                ),
            ],
        }
    }
}

impl DiscoveryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: SourceConfig) -> Self {
        self.sources.push(source);
        self
    }

    pub fn source(&self, name: &str) -> Option<&SourceConfig> {
        self.sources.iter().find(|s| s.name == name)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !ext.eq_ignore_ascii_case("json") {
            return Err(ConfigError::UnsupportedFormat(ext.to_string()));
        }

        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;

        log::debug!("loaded {} discovery sources from {}", config.sources.len(), path.display());
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        if !ext.eq_ignore_ascii_case("json") {
            return Err(ConfigError::UnsupportedFormat(ext.to_string()));
        }

        let contents = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.is_empty() {
            return Err(ConfigError::Validation("at least one source is required".to_string()));
        }

        let mut seen = HashSet::new();
        for source in &self.sources {
            if source.name.trim().is_empty() {
                return Err(ConfigError::Validation("source name must not be empty".to_string()));
            }
            if !seen.insert(source.name.as_str()) {
                return Err(ConfigError::Validation(format!("duplicate source name: {}", source.name)));
            }
        }

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Validation error: {0}")]
    Validation(String),
}
