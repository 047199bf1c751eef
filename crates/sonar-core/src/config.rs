// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Browser configuration, read from a `Browser.toml` file.

use crate::catalog::LoadPriority;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The package prefix excluded by default: rig assets register audio events
/// that are not meant to be browsed.
pub const DEFAULT_EXCLUDED_PREFIX: &str = "/ControlRig";

/// How many appends the index batches before its first provisional view.
/// Later views wait until the staged entries doubled, which bounds the
/// copies of a batch of `n` objects to about `2n` handles.
pub const DEFAULT_PUBLISH_INTERVAL: usize = 64;

/// Errors raised while reading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not valid TOML or has unexpected fields.
    #[error("invalid browser config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunables for discovery and indexing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrowserConfig {
    /// Package prefixes whose entries are never loaded.
    pub excluded_prefixes: Vec<String>,
    /// Only entries under this package path are loaded, when set.
    pub base_path: Option<String>,
    /// Whether subclasses of the browsed class are included.
    pub search_subclasses: bool,
    /// Priority of the bulk load request.
    pub priority: LoadPriority,
    /// Minimum appends between two provisional index publications.
    pub publish_interval: usize,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            excluded_prefixes: vec![DEFAULT_EXCLUDED_PREFIX.to_string()],
            base_path: None,
            search_subclasses: true,
            priority: LoadPriority::High,
            publish_interval: DEFAULT_PUBLISH_INTERVAL,
        }
    }
}

impl BrowserConfig {
    /// Parses a configuration from TOML text. Missing fields keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(text)?;
        config.publish_interval = config.publish_interval.max(1);
        Ok(config)
    }

    /// Reads the configuration at `path`.
    ///
    /// ## Arguments
    /// * `path` - The `Browser.toml` file to read.
    ///
    /// ## Returns
    /// The parsed configuration, or the defaults if the file does not exist.
    /// An unreadable file or invalid TOML is a [`ConfigError`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!(
                    "No browser config at {}, using defaults",
                    path.display()
                );
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_defaults() {
        let config = BrowserConfig::from_toml_str("").unwrap();
        assert_eq!(config, BrowserConfig::default());
        assert_eq!(config.excluded_prefixes, vec!["/ControlRig".to_string()]);
        assert_eq!(config.priority, LoadPriority::High);
    }

    #[test]
    fn overrides_are_applied() {
        let config = BrowserConfig::from_toml_str(
            r#"
            excluded_prefixes = ["/ControlRig", "/Engine"]
            base_path = "/Game/Audio"
            search_subclasses = false
            priority = "normal"
            publish_interval = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.excluded_prefixes.len(), 2);
        assert_eq!(config.base_path.as_deref(), Some("/Game/Audio"));
        assert!(!config.search_subclasses);
        assert_eq!(config.priority, LoadPriority::Normal);
        assert_eq!(config.publish_interval, 1, "interval is clamped to 1");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = BrowserConfig::from_toml_str("fuzzy = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BrowserConfig::load(dir.path().join("Browser.toml")).unwrap();
        assert_eq!(config, BrowserConfig::default());
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Browser.toml");
        std::fs::write(&path, "base_path = \"/Game\"\n").unwrap();

        let config = BrowserConfig::load(&path).unwrap();
        assert_eq!(config.base_path.as_deref(), Some("/Game"));
        assert!(config.search_subclasses);
    }
}
