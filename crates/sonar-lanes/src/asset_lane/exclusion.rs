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


use sonar_core::{asset::AssetData, BrowserConfig};

/// Decides which catalog entries are left out of a bulk load.
pub trait AssetExclusion: Send + Sync {
    /// Returns `true` if `asset` must not be loaded.
    fn is_excluded(&self, asset: &AssetData) -> bool;
}

impl<F> AssetExclusion for F
where
    F: Fn(&AssetData) -> bool + Send + Sync,
{
    fn is_excluded(&self, asset: &AssetData) -> bool {
        self(asset)
    }
}

/// Keeps every entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExclusion;

impl AssetExclusion for NoExclusion {
    fn is_excluded(&self, _asset: &AssetData) -> bool {
        false
    }
}

/// Rejects entries whose package name starts with a reserved prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedPrefixExclusion {
    prefixes: Vec<String>,
}

impl ReservedPrefixExclusion {
    /// Creates an exclusion for the given package prefixes.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Uses the prefixes listed in `config`.
    pub fn from_config(config: &BrowserConfig) -> Self {
        Self::new(config.excluded_prefixes.iter().cloned())
    }

    /// The reserved prefixes.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for ReservedPrefixExclusion {
    fn default() -> Self {
        Self::from_config(&BrowserConfig::default())
    }
}

impl AssetExclusion for ReservedPrefixExclusion {
    fn is_excluded(&self, asset: &AssetData) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| asset.package_name.starts_with(prefix.as_str()))
    }
}
