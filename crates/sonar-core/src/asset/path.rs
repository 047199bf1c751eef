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


use serde::{Deserialize, Serialize};
use std::fmt;

/// A serializable reference to an object registered in the host catalog.
///
/// The path has the form `<package>.<asset>`, for example
/// `/Game/Audio/A_Explosion.A_Explosion`. It identifies an object without
/// holding it: resolving a path to loaded data is the job of an
/// [`ObjectResolver`](crate::catalog::ObjectResolver).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetPath(String);

impl AssetPath {
    /// Wraps an already formatted object path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Builds the object path of `asset_name` inside `package_name`.
    pub fn from_parts(package_name: &str, asset_name: &str) -> Self {
        Self(format!("{package_name}.{asset_name}"))
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The package part of the path, everything before the asset separator.
    pub fn package_name(&self) -> &str {
        match self.asset_separator() {
            Some(dot) => &self.0[..dot],
            None => &self.0,
        }
    }

    /// The asset part of the path.
    ///
    /// Falls back to the last path segment when the path carries no explicit
    /// asset separator.
    pub fn asset_name(&self) -> &str {
        match self.asset_separator() {
            Some(dot) => &self.0[dot + 1..],
            None => self.0.rsplit('/').next().unwrap_or(&self.0),
        }
    }

    fn asset_separator(&self) -> Option<usize> {
        let segment_start = self.0.rfind('/').map_or(0, |slash| slash + 1);
        self.0[segment_start..].find('.').map(|dot| segment_start + dot)
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for AssetPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}
