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


use super::{AssetClass, AssetPath};
use serde::{Deserialize, Serialize};

/// A catalog entry: everything the catalog knows about an object without
/// loading it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetData {
    /// The package the object lives in, e.g. `/Game/Audio/A_Explosion`.
    pub package_name: String,

    /// The object name inside its package, e.g. `A_Explosion`.
    pub asset_name: String,

    /// The concrete class of the object.
    pub class: AssetClass,
}

impl AssetData {
    /// Creates a new catalog entry.
    pub fn new(
        package_name: impl Into<String>,
        asset_name: impl Into<String>,
        class: AssetClass,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            asset_name: asset_name.into(),
            class,
        }
    }

    /// The serializable path used to request and resolve this object.
    pub fn object_path(&self) -> AssetPath {
        AssetPath::from_parts(&self.package_name, &self.asset_name)
    }
}
