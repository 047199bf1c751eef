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
use sonar_core::asset::{Asset, AssetPath, CatalogObject};

/// A loaded audio event object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioEvent {
    /// The object path the event was loaded from.
    pub path: AssetPath,
    /// The event's short name.
    pub name: String,
    /// Set on the class-default instance the host creates for the type itself.
    pub class_default: bool,
}

impl AudioEvent {
    /// Creates a regular event whose name is taken from its path.
    pub fn new(path: AssetPath) -> Self {
        let name = path.asset_name().to_string();
        Self {
            path,
            name,
            class_default: false,
        }
    }

    /// Creates the class-default placeholder for `path`.
    pub fn class_default(path: AssetPath) -> Self {
        Self {
            class_default: true,
            ..Self::new(path)
        }
    }
}

impl Asset for AudioEvent {}

impl CatalogObject for AudioEvent {
    fn name(&self) -> &str {
        &self.name
    }

    fn path_name(&self) -> &str {
        self.path.as_str()
    }

    fn is_class_default(&self) -> bool {
        self.class_default
    }
}
