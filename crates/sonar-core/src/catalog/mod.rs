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


//! Contracts for the host collaborators the browser is built on.
//!
//! The browser never talks to a concrete asset registry or streaming system.
//! It is handed implementations of:
//! - [`AssetCatalog`]: enumerates catalog entries by class.
//! - [`StreamableLoader`]: loads a batch of objects in the background.
//! - [`ObjectResolver`]: turns a path into a loaded object, if there is one.
//!
//! `sonar-infra` provides in-memory implementations of all three.

mod streaming;

pub use streaming::*;

use crate::asset::{Asset, AssetClass, AssetData, AssetHandle, AssetPath};

/// Describes which entries an [`AssetCatalog`] enumeration should return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// The class to enumerate.
    pub class: AssetClass,
    /// Whether subclasses of `class` are included.
    pub recursive_classes: bool,
    /// Restricts results to packages under this path when set.
    pub base_path: Option<String>,
}

impl CatalogQuery {
    /// Enumerates `class` and all of its subclasses, anywhere in the catalog.
    pub fn for_class(class: AssetClass) -> Self {
        Self {
            class,
            recursive_classes: true,
            base_path: None,
        }
    }

    /// Restricts the query to packages under `base_path`.
    pub fn under(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// Sets whether subclasses are included.
    pub fn with_subclasses(mut self, recursive: bool) -> Self {
        self.recursive_classes = recursive;
        self
    }
}

/// The host's asset registry.
pub trait AssetCatalog: Send + Sync {
    /// Returns every entry matching `query`.
    ///
    /// An empty result is valid and not an error.
    fn get_assets(&self, query: &CatalogQuery) -> Vec<AssetData>;
}

/// The host's object table: resolves a path to an object already in memory.
pub trait ObjectResolver<A: Asset>: Send + Sync {
    /// Returns the loaded object at `path`, or `None` if it was never loaded
    /// or failed to load.
    fn resolve(&self, path: &AssetPath) -> Option<AssetHandle<A>>;
}
