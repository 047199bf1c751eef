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
use sonar_core::{
    asset::{AssetClass, AssetData},
    catalog::{AssetCatalog, CatalogQuery},
};
use std::collections::HashMap;

/// The serializable content of an [`InMemoryCatalog`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Every registered class with its parent, if any.
    pub classes: Vec<(AssetClass, Option<AssetClass>)>,
    /// Every registered entry, in registration order.
    pub entries: Vec<AssetData>,
}

/// A catalog built up front and queried read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    /// Maps each class to its parent class.
    parents: HashMap<AssetClass, Option<AssetClass>>,
    entries: Vec<AssetData>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `class`, optionally as a subclass of `parent`.
    pub fn register_class(&mut self, class: AssetClass, parent: Option<AssetClass>) {
        self.parents.insert(class, parent);
    }

    /// Registers an entry. Its class does not need to be registered; an
    /// unregistered class simply has no parent.
    pub fn add_asset(&mut self, asset: AssetData) {
        self.entries.push(asset);
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entry is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuilds a catalog from a snapshot.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            parents: snapshot.classes.into_iter().collect(),
            entries: snapshot.entries,
        }
    }

    /// Captures the catalog content. Classes are listed in name order.
    pub fn snapshot(&self) -> CatalogSnapshot {
        let mut classes: Vec<_> = self
            .parents
            .iter()
            .map(|(class, parent)| (class.clone(), parent.clone()))
            .collect();
        classes.sort();
        CatalogSnapshot {
            classes,
            entries: self.entries.clone(),
        }
    }

    /// Decodes a catalog from bincode-encoded [`CatalogSnapshot`] bytes.
    ///
    /// # Errors
    /// Returns a `DecodeError` if the bytes are not a valid snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::error::DecodeError> {
        let config = bincode::config::standard();
        let (snapshot, _): (CatalogSnapshot, _) =
            bincode::serde::decode_from_slice(bytes, config)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Encodes the catalog as bincode [`CatalogSnapshot`] bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        bincode::serde::encode_to_vec(self.snapshot(), bincode::config::standard())
    }

    fn is_same_or_subclass(&self, class: &AssetClass, base: &AssetClass) -> bool {
        let mut current = Some(class);
        // Bounded walk so a malformed hierarchy with a cycle still terminates.
        for _ in 0..=self.parents.len() {
            match current {
                Some(c) if c == base => return true,
                Some(c) => current = self.parents.get(c).and_then(Option::as_ref),
                None => return false,
            }
        }
        false
    }
}

fn is_under(package_name: &str, base_path: &str) -> bool {
    let base = base_path.trim_end_matches('/');
    package_name
        .strip_prefix(base)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

impl AssetCatalog for InMemoryCatalog {
    fn get_assets(&self, query: &CatalogQuery) -> Vec<AssetData> {
        self.entries
            .iter()
            .filter(|entry| {
                if query.recursive_classes {
                    self.is_same_or_subclass(&entry.class, &query.class)
                } else {
                    entry.class == query.class
                }
            })
            .filter(|entry| {
                query
                    .base_path
                    .as_deref()
                    .map_or(true, |base| is_under(&entry.package_name, base))
            })
            .cloned()
            .collect()
    }
}
