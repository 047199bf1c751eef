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


use sonar_core::{
    asset::{Asset, AssetHandle, AssetPath},
    catalog::ObjectResolver,
};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// The table of objects currently in memory, keyed by path.
///
/// Written by the streaming worker, read by anyone resolving a path.
#[derive(Debug)]
pub struct ObjectStore<A: Asset> {
    objects: RwLock<HashMap<AssetPath, AssetHandle<A>>>,
}

impl<A: Asset> ObjectStore<A> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a loaded object, replacing any previous object at `path`.
    pub fn insert(&self, path: AssetPath, object: AssetHandle<A>) {
        self.objects
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, object);
    }

    /// Returns the object at `path`, if loaded.
    pub fn get(&self, path: &AssetPath) -> Option<AssetHandle<A>> {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
    }

    /// Checks whether an object is loaded at `path`.
    pub fn contains(&self, path: &AssetPath) -> bool {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(path)
    }

    /// Number of loaded objects.
    pub fn len(&self) -> usize {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A: Asset> Default for ObjectStore<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Asset> ObjectResolver<A> for ObjectStore<A> {
    fn resolve(&self, path: &AssetPath) -> Option<AssetHandle<A>> {
        self.get(path)
    }
}
