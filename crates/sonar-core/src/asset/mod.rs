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


//! Provides the foundational traits and primitive types for Sonar's asset model.
//!
//! The key components are:
//! - The [`Asset`] trait: a marker for all types that can live behind an [`AssetHandle`].
//! - The [`CatalogObject`] trait: what a loaded catalog object must expose to be
//!   indexed and searched.
//! - [`AssetPath`], [`AssetClass`] and [`AssetData`]: the serializable identity of
//!   catalog entries, decoupled from any loaded data.

mod class;
mod data;
mod handle;
mod path;

pub use class::*;
pub use data::*;
pub use handle::*;
pub use path::*;

/// A marker trait for types that can be managed by the asset system.
///
/// The supertraits enforce that an asset can be loaded on one thread and read
/// from any other, which is how the streaming loader hands objects over.
///
/// # Examples
///
/// ```
/// use sonar_core::asset::Asset;
///
/// struct Bank {
///     // ... fields
/// }
///
/// impl Asset for Bank {}
/// ```
pub trait Asset: Send + Sync + 'static {}

/// A loaded object that originates from the host catalog.
///
/// This is what the index stores and what queries match against.
pub trait CatalogObject: Asset {
    /// The short object name, used as the index sort key.
    fn name(&self) -> &str;

    /// The full object path, used for keyword matching.
    fn path_name(&self) -> &str;

    /// Whether this object is the class-default placeholder of its type.
    ///
    /// Class defaults are never indexed.
    fn is_class_default(&self) -> bool {
        false
    }
}
