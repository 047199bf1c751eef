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


//! Foundational crate for Sonar, the catalog-driven audio event browser.
//!
//! `sonar-core` owns the vocabulary shared by every other crate: what an asset
//! is, how it is identified in the host catalog, and the contracts the host's
//! catalog, streaming loader and object table must fulfil. It contains no
//! loading or indexing logic of its own.

#![warn(missing_docs)]

pub mod asset;
pub mod catalog;
pub mod config;
pub mod lifecycle;
pub mod utils;

pub use config::BrowserConfig;
pub use lifecycle::{LifecycleListener, LifecyclePhase};
pub use utils::timer::Stopwatch;
