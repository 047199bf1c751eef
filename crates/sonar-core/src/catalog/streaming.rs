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


use crate::asset::AssetPath;
use serde::{Deserialize, Serialize};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Scheduling priority of a bulk load request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPriority {
    /// Queued behind every pending high priority request.
    Normal,
    /// Served before any normal priority request.
    #[default]
    High,
}

/// Callback invoked once every object of a request has been processed.
///
/// It runs on whatever thread the loader completes the request on.
pub type LoadCallback = Box<dyn FnOnce() + Send + 'static>;

/// Errors raised when a bulk load request cannot be submitted.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The loader's worker is gone and no longer accepts requests.
    #[error("streaming loader has shut down")]
    Shutdown,
}

/// Tracks the state of a submitted request.
///
/// There is no way to cancel a request; the handle only reports completion.
#[derive(Debug, Clone, Default)]
pub struct StreamableHandle {
    complete: Arc<AtomicBool>,
}

impl StreamableHandle {
    /// Creates a handle for a request that has not completed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the request as completed. Called by the loader.
    pub fn set_complete(&self) {
        self.complete.store(true, Ordering::Release);
    }

    /// Returns `true` once the loader has finished the request.
    pub fn is_complete(&self) -> bool {
        self.complete.load(Ordering::Acquire)
    }
}

/// The host's background bulk loader.
pub trait StreamableLoader: Send + Sync {
    /// Loads every object in `paths` asynchronously at `priority`, then calls
    /// `on_complete` once, whether or not individual objects loaded.
    ///
    /// Returns as soon as the request is queued.
    fn request_async_load(
        &self,
        paths: Vec<AssetPath>,
        priority: LoadPriority,
        on_complete: LoadCallback,
    ) -> Result<StreamableHandle, LoadError>;
}
