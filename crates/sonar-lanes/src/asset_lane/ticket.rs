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


use sonar_core::{asset::AssetPath, catalog::StreamableHandle};
use sonar_telemetry::LoadTimings;
use std::sync::OnceLock;
use std::time::Duration;

/// The result of a finished bulk load, delivered once the continuation ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Every path that was requested, whether or not it loaded.
    pub paths: Vec<AssetPath>,
    /// How long each stage took.
    pub timings: LoadTimings,
}

/// A one-shot receipt for a bulk load issued by [`BulkLoadLane`](super::BulkLoadLane).
///
/// The loader delivers the outcome once; the ticket keeps it, so every later
/// `wait` returns it again. Tickets cannot cancel the load.
#[derive(Debug)]
pub struct LoadTicket {
    receiver: flume::Receiver<LoadOutcome>,
    handle: StreamableHandle,
    outcome: OnceLock<LoadOutcome>,
}

impl LoadTicket {
    pub(crate) fn new(receiver: flume::Receiver<LoadOutcome>, handle: StreamableHandle) -> Self {
        Self {
            receiver,
            handle,
            outcome: OnceLock::new(),
        }
    }

    fn keep(&self, received: Option<LoadOutcome>) -> Option<LoadOutcome> {
        match received {
            Some(outcome) => Some(self.outcome.get_or_init(|| outcome).clone()),
            None => self.outcome.get().cloned(),
        }
    }

    /// Returns `true` once the loader finished loading, even if the
    /// continuation is still running.
    pub fn is_loaded(&self) -> bool {
        self.handle.is_complete()
    }

    /// Returns the outcome if the continuation already finished.
    pub fn try_outcome(&self) -> Option<LoadOutcome> {
        if let Some(outcome) = self.outcome.get() {
            return Some(outcome.clone());
        }
        self.keep(self.receiver.try_recv().ok())
    }

    /// Blocks until the continuation finished.
    ///
    /// Returns `None` if the continuation will never finish, for instance
    /// because it panicked or the loader dropped the request.
    pub fn wait(&self) -> Option<LoadOutcome> {
        if let Some(outcome) = self.outcome.get() {
            return Some(outcome.clone());
        }
        self.keep(self.receiver.recv().ok())
    }

    /// Like [`wait`](Self::wait), giving up after `timeout`.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<LoadOutcome> {
        if let Some(outcome) = self.outcome.get() {
            return Some(outcome.clone());
        }
        self.keep(self.receiver.recv_timeout(timeout).ok())
    }

    /// Asynchronously waits until the continuation finished.
    pub async fn wait_async(&self) -> Option<LoadOutcome> {
        if let Some(outcome) = self.outcome.get() {
            return Some(outcome.clone());
        }
        self.keep(self.receiver.recv_async().await.ok())
    }
}
