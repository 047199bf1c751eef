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


use super::ObjectStore;
use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender};
use sonar_core::{
    asset::{Asset, AssetHandle, AssetPath},
    catalog::{LoadCallback, LoadError, LoadPriority, StreamableHandle, StreamableLoader},
};
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

/// Materializes the object at a path, or returns `None` if it cannot be loaded.
pub type ObjectFactory<A> = Box<dyn Fn(&AssetPath) -> Option<A> + Send + Sync>;

struct LoadRequest {
    paths: Vec<AssetPath>,
    priority: LoadPriority,
    handle: StreamableHandle,
    on_complete: LoadCallback,
}

/// A streaming loader backed by one worker thread.
///
/// Requests are served one at a time; pending high priority requests are
/// always served before normal ones. Objects are produced by the factory and
/// stored in the shared [`ObjectStore`], after which the request's callback
/// runs on the worker thread.
pub struct ThreadedStreamableLoader<A: Asset> {
    sender: Option<Sender<LoadRequest>>,
    store: Arc<ObjectStore<A>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl<A: Asset> ThreadedStreamableLoader<A> {
    /// Starts the worker thread.
    ///
    /// # Errors
    /// Fails if the operating system refuses to spawn the thread.
    pub fn new(
        store: Arc<ObjectStore<A>>,
        factory: impl Fn(&AssetPath) -> Option<A> + Send + Sync + 'static,
    ) -> Result<Self> {
        let (sender, receiver) = crossbeam_channel::unbounded();
        let worker_store = Arc::clone(&store);
        let factory: ObjectFactory<A> = Box::new(factory);

        let worker = thread::Builder::new()
            .name("sonar-streaming".to_string())
            .spawn(move || run_worker(receiver, worker_store, factory))
            .context("Failed to spawn the streaming worker thread")?;

        Ok(Self {
            sender: Some(sender),
            store,
            worker: Some(worker),
        })
    }

    /// The object table this loader fills.
    pub fn store(&self) -> &Arc<ObjectStore<A>> {
        &self.store
    }
}

impl<A: Asset> StreamableLoader for ThreadedStreamableLoader<A> {
    fn request_async_load(
        &self,
        paths: Vec<AssetPath>,
        priority: LoadPriority,
        on_complete: LoadCallback,
    ) -> Result<StreamableHandle, LoadError> {
        let handle = StreamableHandle::new();

        // Nothing to stream: complete right away on the calling thread.
        if paths.is_empty() {
            handle.set_complete();
            on_complete();
            return Ok(handle);
        }

        let sender = self.sender.as_ref().ok_or(LoadError::Shutdown)?;
        sender
            .send(LoadRequest {
                paths,
                priority,
                handle: handle.clone(),
                on_complete,
            })
            .map_err(|_| LoadError::Shutdown)?;
        Ok(handle)
    }
}

impl<A: Asset> Drop for ThreadedStreamableLoader<A> {
    fn drop(&mut self) {
        // Closing the queue lets the worker finish pending requests and exit.
        self.sender.take();

        if let Some(worker) = self.worker.take() {
            if worker.thread().id() == thread::current().id() {
                log::debug!("Streaming loader dropped from its own worker, not joining");
                return;
            }
            if worker.join().is_err() {
                log::error!("Streaming worker thread panicked");
            }
        }
    }
}

/// Pending requests, split by priority.
#[derive(Default)]
struct PendingQueue {
    high: VecDeque<LoadRequest>,
    normal: VecDeque<LoadRequest>,
}

impl PendingQueue {
    fn push(&mut self, request: LoadRequest) {
        match request.priority {
            LoadPriority::High => self.high.push_back(request),
            LoadPriority::Normal => self.normal.push_back(request),
        }
    }

    fn pop(&mut self) -> Option<LoadRequest> {
        self.high.pop_front().or_else(|| self.normal.pop_front())
    }

    fn is_empty(&self) -> bool {
        self.high.is_empty() && self.normal.is_empty()
    }
}

fn run_worker<A: Asset>(
    receiver: Receiver<LoadRequest>,
    store: Arc<ObjectStore<A>>,
    factory: ObjectFactory<A>,
) {
    log::info!("Streaming worker started.");
    let mut pending = PendingQueue::default();

    loop {
        if pending.is_empty() {
            match receiver.recv() {
                Ok(request) => pending.push(request),
                Err(_) => break,
            }
        }
        for request in receiver.try_iter() {
            pending.push(request);
        }

        if let Some(request) = pending.pop() {
            process(request, &store, &factory);
        }
    }

    log::info!("Streaming worker stopped.");
}

fn process<A: Asset>(request: LoadRequest, store: &ObjectStore<A>, factory: &ObjectFactory<A>) {
    let total = request.paths.len();
    let mut loaded = 0;

    for path in &request.paths {
        if store.contains(path) {
            loaded += 1;
            continue;
        }
        match factory(path) {
            Some(object) => {
                store.insert(path.clone(), AssetHandle::new(object));
                loaded += 1;
            }
            None => log::warn!("Failed to load '{}'", path),
        }
    }
    log::debug!("Streamed {}/{} objects", loaded, total);

    request.handle.set_complete();
    if panic::catch_unwind(AssertUnwindSafe(request.on_complete)).is_err() {
        log::error!("Load completion callback panicked");
    }
}
