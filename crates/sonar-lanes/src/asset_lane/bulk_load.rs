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


use super::{AssetExclusion, LoadOutcome, LoadTicket};
use sonar_core::{
    asset::{AssetData, AssetPath},
    catalog::{AssetCatalog, CatalogQuery, LoadCallback, LoadError, LoadPriority, StreamableLoader},
    Stopwatch,
};
use sonar_telemetry::LoadTimings;
use std::sync::Arc;

/// Discovers catalog entries and loads them in one background request.
#[derive(Clone)]
pub struct BulkLoadLane {
    catalog: Arc<dyn AssetCatalog>,
    loader: Arc<dyn StreamableLoader>,
}

impl BulkLoadLane {
    /// Creates a lane over the given catalog and loader.
    pub fn new(catalog: Arc<dyn AssetCatalog>, loader: Arc<dyn StreamableLoader>) -> Self {
        Self { catalog, loader }
    }

    /// Loads every entry matching `query` that `exclude` keeps, then runs
    /// `on_loaded` with the requested paths.
    ///
    /// Returns once the request is queued. `on_loaded` runs exactly once, on
    /// the loader's completion thread, whether or not individual objects
    /// loaded. An empty query result still issues a (trivially complete)
    /// request.
    ///
    /// ## Arguments
    /// * `query` - The class, subclass flag and base path to discover.
    /// * `exclude` - Entries it rejects are never requested.
    /// * `priority` - Priority of the single bulk request.
    /// * `on_loaded` - The continuation, given every requested path.
    ///
    /// ## Returns
    /// A [`LoadTicket`] resolving once `on_loaded` finished.
    ///
    /// ## Errors
    /// [`LoadError::Shutdown`] if the loader no longer accepts requests.
    /// `on_loaded` is then dropped without running.
    pub fn load_all<F>(
        &self,
        query: &CatalogQuery,
        exclude: &dyn AssetExclusion,
        priority: LoadPriority,
        on_loaded: F,
    ) -> Result<LoadTicket, LoadError>
    where
        F: FnOnce(&[AssetPath]) + Send + 'static,
    {
        let class_name = query.class.name().to_string();
        log::info!("Looking for '{}'...", class_name);

        let mut stopwatch = Stopwatch::new();
        let entries = self.catalog.get_assets(query);
        let discovered = entries.len();
        let paths: Vec<AssetPath> = entries
            .iter()
            .filter(|entry| !exclude.is_excluded(entry))
            .map(AssetData::object_path)
            .collect();
        log::info!(
            "Loading {} '{}' ({} excluded)...",
            paths.len(),
            class_name,
            discovered - paths.len()
        );

        let (sender, receiver) = flume::bounded(1);
        let requested = paths.clone();
        let discovery = stopwatch.lap();

        let on_complete: LoadCallback = Box::new(move || {
            let loading = stopwatch.lap();
            on_loaded(&requested);
            let processing = stopwatch.lap();

            let timings = LoadTimings {
                discovery,
                loading,
                processing,
            };
            timings.log_summary(requested.len(), &class_name);

            if sender
                .send(LoadOutcome {
                    paths: requested,
                    timings,
                })
                .is_err()
            {
                log::debug!("Load ticket for '{}' was dropped before completion", class_name);
            }
        });

        let handle = self.loader.request_async_load(paths, priority, on_complete)?;
        Ok(LoadTicket::new(receiver, handle))
    }
}
