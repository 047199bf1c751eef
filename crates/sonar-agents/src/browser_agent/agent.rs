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


use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use sonar_core::asset::{AssetClass, AssetHandle, CatalogObject};
use sonar_core::catalog::{AssetCatalog, CatalogQuery, ObjectResolver, StreamableLoader};
use sonar_core::{BrowserConfig, LifecycleListener, LifecyclePhase};
use sonar_data::assets::AssetIndex;
use sonar_lanes::asset_lane::{
    AssetExclusion, BulkLoadLane, LoadOutcome, LoadTicket, ReservedPrefixExclusion,
};
use sonar_lanes::index_lane::ingest_batch;
use sonar_lanes::search_lane::filter_entries;

/// Discovers, loads and indexes every catalog object of one class, then
/// serves keyword queries over them.
///
/// The index is filled once per agent lifetime. Queries may be issued from
/// any thread through [`BrowserAgent::index`] while the load is in flight;
/// they see provisional results until the index is ready.
pub struct BrowserAgent<A: CatalogObject> {
    class: AssetClass,
    config: BrowserConfig,
    index: Arc<AssetIndex<A>>,
    lane: BulkLoadLane,
    resolver: Arc<dyn ObjectResolver<A>>,
    exclusion: Box<dyn AssetExclusion>,
    ticket: Option<LoadTicket>,
}

impl<A: CatalogObject> BrowserAgent<A> {
    /// Creates an agent browsing `class`.
    ///
    /// Entries under the prefixes of `config.excluded_prefixes` are skipped
    /// unless another exclusion is set with [`with_exclusion`](Self::with_exclusion).
    pub fn new(
        class: AssetClass,
        catalog: Arc<dyn AssetCatalog>,
        loader: Arc<dyn StreamableLoader>,
        resolver: Arc<dyn ObjectResolver<A>>,
        config: BrowserConfig,
    ) -> Self {
        let exclusion = Box::new(ReservedPrefixExclusion::from_config(&config));
        Self {
            class,
            config,
            index: Arc::new(AssetIndex::new()),
            lane: BulkLoadLane::new(catalog, loader),
            resolver,
            exclusion,
            ticket: None,
        }
    }

    /// Replaces the exclusion applied to catalog entries.
    pub fn with_exclusion(mut self, exclusion: impl AssetExclusion + 'static) -> Self {
        self.exclusion = Box::new(exclusion);
        self
    }

    /// Issues the bulk load. The index fills in the background.
    ///
    /// Calling this again after a load was issued does nothing. A request the
    /// loader refused leaves the agent unloaded, so `load` can be retried.
    ///
    /// ## Errors
    /// Fails if the loader no longer accepts requests.
    pub fn load(&mut self) -> Result<()> {
        if self.ticket.is_some() {
            log::warn!("BrowserAgent: '{}' is already loaded or loading", self.class);
            return Ok(());
        }

        let writer = self
            .index
            .writer(self.config.publish_interval)
            .ok_or_else(|| anyhow!("Index for '{}' was already filled", self.class))?;

        let mut query = CatalogQuery::for_class(self.class.clone())
            .with_subclasses(self.config.search_subclasses);
        if let Some(base_path) = &self.config.base_path {
            query = query.under(base_path.clone());
        }

        let resolver = Arc::clone(&self.resolver);
        let ticket = self
            .lane
            .load_all(
                &query,
                self.exclusion.as_ref(),
                self.config.priority,
                move |paths| {
                    ingest_batch(writer, resolver.as_ref(), paths);
                },
            )
            .with_context(|| format!("Failed to request loading of '{}'", self.class))?;

        self.ticket = Some(ticket);
        Ok(())
    }

    /// Returns the entries whose path contains every word of `query`.
    ///
    /// See [`filter_entries`] for the matching rules.
    pub fn filtered_entries(&self, query: &str) -> Vec<AssetHandle<A>> {
        filter_entries(&self.index, query)
    }

    /// The shared index, for readers on other threads.
    pub fn index(&self) -> Arc<AssetIndex<A>> {
        Arc::clone(&self.index)
    }

    /// The class this agent browses.
    pub fn class(&self) -> &AssetClass {
        &self.class
    }

    /// Returns `true` once every loaded object is indexed and sorted.
    pub fn is_ready(&self) -> bool {
        self.index.is_ready()
    }

    /// The receipt of the issued load, if any.
    pub fn ticket(&self) -> Option<&LoadTicket> {
        self.ticket.as_ref()
    }

    /// The outcome of the issued load, once its continuation finished.
    pub fn load_outcome(&self) -> Option<LoadOutcome> {
        self.ticket.as_ref().and_then(LoadTicket::try_outcome)
    }

    /// Blocks until the load continuation finished or `timeout` elapses.
    ///
    /// The load outcome stays available through [`load_outcome`](Self::load_outcome)
    /// and the ticket afterwards.
    ///
    /// ## Arguments
    /// * `timeout` - The longest time to block.
    ///
    /// ## Returns
    /// `false` on timeout or if no load was issued.
    pub fn wait_until_ready(&self, timeout: Duration) -> bool {
        // The ticket resolves after the continuation, so the outcome is
        // already recorded when this returns `true`.
        match &self.ticket {
            Some(ticket) => {
                ticket.wait_timeout(timeout);
                self.index.is_ready()
            }
            None => false,
        }
    }
}

impl<A: CatalogObject> LifecycleListener for BrowserAgent<A> {
    type Error = anyhow::Error;

    fn dispatch_lifecycle_event(&mut self, phase: LifecyclePhase) -> Result<()> {
        log::info!("Dispatching phase {} on '{}' browser", phase, self.class);

        if phase == LifecyclePhase::PostInitialization {
            self.load()?;
        }
        Ok(())
    }
}
