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


use anyhow::{bail, Result};
use sonar_agents::browser_agent::BrowserAgent;
use sonar_core::asset::{AssetClass, AssetData, AssetPath, CatalogObject};
use sonar_core::{BrowserConfig, LifecycleListener, LifecyclePhase};
use sonar_data::assets::AudioEvent;
use sonar_infra::{InMemoryCatalog, ObjectStore, ThreadedStreamableLoader};
use std::sync::Arc;
use std::time::Duration;

const PACKAGES: &[&str] = &[
    "/Game/Audio/Weapons/Play_Explosion_Large",
    "/Game/Audio/Weapons/Play_Explosion_Small",
    "/Game/Audio/Foley/Play_Footstep_Grass",
    "/Game/Audio/Foley/Play_Footstep_Metal",
    "/Game/Audio/Ambience/Play_Wind_Loop",
    "/Game/Audio/Ambience/Stop_Wind_Loop",
    "/ControlRig/Audio/Play_Rig_Debug",
];

const QUERIES: &[&str] = &["", "Footstep", "Play_ Explosion", "wind", "Ambience Stop"];

fn build_catalog() -> InMemoryCatalog {
    let event = AssetClass::new("AudioEvent");
    let mut catalog = InMemoryCatalog::new();
    catalog.register_class(event.clone(), None);
    for package in PACKAGES {
        let name = package.rsplit('/').next().unwrap_or(*package);
        catalog.add_asset(AssetData::new(*package, name, event.clone()));
    }
    catalog
}

fn main() -> Result<()> {
    sonar_telemetry::init_logging("info");

    let config = BrowserConfig::load("Browser.toml")?;
    let store = Arc::new(ObjectStore::new());
    let loader = ThreadedStreamableLoader::new(store.clone(), |path: &AssetPath| {
        Some(AudioEvent::new(path.clone()))
    })?;

    let mut agent = BrowserAgent::<AudioEvent>::new(
        AssetClass::new("AudioEvent"),
        Arc::new(build_catalog()),
        Arc::new(loader),
        store,
        config,
    );

    for phase in [
        LifecyclePhase::Construction,
        LifecyclePhase::Initialization,
        LifecyclePhase::PostInitialization,
    ] {
        agent.dispatch_lifecycle_event(phase)?;
    }

    if !agent.wait_until_ready(Duration::from_secs(10)) {
        bail!("Audio events were not indexed in time");
    }
    if let Some(outcome) = agent.load_outcome() {
        log::info!(
            "Indexed {} of {} requested events in {:.3} ms",
            agent.index().len(),
            outcome.paths.len(),
            outcome.timings.total().as_secs_f64() * 1000.0
        );
    }

    for query in QUERIES {
        let entries = agent.filtered_entries(query);
        log::info!("Query {:?} matched {} events", query, entries.len());
        for entry in entries {
            log::info!("  {}", entry.path_name());
        }
    }
    Ok(())
}
