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
    asset::{AssetPath, CatalogObject},
    catalog::ObjectResolver,
};
use sonar_data::assets::{IndexWriter, IngestOutcome};

/// Tally of one ingestion batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Objects appended to the index.
    pub added: usize,
    /// Paths that did not resolve to a loaded object.
    pub unresolved: usize,
    /// Class-default placeholders that were skipped.
    pub class_defaults: usize,
}

impl IngestReport {
    fn record(&mut self, outcome: IngestOutcome) {
        match outcome {
            IngestOutcome::Added => self.added += 1,
            IngestOutcome::Unresolved => self.unresolved += 1,
            IngestOutcome::ClassDefault => self.class_defaults += 1,
        }
    }
}

/// Resolves `path` and appends the object to the index if it is a real entry.
///
/// Unresolved paths and class defaults are skipped without error.
pub fn ingest_path<A: CatalogObject>(
    writer: &mut IndexWriter<A>,
    resolver: &dyn ObjectResolver<A>,
    path: &AssetPath,
) -> IngestOutcome {
    match resolver.resolve(path) {
        None => {
            log::debug!("'{}' did not resolve to a loaded object", path);
            writer.ingest(None)
        }
        Some(object) => {
            if !object.is_class_default() {
                log::info!("Processing {}", object.name());
            }
            writer.ingest(Some(object))
        }
    }
}

/// Ingests every path in order, then finalizes the index.
///
/// ## Arguments
/// * `writer` - The index writer, consumed by the final sort and publication.
/// * `resolver` - Looks up the objects the loader materialized.
/// * `paths` - The requested paths, in request order.
///
/// ## Returns
/// How many objects were added and why the others were skipped.
pub fn ingest_batch<A: CatalogObject>(
    mut writer: IndexWriter<A>,
    resolver: &dyn ObjectResolver<A>,
    paths: &[AssetPath],
) -> IngestReport {
    let mut report = IngestReport::default();
    for path in paths {
        report.record(ingest_path(&mut writer, resolver, path));
    }
    let indexed = writer.finalize();
    log::info!(
        "Indexed {} objects ({} unresolved, {} class defaults skipped)",
        indexed,
        report.unresolved,
        report.class_defaults
    );
    report
}
