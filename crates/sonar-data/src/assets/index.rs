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


//! The ordered, searchable index of loaded catalog objects.
//!
//! The index has a single writer and any number of readers. The writer is
//! handed out by [`AssetIndex::writer`]; it appends objects, periodically
//! publishes an unsorted provisional view, and finally sorts, publishes and
//! flips the readiness flag by consuming itself in [`IndexWriter::finalize`].
//! A writer dropped without being finalized clears its provisional view and
//! hands the index back, so a failed batch can be retried.
//! Readers never lock: they load the latest published snapshot.

use arc_swap::ArcSwap;
use sonar_core::asset::{AssetHandle, CatalogObject};
use std::fmt;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A published, immutable view of the index.
pub type IndexSnapshot<A> = Arc<Vec<AssetHandle<A>>>;

/// Shared index state: the published entries and the readiness flag.
pub struct AssetIndex<A: CatalogObject> {
    entries: ArcSwap<Vec<AssetHandle<A>>>,
    ready: AtomicBool,
    writer_claimed: AtomicBool,
}

impl<A: CatalogObject> AssetIndex<A> {
    /// Creates an empty, not-ready index.
    pub fn new() -> Self {
        Self {
            entries: ArcSwap::from_pointee(Vec::new()),
            ready: AtomicBool::new(false),
            writer_claimed: AtomicBool::new(false),
        }
    }

    /// Claims the single writer of this index.
    ///
    /// ## Arguments
    /// * `publish_interval` - Minimum number of appends between two
    ///   provisional publications (at least 1). Past that, a publication waits
    ///   until the staged entries doubled, so a batch of `n` objects copies
    ///   `O(n)` handles in total.
    ///
    /// ## Returns
    /// `None` while another writer is live or once the index was finalized:
    /// an index is filled by exactly one successful batch in its lifetime.
    pub fn writer(self: &Arc<Self>, publish_interval: usize) -> Option<IndexWriter<A>> {
        if self.writer_claimed.swap(true, Ordering::AcqRel) {
            return None;
        }
        Some(IndexWriter {
            index: Arc::clone(self),
            staged: Vec::new(),
            publish_interval: publish_interval.max(1),
            unpublished: 0,
            finalized: false,
        })
    }

    /// Returns `true` once the index is complete and sorted.
    ///
    /// Entries published before the flag was set are visible to any thread
    /// that observes `true`.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Returns the latest published entries.
    ///
    /// Before the index is ready this is a provisional, unsorted prefix of the
    /// final content.
    pub fn snapshot(&self) -> IndexSnapshot<A> {
        self.entries.load_full()
    }

    /// Number of published entries.
    pub fn len(&self) -> usize {
        self.entries.load().len()
    }

    /// Returns `true` if no entry has been published.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A: CatalogObject> Default for AssetIndex<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: CatalogObject> fmt::Debug for AssetIndex<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetIndex")
            .field("len", &self.len())
            .field("ready", &self.is_ready())
            .finish()
    }
}

/// What happened to a single object handed to [`IndexWriter::ingest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The object was appended to the index.
    Added,
    /// The path did not resolve to a loaded object.
    Unresolved,
    /// The object is a class-default placeholder.
    ClassDefault,
}

/// Exclusive write access to an [`AssetIndex`] for its single load batch.
pub struct IndexWriter<A: CatalogObject> {
    index: Arc<AssetIndex<A>>,
    staged: Vec<AssetHandle<A>>,
    publish_interval: usize,
    unpublished: usize,
    finalized: bool,
}

impl<A: CatalogObject> IndexWriter<A> {
    /// Appends `object` unless it is missing or a class default.
    pub fn ingest(&mut self, object: Option<AssetHandle<A>>) -> IngestOutcome {
        let Some(object) = object else {
            return IngestOutcome::Unresolved;
        };
        if object.is_class_default() {
            return IngestOutcome::ClassDefault;
        }

        self.staged.push(object);
        self.unpublished += 1;
        let published = self.staged.len() - self.unpublished;
        if self.unpublished >= self.publish_interval.max(published) {
            self.publish();
        }
        IngestOutcome::Added
    }

    /// Number of objects appended so far.
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    /// Sorts the entries by name, publishes them and marks the index ready.
    ///
    /// The sort is stable and compares names byte-wise, so objects sharing a
    /// name keep their ingestion order. Returns the final entry count.
    pub fn finalize(mut self) -> usize {
        self.staged.sort_by(|a, b| a.name().cmp(b.name()));
        let count = self.staged.len();
        self.index
            .entries
            .store(Arc::new(std::mem::take(&mut self.staged)));
        self.index.ready.store(true, Ordering::Release);
        self.finalized = true;
        log::debug!("Index ready with {} entries", count);
        count
    }

    fn publish(&mut self) {
        self.index.entries.store(Arc::new(self.staged.clone()));
        log::trace!("Published provisional snapshot of {} entries", self.staged.len());
        self.unpublished = 0;
    }
}

impl<A: CatalogObject> Drop for IndexWriter<A> {
    fn drop(&mut self) {
        if self.finalized {
            return;
        }
        log::debug!(
            "Index writer dropped after {} entries without finalizing, releasing it",
            self.staged.len()
        );
        self.index.entries.store(Arc::new(Vec::new()));
        self.index.writer_claimed.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AudioEvent;
    use sonar_core::asset::AssetPath;
    use std::thread;

    fn event(path: &str) -> Option<AssetHandle<AudioEvent>> {
        Some(AssetHandle::new(AudioEvent::new(AssetPath::new(path))))
    }

    fn names(snapshot: &[AssetHandle<AudioEvent>]) -> Vec<&str> {
        snapshot.iter().map(|e| e.path_name()).collect()
    }

    #[test]
    fn writer_can_only_be_claimed_once() {
        let index = Arc::new(AssetIndex::<AudioEvent>::new());
        let writer = index.writer(1);
        assert!(writer.is_some());
        assert!(index.writer(1).is_none());
    }

    #[test]
    fn missing_and_placeholder_objects_are_skipped() {
        let index = Arc::new(AssetIndex::<AudioEvent>::new());
        let mut writer = index.writer(1).unwrap();

        assert_eq!(writer.ingest(None), IngestOutcome::Unresolved);
        let placeholder = AudioEvent::class_default(AssetPath::new("/Script/Default__AudioEvent"));
        assert_eq!(
            writer.ingest(Some(AssetHandle::new(placeholder))),
            IngestOutcome::ClassDefault
        );
        assert_eq!(writer.ingest(event("/Game/A.A")), IngestOutcome::Added);

        assert_eq!(writer.finalize(), 1);
        let snapshot = index.snapshot();
        assert_eq!(names(&snapshot), vec!["/Game/A.A"]);
        assert!(snapshot.iter().all(|e| !e.is_class_default()));
    }

    #[test]
    fn finalize_sorts_stably_by_name_and_sets_ready() {
        let index = Arc::new(AssetIndex::<AudioEvent>::new());
        let mut writer = index.writer(8).unwrap();

        writer.ingest(event("/Game/Z/b_low.b_low"));
        writer.ingest(event("/Game/Second/Same.Same"));
        writer.ingest(event("/Game/B_Footstep.B_Footstep"));
        writer.ingest(event("/Game/First/Same.Same"));
        writer.ingest(event("/Game/A_Explosion.A_Explosion"));
        assert!(!index.is_ready());

        writer.finalize();
        assert!(index.is_ready());

        let snapshot = index.snapshot();
        assert_eq!(
            names(&snapshot),
            vec![
                "/Game/A_Explosion.A_Explosion",
                "/Game/B_Footstep.B_Footstep",
                // Equal names keep ingestion order.
                "/Game/Second/Same.Same",
                "/Game/First/Same.Same",
                // Byte-wise: upper case sorts before lower case.
                "/Game/Z/b_low.b_low",
            ]
        );
        for pair in snapshot.windows(2) {
            assert!(pair[0].name().as_bytes() <= pair[1].name().as_bytes());
        }
    }

    #[test]
    fn provisional_entries_are_published_per_interval() {
        let index = Arc::new(AssetIndex::<AudioEvent>::new());
        let mut writer = index.writer(2).unwrap();

        writer.ingest(event("/Game/C.C"));
        assert_eq!(index.len(), 0, "first append is still staged");
        writer.ingest(event("/Game/B.B"));
        assert_eq!(names(&index.snapshot()), vec!["/Game/C.C", "/Game/B.B"]);
        writer.ingest(event("/Game/A.A"));
        assert_eq!(index.len(), 2);
        assert_eq!(writer.staged_len(), 3);

        writer.finalize();
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn publications_space_out_as_the_batch_grows() {
        let index = Arc::new(AssetIndex::<AudioEvent>::new());
        let mut writer = index.writer(1).unwrap();

        let mut visible = Vec::new();
        for i in 0..8 {
            writer.ingest(event(&format!("/Game/E{i}.E{i}")));
            visible.push(index.len());
        }
        assert_eq!(visible, vec![1, 2, 2, 4, 4, 4, 4, 8]);

        writer.finalize();
        assert_eq!(index.len(), 8);
    }

    #[test]
    fn abandoned_writer_releases_the_index() {
        let index = Arc::new(AssetIndex::<AudioEvent>::new());
        let mut writer = index.writer(1).unwrap();
        writer.ingest(event("/Game/Stale.Stale"));
        assert_eq!(index.len(), 1);
        drop(writer);

        assert!(!index.is_ready());
        assert!(index.is_empty(), "provisional entries of the abandoned batch are cleared");

        let mut retry = index.writer(1).expect("writer is free again");
        retry.ingest(event("/Game/A.A"));
        assert_eq!(retry.finalize(), 1);
        assert!(index.is_ready());
        assert_eq!(names(&index.snapshot()), vec!["/Game/A.A"]);
        assert!(index.writer(1).is_none(), "a finalized index stays closed");
    }

    #[test]
    fn empty_batch_is_a_valid_ready_index() {
        let index = Arc::new(AssetIndex::<AudioEvent>::new());
        let writer = index.writer(1).unwrap();
        assert_eq!(writer.finalize(), 0);
        assert!(index.is_ready());
        assert!(index.is_empty());
    }

    #[test]
    fn readers_observe_monotonic_growth_until_ready() {
        let index = Arc::new(AssetIndex::<AudioEvent>::new());
        let mut writer = index.writer(1).unwrap();

        let reader_index = Arc::clone(&index);
        let reader = thread::spawn(move || {
            let mut last_len = 0;
            loop {
                let ready = reader_index.is_ready();
                let len = reader_index.len();
                assert!(len >= last_len, "published view must never shrink");
                last_len = len;
                if ready {
                    assert_eq!(len, 200, "ready implies the full batch is visible");
                    assert!(reader_index.is_ready(), "readiness never reverts");
                    break;
                }
                thread::yield_now();
            }
        });

        for i in 0..200 {
            writer.ingest(event(&format!("/Game/E{i:03}.E{i:03}")));
        }
        writer.finalize();

        reader.join().expect("reader thread panicked");
    }
}
