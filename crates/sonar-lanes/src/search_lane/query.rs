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


use sonar_core::asset::{AssetHandle, CatalogObject};
use sonar_data::assets::AssetIndex;

/// A parsed keyword query: every word must appear in a matching path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    words: Vec<String>,
}

impl SearchQuery {
    /// Splits `text` on whitespace. Blank text yields an empty query.
    pub fn parse(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// An empty query matches everything.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` if `path` contains every word.
    ///
    /// Matching is a case-sensitive substring test; word order is irrelevant.
    pub fn matches(&self, path: &str) -> bool {
        self.words.iter().all(|word| path.contains(word.as_str()))
    }
}

/// Returns the index entries whose path matches `text`, in index order.
///
/// Blank text returns the whole index. Querying before the index is ready is
/// allowed and returns the provisional entries, with a warning.
pub fn filter_entries<A: CatalogObject>(index: &AssetIndex<A>, text: &str) -> Vec<AssetHandle<A>> {
    let query = SearchQuery::parse(text);

    if !index.is_ready() {
        log::warn!(
            "Entries still not ready, there are {} entries",
            index.len()
        );
    }

    let entries = index.snapshot();
    if query.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|entry| query.matches(entry.path_name()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonar_core::asset::AssetPath;
    use sonar_data::assets::AudioEvent;
    use std::sync::Arc;

    fn ready_index(paths: &[&str]) -> Arc<AssetIndex<AudioEvent>> {
        let index = Arc::new(AssetIndex::new());
        let mut writer = index.writer(1).unwrap();
        for path in paths {
            writer.ingest(Some(AssetHandle::new(AudioEvent::new(AssetPath::new(*path)))));
        }
        writer.finalize();
        index
    }

    fn paths(entries: &[AssetHandle<AudioEvent>]) -> Vec<&str> {
        entries.iter().map(|e| e.path_name()).collect()
    }

    const EXPLOSION: &str = "/Game/A_Explosion.A_Explosion";
    const FOOTSTEP: &str = "/Game/B_Footstep.B_Footstep";

    #[test]
    fn parse_splits_on_any_whitespace() {
        let query = SearchQuery::parse("  Play_\tFoot \n step ");
        assert_eq!(query, SearchQuery::parse("Play_ Foot step"));
        assert!(query.matches("/Game/Play_Footstep.Play_Footstep"));
        assert!(SearchQuery::parse(" \t\n").is_empty());
        assert!(SearchQuery::parse("").is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let index = ready_index(&[EXPLOSION, FOOTSTEP]);
        assert!(filter_entries(&index, "explosion").is_empty());
        assert_eq!(paths(&filter_entries(&index, "Explosion")), vec![EXPLOSION]);
    }

    #[test]
    fn blank_query_returns_the_whole_index_in_order() {
        let index = ready_index(&[FOOTSTEP, EXPLOSION]);
        assert_eq!(paths(&filter_entries(&index, "")), vec![EXPLOSION, FOOTSTEP]);
        assert_eq!(paths(&filter_entries(&index, "   ")), vec![EXPLOSION, FOOTSTEP]);
    }

    #[test]
    fn all_words_must_match() {
        let index = ready_index(&[EXPLOSION, FOOTSTEP]);
        assert!(filter_entries(&index, "A_Explosion B_Footstep").is_empty());
        assert_eq!(paths(&filter_entries(&index, "Game Foot")), vec![FOOTSTEP]);
        assert_eq!(
            paths(&filter_entries(&index, "Foot Game")),
            vec![FOOTSTEP],
            "word order does not matter"
        );
        assert_eq!(paths(&filter_entries(&index, "/Game")), vec![EXPLOSION, FOOTSTEP]);
    }

    #[test]
    fn repeated_queries_are_identical() {
        let index = ready_index(&[EXPLOSION, FOOTSTEP, "/Game/C_Explosion_Far.C_Explosion_Far"]);
        let first_entries = filter_entries(&index, "Explosion");
        let second_entries = filter_entries(&index, "Explosion");
        let first = paths(&first_entries);
        let second = paths(&second_entries);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn query_before_ready_returns_provisional_entries() {
        let index = Arc::new(AssetIndex::<AudioEvent>::new());
        let mut writer = index.writer(1).unwrap();
        writer.ingest(Some(AssetHandle::new(AudioEvent::new(AssetPath::new(FOOTSTEP)))));

        assert!(!index.is_ready());
        assert_eq!(paths(&filter_entries(&index, "")), vec![FOOTSTEP]);
        assert_eq!(paths(&filter_entries(&index, "Foot")), vec![FOOTSTEP]);

        writer.finalize();
        assert!(index.is_ready());
    }
}
