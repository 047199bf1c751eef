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


use std::time::Duration;

/// Durations of the three stages of one bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadTimings {
    /// From the start of the catalog query to the load request being queued.
    pub discovery: Duration,
    /// From the request being queued to the loader reporting completion.
    pub loading: Duration,
    /// From completion to the end of the continuation.
    pub processing: Duration,
}

impl LoadTimings {
    /// Wall time of the whole load, from catalog query to processed batch.
    pub fn total(&self) -> Duration {
        self.discovery + self.loading + self.processing
    }

    /// Logs the loading and processing durations for a batch of `count`
    /// objects of class `class_name`.
    pub fn log_summary(&self, count: usize, class_name: &str) {
        log::warn!(
            "Took {:.3} ms to load {} '{}'",
            as_ms(self.loading),
            count,
            class_name
        );
        log::warn!(
            "Took {:.3} ms to process {} '{}'",
            as_ms(self.processing),
            count,
            class_name
        );
        log::debug!(
            "Discovery of '{}' took {:.3} ms, {:.3} ms in total",
            class_name,
            as_ms(self.discovery),
            as_ms(self.total())
        );
    }
}

fn as_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
