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


use env_logger::{Builder, Env};

/// Installs the global logger.
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this twice is
/// harmless; the second call leaves the first logger in place.
pub fn init_logging(default_filter: &str) {
    if let Err(e) = Builder::from_env(Env::default().default_filter_or(default_filter)).try_init()
    {
        log::debug!("Logger already installed: {e}");
    }
}

/// Installs a logger that writes through the test harness' captured output.
pub fn init_test_logging() {
    let _ = Builder::from_env(Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();
}
