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


//! Acts as the **[A]gent** for the audio event browser.
//!
//! The agent is started by the host lifecycle. On `POST_INITIALIZATION` it
//! discovers every browsable object through the `asset_lane`, hands the
//! loaded batch to the `index_lane` on the loader's completion thread, and
//! from then on answers keyword queries through the `search_lane`.

pub mod agent;

pub use agent::BrowserAgent;
