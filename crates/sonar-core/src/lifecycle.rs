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


//! Startup phases driven by the host module framework.

use std::fmt;

/// The phases a host module goes through at startup, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LifecyclePhase {
    /// The module object has just been created.
    Construction,
    /// Every module has been constructed; modules initialize themselves.
    Initialization,
    /// Every module is initialized; cross-module work may start.
    PostInitialization,
}

impl LifecyclePhase {
    /// The canonical upper-case name of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecyclePhase::Construction => "CONSTRUCTION",
            LifecyclePhase::Initialization => "INITIALIZATION",
            LifecyclePhase::PostInitialization => "POST_INITIALIZATION",
        }
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Implemented by subsystems that react to host lifecycle phases.
pub trait LifecycleListener {
    /// The error returned when reacting to a phase fails.
    type Error;

    /// Called once per phase, in phase order.
    fn dispatch_lifecycle_event(&mut self, phase: LifecyclePhase) -> Result<(), Self::Error>;
}
