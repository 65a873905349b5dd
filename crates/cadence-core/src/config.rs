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

//! Recorder and overlay configuration.
//!
//! Verbosity is explicit input to every tick rather than ambient global
//! state, and the counter list is injected rather than compiled in.

use serde::{Deserialize, Serialize};

/// Identifies one counter to resolve at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSpec {
    /// Name shown in snapshots and overlays.
    pub name: String,
    /// Key passed to the sampler provider at resolution time.
    pub lookup_key: String,
}

impl CounterSpec {
    /// Creates a spec whose display name doubles as the lookup key.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            lookup_key: name.clone(),
            name,
        }
    }
}

/// How much detail the per-frame statistics pass produces.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    /// Detailed statistics disabled; only frame timing is tracked.
    #[default]
    Off,
    /// Counter polling, windowed averages, and the stats panel.
    Counters,
    /// Everything in `Counters` plus history graphs.
    Graphs,
}

impl DetailLevel {
    /// True when counters are polled and averaged this tick.
    pub fn enabled(self) -> bool {
        self != DetailLevel::Off
    }

    /// True when sinks should also render history graphs.
    pub fn graphs_enabled(self) -> bool {
        self >= DetailLevel::Graphs
    }
}

/// The two independent overlay verbosity toggles, read once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Single-line FPS / RTT readout.
    #[serde(default = "default_compact")]
    pub compact: bool,
    /// Detailed multi-counter statistics level.
    #[serde(default)]
    pub detail: DetailLevel,
}

fn default_compact() -> bool {
    true
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            compact: true,
            detail: DetailLevel::Off,
        }
    }
}

/// The six render-loop counters of the reference configuration.
pub fn default_render_counters() -> Vec<CounterSpec> {
    [
        "RenderLoop.Draw",
        "Shadows.Draw",
        "RenderLoopNewBatcher.Draw",
        "ShadowLoopNewBatcher.Draw",
        "RenderLoopDevice.Idle",
        "StaticBatchDraw.Count",
    ]
    .into_iter()
    .map(CounterSpec::named)
    .collect()
}
