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

//! Presentation sinks consuming recorder snapshots.
//!
//! The recorder knows nothing about presentation. The service hands each
//! registered sink the snapshots enabled for the frame; a failing sink is
//! logged and skipped, never allowed to interrupt the frame loop.

mod json;
mod text;

pub use json::JsonLineExporter;
pub use text::{format_compact, format_detailed, TextOverlay};

use cadence_core::{CompactSnapshot, DetailedSnapshot, TelemetryResult};
use std::fmt::Debug;

/// A consumer of statistics snapshots.
pub trait StatsSink: Send + Debug {
    /// Publishes the compact FPS / round-trip readout.
    fn publish_compact(&mut self, snapshot: &CompactSnapshot) -> TelemetryResult<()>;

    /// Publishes the full multi-counter panel. `graphs` asks the sink to
    /// also render history graphs where it can.
    fn publish_detailed(
        &mut self,
        snapshot: &DetailedSnapshot,
        graphs: bool,
    ) -> TelemetryResult<()>;
}
