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

//! Read-only snapshot types produced by the statistics recorder.
//!
//! Snapshots are plain data: a presentation sink may render them to a text
//! overlay, serialize them for export, or drop them on the floor. Absent
//! data is represented by zeros or `None`, never by an error.

use serde::Serialize;

/// Minimal single-line statistics: frame rate plus network round trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompactSnapshot {
    /// Frames per second derived from the smoothed frame duration.
    pub frame_rate: u32,
    /// Latest reported round-trip time in milliseconds, when one is known.
    pub round_trip_ms: Option<u32>,
}

/// One row of the per-counter statistics table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CounterStats {
    /// Display name of the counter.
    pub name: String,
    /// Windowed average elapsed time per frame, in milliseconds.
    pub avg_time_ms: f32,
    /// Windowed average sample count per frame.
    pub avg_count: f32,
    /// Latest instantaneous elapsed time, in milliseconds.
    pub last_time_ms: f32,
    /// Latest instantaneous sample count.
    pub last_count: u32,
}

/// Full multi-counter statistics for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct DetailedSnapshot {
    /// Frames per second derived from the smoothed frame duration.
    pub frame_rate: u32,
    /// Smoothed (exponentially averaged) frame duration, in milliseconds.
    pub frame_time_ms: f32,
    /// Minimum over the full frame-duration history.
    pub min_frame_ms: f32,
    /// Mean over the full frame-duration history.
    pub avg_frame_ms: f32,
    /// Maximum over the full frame-duration history.
    pub max_frame_ms: f32,
    /// Number of frames recorded so far.
    pub frame_number: u64,
    /// Host device descriptor captured once at startup.
    pub device_label: String,
    /// Per-counter statistics, in registration order.
    pub counters: Vec<CounterStats>,
    /// The frame-duration history, in recording-slot order.
    pub frame_history_ms: Vec<f32>,
    /// Simulated milliseconds covered by world ticks, per frame slot.
    pub world_ticks_ms: Vec<f32>,
    /// Frame lag behind the last due world tick, per frame slot.
    pub tick_lag_ms: Vec<f32>,
    /// Simulated milliseconds per world tick, when a world clock is
    /// attached.
    pub world_tick_interval_ms: Option<f32>,
}
