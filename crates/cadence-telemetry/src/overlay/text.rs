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

//! Text rendering of statistics snapshots.

use super::StatsSink;
use cadence_core::{CompactSnapshot, DetailedSnapshot, TelemetryError, TelemetryResult};
use std::fmt::Debug;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Full-scale value for the frame-duration sparkline, in milliseconds.
const FRAME_GRAPH_SCALE_MS: f32 = 20.0;

/// Full-scale value for the world-tick sparklines, in milliseconds.
const TICK_GRAPH_SCALE_MS: f32 = 48.0;

/// Renders the single-line FPS / round-trip readout.
pub fn format_compact(snapshot: &CompactSnapshot) -> String {
    match snapshot.round_trip_ms {
        Some(rtt) => format!("FPS:{}  RTT:{}", snapshot.frame_rate, rtt),
        None => format!("FPS:{}  RTT:---", snapshot.frame_rate),
    }
}

/// Renders the multi-line statistics panel.
pub fn format_detailed(snapshot: &DetailedSnapshot, graphs: bool) -> String {
    let mut panel = String::new();
    let _ = writeln!(
        panel,
        "{} FPS ({:.2} ms)",
        snapshot.frame_rate, snapshot.frame_time_ms
    );
    let _ = writeln!(
        panel,
        "min:{:.2} avg:{:.2} max:{:.2}",
        snapshot.min_frame_ms, snapshot.avg_frame_ms, snapshot.max_frame_ms
    );
    let _ = writeln!(panel, "Frame #: {}", snapshot.frame_number);
    let _ = writeln!(panel, "{}", snapshot.device_label);

    for counter in &snapshot.counters {
        let _ = writeln!(
            panel,
            "{:6.2}ms (*{:5.1})  ({:6.2}ms *{:4})  {}",
            counter.avg_time_ms,
            counter.avg_count,
            counter.last_time_ms,
            counter.last_count,
            counter.name
        );
    }

    if graphs {
        let _ = writeln!(
            panel,
            "frame ms {}",
            sparkline(&snapshot.frame_history_ms, FRAME_GRAPH_SCALE_MS)
        );
        let _ = writeln!(
            panel,
            "tick ms  {}",
            sparkline(&snapshot.world_ticks_ms, TICK_GRAPH_SCALE_MS)
        );
        let _ = writeln!(
            panel,
            "tick lag {}",
            sparkline(&snapshot.tick_lag_ms, TICK_GRAPH_SCALE_MS)
        );
        if let Some(interval_ms) = snapshot.world_tick_interval_ms {
            let _ = writeln!(panel, "Tick: {interval_ms:.1}");
        }
    }

    panel
}

/// One bar glyph per sample, scaled against `full_scale`.
fn sparkline(samples: &[f32], full_scale: f32) -> String {
    const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    samples
        .iter()
        .map(|&value| {
            let level = (value / full_scale).clamp(0.0, 1.0);
            BARS[(level * (BARS.len() - 1) as f32).round() as usize]
        })
        .collect()
}

/// Writes snapshots as text panels to any writer.
#[derive(Debug)]
pub struct TextOverlay<W: Write + Send + Debug> {
    out: W,
}

impl TextOverlay<io::Stdout> {
    /// An overlay writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Debug> TextOverlay<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the overlay, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_block(&mut self, block: &str) -> TelemetryResult<()> {
        self.out
            .write_all(block.as_bytes())
            .and_then(|_| self.out.write_all(b"\n"))
            .map_err(|error| TelemetryError::Sink(error.to_string()))
    }
}

impl<W: Write + Send + Debug> StatsSink for TextOverlay<W> {
    fn publish_compact(&mut self, snapshot: &CompactSnapshot) -> TelemetryResult<()> {
        let mut line = format_compact(snapshot);
        line.push('\n');
        self.write_block(&line)
    }

    fn publish_detailed(
        &mut self,
        snapshot: &DetailedSnapshot,
        graphs: bool,
    ) -> TelemetryResult<()> {
        self.write_block(&format_detailed(snapshot, graphs))
    }
}
