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

//! The per-frame statistics recorder.

mod registry;
mod window;

pub use registry::{CounterEntry, CounterRegistry};
pub use window::{AveragingWindow, AVERAGE_WINDOW_FRAMES};

use crate::history::{DualTickHistory, FrameHistory};
use cadence_core::{
    ClockSource, CompactSnapshot, CounterSampler, CounterSpec, DetailedSnapshot, OverlayConfig,
    SamplerProvider, WorldClock,
};
use std::sync::Arc;

/// Weight the previous smoothed frame duration keeps each tick; the new
/// sample contributes the remainder.
const FRAME_EMA_RETAIN: f32 = 0.9;

/// Rolling per-frame statistics: a smoothed frame duration, bounded
/// circular histories, and windowed counter averages.
///
/// `tick` must be called exactly once per rendered frame, after the
/// frame's work completes, from the thread driving the frame loop. All
/// snapshot reads are total; a missing collaborator only disables its own
/// sub-step.
#[derive(Debug)]
pub struct FrameStatsRecorder {
    clock: Box<dyn ClockSource>,
    last_frame_ticks: u64,
    frame_ema_ms: f32,
    frame_number: u64,
    frame_history: FrameHistory,
    tick_history: DualTickHistory,
    registry: CounterRegistry,
    window: AveragingWindow,
    world: Option<Arc<dyn WorldClock>>,
    last_world_tick: u32,
    device_label: String,
    round_trip_ms: Option<u32>,
}

impl FrameStatsRecorder {
    /// Creates a recorder, resolving `specs` against `provider` once.
    ///
    /// `device_label` is captured now and reported unchanged in every
    /// detailed snapshot.
    pub fn new(
        clock: Box<dyn ClockSource>,
        specs: &[CounterSpec],
        provider: &dyn SamplerProvider,
        device_label: impl Into<String>,
    ) -> Self {
        let last_frame_ticks = clock.now_ticks();
        Self {
            last_frame_ticks,
            frame_ema_ms: 0.0,
            frame_number: 0,
            frame_history: FrameHistory::default(),
            tick_history: DualTickHistory::default(),
            registry: CounterRegistry::resolve(specs, provider),
            window: AveragingWindow::default(),
            world: None,
            last_world_tick: 0,
            device_label: device_label.into(),
            round_trip_ms: None,
            clock,
        }
    }

    /// Registers the optional world clock feeding the tick-duration
    /// history.
    pub fn attach_world_clock(&mut self, world: Arc<dyn WorldClock>) {
        self.last_world_tick = world.current_tick();
        self.world = Some(world);
    }

    /// Adds a counter with a directly supplied sampler, bypassing
    /// name-based resolution.
    pub fn register_external_counter(
        &mut self,
        name: impl Into<String>,
        sampler: Arc<dyn CounterSampler>,
    ) {
        self.registry.register_external(name, sampler);
    }

    /// Reports the latest network round-trip time; `None` clears it.
    pub fn set_round_trip_ms(&mut self, round_trip_ms: Option<u32>) {
        self.round_trip_ms = round_trip_ms;
    }

    /// Advances per-frame statistics. Call once per rendered frame.
    pub fn tick(&mut self, config: &OverlayConfig) {
        let now = self.clock.now_ticks();
        let duration_ms = self.clock.elapsed_ms(self.last_frame_ticks, now);
        self.last_frame_ticks = now;

        self.frame_ema_ms =
            self.frame_ema_ms * FRAME_EMA_RETAIN + duration_ms * (1.0 - FRAME_EMA_RETAIN);
        self.frame_history.record(self.frame_number, duration_ms);

        if config.detail.enabled() {
            self.registry.poll_all();
            self.record_world_ticks();
            self.window.on_frame_accumulated(&mut self.registry);
        }

        self.frame_number += 1;
    }

    fn record_world_ticks(&mut self) {
        let Some(world) = &self.world else {
            return;
        };
        let tick = world.current_tick();
        let interval_secs = world.tick_interval_secs();
        let ticks_elapsed = tick.saturating_sub(self.last_world_tick);
        self.last_world_tick = tick;

        let simulated_ms = (1000.0 * interval_secs * f64::from(ticks_elapsed)) as f32;
        let last_tick_time_secs = world.next_tick_time_secs() - interval_secs;
        let lag_ms = (1000.0 * (world.frame_time_secs() - last_tick_time_secs)) as f32;
        self.tick_history
            .record(self.frame_number, simulated_ms, lag_ms);
    }

    /// Minimal FPS / round-trip snapshot.
    pub fn snapshot_compact(&self) -> CompactSnapshot {
        CompactSnapshot {
            frame_rate: self.frame_rate(),
            round_trip_ms: self.round_trip_ms,
        }
    }

    /// Full multi-counter snapshot for the current frame.
    pub fn snapshot_detailed(&self) -> DetailedSnapshot {
        DetailedSnapshot {
            frame_rate: self.frame_rate(),
            frame_time_ms: self.frame_ema_ms,
            min_frame_ms: self.frame_history.min(),
            avg_frame_ms: self.frame_history.average(),
            max_frame_ms: self.frame_history.max(),
            frame_number: self.frame_number,
            device_label: self.device_label.clone(),
            counters: self.registry.stats(),
            frame_history_ms: self.frame_history.samples().to_vec(),
            world_ticks_ms: self.tick_history.ticks_ms().samples().to_vec(),
            tick_lag_ms: self.tick_history.lag_ms().samples().to_vec(),
            world_tick_interval_ms: self
                .world
                .as_ref()
                .map(|world| (world.tick_interval_secs() * 1000.0) as f32),
        }
    }

    /// Smoothed frame duration in milliseconds.
    pub fn frame_time_ms(&self) -> f32 {
        self.frame_ema_ms
    }

    /// Number of frames recorded so far.
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// The tracked counters.
    pub fn registry(&self) -> &CounterRegistry {
        &self.registry
    }

    fn frame_rate(&self) -> u32 {
        if self.frame_ema_ms > 0.0 {
            (1000.0 / self.frame_ema_ms).round() as u32
        } else {
            0
        }
    }
}
