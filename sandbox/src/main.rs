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

// Cadence Sandbox
// Simulated frame loop exercising the statistics recorder end to end.

use std::fs::File;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

use anyhow::Result;
use cadence_core::{DetailLevel, MonotonicClock, OverlayConfig, WorldClock, default_render_counters};
use cadence_telemetry::StatsService;
use cadence_telemetry::command::list_samplers;
use cadence_telemetry::overlay::{JsonLineExporter, format_detailed};
use cadence_telemetry::providers::{SpanRegistry, host_device_label};
use cadence_telemetry::recorder::FrameStatsRecorder;

const FRAMES: u64 = 256;

/// Fixed-step simulation clock advanced from wall time.
#[derive(Debug)]
struct FixedStepWorld {
    started: Instant,
    tick: AtomicU32,
}

impl FixedStepWorld {
    const TICK_INTERVAL_SECS: f64 = 1.0 / 60.0;

    fn new() -> Self {
        Self {
            started: Instant::now(),
            tick: AtomicU32::new(0),
        }
    }

    /// Catches the tick counter up to the current wall time.
    fn pump(&self) {
        let due = (self.elapsed_secs() / Self::TICK_INTERVAL_SECS) as u32;
        self.tick.store(due, Ordering::Relaxed);
    }

    fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

impl WorldClock for FixedStepWorld {
    fn current_tick(&self) -> u32 {
        self.tick.load(Ordering::Relaxed)
    }

    fn tick_interval_secs(&self) -> f64 {
        Self::TICK_INTERVAL_SECS
    }

    fn next_tick_time_secs(&self) -> f64 {
        f64::from(self.current_tick() + 1) * Self::TICK_INTERVAL_SECS
    }

    fn frame_time_secs(&self) -> f64 {
        self.elapsed_secs()
    }
}

fn busy_work(iterations: u32) -> u64 {
    let mut acc = 0u64;
    for i in 0..iterations {
        acc = acc.wrapping_add(u64::from(i ^ 0x9E37));
    }
    std::hint::black_box(acc)
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let spans = Arc::new(SpanRegistry::new());
    // Samplers must exist before the recorder resolves them by name.
    let draw = spans.sampler("RenderLoop.Draw");
    let shadows = spans.sampler("Shadows.Draw");
    let batched_draw = spans.sampler("RenderLoopNewBatcher.Draw");
    let batched_shadows = spans.sampler("ShadowLoopNewBatcher.Draw");
    let device_idle = spans.sampler("RenderLoopDevice.Idle");
    let static_batches = spans.sampler("StaticBatchDraw.Count");

    log::info!(
        "draw samplers: {:?}",
        list_samplers(spans.as_ref(), Some("draw"))
    );

    let recorder = FrameStatsRecorder::new(
        Box::new(MonotonicClock::new()),
        &default_render_counters(),
        spans.as_ref(),
        host_device_label(),
    );

    let export_path = std::env::temp_dir().join("cadence-sandbox-stats.jsonl");
    let mut service = StatsService::new(
        recorder,
        OverlayConfig {
            compact: true,
            detail: DetailLevel::Graphs,
        },
    );
    service.add_sink(Box::new(JsonLineExporter::new(File::create(&export_path)?)));
    log::info!("exporting snapshots to {}", export_path.display());

    let world = Arc::new(FixedStepWorld::new());
    service
        .recorder_mut()
        .attach_world_clock(Arc::clone(&world) as Arc<dyn WorldClock>);

    for frame in 0..FRAMES {
        world.pump();

        {
            let _draw = draw.begin();
            busy_work(40_000);
            {
                let _shadows = shadows.begin();
                busy_work(15_000);
            }
            let _batched = batched_draw.begin();
            let _batched_shadows = batched_shadows.begin();
            busy_work(10_000);
        }
        {
            let _idle = device_idle.begin();
            busy_work(5_000);
        }
        for _ in 0..3 {
            let _batch = static_batches.begin();
        }

        if frame % 32 == 0 {
            // Pretend the netcode reported a fresh round trip.
            service
                .recorder_mut()
                .set_round_trip_ms(Some(30 + (frame % 16) as u32));
        }

        service.tick();

        if (frame + 1) % 64 == 0 {
            let snapshot = service.recorder().snapshot_detailed();
            println!("{}", format_detailed(&snapshot, true));
        }
    }

    let compact = service.recorder().snapshot_compact();
    log::info!(
        "finished {FRAMES} frames at ~{} FPS (rtt {:?})",
        compact.frame_rate,
        compact.round_trip_ms
    );
    Ok(())
}
