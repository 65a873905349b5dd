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

//! Service tying the recorder to its sinks and configuration.

use crate::overlay::StatsSink;
use crate::recorder::FrameStatsRecorder;
use anyhow::Context;
use cadence_core::{CounterSpec, OverlayConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File-loadable recorder configuration: the overlay verbosity toggles
/// plus the ordered counter list to resolve at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Overlay verbosity toggles.
    #[serde(default)]
    pub overlay: OverlayConfig,
    /// Counters to resolve, in display order.
    #[serde(default)]
    pub counters: Vec<CounterSpec>,
}

impl ServiceConfig {
    /// Reads a configuration from a JSON file.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading stats config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing stats config {}", path.display()))
    }
}

/// Owns a recorder, its presentation sinks, and the active overlay
/// configuration.
///
/// Call [`StatsService::tick`] once per rendered frame; the recorder is
/// advanced first, then each enabled snapshot is handed to every sink. A
/// failing sink is logged and skipped.
#[derive(Debug)]
pub struct StatsService {
    recorder: FrameStatsRecorder,
    sinks: Vec<Box<dyn StatsSink>>,
    config: OverlayConfig,
}

impl StatsService {
    /// Creates a service around an already-constructed recorder.
    pub fn new(recorder: FrameStatsRecorder, config: OverlayConfig) -> Self {
        Self {
            recorder,
            sinks: Vec::new(),
            config,
        }
    }

    /// Adds a presentation sink.
    pub fn add_sink(&mut self, sink: Box<dyn StatsSink>) {
        self.sinks.push(sink);
    }

    /// Replaces the active overlay configuration.
    pub fn set_config(&mut self, config: OverlayConfig) {
        self.config = config;
    }

    /// The active overlay configuration.
    pub fn config(&self) -> OverlayConfig {
        self.config
    }

    /// Read access to the recorder, e.g. for ad-hoc snapshots.
    pub fn recorder(&self) -> &FrameStatsRecorder {
        &self.recorder
    }

    /// Mutable access for host integration: round-trip updates, world
    /// clock attachment, external counters.
    pub fn recorder_mut(&mut self) -> &mut FrameStatsRecorder {
        &mut self.recorder
    }

    /// Advances the recorder and publishes the enabled snapshots.
    pub fn tick(&mut self) {
        self.recorder.tick(&self.config);

        if self.config.compact {
            let snapshot = self.recorder.snapshot_compact();
            for sink in &mut self.sinks {
                if let Err(error) = sink.publish_compact(&snapshot) {
                    log::warn!("stats sink rejected compact snapshot: {error}");
                }
            }
        }

        if self.config.detail.enabled() {
            let snapshot = self.recorder.snapshot_detailed();
            let graphs = self.config.detail.graphs_enabled();
            for sink in &mut self.sinks {
                if let Err(error) = sink.publish_detailed(&snapshot, graphs) {
                    log::warn!("stats sink rejected detailed snapshot: {error}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::{
        CompactSnapshot, DetailLevel, DetailedSnapshot, MonotonicClock, SamplerProvider,
        TelemetryError, TelemetryResult,
    };
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Default)]
    struct NullProvider;

    impl SamplerProvider for NullProvider {
        fn resolve(&self, _key: &str) -> Option<Arc<dyn cadence_core::CounterSampler>> {
            None
        }

        fn sampler_names(&self) -> Vec<String> {
            Vec::new()
        }
    }

    #[derive(Debug, Default)]
    struct RecordingSink {
        compact: Arc<AtomicU32>,
        detailed: Arc<AtomicU32>,
        fail: bool,
    }

    impl StatsSink for RecordingSink {
        fn publish_compact(&mut self, _snapshot: &CompactSnapshot) -> TelemetryResult<()> {
            self.compact.fetch_add(1, Ordering::Relaxed);
            if self.fail {
                return Err(TelemetryError::Sink("forced".to_string()));
            }
            Ok(())
        }

        fn publish_detailed(
            &mut self,
            _snapshot: &DetailedSnapshot,
            _graphs: bool,
        ) -> TelemetryResult<()> {
            self.detailed.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }
    }

    fn service(config: OverlayConfig) -> (StatsService, Arc<AtomicU32>, Arc<AtomicU32>) {
        let recorder = FrameStatsRecorder::new(
            Box::new(MonotonicClock::new()),
            &[],
            &NullProvider,
            "test device",
        );
        let mut service = StatsService::new(recorder, config);
        let sink = RecordingSink::default();
        let compact = Arc::clone(&sink.compact);
        let detailed = Arc::clone(&sink.detailed);
        service.add_sink(Box::new(sink));
        (service, compact, detailed)
    }

    #[test]
    fn disabled_modes_publish_nothing() {
        let (mut service, compact, detailed) = service(OverlayConfig {
            compact: false,
            detail: DetailLevel::Off,
        });
        for _ in 0..10 {
            service.tick();
        }
        assert_eq!(compact.load(Ordering::Relaxed), 0);
        assert_eq!(detailed.load(Ordering::Relaxed), 0);
        assert_eq!(service.recorder().frame_number(), 10);
    }

    #[test]
    fn enabled_modes_publish_each_frame() {
        let (mut service, compact, detailed) = service(OverlayConfig {
            compact: true,
            detail: DetailLevel::Counters,
        });
        for _ in 0..5 {
            service.tick();
        }
        assert_eq!(compact.load(Ordering::Relaxed), 5);
        assert_eq!(detailed.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn failing_sink_does_not_stop_the_loop() {
        let recorder = FrameStatsRecorder::new(
            Box::new(MonotonicClock::new()),
            &[],
            &NullProvider,
            "test device",
        );
        let mut service = StatsService::new(
            recorder,
            OverlayConfig {
                compact: true,
                detail: DetailLevel::Off,
            },
        );
        let failing = RecordingSink {
            fail: true,
            ..RecordingSink::default()
        };
        let healthy = RecordingSink::default();
        let healthy_count = Arc::clone(&healthy.compact);
        service.add_sink(Box::new(failing));
        service.add_sink(Box::new(healthy));

        service.tick();
        assert_eq!(healthy_count.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn config_can_change_between_frames() {
        let (mut service, compact, _) = service(OverlayConfig {
            compact: false,
            detail: DetailLevel::Off,
        });
        service.tick();
        service.set_config(OverlayConfig {
            compact: true,
            detail: DetailLevel::Off,
        });
        service.tick();
        assert_eq!(compact.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn service_config_loads_from_a_json_file() {
        let path = std::env::temp_dir().join(format!(
            "cadence-service-config-{}.json",
            std::process::id()
        ));
        fs::write(
            &path,
            r#"{
                "overlay": { "compact": false, "detail": "graphs" },
                "counters": [ { "name": "Draw", "lookup_key": "RenderLoop.Draw" } ]
            }"#,
        )
        .unwrap();

        let config = ServiceConfig::from_path(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(!config.overlay.compact);
        assert_eq!(config.overlay.detail, DetailLevel::Graphs);
        assert_eq!(config.counters.len(), 1);
        assert_eq!(config.counters[0].lookup_key, "RenderLoop.Draw");
    }

    #[test]
    fn missing_config_file_reports_the_path() {
        let error = ServiceConfig::from_path(Path::new("/nonexistent/stats.json")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/stats.json"));
    }
}
