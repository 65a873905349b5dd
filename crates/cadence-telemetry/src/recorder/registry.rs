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

//! Name-resolved counter registry polled once per frame.

use cadence_core::{
    CounterSample, CounterSampler, CounterSpec, CounterStats, SamplerProvider, TelemetryError,
};
use std::sync::Arc;

/// One named counter tracked by the recorder.
///
/// The sampler handle is resolved exactly once, at registry construction;
/// when resolution fails the entry stays registered but every poll reports
/// zero.
#[derive(Debug)]
pub struct CounterEntry {
    name: String,
    sampler: Option<Arc<dyn CounterSampler>>,
    last: CounterSample,
    acc_time_ms: f32,
    acc_count: u64,
    avg_time_ms: f32,
    avg_count: f32,
}

impl CounterEntry {
    fn new(name: String, sampler: Option<Arc<dyn CounterSampler>>) -> Self {
        Self {
            name,
            sampler,
            last: CounterSample::default(),
            acc_time_ms: 0.0,
            acc_count: 0,
            avg_time_ms: 0.0,
            avg_count: 0.0,
        }
    }

    /// Display name of the counter.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a sampler handle backs this entry.
    pub fn is_resolved(&self) -> bool {
        self.sampler.is_some()
    }

    /// Latest polled measurement.
    pub fn last_sample(&self) -> CounterSample {
        self.last
    }

    /// Elapsed time accumulated since the last window boundary.
    pub fn accumulated_time_ms(&self) -> f32 {
        self.acc_time_ms
    }

    /// Sample count accumulated since the last window boundary.
    pub fn accumulated_count(&self) -> u64 {
        self.acc_count
    }

    /// Last computed windowed averages as a snapshot row.
    pub fn stats(&self) -> CounterStats {
        CounterStats {
            name: self.name.clone(),
            avg_time_ms: self.avg_time_ms,
            avg_count: self.avg_count,
            last_time_ms: self.last.elapsed_ms,
            last_count: self.last.sample_count,
        }
    }

    fn poll(&mut self) {
        let Some(sampler) = &self.sampler else {
            return;
        };
        let sample = sampler.sample();
        self.last = sample;
        self.acc_time_ms += sample.elapsed_ms;
        self.acc_count += u64::from(sample.sample_count);
    }

    fn finish_window(&mut self, window_frames: u32) {
        let inv = 1.0 / window_frames as f32;
        self.avg_time_ms = self.acc_time_ms * inv;
        self.avg_count = self.acc_count as f32 * inv;
        self.acc_time_ms = 0.0;
        self.acc_count = 0;
    }
}

/// Ordered collection of counters, resolved once from a provider.
#[derive(Debug, Default)]
pub struct CounterRegistry {
    entries: Vec<CounterEntry>,
}

impl CounterRegistry {
    /// Resolves every spec against `provider`, in order.
    ///
    /// A failed lookup is logged and leaves the entry disabled; it is not
    /// an error.
    pub fn resolve(specs: &[CounterSpec], provider: &dyn SamplerProvider) -> Self {
        let entries = specs
            .iter()
            .map(|spec| {
                let sampler = provider.resolve(&spec.lookup_key);
                if sampler.is_none() {
                    log::warn!(
                        "{} (lookup key '{}')",
                        TelemetryError::CounterUnresolved(spec.name.clone()),
                        spec.lookup_key
                    );
                }
                CounterEntry::new(spec.name.clone(), sampler)
            })
            .collect();
        Self { entries }
    }

    /// Appends a counter with a directly supplied sampler, bypassing
    /// name-based resolution.
    pub fn register_external(&mut self, name: impl Into<String>, sampler: Arc<dyn CounterSampler>) {
        self.entries.push(CounterEntry::new(name.into(), Some(sampler)));
    }

    /// Polls every resolved counter once, updating latest values and the
    /// window accumulators.
    pub fn poll_all(&mut self) {
        for entry in &mut self.entries {
            entry.poll();
        }
    }

    pub(crate) fn finish_window(&mut self, window_frames: u32) {
        for entry in &mut self.entries {
            entry.finish_window(window_frames);
        }
    }

    /// The tracked entries, in registration order.
    pub fn entries(&self) -> &[CounterEntry] {
        &self.entries
    }

    /// Snapshot rows for every entry, in registration order.
    pub fn stats(&self) -> Vec<CounterStats> {
        self.entries.iter().map(CounterEntry::stats).collect()
    }

    /// Number of tracked entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no counters are tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug)]
    struct ConstSampler(CounterSample);

    impl CounterSampler for ConstSampler {
        fn sample(&self) -> CounterSample {
            self.0
        }
    }

    #[derive(Debug, Default)]
    struct MapProvider {
        samplers: HashMap<String, Arc<dyn CounterSampler>>,
    }

    impl MapProvider {
        fn with(name: &str, sample: CounterSample) -> Self {
            let mut provider = Self::default();
            provider
                .samplers
                .insert(name.to_string(), Arc::new(ConstSampler(sample)));
            provider
        }
    }

    impl SamplerProvider for MapProvider {
        fn resolve(&self, key: &str) -> Option<Arc<dyn CounterSampler>> {
            self.samplers.get(key).cloned()
        }

        fn sampler_names(&self) -> Vec<String> {
            let mut names: Vec<String> = self.samplers.keys().cloned().collect();
            names.sort();
            names
        }
    }

    fn sample(elapsed_ms: f32, sample_count: u32) -> CounterSample {
        CounterSample {
            elapsed_ms,
            sample_count,
        }
    }

    #[test]
    fn poll_accumulates_resolved_entries() {
        let provider = MapProvider::with("draw", sample(1.5, 3));
        let specs = [CounterSpec::named("draw")];
        let mut registry = CounterRegistry::resolve(&specs, &provider);

        registry.poll_all();
        registry.poll_all();

        let entry = &registry.entries()[0];
        assert!(entry.is_resolved());
        assert_eq!(entry.last_sample(), sample(1.5, 3));
        assert!((entry.accumulated_time_ms() - 3.0).abs() < 1e-6);
        assert_eq!(entry.accumulated_count(), 6);
    }

    #[test]
    fn unresolved_entry_reports_zero_forever() {
        let provider = MapProvider::default();
        let specs = [CounterSpec::named("missing")];
        let mut registry = CounterRegistry::resolve(&specs, &provider);

        for _ in 0..200 {
            registry.poll_all();
        }
        registry.finish_window(64);

        let entry = &registry.entries()[0];
        assert!(!entry.is_resolved());
        assert_eq!(entry.stats(), CounterStats {
            name: "missing".to_string(),
            ..CounterStats::default()
        });
    }

    #[test]
    fn finish_window_averages_and_resets() {
        let provider = MapProvider::with("draw", sample(2.0, 4));
        let specs = [CounterSpec::named("draw")];
        let mut registry = CounterRegistry::resolve(&specs, &provider);

        for _ in 0..64 {
            registry.poll_all();
        }
        registry.finish_window(64);

        let entry = &registry.entries()[0];
        assert_eq!(entry.stats().avg_time_ms, 2.0);
        assert_eq!(entry.stats().avg_count, 4.0);
        assert_eq!(entry.accumulated_time_ms(), 0.0);
        assert_eq!(entry.accumulated_count(), 0);
    }

    #[test]
    fn register_external_entries_are_polled() {
        let mut registry = CounterRegistry::default();
        registry.register_external("custom", Arc::new(ConstSampler(sample(0.5, 1))));

        registry.poll_all();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.entries()[0].last_sample(), sample(0.5, 1));
    }

    #[test]
    fn empty_registry_operations_are_noops() {
        let mut registry = CounterRegistry::default();
        registry.poll_all();
        registry.finish_window(64);
        assert!(registry.is_empty());
        assert!(registry.stats().is_empty());
    }
}
