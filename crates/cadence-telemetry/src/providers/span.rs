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

//! Scope-timing samplers the host uses to instrument its own work.
//!
//! A [`SpanSampler`] accumulates elapsed time and span count between polls;
//! the recorder drains it once per frame through the [`CounterSampler`]
//! contract. Timing may happen on any thread; both sides go through
//! atomics, no locks on the hot path.

use cadence_core::{CounterSample, CounterSampler, SamplerProvider};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Accumulates elapsed span time and span count until the next poll.
#[derive(Debug, Default)]
pub struct SpanSampler {
    elapsed_ns: AtomicU64,
    count: AtomicU32,
}

impl SpanSampler {
    /// Creates an empty sampler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a scope timer that records into this sampler on drop.
    pub fn begin(self: &Arc<Self>) -> SpanGuard {
        SpanGuard {
            sampler: Arc::clone(self),
            started: Instant::now(),
        }
    }

    /// Adds one finished span of `elapsed_ns` nanoseconds.
    pub fn record_ns(&self, elapsed_ns: u64) {
        self.elapsed_ns.fetch_add(elapsed_ns, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }
}

impl CounterSampler for SpanSampler {
    fn sample(&self) -> CounterSample {
        let elapsed_ns = self.elapsed_ns.swap(0, Ordering::Relaxed);
        let count = self.count.swap(0, Ordering::Relaxed);
        CounterSample {
            elapsed_ms: elapsed_ns as f32 / 1_000_000.0,
            sample_count: count,
        }
    }
}

/// RAII timer recording into a [`SpanSampler`] when dropped.
///
/// The measurement is taken even on early returns or panics.
#[derive(Debug)]
pub struct SpanGuard {
    sampler: Arc<SpanSampler>,
    started: Instant,
}

impl Drop for SpanGuard {
    fn drop(&mut self) {
        self.sampler
            .record_ns(self.started.elapsed().as_nanos() as u64);
    }
}

/// Name-addressed collection of span samplers.
///
/// The instrumentation side creates samplers through [`SpanRegistry::sampler`];
/// the recorder resolves them by name through the [`SamplerProvider`]
/// contract. `resolve` never creates: an unknown name stays unresolved,
/// like a profiler sampler that does not exist.
#[derive(Debug, Default)]
pub struct SpanRegistry {
    samplers: Mutex<BTreeMap<String, Arc<SpanSampler>>>,
}

impl SpanRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sampler registered under `name`, creating it on first
    /// use.
    pub fn sampler(&self, name: &str) -> Arc<SpanSampler> {
        let mut samplers = self.samplers.lock().unwrap();
        Arc::clone(samplers.entry(name.to_string()).or_default())
    }
}

impl SamplerProvider for SpanRegistry {
    fn resolve(&self, key: &str) -> Option<Arc<dyn CounterSampler>> {
        let samplers = self.samplers.lock().unwrap();
        samplers
            .get(key)
            .map(|sampler| Arc::clone(sampler) as Arc<dyn CounterSampler>)
    }

    fn sampler_names(&self) -> Vec<String> {
        self.samplers.lock().unwrap().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_drains_accumulated_work() {
        let sampler = SpanSampler::new();
        sampler.record_ns(1_500_000);
        sampler.record_ns(500_000);

        let sample = sampler.sample();
        assert!((sample.elapsed_ms - 2.0).abs() < 1e-6);
        assert_eq!(sample.sample_count, 2);

        // Fully drained: the next poll sees only new work.
        let sample = sampler.sample();
        assert_eq!(sample.elapsed_ms, 0.0);
        assert_eq!(sample.sample_count, 0);
    }

    #[test]
    fn guard_records_one_span_on_drop() {
        let sampler = Arc::new(SpanSampler::new());
        {
            let _guard = sampler.begin();
        }
        let sample = sampler.sample();
        assert_eq!(sample.sample_count, 1);
        assert!(sample.elapsed_ms >= 0.0);
    }

    #[test]
    fn registry_resolves_known_names_only() {
        let registry = SpanRegistry::new();
        let created = registry.sampler("RenderLoop.Draw");
        created.record_ns(1_000_000);

        let resolved = registry.resolve("RenderLoop.Draw").unwrap();
        assert_eq!(resolved.sample().sample_count, 1);
        assert!(registry.resolve("Shadows.Draw").is_none());
    }

    #[test]
    fn sampler_is_shared_per_name() {
        let registry = SpanRegistry::new();
        registry.sampler("a").record_ns(10);
        registry.sampler("a").record_ns(10);
        assert_eq!(registry.sampler("a").sample().sample_count, 2);
        assert_eq!(registry.sampler_names(), vec!["a".to_string()]);
    }
}
