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

//! Capability traits for profiler-style counters.
//!
//! A counter is anything that can report "time attributed to X and how many
//! times X happened" once per frame. The recorder never owns the measured
//! work; it only holds sampler handles resolved by name at startup.

use std::fmt::Debug;
use std::sync::Arc;

/// A single polled measurement from one counter.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CounterSample {
    /// Time attributed to the counter since the previous poll, in
    /// milliseconds.
    pub elapsed_ms: f32,
    /// Number of samples recorded since the previous poll.
    pub sample_count: u32,
}

/// The capability handle for one counter.
///
/// `sample` is called once per recorder tick; implementations report work
/// observed since the previous call and may be trivially replaced by a
/// test double.
pub trait CounterSampler: Send + Sync + Debug + 'static {
    /// Returns the measurement accumulated since the last call.
    fn sample(&self) -> CounterSample;
}

/// Resolves counter lookup keys to sampler handles.
pub trait SamplerProvider: Send + Sync + Debug + 'static {
    /// Returns a handle for `key`, or `None` when no such counter exists.
    fn resolve(&self, key: &str) -> Option<Arc<dyn CounterSampler>>;

    /// Returns the names of every resolvable counter.
    fn sampler_names(&self) -> Vec<String>;
}
