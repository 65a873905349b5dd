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

//! # Cadence Core
//!
//! Foundational crate containing traits, core types, and interface contracts
//! shared by the Cadence frame-statistics toolkit.

#![warn(missing_docs)]

pub mod clock;
pub mod config;
pub mod counter;
pub mod error;
pub mod snapshot;
pub mod world;

pub use clock::{ClockSource, MonotonicClock};
pub use config::{default_render_counters, CounterSpec, DetailLevel, OverlayConfig};
pub use counter::{CounterSample, CounterSampler, SamplerProvider};
pub use error::{TelemetryError, TelemetryResult};
pub use snapshot::{CompactSnapshot, CounterStats, DetailedSnapshot};
pub use world::WorldClock;
