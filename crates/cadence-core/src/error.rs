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

//! Error types for the statistics toolkit.
//!
//! The recorder itself is total: every degraded condition is absorbed and
//! reported as zero or `None`. These types exist for the edges — startup
//! resolution, clock setup, presentation sinks — where a condition is worth
//! a log line or a caller decision.

use std::fmt::Display;

/// A specialized `Result` type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// An error that can occur within the statistics toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// A named counter could not be resolved at startup; the entry reports
    /// zero from then on.
    CounterUnresolved(String),
    /// The platform could not report a timer frequency; a fallback
    /// conversion is used.
    ClockFrequencyUnavailable,
    /// No world clock is attached; the tick-duration history is skipped.
    MissingWorldClock,
    /// A presentation sink failed to publish a snapshot.
    Sink(String),
}

impl Display for TelemetryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TelemetryError::CounterUnresolved(name) => {
                write!(f, "counter not resolved: {name}")
            }
            TelemetryError::ClockFrequencyUnavailable => {
                write!(f, "platform timer frequency unavailable")
            }
            TelemetryError::MissingWorldClock => write!(f, "no world clock attached"),
            TelemetryError::Sink(msg) => write!(f, "sink error: {msg}"),
        }
    }
}

impl std::error::Error for TelemetryError {}
