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

//! Monotonic clock abstractions for frame timing.

use std::fmt::Debug;
use std::time::Instant;

use crate::error::TelemetryError;

/// Conversion used when the platform cannot report a timer frequency:
/// one tick is treated as one microsecond.
const FALLBACK_TICKS_PER_SEC: u64 = 1_000_000;

/// A monotonic source of elapsed time, measured in platform ticks.
///
/// Tick counts must never decrease over the life of the process. The
/// conversion factor is read once at startup and must stay constant.
pub trait ClockSource: Send + Sync + Debug + 'static {
    /// Returns the tick count elapsed since an arbitrary fixed origin.
    fn now_ticks(&self) -> u64;

    /// Returns the number of ticks in one millisecond.
    fn ticks_per_ms(&self) -> f64;

    /// Converts the interval between two tick readings to milliseconds.
    fn elapsed_ms(&self, from_ticks: u64, to_ticks: u64) -> f32 {
        (to_ticks.saturating_sub(from_ticks) as f64 / self.ticks_per_ms()) as f32
    }
}

/// [`ClockSource`] backed by [`std::time::Instant`].
///
/// Ticks count from construction at the configured frequency.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
    ticks_per_sec: u64,
}

impl MonotonicClock {
    /// Creates a clock with nanosecond ticks, `Instant`'s native resolution.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            ticks_per_sec: 1_000_000_000,
        }
    }

    /// Creates a clock from a platform-reported timer frequency in ticks
    /// per second.
    ///
    /// When no frequency is available, falls back to microsecond ticks and
    /// logs a warning; this is never an error.
    pub fn from_frequency(ticks_per_sec: Option<u64>) -> Self {
        let ticks_per_sec = match ticks_per_sec {
            Some(freq) if freq > 0 => freq,
            _ => {
                log::warn!(
                    "{}; assuming {} ticks/s",
                    TelemetryError::ClockFrequencyUnavailable,
                    FALLBACK_TICKS_PER_SEC
                );
                FALLBACK_TICKS_PER_SEC
            }
        };
        Self {
            origin: Instant::now(),
            ticks_per_sec,
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for MonotonicClock {
    fn now_ticks(&self) -> u64 {
        let elapsed_ns = self.origin.elapsed().as_nanos();
        (elapsed_ns * self.ticks_per_sec as u128 / 1_000_000_000) as u64
    }

    fn ticks_per_ms(&self) -> f64 {
        self.ticks_per_sec as f64 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_never_decrease() {
        let clock = MonotonicClock::new();
        let mut previous = clock.now_ticks();
        for _ in 0..100 {
            let now = clock.now_ticks();
            assert!(now >= previous);
            previous = now;
        }
    }

    #[test]
    fn elapsed_ms_converts_with_frequency() {
        // 10_000 ticks per ms, the common Windows QPC rate.
        let clock = MonotonicClock::from_frequency(Some(10_000_000));
        assert_eq!(clock.ticks_per_ms(), 10_000.0);
        assert!((clock.elapsed_ms(0, 160_000) - 16.0).abs() < 1e-6);
    }

    #[test]
    fn elapsed_ms_saturates_on_reversed_interval() {
        let clock = MonotonicClock::from_frequency(Some(1_000_000));
        assert_eq!(clock.elapsed_ms(500, 100), 0.0);
    }

    #[test]
    fn missing_frequency_falls_back_to_microseconds() {
        let clock = MonotonicClock::from_frequency(None);
        assert_eq!(clock.ticks_per_ms(), 1000.0);
    }
}
