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

//! Optional game-world clock collaborator.

use std::fmt::Debug;

/// Read-only view of a fixed-step simulation clock.
///
/// The recorder uses this to relate rendered frames to simulation ticks:
/// how much simulated time the frame covered, and how far the frame ran
/// behind the last due tick. When no world clock is attached the recorder
/// skips that history entirely; nothing else depends on it.
pub trait WorldClock: Send + Sync + Debug + 'static {
    /// The simulation tick counter.
    fn current_tick(&self) -> u32;

    /// Seconds of simulated time per tick.
    fn tick_interval_secs(&self) -> f64;

    /// Wall time at which the next tick is due, in seconds.
    fn next_tick_time_secs(&self) -> f64;

    /// Wall time at which the current frame started, in seconds.
    fn frame_time_secs(&self) -> f64;
}
