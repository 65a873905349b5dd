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

//! # Cadence Telemetry
//!
//! Rolling frame statistics for a frame-driven host: per-frame timing with
//! bounded circular histories, named counter polling with discrete windowed
//! averages, and presentation sinks for overlay or export.

pub mod command;
pub mod history;
pub mod overlay;
pub mod providers;
pub mod recorder;
pub mod service;

pub use history::{DualTickHistory, FrameHistory, SampleHistory, FRAME_HISTORY_LEN};
pub use recorder::{FrameStatsRecorder, AVERAGE_WINDOW_FRAMES};
pub use service::{ServiceConfig, StatsService};
