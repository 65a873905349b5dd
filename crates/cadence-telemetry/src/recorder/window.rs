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

//! Discrete windowed averaging of counter accumulators.

use super::registry::CounterRegistry;

/// Frames per averaging window in the reference configuration.
pub const AVERAGE_WINDOW_FRAMES: u32 = 64;

/// Counts accumulated frames and, once per window, turns the registry's
/// accumulators into averages.
///
/// Averages update in discrete steps every `size` frames rather than as a
/// continuous rolling mean; consumers rely on the stable cadence, and the
/// cost stays O(1) per frame.
#[derive(Debug)]
pub struct AveragingWindow {
    frames: u32,
    size: u32,
}

impl AveragingWindow {
    /// Creates a window of `size` frames (clamped to at least one).
    pub fn new(size: u32) -> Self {
        Self {
            frames: 0,
            size: size.max(1),
        }
    }

    /// Frames accumulated since the last window boundary.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Window size in frames.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Advances the window after a frame's counters have been accumulated.
    ///
    /// Returns `true` when a window boundary was crossed: the registry's
    /// averages were refreshed and its accumulators reset.
    pub fn on_frame_accumulated(&mut self, registry: &mut CounterRegistry) -> bool {
        self.frames += 1;
        if self.frames >= self.size {
            registry.finish_window(self.size);
            self.frames = 0;
            return true;
        }
        false
    }
}

impl Default for AveragingWindow {
    fn default() -> Self {
        Self::new(AVERAGE_WINDOW_FRAMES)
    }
}
