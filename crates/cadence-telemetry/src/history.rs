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

//! Efficient storage for rolling per-frame sample histories.

/// Number of per-frame samples retained by the recorder's histories.
pub const FRAME_HISTORY_LEN: usize = 128;

/// A fixed-size circular buffer of per-frame samples, addressed by frame
/// ordinal.
///
/// Slots are written at `ordinal % N`, so after warm-up the buffer always
/// mirrors the most recent `N` frame ordinals. Slots not yet written read
/// as zero and participate in the aggregate queries below.
#[derive(Debug, Clone)]
pub struct SampleHistory<const N: usize> {
    samples: [f32; N],
}

impl<const N: usize> SampleHistory<N> {
    /// Creates a zeroed history.
    pub fn new() -> Self {
        Self { samples: [0.0; N] }
    }

    /// Writes `value` into the slot for `frame_ordinal`, overwriting any
    /// prior entry. Writes are unconditionally accepted.
    pub fn record(&mut self, frame_ordinal: u64, value: f32) {
        self.samples[(frame_ordinal % N as u64) as usize] = value;
    }

    /// The full slot sequence, including unwritten zero slots.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Buffer capacity in slots.
    pub fn capacity(&self) -> usize {
        N
    }

    /// Minimum over the full buffer.
    pub fn min(&self) -> f32 {
        self.samples.iter().copied().fold(f32::MAX, f32::min)
    }

    /// Maximum over the full buffer.
    pub fn max(&self) -> f32 {
        self.samples.iter().copied().fold(f32::MIN, f32::max)
    }

    /// Arithmetic mean over the full buffer.
    pub fn average(&self) -> f32 {
        self.samples.iter().sum::<f32>() / N as f32
    }
}

impl<const N: usize> Default for SampleHistory<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// The recorder's frame-duration history.
pub type FrameHistory = SampleHistory<FRAME_HISTORY_LEN>;

/// Two parallel histories tracking world-tick timing per frame.
///
/// Channel one holds the simulated milliseconds advanced by world ticks
/// during the frame; channel two holds how far the frame ran behind the
/// last due tick.
#[derive(Debug, Clone, Default)]
pub struct DualTickHistory {
    ticks_ms: FrameHistory,
    lag_ms: FrameHistory,
}

impl DualTickHistory {
    /// Writes both channels for `frame_ordinal`.
    pub fn record(&mut self, frame_ordinal: u64, ticks_ms: f32, lag_ms: f32) {
        self.ticks_ms.record(frame_ordinal, ticks_ms);
        self.lag_ms.record(frame_ordinal, lag_ms);
    }

    /// Simulated milliseconds covered by ticks, per frame slot.
    pub fn ticks_ms(&self) -> &FrameHistory {
        &self.ticks_ms
    }

    /// Frame lag behind the last due tick, per frame slot.
    pub fn lag_ms(&self) -> &FrameHistory {
        &self.lag_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_addresses_by_ordinal_modulo_capacity() {
        let mut history = SampleHistory::<4>::new();
        history.record(0, 1.0);
        history.record(1, 2.0);
        history.record(5, 6.0); // 5 % 4 == 1, overwrites 2.0
        assert_eq!(history.samples(), &[1.0, 6.0, 0.0, 0.0]);
    }

    #[test]
    fn warm_up_slots_read_zero() {
        let mut history = SampleHistory::<4>::new();
        history.record(0, 3.0);
        assert_eq!(history.min(), 0.0);
        assert_eq!(history.max(), 3.0);
        assert!((history.average() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn full_buffer_of_constant_samples() {
        let mut history = FrameHistory::new();
        for frame in 0..FRAME_HISTORY_LEN as u64 {
            history.record(frame, 16.0);
        }
        assert_eq!(history.min(), 16.0);
        assert_eq!(history.max(), 16.0);
        assert!((history.average() - 16.0).abs() < 1e-4);
    }

    #[test]
    fn only_most_recent_capacity_samples_survive() {
        let mut history = SampleHistory::<4>::new();
        for frame in 0..9u64 {
            history.record(frame, frame as f32);
        }
        // Frames 5..=8 live at slots 1, 2, 3, 0.
        assert_eq!(history.samples(), &[8.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn dual_history_writes_both_channels() {
        let mut history = DualTickHistory::default();
        history.record(2, 16.7, 4.2);
        assert_eq!(history.ticks_ms().samples()[2], 16.7);
        assert_eq!(history.lag_ms().samples()[2], 4.2);
    }
}
