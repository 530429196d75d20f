//! Composition output types.

use crate::buffer::SampleBuffer;

/// Time span of one voiced character on a composed timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingEntry {
    /// The voiced character (never a space).
    pub character: char,
    /// Start of the blip, in milliseconds from the start of the timeline.
    pub start_ms: f64,
    /// End of the blip, in milliseconds from the start of the timeline.
    pub end_ms: f64,
}

impl TimingEntry {
    /// Length of the blip in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }
}

/// One composed sequence: audio plus per-character timing.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedTimeline {
    /// Every tone and silence segment, concatenated in order.
    pub buffer: SampleBuffer,
    /// One entry per non-space character, ordered by start time.
    pub timing: Vec<TimingEntry>,
    /// Sum of every tone and delay contribution, in milliseconds.
    pub total_duration_ms: f64,
}

impl ComposedTimeline {
    /// Returns true if the timing entries are ordered, non-overlapping and non-empty.
    pub fn is_monotonic(&self) -> bool {
        self.timing.iter().all(|e| e.start_ms < e.end_ms)
            && self
                .timing
                .windows(2)
                .all(|pair| pair[0].end_ms <= pair[1].start_ms)
    }
}
