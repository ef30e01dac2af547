//! Time-domain playback events.

/// One atomic playback event: a frequency held for a duration.
///
/// A frequency of 0 is silence (a rest). Builders never emit a step
/// with a zero duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Step {
    /// Tone frequency in Hz (0 = rest)
    pub freq_hz: u16,
    /// How long the step lasts, in milliseconds
    pub duration_ms: u32,
}

impl Step {
    /// A sounding step.
    pub const fn tone(freq_hz: u16, duration_ms: u32) -> Self {
        Self { freq_hz, duration_ms }
    }

    /// A silent step.
    pub const fn rest(duration_ms: u32) -> Self {
        Self { freq_hz: 0, duration_ms }
    }

    pub const fn is_rest(&self) -> bool {
        self.freq_hz == 0
    }

    /// Duration in microseconds, widened so no `u32` millisecond value overflows.
    pub const fn duration_us(&self) -> u64 {
        self.duration_ms as u64 * 1000
    }
}

/// A read-only view over a compiled step sequence.
///
/// The view never owns its storage; whoever allocated the step buffer
/// keeps it alive. An empty view stands in for "no melody".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Melody<'a> {
    steps: &'a [Step],
}

impl<'a> Melody<'a> {
    pub const fn new(steps: &'a [Step]) -> Self {
        Self { steps }
    }

    pub const fn empty() -> Self {
        Self { steps: &[] }
    }

    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Step> {
        self.steps.get(index)
    }

    pub const fn steps(&self) -> &'a [Step] {
        self.steps
    }

    /// Total playing time of one pass through the melody.
    pub fn total_duration_ms(&self) -> u64 {
        self.steps.iter().map(|s| s.duration_ms as u64).sum()
    }

    pub fn iter(&self) -> core::slice::Iter<'a, Step> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for Melody<'a> {
    type Item = &'a Step;
    type IntoIter = core::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
