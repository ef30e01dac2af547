//! Monotonic microsecond time sources.

use core::cell::Cell;

/// A monotonically increasing microsecond counter.
///
/// The counter may wrap; consumers compare readings with wrapping
/// subtraction.
pub trait Clock {
    fn now_us(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}

/// A manually advanced clock for tests and offline rendering.
#[derive(Debug, Default)]
pub struct SimClock {
    now: Cell<u64>,
}

impl SimClock {
    pub const fn new() -> Self {
        Self { now: Cell::new(0) }
    }

    /// Start at an arbitrary reading (e.g. just before wraparound).
    pub const fn starting_at(us: u64) -> Self {
        Self { now: Cell::new(us) }
    }

    pub fn set(&self, us: u64) {
        self.now.set(us);
    }

    pub fn advance_us(&self, us: u64) {
        self.now.set(self.now.get().wrapping_add(us));
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance_us(ms * 1000);
    }
}

impl Clock for SimClock {
    fn now_us(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_and_wraps() {
        let clock = SimClock::starting_at(u64::MAX - 5);
        clock.advance_us(10);
        assert_eq!(clock.now_us(), 4);
    }

    #[test]
    fn borrowed_clock_reads_through() {
        let clock = SimClock::new();
        let by_ref = &clock;
        clock.advance_ms(3);
        assert_eq!(by_ref.now_us(), 3000);
    }
}
