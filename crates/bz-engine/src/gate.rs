//! Restartable, stoppable interval timer.

use crate::clock::Clock;

/// Answers "has the interval elapsed since the last arm/reset?" without
/// blocking.
///
/// The gate fires at most once per interval: a true result re-arms the
/// reference time to now. Elapsed time is computed with wrapping
/// subtraction, so a clock wraparound is harmless as long as the interval
/// is shorter than the wrap period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElapsedGate {
    interval_us: u64,
    last_us: u64,
    armed: bool,
}

impl ElapsedGate {
    /// A disarmed gate.
    pub const fn new() -> Self {
        Self {
            interval_us: 0,
            last_us: 0,
            armed: false,
        }
    }

    /// Record the current time and interval, and enable the gate.
    pub fn arm(&mut self, clock: &impl Clock, interval_us: u64) {
        self.interval_us = interval_us;
        self.last_us = clock.now_us();
        self.armed = true;
    }

    /// True once per elapsed interval; always false while disarmed.
    pub fn is_elapsed(&mut self, clock: &impl Clock) -> bool {
        if !self.armed {
            return false;
        }
        let now = clock.now_us();
        if now.wrapping_sub(self.last_us) >= self.interval_us {
            self.last_us = now;
            true
        } else {
            false
        }
    }

    /// Suppress future true results until re-armed.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Change the interval, keeping the reference time.
    pub fn set_interval(&mut self, interval_us: u64) {
        self.interval_us = interval_us;
    }

    /// Reset the reference time to now; armed state and interval are kept.
    pub fn rearm(&mut self, clock: &impl Clock) {
        self.last_us = clock.now_us();
    }

    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    pub const fn interval_us(&self) -> u64 {
        self.interval_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SimClock;

    #[test]
    fn new_gate_never_fires() {
        let clock = SimClock::new();
        let mut gate = ElapsedGate::new();
        clock.advance_ms(1000);
        assert!(!gate.is_elapsed(&clock));
    }

    #[test]
    fn fires_once_per_interval() {
        let clock = SimClock::new();
        let mut gate = ElapsedGate::new();
        gate.arm(&clock, 100);

        clock.advance_us(99);
        assert!(!gate.is_elapsed(&clock));
        clock.advance_us(1);
        assert!(gate.is_elapsed(&clock));
        // Auto-rearmed at t=100
        assert!(!gate.is_elapsed(&clock));
        clock.advance_us(100);
        assert!(gate.is_elapsed(&clock));
    }

    #[test]
    fn late_poll_rearms_from_poll_time() {
        let clock = SimClock::new();
        let mut gate = ElapsedGate::new();
        gate.arm(&clock, 100);

        clock.advance_us(250);
        assert!(gate.is_elapsed(&clock));
        clock.advance_us(99);
        assert!(!gate.is_elapsed(&clock));
        clock.advance_us(1);
        assert!(gate.is_elapsed(&clock));
    }

    #[test]
    fn disarm_blocks_until_rearmed() {
        let clock = SimClock::new();
        let mut gate = ElapsedGate::new();
        gate.arm(&clock, 10);
        gate.disarm();
        clock.advance_us(100);
        assert!(!gate.is_elapsed(&clock));
        assert!(!gate.is_armed());

        gate.arm(&clock, 10);
        clock.advance_us(10);
        assert!(gate.is_elapsed(&clock));
    }

    #[test]
    fn set_interval_keeps_reference_time() {
        let clock = SimClock::new();
        let mut gate = ElapsedGate::new();
        gate.arm(&clock, 1000);
        clock.advance_us(60);
        gate.set_interval(50);
        assert_eq!(gate.interval_us(), 50);
        assert!(gate.is_elapsed(&clock));
    }

    #[test]
    fn rearm_restarts_reference_time_only() {
        let clock = SimClock::new();
        let mut gate = ElapsedGate::new();
        gate.arm(&clock, 100);
        clock.advance_us(90);
        gate.rearm(&clock);
        clock.advance_us(90);
        assert!(!gate.is_elapsed(&clock));
        clock.advance_us(10);
        assert!(gate.is_elapsed(&clock));

        // Rearming a disarmed gate does not enable it
        gate.disarm();
        gate.rearm(&clock);
        clock.advance_us(500);
        assert!(!gate.is_elapsed(&clock));
    }

    #[test]
    fn tolerates_clock_wraparound() {
        let clock = SimClock::starting_at(u64::MAX - 40);
        let mut gate = ElapsedGate::new();
        gate.arm(&clock, 100);

        clock.advance_us(60); // wrapped, 60 elapsed
        assert!(!gate.is_elapsed(&clock));
        clock.advance_us(40);
        assert!(gate.is_elapsed(&clock));
    }

    #[test]
    fn zero_interval_fires_immediately() {
        let clock = SimClock::new();
        let mut gate = ElapsedGate::new();
        gate.arm(&clock, 0);
        assert!(gate.is_elapsed(&clock));
    }
}
