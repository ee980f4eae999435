//! Decorative scanline sweep.
//!
//! A counter that steps once per interval and wraps at 100, giving the
//! backdrop a slow scanline. It runs on its own and never touches the
//! sequencer.

use std::time::Duration;

/// Default step interval.
pub const SWEEP_INTERVAL: Duration = Duration::from_millis(50);

/// Counter wraps at this value.
pub const SWEEP_PERIOD: u8 = 100;

/// Repeating scanline counter.
#[derive(Debug, Clone)]
pub struct Sweep {
    position: u8,
    interval: Duration,
    carry: Duration,
    running: bool,
}

impl Default for Sweep {
    fn default() -> Self {
        Self::new(SWEEP_INTERVAL)
    }
}

impl Sweep {
    /// Create a running sweep that steps every `interval`.
    ///
    /// A zero interval is treated as one millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            position: 0,
            interval: interval.max(Duration::from_millis(1)),
            carry: Duration::ZERO,
            running: true,
        }
    }

    /// Let `elapsed` pass. Returns `true` if the position moved.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.running {
            return false;
        }

        let interval = self.interval.as_nanos();
        let total = self.carry.as_nanos() + elapsed.as_nanos();
        let steps = total / interval;
        self.carry = Duration::from_nanos((total % interval) as u64);
        if steps == 0 {
            return false;
        }

        self.position = ((u128::from(self.position) + steps) % u128::from(SWEEP_PERIOD)) as u8;
        true
    }

    /// Stop the sweep. Later ticks do nothing.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Current position in `0..100`.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Sweep is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_every_interval() {
        let mut sweep = Sweep::default();
        assert!(!sweep.tick(Duration::from_millis(49)));
        assert_eq!(sweep.position(), 0);
        assert!(sweep.tick(Duration::from_millis(1)));
        assert_eq!(sweep.position(), 1);
    }

    #[test]
    fn carries_remainder_across_ticks() {
        let mut sweep = Sweep::default();
        sweep.tick(Duration::from_millis(120));
        assert_eq!(sweep.position(), 2);
        sweep.tick(Duration::from_millis(30));
        assert_eq!(sweep.position(), 3);
    }

    #[test]
    fn wraps_at_one_hundred() {
        let mut sweep = Sweep::default();
        sweep.tick(Duration::from_millis(50 * 99));
        assert_eq!(sweep.position(), 99);
        sweep.tick(Duration::from_millis(50));
        assert_eq!(sweep.position(), 0);
        sweep.tick(Duration::from_millis(50 * 205));
        assert_eq!(sweep.position(), 5);
    }

    #[test]
    fn stopped_sweep_is_frozen() {
        let mut sweep = Sweep::default();
        sweep.tick(Duration::from_millis(100));
        sweep.stop();
        assert!(!sweep.tick(Duration::from_secs(10)));
        assert_eq!(sweep.position(), 2);
        assert!(!sweep.is_running());
    }
}
