//! Sequence timings.

use std::time::Duration;

/// Fixed delays used by the sequencer's timed sequences.
///
/// The defaults are the hand-tuned values of the reference deck. A full
/// advance takes `travel + settle + reveal` (1500 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Intro dismissed to doors opening.
    pub enter_open: Duration,
    /// Doors opening to content revealed.
    pub reveal: Duration,
    /// Doors closing to arrival at the next floor.
    pub travel: Duration,
    /// Arrival to doors opening.
    pub settle: Duration,
    /// Restart to doors opening on the lobby.
    pub reset_open: Duration,
    /// Time the door panels take to slide fully open or shut.
    pub door_motion: Duration,
}

impl Timings {
    /// Reference timings.
    pub const REFERENCE: Self = Self {
        enter_open: Duration::from_millis(600),
        reveal: Duration::from_millis(400),
        travel: Duration::from_millis(800),
        settle: Duration::from_millis(300),
        reset_open: Duration::from_millis(500),
        door_motion: Duration::from_millis(600),
    };

    /// Time from `advance()` until the next floor is fully revealed.
    pub fn advance_total(&self) -> Duration {
        self.travel + self.settle + self.reveal
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::REFERENCE
    }
}
