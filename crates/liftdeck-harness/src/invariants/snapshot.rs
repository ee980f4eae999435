//! Observable session state for invariant checks.

use liftdeck_app::App;
use liftdeck_core::{LockPolicy, Phase, PresentationState};

/// Snapshot of a session, with the previous flags for transition checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Flags at the previous snapshot. `None` for the first one.
    pub previous: Option<PresentationState>,
    /// Current flags.
    pub current: PresentationState,
    /// Current phase.
    pub phase: Phase,
    /// Number of floors in the deck.
    pub floors: usize,
    /// Lock policy in effect.
    pub policy: LockPolicy,
    /// Cues still scheduled.
    pub pending_cues: usize,
    /// Session has been disposed.
    pub disposed: bool,
}

impl SessionSnapshot {
    /// Capture the App's state.
    pub fn capture(app: &App, previous: Option<PresentationState>) -> Self {
        let sequencer = app.sequencer();
        Self {
            previous,
            current: sequencer.state(),
            phase: sequencer.phase(),
            floors: sequencer.floors().get(),
            policy: sequencer.policy(),
            pending_cues: sequencer.pending_cues(),
            disposed: app.is_disposed(),
        }
    }

    /// Snapshot of bare flags, for testing invariants directly.
    pub fn of(current: PresentationState, floors: usize) -> Self {
        Self {
            previous: None,
            current,
            phase: Phase::Idle,
            floors,
            policy: LockPolicy::HoldUntilRevealed,
            pending_cues: 0,
            disposed: false,
        }
    }

    /// Set the previous flags.
    #[must_use]
    pub fn after(mut self, previous: PresentationState) -> Self {
        self.previous = Some(previous);
        self
    }

    /// Set the lock policy.
    #[must_use]
    pub fn with_policy(mut self, policy: LockPolicy) -> Self {
        self.policy = policy;
        self
    }
}
