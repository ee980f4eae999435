//! Observable sequencer state.

/// The five flags that describe where the viewer is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationState {
    /// Index of the floor being shown. Always below the deck length.
    pub current_floor: usize,
    /// Door panels are open (or opening).
    pub doors_open: bool,
    /// An advance sequence holds the travel lock.
    pub traveling: bool,
    /// The floor's text has been revealed.
    pub revealed: bool,
    /// The intro screen has been dismissed.
    pub started: bool,
}

/// Where the sequencer is in its current timed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Intro screen, doors shut.
    #[default]
    NotStarted,
    /// Intro dismissed, waiting for the doors to first open.
    Entering,
    /// Doors closing on the old floor, lock held.
    Closing,
    /// Arrived at the new floor, doors still shut.
    Arriving,
    /// Doors open, text not yet revealed.
    Opening,
    /// Restart requested, doors shut on the lobby.
    Resetting,
    /// Text revealed, waiting for the viewer.
    Idle,
}

/// When the travel lock is released during an advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockPolicy {
    /// Lock held until the new floor is revealed.
    #[default]
    HoldUntilRevealed,
    /// Lock released on arrival, before the doors open. Matches the timing
    /// of the reference deck, where a second advance can start during the
    /// door-open and reveal tail.
    ReleaseOnArrival,
}

/// Result of a sequencer command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command accepted and its sequence scheduled.
    Accepted,
    /// Command had no effect.
    Ignored(IgnoreReason),
}

impl Outcome {
    /// Command was accepted.
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Why a command was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// `start` called twice.
    AlreadyStarted,
    /// Floor command before `start`.
    NotStarted,
    /// `advance` while the travel lock is held.
    Traveling,
    /// `advance` on the top floor.
    LastFloor,
    /// Sequencer has been disposed.
    Disposed,
}
