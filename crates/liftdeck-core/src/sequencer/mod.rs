//! Floor-transition state machine.
//!
//! The [`Sequencer`] owns the [`PresentationState`] and walks it through the
//! three timed sequences of the presentation:
//!
//! - `start`: intro dismissed, doors open, text revealed
//! - `advance`: doors close, next floor, doors open, text revealed
//! - `restart`: back to the lobby, doors open, text revealed
//!
//! Commands mutate state immediately and schedule the rest of their sequence
//! as [`Cue`]s on a virtual clock. The clock only moves when the caller
//! invokes [`Sequencer::tick`] with the elapsed time, so the same code runs
//! against wall-clock ticks in the terminal and against scripted time in
//! tests.
//!
//! # Invariants
//!
//! - `current_floor` stays below the deck length.
//! - `current_floor` changes only by +1 on arrival or to 0 on restart.
//! - `advance` is a no-op while `traveling` is set.
//! - Cues fire in due-time order; ties fire in scheduling order.

mod state;
mod timeline;

use std::{num::NonZeroUsize, time::Duration};

pub use state::{IgnoreReason, LockPolicy, Outcome, Phase, PresentationState};
pub use timeline::{Cue, Fired, Sequence};
use timeline::{Step, Timeline};

use crate::Timings;

/// Floor-transition state machine.
///
/// Pure state machine: no timers, no I/O. Feed it commands and elapsed
/// time; read back the state.
#[derive(Debug, Clone)]
pub struct Sequencer {
    floors: NonZeroUsize,
    timings: Timings,
    policy: LockPolicy,
    state: PresentationState,
    phase: Phase,
    /// Virtual time since construction.
    now: Duration,
    timelines: Vec<Timeline>,
    next_order: u64,
    doors_changed_at: Option<Duration>,
    revealed_changed_at: Option<Duration>,
    disposed: bool,
}

impl Sequencer {
    /// Create a sequencer for a deck of `floors` slides, on the intro screen.
    pub fn new(floors: NonZeroUsize) -> Self {
        Self {
            floors,
            timings: Timings::default(),
            policy: LockPolicy::default(),
            state: PresentationState::default(),
            phase: Phase::NotStarted,
            now: Duration::ZERO,
            timelines: Vec::new(),
            next_order: 0,
            doors_changed_at: None,
            revealed_changed_at: None,
            disposed: false,
        }
    }

    /// Use custom timings.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Use a specific lock policy.
    #[must_use]
    pub fn with_policy(mut self, policy: LockPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Dismiss the intro screen.
    ///
    /// Doors open after `enter_open`, text is revealed `reveal` later.
    pub fn start(&mut self) -> Outcome {
        if self.disposed {
            return Self::ignore("start", IgnoreReason::Disposed);
        }
        if self.state.started {
            return Self::ignore("start", IgnoreReason::AlreadyStarted);
        }

        self.state.started = true;
        self.phase = Phase::Entering;
        self.schedule(Sequence::Start, [
            Step::after(self.timings.enter_open, Cue::OpenDoors),
            Step::after(self.timings.reveal, Cue::Reveal),
        ]);

        tracing::debug!(now = ?self.now, "start accepted");
        Outcome::Accepted
    }

    /// Ride to the next floor.
    ///
    /// Closes the doors, hides the text and takes the travel lock
    /// immediately. Arrives after `travel`, opens the doors `settle` later
    /// and reveals the text `reveal` after that. Ignored while traveling.
    /// Under [`LockPolicy::HoldUntilRevealed`] an unfinished start or restart
    /// tail is dropped so it cannot open the doors mid-ride.
    pub fn advance(&mut self) -> Outcome {
        if self.disposed {
            return Self::ignore("advance", IgnoreReason::Disposed);
        }
        if !self.state.started {
            return Self::ignore("advance", IgnoreReason::NotStarted);
        }
        if self.state.traveling {
            return Self::ignore("advance", IgnoreReason::Traveling);
        }
        // The reference deck replays the ride on the top floor and clamps;
        // only its timing-compatible policy keeps that.
        if self.is_last_floor() && self.policy == LockPolicy::HoldUntilRevealed {
            return Self::ignore("advance", IgnoreReason::LastFloor);
        }

        if self.policy == LockPolicy::HoldUntilRevealed && !self.timelines.is_empty() {
            tracing::debug!(cancelled = self.pending_cues(), "advance supersedes pending cues");
            self.timelines.clear();
        }

        let now = self.now;
        self.set_doors(false, now);
        self.set_revealed(false, now);
        self.state.traveling = true;
        self.phase = Phase::Closing;
        self.schedule(Sequence::Advance, [
            Step::after(self.timings.travel, Cue::Arrive),
            Step::after(self.timings.settle, Cue::OpenDoors),
            Step::after(self.timings.reveal, Cue::Reveal),
        ]);

        tracing::debug!(from = self.state.current_floor, now = ?self.now, "advance accepted");
        Outcome::Accepted
    }

    /// Return to the lobby.
    ///
    /// Not gated by the travel lock. Under [`LockPolicy::HoldUntilRevealed`]
    /// any in-flight sequence is dropped so the reset is authoritative.
    pub fn restart(&mut self) -> Outcome {
        if self.disposed {
            return Self::ignore("restart", IgnoreReason::Disposed);
        }
        if !self.state.started {
            return Self::ignore("restart", IgnoreReason::NotStarted);
        }

        if self.policy == LockPolicy::HoldUntilRevealed {
            if !self.timelines.is_empty() {
                tracing::debug!(cancelled = self.pending_cues(), "restart supersedes pending cues");
            }
            self.timelines.clear();
            self.state.traveling = false;
        }

        let now = self.now;
        self.set_doors(false, now);
        self.set_revealed(false, now);
        self.state.current_floor = 0;
        self.phase = Phase::Resetting;
        self.schedule(Sequence::Restart, [
            Step::after(self.timings.reset_open, Cue::OpenDoors),
            Step::after(self.timings.reveal, Cue::Reveal),
        ]);

        tracing::debug!(now = ?self.now, "restart accepted");
        Outcome::Accepted
    }

    /// Advance the virtual clock by `elapsed` and fire every cue now due.
    ///
    /// Returns the fired cues in firing order. Fires nothing once disposed.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<Fired> {
        if self.disposed {
            return Vec::new();
        }

        self.now = self.now.saturating_add(elapsed);

        let mut fired = Vec::new();
        while let Some(index) = self.next_due() {
            let Some(timeline) = self.timelines.get_mut(index) else {
                break;
            };
            let Some((cue, more)) = timeline.pop() else {
                self.timelines.remove(index);
                continue;
            };
            if !more {
                self.timelines.remove(index);
            }

            self.apply(cue);
            fired.push(cue);
        }

        fired
    }

    /// Cancel every pending cue and refuse further commands.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        tracing::debug!(cancelled = self.pending_cues(), "sequencer disposed");
        self.timelines.clear();
        self.disposed = true;
    }

    /// Index of the earliest due timeline, if any cue is due.
    fn next_due(&self) -> Option<usize> {
        self.timelines
            .iter()
            .enumerate()
            .filter(|(_, timeline)| timeline.due <= self.now)
            .min_by_key(|(_, timeline)| (timeline.due, timeline.order))
            .map(|(index, _)| index)
    }

    fn schedule<const N: usize>(&mut self, sequence: Sequence, steps: [Step; N]) {
        let order = self.next_order;
        self.next_order = self.next_order.saturating_add(1);
        if let Some(timeline) = Timeline::new(sequence, order, self.now, steps) {
            self.timelines.push(timeline);
        }
    }

    fn apply(&mut self, fired: Fired) {
        tracing::debug!(sequence = ?fired.sequence, cue = ?fired.cue, at = ?fired.at, "cue fired");

        match fired.cue {
            Cue::Arrive => {
                self.state.current_floor =
                    self.state.current_floor.saturating_add(1).min(self.last_floor());
                if self.policy == LockPolicy::ReleaseOnArrival {
                    self.state.traveling = false;
                }
                self.phase = Phase::Arriving;
            },
            Cue::OpenDoors => {
                self.set_doors(true, fired.at);
                self.phase = Phase::Opening;
            },
            Cue::Reveal => {
                self.set_revealed(true, fired.at);
                if fired.sequence == Sequence::Advance && self.policy == LockPolicy::HoldUntilRevealed
                {
                    self.state.traveling = false;
                }
                self.phase = Phase::Idle;
            },
        }
    }

    fn set_doors(&mut self, open: bool, at: Duration) {
        if self.state.doors_open != open {
            self.state.doors_open = open;
            self.doors_changed_at = Some(at);
        }
    }

    fn set_revealed(&mut self, revealed: bool, at: Duration) {
        if self.state.revealed != revealed {
            self.state.revealed = revealed;
            self.revealed_changed_at = Some(at);
        }
    }

    fn ignore(command: &'static str, reason: IgnoreReason) -> Outcome {
        tracing::debug!(command, ?reason, "command ignored");
        Outcome::Ignored(reason)
    }

    /// Current presentation flags.
    pub fn state(&self) -> PresentationState {
        self.state
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Lock policy in effect.
    pub fn policy(&self) -> LockPolicy {
        self.policy
    }

    /// Sequence timings in effect.
    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    /// Number of floors in the deck.
    pub fn floors(&self) -> NonZeroUsize {
        self.floors
    }

    /// Index of the top floor.
    pub fn last_floor(&self) -> usize {
        self.floors.get() - 1
    }

    /// Viewer is on the top floor.
    pub fn is_last_floor(&self) -> bool {
        self.state.current_floor >= self.last_floor()
    }

    /// The "next floor" control is enabled: started, revealed, not
    /// traveling and not on the top floor.
    pub fn can_advance(&self) -> bool {
        !self.disposed
            && self.state.started
            && self.state.revealed
            && !self.state.traveling
            && !self.is_last_floor()
    }

    /// Virtual time since construction.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Time since `doors_open` last changed, `Duration::MAX` if it never has.
    pub fn since_doors_changed(&self) -> Duration {
        self.doors_changed_at.map_or(Duration::MAX, |at| self.now.saturating_sub(at))
    }

    /// Time since `revealed` last changed, `Duration::MAX` if it never has.
    pub fn since_revealed_changed(&self) -> Duration {
        self.revealed_changed_at.map_or(Duration::MAX, |at| self.now.saturating_sub(at))
    }

    /// Number of cues still scheduled.
    pub fn pending_cues(&self) -> usize {
        self.timelines.iter().map(Timeline::remaining).sum()
    }

    /// Nothing is scheduled.
    pub fn is_settled(&self) -> bool {
        self.timelines.is_empty()
    }

    /// [`Sequencer::dispose`] has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
