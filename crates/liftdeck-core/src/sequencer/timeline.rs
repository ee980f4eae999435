//! Cue scheduling on the virtual clock.
//!
//! A [`Timeline`] is one scheduled sequence: an ordered chain of cues where
//! each cue fires a fixed delay after the previous one. Several timelines
//! may be pending at once; the sequencer always fires the earliest due cue
//! first, breaking ties by scheduling order.

use std::{collections::VecDeque, time::Duration};

/// Deferred state mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Move up one floor (clamped to the top floor).
    Arrive,
    /// Open the doors.
    OpenDoors,
    /// Reveal the floor's text.
    Reveal,
}

/// Which command scheduled a cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    /// Intro dismissed.
    Start,
    /// Move to the next floor.
    Advance,
    /// Back to the lobby.
    Restart,
}

/// A cue that fired during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    /// Sequence the cue belonged to.
    pub sequence: Sequence,
    /// The cue.
    pub cue: Cue,
    /// Virtual time the cue was due at.
    pub at: Duration,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct Step {
    pub delay: Duration,
    pub cue: Cue,
}

impl Step {
    pub(super) fn after(delay: Duration, cue: Cue) -> Self {
        Self { delay, cue }
    }
}

#[derive(Debug, Clone)]
pub(super) struct Timeline {
    pub sequence: Sequence,
    /// Scheduling order, for tie-breaks.
    pub order: u64,
    /// Due time of the front step.
    pub due: Duration,
    pub steps: VecDeque<Step>,
}

impl Timeline {
    /// Schedule `steps` starting at `now`. `None` if there are no steps.
    pub(super) fn new(
        sequence: Sequence,
        order: u64,
        now: Duration,
        steps: impl IntoIterator<Item = Step>,
    ) -> Option<Self> {
        let steps: VecDeque<Step> = steps.into_iter().collect();
        let due = now.saturating_add(steps.front()?.delay);
        Some(Self { sequence, order, due, steps })
    }

    /// Pop the front cue and reschedule the rest.
    ///
    /// Returns the fired cue and whether the timeline has more steps.
    pub(super) fn pop(&mut self) -> Option<(Fired, bool)> {
        let step = self.steps.pop_front()?;
        let fired = Fired { sequence: self.sequence, cue: step.cue, at: self.due };
        if let Some(next) = self.steps.front() {
            self.due = self.due.saturating_add(next.delay);
            Some((fired, true))
        } else {
            Some((fired, false))
        }
    }

    pub(super) fn remaining(&self) -> usize {
        self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn empty_timeline_is_not_scheduled() {
        assert!(Timeline::new(Sequence::Start, 0, Duration::ZERO, Vec::<Step>::new()).is_none());
    }

    #[test]
    fn steps_chain_relative_delays() {
        let mut timeline = Timeline::new(
            Sequence::Restart,
            0,
            ms(100),
            [Step::after(ms(500), Cue::OpenDoors), Step::after(ms(400), Cue::Reveal)],
        )
        .unwrap();

        assert_eq!(timeline.due, ms(600));

        let (fired, more) = timeline.pop().unwrap();
        assert_eq!(fired, Fired { sequence: Sequence::Restart, cue: Cue::OpenDoors, at: ms(600) });
        assert!(more);
        assert_eq!(timeline.due, ms(1000));

        let (fired, more) = timeline.pop().unwrap();
        assert_eq!(fired.cue, Cue::Reveal);
        assert_eq!(fired.at, ms(1000));
        assert!(!more);
        assert!(timeline.pop().is_none());
    }
}
