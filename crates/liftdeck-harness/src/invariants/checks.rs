//! Standard sequencer invariants.
//!
//! The visual-ordering invariants only hold under
//! [`LockPolicy::HoldUntilRevealed`]; the compatibility policy lets rides
//! and reveals overlap, so those checks pass trivially there.

use liftdeck_core::LockPolicy;

use super::{Invariant, InvariantKind, InvariantResult, SessionSnapshot, Violation};

fn violation(invariant: InvariantKind, message: String) -> InvariantResult {
    Err(Violation { invariant, message })
}

/// Floor index is always below the number of floors.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloorInBounds;

impl Invariant for FloorInBounds {
    fn kind(&self) -> InvariantKind {
        InvariantKind::FloorInBounds
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        let floor = state.current.current_floor;
        if floor >= state.floors {
            return violation(
                self.kind(),
                format!("floor {floor} out of bounds for {} floors", state.floors),
            );
        }
        Ok(())
    }
}

/// Between two snapshots the floor stays put, climbs by one, or resets to 0.
///
/// Only checked under [`LockPolicy::HoldUntilRevealed`], where at most one
/// ride is ever in flight.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloorStep;

impl Invariant for FloorStep {
    fn kind(&self) -> InvariantKind {
        InvariantKind::FloorStep
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        let Some(previous) = state.previous else {
            return Ok(());
        };
        if state.policy != LockPolicy::HoldUntilRevealed {
            return Ok(());
        }

        let from = previous.current_floor;
        let to = state.current.current_floor;
        if to != from && to != from.saturating_add(1) && to != 0 {
            return violation(self.kind(), format!("floor jumped {from} -> {to}"));
        }
        Ok(())
    }
}

/// Before `start` the lobby is shut and nothing is in motion.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntroIsInert;

impl Invariant for IntroIsInert {
    fn kind(&self) -> InvariantKind {
        InvariantKind::IntroIsInert
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        let flags = state.current;
        if flags.started {
            return Ok(());
        }
        if flags.current_floor != 0 || flags.doors_open || flags.traveling || flags.revealed {
            return violation(self.kind(), format!("intro state moved: {flags:?}"));
        }
        if state.pending_cues != 0 {
            return violation(
                self.kind(),
                format!("{} cues pending before start", state.pending_cues),
            );
        }
        Ok(())
    }
}

/// Revealed text always sits behind open doors.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealedMeansOpen;

impl Invariant for RevealedMeansOpen {
    fn kind(&self) -> InvariantKind {
        InvariantKind::RevealedMeansOpen
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        if state.policy != LockPolicy::HoldUntilRevealed {
            return Ok(());
        }
        if state.current.revealed && !state.current.doors_open {
            return violation(
                self.kind(),
                format!("revealed behind closed doors on floor {}", state.current.current_floor),
            );
        }
        Ok(())
    }
}

/// While the travel lock is held the text stays hidden.
#[derive(Debug, Clone, Copy, Default)]
pub struct TravelHidesText;

impl Invariant for TravelHidesText {
    fn kind(&self) -> InvariantKind {
        InvariantKind::TravelHidesText
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        if state.policy != LockPolicy::HoldUntilRevealed {
            return Ok(());
        }
        if state.current.traveling && state.current.revealed {
            return violation(
                self.kind(),
                format!("text revealed mid-ride on floor {}", state.current.current_floor),
            );
        }
        Ok(())
    }
}

/// A disposed session has nothing left scheduled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisposedIsSettled;

impl Invariant for DisposedIsSettled {
    fn kind(&self) -> InvariantKind {
        InvariantKind::DisposedIsSettled
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        if state.disposed && state.pending_cues != 0 {
            return violation(
                self.kind(),
                format!("{} cues pending after dispose", state.pending_cues),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use liftdeck_core::PresentationState;

    use super::*;
    use crate::InvariantRegistry;

    fn at(floor: usize) -> PresentationState {
        PresentationState {
            current_floor: floor,
            doors_open: true,
            traveling: false,
            revealed: true,
            started: true,
        }
    }

    #[test]
    fn floor_in_bounds() {
        assert!(FloorInBounds.check(&SessionSnapshot::of(at(7), 8)).is_ok());
        let err = FloorInBounds.check(&SessionSnapshot::of(at(8), 8)).unwrap_err();
        assert_eq!(err.invariant, InvariantKind::FloorInBounds);
    }

    #[test]
    fn floor_step() {
        let ok = [(2, 2), (2, 3), (5, 0)];
        for (from, to) in ok {
            let snapshot = SessionSnapshot::of(at(to), 8).after(at(from));
            assert!(FloorStep.check(&snapshot).is_ok(), "{from} -> {to}");
        }

        let skipped = SessionSnapshot::of(at(4), 8).after(at(2));
        assert!(FloorStep.check(&skipped).is_err());

        let backwards = SessionSnapshot::of(at(1), 8).after(at(3));
        assert!(FloorStep.check(&backwards).is_err());

        let compat = skipped.with_policy(LockPolicy::ReleaseOnArrival);
        assert!(FloorStep.check(&compat).is_ok());
    }

    #[test]
    fn intro_is_inert() {
        let intro = PresentationState::default();
        assert!(IntroIsInert.check(&SessionSnapshot::of(intro, 8)).is_ok());

        let opened = PresentationState { doors_open: true, ..intro };
        assert!(IntroIsInert.check(&SessionSnapshot::of(opened, 8)).is_err());

        let mut scheduled = SessionSnapshot::of(intro, 8);
        scheduled.pending_cues = 2;
        assert!(IntroIsInert.check(&scheduled).is_err());
    }

    #[test]
    fn visual_ordering_only_under_hold_policy() {
        let shut = PresentationState { doors_open: false, ..at(3) };
        let riding = PresentationState { traveling: true, ..at(3) };

        assert!(RevealedMeansOpen.check(&SessionSnapshot::of(shut, 8)).is_err());
        assert!(TravelHidesText.check(&SessionSnapshot::of(riding, 8)).is_err());

        let compat = LockPolicy::ReleaseOnArrival;
        assert!(RevealedMeansOpen.check(&SessionSnapshot::of(shut, 8).with_policy(compat)).is_ok());
        assert!(TravelHidesText.check(&SessionSnapshot::of(riding, 8).with_policy(compat)).is_ok());
    }

    #[test]
    fn disposed_is_settled() {
        let mut snapshot = SessionSnapshot::of(at(2), 8);
        snapshot.disposed = true;
        assert!(DisposedIsSettled.check(&snapshot).is_ok());

        snapshot.pending_cues = 1;
        assert!(DisposedIsSettled.check(&snapshot).is_err());
    }

    #[test]
    fn registry_collects_every_violation() {
        let broken = PresentationState {
            current_floor: 9,
            doors_open: false,
            traveling: true,
            revealed: true,
            started: true,
        };
        let violations = InvariantRegistry::standard()
            .check_all(&SessionSnapshot::of(broken, 8))
            .unwrap_err();

        let kinds: Vec<_> = violations.iter().map(|v| v.invariant).collect();
        assert_eq!(kinds, vec![
            InvariantKind::FloorInBounds,
            InvariantKind::RevealedMeansOpen,
            InvariantKind::TravelHidesText,
        ]);
    }
}
