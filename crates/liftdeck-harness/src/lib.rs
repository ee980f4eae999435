//! Deterministic simulation harness for liftdeck.
//!
//! A virtual clock and a scripted [`Driver`](liftdeck_app::Driver) so the
//! production [`Runtime`](liftdeck_app::Runtime) can be run to completion
//! in tests without a terminal or wall-clock sleeps.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the
//! sequencer invariants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod sim_clock;
pub mod sim_driver;

pub use invariants::{
    DisposedIsSettled, FloorInBounds, FloorStep, IntroIsInert, Invariant, InvariantKind,
    InvariantRegistry, InvariantResult, RevealedMeansOpen, SessionSnapshot, TravelHidesText,
    Violation,
};
pub use sim_clock::SimInstant;
pub use sim_driver::{RenderedFrame, Scripted, SimDriver, SimDriverError};
