//! Core model for liftdeck
//!
//! The deck of slides ("floors") and the sequencer that walks a viewer
//! through them. Everything here is pure: no terminal, no timers, no I/O
//! beyond loading a deck file.
//!
//! # Components
//!
//! - [`Deck`]: immutable slide content, built-in or loaded from JSON
//! - [`Sequencer`]: floor-transition state machine over a virtual clock
//! - [`Timings`]: the fixed delays of every timed sequence

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod deck;
pub mod error;
pub mod sequencer;
pub mod timings;

pub use deck::{Accent, Deck, Intro, Slide};
pub use error::DeckError;
pub use sequencer::{
    Cue, Fired, IgnoreReason, LockPolicy, Outcome, Phase, PresentationState, Sequence, Sequencer,
};
pub use timings::Timings;
