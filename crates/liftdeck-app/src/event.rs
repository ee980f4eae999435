//! Application input events.
//!
//! This module defines [`AppEvent`], the inputs that drive the
//! [`crate::App`] state machine: user interactions (keyboard, resize) and
//! clock ticks carrying the time elapsed since the previous tick.

use std::time::Duration;

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Clock tick.
    Tick {
        /// Time since the previous tick.
        elapsed: Duration,
    },

    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}
