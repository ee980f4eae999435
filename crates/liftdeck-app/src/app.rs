//! Application state machine.
//!
//! This module defines the [`App`] state machine, which owns the deck, the
//! floor sequencer and the decorative sweep, completely decoupled from
//! terminal I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Maps the primary control to `start`, `advance` or `restart` depending
//!   on the screen, honouring the enabled state of each control.
//! - Advances the sequencer and sweep clocks on every tick.
//! - Stores terminal dimensions to handle resize events.
//! - Cancels pending cues and the sweep on disposal.

use std::time::Duration;

use liftdeck_core::{Deck, LockPolicy, Outcome, PresentationState, Sequencer, Timings};

use crate::{AppAction, AppEvent, KeyInput, Scene, Sweep, scene};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Slide content, read-only for the session.
    deck: Deck,
    /// Floor-transition state machine.
    sequencer: Sequencer,
    /// Backdrop scanline.
    sweep: Sweep,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Session ended; no further state changes.
    disposed: bool,
}

impl App {
    /// Create an App on the intro screen of `deck`.
    pub fn new(deck: Deck) -> Self {
        let sequencer = Sequencer::new(deck.floors());
        Self {
            deck,
            sequencer,
            sweep: Sweep::default(),
            terminal_size: (80, 24),
            disposed: false,
        }
    }

    /// Use a specific lock policy.
    #[must_use]
    pub fn with_policy(mut self, policy: LockPolicy) -> Self {
        self.sequencer = self.sequencer.with_policy(policy);
        self
    }

    /// Use custom sequence timings.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.sequencer = self.sequencer.with_timings(timings);
        self
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick { elapsed } => self.handle_tick(elapsed),
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        if key.is_quit() {
            return self.quit();
        }
        if key.is_primary() {
            return self.activate();
        }
        vec![]
    }

    fn handle_tick(&mut self, elapsed: Duration) -> Vec<AppAction> {
        if self.disposed {
            return vec![];
        }

        let fired = self.sequencer.tick(elapsed);
        let swept = self.sweep.tick(elapsed);

        if !fired.is_empty() || swept || scene::is_animating(&self.sequencer) {
            vec![AppAction::Render]
        } else {
            vec![]
        }
    }

    /// Press the primary control of the current screen.
    ///
    /// Intro: start. Top floor: restart. Otherwise: advance, if the
    /// control is enabled.
    pub fn activate(&mut self) -> Vec<AppAction> {
        let state = self.sequencer.state();
        if !state.started {
            self.start()
        } else if self.sequencer.is_last_floor() {
            self.restart()
        } else if self.sequencer.can_advance() {
            self.advance()
        } else {
            vec![]
        }
    }

    /// Dismiss the intro screen.
    pub fn start(&mut self) -> Vec<AppAction> {
        let outcome = self.sequencer.start();
        if outcome.is_accepted() {
            tracing::info!(floors = self.deck.len(), "ride started");
        }
        Self::render_if(outcome)
    }

    /// Ride to the next floor.
    pub fn advance(&mut self) -> Vec<AppAction> {
        Self::render_if(self.sequencer.advance())
    }

    /// Return to the lobby.
    pub fn restart(&mut self) -> Vec<AppAction> {
        let outcome = self.sequencer.restart();
        if outcome.is_accepted() {
            tracing::info!("ride restarted");
        }
        Self::render_if(outcome)
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// End the session: cancel pending cues and stop the sweep.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.sequencer.dispose();
        self.sweep.stop();
        self.disposed = true;
        tracing::info!(floor = self.sequencer.state().current_floor, "session disposed");
    }

    fn render_if(outcome: Outcome) -> Vec<AppAction> {
        match outcome {
            Outcome::Accepted => vec![AppAction::Render],
            Outcome::Ignored(_) => vec![],
        }
    }

    /// Visual projection of the current state.
    pub fn scene(&self) -> Scene<'_> {
        Scene::project(&self.deck, &self.sequencer, &self.sweep)
    }

    /// Slide deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Floor sequencer.
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Current presentation flags.
    pub fn state(&self) -> PresentationState {
        self.sequencer.state()
    }

    /// Backdrop sweep.
    pub fn sweep(&self) -> &Sweep {
        &self.sweep
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// [`App::dispose`] has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
