//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as the terminal driver but runs
//! a scripted session on a virtual clock. It implements [`Driver`] so the
//! same [`liftdeck_app::Runtime`] orchestration code runs in both production
//! and simulation.

#![allow(clippy::disallowed_types, reason = "Synchronous locking operations only")]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use liftdeck_app::{App, AppAction, AppEvent, Driver, KeyInput};
use liftdeck_core::{Phase, PresentationState};

use crate::{
    SimInstant,
    invariants::{InvariantRegistry, SessionSnapshot, Violation},
};

/// Default virtual time advanced per idle poll, roughly one frame.
pub const DEFAULT_STEP: Duration = Duration::from_millis(16);

/// Error type for simulation driver.
#[derive(Debug, Clone)]
pub struct SimDriverError(pub String);

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimDriverError: {}", self.0)
    }
}

impl std::error::Error for SimDriverError {}

/// One entry of a session script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scripted {
    /// Deliver an event to the app.
    Event(AppEvent),
    /// Let virtual time pass, one step per poll.
    Wait(Duration),
    /// Fail the next poll with a driver error.
    Fail,
}

/// What the driver saw on one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedFrame {
    /// Virtual time of the render.
    pub at: Duration,
    /// Sequencer flags.
    pub state: PresentationState,
    /// Sequencer phase.
    pub phase: Phase,
    /// Cues still scheduled.
    pub pending_cues: usize,
}

/// Shared state for scripting and inspection.
///
/// Clones of a driver share it, so a test can keep a handle while the
/// runtime owns the driver.
#[derive(Debug, Default)]
struct SharedState {
    script: VecDeque<Scripted>,
    clock: Duration,
    frames: Vec<RenderedFrame>,
    violations: Vec<Violation>,
    previous: Option<PresentationState>,
    stopped: bool,
}

/// Simulation driver for deterministic testing.
///
/// Events are taken from a script. Idle polls advance the virtual clock by
/// one step. When the script runs out the driver asks the app to quit.
#[derive(Debug, Clone)]
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
    step: Duration,
    invariants: Option<Arc<InvariantRegistry>>,
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDriver {
    /// Create a new simulation driver with an empty script.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SharedState::default())),
            step: DEFAULT_STEP,
            invariants: None,
        }
    }

    /// Set the virtual time advanced per idle poll.
    #[must_use]
    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = step.max(Duration::from_millis(1));
        self
    }

    /// Enable invariant checking on every render.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(Arc::new(registry));
        self
    }

    /// Append an event to the script.
    pub fn push_event(&self, event: AppEvent) {
        self.lock().script.push_back(Scripted::Event(event));
    }

    /// Append a key press to the script.
    pub fn push_key(&self, key: KeyInput) {
        self.push_event(AppEvent::Key(key));
    }

    /// Append a wait to the script.
    pub fn push_wait(&self, duration: Duration) {
        self.lock().script.push_back(Scripted::Wait(duration));
    }

    /// Append a sequence of script entries.
    pub fn push_script(&self, entries: impl IntoIterator<Item = Scripted>) {
        self.lock().script.extend(entries);
    }

    /// Virtual time elapsed so far.
    pub fn elapsed(&self) -> Duration {
        self.lock().clock
    }

    /// Every frame rendered so far.
    pub fn frames(&self) -> Vec<RenderedFrame> {
        self.lock().frames.clone()
    }

    /// Every invariant violation seen so far.
    pub fn violations(&self) -> Vec<Violation> {
        self.lock().violations.clone()
    }

    /// Whether the runtime has stopped the driver.
    pub fn is_stopped(&self) -> bool {
        self.lock().stopped
    }

    fn lock(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;
    type Instant = SimInstant;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, Self::Error> {
        let next = {
            let mut state = self.lock();
            let next = state.script.pop_front();
            if let Some(Scripted::Wait(remaining)) = next {
                let advance = remaining.min(self.step);
                state.clock = state.clock.saturating_add(advance);
                if remaining > advance {
                    state.script.push_front(Scripted::Wait(remaining - advance));
                }
                return Ok(Vec::new());
            }
            next
        };

        match next {
            Some(Scripted::Event(event)) => Ok(app.handle(event)),
            Some(Scripted::Fail) => Err(SimDriverError("scripted failure".into())),
            Some(Scripted::Wait(_)) | None => {
                tracing::debug!("script exhausted");
                Ok(app.quit())
            },
        }
    }

    fn now(&self) -> SimInstant {
        SimInstant::EPOCH + self.lock().clock
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        let mut state = self.lock();
        let snapshot = SessionSnapshot::capture(app, state.previous);

        let frame = RenderedFrame {
            at: state.clock,
            state: snapshot.current,
            phase: snapshot.phase,
            pending_cues: snapshot.pending_cues,
        };
        state.frames.push(frame);
        state.previous = Some(snapshot.current);

        if let Some(registry) = &self.invariants
            && let Err(violations) = registry.check_all(&snapshot)
        {
            for violation in &violations {
                tracing::warn!(%violation, at = ?frame.at, "invariant violated");
            }
            state.violations.extend(violations);
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.lock().stopped = true;
    }
}
