//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering.

use std::{
    io::{self, Stdout, stdout},
    time::{Duration, Instant},
};

use crossterm::{
    ExecutableCommand,
    cursor::{Hide, Show},
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use liftdeck_app::{App, AppAction, AppEvent, Driver, KeyInput};
use liftdeck_core::DeckError;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::ui;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The deck could not be loaded.
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Owns the raw-mode alternate screen for its lifetime; the terminal is
/// restored on [`Driver::stop`] or on drop, whichever comes first.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    tick: Duration,
    active: bool,
}

impl TerminalDriver {
    /// Take over the terminal. Idle polls return after `tick`.
    pub fn new(tick: Duration) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?.execute(Hide)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, tick, active: true })
    }

    /// Convert a crossterm key event to `KeyInput`.
    ///
    /// Ctrl-C maps to `Esc` since raw mode swallows the signal.
    fn convert_key(key: KeyEvent) -> Option<KeyInput> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c')).then_some(KeyInput::Esc);
        }
        match key.code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            _ => None,
        }
    }

    fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        stdout().execute(LeaveAlternateScreen)?.execute(Show)?;
        Ok(())
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;
    type Instant = Instant;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, Self::Error> {
        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        match Self::convert_key(key_event) {
                            Some(key_input) => Ok(app.handle(AppEvent::Key(key_input))),
                            None => Ok(vec![]),
                        }
                    },
                    Some(Ok(Event::Resize(cols, rows))) => {
                        Ok(app.handle(AppEvent::Resize(cols, rows)))
                    },
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    // Input closed: nothing more can arrive.
                    None => Ok(app.quit()),
                    _ => Ok(vec![]),
                }
            }

            // Tick timeout
            () = tokio::time::sleep(self.tick) => Ok(vec![]),
        }
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }

    fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Err(error) = self.restore() {
            tracing::warn!(%error, "failed to restore terminal");
        }
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn keys_map_to_inputs() {
        let none = KeyModifiers::NONE;
        assert_eq!(TerminalDriver::convert_key(key(KeyCode::Enter, none)), Some(KeyInput::Enter));
        assert_eq!(TerminalDriver::convert_key(key(KeyCode::Right, none)), Some(KeyInput::Right));
        assert_eq!(
            TerminalDriver::convert_key(key(KeyCode::Char(' '), none)),
            Some(KeyInput::Char(' '))
        );
        assert_eq!(TerminalDriver::convert_key(key(KeyCode::Tab, none)), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let ctrl = KeyModifiers::CONTROL;
        assert_eq!(TerminalDriver::convert_key(key(KeyCode::Char('c'), ctrl)), Some(KeyInput::Esc));
        assert_eq!(TerminalDriver::convert_key(key(KeyCode::Enter, ctrl)), None);
    }
}
