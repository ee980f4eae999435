//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples application logic from terminal libraries (crossterm, termion,
/// etc.) enabling deterministic simulation testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key (primary control).
    Enter,
    /// Escape key (quit).
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key (primary control).
    Right,
}

impl KeyInput {
    /// Activates the screen's primary control.
    pub fn is_primary(self) -> bool {
        matches!(self, Self::Enter | Self::Right | Self::Char(' '))
    }

    /// Requests quitting.
    pub fn is_quit(self) -> bool {
        matches!(self, Self::Esc | Self::Char('q' | 'Q'))
    }
}
