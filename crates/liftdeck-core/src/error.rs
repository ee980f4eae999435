//! Deck loading errors.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors produced while building or loading a [`crate::Deck`].
#[derive(Debug, Error)]
pub enum DeckError {
    /// Deck file could not be read.
    #[error("failed to read deck {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Deck file is not valid deck JSON.
    #[error("invalid deck JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A deck needs at least one slide.
    #[error("deck has no slides")]
    Empty,

    /// Accent color is not of the form `#RRGGBB`.
    #[error("invalid accent color {0:?}, expected #RRGGBB")]
    InvalidAccent(String),
}
