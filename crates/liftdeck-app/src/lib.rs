//! Application layer for liftdeck
//!
//! Pure state machines and a generic runtime, so the same orchestration code
//! runs against a real terminal and against a virtual clock in tests.
//!
//! # Components
//!
//! - [`App`]: UI state machine (key handling, sequencer, sweep, disposal)
//! - [`Scene`]: pure projection of App state to visual parameters
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod driver;
mod event;
mod input;
mod runtime;
pub mod scene;
mod sweep;

pub use action::AppAction;
pub use app::App;
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use runtime::Runtime;
pub use scene::Scene;
pub use sweep::{SWEEP_INTERVAL, SWEEP_PERIOD, Sweep};
