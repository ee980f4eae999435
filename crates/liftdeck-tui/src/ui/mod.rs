//! UI rendering
//!
//! Rendering functions that convert a [`Scene`] into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into the frame.
//!
//! Opacity has no terminal equivalent, so fades are drawn as a blend from
//! the background color towards the element's color.

mod backdrop;
mod footer;
mod header;
mod intro;
mod shaft;

pub use header::progress_symbols;
use liftdeck_app::Scene;
use liftdeck_core::Accent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Color,
};
pub use shaft::{control_text, door_widths};

use crate::App;

/// Screen background.
const BACKGROUND: Accent = Accent::new(10, 10, 14);
/// Primary text.
const TEXT: Accent = Accent::new(236, 236, 240);
/// Secondary text.
const MUTED: Accent = Accent::new(128, 128, 142);
/// Door panels.
const DOOR: Accent = Accent::new(36, 36, 44);

fn rgb(color: Accent) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// `color` at `opacity` over the background.
fn faded(color: Accent, opacity: f32) -> Color {
    rgb(BACKGROUND.mix(color, opacity))
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const HEADER_HEIGHT: u16 = 1;
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const FOOTER_HEIGHT: u16 = 1;

    let scene = app.scene();
    let (accent, sweep, footer) = match &scene {
        Scene::Intro(intro) => (intro.intro.accent, intro.sweep, intro.footer),
        Scene::Elevator(elevator) => (elevator.slide.accent, elevator.sweep, elevator.footer),
    };

    backdrop::render(frame, frame.area(), accent, sweep);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(MAIN_AREA_MIN_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

    let [header_area, main_area, footer_area] = chunks.as_ref() else {
        return;
    };

    match &scene {
        Scene::Intro(intro) => intro::render(frame, intro, *main_area),
        Scene::Elevator(elevator) => {
            header::render(frame, elevator, *header_area);
            shaft::render(frame, elevator, *main_area);
        },
    }
    footer::render(frame, footer, matches!(scene, Scene::Intro(_)), *footer_area);
}
