//! Footer bar
//!
//! Deck footer line and key hints.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use super::{MUTED, faded, rgb};

const INTRO_HINT: &str = "enter: start  q: quit ";
const ELEVATOR_HINT: &str = "enter: next  q: quit ";

/// Render the footer bar.
pub fn render(frame: &mut Frame, footer: &str, intro: bool, area: Rect) {
    let hint = if intro { INTRO_HINT } else { ELEVATOR_HINT };
    frame.render_widget(
        Paragraph::new(Line::styled(hint, Style::default().fg(faded(MUTED, 0.6))))
            .alignment(Alignment::Right),
        area,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(footer, Style::default().fg(rgb(MUTED))))
            .alignment(Alignment::Center),
        area,
    );
}
