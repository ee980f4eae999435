//! Backdrop
//!
//! Background fill and the decorative scanline driven by the sweep.

use liftdeck_app::SWEEP_PERIOD;
use liftdeck_core::Accent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Paragraph},
};

use super::{BACKGROUND, faded, rgb};

const SCANLINE: &str = "─";
const SCANLINE_OPACITY: f32 = 0.18;

/// Render the background and scanline.
pub fn render(frame: &mut Frame, area: Rect, accent: Accent, sweep: u8) {
    frame.render_widget(Block::default().style(Style::default().bg(rgb(BACKGROUND))), area);

    if area.height == 0 {
        return;
    }
    let row = scanline_row(area.height, sweep);
    let line = SCANLINE.repeat(usize::from(area.width));
    let scanline = Paragraph::new(line).style(Style::default().fg(faded(accent, SCANLINE_OPACITY)));
    frame.render_widget(scanline, Rect { y: area.y + row, height: 1, ..area });
}

/// Row offset of the scanline for a sweep position.
fn scanline_row(height: u16, sweep: u8) -> u16 {
    let position = u32::from(sweep.min(SWEEP_PERIOD - 1));
    (position * u32::from(height) / u32::from(SWEEP_PERIOD)) as u16
}
