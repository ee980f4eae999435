//! Elevator shaft
//!
//! The floor's text, staggered in by its reveal state, with the two door
//! panels drawn over it.

use liftdeck_app::scene::{CallToAction, ElevatorScene, Reveal};
use liftdeck_core::Accent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::{BACKGROUND, DOOR, MUTED, TEXT, faded, rgb};

/// Reveal offset units per terminal row.
const OFFSET_PER_ROW: f32 = 8.0;
/// Reveal offset units per terminal column.
const OFFSET_PER_COLUMN: f32 = 4.0;
/// Resting indent of the stat, leaving room for it to slide in.
const STAT_INDENT: u16 = 2;

/// Label of the primary control as drawn.
pub fn control_text(action: &CallToAction<'_>) -> String {
    format!("[ {} ]", action.label())
}

/// Widths of the left and right door panels over a shaft `width` wide.
///
/// Shut doors (`doors == 0`) cover the whole width between them.
pub fn door_widths(width: u16, doors: f32) -> (u16, u16) {
    let closed = f32::from(width) * (1.0 - doors.clamp(0.0, 1.0));
    let left = (closed / 2.0).ceil() as u16;
    let right = (closed / 2.0).floor() as u16;
    (left.min(width), right.min(width - left.min(width)))
}

/// Render the shaft.
pub fn render(frame: &mut Frame, scene: &ElevatorScene<'_>, area: Rect) {
    let accent = scene.slide.accent;

    let shaft = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(faded(accent, 0.4)));
    let inner = shaft.inner(area);
    frame.render_widget(shaft, area);

    render_text(frame, scene, inner.inner(Margin::new(2, 1)));
    render_doors(frame, scene.doors, accent, inner);
}

fn render_text(frame: &mut Frame, scene: &ElevatorScene<'_>, area: Rect) {
    let slide = scene.slide;
    let accent = slide.accent;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(area);

    let [sublabel_area, _, headline_area, _, body_area, stat_area, _, cta_area] = chunks.as_ref()
    else {
        return;
    };

    let sublabel = Paragraph::new(slide.sublabel.as_str())
        .style(Style::default().fg(faded(MUTED, scene.sublabel.opacity)));
    frame.render_widget(sublabel, lift(*sublabel_area, scene.sublabel));

    let headline = Paragraph::new(slide.headline.as_str())
        .style(
            Style::default().fg(faded(TEXT, scene.headline.opacity)).add_modifier(Modifier::BOLD),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(headline, lift(*headline_area, scene.headline));

    let body = Paragraph::new(slide.body.as_str())
        .style(Style::default().fg(faded(TEXT, scene.body.opacity * 0.8)))
        .wrap(Wrap { trim: true });
    frame.render_widget(body, lift(*body_area, scene.body));

    if let (Some(stat), Some(reveal)) = (&slide.stat, scene.stat) {
        let stat = Paragraph::new(stat.as_str())
            .style(Style::default().fg(faded(accent, reveal.opacity)).add_modifier(Modifier::BOLD));
        frame.render_widget(stat, slide_in(*stat_area, reveal));
    }

    render_control(frame, scene, accent, lift(*cta_area, scene.cta));
}

fn render_control(frame: &mut Frame, scene: &ElevatorScene<'_>, accent: Accent, area: Rect) {
    let opacity = scene.cta.opacity;
    let button = |enabled: bool| {
        if enabled {
            Style::default()
                .fg(faded(BACKGROUND, opacity))
                .bg(faded(accent, opacity))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(faded(MUTED, opacity))
        }
    };

    let lines = match scene.action {
        CallToAction::NextFloor { enabled, .. } => {
            vec![Line::styled(control_text(&scene.action), button(enabled))]
        },
        CallToAction::RideAgain { closing } => vec![
            Line::styled(
                closing,
                Style::default().fg(faded(accent, opacity)).add_modifier(Modifier::BOLD),
            ),
            Line::styled(control_text(&scene.action), button(true)),
        ],
    };
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_doors(frame: &mut Frame, doors: f32, accent: Accent, area: Rect) {
    let (left, right) = door_widths(area.width, doors);
    let seam = Style::default().fg(faded(accent, 0.3));
    let panel = Style::default().bg(rgb(DOOR));

    if left > 0 {
        let rect = Rect { width: left, ..area };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Block::default().borders(Borders::RIGHT).border_style(seam).style(panel),
            rect,
        );
    }
    if right > 0 {
        let rect = Rect { x: area.x + area.width - right, width: right, ..area };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Block::default().borders(Borders::LEFT).border_style(seam).style(panel),
            rect,
        );
    }
}

/// Shift `area` down by the remaining rise of `reveal`.
fn lift(area: Rect, reveal: Reveal) -> Rect {
    let rows = (reveal.offset.max(0.0) / OFFSET_PER_ROW).round() as u16;
    let rows = rows.min(area.height);
    Rect { y: area.y + rows, height: area.height - rows, ..area }
}

/// Place `area` at its resting indent, pulled left by the remaining slide.
fn slide_in(area: Rect, reveal: Reveal) -> Rect {
    let columns = (-reveal.offset.min(0.0) / OFFSET_PER_COLUMN).round() as u16;
    let indent = STAT_INDENT.saturating_sub(columns).min(area.width);
    Rect { x: area.x + indent, width: area.width - indent, ..area }
}

#[cfg(test)]
mod tests {
    use liftdeck_app::scene::{CTA, STAT};

    use super::*;

    #[test]
    fn doors_cover_the_shaft_when_shut() {
        assert_eq!(door_widths(11, 0.0), (6, 5));
        assert_eq!(door_widths(10, 0.0), (5, 5));
        assert_eq!(door_widths(10, 0.5), (3, 2));
        assert_eq!(door_widths(10, 1.0), (0, 0));
        assert_eq!(door_widths(0, 0.0), (0, 0));
    }

    #[test]
    fn control_labels() {
        let next = CallToAction::NextFloor { enabled: true, moving: false };
        let moving = CallToAction::NextFloor { enabled: false, moving: true };
        let again = CallToAction::RideAgain { closing: "FIN" };

        insta::assert_snapshot!(control_text(&next), @"[ ▲  Next Floor ]");
        insta::assert_snapshot!(control_text(&moving), @"[ ▲  Moving... ]");
        insta::assert_snapshot!(control_text(&again), @"[ Ride Again ]");
    }

    #[test]
    fn hidden_text_sits_lower() {
        let area = Rect::new(0, 10, 20, 2);
        let hidden = Reveal { opacity: 0.0, offset: CTA.offset };
        assert_eq!(lift(area, hidden), Rect::new(0, 11, 20, 1));
        assert_eq!(lift(area, Reveal::SHOWN), area);
    }

    #[test]
    fn stat_slides_in_from_the_left() {
        let area = Rect::new(4, 0, 20, 1);
        let hidden = Reveal { opacity: 0.0, offset: STAT.offset };
        assert_eq!(slide_in(area, hidden).x, 4);
        assert_eq!(slide_in(area, Reveal::SHOWN).x, 4 + STAT_INDENT);
    }
}
