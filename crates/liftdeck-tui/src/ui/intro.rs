//! Intro screen
//!
//! Presenter line, title, tagline and the enter control, centered.

use liftdeck_app::scene::IntroScene;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{BACKGROUND, MUTED, TEXT, rgb};

/// Render the intro screen.
pub fn render(frame: &mut Frame, scene: &IntroScene<'_>, area: Rect) {
    let intro = scene.intro;
    let accent = rgb(intro.accent);

    let mut lines = vec![
        Line::styled(intro.presenter.as_str(), Style::default().fg(rgb(MUTED))),
        Line::default(),
        Line::styled(
            intro.title.as_str(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
    ];
    lines.extend(
        intro.tagline.iter().map(|line| Line::styled(line.as_str(), Style::default().fg(rgb(TEXT)))),
    );
    lines.push(Line::styled(
        intro.hook.as_str(),
        Style::default().fg(rgb(intro.hook_accent)).add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", intro.enter_label),
        Style::default().fg(rgb(BACKGROUND)).bg(accent).add_modifier(Modifier::BOLD),
    )));

    let height = (lines.len() as u16).min(area.height);
    let centered = Rect { y: area.y + (area.height - height) / 2, height, ..area };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, centered);
}
