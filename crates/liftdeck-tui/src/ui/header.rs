//! Header bar
//!
//! Floor label on the left, progress strip on the right.

use liftdeck_app::scene::{Dot, ElevatorScene};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{MUTED, faded, rgb};

const VISITED: &str = "●";
const CURRENT: &str = "◆";
const UPCOMING: &str = "○";

fn symbol(dot: Dot) -> &'static str {
    match dot {
        Dot::Visited => VISITED,
        Dot::Current => CURRENT,
        Dot::Upcoming => UPCOMING,
    }
}

/// Progress strip as plain text, one symbol per floor.
pub fn progress_symbols(progress: &[Dot]) -> String {
    progress.iter().map(|&dot| symbol(dot)).collect::<Vec<_>>().join(" ")
}

/// Render the header bar.
pub fn render(frame: &mut Frame, scene: &ElevatorScene<'_>, area: Rect) {
    let accent = scene.slide.accent;

    let level = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            scene.slide.level.as_str(),
            Style::default().fg(rgb(accent)).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(level), area);

    let mut dots = Vec::with_capacity(scene.progress.len() * 2 + 1);
    for (i, &dot) in scene.progress.iter().enumerate() {
        if i > 0 {
            dots.push(Span::raw(" "));
        }
        let color = match dot {
            Dot::Visited => faded(accent, 0.5),
            Dot::Current => rgb(accent),
            Dot::Upcoming => rgb(MUTED),
        };
        dots.push(Span::styled(symbol(dot), Style::default().fg(color)));
    }
    dots.push(Span::raw(" "));
    frame.render_widget(Paragraph::new(Line::from(dots)).alignment(Alignment::Right), area);
}

#[cfg(test)]
mod tests {
    use liftdeck_app::scene;

    use super::*;

    #[test]
    fn progress_text() {
        insta::assert_snapshot!(progress_symbols(&scene::progress(2, 5)), @"● ● ◆ ○ ○");
        insta::assert_snapshot!(progress_symbols(&scene::progress(0, 1)), @"◆");
    }
}
