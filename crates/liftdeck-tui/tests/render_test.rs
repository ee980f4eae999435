//! Rendering tests on ratatui's `TestBackend`.

use std::time::Duration;

use liftdeck_core::Deck;
use liftdeck_tui::{App, AppEvent, KeyInput, ui};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn draw(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn row(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
}

fn screen(buffer: &Buffer) -> String {
    (0..buffer.area.height).map(|y| row(buffer, y)).collect::<Vec<_>>().join("\n")
}

fn words(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn press(app: &mut App, key: KeyInput) {
    app.handle(AppEvent::Key(key));
}

fn wait(app: &mut App, millis: u64) {
    app.handle(AppEvent::Tick { elapsed: Duration::from_millis(millis) });
}

/// Start and ride up `floors` floors, letting every reveal finish.
fn ride(floors: usize) -> App {
    let mut app = App::new(Deck::builtin());
    press(&mut app, KeyInput::Enter);
    wait(&mut app, 1_000);
    for _ in 0..floors {
        press(&mut app, KeyInput::Enter);
        wait(&mut app, 1_500);
    }
    wait(&mut app, 1_500);
    app
}

#[test]
fn intro_screen() {
    let app = App::new(Deck::builtin());
    let shown = screen(&draw(&app));

    assert!(shown.contains("Blue Snake Studios presents"));
    assert!(shown.contains("JEWBLE"));
    assert!(shown.contains("[ Enter The Building ]"));
    assert!(shown.contains("enter: start"));
}

#[test]
fn doors_hide_the_floor_until_they_open() {
    let mut app = App::new(Deck::builtin());
    press(&mut app, KeyInput::Enter);

    let shut = screen(&draw(&app));
    assert!(shut.contains("LOBBY"));
    assert!(!shut.contains("There's an app being built."));

    wait(&mut app, 3_000);
    let open = screen(&draw(&app));
    assert!(open.contains("There's an app being built."));
    assert!(open.contains("[ ▲  Next Floor ]"));
}

#[test]
fn header_shows_level_and_progress() {
    let app = ride(2);
    insta::assert_snapshot!(words(&row(&draw(&app), 0)), @"FLOOR 02 ● ● ◆ ○ ○ ○ ○ ○");
}

#[test]
fn moving_label_while_traveling() {
    let mut app = ride(1);
    press(&mut app, KeyInput::Enter);
    wait(&mut app, 100);

    let shown = screen(&draw(&app));
    assert!(shown.contains("FLOOR 01"));
    assert!(shown.contains("Moving..."));
}

#[test]
fn stat_is_shown_after_reveal() {
    let app = ride(1);
    let shown = screen(&draw(&app));
    assert!(shown.contains("94% of top children's apps share data with third parties."));
}

#[test]
fn top_floor_offers_ride_again() {
    let app = ride(7);
    let shown = screen(&draw(&app));

    assert!(shown.contains("PENTHOUSE"));
    assert!(shown.contains("JEWBLE.APP"));
    assert!(shown.contains("[ Ride Again ]"));
    assert!(!shown.contains("Next Floor"));
}

#[test]
fn footer_line() {
    let app = App::new(Deck::builtin());
    let buffer = draw(&app);
    let footer = row(&buffer, HEIGHT - 1);
    assert!(footer.contains("Blue Snake Studios · Jewble Meta-Pet Platform · Melbourne"));
    assert!(footer.trim_end().ends_with("q: quit"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = ride(1);
    press(&mut app, KeyInput::Enter);
    wait(&mut app, 900);

    let mut terminal = Terminal::new(TestBackend::new(8, 3)).unwrap();
    terminal.draw(|frame| ui::render(frame, &app)).unwrap();
}
