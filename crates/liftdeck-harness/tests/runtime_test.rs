//! Runtime tests on the simulation driver.
//!
//! These drive the production [`Runtime`] loop with scripted key presses on
//! a virtual clock, so every timing below is exact.

use std::time::Duration;

use liftdeck_app::{App, AppEvent, KeyInput, Runtime};
use liftdeck_core::{Deck, LockPolicy, Phase};
use liftdeck_harness::{InvariantRegistry, Scripted, SimDriver};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn driver() -> SimDriver {
    SimDriver::new().with_invariants(InvariantRegistry::standard())
}

fn enter() -> Scripted {
    Scripted::Event(AppEvent::Key(KeyInput::Enter))
}

async fn run(driver: &SimDriver, app: App) -> App {
    Runtime::new(driver.clone(), app).run().await.unwrap()
}

#[tokio::test]
async fn start_then_one_ride() {
    let driver = driver();
    driver.push_script([
        Scripted::Wait(ms(100)),
        enter(),
        Scripted::Wait(ms(1_000)),
        enter(),
        Scripted::Wait(ms(1_500)),
    ]);

    let app = run(&driver, App::new(Deck::builtin())).await;

    let state = app.state();
    assert_eq!(state.current_floor, 1);
    assert!(state.started && state.doors_open && state.revealed && !state.traveling);
    assert_eq!(driver.elapsed(), ms(2_600));
    assert!(driver.violations().is_empty(), "{:?}", driver.violations());
}

#[tokio::test]
async fn frames_follow_the_cue_timeline() {
    let driver = driver().with_step(ms(10));
    driver.push_script([
        enter(),
        Scripted::Wait(ms(1_000)),
        enter(),
        Scripted::Wait(ms(1_500)),
    ]);

    run(&driver, App::new(Deck::builtin())).await;

    let frames = driver.frames();
    let first = |phase: Phase| frames.iter().find(|f| f.phase == phase).map(|f| f.at);

    assert_eq!(frames[0].phase, Phase::NotStarted);
    assert_eq!(first(Phase::Entering), Some(ms(0)));
    assert_eq!(first(Phase::Closing), Some(ms(1_000)));
    assert_eq!(first(Phase::Arriving), Some(ms(1_800)));

    let doors_back_open =
        frames.iter().find(|f| f.at > ms(1_000) && f.state.doors_open).map(|f| f.at);
    assert_eq!(doors_back_open, Some(ms(2_100)));
}

#[tokio::test]
async fn key_mashing_during_a_ride_moves_one_floor() {
    let driver = driver();
    driver.push_script([enter(), Scripted::Wait(ms(1_000))]);
    for _ in 0..10 {
        driver.push_key(KeyInput::Enter);
        driver.push_wait(ms(100));
    }
    driver.push_wait(ms(1_000));

    let app = run(&driver, App::new(Deck::builtin())).await;

    assert_eq!(app.state().current_floor, 1);
    assert!(app.state().revealed);
    assert!(driver.violations().is_empty(), "{:?}", driver.violations());
}

#[tokio::test]
async fn ride_to_the_top_and_again() {
    let deck = Deck::builtin();
    let floors = deck.len();

    let driver = driver();
    driver.push_script([enter(), Scripted::Wait(ms(1_000))]);
    for _ in 1..floors {
        driver.push_script([enter(), Scripted::Wait(ms(1_500))]);
    }
    // Extra press on the top floor is the Ride Again control.
    driver.push_script([enter(), Scripted::Wait(ms(900))]);

    let app = run(&driver, App::new(deck)).await;

    let floors_seen: Vec<_> = driver.frames().iter().map(|f| f.state.current_floor).collect();
    assert!(floors_seen.contains(&(floors - 1)));
    assert_eq!(app.state().current_floor, 0);
    assert!(app.state().revealed);
    assert!(driver.violations().is_empty(), "{:?}", driver.violations());
}

#[tokio::test]
async fn quit_disposes_and_stops() {
    let driver = driver();
    driver.push_script([
        enter(),
        Scripted::Wait(ms(300)),
        Scripted::Event(AppEvent::Key(KeyInput::Esc)),
        Scripted::Wait(ms(5_000)),
    ]);

    let app = run(&driver, App::new(Deck::builtin())).await;

    assert!(app.is_disposed());
    assert!(app.sequencer().is_settled());
    assert!(!app.sweep().is_running());
    assert!(driver.is_stopped());
    assert_eq!(driver.elapsed(), ms(300));
    // The start sequence was cut off before the doors opened.
    assert!(!app.state().doors_open);
}

#[tokio::test]
async fn driver_error_still_stops_driver() {
    let driver = driver();
    driver.push_script([enter(), Scripted::Fail]);

    let result = Runtime::new(driver.clone(), App::new(Deck::builtin())).run().await;

    assert!(result.is_err());
    assert!(driver.is_stopped());
}

#[tokio::test]
async fn compat_policy_releases_lock_on_arrival() {
    let driver = driver();
    driver.push_script([enter(), Scripted::Wait(ms(1_000)), enter(), Scripted::Wait(ms(900))]);

    let app = App::new(Deck::builtin()).with_policy(LockPolicy::ReleaseOnArrival);
    let app = run(&driver, app).await;

    let state = app.state();
    assert_eq!(state.current_floor, 1);
    assert!(!state.traveling);
    assert!(!state.revealed);
    assert!(driver.violations().is_empty(), "{:?}", driver.violations());
}

#[tokio::test]
async fn resize_is_recorded() {
    let driver = driver();
    driver.push_script([Scripted::Event(AppEvent::Resize(120, 40))]);

    let app = run(&driver, App::new(Deck::builtin())).await;

    assert_eq!(app.terminal_size(), (120, 40));
    assert!(driver.frames().len() >= 2);
}
