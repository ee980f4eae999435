//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: UI state machine
//! - [`Driver`]: Platform-specific I/O and clock

use std::time::Duration;

use crate::{App, AppAction, AppEvent, Driver};

/// Generic runtime that orchestrates App and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App,
    last_tick: Option<D::Instant>,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime with the given driver and app.
    pub fn new(driver: D, app: App) -> Self {
        Self { driver, app, last_tick: None }
    }

    /// Run the main event loop until the app asks to quit.
    ///
    /// Each cycle:
    /// 1. Polls the driver for an input event
    /// 2. Ticks the app with the time elapsed since the previous cycle
    /// 3. Renders when the app asks for it
    ///
    /// The app is disposed and the driver stopped on every exit path.
    /// Returns the disposed app.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<App, D::Error> {
        tracing::info!(floors = self.app.deck().len(), "runtime started");

        let result = self.event_loop().await;

        self.app.dispose();
        self.driver.stop();
        tracing::info!("runtime stopped");

        result.map(|()| self.app)
    }

    async fn event_loop(&mut self) -> Result<(), D::Error> {
        self.last_tick = Some(self.driver.now());
        self.driver.render(&self.app)?;

        loop {
            let should_quit = self.process_cycle().await?;
            if should_quit {
                return Ok(());
            }
        }
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        let actions = self.driver.poll_event(&mut self.app).await?;
        if self.process_actions(actions)? {
            return Ok(true);
        }

        let now = self.driver.now();
        let elapsed = self.last_tick.map_or(Duration::ZERO, |last| now - last);
        self.last_tick = Some(now);

        let actions = self.app.handle(AppEvent::Tick { elapsed });
        self.process_actions(actions)
    }

    /// Process actions returned by the App. Renders at most once.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        let mut render = false;
        for action in actions {
            match action {
                AppAction::Render => render = true,
                AppAction::Quit => return Ok(true),
            }
        }

        if render {
            self.driver.render(&self.app)?;
        }
        Ok(false)
    }
}
