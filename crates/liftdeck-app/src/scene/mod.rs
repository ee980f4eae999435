//! Scene projection.
//!
//! A [`Scene`] is a pure function of the deck, the sequencer and the sweep:
//! door openness, per-element reveal progress, the progress strip and the
//! call-to-action. It holds no state of its own, so any frontend can render
//! it and tests can inspect it without a terminal.

mod easing;

use std::time::Duration;

pub use easing::CubicBezier;
use liftdeck_core::{Deck, Intro, Sequencer, Slide};

use crate::Sweep;

/// Label of the advance control.
pub const NEXT_FLOOR_LABEL: &str = "▲  Next Floor";
/// Label of the advance control while traveling.
pub const MOVING_LABEL: &str = "▲  Moving...";
/// Label of the restart control on the top floor.
pub const RIDE_AGAIN_LABEL: &str = "Ride Again";

/// Entrance timing of one text element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    /// Delay after `revealed` changes.
    pub delay: Duration,
    /// Fade duration.
    pub duration: Duration,
    /// Distance the element travels while fading in. Sign gives direction.
    pub offset: f32,
}

impl Stagger {
    const fn new(delay_ms: u64, duration_ms: u64, offset: f32) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            duration: Duration::from_millis(duration_ms),
            offset,
        }
    }

    /// Time until this element settles.
    pub fn span(&self) -> Duration {
        self.delay + self.duration
    }
}

/// Sublabel fade.
pub const SUBLABEL: Stagger = Stagger::new(100, 400, 0.0);
/// Headline fade, rising 10px.
pub const HEADLINE: Stagger = Stagger::new(200, 500, 10.0);
/// Body fade, rising 8px.
pub const BODY: Stagger = Stagger::new(350, 500, 8.0);
/// Stat fade, sliding in 8px from the left.
pub const STAT: Stagger = Stagger::new(550, 500, -8.0);
/// Call-to-action fade, rising 8px.
pub const CTA: Stagger = Stagger::new(700, 500, 8.0);

/// Time for the whole reveal to settle.
pub const REVEAL_SPAN: Duration = Duration::from_millis(1200);

/// Visibility of one text element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    /// 0 (hidden) to 1 (fully visible).
    pub opacity: f32,
    /// Remaining displacement, shrinking to 0 as the element appears.
    pub offset: f32,
}

impl Reveal {
    /// Fully visible.
    pub const SHOWN: Self = Self { opacity: 1.0, offset: 0.0 };

    /// Reveal state of an element `since` the `revealed` flag last changed.
    pub fn at(stagger: Stagger, revealed: bool, since: Duration) -> Self {
        let progress = if since <= stagger.delay {
            0.0
        } else {
            let t = (since - stagger.delay).as_secs_f32() / stagger.duration.as_secs_f32();
            CubicBezier::EASE.apply(t)
        };
        let opacity = if revealed { progress } else { 1.0 - progress };
        Self { opacity, offset: stagger.offset * (1.0 - opacity) }
    }
}

/// One entry in the progress strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dot {
    /// Floor already passed.
    Visited,
    /// Current floor.
    Current,
    /// Floor still ahead.
    Upcoming,
}

/// Primary control on the elevator screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallToAction<'a> {
    /// Ride to the next floor.
    NextFloor {
        /// Control accepts input.
        enabled: bool,
        /// A ride is in progress.
        moving: bool,
    },
    /// Top floor: closing message and restart control.
    RideAgain {
        /// Closing message.
        closing: &'a str,
    },
}

impl CallToAction<'_> {
    /// Control label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NextFloor { moving: true, .. } => MOVING_LABEL,
            Self::NextFloor { moving: false, .. } => NEXT_FLOOR_LABEL,
            Self::RideAgain { .. } => RIDE_AGAIN_LABEL,
        }
    }
}

/// Intro screen.
#[derive(Debug, Clone, PartialEq)]
pub struct IntroScene<'a> {
    /// Intro copy.
    pub intro: &'a Intro,
    /// Footer line.
    pub footer: &'a str,
    /// Scanline position in `0..100`.
    pub sweep: u8,
}

/// Elevator screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevatorScene<'a> {
    /// Slide on the current floor.
    pub slide: &'a Slide,
    /// Current floor index.
    pub floor: usize,
    /// Door openness, 0 (shut) to 1 (fully open).
    pub doors: f32,
    /// Sublabel visibility.
    pub sublabel: Reveal,
    /// Headline visibility.
    pub headline: Reveal,
    /// Body visibility.
    pub body: Reveal,
    /// Stat visibility. `None` if the slide has no stat.
    pub stat: Option<Reveal>,
    /// Call-to-action visibility.
    pub cta: Reveal,
    /// Primary control.
    pub action: CallToAction<'a>,
    /// Progress strip, one dot per floor.
    pub progress: Vec<Dot>,
    /// Footer line.
    pub footer: &'a str,
    /// Scanline position in `0..100`.
    pub sweep: u8,
}

/// Everything a frontend needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Scene<'a> {
    /// Intro screen, before `start`.
    Intro(IntroScene<'a>),
    /// Elevator screen.
    Elevator(ElevatorScene<'a>),
}

impl<'a> Scene<'a> {
    /// Project the current state.
    pub fn project(deck: &'a Deck, sequencer: &Sequencer, sweep: &Sweep) -> Self {
        let state = sequencer.state();
        if !state.started {
            return Self::Intro(IntroScene {
                intro: deck.intro(),
                footer: deck.footer(),
                sweep: sweep.position(),
            });
        }

        let floor = state.current_floor.min(deck.last_floor());
        let slides = deck.slides();
        let Some(slide) = slides.get(floor).or_else(|| slides.first()) else {
            return Self::Intro(IntroScene {
                intro: deck.intro(),
                footer: deck.footer(),
                sweep: sweep.position(),
            });
        };

        let since = sequencer.since_revealed_changed();
        let action = if floor >= deck.last_floor() {
            CallToAction::RideAgain { closing: deck.closing() }
        } else {
            CallToAction::NextFloor { enabled: sequencer.can_advance(), moving: state.traveling }
        };

        Self::Elevator(ElevatorScene {
            slide,
            floor,
            doors: door_openness(sequencer),
            sublabel: Reveal::at(SUBLABEL, state.revealed, since),
            headline: Reveal::at(HEADLINE, state.revealed, since),
            body: Reveal::at(BODY, state.revealed, since),
            stat: slide.stat.as_ref().map(|_| Reveal::at(STAT, state.revealed, since)),
            cta: Reveal::at(CTA, state.revealed, since),
            action,
            progress: progress(floor, deck.len()),
            footer: deck.footer(),
            sweep: sweep.position(),
        })
    }
}

/// Door openness, eased over `door_motion` since the doors last changed.
pub fn door_openness(sequencer: &Sequencer) -> f32 {
    let motion = sequencer.timings().door_motion;
    let progress = if motion.is_zero() {
        1.0
    } else {
        CubicBezier::STANDARD
            .apply(sequencer.since_doors_changed().as_secs_f32() / motion.as_secs_f32())
    };
    if sequencer.state().doors_open { progress } else { 1.0 - progress }
}

/// Doors or text are still moving.
pub fn is_animating(sequencer: &Sequencer) -> bool {
    sequencer.state().started
        && (sequencer.since_doors_changed() < sequencer.timings().door_motion
            || sequencer.since_revealed_changed() < REVEAL_SPAN)
}

/// Progress strip for `floor` out of `floors`.
pub fn progress(floor: usize, floors: usize) -> Vec<Dot> {
    (0..floors)
        .map(|i| match i.cmp(&floor) {
            std::cmp::Ordering::Less => Dot::Visited,
            std::cmp::Ordering::Equal => Dot::Current,
            std::cmp::Ordering::Greater => Dot::Upcoming,
        })
        .collect()
}
