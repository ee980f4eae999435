//! Slide content.
//!
//! A [`Deck`] is the ordered list of [`Slide`]s plus the intro screen and
//! closing copy around them. Decks are loaded once at startup and never
//! mutated afterwards; the sequencer only ever refers to slides by index.

mod builtin;

use std::{fmt, num::NonZeroUsize, path::Path, str::FromStr};

use serde::Deserialize;

use crate::DeckError;

/// RGB accent color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Accent {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Accent {
    /// Create an accent from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`. `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn mix(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            let a = f32::from(a);
            let b = f32::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Self { r: channel(self.r, other.r), g: channel(self.g, other.g), b: channel(self.b, other.b) }
    }
}

impl FromStr for Accent {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DeckError::InvalidAccent(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            hex.get(range).and_then(|h| u8::from_str_radix(h, 16).ok()).ok_or_else(invalid)
        };
        Ok(Self { r: channel(0..2)?, g: channel(2..4)?, b: channel(4..6)? })
    }
}

impl TryFrom<String> for Accent {
    type Error = DeckError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// One floor of the presentation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Slide {
    /// Floor label shown in the indicator ("LOBBY", "FLOOR 01").
    pub level: String,
    /// Small line above the headline.
    pub sublabel: String,
    /// Headline.
    pub headline: String,
    /// Body copy.
    pub body: String,
    /// Optional statistic callout. `None` hides the callout.
    #[serde(default)]
    pub stat: Option<String>,
    /// Accent color for the label, headline, stat and frame.
    pub accent: Accent,
}

/// Intro screen copy, shown before the doors first open.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Intro {
    /// "... presents" line above the title.
    pub presenter: String,
    /// Title.
    pub title: String,
    /// Tagline lines under the title.
    pub tagline: Vec<String>,
    /// Emphasised final tagline line.
    pub hook: String,
    /// Label of the control that dismisses the intro.
    pub enter_label: String,
    /// Title color.
    pub accent: Accent,
    /// Color of the emphasised line.
    pub hook_accent: Accent,
}

/// Immutable, non-empty slide deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    intro: Intro,
    slides: Vec<Slide>,
    closing: String,
    footer: String,
}

#[derive(Deserialize)]
struct DeckFile {
    intro: Intro,
    slides: Vec<Slide>,
    closing: String,
    #[serde(default)]
    footer: String,
}

impl Deck {
    /// Build a deck. Fails if `slides` is empty.
    pub fn new(
        intro: Intro,
        slides: Vec<Slide>,
        closing: impl Into<String>,
        footer: impl Into<String>,
    ) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { intro, slides, closing: closing.into(), footer: footer.into() })
    }

    /// The deck compiled into the binary.
    pub fn builtin() -> Self {
        builtin::deck()
    }

    /// Parse a deck from JSON.
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        let file: DeckFile = serde_json::from_str(json)?;
        Self::new(file.intro, file.slides, file.closing, file.footer)
    }

    /// Read and parse a deck file.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let json = std::fs::read_to_string(path)
            .map_err(|source| DeckError::Io { path: path.to_path_buf(), source })?;
        let deck = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), floors = deck.len(), "loaded deck");
        Ok(deck)
    }

    /// Intro screen copy.
    pub fn intro(&self) -> &Intro {
        &self.intro
    }

    /// All slides, in floor order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Slide at `floor`. `None` if out of range.
    pub fn slide(&self, floor: usize) -> Option<&Slide> {
        self.slides.get(floor)
    }

    /// Number of floors.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Number of floors, which is never zero.
    pub fn floors(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.slides.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Index of the top floor.
    pub fn last_floor(&self) -> usize {
        self.slides.len().saturating_sub(1)
    }

    /// Closing call-to-action shown on the top floor.
    pub fn closing(&self) -> &str {
        &self.closing
    }

    /// Footer line under the elevator.
    pub fn footer(&self) -> &str {
        &self.footer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intro() -> Intro {
        Intro {
            presenter: "Acme presents".into(),
            title: "ACME".into(),
            tagline: vec!["A pitch.".into()],
            hook: "Get in.".into(),
            enter_label: "Enter".into(),
            accent: Accent::new(255, 215, 0),
            hook_accent: Accent::new(255, 107, 53),
        }
    }

    #[test]
    fn accent_parses_hex() {
        assert_eq!("#FFD700".parse::<Accent>().ok(), Some(Accent::new(255, 215, 0)));
        assert_eq!("#7fffb2".parse::<Accent>().ok(), Some(Accent::new(0x7f, 0xff, 0xb2)));
    }

    #[test]
    fn accent_rejects_malformed() {
        for bad in ["FFD700", "#FFD70", "#FFD7000", "#GGGGGG", "#ÿÿÿ"] {
            assert!(matches!(bad.parse::<Accent>(), Err(DeckError::InvalidAccent(_))), "{bad}");
        }
    }

    #[test]
    fn accent_displays_uppercase_hex() {
        assert_eq!(Accent::new(0x38, 0xbd, 0xf8).to_string(), "#38BDF8");
    }

    #[test]
    fn accent_mix_endpoints() {
        let a = Accent::new(0, 0, 0);
        let b = Accent::new(200, 100, 50);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 0.5), Accent::new(100, 50, 25));
        assert_eq!(a.mix(b, 7.0), b);
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert!(matches!(Deck::new(intro(), Vec::new(), "", ""), Err(DeckError::Empty)));
    }

    #[test]
    fn builtin_deck_has_eight_floors() {
        let deck = Deck::builtin();
        assert_eq!(deck.len(), 8);
        assert_eq!(deck.last_floor(), 7);
        assert_eq!(deck.slide(0).map(|s| s.level.as_str()), Some("LOBBY"));
        assert_eq!(deck.slide(7).map(|s| s.level.as_str()), Some("PENTHOUSE"));
        assert!(deck.slide(0).is_some_and(|s| s.stat.is_none()));
        assert!(deck.slide(8).is_none());
    }

    #[test]
    fn from_json_reads_deck() {
        let json = r##"{
            "intro": {
                "presenter": "Acme presents",
                "title": "ACME",
                "tagline": ["A pitch."],
                "hook": "Get in.",
                "enter_label": "Enter",
                "accent": "#FFD700",
                "hook_accent": "#ff6b35"
            },
            "slides": [
                { "level": "LOBBY", "sublabel": "Ground.", "headline": "Hi.",
                  "body": "Body.", "accent": "#FFD700" },
                { "level": "TOP", "sublabel": "Ding.", "headline": "Bye.",
                  "body": "Body.", "stat": "100%", "accent": "#a78bfa" }
            ],
            "closing": "ACME.APP"
        }"##;

        let deck = Deck::from_json(json).ok();
        assert_eq!(deck.as_ref().map(Deck::len), Some(2));
        assert_eq!(deck.as_ref().and_then(|d| d.slide(1)).and_then(|s| s.stat.clone()), Some("100%".into()));
        assert_eq!(deck.as_ref().map(Deck::footer), Some(""));
    }

    #[test]
    fn from_json_rejects_bad_accent() {
        let json = r##"{
            "intro": { "presenter": "", "title": "", "tagline": [], "hook": "",
                       "enter_label": "", "accent": "#FFD700", "hook_accent": "#FFD700" },
            "slides": [ { "level": "L", "sublabel": "", "headline": "", "body": "",
                          "accent": "gold" } ],
            "closing": ""
        }"##;

        assert!(matches!(Deck::from_json(json), Err(DeckError::Json(_))));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Deck::load(Path::new("/nonexistent/deck.json"));
        assert!(matches!(err, Err(DeckError::Io { .. })));
    }
}
