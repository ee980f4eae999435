//! The deck shipped with the binary.

use super::{Accent, Deck, Intro, Slide};

const GOLD: Accent = Accent::new(0xFF, 0xD7, 0x00);
const EMBER: Accent = Accent::new(0xFF, 0x6B, 0x35);
const MINT: Accent = Accent::new(0x7F, 0xFF, 0xB2);
const VIOLET: Accent = Accent::new(0xA7, 0x8B, 0xFA);
const SKY: Accent = Accent::new(0x38, 0xBD, 0xF8);
const ORANGE: Accent = Accent::new(0xFB, 0x92, 0x3C);
const PINK: Accent = Accent::new(0xF4, 0x72, 0xB6);

/// (level, sublabel, headline, body, stat, accent)
type Floor = (&'static str, &'static str, &'static str, &'static str, Option<&'static str>, Accent);

const FLOORS: [Floor; 8] = [
    (
        "LOBBY",
        "Ground floor. Doors opening.",
        "There's an app being built.",
        "It doesn't know your name. It doesn't want your data. It can't sell your kid to an \
         algorithm. You're already intrigued. You just don't know it yet.",
        None,
        GOLD,
    ),
    (
        "FLOOR 01",
        "Ding.",
        "Big Tech has been farming your children.",
        "Every click. Every dwell time. Every emotional reaction. Packaged, sold, optimised \
         against. The entire kids app market is a data extraction operation dressed in primary \
         colours.",
        Some("94% of top children's apps share data with third parties."),
        EMBER,
    ),
    (
        "FLOOR 02",
        "Ding.",
        "We built the opposite.",
        "Zero-Collection Educational Architecture. No account. No server. No profile. The app \
         runs entirely on-device. The only thing it knows about your kid is what your kid \
         chooses to tell it, and that never leaves the phone.",
        Some("ZCEA: Zero data collected. Full stop."),
        MINT,
    ),
    (
        "FLOOR 03",
        "Ding.",
        "The pet has a 180-digit genome.",
        "Every Jewble is genetically unique. Cryptographically born. Its personality, \
         appearance, and growth emerge from a mathematical signature that belongs to the child \
         who hatched it. No two have ever existed. No two ever will.",
        Some(
            "180-digit genetic architecture. More combinations than atoms in the observable \
             universe.",
        ),
        VIOLET,
    ),
    (
        "FLOOR 04",
        "Ding.",
        "The regulators are writing the rules right now.",
        "Australia's Children's Online Privacy Code consultation is open. We're not scrambling \
         to comply. We're the reference implementation. We wrote a compliance framework before \
         the law exists. When the law catches up, we're already the answer.",
        Some("COPC 2025. We're not a case study. We're the blueprint."),
        SKY,
    ),
    (
        "FLOOR 05",
        "Ding.",
        "Schools are desperate for this.",
        "MACS. ISV. The independent and Catholic school systems across Australia. They need \
         digital tools that don't require consent forms, data processing agreements, or \
         explaining to a parent why their 8-year-old has a behavioural advertising profile. We \
         fit without friction.",
        Some("1,200+ independent and Catholic schools. Zero friction onboarding."),
        ORANGE,
    ),
    (
        "FLOOR 06",
        "Ding.",
        "It teaches. It heals. It remembers.",
        "The Mirror System reflects emotional patterns back to children through their pet's \
         behaviour. Dream Archaeology. Genome Sonification. Constellation Mapping. This isn't a \
         game. It's a consciousness development tool wearing the disguise of something \
         adorable.",
        Some("Therapeutic framework embedded in gameplay loop."),
        PINK,
    ),
    (
        "PENTHOUSE",
        "End of the line.",
        "You're not investing in an app.",
        "You're investing in the idea that children deserve digital companions who are loyal \
         to them, not to the platform. Blue Snake Studios built something that couldn't exist \
         inside a VC model. Now you get to be part of how it reaches the world.",
        Some("Jewble. The first companion that keeps its mouth shut."),
        GOLD,
    ),
];

pub(super) fn deck() -> Deck {
    let intro = Intro {
        presenter: "Blue Snake Studios presents".into(),
        title: "JEWBLE".into(),
        tagline: vec![
            "An elevator pitch.".into(),
            "Except the doors keep opening.".into(),
            "And each floor makes you feel".into(),
        ],
        hook: "stupider for not already being in.".into(),
        enter_label: "Enter The Building".into(),
        accent: GOLD,
        hook_accent: EMBER,
    };

    let slides = FLOORS
        .iter()
        .map(|&(level, sublabel, headline, body, stat, accent)| Slide {
            level: level.into(),
            sublabel: sublabel.into(),
            headline: headline.into(),
            body: body.into(),
            stat: stat.map(Into::into),
            accent,
        })
        .collect();

    Deck {
        intro,
        slides,
        closing: "JEWBLE.APP".into(),
        footer: "Blue Snake Studios · Jewble Meta-Pet Platform · Melbourne".into(),
    }
}
