//! Decorative one-liners shown next to records.

use rand::seq::IndexedRandom;

use crate::records::RecordCategory;

const GOAL_QUIPS: &[&str] = &[
    "Top shelf, where mom keeps the cookies.",
    "The goalie is still looking for it.",
    "Lamp lit.",
];

const ASSIST_QUIPS: &[&str] = &[
    "Tape to tape.",
    "Sauce on the dish.",
    "Never forget the passer.",
];

const POINT_QUIPS: &[&str] = &[
    "Filling up the scoresheet.",
    "On the ice for everything.",
    "Box score bandit.",
];

const PERFORMANCE_QUIPS: &[&str] = &[
    "Hats on the ice!",
    "Clutch gene confirmed.",
    "Somebody check the stick for illegal curve.",
];

pub fn quips_for(category: RecordCategory) -> &'static [&'static str] {
    match category {
        RecordCategory::Goals => GOAL_QUIPS,
        RecordCategory::Assists => ASSIST_QUIPS,
        RecordCategory::Points => POINT_QUIPS,
        RecordCategory::Performance => PERFORMANCE_QUIPS,
    }
}

/// A random quip for `category`.
pub fn quip(category: RecordCategory) -> &'static str {
    quips_for(category)
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or_default()
}
