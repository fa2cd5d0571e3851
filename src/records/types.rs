//! Record descriptors and their holder shapes.

use std::fmt;

use serde::Serialize;

use crate::model::{GameResult, PlayerId};

/// Category tag shown with every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordCategory {
    Goals,
    Assists,
    Points,
    Performance,
}

/// Colour family used to tint a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Red,
    Blue,
    Purple,
    Amber,
}

/// Presentation hints for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub icon: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

impl RecordCategory {
    pub fn style(self) -> CategoryStyle {
        match self {
            RecordCategory::Goals => CategoryStyle {
                icon: "🥅",
                label: "Goals",
                accent: Accent::Red,
            },
            RecordCategory::Assists => CategoryStyle {
                icon: "🤝",
                label: "Assists",
                accent: Accent::Blue,
            },
            RecordCategory::Points => CategoryStyle {
                icon: "⭐",
                label: "Points",
                accent: Accent::Purple,
            },
            RecordCategory::Performance => CategoryStyle {
                icon: "⚡",
                label: "Performance",
                accent: Accent::Amber,
            },
        }
    }
}

impl fmt::Display for RecordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.style().label)
    }
}

/// What a record is measured over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordScope {
    Game,
    Season,
    Career,
}

/// The game a game-scoped record was set in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameContext {
    pub opponent: String,
    pub date: String,
    pub result: String,
}

impl From<&GameResult> for GameContext {
    fn from(result: &GameResult) -> Self {
        Self {
            opponent: result.opponent.clone(),
            date: result.display_date(),
            result: result.result_string(),
        }
    }
}

/// A player holding (or sharing) a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "scope", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum RecordHolder {
    Game {
        player_id: PlayerId,
        player_name: String,
        game: GameContext,
    },
    Season {
        player_id: PlayerId,
        player_name: String,
        season: String,
    },
    Career {
        player_id: PlayerId,
        player_name: String,
    },
}

impl RecordHolder {
    pub fn player_id(&self) -> PlayerId {
        match self {
            RecordHolder::Game { player_id, .. }
            | RecordHolder::Season { player_id, .. }
            | RecordHolder::Career { player_id, .. } => *player_id,
        }
    }

    pub fn player_name(&self) -> &str {
        match self {
            RecordHolder::Game { player_name, .. }
            | RecordHolder::Season { player_name, .. }
            | RecordHolder::Career { player_name, .. } => player_name,
        }
    }

    pub fn scope(&self) -> RecordScope {
        match self {
            RecordHolder::Game { .. } => RecordScope::Game,
            RecordHolder::Season { .. } => RecordScope::Season,
            RecordHolder::Career { .. } => RecordScope::Career,
        }
    }
}

/// A computed record, ready to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub value: String,
    pub category: RecordCategory,
    pub scope: RecordScope,
    pub holders: Vec<RecordHolder>,
}

impl Record {
    pub fn is_held(&self) -> bool {
        !self.holders.is_empty()
    }
}

/// Counting unit used to format record values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Goals,
    Assists,
    Points,
    HatTricks,
    Games,
}

impl Unit {
    fn forms(self) -> (&'static str, &'static str) {
        match self {
            Unit::Goals => ("goal", "goals"),
            Unit::Assists => ("assist", "assists"),
            Unit::Points => ("point", "points"),
            Unit::HatTricks => ("hat trick", "hat tricks"),
            Unit::Games => ("game", "games"),
        }
    }

    /// `1 goal`, `0 goals`, `3 goals`.
    pub fn count(self, n: u32) -> String {
        let (one, many) = self.forms();
        if n == 1 {
            format!("{n} {one}")
        } else {
            format!("{n} {many}")
        }
    }

    /// Placeholder for a timed record nobody has set.
    pub fn none(self) -> String {
        format!("No {}", self.forms().1)
    }
}
