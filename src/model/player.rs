//! Roster entries and their per-season stat lines.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use super::PlayerId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[serde(alias = "F", alias = "C", alias = "LW", alias = "RW", alias = "center", alias = "wing")]
    Forward,
    #[serde(alias = "D", alias = "defence", alias = "defenseman")]
    Defense,
    #[serde(alias = "G", alias = "goaltender")]
    Goalie,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Aggregate line for one season as stored in the roster fixture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStats {
    pub season: String,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default, alias = "penaltyMinutes")]
    pub pim: u32,
    #[serde(default)]
    pub points: u32,
}

/// Counting stats without a season attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub games_played: u32,
    pub goals: u32,
    pub assists: u32,
    pub pim: u32,
    pub points: u32,
}

impl From<&SeasonStats> for Totals {
    fn from(line: &SeasonStats) -> Self {
        Self {
            games_played: line.games_played,
            goals: line.goals,
            assists: line.assists,
            pim: line.pim,
            points: line.points,
        }
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, rhs: Self) {
        self.games_played = self.games_played.saturating_add(rhs.games_played);
        self.goals = self.goals.saturating_add(rhs.goals);
        self.assists = self.assists.saturating_add(rhs.assists);
        self.pim = self.pim.saturating_add(rhs.pim);
        self.points = self.points.saturating_add(rhs.points);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub seasons: Vec<SeasonStats>,
}

impl Player {
    pub fn season(&self, season: &str) -> Option<&SeasonStats> {
        self.seasons.iter().find(|s| s.season == season)
    }

    /// Sum of every stored season line.
    pub fn career(&self) -> Totals {
        let mut totals = Totals::default();
        for line in &self.seasons {
            totals += Totals::from(line);
        }
        totals
    }
}
