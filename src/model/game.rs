//! Game results and the goal entries they are built from.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Length of a regulation period.
pub const PERIOD_LENGTH_SECS: u32 = 20 * 60;

const FIXTURE_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Manpower situation a goal was scored in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    #[default]
    #[serde(alias = "EV", alias = "ES", alias = "ev", alias = "es", alias = "even-strength")]
    Even,
    #[serde(alias = "PP", alias = "pp", alias = "power-play")]
    Powerplay,
    #[serde(alias = "SH", alias = "sh", alias = "short-handed")]
    Shorthanded,
}

/// A single goal. Opponent goals usually carry no scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scorer: Option<PlayerId>,
    pub minute: u32,
    pub second: u32,
    #[serde(rename = "type", default)]
    pub kind: GoalType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assists: Vec<PlayerId>,
}

impl Goal {
    /// Seconds since opening faceoff, given the 1-based period the goal was in.
    /// Out-of-range clock values saturate at `u32::MAX`.
    pub fn clock_secs(&self, period: u8) -> u32 {
        let offset = u32::from(period.saturating_sub(1)) * PERIOD_LENGTH_SECS;
        offset
            .saturating_add(self.minute.saturating_mul(60))
            .saturating_add(self.second)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    #[serde(default)]
    pub team: Vec<Goal>,
    #[serde(default)]
    pub opponent: Vec<Goal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    #[serde(default)]
    pub period1: Period,
    #[serde(default)]
    pub period2: Period,
    #[serde(default)]
    pub period3: Period,
}

impl Score {
    /// Periods paired with their 1-based number.
    pub fn periods(&self) -> [(u8, &Period); 3] {
        [(1, &self.period1), (2, &self.period2), (3, &self.period3)]
    }
}

/// A team goal placed on the game clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedGoal<'a> {
    pub period: u8,
    pub at: u32,
    pub goal: &'a Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Win => "W",
            Outcome::Loss => "L",
            Outcome::Tie => "T",
        };
        write!(f, "{}", s)
    }
}

/// One played game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub opponent: String,
    pub date: String,
    pub season: String,
    #[serde(default)]
    pub score: Score,
}

impl GameResult {
    /// Team goals in listed order, period by period.
    pub fn team_goals(&self) -> impl Iterator<Item = TimedGoal<'_>> {
        self.score.periods().into_iter().flat_map(|(period, p)| {
            p.team.iter().map(move |goal| TimedGoal {
                period,
                at: goal.clock_secs(period),
                goal,
            })
        })
    }

    /// Team goals ordered by game clock. Equal times keep their listed order.
    pub fn team_goals_chronological(&self) -> Vec<TimedGoal<'_>> {
        let mut goals: Vec<_> = self.team_goals().collect();
        goals.sort_by_key(|g| g.at);
        goals
    }

    pub fn goals_for(&self) -> usize {
        self.score.periods().iter().map(|(_, p)| p.team.len()).sum()
    }

    pub fn goals_against(&self) -> usize {
        self.score.periods().iter().map(|(_, p)| p.opponent.len()).sum()
    }

    pub fn outcome(&self) -> Outcome {
        match self.goals_for().cmp(&self.goals_against()) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// Result as shown next to a record, e.g. `W 5-3`.
    pub fn result_string(&self) -> String {
        format!(
            "{} {}-{}",
            self.outcome(),
            self.goals_for(),
            self.goals_against()
        )
    }

    /// `2024-10-05` becomes `Oct 5, 2024`; anything else is shown as stored.
    pub fn display_date(&self) -> String {
        NaiveDate::parse_from_str(&self.date, FIXTURE_DATE_FORMAT)
            .map(|d| d.format(DISPLAY_DATE_FORMAT).to_string())
            .unwrap_or_else(|_| self.date.clone())
    }

    /// The goal that put the team ahead of the opponent's final total.
    ///
    /// Only won games have one. It is the team goal at chronological index
    /// equal to the opponent's final score, so a goal missing from the data
    /// shifts the credit to the next one.
    pub fn game_winning_goal(&self) -> Option<TimedGoal<'_>> {
        if self.outcome() != Outcome::Win {
            return None;
        }
        self.team_goals_chronological()
            .into_iter()
            .nth(self.goals_against())
    }
}

/// Formats game-clock seconds as `M:SS`.
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
