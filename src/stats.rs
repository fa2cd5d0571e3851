//! Season selection, team record and player stat lines.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::model::{GameResult, Outcome, Player, PlayerId, Totals};

/// Sentinel season id meaning every season combined.
pub const OVERALL: &str = "overall";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeasonFilter {
    Overall,
    Season(String),
}

impl SeasonFilter {
    pub fn matches(&self, season: &str) -> bool {
        match self {
            SeasonFilter::Overall => true,
            SeasonFilter::Season(id) => id == season,
        }
    }
}

impl FromStr for SeasonFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(OVERALL) {
            Ok(SeasonFilter::Overall)
        } else {
            Ok(SeasonFilter::Season(s.to_string()))
        }
    }
}

impl fmt::Display for SeasonFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonFilter::Overall => write!(f, "{}", OVERALL),
            SeasonFilter::Season(id) => write!(f, "{}", id),
        }
    }
}

/// Results belonging to `filter`, in their original order.
pub fn filter_results(results: &[GameResult], filter: &SeasonFilter) -> Vec<GameResult> {
    results
        .iter()
        .filter(|r| filter.matches(&r.season))
        .cloned()
        .collect()
}

/// Players with their stat lines narrowed to `filter`. Every player is kept,
/// possibly with no lines.
pub fn filter_players(players: &[Player], filter: &SeasonFilter) -> Vec<Player> {
    players
        .iter()
        .map(|player| Player {
            seasons: player
                .seasons
                .iter()
                .filter(|s| filter.matches(&s.season))
                .cloned()
                .collect(),
            ..player.clone()
        })
        .collect()
}

/// Sort key for ids like `24/25` or `2024-25`: the leading year, widened to four digits.
fn season_year(season: &str) -> Option<u32> {
    let digits: String = season.chars().take_while(|c| c.is_ascii_digit()).collect();
    let year: u32 = digits.parse().ok()?;
    Some(if year < 100 { 2000 + year } else { year })
}

fn newest_first(a: &str, b: &str) -> Ordering {
    match (season_year(a), season_year(b)) {
        (Some(x), Some(y)) => y.cmp(&x).then_with(|| b.cmp(a)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.cmp(a),
    }
}

/// Every season id seen in results or stat lines, newest first.
pub fn seasons(results: &[GameResult], players: &[Player]) -> Vec<String> {
    let mut ids: Vec<String> = results
        .iter()
        .map(|r| r.season.clone())
        .chain(
            players
                .iter()
                .flat_map(|p| p.seasons.iter().map(|s| s.season.clone())),
        )
        .collect();
    ids.sort_by(|a, b| newest_first(a, b));
    ids.dedup();
    ids
}

/// Win/loss summary over a set of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
    pub goals_for: usize,
    pub goals_against: usize,
}

impl TeamRecord {
    pub fn from_results(results: &[GameResult]) -> Self {
        let mut record = Self::default();
        for result in results {
            record.games += 1;
            record.goals_for += result.goals_for();
            record.goals_against += result.goals_against();
            match result.outcome() {
                Outcome::Win => record.wins += 1,
                Outcome::Loss => record.losses += 1,
                Outcome::Tie => record.ties += 1,
            }
        }
        record
    }

    pub fn goal_differential(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    /// Percentage of available points earned, ties counting half.
    pub fn points_percentage(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        (self.wins as f64 + self.ties as f64 * 0.5) / self.games as f64 * 100.0
    }
}

impl fmt::Display for TeamRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.ties)
    }
}

/// A player's counting stats for the selected season(s).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatLine {
    pub player_id: PlayerId,
    pub name: String,
    pub number: Option<u32>,
    #[serde(flatten)]
    pub totals: Totals,
}

/// Stat used to rank a leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Goals,
    Assists,
    Points,
    PenaltyMinutes,
    GamesPlayed,
}

impl Stat {
    pub fn read(self, totals: &Totals) -> u32 {
        match self {
            Stat::Goals => totals.goals,
            Stat::Assists => totals.assists,
            Stat::Points => totals.points,
            Stat::PenaltyMinutes => totals.pim,
            Stat::GamesPlayed => totals.games_played,
        }
    }
}

/// One line per player: the chosen season's line, or the career sum for
/// [`SeasonFilter::Overall`]. Players without a line for the season are skipped.
pub fn player_lines(players: &[Player], filter: &SeasonFilter) -> Vec<StatLine> {
    players
        .iter()
        .filter_map(|player| {
            let totals = match filter {
                SeasonFilter::Overall => player.career(),
                SeasonFilter::Season(id) => Totals::from(player.season(id)?),
            };
            Some(StatLine {
                player_id: player.id,
                name: player.name.clone(),
                number: player.number,
                totals,
            })
        })
        .collect()
}

/// Top `n` lines by `stat`, descending; equal values ordered by name.
pub fn leaders(lines: &[StatLine], stat: Stat, n: usize) -> Vec<StatLine> {
    let mut sorted = lines.to_vec();
    sorted.sort_by(|a, b| {
        stat.read(&b.totals)
            .cmp(&stat.read(&a.totals))
            .then_with(|| a.name.cmp(&b.name))
    });
    sorted.truncate(n);
    sorted
}
