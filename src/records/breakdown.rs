//! Per-player goal classifications derived by replaying games.

use std::collections::HashMap;
use std::ops::AddAssign;

use crate::model::{GameResult, GoalType, PlayerId};

/// Goals needed in one game for a hat trick.
pub const HAT_TRICK_GOALS: usize = 3;

/// One player's line for a single game, built from the goal entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLine {
    pub player: PlayerId,
    pub goals: u32,
    pub assists: u32,
    /// Clock times of the player's goals, earliest first.
    pub goal_times: Vec<u32>,
}

impl GameLine {
    fn new(player: PlayerId) -> Self {
        Self {
            player,
            goals: 0,
            assists: 0,
            goal_times: Vec::new(),
        }
    }

    pub fn points(&self) -> u32 {
        self.goals.saturating_add(self.assists)
    }

    pub fn first_goal(&self) -> Option<u32> {
        self.goal_times.first().copied()
    }

    /// Clock time of the goal completing the hat trick.
    pub fn hat_trick_time(&self) -> Option<u32> {
        self.goal_times.get(HAT_TRICK_GOALS - 1).copied()
    }
}

/// Tallies every player who scored or assisted in `result`.
///
/// Lines come back in the order players first appear in the goal lists.
pub fn game_lines(result: &GameResult) -> Vec<GameLine> {
    let mut lines: Vec<GameLine> = Vec::new();

    fn line_for(lines: &mut Vec<GameLine>, player: PlayerId) -> &mut GameLine {
        let idx = match lines.iter().position(|l| l.player == player) {
            Some(idx) => idx,
            None => {
                lines.push(GameLine::new(player));
                lines.len() - 1
            }
        };
        &mut lines[idx]
    }

    for timed in result.team_goals() {
        if let Some(scorer) = timed.goal.scorer {
            let line = line_for(&mut lines, scorer);
            line.goals += 1;
            line.goal_times.push(timed.at);
        }
        for &assist in &timed.goal.assists {
            line_for(&mut lines, assist).assists += 1;
        }
    }

    for line in &mut lines {
        line.goal_times.sort_unstable();
    }
    lines
}

/// Situational goal counts for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoalBreakdown {
    pub hat_tricks: u32,
    pub power_play: u32,
    pub short_handed: u32,
    pub game_winning: u32,
}

impl AddAssign for GoalBreakdown {
    fn add_assign(&mut self, rhs: Self) {
        self.hat_tricks = self.hat_tricks.saturating_add(rhs.hat_tricks);
        self.power_play = self.power_play.saturating_add(rhs.power_play);
        self.short_handed = self.short_handed.saturating_add(rhs.short_handed);
        self.game_winning = self.game_winning.saturating_add(rhs.game_winning);
    }
}

/// Replays `results` and classifies every team goal by scorer.
pub fn breakdown<'a>(
    results: impl IntoIterator<Item = &'a GameResult>,
) -> HashMap<PlayerId, GoalBreakdown> {
    let mut by_player: HashMap<PlayerId, GoalBreakdown> = HashMap::new();

    for result in results {
        for timed in result.team_goals() {
            let Some(scorer) = timed.goal.scorer else {
                continue;
            };
            let entry = by_player.entry(scorer).or_default();
            match timed.goal.kind {
                GoalType::Powerplay => entry.power_play += 1,
                GoalType::Shorthanded => entry.short_handed += 1,
                GoalType::Even => {}
            }
        }

        for line in game_lines(result) {
            if line.goals as usize >= HAT_TRICK_GOALS {
                by_player.entry(line.player).or_default().hat_tricks += 1;
            }
        }

        if let Some(scorer) = result.game_winning_goal().and_then(|g| g.goal.scorer) {
            by_player.entry(scorer).or_default().game_winning += 1;
        }
    }

    by_player
}

/// [`breakdown`] split by season id.
pub fn breakdown_by_season(
    results: &[GameResult],
) -> HashMap<&str, HashMap<PlayerId, GoalBreakdown>> {
    let mut grouped: HashMap<&str, Vec<&GameResult>> = HashMap::new();
    for result in results {
        grouped.entry(result.season.as_str()).or_default().push(result);
    }

    grouped
        .into_iter()
        .map(|(season, games)| (season, breakdown(games)))
        .collect()
}
