//! Data model for the results and roster fixtures.

mod game;
mod player;

pub use game::{
    GameResult, Goal, GoalType, Outcome, PERIOD_LENGTH_SECS, Period, Score, TimedGoal,
    format_clock,
};
pub use player::{Player, Position, SeasonStats, Totals};

use std::collections::HashMap;

/// Roster identifier referenced by goal and assist entries.
pub type PlayerId = u32;

/// Name lookup over a player list.
///
/// Goals may reference ids that are missing from the roster; those resolve to
/// a `Player #<id>` placeholder instead of failing.
pub struct Roster<'a> {
    by_id: HashMap<PlayerId, &'a Player>,
}

impl<'a> Roster<'a> {
    pub fn new(players: &'a [Player]) -> Self {
        let mut by_id = HashMap::with_capacity(players.len());
        for player in players {
            // First entry wins when a fixture lists the same id twice.
            by_id.entry(player.id).or_insert(player);
        }
        Self { by_id }
    }

    pub fn get(&self, id: PlayerId) -> Option<&'a Player> {
        self.by_id.get(&id).copied()
    }

    pub fn name_of(&self, id: PlayerId) -> String {
        match self.get(id) {
            Some(player) => player.name.clone(),
            None => format!("Player #{id}"),
        }
    }
}
