//! Team record engine.
//!
//! Pure functions over already-loaded results and players. Season filtering
//! happens before these are called (see [`crate::stats::SeasonFilter`]).

mod all_time;
mod breakdown;
mod game;
mod leader;
mod season;
#[cfg(test)]
mod tests;
mod types;

pub use all_time::all_time_records;
pub use breakdown::{
    GameLine, GoalBreakdown, HAT_TRICK_GOALS, breakdown, breakdown_by_season, game_lines,
};
pub use game::game_records;
pub use season::season_records;
pub use types::{
    Accent, CategoryStyle, GameContext, Record, RecordCategory, RecordHolder, RecordScope, Unit,
};

use tracing::info;

use crate::model::{GameResult, Player};

/// Every record: game, then season, then career.
pub fn compute_records(results: &[GameResult], players: &[Player]) -> Vec<Record> {
    let mut records = game_records(results, players);
    records.extend(season_records(results, players));
    records.extend(all_time_records(results, players));

    info!(
        records = records.len(),
        held = records.iter().filter(|r| r.is_held()).count(),
        "records computed"
    );
    records
}

/// Records of a single scope, in the same order [`compute_records`] uses.
pub fn records_for_scope(
    scope: RecordScope,
    results: &[GameResult],
    players: &[Player],
) -> Vec<Record> {
    match scope {
        RecordScope::Game => game_records(results, players),
        RecordScope::Season => season_records(results, players),
        RecordScope::Career => all_time_records(results, players),
    }
}
