//! Single-season records.

use tracing::debug;

use crate::model::{GameResult, Player, PlayerId, Roster, SeasonStats};

use super::breakdown::{GoalBreakdown, breakdown_by_season};
use super::leader::Leader;
use super::types::{Record, RecordCategory, RecordHolder, RecordScope, Unit};

/// A stored season line joined with what the games say about it.
struct SeasonSample<'a> {
    line: &'a SeasonStats,
    derived: GoalBreakdown,
}

struct SeasonRecord {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: RecordCategory,
    unit: Unit,
    read: fn(&SeasonSample<'_>) -> u32,
}

const SEASON_RECORDS: [SeasonRecord; 7] = [
    SeasonRecord {
        id: "most-goals-season",
        title: "Most Goals in a Season",
        description: "Most goals by one player in a single season",
        category: RecordCategory::Goals,
        unit: Unit::Goals,
        read: |s| s.line.goals,
    },
    SeasonRecord {
        id: "most-assists-season",
        title: "Most Assists in a Season",
        description: "Most assists by one player in a single season",
        category: RecordCategory::Assists,
        unit: Unit::Assists,
        read: |s| s.line.assists,
    },
    SeasonRecord {
        id: "most-points-season",
        title: "Most Points in a Season",
        description: "Most points by one player in a single season",
        category: RecordCategory::Points,
        unit: Unit::Points,
        read: |s| s.line.points,
    },
    SeasonRecord {
        id: "most-hat-tricks-season",
        title: "Most Hat Tricks in a Season",
        description: "Most games with three or more goals in a single season",
        category: RecordCategory::Performance,
        unit: Unit::HatTricks,
        read: |s| s.derived.hat_tricks,
    },
    SeasonRecord {
        id: "most-ppg-season",
        title: "Most Power Play Goals in a Season",
        description: "Most goals scored with the man advantage in a single season",
        category: RecordCategory::Goals,
        unit: Unit::Goals,
        read: |s| s.derived.power_play,
    },
    SeasonRecord {
        id: "most-shg-season",
        title: "Most Short-Handed Goals in a Season",
        description: "Most goals scored while short-handed in a single season",
        category: RecordCategory::Goals,
        unit: Unit::Goals,
        read: |s| s.derived.short_handed,
    },
    SeasonRecord {
        id: "most-gwg-season",
        title: "Most Game-Winning Goals in a Season",
        description: "Most game-winning goals in a single season",
        category: RecordCategory::Performance,
        unit: Unit::Goals,
        read: |s| s.derived.game_winning,
    },
];

/// Computes every season-scoped record.
///
/// Candidates are each player's stored season lines; situational counts come
/// from replaying the games of that season. Ties are keyed by player and season.
pub fn season_records(results: &[GameResult], players: &[Player]) -> Vec<Record> {
    let roster = Roster::new(players);
    let derived = breakdown_by_season(results);

    let mut leaders: Vec<Leader<(PlayerId, &str), RecordHolder>> =
        SEASON_RECORDS.iter().map(|_| Leader::highest()).collect();

    for player in players {
        for line in &player.seasons {
            let sample = SeasonSample {
                line,
                derived: derived
                    .get(line.season.as_str())
                    .and_then(|by_player| by_player.get(&player.id))
                    .copied()
                    .unwrap_or_default(),
            };
            let key = (player.id, line.season.as_str());

            for (def, leader) in SEASON_RECORDS.iter().zip(leaders.iter_mut()) {
                leader.offer((def.read)(&sample), key, || RecordHolder::Season {
                    player_id: player.id,
                    player_name: roster.name_of(player.id),
                    season: line.season.clone(),
                });
            }
        }
    }

    debug!(
        players = players.len(),
        seasons = derived.len(),
        "computed season records"
    );

    SEASON_RECORDS
        .iter()
        .zip(leaders)
        .map(|(def, leader)| Record {
            id: def.id,
            title: def.title,
            description: def.description,
            value: def.unit.count(leader.best().unwrap_or(0)),
            category: def.category,
            scope: RecordScope::Season,
            holders: leader.into_holders(),
        })
        .collect()
}
