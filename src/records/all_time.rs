//! Career records summed across every season.

use tracing::debug;

use crate::model::{GameResult, Player, PlayerId, Roster, Totals};

use super::breakdown::{GoalBreakdown, breakdown};
use super::leader::Leader;
use super::types::{Record, RecordCategory, RecordHolder, RecordScope, Unit};

struct CareerSample {
    totals: Totals,
    derived: GoalBreakdown,
}

struct CareerRecord {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: RecordCategory,
    unit: Unit,
    read: fn(&CareerSample) -> u32,
}

const CAREER_RECORDS: [CareerRecord; 7] = [
    CareerRecord {
        id: "career-goals",
        title: "Most Career Goals",
        description: "Most goals across all seasons",
        category: RecordCategory::Goals,
        unit: Unit::Goals,
        read: |s| s.totals.goals,
    },
    CareerRecord {
        id: "career-assists",
        title: "Most Career Assists",
        description: "Most assists across all seasons",
        category: RecordCategory::Assists,
        unit: Unit::Assists,
        read: |s| s.totals.assists,
    },
    CareerRecord {
        id: "career-points",
        title: "Most Career Points",
        description: "Most points across all seasons",
        category: RecordCategory::Points,
        unit: Unit::Points,
        read: |s| s.totals.points,
    },
    CareerRecord {
        id: "career-games",
        title: "Most Games Played",
        description: "Most games played across all seasons",
        category: RecordCategory::Performance,
        unit: Unit::Games,
        read: |s| s.totals.games_played,
    },
    CareerRecord {
        id: "career-ppg",
        title: "Most Career Power Play Goals",
        description: "Most goals scored with the man advantage across all seasons",
        category: RecordCategory::Goals,
        unit: Unit::Goals,
        read: |s| s.derived.power_play,
    },
    CareerRecord {
        id: "career-shg",
        title: "Most Career Short-Handed Goals",
        description: "Most goals scored while short-handed across all seasons",
        category: RecordCategory::Goals,
        unit: Unit::Goals,
        read: |s| s.derived.short_handed,
    },
    CareerRecord {
        id: "career-gwg",
        title: "Most Career Game-Winning Goals",
        description: "Most game-winning goals across all seasons",
        category: RecordCategory::Performance,
        unit: Unit::Goals,
        read: |s| s.derived.game_winning,
    },
];

/// Computes every career record. Ties are keyed by player.
pub fn all_time_records(results: &[GameResult], players: &[Player]) -> Vec<Record> {
    let roster = Roster::new(players);
    let derived = breakdown(results);

    let mut leaders: Vec<Leader<PlayerId, RecordHolder>> =
        CAREER_RECORDS.iter().map(|_| Leader::highest()).collect();

    for player in players {
        let sample = CareerSample {
            totals: player.career(),
            derived: derived.get(&player.id).copied().unwrap_or_default(),
        };

        for (def, leader) in CAREER_RECORDS.iter().zip(leaders.iter_mut()) {
            leader.offer((def.read)(&sample), player.id, || RecordHolder::Career {
                player_id: player.id,
                player_name: roster.name_of(player.id),
            });
        }
    }

    debug!(players = players.len(), "computed career records");

    CAREER_RECORDS
        .iter()
        .zip(leaders)
        .map(|(def, leader)| Record {
            id: def.id,
            title: def.title,
            description: def.description,
            value: def.unit.count(leader.best().unwrap_or(0)),
            category: def.category,
            scope: RecordScope::Career,
            holders: leader.into_holders(),
        })
        .collect()
}
