//! Single-game records.

use tracing::debug;

use crate::model::{GameResult, Player, PlayerId, Roster, format_clock};

use super::breakdown::{GameLine, game_lines};
use super::leader::Leader;
use super::types::{GameContext, Record, RecordCategory, RecordHolder, RecordScope, Unit};

type GameKey<'a> = (PlayerId, &'a str);

fn holder(roster: &Roster<'_>, player: PlayerId, result: &GameResult) -> RecordHolder {
    RecordHolder::Game {
        player_id: player,
        player_name: roster.name_of(player),
        game: GameContext::from(result),
    }
}

struct CountRecord {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: RecordCategory,
    unit: Unit,
    read: fn(&GameLine) -> u32,
}

const COUNT_RECORDS: [CountRecord; 3] = [
    CountRecord {
        id: "most-goals-game",
        title: "Most Goals in a Game",
        description: "Most goals scored by one player in a single game",
        category: RecordCategory::Goals,
        unit: Unit::Goals,
        read: |line| line.goals,
    },
    CountRecord {
        id: "most-assists-game",
        title: "Most Assists in a Game",
        description: "Most assists by one player in a single game",
        category: RecordCategory::Assists,
        unit: Unit::Assists,
        read: |line| line.assists,
    },
    CountRecord {
        id: "most-points-game",
        title: "Most Points in a Game",
        description: "Most goals plus assists by one player in a single game",
        category: RecordCategory::Points,
        unit: Unit::Points,
        read: GameLine::points,
    },
];

/// Computes every game-scoped record over `results`.
///
/// Results and the players within each game are visited in their given order,
/// which fixes the order of tied holders.
pub fn game_records(results: &[GameResult], players: &[Player]) -> Vec<Record> {
    let roster = Roster::new(players);
    let mut counts: Vec<Leader<GameKey<'_>, RecordHolder>> =
        COUNT_RECORDS.iter().map(|_| Leader::highest()).collect();
    let mut quickest_goal: Leader<GameKey<'_>, RecordHolder> = Leader::lowest();
    let mut quickest_hat_trick: Leader<GameKey<'_>, RecordHolder> = Leader::lowest();

    for result in results {
        for line in game_lines(result) {
            let key = (line.player, result.date.as_str());

            for (def, leader) in COUNT_RECORDS.iter().zip(counts.iter_mut()) {
                leader.offer((def.read)(&line), key, || holder(&roster, line.player, result));
            }
            if let Some(at) = line.first_goal() {
                quickest_goal.offer(at, key, || holder(&roster, line.player, result));
            }
            if let Some(at) = line.hat_trick_time() {
                quickest_hat_trick.offer(at, key, || holder(&roster, line.player, result));
            }
        }
    }

    let mut records: Vec<Record> = COUNT_RECORDS
        .iter()
        .zip(counts)
        .map(|(def, leader)| Record {
            id: def.id,
            title: def.title,
            description: def.description,
            value: def.unit.count(leader.best().unwrap_or(0)),
            category: def.category,
            scope: RecordScope::Game,
            holders: leader.into_holders(),
        })
        .collect();

    records.push(timed_record(
        "quickest-goal",
        "Quickest Goal",
        "Earliest goal from the opening faceoff",
        RecordCategory::Goals,
        Unit::Goals,
        quickest_goal,
    ));
    records.push(timed_record(
        "quickest-hat-trick",
        "Quickest Hat Trick",
        "Earliest third goal by one player in a game",
        RecordCategory::Performance,
        Unit::HatTricks,
        quickest_hat_trick,
    ));

    debug!(games = results.len(), "computed game records");
    records
}

fn timed_record(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: RecordCategory,
    unit: Unit,
    leader: Leader<GameKey<'_>, RecordHolder>,
) -> Record {
    Record {
        id,
        title,
        description,
        value: leader.best().map(format_clock).unwrap_or_else(|| unit.none()),
        category,
        scope: RecordScope::Game,
        holders: leader.into_holders(),
    }
}
