//! Record engine tests.

use super::{
    Record, RecordHolder, RecordScope, all_time_records, compute_records, game_records,
    records_for_scope, season_records,
};
use crate::model::{GameResult, Goal, GoalType, Player, PlayerId, Position, Score, SeasonStats};

/// Helper to build a team goal.
fn goal(scorer: PlayerId, minute: u32, second: u32) -> Goal {
    Goal {
        scorer: Some(scorer),
        minute,
        second,
        kind: GoalType::Even,
        assists: Vec::new(),
    }
}

fn assisted(scorer: PlayerId, minute: u32, assists: &[PlayerId]) -> Goal {
    Goal {
        assists: assists.to_vec(),
        ..goal(scorer, minute, 0)
    }
}

fn typed(scorer: PlayerId, minute: u32, kind: GoalType) -> Goal {
    Goal {
        kind,
        ..goal(scorer, minute, 0)
    }
}

fn against() -> Goal {
    Goal {
        scorer: None,
        minute: 10,
        second: 0,
        kind: GoalType::Even,
        assists: Vec::new(),
    }
}

/// Builds a game from (period, goal) pairs plus an opponent score in period 1.
fn game(date: &str, season: &str, team: Vec<(u8, Goal)>, opponent_goals: usize) -> GameResult {
    let mut score = Score::default();
    for (period, g) in team {
        match period {
            1 => score.period1.team.push(g),
            2 => score.period2.team.push(g),
            _ => score.period3.team.push(g),
        }
    }
    score.period1.opponent = (0..opponent_goals).map(|_| against()).collect();

    GameResult {
        opponent: "Ice Wolves".to_string(),
        date: date.to_string(),
        season: season.to_string(),
        score,
    }
}

fn line(season: &str, games_played: u32, goals: u32, assists: u32) -> SeasonStats {
    SeasonStats {
        season: season.to_string(),
        games_played,
        goals,
        assists,
        pim: 0,
        points: goals + assists,
    }
}

fn player(id: PlayerId, name: &str, seasons: Vec<SeasonStats>) -> Player {
    Player {
        id,
        name: name.to_string(),
        number: Some(id),
        position: Position::Forward,
        seasons,
    }
}

fn find<'a>(records: &'a [Record], id: &str) -> &'a Record {
    records
        .iter()
        .find(|r| r.id == id)
        .unwrap_or_else(|| panic!("missing record {id}"))
}

fn holder_ids(record: &Record) -> Vec<PlayerId> {
    record.holders.iter().map(|h| h.player_id()).collect()
}

#[cfg(test)]
mod empty_input_tests {
    use super::*;

    #[test]
    fn test_empty_inputs_have_no_holders() {
        let records = compute_records(&[], &[]);

        assert!(!records.is_empty());
        for record in &records {
            assert!(record.holders.is_empty(), "{} has holders", record.id);
        }
    }

    #[test]
    fn test_empty_most_goals_in_a_game() {
        let records = game_records(&[], &[]);
        let most_goals = find(&records, "most-goals-game");

        assert_eq!(most_goals.title, "Most Goals in a Game");
        assert_eq!(most_goals.value, "0 goals");
        assert!(most_goals.holders.is_empty());
    }

    #[test]
    fn test_empty_timed_records_read_no_data() {
        let records = game_records(&[], &[]);

        assert_eq!(find(&records, "quickest-goal").value, "No goals");
        assert_eq!(find(&records, "quickest-hat-trick").value, "No hat tricks");
    }

    #[test]
    fn test_players_without_stats_hold_nothing() {
        let players = vec![player(1, "Sam", vec![]), player(2, "Alex", vec![])];
        let records = all_time_records(&[], &players);

        for record in &records {
            assert!(record.holders.is_empty(), "{} has holders", record.id);
        }
        assert_eq!(find(&records, "career-games").value, "0 games");
    }

    #[test]
    fn test_game_without_scorers_yields_no_holders() {
        let mut result = game("2024-10-05", "24/25", vec![], 2);
        result.score.period2.team.push(Goal {
            scorer: None,
            ..goal(0, 5, 0)
        });

        let records = game_records(&[result], &[]);
        assert!(find(&records, "most-goals-game").holders.is_empty());
        assert!(find(&records, "quickest-goal").holders.is_empty());
    }
}

#[cfg(test)]
mod game_record_tests {
    use super::*;

    #[test]
    fn test_most_goals_ties_across_games() {
        let results = vec![
            game(
                "2024-10-05",
                "24/25",
                vec![(1, goal(1, 2, 0)), (2, goal(1, 3, 0)), (3, goal(2, 4, 0))],
                0,
            ),
            game(
                "2024-10-12",
                "24/25",
                vec![(1, goal(2, 2, 0)), (3, goal(2, 9, 0))],
                1,
            ),
        ];
        let players = vec![player(1, "Sam", vec![]), player(2, "Alex", vec![])];

        let records = game_records(&results, &players);
        let most_goals = find(&records, "most-goals-game");

        assert_eq!(most_goals.value, "2 goals");
        assert_eq!(holder_ids(most_goals), vec![1, 2]);
        match &most_goals.holders[1] {
            RecordHolder::Game { game, .. } => {
                assert_eq!(game.opponent, "Ice Wolves");
                assert_eq!(game.date, "Oct 12, 2024");
                assert_eq!(game.result, "W 2-1");
            }
            other => panic!("unexpected holder {other:?}"),
        }
    }

    #[test]
    fn test_strictly_greater_replaces_holders() {
        let results = vec![
            game("2024-10-05", "24/25", vec![(1, goal(1, 2, 0))], 0),
            game(
                "2024-10-12",
                "24/25",
                vec![(1, goal(2, 2, 0)), (1, goal(2, 5, 0))],
                0,
            ),
        ];

        let records = game_records(&results, &[]);
        assert_eq!(holder_ids(find(&records, "most-goals-game")), vec![2]);
    }

    #[test]
    fn test_same_player_same_date_recorded_once() {
        let first = game("2024-10-05", "24/25", vec![(1, goal(1, 2, 0))], 0);
        let second = first.clone();

        let records = game_records(&[first, second], &[]);
        assert_eq!(find(&records, "most-goals-game").holders.len(), 1);
    }

    #[test]
    fn test_assists_and_points() {
        let results = vec![game(
            "2024-10-05",
            "24/25",
            vec![
                (1, assisted(1, 2, &[2, 3])),
                (2, assisted(1, 4, &[2])),
                (3, assisted(3, 6, &[2])),
            ],
            0,
        )];
        let players = vec![
            player(1, "Sam", vec![]),
            player(2, "Alex", vec![]),
            player(3, "Jo", vec![]),
        ];

        let records = game_records(&results, &players);

        let assists = find(&records, "most-assists-game");
        assert_eq!(assists.value, "3 assists");
        assert_eq!(holder_ids(assists), vec![2]);

        let points = find(&records, "most-points-game");
        assert_eq!(points.value, "3 points");
        assert_eq!(holder_ids(points), vec![2]);
    }

    #[test]
    fn test_quickest_goal_uses_absolute_clock() {
        let results = vec![
            // 2nd period 0:30 is 20:30 on the clock.
            game("2024-10-05", "24/25", vec![(2, goal(1, 0, 30))], 0),
            game("2024-10-12", "24/25", vec![(1, goal(2, 1, 10))], 0),
        ];

        let records = game_records(&results, &[]);
        let quickest = find(&records, "quickest-goal");

        assert_eq!(quickest.value, "1:10");
        assert_eq!(holder_ids(quickest), vec![2]);
    }

    #[test]
    fn test_quickest_goal_ties_accumulate() {
        let results = vec![
            game("2024-10-05", "24/25", vec![(1, goal(1, 0, 40))], 0),
            game("2024-10-12", "24/25", vec![(1, goal(2, 0, 40))], 0),
        ];

        let records = game_records(&results, &[]);
        assert_eq!(holder_ids(find(&records, "quickest-goal")), vec![1, 2]);
    }

    #[test]
    fn test_quickest_hat_trick_prefers_earlier_third_goal() {
        // Player 1: third goal at 20:25 (1225s). Player 2: third goal at 20:00 (1200s).
        let results = vec![game(
            "2024-10-05",
            "24/25",
            vec![
                (1, goal(1, 1, 0)),
                (1, goal(2, 2, 0)),
                (1, goal(1, 3, 0)),
                (1, goal(2, 4, 0)),
                (2, goal(2, 0, 0)),
                (2, goal(1, 0, 25)),
            ],
            0,
        )];
        let players = vec![player(1, "Sam", vec![]), player(2, "Alex", vec![])];

        let records = game_records(&results, &players);
        let hat_trick = find(&records, "quickest-hat-trick");

        assert_eq!(hat_trick.value, "20:00");
        assert_eq!(holder_ids(hat_trick), vec![2]);
        assert_eq!(hat_trick.holders[0].player_name(), "Alex");
    }

    #[test]
    fn test_two_goals_is_not_a_hat_trick() {
        let results = vec![game(
            "2024-10-05",
            "24/25",
            vec![(1, goal(1, 1, 0)), (1, goal(1, 2, 0))],
            0,
        )];

        let records = game_records(&results, &[]);
        let hat_trick = find(&records, "quickest-hat-trick");
        assert_eq!(hat_trick.value, "No hat tricks");
        assert!(hat_trick.holders.is_empty());
    }

    #[test]
    fn test_unknown_scorer_uses_placeholder_name() {
        let results = vec![game("2024-10-05", "24/25", vec![(1, goal(42, 1, 0))], 0)];

        let records = game_records(&results, &[]);
        let most_goals = find(&records, "most-goals-game");
        assert_eq!(most_goals.holders[0].player_name(), "Player #42");
    }

    #[test]
    fn test_game_holders_are_game_scoped() {
        let results = vec![game("2024-10-05", "24/25", vec![(1, goal(1, 1, 0))], 0)];

        for record in game_records(&results, &[]) {
            assert_eq!(record.scope, RecordScope::Game);
            for holder in &record.holders {
                assert_eq!(holder.scope(), RecordScope::Game);
            }
        }
    }
}

#[cfg(test)]
mod season_record_tests {
    use super::*;

    #[test]
    fn test_season_goals_from_stored_lines() {
        let players = vec![
            player(1, "Sam", vec![line("24/25", 10, 15, 2), line("23/24", 12, 25, 4)]),
            player(2, "Alex", vec![line("24/25", 10, 25, 9)]),
        ];

        let records = season_records(&[], &players);
        let goals = find(&records, "most-goals-season");

        assert_eq!(goals.value, "25 goals");
        assert_eq!(goals.holders.len(), 2);
        match (&goals.holders[0], &goals.holders[1]) {
            (
                RecordHolder::Season {
                    player_id: 1,
                    season: first,
                    ..
                },
                RecordHolder::Season {
                    player_id: 2,
                    season: second,
                    ..
                },
            ) => {
                assert_eq!(first, "23/24");
                assert_eq!(second, "24/25");
            }
            other => panic!("unexpected holders {other:?}"),
        }

        let points = find(&records, "most-points-season");
        assert_eq!(points.value, "34 points");
        assert_eq!(holder_ids(points), vec![2]);
    }

    #[test]
    fn test_derived_counts_stay_in_their_season() {
        let results = vec![
            game(
                "2024-10-05",
                "24/25",
                vec![
                    (1, typed(1, 1, GoalType::Powerplay)),
                    (1, typed(1, 2, GoalType::Powerplay)),
                    (2, typed(2, 3, GoalType::Shorthanded)),
                ],
                1,
            ),
            game(
                "2023-10-05",
                "23/24",
                vec![
                    (1, typed(2, 1, GoalType::Powerplay)),
                    (1, typed(2, 2, GoalType::Powerplay)),
                    (1, typed(2, 3, GoalType::Powerplay)),
                ],
                0,
            ),
        ];
        let players = vec![
            player(1, "Sam", vec![line("24/25", 1, 2, 0)]),
            player(2, "Alex", vec![line("24/25", 1, 1, 0), line("23/24", 1, 3, 0)]),
        ];

        let records = season_records(&results, &players);

        let ppg = find(&records, "most-ppg-season");
        assert_eq!(ppg.value, "3 goals");
        assert_eq!(holder_ids(ppg), vec![2]);

        let hat_tricks = find(&records, "most-hat-tricks-season");
        assert_eq!(hat_tricks.value, "1 hat trick");
        assert_eq!(holder_ids(hat_tricks), vec![2]);

        let shg = find(&records, "most-shg-season");
        assert_eq!(holder_ids(shg), vec![2]);

        // 24/25: opponent scored once, so Sam's second goal won it.
        // 23/24: shutout, Alex's first goal won it.
        let gwg = find(&records, "most-gwg-season");
        assert_eq!(gwg.value, "1 goal");
        assert_eq!(holder_ids(gwg), vec![1, 2]);
    }

    #[test]
    fn test_season_holders_keyed_by_player_and_season() {
        let players = vec![player(
            1,
            "Sam",
            vec![line("24/25", 10, 5, 0), line("23/24", 10, 5, 0)],
        )];

        let records = season_records(&[], &players);
        assert_eq!(find(&records, "most-goals-season").holders.len(), 2);
    }
}

#[cfg(test)]
mod all_time_record_tests {
    use super::*;

    #[test]
    fn test_career_goals_sum_across_seasons() {
        let players = vec![
            player(1, "Sam", vec![line("24/25", 10, 15, 0), line("23/24", 12, 25, 0)]),
            player(2, "Alex", vec![line("24/25", 10, 30, 0)]),
        ];

        let records = all_time_records(&[], &players);
        let goals = find(&records, "career-goals");

        assert_eq!(goals.value, "40 goals");
        assert_eq!(holder_ids(goals), vec![1]);
        assert!(matches!(goals.holders[0], RecordHolder::Career { .. }));

        let games = find(&records, "career-games");
        assert_eq!(games.value, "22 games");
    }

    #[test]
    fn test_career_game_winning_goal() {
        // Opponent scores 2; the team's third goal on the clock wins it.
        let results = vec![game(
            "2024-10-05",
            "24/25",
            vec![(1, goal(1, 1, 0)), (2, goal(2, 1, 0)), (3, goal(3, 1, 0))],
            2,
        )];
        let players = vec![
            player(1, "Sam", vec![]),
            player(2, "Alex", vec![]),
            player(3, "Jo", vec![]),
        ];

        let records = all_time_records(&results, &players);
        let gwg = find(&records, "career-gwg");

        assert_eq!(gwg.value, "1 goal");
        assert_eq!(holder_ids(gwg), vec![3]);
    }

    #[test]
    fn test_career_ties_in_roster_order() {
        let players = vec![
            player(5, "Kim", vec![line("24/25", 8, 4, 4)]),
            player(2, "Alex", vec![line("24/25", 8, 4, 4)]),
        ];

        let records = all_time_records(&[], &players);
        assert_eq!(holder_ids(find(&records, "career-points")), vec![5, 2]);
    }
}

#[cfg(test)]
mod engine_tests {
    use super::*;

    fn sample() -> (Vec<GameResult>, Vec<Player>) {
        let results = vec![
            game(
                "2024-10-05",
                "24/25",
                vec![
                    (1, assisted(1, 2, &[2])),
                    (2, typed(1, 4, GoalType::Powerplay)),
                    (3, assisted(2, 7, &[1])),
                ],
                1,
            ),
            game("2023-11-04", "23/24", vec![(1, goal(2, 0, 50))], 3),
        ];
        let players = vec![
            player(1, "Sam", vec![line("24/25", 1, 2, 1)]),
            player(2, "Alex", vec![line("24/25", 1, 1, 1), line("23/24", 1, 1, 0)]),
        ];
        (results, players)
    }

    #[test]
    fn test_compute_records_order_by_scope() {
        let (results, players) = sample();
        let records = compute_records(&results, &players);

        let scopes: Vec<_> = records.iter().map(|r| r.scope).collect();
        let first_season = scopes.iter().position(|s| *s == RecordScope::Season).unwrap();
        let first_career = scopes.iter().position(|s| *s == RecordScope::Career).unwrap();

        assert!(scopes[..first_season].iter().all(|s| *s == RecordScope::Game));
        assert!(scopes[first_season..first_career].iter().all(|s| *s == RecordScope::Season));
        assert!(scopes[first_career..].iter().all(|s| *s == RecordScope::Career));
    }

    #[test]
    fn test_records_for_scope_matches_compute_records() {
        let (results, players) = sample();
        let all = compute_records(&results, &players);

        let mut by_scope = records_for_scope(RecordScope::Game, &results, &players);
        by_scope.extend(records_for_scope(RecordScope::Season, &results, &players));
        by_scope.extend(records_for_scope(RecordScope::Career, &results, &players));

        assert_eq!(all, by_scope);
    }

    #[test]
    fn test_output_is_deterministic() {
        let (results, players) = sample();

        let first = serde_json::to_string(&compute_records(&results, &players)).unwrap();
        let second = serde_json::to_string(&compute_records(&results, &players)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_record_ids_are_unique() {
        let records = compute_records(&[], &[]);
        let mut ids: Vec<_> = records.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), records.len());
    }
}

#[cfg(test)]
mod robustness_tests {
    use super::*;

    #[test]
    fn test_out_of_range_clock_does_not_panic() {
        let results = vec![game(
            "2024-10-05",
            "24/25",
            vec![(3, goal(1, u32::MAX, u32::MAX)), (1, goal(2, 3, 0))],
            0,
        )];
        let players = vec![player(1, "Sam", vec![]), player(2, "Alex", vec![])];

        let records = compute_records(&results, &players);

        let quickest = find(&records, "quickest-goal");
        assert_eq!(quickest.value, "3:00");
        assert_eq!(holder_ids(quickest), vec![2]);
        assert_eq!(holder_ids(find(&records, "career-gwg")), vec![2]);
    }

    #[test]
    fn test_huge_season_totals_saturate() {
        let players = vec![
            player(
                1,
                "Sam",
                vec![
                    line("24/25", 4_000_000_000, 4_000_000_000, 0),
                    line("23/24", 4_000_000_000, 4_000_000_000, 0),
                ],
            ),
            player(2, "Alex", vec![line("24/25", 10, 10, 0)]),
        ];

        let records = compute_records(&[], &players);

        let goals = find(&records, "career-goals");
        assert_eq!(goals.value, format!("{} goals", u32::MAX));
        assert_eq!(holder_ids(goals), vec![1]);
        assert_eq!(find(&records, "career-games").value, format!("{} games", u32::MAX));
        assert_eq!(find(&records, "most-goals-season").value, "4000000000 goals");
    }
}
