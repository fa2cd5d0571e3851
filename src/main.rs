use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use tracing::{info, warn};

use puck_records::{
    args::Args,
    data::{Fixtures, fixture_paths, load_fixture_files, load_fixtures},
    logging::{get_log_dir, init_logging_or_warn},
    records::{compute_records, records_for_scope},
    report::{TextOptions, render_json, render_summary, render_text},
    stats::{
        SeasonFilter, TeamRecord, filter_players, filter_results, leaders, player_lines,
        seasons,
    },
};

const SUMMARY_LEADERS: usize = 5;

fn main() -> Result<()> {
    let args = Args::parse();
    let log_dir = args.log_dir.clone().unwrap_or_else(get_log_dir);
    let _guard = init_logging_or_warn(&log_dir);

    run(&args)
}

fn load(args: &Args) -> Result<Fixtures> {
    if args.results.is_none() && args.players.is_none() {
        return load_fixtures(&args.data);
    }
    let (results_path, players_path) =
        fixture_paths(&args.data, args.results.as_deref(), args.players.as_deref());
    load_fixture_files(&results_path, &players_path)
}

fn run(args: &Args) -> Result<()> {
    let fixtures = load(args)?;

    if args.list_seasons {
        for season in seasons(&fixtures.results, &fixtures.players) {
            println!("{season}");
        }
        return Ok(());
    }

    let results = filter_results(&fixtures.results, &args.season);
    let players = filter_players(&fixtures.players, &args.season);
    if let SeasonFilter::Season(id) = &args.season
        && results.is_empty()
    {
        warn!(season = %id, "no games found for season");
        eprintln!("no games found for season {id}");
    }
    info!(season = %args.season, games = results.len(), "computing records");

    let records = match args.scope.scope() {
        Some(scope) => records_for_scope(scope, &results, &players),
        None => compute_records(&results, &players),
    };

    if args.json {
        println!("{}", render_json(&records)?);
        return Ok(());
    }

    if args.summary {
        let team = TeamRecord::from_results(&results);
        let lines = player_lines(&fixtures.players, &args.season);
        let top = leaders(&lines, args.leaders.stat(), SUMMARY_LEADERS);
        println!("{}", render_summary(&args.season.to_string(), &team, &top));
    }

    let options = TextOptions {
        color: !args.no_color && std::io::stdout().is_terminal(),
        quips: args.quips,
    };
    print!("{}", render_text(&records, options));

    Ok(())
}
