use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::records::RecordScope;
use crate::stats::{SeasonFilter, Stat};

#[derive(Parser, Debug)]
#[command(name = "hockey-records", about = "Team records from results and roster fixtures")]
pub struct Args {
    /// Directory holding results.json and players.json
    #[arg(long, default_value = "data")]
    pub data: PathBuf,

    /// Results file, overriding the one in --data
    #[arg(long)]
    pub results: Option<PathBuf>,

    /// Roster file, overriding the one in --data
    #[arg(long)]
    pub players: Option<PathBuf>,

    /// Season id such as 24/25, or "overall" for every season
    #[arg(long, default_value = "overall")]
    pub season: SeasonFilter,

    /// Which records to compute
    #[arg(long, value_enum, default_value_t = ScopeArg::All)]
    pub scope: ScopeArg,

    /// Print records as JSON
    #[arg(long)]
    pub json: bool,

    /// Add a random quip under each held record
    #[arg(long)]
    pub quips: bool,

    /// Print the team record and top scorers before the records
    #[arg(long)]
    pub summary: bool,

    /// Stat that ranks the --summary leaderboard
    #[arg(long, value_enum, default_value_t = LeaderStat::Points)]
    pub leaders: LeaderStat,

    /// List the seasons found in the fixtures and exit
    #[arg(long)]
    pub list_seasons: bool,

    /// Disable colored titles
    #[arg(long)]
    pub no_color: bool,

    /// Directory for log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeArg {
    All,
    Game,
    Season,
    Career,
}

impl ScopeArg {
    /// `None` means every scope.
    pub fn scope(self) -> Option<RecordScope> {
        match self {
            ScopeArg::All => None,
            ScopeArg::Game => Some(RecordScope::Game),
            ScopeArg::Season => Some(RecordScope::Season),
            ScopeArg::Career => Some(RecordScope::Career),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderStat {
    Goals,
    Assists,
    Points,
    #[value(alias = "pim")]
    PenaltyMinutes,
    #[value(alias = "gp")]
    GamesPlayed,
}

impl LeaderStat {
    pub fn stat(self) -> Stat {
        match self {
            LeaderStat::Goals => Stat::Goals,
            LeaderStat::Assists => Stat::Assists,
            LeaderStat::Points => Stat::Points,
            LeaderStat::PenaltyMinutes => Stat::PenaltyMinutes,
            LeaderStat::GamesPlayed => Stat::GamesPlayed,
        }
    }
}
