//! Text and JSON output for computed records.

use std::fmt::Write;

use anyhow::Result;

use crate::quips::quip;
use crate::records::{Accent, Record, RecordHolder, RecordScope};
use crate::stats::{StatLine, TeamRecord};

#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    pub color: bool,
    pub quips: bool,
}

fn ansi(accent: Accent) -> &'static str {
    match accent {
        Accent::Red => "\x1b[31m",
        Accent::Blue => "\x1b[34m",
        Accent::Purple => "\x1b[35m",
        Accent::Amber => "\x1b[33m",
    }
}

const RESET: &str = "\x1b[0m";

fn scope_heading(scope: RecordScope) -> &'static str {
    match scope {
        RecordScope::Game => "Game Records",
        RecordScope::Season => "Season Records",
        RecordScope::Career => "Career Records",
    }
}

pub fn holder_line(holder: &RecordHolder) -> String {
    match holder {
        RecordHolder::Game {
            player_name, game, ..
        } => format!(
            "{} vs {}, {} ({})",
            player_name, game.opponent, game.date, game.result
        ),
        RecordHolder::Season {
            player_name,
            season,
            ..
        } => format!("{} ({})", player_name, season),
        RecordHolder::Career { player_name, .. } => player_name.clone(),
    }
}

/// Renders records grouped under a heading per scope.
pub fn render_text(records: &[Record], options: TextOptions) -> String {
    let mut out = String::new();
    let mut scope = None;

    for record in records {
        if scope != Some(record.scope) {
            if scope.is_some() {
                out.push('\n');
            }
            scope = Some(record.scope);
            let heading = scope_heading(record.scope);
            let _ = writeln!(out, "{heading}\n{}", "=".repeat(heading.len()));
        }

        let style = record.category.style();
        let title = if options.color {
            format!("{}{}{}", ansi(style.accent), record.title, RESET)
        } else {
            record.title.to_string()
        };

        let _ = writeln!(out, "{} {}  [{}]", style.icon, title, style.label);
        let _ = writeln!(out, "   {}", record.value);
        let _ = writeln!(out, "   {}", record.description);
        if record.holders.is_empty() {
            let _ = writeln!(out, "   - not yet set");
        }
        for holder in &record.holders {
            let _ = writeln!(out, "   - {}", holder_line(holder));
        }
        if options.quips && record.is_held() {
            let _ = writeln!(out, "   \"{}\"", quip(record.category));
        }
    }

    out
}

pub fn render_json(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Team record plus a short scoring leaderboard.
pub fn render_summary(season: &str, team: &TeamRecord, leaders: &[StatLine]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Season: {season}");
    let _ = writeln!(
        out,
        "Record: {} ({} GP, {} GF, {} GA, {:+} diff, {:.1}%)",
        team,
        team.games,
        team.goals_for,
        team.goals_against,
        team.goal_differential(),
        team.points_percentage()
    );

    if leaders.is_empty() {
        let _ = writeln!(out, "No player stats");
        return out;
    }

    let _ = writeln!(out, "Top scorers:");
    for (rank, line) in leaders.iter().enumerate() {
        let number = line
            .number
            .map(|n| format!("#{n}"))
            .unwrap_or_else(|| "--".to_string());
        let _ = writeln!(
            out,
            "  {}. {:<4} {:<20} {:>3} G {:>3} A {:>3} P",
            rank + 1,
            number,
            line.name,
            line.totals.goals,
            line.totals.assists,
            line.totals.points
        );
    }
    out
}
