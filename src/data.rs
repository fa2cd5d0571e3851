use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::model::{GameResult, Player};

pub const RESULTS_FILE: &str = "results.json";
pub const PLAYERS_FILE: &str = "players.json";

/// Both fixture collections, as loaded from disk.
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub results: Vec<GameResult>,
    pub players: Vec<Player>,
}

pub fn load_results(path: &Path) -> Result<Vec<GameResult>> {
    let results: Vec<GameResult> = read_json(path)?;
    info!(path = %path.display(), count = results.len(), "loaded results");
    Ok(results)
}

pub fn load_players(path: &Path) -> Result<Vec<Player>> {
    let players: Vec<Player> = read_json(path)?;
    info!(path = %path.display(), count = players.len(), "loaded players");
    Ok(players)
}

/// Loads `results.json` and `players.json` from `dir`.
pub fn load_fixtures(dir: &Path) -> Result<Fixtures> {
    load_fixture_files(&dir.join(RESULTS_FILE), &dir.join(PLAYERS_FILE))
}

pub fn load_fixture_files(results: &Path, players: &Path) -> Result<Fixtures> {
    Ok(Fixtures {
        results: load_results(results)?,
        players: load_players(players)?,
    })
}

/// Resolves the fixture paths, letting explicit files override the directory.
pub fn fixture_paths(
    dir: &Path,
    results: Option<&Path>,
    players: Option<&Path>,
) -> (PathBuf, PathBuf) {
    (
        results.map_or_else(|| dir.join(RESULTS_FILE), Path::to_path_buf),
        players.map_or_else(|| dir.join(PLAYERS_FILE), Path::to_path_buf),
    )
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}
