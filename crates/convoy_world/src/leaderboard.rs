//! Bounded high-score table persisted as JSON.
//!
//! The file holds a single object keyed by [`LEADERBOARD_KEY`]. Entries are
//! kept score-descending and capped at [`MAX_ENTRIES`]; a tie keeps the
//! older entry ahead of the newer one.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use convoy_core::{final_score, run_id, Resources};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const LEADERBOARD_KEY: &str = "convoy_leaderboard";
pub const MAX_ENTRIES: usize = 10;
pub const MAX_NAME_CHARS: usize = 20;
pub const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub score: i64,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    #[serde(rename = "convoy_leaderboard", default)]
    pub entries: Vec<LeaderboardEntry>,
}

/// Trims whitespace and keeps at most [`MAX_NAME_CHARS`] characters.
/// Blank names become [`ANONYMOUS`].
pub fn sanitize_name(name: &str) -> String {
    let trimmed: String = name.trim().chars().take(MAX_NAME_CHARS).collect();
    let trimmed = trimmed.trim_end();
    if trimmed.is_empty() {
        ANONYMOUS.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn new_entry(
    name: &str,
    resources: &Resources,
    date: NaiveDate,
    rng: &mut impl Rng,
) -> LeaderboardEntry {
    LeaderboardEntry {
        id: run_id(rng),
        name: sanitize_name(name),
        score: final_score(resources),
        date: date.format("%Y-%m-%d").to_string(),
    }
}

impl Leaderboard {
    /// Whether `score` would make it onto the board.
    pub fn qualifies(&self, score: i64) -> bool {
        self.entries.len() < MAX_ENTRIES || self.entries.iter().any(|e| e.score < score)
    }

    /// Inserts `entry` in rank order and drops whatever falls off the end.
    /// Returns the 0-based rank, or `None` if it did not make the cut.
    pub fn record(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        let rank = self
            .entries
            .iter()
            .position(|e| e.score < entry.score)
            .unwrap_or(self.entries.len());
        if rank >= MAX_ENTRIES {
            return None;
        }
        self.entries.insert(rank, entry);
        self.entries.truncate(MAX_ENTRIES);
        Some(rank)
    }

    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }
}

pub fn leaderboard_path(dir: &Path) -> PathBuf {
    dir.join(format!("{LEADERBOARD_KEY}.json"))
}

/// Reads the board from `dir`. A missing file is an empty board.
pub fn load_leaderboard(dir: &Path) -> Result<Leaderboard> {
    let path = leaderboard_path(dir);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no leaderboard yet");
        return Ok(Leaderboard::default());
    }
    let text =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let mut board: Leaderboard =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    board.normalize();
    Ok(board)
}

pub fn save_leaderboard(dir: &Path, board: &Leaderboard) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = leaderboard_path(dir);
    let json = serde_json::to_string_pretty(board).context("serializing leaderboard")?;
    std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), entries = board.entries.len(), "leaderboard saved");
    Ok(())
}
