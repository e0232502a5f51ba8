//! High score leaderboards
//!
//! One top-10 table per game, keyed by the game's slug, persisted as JSON
//! in the user data directory.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::games::GameKind;

/// Maximum number of high scores to keep per game
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    /// Wave / level reached
    pub wave: u32,
    /// Unix timestamp in seconds when achieved
    pub timestamp: u64,
}

/// One game's leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoreTable {
    pub entries: Vec<ScoreEntry>,
}

impl ScoreTable {
    /// Check if a score qualifies for the table. Zero never does.
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Insert a score if it qualifies. Returns the 1-indexed rank achieved.
    pub fn add_score(&mut self, score: u32, wave: u32, timestamp: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let entry = ScoreEntry {
            score,
            wave,
            timestamp,
        };
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

/// All leaderboards, one per game slug
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub tables: BTreeMap<String, ScoreTable>,
}

impl HighScores {
    const FILE_NAME: &'static str = "highscores.json";

    fn path() -> PathBuf {
        crate::data_dir().join(Self::FILE_NAME)
    }

    /// Best persisted score for a game, zero when none recorded
    pub fn best(&self, kind: GameKind) -> u32 {
        self.tables
            .get(kind.slug())
            .and_then(|t| t.top_score())
            .unwrap_or(0)
    }

    /// Record a finished run. Returns the rank achieved, if any.
    pub fn record(&mut self, kind: GameKind, score: u32, wave: u32) -> Option<usize> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.tables
            .entry(kind.slug().to_string())
            .or_default()
            .add_score(score, wave, timestamp)
    }

    /// Load from disk; missing or corrupt files fall back to empty tables
    pub fn load() -> Self {
        match fs::read_to_string(Self::path()) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(scores) => {
                    log::info!("Loaded high scores from {:?}", Self::path());
                    scores
                }
                Err(e) => {
                    log::warn!("High score file unreadable ({}), starting fresh", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No high scores found, starting fresh");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> io::Result<()> {
        let path = Self::path();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        log::info!("High scores saved to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_never_qualifies() {
        let table = ScoreTable::default();
        assert!(!table.qualifies(0));
        assert!(table.qualifies(1));
    }

    #[test]
    fn entries_stay_sorted_and_capped() {
        let mut table = ScoreTable::default();
        for s in [500, 100, 900, 300, 700, 200, 800, 400, 600, 1000, 50, 950] {
            table.add_score(s, 1, 0);
        }
        assert_eq!(table.entries.len(), MAX_HIGH_SCORES);
        for pair in table.entries.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(table.top_score(), Some(1000));
        // 50 fell off the bottom
        assert!(table.entries.iter().all(|e| e.score != 50));
    }

    #[test]
    fn rank_is_one_indexed() {
        let mut table = ScoreTable::default();
        assert_eq!(table.add_score(100, 1, 0), Some(1));
        assert_eq!(table.add_score(200, 2, 0), Some(1));
        assert_eq!(table.add_score(150, 1, 0), Some(2));
    }

    #[test]
    fn full_table_rejects_low_scores() {
        let mut table = ScoreTable::default();
        for s in 1..=10 {
            table.add_score(s * 100, 1, 0);
        }
        assert!(!table.qualifies(100));
        assert_eq!(table.add_score(100, 1, 0), None);
        assert!(table.qualifies(101));
    }

    #[test]
    fn best_defaults_to_zero() {
        let scores = HighScores::default();
        assert_eq!(scores.best(GameKind::Sentinel), 0);
    }

    #[test]
    fn record_keeps_tables_separate() {
        let mut scores = HighScores::default();
        scores.record(GameKind::Sentinel, 500, 3);
        scores.record(GameKind::IceBreaker, 2000, 2);
        assert_eq!(scores.best(GameKind::Sentinel), 500);
        assert_eq!(scores.best(GameKind::IceBreaker), 2000);
        assert_eq!(scores.best(GameKind::TruthFilter), 0);
    }
}
