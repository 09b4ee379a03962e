//! Records module - serde DTOs for the best-score file
//!
//! The on-disk shape mirrors the core types without depending on their
//! layout: one optional record per difficulty tier, each a
//! `{moves, time, difficulty, date}` tuple. Unknown or malformed entries are
//! dropped on load rather than failing the whole file.

use serde::{Deserialize, Serialize};

use tui_pairs_core::{BestScores, GameStats};
use tui_pairs_types::{Difficulty, DIFFICULTIES};

/// One persisted win record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScoreRecord {
    pub moves: u32,
    /// Elapsed seconds.
    pub time: u32,
    /// Tier key (`"easy"` / `"medium"` / `"hard"`).
    pub difficulty: String,
    /// Unix seconds at win time.
    pub date: u64,
}

impl BestScoreRecord {
    pub fn from_stats(stats: &GameStats) -> Self {
        Self {
            moves: stats.moves,
            time: stats.time_secs,
            difficulty: stats.difficulty.as_str().to_string(),
            date: stats.recorded_at,
        }
    }

    /// Back to core stats; `None` when the tier key is unrecognized.
    pub fn to_stats(&self) -> Option<GameStats> {
        Some(GameStats {
            moves: self.moves,
            time_secs: self.time,
            difficulty: Difficulty::from_str(&self.difficulty)?,
            recorded_at: self.date,
        })
    }
}

/// Top-level file shape: one slot per tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScoresFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easy: Option<BestScoreRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<BestScoreRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard: Option<BestScoreRecord>,
}

impl BestScoresFile {
    pub fn slot(&self, difficulty: Difficulty) -> &Option<BestScoreRecord> {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    pub fn slot_mut(&mut self, difficulty: Difficulty) -> &mut Option<BestScoreRecord> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Overwrite the slot for the record's own tier.
    pub fn set(&mut self, stats: &GameStats) {
        *self.slot_mut(stats.difficulty) = Some(BestScoreRecord::from_stats(stats));
    }

    /// Convert to core scores, dropping entries whose tier key is bad or
    /// stored under the wrong slot.
    pub fn into_scores(self) -> BestScores {
        let mut scores = BestScores::default();
        for difficulty in DIFFICULTIES {
            if let Some(record) = self.slot(difficulty) {
                if let Some(stats) = record.to_stats() {
                    if stats.difficulty == difficulty {
                        scores.set(stats);
                    }
                }
            }
        }
        scores
    }
}
