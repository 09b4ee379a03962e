//! Store module - JSON file persistence for best scores
//!
//! Implements the engine's [`ScoreStore`] seam on top of a single JSON file,
//! one record per difficulty tier with overwrite semantics. Failures never
//! reach gameplay: an unreadable or malformed file loads as "no records yet",
//! and write errors are swallowed.

pub mod records;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use records::BestScoresFile;
use tui_pairs_core::{BestScores, GameStats};
use tui_pairs_engine::ScoreStore;

/// Best-score store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under `$HOME/.tui-pairs/best_scores.json`, falling back to the
    /// working directory when no home directory is available.
    pub fn at_default_path() -> Self {
        let path = match std::env::var_os("HOME") {
            Some(home) => Path::new(&home).join(".tui-pairs").join("best_scores.json"),
            None => PathBuf::from("tui-pairs-best-scores.json"),
        };
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<BestScoresFile> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        let file = serde_json::from_str(&text)
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(file)
    }

    fn write_file(&self, file: &BestScoresFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }
        let text = serde_json::to_string_pretty(file)?;
        fs::write(&self.path, text).with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&mut self) -> BestScores {
        // Missing or corrupt file: play on with empty records.
        self.read_file()
            .map(BestScoresFile::into_scores)
            .unwrap_or_default()
    }

    fn save(&mut self, stats: &GameStats) {
        let mut file = self.read_file().unwrap_or_default();
        file.set(stats);
        // Save failures are swallowed; a high-score file is not worth
        // interrupting the game over.
        let _ = self.write_file(&file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_pairs_types::Difficulty;

    fn temp_store(name: &str) -> JsonScoreStore {
        let path = std::env::temp_dir().join(format!(
            "tui-pairs-test-{}-{}.json",
            std::process::id(),
            name
        ));
        let _ = fs::remove_file(&path);
        JsonScoreStore::new(path)
    }

    fn stats(difficulty: Difficulty, moves: u32, time_secs: u32) -> GameStats {
        GameStats {
            moves,
            time_secs,
            difficulty,
            recorded_at: 1_700_000_000,
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let mut store = temp_store("missing");
        let scores = store.load();
        assert!(scores.get(Difficulty::Easy).is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = temp_store("roundtrip");
        store.save(&stats(Difficulty::Easy, 10, 30));
        store.save(&stats(Difficulty::Hard, 22, 180));

        let scores = store.load();
        let easy = scores.get(Difficulty::Easy).unwrap();
        assert_eq!((easy.moves, easy.time_secs), (10, 30));
        let hard = scores.get(Difficulty::Hard).unwrap();
        assert_eq!((hard.moves, hard.time_secs), (22, 180));
        assert!(scores.get(Difficulty::Medium).is_none());

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn save_overwrites_the_tier_slot() {
        let mut store = temp_store("overwrite");
        store.save(&stats(Difficulty::Easy, 10, 30));
        store.save(&stats(Difficulty::Easy, 9, 99));

        let scores = store.load();
        assert_eq!(scores.get(Difficulty::Easy).unwrap().moves, 9);

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn corrupt_file_degrades_to_empty() {
        let store_path = {
            let store = temp_store("corrupt");
            fs::write(store.path(), "{ not json").unwrap();
            store.path().to_path_buf()
        };
        let mut store = JsonScoreStore::new(store_path.clone());
        assert!(store.load().get(Difficulty::Easy).is_none());

        // A save over a corrupt file starts fresh rather than failing.
        store.save(&stats(Difficulty::Medium, 15, 60));
        assert!(store.load().get(Difficulty::Medium).is_some());

        let _ = fs::remove_file(store_path);
    }

    #[test]
    fn save_into_unwritable_path_is_swallowed() {
        let mut store = JsonScoreStore::new("/dev/null/cannot/exist/scores.json");
        store.save(&stats(Difficulty::Easy, 1, 1));
        assert!(store.load().get(Difficulty::Easy).is_none());
    }
}
