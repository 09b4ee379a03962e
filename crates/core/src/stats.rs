//! Stats module - win records and best-score comparison
//!
//! A `GameStats` is the immutable snapshot taken the moment a session is won.
//! `BestScores` keeps one optional record per difficulty tier; ordering is
//! lexicographic on (moves, time) - fewer moves always wins, elapsed seconds
//! break ties.

use tui_pairs_types::Difficulty;

/// Immutable record of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStats {
    pub moves: u32,
    pub time_secs: u32,
    pub difficulty: Difficulty,
    /// Unix seconds at win time. Zero when the clock was unavailable.
    pub recorded_at: u64,
}

impl GameStats {
    /// True when this record beats `current` for its tier.
    ///
    /// A missing prior record always qualifies. Equal (moves, time) does NOT
    /// replace the existing record.
    pub fn beats(&self, current: Option<&GameStats>) -> bool {
        match current {
            None => true,
            Some(best) => {
                self.moves < best.moves
                    || (self.moves == best.moves && self.time_secs < best.time_secs)
            }
        }
    }
}

/// One optional best record per difficulty tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestScores {
    easy: Option<GameStats>,
    medium: Option<GameStats>,
    hard: Option<GameStats>,
}

impl BestScores {
    pub fn get(&self, difficulty: Difficulty) -> Option<&GameStats> {
        self.slot(difficulty).as_ref()
    }

    /// Overwrite the record for the stats' own tier.
    pub fn set(&mut self, stats: GameStats) {
        *self.slot_mut(stats.difficulty) = Some(stats);
    }

    fn slot(&self, difficulty: Difficulty) -> &Option<GameStats> {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    fn slot_mut(&mut self, difficulty: Difficulty) -> &mut Option<GameStats> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(moves: u32, time_secs: u32) -> GameStats {
        GameStats {
            moves,
            time_secs,
            difficulty: Difficulty::Easy,
            recorded_at: 0,
        }
    }

    #[test]
    fn first_record_always_qualifies() {
        assert!(stats(10, 30).beats(None));
    }

    #[test]
    fn fewer_moves_wins_outright() {
        let best = stats(10, 30);
        assert!(stats(9, 99).beats(Some(&best)));
        assert!(!stats(12, 20).beats(Some(&best)));
    }

    #[test]
    fn time_breaks_move_ties() {
        let best = stats(10, 30);
        assert!(stats(10, 29).beats(Some(&best)));
        assert!(!stats(10, 30).beats(Some(&best)));
        assert!(!stats(10, 31).beats(Some(&best)));
    }

    #[test]
    fn slots_are_independent_per_tier() {
        let mut bests = BestScores::default();
        bests.set(GameStats {
            moves: 12,
            time_secs: 40,
            difficulty: Difficulty::Medium,
            recorded_at: 1,
        });

        assert!(bests.get(Difficulty::Easy).is_none());
        assert!(bests.get(Difficulty::Hard).is_none());
        assert_eq!(bests.get(Difficulty::Medium).unwrap().moves, 12);
    }

    #[test]
    fn set_overwrites_prior_record() {
        let mut bests = BestScores::default();
        bests.set(stats(10, 30));
        bests.set(stats(9, 99));
        assert_eq!(bests.get(Difficulty::Easy).unwrap().moves, 9);
    }
}
