//! Snapshot module - read-only view state for the presentation layer
//!
//! Consumers render from a `GameSnapshot` taken after each transition; the
//! session itself stays presentation-agnostic. `snapshot_into` refills an
//! existing snapshot so per-frame callers can reuse the allocations.

use crate::session::GameSession;
use tui_pairs_types::{Difficulty, PlayerColor};

/// Per-card view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    pub symbol: &'static str,
    pub revealed: bool,
    pub matched: bool,
}

/// Per-player view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub name: &'static str,
    pub color: PlayerColor,
    pub score: u32,
    pub is_current: bool,
}

/// Full view state of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub difficulty: Difficulty,
    pub label: &'static str,
    pub rows: u8,
    pub cols: u8,
    pub cards: Vec<CardView>,
    pub moves: u32,
    pub elapsed_secs: u32,
    pub active: bool,
    pub won: bool,
    pub players: Vec<PlayerView>,
    pub current_player: usize,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            label: "",
            rows: 0,
            cols: 0,
            cards: Vec::new(),
            moves: 0,
            elapsed_secs: 0,
            active: false,
            won: false,
            players: Vec::new(),
            current_player: 0,
        }
    }
}

impl GameSession {
    /// Refill `out` with the current view state, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let config = self.config();
        out.difficulty = self.difficulty();
        out.label = config.label;
        out.rows = config.rows;
        out.cols = config.cols;

        out.cards.clear();
        out.cards.extend(self.deck().cards().iter().map(|card| CardView {
            symbol: card.symbol,
            revealed: card.revealed,
            matched: card.matched,
        }));

        out.moves = self.moves();
        out.elapsed_secs = self.elapsed_secs();
        out.active = self.active();
        out.won = self.won();

        out.players.clear();
        out.players
            .extend(self.players().iter().map(|player| PlayerView {
                name: player.name,
                color: player.color,
                score: player.score,
                is_current: player.index == self.current_player(),
            }));
        out.current_player = self.current_player();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
