//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the complete rules of the pairs game with **zero
//! dependencies** on UI, clocks, or I/O:
//!
//! - **Deterministic**: the same seed produces the same deck layout
//! - **Testable**: time only advances through explicit `tick`/`add_second`
//!   calls, so every timing edge case is a plain unit test
//! - **Portable**: runs in any environment (terminal, headless, benches)
//!
//! # Module structure
//!
//! - [`deck`]: card generation, symbol sampling, and shuffling
//! - [`session`]: the flip/match/mismatch state machine, turns, win detection
//! - [`snapshot`]: read-only view state emitted to the presentation layer
//! - [`stats`]: win records and lexicographic best-score comparison
//! - [`rng`]: seedable LCG with Fisher-Yates shuffle and sampling
//!
//! # Example
//!
//! ```
//! use tui_pairs_core::{GameSession, SimpleRng};
//! use tui_pairs_types::{Difficulty, SettleConfig};
//!
//! let mut rng = SimpleRng::new(12345);
//! let mut session =
//!     GameSession::new(Difficulty::Easy, 1, SettleConfig::default(), &mut rng).unwrap();
//!
//! // Flip two cards, then let the settle delay elapse.
//! session.flip(0);
//! session.flip(1);
//! session.tick(1000);
//!
//! assert_eq!(session.moves(), 1);
//! ```

pub mod deck;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod stats;

pub use tui_pairs_types as types;

// Re-export commonly used types for convenience
pub use deck::{Card, Deck, PairHalf};
pub use rng::SimpleRng;
pub use session::{FlipPhase, GameSession, Player, SettleOutcome};
pub use snapshot::{CardView, GameSnapshot, PlayerView};
pub use stats::{BestScores, GameStats};

/// Configuration errors are fatal at startup or game start; the engine never
/// truncates a deck or clamps a player count to recover from one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid does not hold exactly two cards per pair.
    GridPairMismatch { rows: u8, cols: u8, pairs: u8 },
    /// More pairs requested than the symbol pool can cover.
    SymbolPoolExhausted { pairs: u8, pool: usize },
    /// Player count outside the roster.
    InvalidPlayerCount { requested: usize, max: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::GridPairMismatch { rows, cols, pairs } => write!(
                f,
                "grid {}x{} does not hold {} pairs ({} cells != {} cards)",
                rows,
                cols,
                pairs,
                *rows as usize * *cols as usize,
                *pairs as usize * 2
            ),
            ConfigError::SymbolPoolExhausted { pairs, pool } => write!(
                f,
                "{} pairs requested but the symbol pool only holds {}",
                pairs, pool
            ),
            ConfigError::InvalidPlayerCount { requested, max } => {
                write!(f, "player count {} outside 1..={}", requested, max)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
