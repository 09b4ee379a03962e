//! Shared types module - data structures and constants for the pairs game
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they are usable
//! from any context (core logic, terminal rendering, persistence).
//!
//! # Difficulty tiers
//!
//! | Tier | Grid | Pairs |
//! |--------|------|-------|
//! | Easy   | 4x4  | 8     |
//! | Medium | 5x4  | 10    |
//! | Hard   | 6x5  | 15    |
//!
//! Every tier satisfies `rows * cols == 2 * pairs`; `validate_configs()`
//! checks this (and the symbol-pool size) and is run at startup.
//!
//! # Timing constants
//!
//! Values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MATCH_SETTLE_MS`    | 500  | Pause before a matched pair locks in |
//! | `MISMATCH_SETTLE_MS` | 1000 | Pause before a mismatched pair hides again |
//! | `SECOND_MS`          | 1000 | One elapsed-time increment |
//! | `TICK_MS`            | 50   | Event-loop frame interval |
//!
//! The mismatch pause is deliberately longer than the match pause: the player
//! needs time to memorize a failed pair, while consecutive matches should feel
//! snappy. Both are carried in a [`SettleConfig`] value rather than read as
//! globals, so the delays stay tunable per session.

/// Pause between revealing a matching pair and locking it in (milliseconds).
pub const MATCH_SETTLE_MS: u32 = 500;

/// Pause between revealing a mismatched pair and hiding it again (milliseconds).
pub const MISMATCH_SETTLE_MS: u32 = 1000;

/// Milliseconds per elapsed-time increment.
pub const SECOND_MS: u32 = 1000;

/// Event-loop frame interval in milliseconds.
pub const TICK_MS: u32 = 50;

/// Maximum number of players a session can hold (roster size).
pub const MAX_PLAYERS: usize = 4;

/// Fixed pool of card face symbols.
///
/// Single-cell glyphs chosen to render one column wide in common terminals.
/// The pool must stay at least as large as the largest tier's pair count.
pub const SYMBOL_POOL: [&str; 16] = [
    "♠", "♥", "♦", "♣", "★", "☀", "☂", "♞", "☘", "⚓", "♪", "☾", "✿", "❄", "⚑", "⌘",
];

/// Game difficulty tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// All tiers in menu order.
pub const DIFFICULTIES: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

impl Difficulty {
    /// Parse a tier from its persisted key (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Lowercase key used for persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Grid and pair configuration for this tier.
    pub const fn config(&self) -> DifficultyConfig {
        match self {
            Difficulty::Easy => DifficultyConfig {
                rows: 4,
                cols: 4,
                pairs: 8,
                label: "Easy",
            },
            Difficulty::Medium => DifficultyConfig {
                rows: 5,
                cols: 4,
                pairs: 10,
                label: "Medium",
            },
            Difficulty::Hard => DifficultyConfig {
                rows: 6,
                cols: 5,
                pairs: 15,
                label: "Hard",
            },
        }
    }
}

/// Board layout for one difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyConfig {
    pub rows: u8,
    pub cols: u8,
    pub pairs: u8,
    /// Display label.
    pub label: &'static str,
}

impl DifficultyConfig {
    /// Total card count for this layout.
    pub const fn card_count(&self) -> usize {
        self.pairs as usize * 2
    }
}

/// Check every built-in tier against the layout and symbol-pool invariants.
///
/// Returns the first offending tier, if any. A failure here is a mistake in
/// the tables above; callers treat it as fatal at startup.
pub fn validate_configs() -> Result<(), Difficulty> {
    for difficulty in DIFFICULTIES {
        let config = difficulty.config();
        let cells = config.rows as usize * config.cols as usize;
        if cells != config.card_count() || config.pairs as usize > SYMBOL_POOL.len() {
            return Err(difficulty);
        }
    }
    Ok(())
}

/// 24-bit display color attached to a player slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PlayerColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One entry in the fixed player roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSlot {
    pub name: &'static str,
    pub color: PlayerColor,
}

/// Fixed roster: sessions materialize players from the first N slots.
pub const PLAYER_ROSTER: [PlayerSlot; MAX_PLAYERS] = [
    PlayerSlot {
        name: "Player 1",
        color: PlayerColor::new(0xFF, 0x99, 0x33), // saffron
    },
    PlayerSlot {
        name: "Player 2",
        color: PlayerColor::new(0x13, 0x88, 0x08), // green
    },
    PlayerSlot {
        name: "Player 3",
        color: PlayerColor::new(0x00, 0x00, 0x80), // navy
    },
    PlayerSlot {
        name: "Player 4",
        color: PlayerColor::new(0xE9, 0x1E, 0x63), // rose
    },
];

/// Settle-delay configuration for one session.
///
/// The two delays are independent knobs; the default values keep the UX
/// contract `match_ms < mismatch_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleConfig {
    /// Delay before a matched pair is locked in.
    pub match_ms: u32,
    /// Delay before a mismatched pair flips back over.
    pub mismatch_ms: u32,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            match_ms: MATCH_SETTLE_MS,
            mismatch_ms: MISMATCH_SETTLE_MS,
        }
    }
}

/// Discrete notifications emitted by the engine after a transition.
///
/// `Flip`, `Match` and `TurnSwitch` are audio cues; `Won` routes the
/// presentation layer to the game-over view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A card was turned face-up.
    Flip,
    /// A pending pair settled as a match.
    Match,
    /// A mismatch passed the turn to the next player.
    TurnSwitch,
    /// The final pair was matched; the session is over.
    Won,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Flip => "flip",
            GameEvent::Match => "match",
            GameEvent::TurnSwitch => "turnSwitch",
            GameEvent::Won => "won",
        }
    }
}
