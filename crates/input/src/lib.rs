//! Terminal input module (view-facing).
//!
//! Maps `crossterm` key events into per-view intents (menu, game, game-over)
//! and tracks the card-selection cursor. Intentionally independent of the
//! engine: the binary translates these intents into engine calls.

pub mod cursor;
pub mod map;

pub use tui_pairs_types as types;

pub use cursor::GridCursor;
pub use map::{map_game_key, map_menu_key, map_over_key, should_quit, GameAction, MenuAction, OverAction};
