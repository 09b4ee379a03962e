//! Terminal presentation module.
//!
//! - [`fb`]: framebuffer of styled character cells
//! - [`renderer`]: raw-mode/alternate-screen terminal output
//! - [`views`]: pure snapshot-to-framebuffer rendering (menu, game, game-over)
//! - [`bell`]: audio cue sink with a presentation-owned mute flag

pub mod bell;
pub mod fb;
pub mod renderer;
pub mod views;

pub use tui_pairs_core as core;
pub use tui_pairs_types as types;

pub use bell::TerminalBell;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use views::{format_time, GameView, Viewport};
