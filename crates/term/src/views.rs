//! Views: map engine view-state into terminal framebuffers.
//!
//! These functions are pure (no I/O) so they can be unit-tested by rendering
//! into a [`FrameBuffer`] and inspecting the text. Three screens mirror the
//! game's view routing: home menu, the board, and the game-over panel.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use tui_pairs_core::{BestScores, GameSnapshot, GameStats};
use tui_pairs_types::{Difficulty, PlayerColor, DIFFICULTIES, MAX_PLAYERS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const TITLE: &str = "P A I R S";

const ACCENT: Rgb = Rgb::new(0xFF, 0x99, 0x33);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const FAINT: Rgb = Rgb::new(130, 130, 140);
const BG: Rgb = Rgb::new(12, 12, 16);
const CARD_BACK: Rgb = Rgb::new(52, 52, 72);
const CARD_FACE: Rgb = Rgb::new(235, 228, 210);
const CARD_FACE_INK: Rgb = Rgb::new(40, 30, 20);
const CARD_MATCHED: Rgb = Rgb::new(24, 56, 28);
const CARD_MATCHED_INK: Rgb = Rgb::new(120, 200, 130);
const BEST_GOLD: Rgb = Rgb::new(255, 210, 80);

/// Renders the three screens of the game.
pub struct GameView {
    /// Card width in terminal columns.
    card_w: u16,
    /// Card height in terminal rows.
    card_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 5x3 cards read well at typical glyph aspect ratios.
        Self {
            card_w: 5,
            card_h: 3,
        }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self { card_w, card_h }
    }

    // ---- home menu ----

    /// Render the home menu: tier selection, player count, stored bests.
    pub fn render_menu_into(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        selected: usize,
        player_count: usize,
        best: &BestScores,
        sound_on: bool,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::plain(TEXT, BG));

        let x0 = viewport.width.saturating_sub(46) / 2;
        let mut y = viewport.height.saturating_sub(14) / 2;

        fb.put_str(x0, y, TITLE, CellStyle::bold(ACCENT, BG));
        fb.put_str(
            x0,
            y + 1,
            "a memory matching game",
            CellStyle::plain(FAINT, BG),
        );
        y += 3;

        for (idx, difficulty) in DIFFICULTIES.iter().enumerate() {
            let config = difficulty.config();
            let marker = if idx == selected { "> " } else { "  " };
            let line = format!(
                "{}{:<8} {}x{}  {:>2} pairs   best: {}",
                marker,
                config.label,
                config.rows,
                config.cols,
                config.pairs,
                best_summary(best, *difficulty),
            );
            let style = if idx == selected {
                CellStyle::bold(ACCENT, BG)
            } else {
                CellStyle::plain(TEXT, BG)
            };
            fb.put_str(x0, y, &line, style);
            y += 1;
        }
        y += 1;

        fb.put_str(
            x0,
            y,
            &format!("  Players: < {} >  (1-{})", player_count, MAX_PLAYERS),
            CellStyle::plain(TEXT, BG),
        );
        y += 1;
        fb.put_str(
            x0,
            y,
            &format!("  Sound: {}", if sound_on { "on" } else { "off" }),
            CellStyle::plain(FAINT, BG),
        );
        y += 2;

        fb.put_str(
            x0,
            y,
            "up/down tier - left/right players - enter start - q quit",
            CellStyle::plain(FAINT, BG),
        );
    }

    // ---- board ----

    /// Render the in-game screen for `snap`, with the selection cursor at
    /// `(cursor_row, cursor_col)`.
    pub fn render_game_into(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        snap: &GameSnapshot,
        cursor_row: u8,
        cursor_col: u8,
        sound_on: bool,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::plain(TEXT, BG));

        // Header: title, tier, clock, move counter.
        let header = format!(
            "{}   {}   Time {}   Moves {}{}",
            TITLE,
            snap.label,
            format_time(snap.elapsed_secs),
            snap.moves,
            if sound_on { "" } else { "   [muted]" },
        );
        fb.put_str(1, 0, &header, CellStyle::bold(ACCENT, BG));

        // Card grid.
        let grid_w = snap.cols as u16 * (self.card_w + 1);
        let grid_x = viewport.width.saturating_sub(grid_w + 16) / 2;
        let grid_y = 2;
        for (position, card) in snap.cards.iter().enumerate() {
            let row = (position / snap.cols as usize) as u16;
            let col = (position % snap.cols as usize) as u16;
            let x = grid_x + col * (self.card_w + 1);
            let y = grid_y + row * (self.card_h + 1);
            let is_cursor = row == cursor_row as u16 && col == cursor_col as u16;
            self.draw_card(fb, x, y, card.symbol, card.revealed, card.matched, is_cursor);
        }

        // Scoreboard to the right of the grid.
        let panel_x = grid_x + grid_w + 3;
        fb.put_str(panel_x, grid_y, "SCORES", CellStyle::plain(FAINT, BG));
        for (idx, player) in snap.players.iter().enumerate() {
            let marker = if player.is_current { "> " } else { "  " };
            let line = format!("{}{:<9} {:>2}", marker, player.name, player.score);
            let style = if player.is_current {
                CellStyle::bold(to_rgb(player.color), BG)
            } else {
                CellStyle::plain(to_rgb(player.color), BG)
            };
            fb.put_str(panel_x, grid_y + 1 + idx as u16, &line, style);
        }

        // Footer help.
        let footer_y = viewport.height.saturating_sub(1);
        fb.put_str(
            1,
            footer_y,
            "arrows move - enter flip - r restart - m sound - esc menu - q quit",
            CellStyle::plain(FAINT, BG),
        );
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        symbol: &str,
        revealed: bool,
        matched: bool,
        is_cursor: bool,
    ) {
        // Matched cards render distinctly regardless of the revealed flag.
        let (fill, style) = if matched {
            (' ', CellStyle::plain(CARD_MATCHED_INK, CARD_MATCHED))
        } else if revealed {
            (' ', CellStyle::plain(CARD_FACE_INK, CARD_FACE))
        } else {
            ('░', CellStyle::plain(FAINT, CARD_BACK))
        };
        fb.fill_rect(x, y, self.card_w, self.card_h, fill, style);

        if revealed || matched {
            let cx = x + self.card_w / 2;
            let cy = y + self.card_h / 2;
            if let Some(ch) = symbol.chars().next() {
                fb.put_char(
                    cx,
                    cy,
                    ch,
                    CellStyle {
                        bold: true,
                        ..style
                    },
                );
            }
        }

        if is_cursor {
            let edge = CellStyle::bold(ACCENT, BG);
            for dy in 0..self.card_h {
                fb.put_char(x.wrapping_sub(1), y + dy, '▌', edge);
                fb.put_char(x + self.card_w, y + dy, '▐', edge);
            }
        }
    }

    // ---- game over ----

    /// Render the game-over panel over a cleared screen.
    pub fn render_over_into(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        snap: &GameSnapshot,
        stats: &GameStats,
        new_best: bool,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::plain(TEXT, BG));

        let x0 = viewport.width.saturating_sub(40) / 2;
        let mut y = viewport.height.saturating_sub(12) / 2;

        let headline = match winner_line(snap) {
            Some(line) => line,
            None => "You won!".to_string(),
        };
        fb.put_str(x0, y, &headline, CellStyle::bold(ACCENT, BG));
        y += 2;

        fb.put_str(
            x0,
            y,
            &format!(
                "{} - {} moves in {}",
                stats.difficulty.config().label,
                stats.moves,
                format_time(stats.time_secs)
            ),
            CellStyle::plain(TEXT, BG),
        );
        y += 1;

        if new_best {
            fb.put_str(x0, y, "NEW BEST!", CellStyle::bold(BEST_GOLD, BG));
            y += 1;
        }
        y += 1;

        if snap.players.len() > 1 {
            for player in &snap.players {
                fb.put_str(
                    x0,
                    y,
                    &format!("{:<9} {:>2} pairs", player.name, player.score),
                    CellStyle::plain(to_rgb(player.color), BG),
                );
                y += 1;
            }
            y += 1;
        }

        fb.put_str(
            x0,
            y,
            "enter play again - esc menu - q quit",
            CellStyle::plain(FAINT, BG),
        );
    }

    /// Convenience helper that allocates a fresh framebuffer.
    pub fn render_game(
        &self,
        viewport: Viewport,
        snap: &GameSnapshot,
        cursor_row: u8,
        cursor_col: u8,
        sound_on: bool,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_game_into(&mut fb, viewport, snap, cursor_row, cursor_col, sound_on);
        fb
    }
}

/// `m:ss` clock format.
pub fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

fn best_summary(best: &BestScores, difficulty: Difficulty) -> String {
    match best.get(difficulty) {
        Some(stats) => format!("{} moves {}", stats.moves, format_time(stats.time_secs)),
        None => "-".to_string(),
    }
}

/// Multiplayer headline: winner by score, or a draw. `None` single-player.
fn winner_line(snap: &GameSnapshot) -> Option<String> {
    if snap.players.len() < 2 {
        return None;
    }
    let top = snap.players.iter().map(|p| p.score).max().unwrap_or(0);
    let leaders: Vec<&str> = snap
        .players
        .iter()
        .filter(|p| p.score == top)
        .map(|p| p.name)
        .collect();
    if leaders.len() == 1 {
        Some(format!("{} wins!", leaders[0]))
    } else {
        Some("It's a draw!".to_string())
    }
}

fn to_rgb(color: PlayerColor) -> Rgb {
    Rgb::new(color.r, color.g, color.b)
}
