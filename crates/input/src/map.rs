//! Key mapping from terminal events to view intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Intents available on the home menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    PrevDifficulty,
    NextDifficulty,
    FewerPlayers,
    MorePlayers,
    Start,
}

/// Intents available during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Flip the card under the cursor.
    Flip,
    /// Abandon the session and start over with the same settings.
    Restart,
    ToggleSound,
    /// Back to the home menu.
    Leave,
}

/// Intents available on the game-over view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverAction {
    PlayAgain,
    Home,
}

/// Map keyboard input on the home menu.
pub fn map_menu_key(key: KeyEvent) -> Option<MenuAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(MenuAction::PrevDifficulty),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(MenuAction::NextDifficulty),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(MenuAction::FewerPlayers),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(MenuAction::MorePlayers),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuAction::Start),
        _ => None,
    }
}

/// Map keyboard input during play.
pub fn map_game_key(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::CursorDown)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::CursorRight)
        }

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Flip),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::ToggleSound),
        KeyCode::Esc => Some(GameAction::Leave),

        _ => None,
    }
}

/// Map keyboard input on the game-over view.
pub fn map_over_key(key: KeyEvent) -> Option<OverAction> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(OverAction::PlayAgain),
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => Some(OverAction::Home),
        _ => None,
    }
}

/// Check if key should quit the whole application.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
