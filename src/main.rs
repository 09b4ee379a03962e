//! Terminal pairs runner (default binary).
//!
//! Owns the view routing (home menu, board, game-over) and the event loop:
//! poll input with a timeout until the next tick, advance the engine by the
//! elapsed frame, route engine events to the bell, redraw.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_pairs::core::GameSnapshot;
use tui_pairs::engine::GameEngine;
use tui_pairs::input::{
    map_game_key, map_menu_key, map_over_key, should_quit, GameAction, GridCursor, MenuAction,
    OverAction,
};
use tui_pairs::store::JsonScoreStore;
use tui_pairs::term::{FrameBuffer, GameView, TerminalBell, TerminalRenderer, Viewport};
use tui_pairs::types::{
    validate_configs, Difficulty, GameEvent, DIFFICULTIES, MAX_PLAYERS, TICK_MS,
};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Menu,
    Game,
    GameOver,
}

/// Home-menu selection state, kept across games so "play again" and restart
/// reuse the last settings.
struct MenuState {
    selected: usize,
    players: usize,
}

impl MenuState {
    fn difficulty(&self) -> Difficulty {
        DIFFICULTIES[self.selected]
    }
}

fn main() -> Result<()> {
    // Mistakes in the difficulty tables are fatal before any terminal setup.
    if let Err(difficulty) = validate_configs() {
        return Err(anyhow!(
            "invalid built-in configuration for {:?} tier",
            difficulty
        ));
    }

    let store = JsonScoreStore::at_default_path();
    let mut engine = GameEngine::new(Box::new(store), clock_seed());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, engine: &mut GameEngine) -> Result<()> {
    let views = GameView::default();
    let mut bell = TerminalBell::default();
    let mut fb = FrameBuffer::new(80, 24);
    let mut snap = GameSnapshot::default();

    let mut view = View::Menu;
    let mut menu = MenuState {
        selected: 0,
        players: 1,
    };
    let mut cursor = GridCursor::new();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        match view {
            View::Menu => views.render_menu_into(
                &mut fb,
                viewport,
                menu.selected,
                menu.players,
                engine.best_scores(),
                bell.enabled(),
            ),
            View::Game => {
                if engine.snapshot_into(&mut snap) {
                    views.render_game_into(
                        &mut fb,
                        viewport,
                        &snap,
                        cursor.row,
                        cursor.col,
                        bell.enabled(),
                    );
                }
            }
            View::GameOver => {
                if engine.snapshot_into(&mut snap) {
                    if let Some(outcome) = engine.outcome() {
                        views.render_over_into(
                            &mut fb,
                            viewport,
                            &snap,
                            &outcome.stats,
                            outcome.new_best,
                        );
                    }
                }
            }
        }
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    match view {
                        View::Menu => {
                            if let Some(action) = map_menu_key(key) {
                                handle_menu_action(action, &mut menu, engine, &mut view, &mut cursor)?;
                            }
                        }
                        View::Game => {
                            if let Some(action) = map_game_key(key) {
                                handle_game_action(
                                    action,
                                    &menu,
                                    engine,
                                    &mut view,
                                    &mut cursor,
                                    &mut bell,
                                )?;
                            }
                        }
                        View::GameOver => {
                            if let Some(action) = map_over_key(key) {
                                match action {
                                    OverAction::PlayAgain => {
                                        engine.start(menu.difficulty(), menu.players)?;
                                        cursor = GridCursor::new();
                                        view = View::Game;
                                    }
                                    OverAction::Home => {
                                        engine.quit();
                                        view = View::Menu;
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            for game_event in engine.advance(TICK_MS) {
                bell.handle(game_event);
                if game_event == GameEvent::Won {
                    view = View::GameOver;
                }
            }
        }
    }
}

fn handle_menu_action(
    action: MenuAction,
    menu: &mut MenuState,
    engine: &mut GameEngine,
    view: &mut View,
    cursor: &mut GridCursor,
) -> Result<()> {
    match action {
        MenuAction::PrevDifficulty => {
            menu.selected = menu.selected.saturating_sub(1);
        }
        MenuAction::NextDifficulty => {
            menu.selected = (menu.selected + 1).min(DIFFICULTIES.len() - 1);
        }
        MenuAction::FewerPlayers => {
            menu.players = menu.players.saturating_sub(1).max(1);
        }
        MenuAction::MorePlayers => {
            menu.players = (menu.players + 1).min(MAX_PLAYERS);
        }
        MenuAction::Start => {
            engine.start(menu.difficulty(), menu.players)?;
            *cursor = GridCursor::new();
            *view = View::Game;
        }
    }
    Ok(())
}

fn handle_game_action(
    action: GameAction,
    menu: &MenuState,
    engine: &mut GameEngine,
    view: &mut View,
    cursor: &mut GridCursor,
    bell: &mut TerminalBell,
) -> Result<()> {
    let config = menu.difficulty().config();
    match action {
        GameAction::CursorUp => cursor.up(),
        GameAction::CursorDown => cursor.down(config.rows),
        GameAction::CursorLeft => cursor.left(),
        GameAction::CursorRight => cursor.right(config.cols),
        GameAction::Flip => {
            for game_event in engine.click(cursor.position(&config)) {
                bell.handle(game_event);
            }
        }
        GameAction::Restart => {
            engine.start(menu.difficulty(), menu.players)?;
            *cursor = GridCursor::new();
        }
        GameAction::ToggleSound => bell.toggle(),
        GameAction::Leave => {
            engine.quit();
            *view = View::Menu;
        }
    }
    Ok(())
}
