//! Engine module - session lifecycle, timers, and score keeping
//!
//! `GameEngine` is the view-model the presentation layer talks to. It owns at
//! most one [`GameSession`] and at most one seconds ticker, and it is the only
//! place that creates or destroys either. The discipline for both is
//! cancel-then-create: `start` drops the previous session (and with it any
//! armed settle timer) and the previous ticker before building new ones, so a
//! stale continuation can never mutate a superseded game.
//!
//! Inbound calls are the three intents (`start`, `quit`, `click`) plus
//! `advance`, which the event loop invokes with wall-clock elapsed time.
//! Outbound, every mutating call returns the [`GameEvent`]s it produced; the
//! caller routes them to the audio sink and to view transitions.
//!
//! Persistence goes through the [`ScoreStore`] seam. Best scores are loaded
//! once at construction and written back only when a single-player win beats
//! the stored record for its tier; multiplayer results are never persisted
//! (scores are not comparable across player counts).

use std::time::{SystemTime, UNIX_EPOCH};

use tui_pairs_core::{BestScores, ConfigError, GameSession, GameSnapshot, GameStats, SimpleRng};
use tui_pairs_types::{Difficulty, GameEvent, SettleConfig, SECOND_MS};

pub use tui_pairs_core as core;
pub use tui_pairs_types as types;

/// Persistence collaborator for best scores.
///
/// Implementations degrade gracefully: `load` answers with defaults when the
/// backing store is unavailable, and `save` swallows failures - a local
/// high-score feature is not safety-critical.
pub trait ScoreStore {
    fn load(&mut self) -> BestScores;
    fn save(&mut self, stats: &GameStats);
}

/// Store that remembers nothing. Useful for tests and score-free sessions.
#[derive(Debug, Default)]
pub struct NullStore;

impl ScoreStore for NullStore {
    fn load(&mut self) -> BestScores {
        BestScores::default()
    }

    fn save(&mut self, _stats: &GameStats) {}
}

/// The engine's single ticking source: accumulates wall-clock milliseconds
/// and credits whole seconds to the session.
#[derive(Debug, Clone, Copy, Default)]
struct SecondsTicker {
    carry_ms: u32,
}

/// Terminal view state of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub stats: GameStats,
    pub new_best: bool,
}

/// Owns the game state machine and its collaborators.
pub struct GameEngine {
    rng: SimpleRng,
    settle_config: SettleConfig,
    session: Option<GameSession>,
    ticker: Option<SecondsTicker>,
    /// Monotonic session counter (increments on every start).
    episode: u32,
    store: Box<dyn ScoreStore>,
    best: BestScores,
    outcome: Option<GameOutcome>,
}

impl GameEngine {
    /// Create an engine backed by `store`, seeding deck shuffles from `seed`.
    pub fn new(mut store: Box<dyn ScoreStore>, seed: u32) -> Self {
        let best = store.load();
        Self {
            rng: SimpleRng::new(seed),
            settle_config: SettleConfig::default(),
            session: None,
            ticker: None,
            episode: 0,
            store,
            best,
            outcome: None,
        }
    }

    /// Override the settle delays for sessions started after this call.
    pub fn with_settle_config(mut self, settle_config: SettleConfig) -> Self {
        self.settle_config = settle_config;
        self
    }

    /// Start a fresh game, discarding any session in progress.
    ///
    /// Any armed settle timer dies with the old session, and the old ticker is
    /// cancelled before the new one exists - at most one ticking source is
    /// ever live.
    pub fn start(&mut self, difficulty: Difficulty, player_count: usize) -> Result<(), ConfigError> {
        self.ticker = None;
        self.session = None;
        self.outcome = None;

        let session = GameSession::new(difficulty, player_count, self.settle_config, &mut self.rng)?;
        self.session = Some(session);
        self.ticker = Some(SecondsTicker::default());
        self.episode = self.episode.wrapping_add(1);
        Ok(())
    }

    /// Abandon the current session. Cancels the ticker and any pending settle.
    pub fn quit(&mut self) {
        self.ticker = None;
        self.session = None;
        self.outcome = None;
    }

    /// Forward a click intent for board position `position`.
    pub fn click(&mut self, position: usize) -> Vec<GameEvent> {
        let Some(session) = &mut self.session else {
            return Vec::new();
        };
        session.flip(position);
        session.take_events()
    }

    /// Advance engine time by `elapsed_ms` of wall-clock time.
    ///
    /// Credits elapsed seconds through the ticker, runs the settle timer, and
    /// finalizes the win (stats snapshot, best-score comparison, persistence)
    /// the moment the last pair settles.
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<GameEvent> {
        let Some(session) = &mut self.session else {
            return Vec::new();
        };

        if let Some(ticker) = &mut self.ticker {
            if session.active() {
                ticker.carry_ms += elapsed_ms;
                while ticker.carry_ms >= SECOND_MS {
                    ticker.carry_ms -= SECOND_MS;
                    session.add_second();
                }
            }
        }

        session.tick(elapsed_ms);
        let events = session.take_events();
        if events.contains(&GameEvent::Won) {
            self.finalize_win();
        }
        events
    }

    fn finalize_win(&mut self) {
        // The win stops the clock permanently.
        self.ticker = None;

        let Some(session) = &self.session else {
            return;
        };
        let Some(stats) = session.final_stats(unix_now()) else {
            return;
        };

        let single_player = session.players().len() == 1;
        let new_best = single_player && stats.beats(self.best.get(stats.difficulty));
        if new_best {
            self.best.set(stats);
            self.store.save(&stats);
        }
        self.outcome = Some(GameOutcome { stats, new_best });
    }

    /// The session in progress (or frozen after a win), if any.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// View-state snapshot of the current session.
    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.session.as_ref().map(GameSession::snapshot)
    }

    /// Refill `out` from the current session; returns false with no session.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) -> bool {
        match &self.session {
            Some(session) => {
                session.snapshot_into(out);
                true
            }
            None => false,
        }
    }

    /// Final stats and new-best flag once the current session is won.
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn best_scores(&self) -> &BestScores {
        &self.best
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    /// True while a session exists and accepts input.
    pub fn in_game(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.active())
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
