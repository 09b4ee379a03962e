//! Session module - the flip/match/mismatch state machine
//!
//! `GameSession` owns everything a single game needs: the shuffled deck, the
//! pending-flip list, the settle timer, move and time counters, and the player
//! roster. All mutation goes through [`GameSession::flip`],
//! [`GameSession::tick`] and [`GameSession::add_second`]; there is no other
//! clock. Dropping the session drops any pending settle with it, which is the
//! whole cancellation story: a settle that no longer exists cannot fire.
//!
//! Flip resolution walks `Idle -> OnePending -> Resolving -> Idle`. Entering
//! `Resolving` counts one move (per attempt, not per match) and arms a settle
//! timer whose delay depends on the outcome; the outcome is applied only when
//! the timer expires via `tick`.

use arrayvec::ArrayVec;

use crate::deck::Deck;
use crate::rng::SimpleRng;
use crate::stats::GameStats;
use crate::ConfigError;
use tui_pairs_types::{
    Difficulty, DifficultyConfig, GameEvent, PlayerColor, SettleConfig, MAX_PLAYERS, PLAYER_ROSTER,
};

/// One participant, materialized from the roster at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// 0-based turn-order index.
    pub index: usize,
    pub name: &'static str,
    pub color: PlayerColor,
    /// Pairs found. Mutates only on a successful match.
    pub score: u32,
}

/// Where the flip state machine currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipPhase {
    /// No cards face-up awaiting resolution.
    Idle,
    /// One card face-up.
    OnePending,
    /// Two cards face-up, settle timer running.
    Resolving,
}

/// Judgment of a pending pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    Match,
    Mismatch,
}

/// An armed settle timer. Owned by the session; dropping the session cancels it.
#[derive(Debug, Clone, Copy)]
struct PendingSettle {
    outcome: SettleOutcome,
    positions: [usize; 2],
    remaining_ms: u32,
}

/// Aggregate state of one game, from start to win or abandonment.
#[derive(Debug, Clone)]
pub struct GameSession {
    difficulty: Difficulty,
    config: DifficultyConfig,
    deck: Deck,
    pending: ArrayVec<usize, 2>,
    settle: Option<PendingSettle>,
    settle_config: SettleConfig,
    moves: u32,
    elapsed_secs: u32,
    active: bool,
    won: bool,
    players: Vec<Player>,
    current_player: usize,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session with a freshly shuffled deck and N roster players.
    ///
    /// Configuration errors (bad player count, grid/pair mismatch, symbol
    /// pool exhausted) are fatal to game start, never silently adjusted.
    pub fn new(
        difficulty: Difficulty,
        player_count: usize,
        settle_config: SettleConfig,
        rng: &mut SimpleRng,
    ) -> Result<Self, ConfigError> {
        if player_count == 0 || player_count > MAX_PLAYERS {
            return Err(ConfigError::InvalidPlayerCount {
                requested: player_count,
                max: MAX_PLAYERS,
            });
        }

        let config = difficulty.config();
        let cells = config.rows as usize * config.cols as usize;
        if cells != config.card_count() {
            return Err(ConfigError::GridPairMismatch {
                rows: config.rows,
                cols: config.cols,
                pairs: config.pairs,
            });
        }

        let deck = Deck::generate(config.pairs, rng)?;

        let players = PLAYER_ROSTER
            .iter()
            .take(player_count)
            .enumerate()
            .map(|(index, slot)| Player {
                index,
                name: slot.name,
                color: slot.color,
                score: 0,
            })
            .collect();

        Ok(Self {
            difficulty,
            config,
            deck,
            pending: ArrayVec::new(),
            settle: None,
            settle_config,
            moves: 0,
            elapsed_secs: 0,
            active: true,
            won: false,
            players,
            current_player: 0,
            events: Vec::new(),
        })
    }

    /// Handle a click intent on board position `position`.
    ///
    /// Returns whether the flip was accepted. Rejected intents (inactive
    /// session, two flips already pending, card out of range, card already
    /// face-up or matched) are silent no-ops: no state change, no event.
    pub fn flip(&mut self, position: usize) -> bool {
        if !self.active || self.pending.is_full() {
            return false;
        }
        let Some(card) = self.deck.get(position) else {
            return false;
        };
        if card.revealed || card.matched {
            return false;
        }

        self.deck.reveal(position);
        self.pending.push(position);
        self.events.push(GameEvent::Flip);

        if self.pending.len() == 2 {
            // Entering Resolving: one move per attempt, counted up front.
            self.moves += 1;

            let first = self.pending[0];
            let second = self.pending[1];
            let is_match = {
                let a = self.deck.get(first).map(|c| c.pair_id);
                let b = self.deck.get(second).map(|c| c.pair_id);
                a.is_some() && a == b
            };
            let (outcome, delay_ms) = if is_match {
                (SettleOutcome::Match, self.settle_config.match_ms)
            } else {
                (SettleOutcome::Mismatch, self.settle_config.mismatch_ms)
            };
            self.settle = Some(PendingSettle {
                outcome,
                positions: [first, second],
                remaining_ms: delay_ms,
            });
        }

        true
    }

    /// Advance the settle timer by `elapsed_ms`, applying the outcome when it
    /// expires. Elapsed-time accounting is separate (see [`add_second`]).
    ///
    /// [`add_second`]: GameSession::add_second
    pub fn tick(&mut self, elapsed_ms: u32) {
        let fired = match &mut self.settle {
            Some(settle) => {
                settle.remaining_ms = settle.remaining_ms.saturating_sub(elapsed_ms);
                if settle.remaining_ms == 0 {
                    self.settle.take()
                } else {
                    None
                }
            }
            None => None,
        };
        if let Some(settle) = fired {
            self.resolve(settle);
        }
    }

    /// Credit one elapsed second. The caller gates this on its own ticking
    /// source; an inactive session refuses the credit regardless.
    pub fn add_second(&mut self) {
        if self.active {
            self.elapsed_secs += 1;
        }
    }

    fn resolve(&mut self, settle: PendingSettle) {
        let [first, second] = settle.positions;
        match settle.outcome {
            SettleOutcome::Match => {
                self.deck.lock_matched(first);
                self.deck.lock_matched(second);
                if let Some(player) = self.players.get_mut(self.current_player) {
                    player.score += 1;
                }
                self.events.push(GameEvent::Match);
                self.pending.clear();

                if self.deck.all_matched() {
                    // Won: freeze the session before any further input.
                    self.active = false;
                    self.won = true;
                    self.events.push(GameEvent::Won);
                }
            }
            SettleOutcome::Mismatch => {
                self.deck.hide(first);
                self.deck.hide(second);
                self.pending.clear();

                if self.players.len() > 1 {
                    self.current_player = (self.current_player + 1) % self.players.len();
                    self.events.push(GameEvent::TurnSwitch);
                }
            }
        }
    }

    /// Drain the events accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current state of the flip state machine.
    pub fn phase(&self) -> FlipPhase {
        if self.settle.is_some() {
            FlipPhase::Resolving
        } else if self.pending.is_empty() {
            FlipPhase::Idle
        } else {
            FlipPhase::OnePending
        }
    }

    /// Stats snapshot for a won session; `None` while play is ongoing.
    pub fn final_stats(&self, recorded_at: u64) -> Option<GameStats> {
        if !self.won {
            return None;
        }
        Some(GameStats {
            moves: self.moves,
            time_secs: self.elapsed_secs,
            difficulty: self.difficulty,
            recorded_at,
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> DifficultyConfig {
        self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_pairs_types::MISMATCH_SETTLE_MS;

    fn session(players: usize) -> GameSession {
        let mut rng = SimpleRng::new(12345);
        GameSession::new(Difficulty::Easy, players, SettleConfig::default(), &mut rng).unwrap()
    }

    /// Positions of the two cards sharing `pair_id`.
    fn pair_positions(session: &GameSession, pair_id: u8) -> (usize, usize) {
        let mut found = Vec::new();
        for (idx, card) in session.deck().cards().iter().enumerate() {
            if card.pair_id == pair_id {
                found.push(idx);
            }
        }
        assert_eq!(found.len(), 2);
        (found[0], found[1])
    }

    /// Positions of two cards with different pair ids.
    fn mismatched_positions(session: &GameSession) -> (usize, usize) {
        let (a, _) = pair_positions(session, 0);
        let (b, _) = pair_positions(session, 1);
        (a, b)
    }

    #[test]
    fn new_session_starts_idle_and_counting_from_zero() {
        let session = session(1);
        assert_eq!(session.phase(), FlipPhase::Idle);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.elapsed_secs(), 0);
        assert!(session.active());
        assert!(!session.won());
        assert_eq!(session.current_player(), 0);
        assert_eq!(session.players().len(), 1);
        assert_eq!(session.deck().len(), 16);
    }

    #[test]
    fn player_roster_is_materialized_in_order() {
        let session = session(3);
        let names: Vec<&str> = session.players().iter().map(|p| p.name).collect();
        assert_eq!(names, ["Player 1", "Player 2", "Player 3"]);
        assert!(session.players().iter().all(|p| p.score == 0));
    }

    #[test]
    fn too_many_players_is_a_config_error() {
        let mut rng = SimpleRng::new(1);
        let err = GameSession::new(Difficulty::Easy, 5, SettleConfig::default(), &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPlayerCount { requested: 5, max: 4 }
        ));
        let err = GameSession::new(Difficulty::Easy, 0, SettleConfig::default(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPlayerCount { .. }));
    }

    #[test]
    fn first_flip_enters_one_pending() {
        let mut session = session(1);
        assert!(session.flip(0));
        assert_eq!(session.phase(), FlipPhase::OnePending);
        assert!(session.deck().get(0).unwrap().revealed);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.take_events(), vec![GameEvent::Flip]);
    }

    #[test]
    fn second_flip_counts_a_move_and_arms_the_settle() {
        let mut session = session(1);
        let (a, b) = mismatched_positions(&session);
        session.flip(a);
        session.flip(b);
        assert_eq!(session.phase(), FlipPhase::Resolving);
        assert_eq!(session.moves(), 1);
    }

    #[test]
    fn reflipping_a_revealed_card_is_a_no_op() {
        let mut session = session(1);
        session.flip(0);
        session.take_events();

        assert!(!session.flip(0));
        assert_eq!(session.phase(), FlipPhase::OnePending);
        assert_eq!(session.moves(), 0);
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn third_flip_while_resolving_is_rejected() {
        let mut session = session(1);
        let (a, b) = mismatched_positions(&session);
        session.flip(a);
        session.flip(b);
        session.take_events();

        let (_, other) = pair_positions(&session, 2);
        assert!(!session.flip(other));
        assert_eq!(session.pending().len(), 2);
        assert_eq!(session.moves(), 1);
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn out_of_range_flip_is_rejected() {
        let mut session = session(1);
        assert!(!session.flip(999));
        assert_eq!(session.phase(), FlipPhase::Idle);
    }

    #[test]
    fn match_settles_after_the_match_delay() {
        let mut session = session(1);
        let (a, b) = pair_positions(&session, 0);
        session.flip(a);
        session.flip(b);
        session.take_events();

        // One tick short of the delay: still resolving.
        session.tick(499);
        assert_eq!(session.phase(), FlipPhase::Resolving);
        assert!(session.take_events().is_empty());

        session.tick(1);
        assert_eq!(session.phase(), FlipPhase::Idle);
        assert!(session.deck().get(a).unwrap().matched);
        assert!(session.deck().get(b).unwrap().matched);
        assert_eq!(session.players()[0].score, 1);
        assert_eq!(session.take_events(), vec![GameEvent::Match]);
    }

    #[test]
    fn match_keeps_the_current_player() {
        let mut session = session(2);
        let (a, b) = pair_positions(&session, 0);
        session.flip(a);
        session.flip(b);
        session.tick(500);
        assert_eq!(session.current_player(), 0);
        assert_eq!(session.players()[0].score, 1);
        assert_eq!(session.players()[1].score, 0);
    }

    #[test]
    fn mismatch_hides_both_and_waits_the_longer_delay() {
        let mut session = session(1);
        let (a, b) = mismatched_positions(&session);
        session.flip(a);
        session.flip(b);
        session.take_events();

        session.tick(999);
        assert_eq!(session.phase(), FlipPhase::Resolving);

        session.tick(1);
        assert_eq!(session.phase(), FlipPhase::Idle);
        assert!(!session.deck().get(a).unwrap().revealed);
        assert!(!session.deck().get(b).unwrap().revealed);
        // Single player: no turn switch event.
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn mismatch_rotates_the_turn_in_multiplayer() {
        let mut session = session(3);
        let (a, b) = mismatched_positions(&session);
        session.flip(a);
        session.flip(b);
        session.take_events();
        session.tick(MISMATCH_SETTLE_MS);

        assert_eq!(session.current_player(), 1);
        assert_eq!(session.take_events(), vec![GameEvent::TurnSwitch]);
    }

    #[test]
    fn turn_wraps_around_modulo_player_count() {
        let mut session = session(2);
        for _ in 0..2 {
            let (a, b) = mismatched_positions(&session);
            session.flip(a);
            session.flip(b);
            session.tick(MISMATCH_SETTLE_MS);
        }
        assert_eq!(session.current_player(), 0);
    }

    #[test]
    fn matched_cards_cannot_be_flipped_again() {
        let mut session = session(1);
        let (a, b) = pair_positions(&session, 0);
        session.flip(a);
        session.flip(b);
        session.tick(500);
        session.take_events();

        assert!(!session.flip(a));
        assert_eq!(session.moves(), 1);
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn matching_every_pair_wins_and_freezes_the_session() {
        let mut session = session(1);
        for pair_id in 0..8u8 {
            let (a, b) = pair_positions(&session, pair_id);
            session.flip(a);
            session.flip(b);
            session.tick(500);
        }

        assert!(session.won());
        assert!(!session.active());
        assert!(session.deck().all_matched());
        assert!(session.take_events().contains(&GameEvent::Won));

        // Frozen: further clicks and seconds are refused.
        assert!(!session.flip(0));
        session.add_second();
        assert_eq!(session.elapsed_secs(), 0);

        let stats = session.final_stats(7).unwrap();
        assert_eq!(stats.moves, 8);
        assert_eq!(stats.time_secs, 0);
        assert_eq!(stats.difficulty, Difficulty::Easy);
        assert_eq!(stats.recorded_at, 7);
    }

    #[test]
    fn final_stats_is_none_until_won() {
        let session = session(1);
        assert!(session.final_stats(0).is_none());
    }

    #[test]
    fn seconds_accumulate_only_while_active() {
        let mut session = session(1);
        session.add_second();
        session.add_second();
        assert_eq!(session.elapsed_secs(), 2);
    }

    #[test]
    fn tick_without_pending_settle_is_inert() {
        let mut session = session(1);
        session.tick(10_000);
        assert_eq!(session.phase(), FlipPhase::Idle);
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn oversettled_tick_fires_exactly_once() {
        let mut session = session(2);
        let (a, b) = mismatched_positions(&session);
        session.flip(a);
        session.flip(b);
        session.take_events();

        // A single huge tick covers the delay many times over.
        session.tick(60_000);
        assert_eq!(session.current_player(), 1);
        assert_eq!(session.take_events(), vec![GameEvent::TurnSwitch]);

        session.tick(60_000);
        assert_eq!(session.current_player(), 1);
        assert!(session.take_events().is_empty());
    }
}
