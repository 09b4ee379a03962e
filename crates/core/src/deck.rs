//! Deck module - card generation and shuffling
//!
//! A deck is `2 * pairs` cards: every pair id appears on exactly two cards,
//! distinguished by their half (`a`/`b`). Symbols are sampled from the fixed
//! pool without replacement, then the whole sequence is Fisher-Yates shuffled
//! into its board order.

use crate::rng::SimpleRng;
use crate::ConfigError;
use tui_pairs_types::SYMBOL_POOL;

/// Which of a pair's two cards this is.
///
/// Pair id plus half forms the unique instance id (`"3-a"` / `"3-b"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairHalf {
    A,
    B,
}

impl PairHalf {
    pub fn as_str(&self) -> &'static str {
        match self {
            PairHalf::A => "a",
            PairHalf::B => "b",
        }
    }
}

/// A single card on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    /// Identity shared by exactly two cards.
    pub pair_id: u8,
    /// Instance discriminator within the pair.
    pub half: PairHalf,
    /// Display symbol (redundant with pair id).
    pub symbol: &'static str,
    /// Face-up awaiting resolution.
    pub revealed: bool,
    /// Locked in as part of a found pair. Never reverts.
    pub matched: bool,
}

impl Card {
    /// Unique instance id in `"<pair>-<half>"` form.
    pub fn uid(&self) -> String {
        format!("{}-{}", self.pair_id, self.half.as_str())
    }
}

/// An ordered, shuffled sequence of cards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Generate a shuffled deck of `pairs` pairs.
    ///
    /// Fails (rather than truncating) when the symbol pool cannot cover the
    /// requested pair count.
    pub fn generate(pairs: u8, rng: &mut SimpleRng) -> Result<Self, ConfigError> {
        if pairs as usize > SYMBOL_POOL.len() {
            return Err(ConfigError::SymbolPoolExhausted {
                pairs,
                pool: SYMBOL_POOL.len(),
            });
        }

        let symbol_picks = rng.sample_indices(SYMBOL_POOL.len(), pairs as usize);
        let mut cards = Vec::with_capacity(pairs as usize * 2);
        for (pair_id, &symbol_idx) in symbol_picks.iter().enumerate() {
            let symbol = SYMBOL_POOL[symbol_idx];
            for half in [PairHalf::A, PairHalf::B] {
                cards.push(Card {
                    pair_id: pair_id as u8,
                    half,
                    symbol,
                    revealed: false,
                    matched: false,
                });
            }
        }
        rng.shuffle(&mut cards);

        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// True once every card has been locked in.
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }

    pub(crate) fn reveal(&mut self, position: usize) {
        if let Some(card) = self.cards.get_mut(position) {
            card.revealed = true;
        }
    }

    pub(crate) fn hide(&mut self, position: usize) {
        if let Some(card) = self.cards.get_mut(position) {
            card.revealed = false;
        }
    }

    /// Lock a card in as matched. The revealed flag is cleared; matched cards
    /// render distinctly regardless of it.
    pub(crate) fn lock_matched(&mut self, position: usize) {
        if let Some(card) = self.cards.get_mut(position) {
            card.matched = true;
            card.revealed = false;
        }
    }

    #[cfg(test)]
    pub(crate) fn card_mut(&mut self, position: usize) -> &mut Card {
        &mut self.cards[position]
    }
}
