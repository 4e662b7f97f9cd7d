//! Draw pile and discard pile.
//!
//! The `DeckManager` owns both shared piles:
//! - Draw pile: face down, the front is the next card drawn
//! - Discard pile: face up, the back is the most recent discard
//!
//! Both piles are `im::Vector`s so cloning a game state for a snapshot is
//! cheap. The discard pile is never shuffled.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardCatalog};
use crate::core::error::{EngineError, EngineResult};
use crate::core::rng::ShuffleSource;

/// Owner of the draw and discard piles.
///
/// ## Usage
///
/// ```
/// use rummy_engine::cards::CardCatalog;
/// use rummy_engine::core::GameRng;
/// use rummy_engine::zones::DeckManager;
///
/// let catalog = CardCatalog::standard();
/// let mut piles = DeckManager::shuffled(&catalog, &mut GameRng::new(42));
///
/// let card = piles.draw_front().unwrap();
/// piles.discard(card);
///
/// assert_eq!(piles.draw_len(), 51);
/// assert_eq!(piles.top_discard(), Some(card));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckManager {
    draw_pile: Vector<Card>,
    discard_pile: Vector<Card>,
}

impl DeckManager {
    /// Create piles from explicit contents (front of `draw_pile` is drawn
    /// first, back of `discard_pile` is the top).
    #[must_use]
    pub fn new(draw_pile: impl IntoIterator<Item = Card>, discard_pile: impl IntoIterator<Item = Card>) -> Self {
        Self {
            draw_pile: draw_pile.into_iter().collect(),
            discard_pile: discard_pile.into_iter().collect(),
        }
    }

    /// A full draw pile holding a permutation of the catalog.
    #[must_use]
    pub fn shuffled<S: ShuffleSource + ?Sized>(catalog: &CardCatalog, source: &mut S) -> Self {
        let mut cards: Vec<Card> = catalog.cards().collect();
        source.shuffle_cards(&mut cards);
        Self {
            draw_pile: cards.into_iter().collect(),
            discard_pile: Vector::new(),
        }
    }

    // === Draw pile ===

    #[must_use]
    pub fn draw_pile(&self) -> &Vector<Card> {
        &self.draw_pile
    }

    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn is_draw_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    /// Pop the front of the draw pile.
    pub fn draw_front(&mut self) -> EngineResult<Card> {
        self.draw_pile.pop_front().ok_or(EngineError::EmptyPile)
    }

    // === Discard pile ===

    #[must_use]
    pub fn discard_pile(&self) -> &Vector<Card> {
        &self.discard_pile
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Most recently discarded card.
    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.discard_pile.back().copied()
    }

    /// Put a card on top of the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push_back(card);
    }

    /// Card at `index` (0 = bottom of the pile).
    pub fn discard_at(&self, index: usize) -> EngineResult<Card> {
        self.discard_pile
            .get(index)
            .copied()
            .ok_or_else(|| EngineError::discard_index(index, self.discard_pile.len()))
    }

    /// Cards from `index` to the top, without removing them.
    pub fn discard_tail(&self, index: usize) -> EngineResult<Vector<Card>> {
        self.check_discard_index(index)?;
        Ok(self.discard_pile.clone().slice(index..))
    }

    /// Remove and return the cards from `index` to the top.
    pub fn take_discard_tail(&mut self, index: usize) -> EngineResult<Vector<Card>> {
        self.check_discard_index(index)?;
        Ok(self.discard_pile.split_off(index))
    }

    fn check_discard_index(&self, index: usize) -> EngineResult<()> {
        if index < self.discard_pile.len() {
            Ok(())
        } else {
            Err(EngineError::discard_index(index, self.discard_pile.len()))
        }
    }

    /// Every card in either pile.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.draw_pile.iter().chain(self.discard_pile.iter()).copied()
    }
}
