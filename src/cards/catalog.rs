//! Card catalog: the fixed identity <-> coordinates mapping.
//!
//! The catalog is built once from the canonical order and then only read.
//! Lookups in both directions are O(1).

use rustc_hash::FxHashMap;

use super::card::{Card, Coordinates, DECK_SIZE};
use crate::core::error::EngineError;

/// Bidirectional mapping between the 52 card identities and their
/// (rank, suit) coordinates.
///
/// ## Example
///
/// ```
/// use rummy_engine::cards::{Card, CardCatalog, Coordinates};
///
/// let catalog = CardCatalog::standard();
/// let seven_of_clubs = catalog.card_at(Coordinates::new(7, 2)).unwrap();
///
/// assert_eq!(seven_of_clubs.code(), "7C");
/// assert_eq!(catalog.coordinates_of(seven_of_clubs), Coordinates::new(7, 2));
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    coordinates: Vec<Coordinates>,
    cards: FxHashMap<Coordinates, Card>,
}

impl CardCatalog {
    /// Build the standard 52-card catalog in canonical order.
    #[must_use]
    pub fn standard() -> Self {
        let mut coordinates = Vec::with_capacity(DECK_SIZE);
        let mut cards = FxHashMap::default();
        cards.reserve(DECK_SIZE);

        for card in (0..DECK_SIZE as u8).filter_map(Card::new) {
            let coords = card.coordinates();
            coordinates.push(coords);
            cards.insert(coords, card);
        }

        Self { coordinates, cards }
    }

    /// Coordinates of a card. Total: `Card` cannot hold an unknown identity.
    #[must_use]
    pub fn coordinates_of(&self, card: Card) -> Coordinates {
        self.coordinates[card.id() as usize]
    }

    /// Coordinates of a raw identity.
    pub fn lookup(&self, id: u8) -> Result<Coordinates, EngineError> {
        self.coordinates
            .get(id as usize)
            .copied()
            .ok_or(EngineError::UnknownCard(id))
    }

    /// Card at the given coordinates, if any.
    #[must_use]
    pub fn card_at(&self, coords: Coordinates) -> Option<Card> {
        self.cards.get(&coords).copied()
    }

    /// Coordinates for each card of a slice, in order.
    #[must_use]
    pub fn coordinates_for(&self, cards: &[Card]) -> Vec<Coordinates> {
        cards.iter().map(|&card| self.coordinates_of(card)).collect()
    }

    /// All cards in canonical order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.coordinates.iter().filter_map(|&c| self.card_at(c))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
