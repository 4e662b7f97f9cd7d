//! Melds laid down by a player.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::validator::{MeldKind, MeldValidator, ValidationMode};
use crate::cards::{Card, CardCatalog};

/// An accepted group of cards, in the order they were selected.
///
/// The kind (rank or suit) is not stored; [`Meld::kind`] recomputes it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meld {
    cards: SmallVec<[Card; 4]>,
}

impl Meld {
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Classify the meld, anchored on its first card.
    #[must_use]
    pub fn kind(&self, catalog: &CardCatalog, validator: &MeldValidator) -> Option<MeldKind> {
        let first = *self.cards.first()?;
        let coords = catalog.coordinates_for(&self.cards);
        validator.classify(ValidationMode::Selecting, &coords, catalog.coordinates_of(first))
    }
}
