//! Meld validation.
//!
//! A group of cards is a meld when it is either
//! - a **rank-meld**: enough cards sharing the anchor's rank, or
//! - a **suit-meld** (run): enough cards of the anchor's suit whose ranks
//!   form a consecutive run through the anchor's rank.
//!
//! Validation is always relative to a caller-supplied anchor. The anchor is
//! not inferred from the cards.
//!
//! ## Modes
//!
//! - [`ValidationMode::Selecting`]: the cards are an exact proposal. Every
//!   card must be part of the meld.
//! - [`ValidationMode::Probing`]: the cards are a pool. A meld through the
//!   anchor must exist somewhere in it; other cards are ignored.

use serde::{Deserialize, Serialize};

use crate::cards::Coordinates;

/// How strictly the supplied cards are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationMode {
    /// Every supplied card must belong to the meld.
    Selecting,
    /// A meld must exist among the supplied cards; extras are allowed.
    Probing,
}

/// Which kind of meld a check found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeldKind {
    /// Cards sharing a rank.
    Rank,
    /// Consecutive ranks in one suit.
    Suit,
}

/// Rank-meld and suit-meld checks with a fixed minimum length.
///
/// ## Example
///
/// ```
/// use rummy_engine::cards::Coordinates;
/// use rummy_engine::melds::{MeldValidator, ValidationMode};
///
/// let validator = MeldValidator::default();
/// let run = [(7, 0), (8, 0), (9, 0)].map(Coordinates::from);
///
/// assert!(validator.is_valid_meld(ValidationMode::Selecting, &run, Coordinates::new(7, 0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeldValidator {
    min_len: usize,
}

impl Default for MeldValidator {
    fn default() -> Self {
        Self::new(3)
    }
}

impl MeldValidator {
    #[must_use]
    pub const fn new(min_len: usize) -> Self {
        Self { min_len }
    }

    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// True if the cards form a rank-meld or a suit-meld through `anchor`.
    #[must_use]
    pub fn is_valid_meld(&self, mode: ValidationMode, cards: &[Coordinates], anchor: Coordinates) -> bool {
        self.classify(mode, cards, anchor).is_some()
    }

    /// Which check accepts the cards, trying the rank check first.
    #[must_use]
    pub fn classify(&self, mode: ValidationMode, cards: &[Coordinates], anchor: Coordinates) -> Option<MeldKind> {
        if self.is_rank_meld(mode, cards, anchor.rank) {
            Some(MeldKind::Rank)
        } else if self.is_suit_meld(mode, cards, anchor.rank, anchor.suit) {
            Some(MeldKind::Suit)
        } else {
            None
        }
    }

    /// Count cards of `rank`. In selecting mode any other rank fails.
    #[must_use]
    pub fn is_rank_meld(&self, mode: ValidationMode, cards: &[Coordinates], rank: u8) -> bool {
        let mut matching = 0;
        for card in cards {
            if card.rank == rank {
                matching += 1;
            } else if mode == ValidationMode::Selecting {
                return false;
            }
        }
        matching >= self.min_len
    }

    /// Length of the consecutive run of `suit` through `rank`, checked
    /// against the mode's acceptance rule.
    #[must_use]
    pub fn is_suit_meld(&self, mode: ValidationMode, cards: &[Coordinates], rank: u8, suit: u8) -> bool {
        let mut ranks = Vec::with_capacity(cards.len());
        for card in cards {
            if card.suit == suit {
                ranks.push(card.rank);
            } else if mode == ValidationMode::Selecting {
                return false;
            }
        }
        ranks.sort_unstable();

        let Some(run) = run_length(&ranks, rank) else {
            return false;
        };

        match mode {
            ValidationMode::Selecting => run == cards.len() && run >= self.min_len,
            ValidationMode::Probing => run >= self.min_len,
        }
    }
}

/// Length of the run of consecutive values through `anchor` in a sorted
/// slice, or `None` if `anchor` is absent.
fn run_length(sorted: &[u8], anchor: u8) -> Option<usize> {
    let position = sorted.iter().rposition(|&r| r == anchor)?;
    let mut length = 1;

    let mut left = position;
    while left > 0 && sorted[left] - sorted[left - 1] == 1 {
        length += 1;
        left -= 1;
    }

    let mut right = position + 1;
    while right < sorted.len() && sorted[right] - sorted[right - 1] == 1 {
        length += 1;
        right += 1;
    }

    Some(length)
}
