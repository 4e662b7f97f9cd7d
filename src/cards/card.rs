//! Card identities and their (rank, suit) coordinates.
//!
//! A `Card` is an opaque identity in `0..52`. The identity is also the
//! card's position in the canonical rank-major, suit-minor order:
//!
//! ```text
//! id = (rank - 1) * 4 + suit
//! ```
//!
//! so `AH AD AC AS 2H 2D ... KS`. Presentation layers map identities to
//! visual assets by this position, so the layout must never change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;

/// Number of distinct cards in the deck.
pub const DECK_SIZE: usize = 52;
/// Number of ranks (Ace through King).
pub const RANK_COUNT: u8 = 13;
/// Number of suits.
pub const SUIT_COUNT: u8 = 4;

pub const ACE: u8 = 1;
pub const TEN: u8 = 10;
pub const JACK: u8 = 11;
pub const QUEEN: u8 = 12;
pub const KING: u8 = 13;

pub const HEARTS: u8 = 0;
pub const DIAMONDS: u8 = 1;
pub const CLUBS: u8 = 2;
pub const SPADES: u8 = 3;

const RANK_CHARS: [char; RANK_COUNT as usize] =
    ['A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K'];
const SUIT_CHARS: [char; SUIT_COUNT as usize] = ['H', 'D', 'C', 'S'];

/// A (rank, suit) pair.
///
/// Ranks run `1..=13` (Ace = 1, King = 13), suits `0..=3` (H, D, C, S).
/// The meld validator accepts arbitrary pairs, so nothing here enforces
/// those ranges; use [`Card::from_coordinates`] to get a real card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinates {
    pub rank: u8,
    pub suit: u8,
}

impl Coordinates {
    #[must_use]
    pub const fn new(rank: u8, suit: u8) -> Self {
        Self { rank, suit }
    }
}

impl From<(u8, u8)> for Coordinates {
    fn from((rank, suit): (u8, u8)) -> Self {
        Self::new(rank, suit)
    }
}

/// One of the 52 card identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Create a card from its identity. Returns `None` outside `0..52`.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if (id as usize) < DECK_SIZE {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Create the card at the given coordinates, if they name a real card.
    #[must_use]
    pub const fn from_coordinates(rank: u8, suit: u8) -> Option<Self> {
        if rank < ACE || rank > KING || suit >= SUIT_COUNT {
            return None;
        }
        Some(Self((rank - 1) * SUIT_COUNT + suit))
    }

    /// Get the raw identity (also the canonical position).
    #[must_use]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Rank derived from the canonical position.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / SUIT_COUNT + 1
    }

    /// Suit derived from the canonical position.
    #[must_use]
    pub const fn suit(self) -> u8 {
        self.0 % SUIT_COUNT
    }

    #[must_use]
    pub const fn coordinates(self) -> Coordinates {
        Coordinates::new(self.rank(), self.suit())
    }

    /// Two-character code such as `AH` or `TS`.
    #[must_use]
    pub fn code(self) -> String {
        let mut code = String::with_capacity(2);
        code.push(RANK_CHARS[(self.rank() - 1) as usize]);
        code.push(SUIT_CHARS[self.suit() as usize]);
        code
    }

    /// Parse a two-character code (case-insensitive).
    pub fn from_code(code: &str) -> Result<Self, EngineError> {
        let invalid = || EngineError::InvalidCode(code.to_string());
        let mut chars = code.chars().map(|c| c.to_ascii_uppercase());
        let (Some(rank_char), Some(suit_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };
        let rank = RANK_CHARS
            .iter()
            .position(|&c| c == rank_char)
            .ok_or_else(invalid)?;
        let suit = SUIT_CHARS
            .iter()
            .position(|&c| c == suit_char)
            .ok_or_else(invalid)?;
        Self::from_coordinates(rank as u8 + 1, suit as u8).ok_or_else(invalid)
    }
}

impl TryFrom<u8> for Card {
    type Error = EngineError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Card::new(id).ok_or(EngineError::UnknownCard(id))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
