//! Shared card piles.
//!
//! The draw pile and the discard pile are owned by a single `DeckManager`.
//! Hands and melds live on the players in `GameState`.

pub mod piles;

pub use piles::DeckManager;
