//! Card identities and the catalog.
//!
//! - `card`: the 52 opaque card identities, their coordinates and codes
//! - `catalog`: O(1) lookups between identities and coordinates

pub mod card;
pub mod catalog;

pub use card::{Card, Coordinates, DECK_SIZE, RANK_COUNT, SUIT_COUNT};
pub use catalog::CardCatalog;
