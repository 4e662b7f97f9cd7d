//! Meld validation and accepted melds.
//!
//! - `validator`: rank-meld and suit-meld checks in selecting or probing mode
//! - `meld`: a group of cards a player has laid down

pub mod meld;
pub mod validator;

pub use meld::Meld;
pub use validator::{MeldKind, MeldValidator, ValidationMode};
