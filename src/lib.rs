//! # rummy-engine
//!
//! Rule engine for a two-player rummy card game.
//!
//! ## Design Principles
//!
//! 1. **Caller-Owned State**: A game is a `GameState` value owned by its
//!    session. The engine holds only configuration and works on
//!    `&mut GameState`, so any number of games can run side by side.
//!
//! 2. **Rejected Means Untouched**: A request that is illegal for the
//!    current phase, or that points outside a hand or pile, returns an
//!    `EngineError` and changes nothing.
//!
//! 3. **Opaque Cards**: A `Card` is an identity. Rank and suit come from the
//!    `CardCatalog`, never from parsing an identifier.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Piles and history are `im::Vector`, so
//!   cloning a state for undo or display is cheap.
//!
//! - **Injectable Shuffle**: Dealing goes through `ShuffleSource`. Seeded
//!   games use a ChaCha RNG and are fully reproducible.
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, RNG, configuration, errors, snapshots
//! - `cards`: Card identities and the catalog
//! - `zones`: Draw pile and discard pile
//! - `melds`: Meld validation
//! - `scoring`: Card values and final scores
//! - `rules`: The turn engine and the rendering view

pub mod core;
pub mod cards;
pub mod zones;
pub mod melds;
pub mod scoring;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, ShuffleSource,
    GameConfig,
    Action, ActionRecord,
    GameState, Player, TurnPhase, DiscardStep, PhaseKind,
    EngineError, EngineResult,
};

pub use crate::cards::{Card, CardCatalog, Coordinates};

pub use crate::zones::DeckManager;

pub use crate::melds::{Meld, MeldKind, MeldValidator, ValidationMode};

pub use crate::scoring::{score_player, GameResult};

pub use crate::rules::{ActionOutcome, GameView, RulesEngine, TurnEngine};
