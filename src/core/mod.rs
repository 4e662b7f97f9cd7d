//! Core engine types: players, state, actions, RNG, configuration, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;
pub mod snapshot;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, ShuffleSource};
pub use config::GameConfig;
pub use action::{Action, ActionRecord};
pub use state::{DiscardStep, GameState, PhaseKind, Player, Selection, TurnPhase};
pub use error::{EngineError, EngineResult, Zone};
