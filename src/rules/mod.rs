//! Turn rules.
//!
//! `TurnEngine` owns the turn state machine and implements the
//! `RulesEngine` trait, so drivers can either call the five operations
//! directly or go through `legal_actions` / `apply_action`.
//!
//! The engine never stores a game. Every operation takes the session's
//! `GameState` by `&mut`.

pub mod engine;
pub mod view;

pub use engine::{ActionOutcome, RulesEngine, TurnEngine};
pub use view::GameView;
