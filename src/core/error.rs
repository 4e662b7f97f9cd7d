//! Engine error taxonomy.
//!
//! Every variant is a local, recoverable condition: the operation that
//! produced it leaves the game state untouched. A rejected meld is *not*
//! an error; see [`ActionOutcome::Declined`](crate::rules::ActionOutcome).

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::PhaseKind;

/// Card collections an index can point into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Hand,
    DiscardPile,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Hand => write!(f, "hand"),
            Zone::DiscardPile => write!(f, "discard pile"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("draw pile is empty")]
    EmptyPile,
    #[error("index {index} is out of range for a {zone} of {len} cards")]
    InvalidIndex { zone: Zone, index: usize, len: usize },
    #[error("{action} is not allowed during {phase}")]
    IllegalActionForPhase {
        action: &'static str,
        phase: PhaseKind,
    },
    #[error("unknown card identity {0}")]
    UnknownCard(u8),
    #[error("invalid card code {0:?}")]
    InvalidCode(String),
    #[error("card conservation violated: {0}")]
    Conservation(String),
    #[error("inconsistent phase: {0}")]
    PhaseState(String),
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl EngineError {
    pub(crate) fn hand_index(index: usize, len: usize) -> Self {
        EngineError::InvalidIndex {
            zone: Zone::Hand,
            index,
            len,
        }
    }

    pub(crate) fn discard_index(index: usize, len: usize) -> Self {
        EngineError::InvalidIndex {
            zone: Zone::DiscardPile,
            index,
            len,
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
