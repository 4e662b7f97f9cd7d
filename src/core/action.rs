//! Action requests and their history records.
//!
//! The presentation layer drives a game by issuing one `Action` at a time.
//! Every accepted action is appended to the state's history as an
//! `ActionRecord`, which is enough to replay a seeded game.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A request issued by the active player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Take the front card of the draw pile.
    DrawFromDeck,
    /// Take the discard card at `index` and everything after it.
    DrawFromDiscard { index: usize },
    /// Mark or unmark a hand card for a meld attempt.
    ToggleSelect { hand_index: usize, selected: bool },
    /// Try to meld the marked cards.
    ConfirmMeld,
    /// Discard a hand card, ending the turn.
    Discard { hand_index: usize },
}

impl Action {
    /// Operation name, used in errors and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::DrawFromDeck => "draw_from_deck",
            Action::DrawFromDiscard { .. } => "draw_from_discard",
            Action::ToggleSelect { .. } => "toggle_select",
            Action::ConfirmMeld => "confirm_meld",
            Action::Discard { .. } => "discard_card",
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay, debugging and test fixtures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the whole game.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
