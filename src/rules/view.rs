//! Read-only projection handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::state::{GameState, PhaseKind};
use crate::melds::Meld;
use crate::scoring::GameResult;

/// Everything a renderer needs for the current turn.
///
/// `scores` and `result` are `Some` only when `phase` is `GameOver`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub phase: PhaseKind,
    pub turn_number: u32,
    pub active_player: PlayerId,
    pub active_player_name: String,
    pub active_player_hand: Vec<Card>,
    pub active_player_melds: Vec<Meld>,
    /// Hand indices marked for a meld attempt, in marking order.
    pub selection: Vec<usize>,
    /// Bottom first; the last card is the top of the pile.
    pub discard_pile: Vec<Card>,
    pub draw_pile_count: usize,
    pub scores: Option<PlayerMap<i32>>,
    pub result: Option<GameResult>,
}

impl GameView {
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let active = state.player(state.active_player());
        let scores = if state.is_game_over() {
            Some(state.players().map(|p| p.score().unwrap_or_default()))
        } else {
            None
        };

        Self {
            phase: state.phase().kind(),
            turn_number: state.turn_number(),
            active_player: state.active_player(),
            active_player_name: active.name().to_string(),
            active_player_hand: active.hand().to_vec(),
            active_player_melds: active.melds().to_vec(),
            selection: state.phase().selection().to_vec(),
            discard_pile: state.piles().discard_pile().iter().copied().collect(),
            draw_pile_count: state.piles().draw_len(),
            scores,
            result: state.result(),
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == PhaseKind::GameOver
    }
}
