//! Game state: the single aggregate every engine operation works on.
//!
//! ## GameState
//!
//! - Shared piles (`DeckManager`)
//! - Both players: name, hand, melds, final score
//! - Active player and turn phase
//! - Action history
//!
//! A `GameState` is exclusively owned by one game session and is passed to
//! the engine by `&mut`. There is no shared or global state, so hosting
//! several games means holding several values.
//!
//! ## TurnPhase
//!
//! ```text
//! Picking --draw--> Discarding(Ready) <--toggle/confirm--> Discarding(Selecting)
//!    ^                                                            |
//!    +------------------------- discard --------------------------+
//!
//! any phase --turn check--> GameOver
//! ```

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::ActionRecord;
use super::error::{EngineError, EngineResult};
use super::player::{PlayerId, PlayerMap};
use crate::cards::{Card, DECK_SIZE};
use crate::melds::Meld;
use crate::rules::view::GameView;
use crate::scoring::GameResult;
use crate::zones::DeckManager;

/// Hand indices marked for a meld attempt, in the order they were marked.
pub type Selection = SmallVec<[usize; 8]>;

/// Sub-step of the discarding phase.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscardStep {
    /// Nothing marked.
    #[default]
    Ready,
    /// A meld attempt is in progress. Never holds an empty selection.
    Selecting(Selection),
}

/// Where the game is within the current turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The active player must draw.
    Picking,
    /// The active player may meld, then must discard.
    Discarding(DiscardStep),
    /// Terminal; scores are populated.
    GameOver(GameResult),
}

impl TurnPhase {
    #[must_use]
    pub fn kind(&self) -> PhaseKind {
        match self {
            TurnPhase::Picking => PhaseKind::Picking,
            TurnPhase::Discarding(_) => PhaseKind::Discarding,
            TurnPhase::GameOver(_) => PhaseKind::GameOver,
        }
    }

    /// Marked hand indices; empty outside a meld attempt.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        match self {
            TurnPhase::Discarding(DiscardStep::Selecting(selection)) => selection,
            _ => &[],
        }
    }
}

/// Phase without its attached data, for views and errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    Picking,
    Discarding,
    GameOver,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseKind::Picking => write!(f, "picking"),
            PhaseKind::Discarding => write!(f, "discarding"),
            PhaseKind::GameOver => write!(f, "game over"),
        }
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    melds: Vec<Meld>,
    score: Option<i32>,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            melds: Vec::new(),
            score: None,
        }
    }

    #[must_use]
    pub fn with_hand(mut self, hand: impl IntoIterator<Item = Card>) -> Self {
        self.hand = hand.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_meld(mut self, meld: Meld) -> Self {
        self.melds.push(meld);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards in hand, in display order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn melds(&self) -> &[Meld] {
        &self.melds
    }

    /// Final score; `None` until the game is over.
    #[must_use]
    pub fn score(&self) -> Option<i32> {
        self.score
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Vec<Card> {
        &mut self.hand
    }

    pub(crate) fn push_meld(&mut self, meld: Meld) {
        self.melds.push(meld);
    }

    pub(crate) fn set_score(&mut self, score: i32) {
        self.score = Some(score);
    }

    fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.hand
            .iter()
            .copied()
            .chain(self.melds.iter().flat_map(|m| m.cards().iter().copied()))
    }
}

/// Full game state.
///
/// Uses `im::Vector` for the piles and history, so `clone()` is cheap and a
/// presentation layer can keep old snapshots around.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    players: PlayerMap<Player>,
    piles: DeckManager,
    active_player: PlayerId,
    phase: TurnPhase,
    /// Turn number (starts at 1).
    turn_number: u32,
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Assemble a state at the start of the first player's turn.
    ///
    /// Fails if the piles, hands and melds together do not hold each of the
    /// 52 cards exactly once, or if any player already has a score.
    pub fn from_parts(players: PlayerMap<Player>, piles: DeckManager) -> EngineResult<Self> {
        let state = Self {
            players,
            piles,
            active_player: PlayerId::FIRST,
            phase: TurnPhase::Picking,
            turn_number: 1,
            history: Vector::new(),
        };
        state.check_conservation()?;
        state.check_phase()?;
        Ok(state)
    }

    /// Assemble a freshly dealt state. The deal moves cards out of a full
    /// deck, so conservation holds by construction.
    pub(crate) fn dealt(players: PlayerMap<Player>, piles: DeckManager) -> Self {
        let state = Self {
            players,
            piles,
            active_player: PlayerId::FIRST,
            phase: TurnPhase::Picking,
            turn_number: 1,
            history: Vector::new(),
        };
        debug_assert!(state.check_conservation().is_ok());
        debug_assert!(state.check_phase().is_ok());
        state
    }

    // === Players ===

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Hand of the player whose turn it is.
    #[must_use]
    pub fn active_hand(&self) -> &[Card] {
        self.players[self.active_player].hand()
    }

    pub(crate) fn player_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player]
    }

    pub(crate) fn active_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.active_player]
    }

    /// Hand the turn to the other player.
    pub(crate) fn pass_turn(&mut self) {
        self.active_player = self.active_player.opponent();
        self.turn_number += 1;
    }

    // === Piles ===

    #[must_use]
    pub fn piles(&self) -> &DeckManager {
        &self.piles
    }

    pub(crate) fn piles_mut(&mut self) -> &mut DeckManager {
        &mut self.piles
    }

    // === Phase ===

    #[must_use]
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, TurnPhase::GameOver(_))
    }

    /// Game result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            TurnPhase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    pub(crate) fn set_phase(&mut self, phase: TurnPhase) {
        self.phase = phase;
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    // === History ===

    /// Every accepted action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    pub(crate) fn record(&mut self, player: PlayerId, action: super::action::Action) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(player, action, self.turn_number, sequence));
    }

    // === Invariants ===

    /// Every card in the game, wherever it is.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.piles
            .cards()
            .chain(self.players.iter().flat_map(|(_, p)| p.cards()))
    }

    /// Verify that each of the 52 cards is present exactly once.
    pub fn check_conservation(&self) -> EngineResult<()> {
        let mut seen = [0usize; DECK_SIZE];
        let mut total = 0usize;
        for card in self.all_cards() {
            seen[card.id() as usize] += 1;
            total += 1;
        }

        if let Some(id) = seen.iter().position(|&count| count > 1) {
            return Err(EngineError::Conservation(format!(
                "card {} appears {} times",
                Card::new(id as u8).map(|c| c.code()).unwrap_or_default(),
                seen[id]
            )));
        }
        if total != DECK_SIZE {
            let missing: Vec<String> = seen
                .iter()
                .enumerate()
                .filter(|(_, count)| **count == 0)
                .filter_map(|(id, _)| Card::new(id as u8).map(Card::code))
                .collect();
            return Err(EngineError::Conservation(format!("missing cards: {}", missing.join(" "))));
        }
        Ok(())
    }

    /// Verify that the phase data agrees with the rest of the state.
    ///
    /// A selection must be non-empty with distinct indices into the active
    /// hand. Scores exist exactly when the game is over, and the recorded
    /// result must follow from them.
    pub fn check_phase(&self) -> EngineResult<()> {
        let scored = self.players.iter().filter(|(_, p)| p.score.is_some()).count();

        match &self.phase {
            TurnPhase::Picking | TurnPhase::Discarding(DiscardStep::Ready) => {}
            TurnPhase::Discarding(DiscardStep::Selecting(selection)) => {
                if selection.is_empty() {
                    return Err(EngineError::PhaseState("empty selection".to_string()));
                }
                let hand_len = self.active_hand().len();
                let mut marked = vec![false; hand_len];
                for &index in selection {
                    match marked.get_mut(index) {
                        None => {
                            return Err(EngineError::PhaseState(format!(
                                "selected index {index} is out of range for a hand of {hand_len} cards"
                            )));
                        }
                        Some(true) => {
                            return Err(EngineError::PhaseState(format!(
                                "index {index} is selected more than once"
                            )));
                        }
                        Some(slot) => *slot = true,
                    }
                }
            }
            TurnPhase::GameOver(result) => {
                let scores = self.players.map(|p| p.score);
                let (Some(first), Some(second)) = (scores[PlayerId::FIRST], scores[PlayerId::SECOND]) else {
                    return Err(EngineError::PhaseState("game over without final scores".to_string()));
                };
                let expected = GameResult::from_scores(&PlayerMap::from_pair(first, second));
                if expected != *result {
                    return Err(EngineError::PhaseState(format!(
                        "result {result:?} does not match scores {first} and {second}"
                    )));
                }
                return Ok(());
            }
        }

        if scored > 0 {
            return Err(EngineError::PhaseState("scores set before game over".to_string()));
        }
        Ok(())
    }

    /// Read-only projection of the state, without the turn check.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::from_state(self)
    }
}
