//! The turn state machine.
//!
//! `TurnEngine` validates and applies the five player requests against a
//! `&mut GameState`:
//!
//! | Phase        | Accepted actions                                   |
//! |--------------|----------------------------------------------------|
//! | `Picking`    | `draw_from_deck`, `draw_from_discard`              |
//! | `Discarding` | `toggle_select`, `confirm_meld`, `discard_card`    |
//! | `GameOver`   | none                                               |
//!
//! Rejected requests return an `EngineError` and leave the state exactly as
//! it was. After every accepted request, and whenever a view is requested,
//! the engine runs the turn check: an empty draw pile or an empty hand for
//! the active player ends the game and scores it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::cards::{Card, CardCatalog};
use crate::core::action::Action;
use crate::core::config::GameConfig;
use crate::core::error::{EngineError, EngineResult};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::{GameRng, ShuffleSource};
use crate::core::state::{DiscardStep, GameState, PhaseKind, Player, Selection, TurnPhase};
use crate::melds::{Meld, MeldValidator, ValidationMode};
use crate::rules::view::GameView;
use crate::scoring::{score_player, GameResult};
use crate::zones::DeckManager;

/// What an accepted request did to the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The request took effect.
    Applied,
    /// A meld attempt or discard pickup did not validate. For a pickup the
    /// state is untouched; for a meld only the selection was cleared.
    Declined,
    /// The request was legal but had nothing to do.
    Unchanged,
}

/// Rules engine trait.
///
/// The seam a driver (presentation layer, bot, test harness) uses to play a
/// game without knowing the individual operations.
pub trait RulesEngine {
    /// Every action that would be accepted in the current state.
    ///
    /// Discard pickups are listed only when the pickup would validate.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Validate and apply one action.
    fn apply_action(&self, state: &mut GameState, action: &Action) -> EngineResult<ActionOutcome>;

    /// Returns `Some(result)` once the game has ended.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;
}

/// The two-player turn engine.
///
/// Holds only immutable configuration, so one engine can drive any number
/// of independent games.
///
/// ## Example
///
/// ```
/// use rummy_engine::core::PhaseKind;
/// use rummy_engine::rules::TurnEngine;
///
/// let engine = TurnEngine::default();
/// let mut state = engine.start_game("Ann", "Bo", Some(7));
///
/// engine.draw_from_deck(&mut state).unwrap();
/// assert_eq!(state.phase().kind(), PhaseKind::Discarding);
///
/// engine.discard_card(&mut state, 0).unwrap();
/// assert_eq!(engine.current_view(&mut state).active_player_name, "Bo");
/// ```
#[derive(Clone, Debug)]
pub struct TurnEngine {
    config: GameConfig,
    catalog: CardCatalog,
    validator: MeldValidator,
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl TurnEngine {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let validator = MeldValidator::new(config.min_meld_len());
        Self {
            config,
            catalog: CardCatalog::standard(),
            validator,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn validator(&self) -> &MeldValidator {
        &self.validator
    }

    // === Setup ===

    /// Shuffle, deal and seed the discard pile.
    ///
    /// A `None` seed draws a fresh one from the thread RNG.
    #[must_use]
    pub fn start_game(&self, first: impl Into<String>, second: impl Into<String>, seed: Option<u64>) -> GameState {
        let mut rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        debug!(seed = rng.seed(), "shuffling with seeded rng");
        self.start_game_with(first, second, &mut rng)
    }

    /// Start a game with an injected shuffle.
    #[must_use]
    pub fn start_game_with<S: ShuffleSource + ?Sized>(
        &self,
        first: impl Into<String>,
        second: impl Into<String>,
        source: &mut S,
    ) -> GameState {
        let mut piles = DeckManager::shuffled(&self.catalog, source);
        let mut hands: PlayerMap<Vec<Card>> = PlayerMap::new(|_| Vec::with_capacity(self.config.hand_size() + 1));

        // Alternate cards between the players, then seed the discard pile.
        // GameConfig cannot hold a deal larger than the deck.
        for _ in 0..self.config.hand_size() {
            for player in PlayerId::all() {
                let drawn = piles.draw_front();
                debug_assert!(drawn.is_ok(), "deal ran out of cards");
                if let Ok(card) = drawn {
                    hands[player].push(card);
                }
            }
        }
        for _ in 0..self.config.discard_seed() {
            let drawn = piles.draw_front();
            debug_assert!(drawn.is_ok(), "discard seed ran out of cards");
            if let Ok(card) = drawn {
                piles.discard(card);
            }
        }

        let [first_hand, second_hand] = [PlayerId::FIRST, PlayerId::SECOND].map(|p| std::mem::take(&mut hands[p]));
        let players = PlayerMap::from_pair(
            Player::new(first).with_hand(first_hand),
            Player::new(second).with_hand(second_hand),
        );
        let mut state = GameState::dealt(players, piles);

        info!(
            first = state.player(PlayerId::FIRST).name(),
            second = state.player(PlayerId::SECOND).name(),
            draw_pile = state.piles().draw_len(),
            "game started"
        );
        self.check_turn(&mut state);
        state
    }

    /// Rebuild a seeded game by applying recorded actions in order.
    pub fn replay<'a>(
        &self,
        first: impl Into<String>,
        second: impl Into<String>,
        seed: u64,
        actions: impl IntoIterator<Item = &'a Action>,
    ) -> EngineResult<GameState> {
        let mut state = self.start_game(first, second, Some(seed));
        for action in actions {
            self.apply_action(&mut state, action)?;
        }
        Ok(state)
    }

    // === Picking ===

    /// Take the front card of the draw pile.
    pub fn draw_from_deck(&self, state: &mut GameState) -> EngineResult<ActionOutcome> {
        let action = Action::DrawFromDeck;
        require_phase(state, &action, PhaseKind::Picking)?;

        let card = state.piles_mut().draw_front()?;
        record(state, action);
        state.active_player_mut().hand_mut().push(card);
        state.set_phase(TurnPhase::Discarding(DiscardStep::Ready));

        debug!(player = %state.active_player(), %card, "drew from deck");
        self.check_turn(state);
        Ok(ActionOutcome::Applied)
    }

    /// Take the discard card at `index` together with every card above it,
    /// but only if the result holds a meld through that card.
    pub fn draw_from_discard(&self, state: &mut GameState, index: usize) -> EngineResult<ActionOutcome> {
        let action = Action::DrawFromDiscard { index };
        require_phase(state, &action, PhaseKind::Picking)?;

        let Some(candidate) = self.pickup_candidate(state, index)? else {
            trace!(player = %state.active_player(), index, "discard pickup declined");
            return Ok(ActionOutcome::Declined);
        };

        record(state, action);
        let taken = state.piles_mut().take_discard_tail(index)?;
        *state.active_player_mut().hand_mut() = candidate;
        state.set_phase(TurnPhase::Discarding(DiscardStep::Ready));

        debug!(player = %state.active_player(), index, taken = taken.len(), "drew from discard pile");
        self.check_turn(state);
        Ok(ActionOutcome::Applied)
    }

    /// Hand plus discard tail, if the trial meld accepts it.
    fn pickup_candidate(&self, state: &GameState, index: usize) -> EngineResult<Option<Vec<Card>>> {
        let anchor = state.piles().discard_at(index)?;
        let tail = state.piles().discard_tail(index)?;

        let mut candidate = state.active_hand().to_vec();
        candidate.extend(tail.iter().copied());

        let coords = self.catalog.coordinates_for(&candidate);
        let accepted = self
            .validator
            .is_valid_meld(ValidationMode::Probing, &coords, self.catalog.coordinates_of(anchor));
        Ok(accepted.then_some(candidate))
    }

    // === Discarding ===

    /// Mark (`selected = true`) or unmark a hand card for a meld attempt.
    pub fn toggle_select(&self, state: &mut GameState, hand_index: usize, selected: bool) -> EngineResult<ActionOutcome> {
        let action = Action::ToggleSelect { hand_index, selected };
        require_phase(state, &action, PhaseKind::Discarding)?;
        check_hand_index(state, hand_index)?;

        let mut selection = Selection::from_slice(state.phase().selection());
        let already = selection.contains(&hand_index);
        if already == selected {
            return Ok(ActionOutcome::Unchanged);
        }
        if selected {
            selection.push(hand_index);
        } else {
            selection.retain(|i| *i != hand_index);
        }

        record(state, action);
        let step = if selection.is_empty() {
            DiscardStep::Ready
        } else {
            DiscardStep::Selecting(selection)
        };
        state.set_phase(TurnPhase::Discarding(step));

        trace!(player = %state.active_player(), hand_index, selected, "selection changed");
        Ok(ActionOutcome::Applied)
    }

    /// Try to lay down the marked cards as a meld.
    ///
    /// The first marked card is the anchor. Whether or not the meld is
    /// accepted, the selection is cleared.
    pub fn confirm_meld(&self, state: &mut GameState) -> EngineResult<ActionOutcome> {
        let action = Action::ConfirmMeld;
        require_phase(state, &action, PhaseKind::Discarding)?;

        let selection = Selection::from_slice(state.phase().selection());
        if selection.is_empty() {
            return Ok(ActionOutcome::Unchanged);
        }

        let hand = state.active_hand();
        let cards = selection
            .iter()
            .map(|&i| hand.get(i).copied().ok_or_else(|| EngineError::hand_index(i, hand.len())))
            .collect::<EngineResult<Vec<Card>>>()?;
        let coords = self.catalog.coordinates_for(&cards);
        let accepted = self
            .validator
            .is_valid_meld(ValidationMode::Selecting, &coords, coords[0]);

        record(state, action);
        state.set_phase(TurnPhase::Discarding(DiscardStep::Ready));

        if !accepted {
            trace!(player = %state.active_player(), cards = ?cards, "meld declined");
            return Ok(ActionOutcome::Declined);
        }

        let mut by_position = selection.to_vec();
        by_position.sort_unstable_by(|a, b| b.cmp(a));
        let player = state.active_player_mut();
        for index in by_position {
            player.hand_mut().remove(index);
        }
        let meld = Meld::new(cards);
        debug!(player = %state.active_player(), meld = ?meld.cards(), "meld laid down");
        state.active_player_mut().push_meld(meld);

        self.check_turn(state);
        Ok(ActionOutcome::Applied)
    }

    /// Discard a hand card and pass the turn. Abandons any selection.
    pub fn discard_card(&self, state: &mut GameState, hand_index: usize) -> EngineResult<ActionOutcome> {
        let action = Action::Discard { hand_index };
        require_phase(state, &action, PhaseKind::Discarding)?;
        check_hand_index(state, hand_index)?;

        record(state, action);
        let card = state.active_player_mut().hand_mut().remove(hand_index);
        state.piles_mut().discard(card);
        let player = state.active_player();
        state.pass_turn();
        state.set_phase(TurnPhase::Picking);

        debug!(%player, %card, next = %state.active_player(), "discarded");
        self.check_turn(state);
        Ok(ActionOutcome::Applied)
    }

    // === Turn check and views ===

    /// End the game if the draw pile or the active hand is empty.
    ///
    /// Returns true if the game is over (now or already).
    pub fn check_turn(&self, state: &mut GameState) -> bool {
        if state.is_game_over() {
            return true;
        }
        if !state.piles().is_draw_empty() && !state.active_hand().is_empty() {
            return false;
        }

        let scores = state.players().map(|p| score_player(p.melds(), p.hand()));
        for player in PlayerId::all() {
            state.player_mut(player).set_score(scores[player]);
        }
        let result = GameResult::from_scores(&scores);
        state.set_phase(TurnPhase::GameOver(result));

        info!(
            first = scores[PlayerId::FIRST],
            second = scores[PlayerId::SECOND],
            ?result,
            "game over"
        );
        true
    }

    /// Run the turn check, then project the state for rendering.
    pub fn current_view(&self, state: &mut GameState) -> GameView {
        self.check_turn(state);
        state.view()
    }
}

impl RulesEngine for TurnEngine {
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        let mut actions = Vec::new();
        match state.phase() {
            TurnPhase::Picking => {
                if !state.piles().is_draw_empty() {
                    actions.push(Action::DrawFromDeck);
                }
                for index in 0..state.piles().discard_len() {
                    if matches!(self.pickup_candidate(state, index), Ok(Some(_))) {
                        actions.push(Action::DrawFromDiscard { index });
                    }
                }
            }
            TurnPhase::Discarding(_) => {
                let selection = state.phase().selection();
                let hand_len = state.active_hand().len();
                for hand_index in 0..hand_len {
                    actions.push(Action::ToggleSelect {
                        hand_index,
                        selected: !selection.contains(&hand_index),
                    });
                }
                if !selection.is_empty() {
                    actions.push(Action::ConfirmMeld);
                }
                for hand_index in 0..hand_len {
                    actions.push(Action::Discard { hand_index });
                }
            }
            TurnPhase::GameOver(_) => {}
        }
        actions
    }

    fn apply_action(&self, state: &mut GameState, action: &Action) -> EngineResult<ActionOutcome> {
        match *action {
            Action::DrawFromDeck => self.draw_from_deck(state),
            Action::DrawFromDiscard { index } => self.draw_from_discard(state, index),
            Action::ToggleSelect { hand_index, selected } => self.toggle_select(state, hand_index, selected),
            Action::ConfirmMeld => self.confirm_meld(state),
            Action::Discard { hand_index } => self.discard_card(state, hand_index),
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.result()
    }
}

fn require_phase(state: &GameState, action: &Action, expected: PhaseKind) -> EngineResult<()> {
    let phase = state.phase().kind();
    if phase == expected {
        Ok(())
    } else {
        Err(EngineError::IllegalActionForPhase {
            action: action.name(),
            phase,
        })
    }
}

fn check_hand_index(state: &GameState, index: usize) -> EngineResult<()> {
    let len = state.active_hand().len();
    if index < len {
        Ok(())
    } else {
        Err(EngineError::hand_index(index, len))
    }
}

fn record(state: &mut GameState, action: Action) {
    let player = state.active_player();
    state.record(player, action);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(code: &str) -> Card {
        Card::from_code(code).unwrap()
    }

    /// Shuffle that keeps the canonical order, so the deal is fixed:
    /// first player AH AC 2H 2C 3H 3C 4H, second AD AS 2D 2S 3D 3S 4D,
    /// discard 4C, draw pile starts at 4S.
    struct Unshuffled;

    impl ShuffleSource for Unshuffled {
        fn shuffle_cards(&mut self, _cards: &mut [Card]) {}
    }

    fn fixed_game() -> (TurnEngine, GameState) {
        let engine = TurnEngine::default();
        let state = engine.start_game_with("Ann", "Bo", &mut Unshuffled);
        (engine, state)
    }

    fn codes(cards: &[Card]) -> Vec<String> {
        cards.iter().map(|c| c.code()).collect()
    }

    #[test]
    fn test_fixed_deal() {
        let (_, state) = fixed_game();

        assert_eq!(
            codes(state.player(PlayerId::FIRST).hand()),
            vec!["AH", "AC", "2H", "2C", "3H", "3C", "4H"]
        );
        assert_eq!(
            codes(state.player(PlayerId::SECOND).hand()),
            vec!["AD", "AS", "2D", "2S", "3D", "3S", "4D"]
        );
        assert_eq!(state.piles().top_discard(), Some(card("4C")));
        assert_eq!(state.piles().draw_pile().front().copied(), Some(card("4S")));
        assert_eq!(state.piles().draw_len(), 37);
        assert!(state.check_conservation().is_ok());
    }

    #[test]
    fn test_seeded_games_match() {
        let engine = TurnEngine::default();
        assert_eq!(
            engine.start_game("a", "b", Some(5)),
            engine.start_game("a", "b", Some(5))
        );
    }

    #[test]
    fn test_draw_from_deck() {
        let (engine, mut state) = fixed_game();

        let outcome = engine.draw_from_deck(&mut state).unwrap();

        assert_eq!(outcome, ActionOutcome::Applied);
        assert_eq!(state.phase(), &TurnPhase::Discarding(DiscardStep::Ready));
        assert_eq!(state.active_hand().len(), 8);
        assert_eq!(state.active_hand().last().copied(), Some(card("4S")));
        assert_eq!(state.piles().draw_len(), 36);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_draw_from_discard_accepted() {
        let (engine, mut state) = fixed_game();

        // 4C joins AC 2C 3C in hand as a club run
        let outcome = engine.draw_from_discard(&mut state, 0).unwrap();

        assert_eq!(outcome, ActionOutcome::Applied);
        assert_eq!(state.active_hand().last().copied(), Some(card("4C")));
        assert_eq!(state.piles().discard_len(), 0);
        assert_eq!(state.phase().kind(), PhaseKind::Discarding);
    }

    #[test]
    fn test_draw_from_discard_declined_leaves_state() {
        let (engine, mut state) = fixed_game();
        engine.draw_from_deck(&mut state).unwrap();
        // First player discards 4H, leaving 4C 4H on the pile
        engine.discard_card(&mut state, 6).unwrap();

        // 4H alone joins only 4D from AD AS 2D 2S 3D 3S 4D
        let before = state.clone();
        assert_eq!(engine.draw_from_discard(&mut state, 1).unwrap(), ActionOutcome::Declined);
        assert_eq!(before, state);

        // Taking both fours from index 0 makes three of a kind with 4D
        assert_eq!(engine.draw_from_discard(&mut state, 0).unwrap(), ActionOutcome::Applied);
        assert_eq!(state.active_hand().len(), 9);
        assert_eq!(state.piles().discard_len(), 0);
    }

    #[test]
    fn test_draw_from_discard_bad_index() {
        let (engine, mut state) = fixed_game();
        let before = state.clone();

        let err = engine.draw_from_discard(&mut state, 1).unwrap_err();

        assert_eq!(err, EngineError::discard_index(1, 1));
        assert_eq!(before, state);
    }

    #[test]
    fn test_wrong_phase_is_rejected() {
        let (engine, mut state) = fixed_game();
        let before = state.clone();

        let err = engine.discard_card(&mut state, 0).unwrap_err();
        assert_eq!(
            err,
            EngineError::IllegalActionForPhase {
                action: "discard_card",
                phase: PhaseKind::Picking,
            }
        );
        assert!(engine.confirm_meld(&mut state).is_err());
        assert!(engine.toggle_select(&mut state, 0, true).is_err());
        assert_eq!(before, state);

        engine.draw_from_deck(&mut state).unwrap();
        assert!(matches!(
            engine.draw_from_deck(&mut state),
            Err(EngineError::IllegalActionForPhase { phase: PhaseKind::Discarding, .. })
        ));
    }

    #[test]
    fn test_toggle_select() {
        let (engine, mut state) = fixed_game();
        engine.draw_from_deck(&mut state).unwrap();

        assert_eq!(engine.toggle_select(&mut state, 4, true).unwrap(), ActionOutcome::Applied);
        assert_eq!(engine.toggle_select(&mut state, 0, true).unwrap(), ActionOutcome::Applied);
        assert_eq!(engine.toggle_select(&mut state, 4, true).unwrap(), ActionOutcome::Unchanged);
        assert_eq!(state.phase().selection(), &[4, 0]);

        engine.toggle_select(&mut state, 4, false).unwrap();
        assert_eq!(state.phase().selection(), &[0]);

        engine.toggle_select(&mut state, 0, false).unwrap();
        assert_eq!(state.phase(), &TurnPhase::Discarding(DiscardStep::Ready));

        assert_eq!(
            engine.toggle_select(&mut state, 8, true).unwrap_err(),
            EngineError::hand_index(8, 8)
        );
    }

    #[test]
    fn test_confirm_meld_accepted() {
        let (engine, mut state) = fixed_game();
        engine.draw_from_deck(&mut state).unwrap();

        // AH 2H 3H, anchored on AH
        for index in [0, 2, 4] {
            engine.toggle_select(&mut state, index, true).unwrap();
        }
        let outcome = engine.confirm_meld(&mut state).unwrap();

        assert_eq!(outcome, ActionOutcome::Applied);
        let player = state.player(PlayerId::FIRST);
        assert_eq!(player.melds().len(), 1);
        assert_eq!(codes(player.melds()[0].cards()), vec!["AH", "2H", "3H"]);
        assert_eq!(codes(player.hand()), vec!["AC", "2C", "3C", "4H", "4S"]);
        assert_eq!(state.phase(), &TurnPhase::Discarding(DiscardStep::Ready));
        assert!(state.check_conservation().is_ok());
    }

    #[test]
    fn test_confirm_meld_declined_clears_selection() {
        let (engine, mut state) = fixed_game();
        engine.draw_from_deck(&mut state).unwrap();

        // AH 2C 3H is neither a rank-meld nor a run
        for index in [0, 3, 4] {
            engine.toggle_select(&mut state, index, true).unwrap();
        }
        let hand_before = state.active_hand().to_vec();
        let outcome = engine.confirm_meld(&mut state).unwrap();

        assert_eq!(outcome, ActionOutcome::Declined);
        assert_eq!(state.active_hand(), hand_before.as_slice());
        assert!(state.player(PlayerId::FIRST).melds().is_empty());
        assert_eq!(state.phase(), &TurnPhase::Discarding(DiscardStep::Ready));
    }

    #[test]
    fn test_confirm_meld_empty_selection() {
        let (engine, mut state) = fixed_game();
        engine.draw_from_deck(&mut state).unwrap();
        let before = state.clone();

        assert_eq!(engine.confirm_meld(&mut state).unwrap(), ActionOutcome::Unchanged);
        assert_eq!(before, state);
    }

    #[test]
    fn test_confirm_meld_anchors_on_first_selected() {
        let (engine, mut state) = fixed_game();
        engine.draw_from_deck(&mut state).unwrap();

        // 3H 2H AH: a hearts run, anchored on 3H
        for index in [4, 2, 0] {
            engine.toggle_select(&mut state, index, true).unwrap();
        }
        assert_eq!(engine.confirm_meld(&mut state).unwrap(), ActionOutcome::Applied);
        assert_eq!(
            codes(state.player(PlayerId::FIRST).melds()[0].cards()),
            vec!["3H", "2H", "AH"]
        );
    }

    #[test]
    fn test_discard_card() {
        let (engine, mut state) = fixed_game();
        engine.draw_from_deck(&mut state).unwrap();
        engine.toggle_select(&mut state, 1, true).unwrap();

        let outcome = engine.discard_card(&mut state, 7).unwrap();

        assert_eq!(outcome, ActionOutcome::Applied);
        assert_eq!(state.active_player(), PlayerId::SECOND);
        assert_eq!(state.phase(), &TurnPhase::Picking);
        assert_eq!(state.turn_number(), 2);
        assert_eq!(state.piles().top_discard(), Some(card("4S")));
        assert_eq!(state.player(PlayerId::FIRST).hand().len(), 7);
        assert_eq!(state.history().len(), 3);
        assert_eq!(state.history()[2].turn, 1);
        assert_eq!(state.history()[2].player, PlayerId::FIRST);
    }

    #[test]
    fn test_melding_whole_hand_ends_game() {
        let (engine, mut state) = fixed_game();
        engine.draw_from_discard(&mut state, 0).unwrap();
        // Hand: AH AC 2H 2C 3H 3C 4H 4C
        for index in [0, 2, 4, 6] {
            engine.toggle_select(&mut state, index, true).unwrap();
        }
        engine.confirm_meld(&mut state).unwrap();
        for index in 0..4 {
            engine.toggle_select(&mut state, index, true).unwrap();
        }
        engine.confirm_meld(&mut state).unwrap();

        assert!(state.is_game_over());
        let first = state.player(PlayerId::FIRST).score();
        assert_eq!(first, Some(40));
        assert_eq!(state.result(), Some(GameResult::Winner(PlayerId::FIRST)));
        assert_eq!(
            engine.discard_card(&mut state, 0).unwrap_err(),
            EngineError::IllegalActionForPhase {
                action: "discard_card",
                phase: PhaseKind::GameOver,
            }
        );
    }

    #[test]
    fn test_legal_actions() {
        let (engine, mut state) = fixed_game();

        assert_eq!(
            engine.legal_actions(&state),
            vec![Action::DrawFromDeck, Action::DrawFromDiscard { index: 0 }]
        );

        engine.draw_from_deck(&mut state).unwrap();
        engine.toggle_select(&mut state, 2, true).unwrap();
        let actions = engine.legal_actions(&state);

        assert_eq!(actions.len(), 8 + 1 + 8);
        assert!(actions.contains(&Action::ToggleSelect {
            hand_index: 2,
            selected: false
        }));
        assert!(actions.contains(&Action::ConfirmMeld));
        assert!(actions.contains(&Action::Discard { hand_index: 7 }));
    }
}
