//! Shared fixtures for integration tests.

#![allow(dead_code)]

use rummy_engine::cards::{Card, CardCatalog};
use rummy_engine::core::{GameState, Player, PlayerMap, ShuffleSource};
use rummy_engine::rules::TurnEngine;
use rummy_engine::zones::DeckManager;

/// Leaves the deck in canonical order.
///
/// With the default config the deal is:
/// - first player: AH AC 2H 2C 3H 3C 4H
/// - second player: AD AS 2D 2S 3D 3S 4D
/// - discard pile: 4C
/// - draw pile: 4S 5H 5D ... KS
pub struct Unshuffled;

impl ShuffleSource for Unshuffled {
    fn shuffle_cards(&mut self, _cards: &mut [Card]) {}
}

pub fn card(code: &str) -> Card {
    Card::from_code(code).unwrap()
}

pub fn cards(codes: &[&str]) -> Vec<Card> {
    codes.iter().map(|code| card(code)).collect()
}

pub fn codes(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.code()).collect()
}

pub fn fixed_game() -> (TurnEngine, GameState) {
    let engine = TurnEngine::default();
    let state = engine.start_game_with("Ann", "Bo", &mut Unshuffled);
    (engine, state)
}

/// Build a state from explicit hands and draw pile. Every remaining card
/// goes to the discard pile, so the full deck is always accounted for.
pub fn custom_state(first_hand: &[&str], second_hand: &[&str], draw: &[&str]) -> GameState {
    let first = cards(first_hand);
    let second = cards(second_hand);
    let draw = cards(draw);

    let discard: Vec<Card> = CardCatalog::standard()
        .cards()
        .filter(|c| !first.contains(c) && !second.contains(c) && !draw.contains(c))
        .collect();

    let players = PlayerMap::from_pair(Player::new("Ann").with_hand(first), Player::new("Bo").with_hand(second));
    GameState::from_parts(players, DeckManager::new(draw, discard)).unwrap()
}
