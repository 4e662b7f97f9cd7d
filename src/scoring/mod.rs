//! Final scoring.
//!
//! Cards are worth 5 (Ace through 9) or 10 (Ten through King). A player
//! scores the value of every melded card minus the value of every card
//! still in hand. The higher score wins; equal scores are a draw.

use serde::{Deserialize, Serialize};

use crate::cards::card::{ACE, TEN};
use crate::cards::Card;
use crate::core::player::{PlayerId, PlayerMap};
use crate::melds::Meld;

/// Value of a low card (Ace through 9).
pub const LOW_CARD_VALUE: i32 = 5;
/// Value of a high card (Ten through King).
pub const HIGH_CARD_VALUE: i32 = 10;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Decide the result from final scores.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<i32>) -> Self {
        let first = scores[PlayerId::FIRST];
        let second = scores[PlayerId::SECOND];
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }
}

/// Point value of a rank.
#[must_use]
pub fn rank_value(rank: u8) -> i32 {
    if (ACE..TEN).contains(&rank) {
        LOW_CARD_VALUE
    } else {
        HIGH_CARD_VALUE
    }
}

#[must_use]
pub fn card_value(card: Card) -> i32 {
    rank_value(card.rank())
}

/// Melded value minus in-hand value.
#[must_use]
pub fn score_player(melds: &[Meld], hand: &[Card]) -> i32 {
    let melded: i32 = melds
        .iter()
        .flat_map(|meld| meld.cards())
        .map(|&card| card_value(card))
        .sum();
    let held: i32 = hand.iter().map(|&card| card_value(card)).sum();
    melded - held
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(codes: &[&str]) -> Vec<Card> {
        codes.iter().map(|code| Card::from_code(code).unwrap()).collect()
    }

    #[test]
    fn test_card_values() {
        assert_eq!(rank_value(1), 5);
        assert_eq!(rank_value(9), 5);
        assert_eq!(rank_value(10), 10);
        assert_eq!(rank_value(13), 10);

        let total: i32 = (0..52).filter_map(Card::new).map(card_value).sum();
        assert_eq!(total, 36 * 5 + 16 * 10);
    }

    #[test]
    fn test_score_example() {
        let melds = vec![Meld::new(cards(&["AH", "TS"]))];
        let hand = cards(&["5D"]);
        assert_eq!(score_player(&melds, &hand), 5 + 10 - 5);
    }

    #[test]
    fn test_score_negative_with_no_melds() {
        assert_eq!(score_player(&[], &cards(&["KH", "QH", "2C"])), -25);
        assert_eq!(score_player(&[], &[]), 0);
    }

    #[test]
    fn test_result_from_scores() {
        assert_eq!(
            GameResult::from_scores(&PlayerMap::from_pair(10, -5)),
            GameResult::Winner(PlayerId::FIRST)
        );
        assert_eq!(
            GameResult::from_scores(&PlayerMap::from_pair(0, 20)),
            GameResult::Winner(PlayerId::SECOND)
        );
        assert_eq!(GameResult::from_scores(&PlayerMap::from_pair(15, 15)), GameResult::Draw);
    }

    #[test]
    fn test_is_winner() {
        let result = GameResult::Winner(PlayerId::SECOND);
        assert!(!result.is_winner(PlayerId::FIRST));
        assert!(result.is_winner(PlayerId::SECOND));
        assert!(!GameResult::Draw.is_winner(PlayerId::FIRST));
    }
}
