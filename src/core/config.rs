//! Game configuration.
//!
//! The standard game deals 7 cards to each player, seeds the discard pile
//! with 1 card and accepts melds of 3 or more cards. Player count is fixed
//! at [`PLAYER_COUNT`](super::player::PLAYER_COUNT) and is not configurable.

use serde::{Deserialize, Serialize};

use super::player::PLAYER_COUNT;
use crate::cards::DECK_SIZE;

/// Complete game configuration.
///
/// Fields are set only through the `with_*` builders, which reject
/// configurations that cannot be dealt from one deck. Deserialization runs
/// the same checks.
///
/// ```
/// use rummy_engine::core::GameConfig;
///
/// let config = GameConfig::default().with_hand_size(10);
/// assert_eq!(config.hand_size(), 10);
/// assert_eq!(config.min_meld_len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFields")]
pub struct GameConfig {
    /// Cards dealt to each player at the start.
    hand_size: usize,

    /// Cards moved from the draw pile to start the discard pile.
    discard_seed: usize,

    /// Smallest group accepted as a meld.
    min_meld_len: usize,
}

/// Unchecked wire form of `GameConfig`.
#[derive(Deserialize)]
struct ConfigFields {
    hand_size: usize,
    discard_seed: usize,
    min_meld_len: usize,
}

impl TryFrom<ConfigFields> for GameConfig {
    type Error = String;

    fn try_from(fields: ConfigFields) -> Result<Self, Self::Error> {
        let config = GameConfig {
            hand_size: fields.hand_size,
            discard_seed: fields.discard_seed,
            min_meld_len: fields.min_meld_len,
        };
        config.validate().map(|()| config).map_err(str::to_string)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 7,
            discard_seed: 1,
            min_meld_len: 3,
        }
    }
}

impl GameConfig {
    /// Set the number of cards dealt to each player.
    ///
    /// Panics if the deal plus discard seed would not leave a draw pile.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self.assert_valid();
        self
    }

    /// Set how many cards seed the discard pile.
    #[must_use]
    pub fn with_discard_seed(mut self, discard_seed: usize) -> Self {
        self.discard_seed = discard_seed;
        self.assert_valid();
        self
    }

    /// Set the minimum meld length.
    #[must_use]
    pub fn with_min_meld_len(mut self, min_meld_len: usize) -> Self {
        self.min_meld_len = min_meld_len;
        self.assert_valid();
        self
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    #[must_use]
    pub fn discard_seed(&self) -> usize {
        self.discard_seed
    }

    #[must_use]
    pub fn min_meld_len(&self) -> usize {
        self.min_meld_len
    }

    /// Cards left in the draw pile right after the deal.
    #[must_use]
    pub fn initial_draw_pile(&self) -> usize {
        DECK_SIZE - self.hand_size * PLAYER_COUNT - self.discard_seed
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.hand_size == 0 {
            return Err("Hand size must be at least 1");
        }
        let dealt = self
            .hand_size
            .checked_mul(PLAYER_COUNT)
            .and_then(|n| n.checked_add(self.discard_seed));
        if !matches!(dealt, Some(n) if n < DECK_SIZE) {
            return Err("Deal must leave cards in the draw pile");
        }
        if self.min_meld_len < 2 {
            return Err("Melds need at least 2 cards");
        }
        Ok(())
    }

    fn assert_valid(&self) {
        if let Err(msg) = self.validate() {
            panic!("{msg}");
        }
    }
}
