//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelConfig {
    /// Seed for the deck shuffle and the first-player draw.
    /// Same seed and same players produce the same match.
    pub seed: u64,

    /// Who moves first and starts on cell 1.
    /// `None` draws it at random from the seed.
    pub first_player: Option<PlayerId>,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            first_player: None,
        }
    }
}

impl DuelConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a fixed first player.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = Some(player);
        self
    }
}
