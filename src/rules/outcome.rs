//! How a match ends.
//!
//! A duel has no life total. It ends when a player breaks a rule (they
//! lose) or when the deck runs dry during a refill (time-over). An attack
//! that cannot be blocked or retreated from leaves the defender with no
//! legal answer, so in practice it ends the match as a forfeit.

use serde::{Deserialize, Serialize};

use super::error::DuelError;
use crate::board::Board;
use crate::core::{Hand, PlayerId, PlayerMap};

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Which time-over rule decided the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOverRule {
    /// Only one player could still attack.
    SoleAttacker,
    /// Both or neither could attack; the furthest player won.
    Furthest,
    /// Nothing separated the players.
    Draw,
}

/// Why the match finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    /// A player broke a rule and lost.
    Forfeit(DuelError),
    /// The deck ran out during a refill.
    TimeOver(TimeOverRule),
}

/// Decide a match whose deck ran out.
///
/// 1. If exactly one player can attack at the current distance, they win.
/// 2. Otherwise the board's furthest player wins.
/// 3. Otherwise it's a draw.
pub fn resolve_time_over(board: &Board, hands: &PlayerMap<Hand>) -> (GameResult, TimeOverRule) {
    let distance = board.distance();
    let attackers: Vec<PlayerId> = hands
        .iter()
        .filter(|(_, hand)| hand.can_attack(distance))
        .map(|(player, _)| player)
        .collect();

    if let [only] = attackers.as_slice() {
        return (GameResult::Winner(*only), TimeOverRule::SoleAttacker);
    }

    match board.furthest_player() {
        Some(player) => (GameResult::Winner(player), TimeOverRule::Furthest),
        None => (GameResult::Draw, TimeOverRule::Draw),
    }
}
