//! Rule violations and who is to blame for them.

use thiserror::Error;

use crate::board::BoardError;
use crate::core::{Card, Cards, PlayerId, Verb};

fn list(cards: &[Card]) -> String {
    let values: Vec<String> = cards.iter().map(ToString::to_string).collect();
    format!("[{}]", values.join(", "))
}

/// Why a decision was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("expected a decision, got nothing")]
    NoDecision,

    #[error("{0} is not allowed here")]
    WrongVerb(Verb),

    #[error("doesn't have the cards {}", list(.0))]
    MissingCards(Cards),

    #[error("{verb} takes exactly one card, got {count}")]
    CardCount { verb: Verb, count: usize },

    #[error("cannot attack without cards")]
    NoCards,

    #[error("cannot push, players are not next to each other")]
    NotAdjacent,

    #[error("attacking with different cards {}", list(.0))]
    MixedCards(Cards),

    #[error("cannot attack with {value} at distance {distance}")]
    WrongDistance { value: u8, distance: u8 },

    #[error("cannot strike with fewer than two cards")]
    StrikeTooShort,

    #[error("cannot retreat from an attack")]
    RetreatFromAttack,

    #[error("cannot retreat, already on the edge")]
    RetreatOnEdge,

    #[error("cannot block {attack} with {block}")]
    BlockValue { attack: u8, block: u8 },

    #[error("must block with {expected} cards, got {got}")]
    BlockCount { expected: usize, got: usize },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A rule violation attributable to one player.
///
/// Either kind ends the match: the offending player loses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DuelError {
    /// Illegal play from the player whose turn it is.
    #[error("bad move from {player}: {fault}")]
    BadMove { player: PlayerId, fault: Fault },

    /// Illegal answer from the defending player.
    #[error("bad response from {player}: {fault}")]
    BadResponse { player: PlayerId, fault: Fault },
}

impl DuelError {
    pub fn bad_move(player: PlayerId, fault: impl Into<Fault>) -> Self {
        DuelError::BadMove { player, fault: fault.into() }
    }

    pub fn bad_response(player: PlayerId, fault: impl Into<Fault>) -> Self {
        DuelError::BadResponse { player, fault: fault.into() }
    }

    /// The player at fault.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            DuelError::BadMove { player, .. } | DuelError::BadResponse { player, .. } => *player,
        }
    }

    #[must_use]
    pub fn fault(&self) -> &Fault {
        match self {
            DuelError::BadMove { fault, .. } | DuelError::BadResponse { fault, .. } => fault,
        }
    }

    #[must_use]
    pub fn is_bad_move(&self) -> bool {
        matches!(self, DuelError::BadMove { .. })
    }

    #[must_use]
    pub fn is_bad_response(&self) -> bool {
        matches!(self, DuelError::BadResponse { .. })
    }
}
