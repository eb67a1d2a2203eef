//! Player decisions: a verb plus the cards spent on it.
//!
//! On its turn a player answers with one of the play verbs
//! (`Move`, `Push`, `Attack`, `Strike`). When attacked it answers with one of
//! the response verbs (`Block`, `Retreat`). Both share the `Verb` type so a
//! player can hand back a verb that is wrong for the phase; the engine
//! rejects it.

use serde::{Deserialize, Serialize};

use super::card::{Cards, IntoCards};
use super::player::{PlayerId, PlayerMap};

/// Everything a player can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verb {
    /// Advance toward the opponent.
    Move,
    /// Shove an adjacent opponent away.
    Push,
    /// Strike from where you stand.
    Attack,
    /// Dash-strike: one card of movement, then an attack.
    Strike,
    /// Cancel an attack with matching cards.
    Block,
    /// Step back out of a dash-strike.
    Retreat,
}

impl Verb {
    /// Verbs allowed on your own turn.
    pub const PLAYS: [Verb; 4] = [Verb::Move, Verb::Push, Verb::Attack, Verb::Strike];
    /// Verbs allowed when answering an attack.
    pub const RESPONSES: [Verb; 2] = [Verb::Block, Verb::Retreat];

    #[must_use]
    pub fn is_play(self) -> bool {
        Self::PLAYS.contains(&self)
    }

    #[must_use]
    pub fn is_response(self) -> bool {
        Self::RESPONSES.contains(&self)
    }

    /// Lowercase name, as shown in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Verb::Move => "move",
            Verb::Push => "push",
            Verb::Attack => "attack",
            Verb::Strike => "strike",
            Verb::Block => "block",
            Verb::Retreat => "retreat",
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The kind of attack a defender is answering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
    Attack,
    Strike,
}

impl From<Exchange> for Verb {
    fn from(exchange: Exchange) -> Self {
        match exchange {
            Exchange::Attack => Verb::Attack,
            Exchange::Strike => Verb::Strike,
        }
    }
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Verb::from(*self).fmt(f)
    }
}

/// A verb and the cards spent on it.
///
/// ```
/// use flash_duel::core::{Card, Decision, Verb};
///
/// // A bare card value is a one-card decision
/// let step = Decision::new(Verb::Move, 3);
/// assert_eq!(step.cards.as_slice(), &[Card(3)]);
///
/// let strike = Decision::new(Verb::Strike, [2, 4, 4]);
/// assert_eq!(strike.cards.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decision {
    pub verb: Verb,
    pub cards: Cards,
}

impl Decision {
    pub fn new(verb: Verb, cards: impl IntoCards) -> Self {
        Self {
            verb,
            cards: cards.into_cards(),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [", self.verb)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

/// One fully resolved turn, kept in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    pub turn: u32,

    /// Whose turn it was.
    pub player: PlayerId,

    /// What they played.
    pub play: Decision,

    /// The defender's answer, for attacks and dash-strikes.
    pub response: Option<Decision>,

    /// Board positions once the turn resolved.
    pub positions: PlayerMap<u8>,
}
