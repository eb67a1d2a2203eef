//! The material in play and the rules that move it.
//!
//! A `Table` is the board, the deck and both hands. One turn is resolved
//! by `play_turn`: ask the current player for a play, validate and spend the
//! cards, apply its effect, ask the defender for a response when attacked,
//! then refill the current player's hand.

use tracing::debug;

use crate::board::{Board, Limits};
use crate::core::{Card, Cards, Decision, Deck, Exchange, Hand, PlayerId, PlayerMap, Verb};
use crate::rules::{DuelError, Duelist, Fault};

/// The two seated players.
pub(crate) type Players = PlayerMap<Box<dyn Duelist>>;

/// What happened during a successful turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Resolved {
    pub play: Decision,
    pub response: Option<Decision>,
    /// The deck ran out before the current hand was full again.
    pub deck_exhausted: bool,
}

/// Board, deck and hands.
///
/// Cloning is cheap (the deck and discard pile are persistent vectors), so
/// the engine resolves each turn on a copy and keeps it only on success.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    board: Board,
    deck: Deck,
    hands: PlayerMap<Hand>,
}

/// Card value as a signed step count. Values too large for a step are left
/// for the board to reject.
fn steps(card: Card) -> i8 {
    i8::try_from(card.value()).unwrap_or(i8::MAX)
}

fn single(verb: Verb, cards: &[Card]) -> Result<Card, Fault> {
    match cards {
        [card] => Ok(*card),
        _ => Err(Fault::CardCount { verb, count: cards.len() }),
    }
}

fn accept(decision: Option<Decision>, allowed: fn(Verb) -> bool) -> Result<Decision, Fault> {
    let decision = decision.ok_or(Fault::NoDecision)?;
    if allowed(decision.verb) {
        Ok(decision)
    } else {
        Err(Fault::WrongVerb(decision.verb))
    }
}

impl Table {
    pub fn new(board: Board, deck: Deck, hands: PlayerMap<Hand>) -> Self {
        Self { board, deck, hands }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Hand> {
        &self.hands
    }

    /// Cards across deck, hands and discard pile.
    #[must_use]
    pub fn card_total(&self) -> usize {
        self.deck.len()
            + self.hands.iter().map(|(_, hand)| hand.len()).sum::<usize>()
            + self.board.discarded().len()
    }

    /// Resolve one full turn for `current`.
    pub(crate) fn play_turn(
        &mut self,
        players: &mut Players,
        current: PlayerId,
    ) -> Result<Resolved, DuelError> {
        let blame = move |fault: Fault| DuelError::bad_move(current, fault);

        let decision = players[current].play(&self.hands[current], &self.board.view(current));
        let play = accept(decision, Verb::is_play).map_err(blame)?;
        self.spend(current, &play.cards).map_err(blame)?;
        debug!(player = %current, play = %play, "played");

        let response = match play.verb {
            Verb::Move => {
                self.advance(current, &play.cards).map_err(blame)?;
                None
            }
            Verb::Push => {
                self.push(current, &play.cards).map_err(blame)?;
                None
            }
            Verb::Attack => {
                self.check_attack(&play.cards).map_err(blame)?;
                Some(self.exchange(players, Exchange::Attack, current, &play.cards)?)
            }
            Verb::Strike => {
                let attacking = self.dash(current, &play.cards).map_err(blame)?;
                Some(self.exchange(players, Exchange::Strike, current, &attacking)?)
            }
            verb => return Err(blame(Fault::WrongVerb(verb))),
        };

        let deck_exhausted = !self.refill(current);
        Ok(Resolved { play, response, deck_exhausted })
    }

    /// Move `cards` from the player's hand to the discard pile.
    fn spend(&mut self, player: PlayerId, cards: &[Card]) -> Result<(), Fault> {
        if !self.hands[player].contains_all(cards) {
            return Err(Fault::MissingCards(Cards::from_slice(cards)));
        }
        for &card in cards {
            if let Some(card) = self.hands[player].remove(card) {
                self.board.discard(card);
            }
        }
        Ok(())
    }

    /// Step toward the opponent, stopping on the adjacent cell.
    fn advance(&mut self, player: PlayerId, cards: &[Card]) -> Result<(), Fault> {
        let card = single(Verb::Move, cards)?;
        let room = self.board.distance().saturating_sub(1);
        let steps = steps(card).min(i8::try_from(room).unwrap_or(i8::MAX));
        self.board.move_player(player, steps, Limits::Strict)?;
        Ok(())
    }

    fn push(&mut self, player: PlayerId, cards: &[Card]) -> Result<(), Fault> {
        let card = single(Verb::Push, cards)?;
        if self.board.distance() > 1 {
            return Err(Fault::NotAdjacent);
        }
        self.board.move_player(player.other(), -steps(card), Limits::Strict)?;
        Ok(())
    }

    /// Attacking cards must share one value equal to the distance.
    fn check_attack(&self, cards: &[Card]) -> Result<(), Fault> {
        let first = cards.first().ok_or(Fault::NoCards)?;
        if cards.iter().any(|card| card != first) {
            return Err(Fault::MixedCards(Cards::from_slice(cards)));
        }
        let distance = self.board.distance();
        if first.value() != distance {
            return Err(Fault::WrongDistance { value: first.value(), distance });
        }
        Ok(())
    }

    /// Spend the first card moving in, then attack with the rest.
    fn dash(&mut self, player: PlayerId, cards: &[Card]) -> Result<Cards, Fault> {
        let (step, attacking) = match cards {
            [step, attacking @ ..] if !attacking.is_empty() => (*step, attacking),
            _ => return Err(Fault::StrikeTooShort),
        };

        self.board.move_player(player, steps(step), Limits::Strict)?;
        self.check_attack(attacking)?;
        Ok(Cards::from_slice(attacking))
    }

    /// Ask the defender to answer an attack and apply the answer.
    fn exchange(
        &mut self,
        players: &mut Players,
        exchange: Exchange,
        attacker: PlayerId,
        attacking: &[Card],
    ) -> Result<Decision, DuelError> {
        let defender = attacker.other();
        let blame = move |fault: Fault| DuelError::bad_response(defender, fault);

        let decision = players[defender].respond(
            exchange,
            attacking,
            &self.hands[defender],
            &self.board.view(defender),
        );
        let response = accept(decision, Verb::is_response).map_err(blame)?;
        self.spend(defender, &response.cards).map_err(blame)?;
        debug!(player = %defender, response = %response, "responded");

        let applied = match response.verb {
            Verb::Retreat => self.retreat(exchange, defender, &response.cards),
            Verb::Block => Self::block(attacking, &response.cards),
            verb => Err(Fault::WrongVerb(verb)),
        };
        applied.map_err(blame)?;

        Ok(response)
    }

    /// Back away from a dash-strike. The only move that stops at the edge
    /// instead of failing.
    fn retreat(
        &mut self,
        exchange: Exchange,
        player: PlayerId,
        cards: &[Card],
    ) -> Result<(), Fault> {
        if exchange == Exchange::Attack {
            return Err(Fault::RetreatFromAttack);
        }
        if self.board.on_edge(player) {
            return Err(Fault::RetreatOnEdge);
        }
        let card = single(Verb::Retreat, cards)?;
        self.board.move_player(player, -steps(card), Limits::Clamp)?;
        Ok(())
    }

    /// A block must match the attack card for card.
    fn block(attacking: &[Card], cards: &[Card]) -> Result<(), Fault> {
        let attack = attacking.first().map_or(0, |card| card.value());
        if let Some(card) = cards.iter().find(|card| card.value() != attack) {
            return Err(Fault::BlockValue { attack, block: card.value() });
        }
        if cards.len() != attacking.len() {
            return Err(Fault::BlockCount { expected: attacking.len(), got: cards.len() });
        }
        Ok(())
    }

    /// Top the player's hand back up. Returns false if the deck ran out.
    fn refill(&mut self, player: PlayerId) -> bool {
        while !self.hands[player].is_full() {
            match self.deck.pop() {
                Some(card) => self.hands[player].push(card),
                None => return false,
            }
        }
        true
    }
}
