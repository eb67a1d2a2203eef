//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use flash_duel::board::BoardView;
use flash_duel::core::{Card, Cards, Decision, Exchange, Hand, IntoCards, PlayerMap, Verb};
use flash_duel::rules::Duelist;

/// A play request as the duelist saw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayCall {
    pub hand: Hand,
    pub positions: PlayerMap<u8>,
}

/// A response request as the duelist saw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RespondCall {
    pub exchange: Exchange,
    pub attacking: Cards,
    pub hand: Hand,
    pub positions: PlayerMap<u8>,
}

#[derive(Clone, Debug, Default)]
pub struct Calls {
    pub plays: Vec<PlayCall>,
    pub responses: Vec<RespondCall>,
}

fn seen_positions(board: &BoardView<'_>) -> PlayerMap<u8> {
    PlayerMap::new(|player| board.position(player).unwrap_or_default())
}

/// Duelist that replays queued decisions and records what it was shown.
///
/// Runs out of decisions by returning `None`.
#[derive(Default)]
pub struct Scripted {
    plays: VecDeque<Decision>,
    responses: VecDeque<Decision>,
    calls: Rc<RefCell<Calls>>,
}

impl Scripted {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plays(mut self, verb: Verb, cards: impl IntoCards) -> Self {
        self.plays.push_back(Decision::new(verb, cards));
        self
    }

    pub fn responds(mut self, verb: Verb, cards: impl IntoCards) -> Self {
        self.responses.push_back(Decision::new(verb, cards));
        self
    }

    /// Handle to the recorded calls, valid after the duelist is moved into a match.
    pub fn calls(&self) -> Rc<RefCell<Calls>> {
        Rc::clone(&self.calls)
    }
}

impl Duelist for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    fn play(&mut self, hand: &Hand, board: &BoardView<'_>) -> Option<Decision> {
        self.calls.borrow_mut().plays.push(PlayCall {
            hand: hand.clone(),
            positions: seen_positions(board),
        });
        self.plays.pop_front()
    }

    fn respond(
        &mut self,
        exchange: Exchange,
        attacking: &[Card],
        hand: &Hand,
        board: &BoardView<'_>,
    ) -> Option<Decision> {
        self.calls.borrow_mut().responses.push(RespondCall {
            exchange,
            attacking: Cards::from_slice(attacking),
            hand: hand.clone(),
            positions: seen_positions(board),
        });
        self.responses.pop_front()
    }
}
