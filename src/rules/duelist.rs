//! The player capability the engine drives.

use crate::board::BoardView;
use crate::core::{Card, Decision, Exchange, Hand};

/// A participant in a duel.
///
/// The engine asks for a play on the player's own turn and for a response
/// when the opponent attacks or dash-strikes. Both receive read-only
/// snapshots; nothing a player returns is trusted.
///
/// ## Implementation Notes
///
/// - Returning `None` forfeits the match, same as any illegal decision.
/// - `play` must use a play verb, `respond` a response verb.
/// - Calls are synchronous; no timeout is applied.
pub trait Duelist {
    /// Name shown in logs and reports.
    fn name(&self) -> &str {
        "anonymous"
    }

    /// Choose an action for this turn.
    fn play(&mut self, hand: &Hand, board: &BoardView<'_>) -> Option<Decision>;

    /// Answer an attack or dash-strike made with `attacking`.
    fn respond(
        &mut self,
        exchange: Exchange,
        attacking: &[Card],
        hand: &Hand,
        board: &BoardView<'_>,
    ) -> Option<Decision>;
}

impl<D: Duelist + ?Sized> Duelist for Box<D> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn play(&mut self, hand: &Hand, board: &BoardView<'_>) -> Option<Decision> {
        (**self).play(hand, board)
    }

    fn respond(
        &mut self,
        exchange: Exchange,
        attacking: &[Card],
        hand: &Hand,
        board: &BoardView<'_>,
    ) -> Option<Decision> {
        (**self).respond(exchange, attacking, hand, board)
    }
}
