//! Read-only board snapshot handed to players.

use im::Vector;

use crate::core::{Card, PlayerId};

use super::track::Board;

/// What a player may ask about the board while deciding.
///
/// The view knows whose decision it is for, so a player can ask about
/// itself without holding its own seat id.
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    board: &'a Board,
    me: PlayerId,
}

impl<'a> BoardView<'a> {
    #[must_use]
    pub fn new(board: &'a Board, me: PlayerId) -> Self {
        Self { board, me }
    }

    /// The seat this view was taken for.
    #[must_use]
    pub fn me(&self) -> PlayerId {
        self.me
    }

    #[must_use]
    pub fn opponent(&self) -> PlayerId {
        self.me.other()
    }

    #[must_use]
    pub fn distance(&self) -> u8 {
        self.board.distance()
    }

    /// Cell of a seated player; `None` for any other id.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Option<u8> {
        player.is_seated().then(|| self.board.position(player))
    }

    #[must_use]
    pub fn on_edge(&self, player: PlayerId) -> bool {
        self.board.on_edge(player)
    }

    #[must_use]
    pub fn furthest_player(&self) -> Option<PlayerId> {
        self.board.furthest_player()
    }

    #[must_use]
    pub fn discarded(&self) -> &'a Vector<Card> {
        self.board.discarded()
    }
}
