//! The 18-cell track: positions, distance and bounded movement.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Card, PlayerId, PlayerMap};

use super::view::BoardView;

/// First cell of the track, where the first player starts.
pub const TRACK_START: u8 = 1;
/// Last cell of the track, where the second player starts.
pub const TRACK_END: u8 = 18;
/// Largest single displacement.
pub const MAX_STEP: u8 = 5;

/// How a move treats the ends of the track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Limits {
    /// Leaving the track is an error.
    #[default]
    Strict,
    /// Stop at the edge instead.
    Clamp,
}

/// A board-level movement precondition was violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("{0} is not on the board")]
    UnknownPlayer(PlayerId),

    #[error("{player} cannot move {steps} cells at once")]
    BadMagnitude { player: PlayerId, steps: i8 },

    #[error("{player} cannot move to cell {cell}: position occupied")]
    Occupied { player: PlayerId, cell: i16 },

    #[error("{player} cannot move to cell {cell}: going off the board")]
    OffBoard { player: PlayerId, cell: i16 },
}

/// Authoritative player positions plus the discard pile.
///
/// Sides are fixed when the board is created: the first player starts on
/// cell 1 (the low side) and the other on cell 18. Two players never share
/// a cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    low: PlayerId,
    positions: PlayerMap<u8>,
    discarded: Vector<Card>,
}

impl Board {
    /// Place `first` on cell 1 and the other seat on cell 18.
    ///
    /// `first` must be a seated player.
    #[must_use]
    pub fn new(first: PlayerId) -> Self {
        let mut positions = PlayerMap::with_value(TRACK_START);
        positions[first.other()] = TRACK_END;
        Self {
            low: first,
            positions,
            discarded: Vector::new(),
        }
    }

    /// The player who started on cell 1.
    #[must_use]
    pub fn low_player(&self) -> PlayerId {
        self.low
    }

    /// The player who started on cell 18.
    #[must_use]
    pub fn high_player(&self) -> PlayerId {
        self.low.other()
    }

    /// Current cell of a seated player.
    ///
    /// # Panics
    ///
    /// Panics if `player` is not one of the two seats.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> u8 {
        self.positions[player]
    }

    /// Both positions.
    #[must_use]
    pub fn positions(&self) -> &PlayerMap<u8> {
        &self.positions
    }

    /// Cells between the two players.
    #[must_use]
    pub fn distance(&self) -> u8 {
        self.position(self.low).abs_diff(self.position(self.high_player()))
    }

    /// Is the player on cell 1 or 18?
    #[must_use]
    pub fn on_edge(&self, player: PlayerId) -> bool {
        player.is_seated() && matches!(self.position(player), TRACK_START | TRACK_END)
    }

    /// Time-over tie-break.
    ///
    /// Progress is measured from each player's starting edge: `pos - 1` for
    /// the low side, `18 - pos` for the high side. The player with the lower
    /// progress wins; equal progress yields `None`.
    #[must_use]
    pub fn furthest_player(&self) -> Option<PlayerId> {
        let low = self.position(self.low) - TRACK_START;
        let high = TRACK_END - self.position(self.high_player());

        match low.cmp(&high) {
            std::cmp::Ordering::Less => Some(self.low),
            std::cmp::Ordering::Greater => Some(self.high_player()),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Move `player` by `steps` cells; positive means toward the far edge
    /// of their own side (toward the opponent), negative means back.
    ///
    /// Returns the new cell. Fails when the player is unknown, `|steps|`
    /// is not in 1..=5, the destination is occupied, or the destination is
    /// off the track under [`Limits::Strict`]. Under [`Limits::Clamp`] the
    /// destination is pulled back onto the track instead.
    pub fn move_player(
        &mut self,
        player: PlayerId,
        steps: i8,
        limits: Limits,
    ) -> Result<u8, BoardError> {
        if !player.is_seated() {
            return Err(BoardError::UnknownPlayer(player));
        }
        if !(1..=MAX_STEP).contains(&steps.unsigned_abs()) {
            return Err(BoardError::BadMagnitude { player, steps });
        }

        let signed = if player == self.low { i16::from(steps) } else { -i16::from(steps) };
        let mut cell = i16::from(self.position(player)) + signed;

        if limits == Limits::Clamp {
            cell = cell.clamp(i16::from(TRACK_START), i16::from(TRACK_END));
        }
        if cell == i16::from(self.position(player.other())) {
            return Err(BoardError::Occupied { player, cell });
        }
        if !(i16::from(TRACK_START)..=i16::from(TRACK_END)).contains(&cell) {
            return Err(BoardError::OffBoard { player, cell });
        }

        // In range by the check above
        let cell = cell as u8;
        self.positions[player] = cell;
        Ok(cell)
    }

    /// Place both players directly. Used to set up positions before play.
    pub fn set_positions(&mut self, low: u8, high: u8) -> Result<(), BoardError> {
        for (player, cell) in [(self.low, low), (self.high_player(), high)] {
            if !(TRACK_START..=TRACK_END).contains(&cell) {
                return Err(BoardError::OffBoard { player, cell: i16::from(cell) });
            }
        }
        if low == high {
            return Err(BoardError::Occupied { player: self.high_player(), cell: i16::from(high) });
        }
        let high_player = self.high_player();
        self.positions[self.low] = low;
        self.positions[high_player] = high;
        Ok(())
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discarded.push_back(card);
    }

    /// Cards removed from play.
    #[must_use]
    pub fn discarded(&self) -> &Vector<Card> {
        &self.discarded
    }

    /// Read-only snapshot for `me`.
    #[must_use]
    pub fn view(&self, me: PlayerId) -> BoardView<'_> {
        BoardView::new(self, me)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}: {}, {}: {}}}",
            self.low,
            self.position(self.low),
            self.high_player(),
            self.position(self.high_player())
        )
    }
}
