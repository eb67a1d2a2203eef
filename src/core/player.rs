//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. A duel has exactly two seats,
//! `PlayerId::P1` and `PlayerId::P2`.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a two-element array for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at the table.
pub const SEATS: usize = 2;

/// Seat identifier.
///
/// Indices are 0-based: the first seat is `PlayerId(0)`. Values other than
/// 0 and 1 can be constructed but are never seated; the board rejects them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// First seat.
    pub const P1: PlayerId = PlayerId(0);
    /// Second seat.
    pub const P2: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Is this one of the two seats?
    #[must_use]
    pub const fn is_seated(self) -> bool {
        self.index() < SEATS
    }

    /// The opposing seat.
    ///
    /// ```
    /// use flash_duel::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::P1.other(), PlayerId::P2);
    /// assert_eq!(PlayerId::P2.other(), PlayerId::P1);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        if self.0 == 0 {
            Self::P2
        } else {
            Self::P1
        }
    }

    /// Both seats, in seat order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::P1, Self::P2].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}", u16::from(self.0) + 1)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use flash_duel::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(0);
/// wins[PlayerId::P2] += 1;
///
/// assert_eq!(wins[PlayerId::P1], 0);
/// assert_eq!(wins[PlayerId::P2], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; SEATS],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::P1), factory(PlayerId::P2)],
        }
    }

    /// Create a PlayerMap from explicit values for each seat.
    pub fn from_pair(p1: T, p2: T) -> Self {
        Self { data: [p1, p2] }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
