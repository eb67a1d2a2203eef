//! The linear track both players stand on.
//!
//! `Board` owns the two positions and the discard pile and enforces the
//! movement rules every action is built from: bounded step sizes, no
//! shared cells, and either strict or clamped track ends. Players only ever
//! see a `BoardView`.

pub mod track;
pub mod view;

pub use track::{Board, BoardError, Limits, MAX_STEP, TRACK_END, TRACK_START};
pub use view::BoardView;
