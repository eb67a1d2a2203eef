//! Rules shared by every duel.
//!
//! - `Duelist`: the capability each player provides
//! - `DuelError` / `Fault`: rule violations and their cause
//! - `GameResult` / `Ending`: how a match finished, including time-over
//!
//! The turn state machine itself lives in `duel`.

pub mod duelist;
pub mod error;
pub mod outcome;

pub use duelist::Duelist;
pub use error::{DuelError, Fault};
pub use outcome::{resolve_time_over, Ending, GameResult, TimeOverRule};
