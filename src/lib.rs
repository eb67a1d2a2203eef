//! # flash-duel
//!
//! Referee engine for a two-player dueling card game played on an
//! 18-cell track.
//!
//! Each player holds five cards from a shared 25-card deck (values 1-5,
//! five copies each). On their turn a player moves, pushes, attacks or
//! dash-strikes; an attacked player must block or retreat. The engine
//! validates every decision, applies it, refills hands and decides the
//! match: a rule violation loses immediately, and an empty deck triggers
//! time-over.
//!
//! ## Design Principles
//!
//! 1. **Untrusted players**: Everything a `Duelist` returns is validated.
//!    A bad decision is a forfeit, never a panic.
//!
//! 2. **Atomic turns**: A turn is resolved on a scratch copy of the table
//!    and committed only when it succeeds.
//!
//! 3. **Deterministic**: One seed fixes the shuffle and the first player.
//!    Same seed and same players produce the same match.
//!
//! ## Modules
//!
//! - `core`: Seats, cards, hands, deck, decisions, RNG
//! - `board`: The track, movement rules, read-only views
//! - `rules`: Player capability, rule violations, match results
//! - `duel`: The match engine, its configuration and builder
//! - `bots`: Reference duelists

pub mod core;
pub mod board;
pub mod rules;
pub mod duel;
pub mod bots;

// Re-export commonly used types
pub use crate::core::{
    Card, Cards, Deck, Decision, Exchange, GameRng, Hand, IntoCards, PlayerId, PlayerMap,
    TurnRecord, Verb,
};

pub use crate::board::{Board, BoardError, BoardView, Limits};

pub use crate::rules::{Duelist, DuelError, Ending, Fault, GameResult, TimeOverRule};

pub use crate::duel::{Duel, DuelBuilder, DuelConfig};

pub use crate::bots::{RandomBot, Thug};
