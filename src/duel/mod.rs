//! The match engine and its setup.
//!
//! `Duel` owns everything in play and drives the turn state machine:
//! awaiting a play from the current player, awaiting a response when they
//! attack, then refilling and handing the turn over. A rule violation ends
//! the match in the opponent's favour; an empty deck during a refill ends
//! it by time-over.

mod builder;
mod config;
mod engine;
mod table;

pub use builder::DuelBuilder;
pub use config::DuelConfig;
pub use engine::Duel;
pub use table::Table;
