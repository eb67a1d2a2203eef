//! Core types: seats, cards, decisions, RNG.
//!
//! These are the plain building blocks shared by the board, the rules and
//! the engine.

pub mod player;
pub mod rng;
pub mod card;
pub mod action;

pub use player::{PlayerId, PlayerMap, SEATS};
pub use rng::GameRng;
pub use card::{
    can_reach, card_counts, Card, Cards, Deck, Hand, IntoCards, COPIES, DECK_SIZE, HAND_SIZE,
    MAX_VALUE, MIN_VALUE,
};
pub use action::{Decision, Exchange, TurnRecord, Verb};
