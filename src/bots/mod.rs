//! Reference duelists.
//!
//! - `RandomBot`: uniform choice among simple legal decisions
//! - `Thug`: greedy attacker
//!
//! Bots are looked up by name with [`create`].

mod random;
mod thug;

pub use random::RandomBot;
pub use thug::Thug;

use crate::rules::Duelist;

/// Names accepted by [`create`].
pub const NAMES: [&str; 2] = [Thug::NAME, RandomBot::NAME];

/// Build a bot by name. `seed` drives bots that make random choices.
///
/// ```
/// use flash_duel::bots;
/// use flash_duel::rules::Duelist;
///
/// assert_eq!(bots::create("thug", 0).unwrap().name(), "thug");
/// assert!(bots::create("nobody", 0).is_none());
/// ```
pub fn create(name: &str, seed: u64) -> Option<Box<dyn Duelist>> {
    match name {
        Thug::NAME => Some(Box::new(Thug::new())),
        RandomBot::NAME => Some(Box::new(RandomBot::new(seed))),
        _ => None,
    }
}
