//! Random bot - picks uniformly among simple legal decisions.

use crate::board::BoardView;
use crate::core::{Card, Decision, Exchange, GameRng, Hand, Verb};
use crate::rules::Duelist;

/// Bot that plays a random simple action.
///
/// Plays considered: move with any card while apart, push with any card
/// while adjacent, attack with a single card matching the distance.
/// Responses: block when enough matching cards are held, retreat with any
/// card from a dash-strike when not on an edge.
///
/// Pushing an opponent who stands on an edge is not filtered out, so this
/// bot can forfeit.
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: GameRng,
}

impl RandomBot {
    pub const NAME: &'static str = "random";

    /// Create a bot whose choices are driven by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    /// Plays this bot chooses from.
    #[must_use]
    pub fn available_plays(hand: &Hand, board: &BoardView<'_>) -> Vec<Decision> {
        let distance = board.distance();
        let mut plays = Vec::new();

        if distance > 1 {
            plays.extend(hand.iter().map(|&card| Decision::new(Verb::Move, card)));
        }
        if distance == 1 {
            plays.extend(hand.iter().map(|&card| Decision::new(Verb::Push, card)));
        }
        plays.extend(
            hand.iter()
                .filter(|card| card.value() == distance)
                .map(|&card| Decision::new(Verb::Attack, card)),
        );

        plays
    }

    /// Responses this bot chooses from.
    #[must_use]
    pub fn available_responses(
        exchange: Exchange,
        attacking: &[Card],
        hand: &Hand,
        board: &BoardView<'_>,
    ) -> Vec<Decision> {
        let mut responses = Vec::new();

        if let Some(&value) = attacking.first() {
            if hand.count(value) >= attacking.len() {
                responses.push(Decision::new(Verb::Block, vec![value; attacking.len()]));
            }
        }
        if exchange == Exchange::Strike && !board.on_edge(board.me()) {
            responses.extend(hand.iter().map(|&card| Decision::new(Verb::Retreat, card)));
        }

        responses
    }
}

impl Duelist for RandomBot {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn play(&mut self, hand: &Hand, board: &BoardView<'_>) -> Option<Decision> {
        let plays = Self::available_plays(hand, board);
        self.rng.choose(&plays).cloned()
    }

    fn respond(
        &mut self,
        exchange: Exchange,
        attacking: &[Card],
        hand: &Hand,
        board: &BoardView<'_>,
    ) -> Option<Decision> {
        let responses = Self::available_responses(exchange, attacking, hand, board);
        self.rng.choose(&responses).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::PlayerId;

    fn board_at(low: u8, high: u8) -> Board {
        let mut board = Board::new(PlayerId::P1);
        board.set_positions(low, high).unwrap();
        board
    }

    #[test]
    fn test_plays_when_apart() {
        let board = board_at(1, 4);
        let hand = Hand::from_cards([1, 3, 5]);

        let plays = RandomBot::available_plays(&hand, &board.view(PlayerId::P1));
        assert_eq!(plays.len(), 4);
        assert!(plays.contains(&Decision::new(Verb::Move, 5)));
        assert!(plays.contains(&Decision::new(Verb::Attack, 3)));
        assert!(plays.iter().all(|d| d.verb != Verb::Push));
    }

    #[test]
    fn test_plays_when_adjacent() {
        let board = board_at(5, 6);
        let hand = Hand::from_cards([1, 2]);

        let plays = RandomBot::available_plays(&hand, &board.view(PlayerId::P1));
        assert!(plays.contains(&Decision::new(Verb::Push, 2)));
        assert!(plays.contains(&Decision::new(Verb::Attack, 1)));
        assert!(plays.iter().all(|d| d.verb != Verb::Move));
    }

    #[test]
    fn test_responses() {
        let board = board_at(3, 8);
        let hand = Hand::from_cards([5, 5, 2]);
        let view = board.view(PlayerId::P2);

        let against_attack =
            RandomBot::available_responses(Exchange::Attack, &[Card(5), Card(5)], &hand, &view);
        assert_eq!(against_attack, vec![Decision::new(Verb::Block, [5, 5])]);

        let against_strike = RandomBot::available_responses(
            Exchange::Strike,
            &[Card(5), Card(5), Card(5)],
            &hand,
            &view,
        );
        assert_eq!(against_strike.len(), 3);
        assert!(against_strike.iter().all(|d| d.verb == Verb::Retreat));
    }

    #[test]
    fn test_no_retreat_from_edge() {
        let board = board_at(3, 18);
        let hand = Hand::from_cards([1, 2]);

        let responses = RandomBot::available_responses(
            Exchange::Strike,
            &[Card(4)],
            &hand,
            &board.view(PlayerId::P2),
        );
        assert!(responses.is_empty());
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = board_at(1, 18);
        let hand = Hand::from_cards([1, 2, 3, 4, 5]);
        let view = board.view(PlayerId::P1);

        let mut a = RandomBot::new(5);
        let mut b = RandomBot::new(5);
        for _ in 0..20 {
            assert_eq!(a.play(&hand, &view), b.play(&hand, &view));
        }
    }
}
