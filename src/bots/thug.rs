//! Thug - always goes for the hit.

use crate::board::BoardView;
use crate::core::{card_counts, Card, Decision, Exchange, Hand, Verb};
use crate::rules::Duelist;

/// Greedy attacker.
///
/// In order of preference: attack with every card matching the distance,
/// dash-strike with any pair that adds up to it, push with the highest card
/// when adjacent, otherwise move with the lowest card. Blocks whenever it
/// can, retreats from a dash-strike with its lowest card otherwise, and
/// gives up when it can do neither.
///
/// Pushes are not checked against the track end, so an opponent with its
/// back to the edge can make it forfeit.
#[derive(Clone, Debug, Default)]
pub struct Thug;

impl Thug {
    pub const NAME: &'static str = "thug";

    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// A pair whose first card moves in and whose second card then hits.
    fn dash_pair(hand: &Hand, distance: u8) -> Option<[Card; 2]> {
        let cards = hand.cards();
        cards.iter().enumerate().find_map(|(i, &base)| {
            if base.value() >= distance {
                return None;
            }
            cards
                .iter()
                .enumerate()
                .find(|&(j, hit)| i != j && base.value().checked_add(hit.value()) == Some(distance))
                .map(|(_, &hit)| [base, hit])
        })
    }
}

impl Duelist for Thug {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn play(&mut self, hand: &Hand, board: &BoardView<'_>) -> Option<Decision> {
        let distance = board.distance();
        let sorted = hand.sorted();

        let matching = card_counts(hand).get(&Card(distance)).copied().unwrap_or(0);
        if matching > 0 {
            return Some(Decision::new(Verb::Attack, vec![Card(distance); matching]));
        }

        if let Some(pair) = Self::dash_pair(hand, distance) {
            return Some(Decision::new(Verb::Strike, pair));
        }

        if distance == 1 {
            return sorted.last().map(|&card| Decision::new(Verb::Push, card));
        }

        sorted.first().map(|&card| Decision::new(Verb::Move, card))
    }

    fn respond(
        &mut self,
        exchange: Exchange,
        attacking: &[Card],
        hand: &Hand,
        board: &BoardView<'_>,
    ) -> Option<Decision> {
        let value = *attacking.first()?;

        if hand.count(value) >= attacking.len() {
            return Some(Decision::new(Verb::Block, vec![value; attacking.len()]));
        }

        if exchange == Exchange::Strike && !board.on_edge(board.me()) {
            return hand.sorted().first().map(|&card| Decision::new(Verb::Retreat, card));
        }

        None
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
    fn test_attacks_with_every_matching_card() {
        let board = board_at(1, 4);
        let hand = Hand::from_cards([3, 1, 3, 5, 3]);

        let play = Thug::new().play(&hand, &board.view(PlayerId::P1));
        assert_eq!(play, Some(Decision::new(Verb::Attack, [3, 3, 3])));
    }

    #[test]
    fn test_dash_strikes_with_a_pair() {
        let board = board_at(1, 8);
        let hand = Hand::from_cards([5, 2, 1, 1, 1]);

        let play = Thug::new().play(&hand, &board.view(PlayerId::P1));
        assert_eq!(play, Some(Decision::new(Verb::Strike, [5, 2])));
    }

    #[test]
    fn test_pair_needs_two_cards() {
        // A single 3 cannot pair with itself for distance 6
        let board = board_at(1, 7);
        let hand = Hand::from_cards([3, 1]);

        let play = Thug::new().play(&hand, &board.view(PlayerId::P1));
        assert_eq!(play, Some(Decision::new(Verb::Move, 1)));
    }

    #[test]
    fn test_pushes_when_adjacent() {
        let board = board_at(6, 7);
        let hand = Hand::from_cards([2, 4, 3]);

        let play = Thug::new().play(&hand, &board.view(PlayerId::P2));
        assert_eq!(play, Some(Decision::new(Verb::Push, 4)));
    }

    #[test]
    fn test_moves_with_lowest_card() {
        let board = board_at(1, 18);
        let hand = Hand::from_cards([5, 4, 2, 5, 4]);

        let play = Thug::new().play(&hand, &board.view(PlayerId::P1));
        assert_eq!(play, Some(Decision::new(Verb::Move, 2)));
    }

    #[test]
    fn test_blocks_when_possible() {
        let board = board_at(1, 6);
        let hand = Hand::from_cards([5, 5, 5, 1]);

        let response = Thug::new().respond(
            Exchange::Attack,
            &[Card(5), Card(5)],
            &hand,
            &board.view(PlayerId::P2),
        );
        assert_eq!(response, Some(Decision::new(Verb::Block, [5, 5])));
    }

    #[test]
    fn test_retreats_from_strike() {
        let board = board_at(5, 9);
        let hand = Hand::from_cards([3, 2]);

        let response =
            Thug::new().respond(Exchange::Strike, &[Card(4)], &hand, &board.view(PlayerId::P2));
        assert_eq!(response, Some(Decision::new(Verb::Retreat, 2)));
    }

    #[test]
    fn test_gives_up_otherwise() {
        let board = board_at(1, 4);
        let hand = Hand::from_cards([1, 2]);

        let response =
            Thug::new().respond(Exchange::Attack, &[Card(3)], &hand, &board.view(PlayerId::P2));
        assert_eq!(response, None);
    }
}
