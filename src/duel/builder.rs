//! Builder for matches that start from a chosen position.

use super::config::DuelConfig;
use super::engine::{deal, draw_first_player, Duel};
use super::table::Table;
use crate::board::{Board, BoardError};
use crate::core::{Card, Deck, GameRng, Hand, IntoCards, PlayerId, PlayerMap};
use crate::rules::Duelist;

/// Builder for creating a `Duel`.
///
/// Anything not preset is drawn from the seed exactly as `Duel::new` does.
/// Preset hands are taken out of the deck so the 25 cards stay accounted
/// for.
///
/// ```
/// use flash_duel::bots::Thug;
/// use flash_duel::core::PlayerId;
/// use flash_duel::duel::DuelBuilder;
///
/// let duel = DuelBuilder::new()
///     .first_player(PlayerId::P1)
///     .hands([1, 2, 4, 5, 5], [1, 2, 4, 5, 5])
///     .positions(1, 6)
///     .build(Thug::new(), Thug::new())
///     .unwrap();
///
/// assert_eq!(duel.board().distance(), 5);
/// assert_eq!(duel.deck().len(), 15);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DuelBuilder {
    config: DuelConfig,
    hands: Option<PlayerMap<Hand>>,
    positions: Option<PlayerMap<u8>>,
    deck: Option<Deck>,
}

impl DuelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: DuelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn first_player(mut self, player: PlayerId) -> Self {
        assert!(player.is_seated(), "First player must be p1 or p2");
        self.config.first_player = Some(player);
        self
    }

    /// Deal these hands instead of drawing them.
    pub fn hands(mut self, p1: impl IntoCards, p2: impl IntoCards) -> Self {
        self.hands = Some(PlayerMap::from_pair(Hand::from_cards(p1), Hand::from_cards(p2)));
        self
    }

    /// Start with p1 and p2 on these cells.
    pub fn positions(mut self, p1: u8, p2: u8) -> Self {
        self.positions = Some(PlayerMap::from_pair(p1, p2));
        self
    }

    /// Use this draw pile. The last card is drawn first.
    pub fn deck(mut self, cards: impl IntoCards) -> Self {
        self.deck = Some(Deck::from_cards(cards));
        self
    }

    /// Build the match. Fails if the preset positions are not a legal board.
    pub fn build(
        self,
        p1: impl Duelist + 'static,
        p2: impl Duelist + 'static,
    ) -> Result<Duel, BoardError> {
        let rng = GameRng::new(self.config.seed);
        let first = self
            .config
            .first_player
            .unwrap_or_else(|| draw_first_player(&rng));

        let (deck, hands) = match (self.deck, self.hands) {
            (Some(deck), Some(hands)) => (deck, hands),
            (None, Some(hands)) => (remaining_deck(&hands, &mut rng.for_context("deck")), hands),
            (deck, None) => {
                let mut deck = deck.unwrap_or_else(|| Deck::shuffled(&mut rng.for_context("deck")));
                let hands = deal(&mut deck);
                (deck, hands)
            }
        };

        let mut board = Board::new(first);
        if let Some(positions) = self.positions {
            board.set_positions(positions[first], positions[first.other()])?;
        }

        let p1: Box<dyn Duelist> = Box::new(p1);
        let p2: Box<dyn Duelist> = Box::new(p2);
        Ok(Duel::assemble(
            PlayerMap::from_pair(p1, p2),
            Table::new(board, deck, hands),
            first,
        ))
    }
}

/// A shuffled standard deck minus the cards already in hand.
fn remaining_deck(hands: &PlayerMap<Hand>, rng: &mut GameRng) -> Deck {
    let mut cards = Deck::standard_cards();
    for card in hands.iter().flat_map(|(_, hand)| hand.iter()) {
        if let Some(index) = cards.iter().position(|c| c == card) {
            cards.swap_remove(index);
        }
    }
    rng.shuffle(&mut cards);
    Deck::from_cards(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Decision, Exchange, DECK_SIZE};
    use crate::board::BoardView;

    struct Idle;

    impl Duelist for Idle {
        fn play(&mut self, _: &Hand, _: &BoardView<'_>) -> Option<Decision> {
            None
        }

        fn respond(
            &mut self,
            _: Exchange,
            _: &[Card],
            _: &Hand,
            _: &BoardView<'_>,
        ) -> Option<Decision> {
            None
        }
    }

    #[test]
    fn test_default_build_matches_new() {
        let built = DuelBuilder::new().seed(11).build(Idle, Idle).unwrap();
        let direct = Duel::new(DuelConfig::default().with_seed(11), Idle, Idle);

        assert_eq!(built.first_player(), direct.first_player());
        assert_eq!(built.hands(), direct.hands());
        assert_eq!(built.deck(), direct.deck());
    }

    #[test]
    fn test_preset_hands_leave_conserved_deck() {
        let duel = DuelBuilder::new()
            .hands([1, 2, 4, 5, 5], [3, 3, 3, 3, 3])
            .build(Idle, Idle)
            .unwrap();

        assert_eq!(duel.deck().len(), DECK_SIZE - 10);
        assert_eq!(duel.card_total(), DECK_SIZE);
        assert_eq!(duel.deck().iter().filter(|&&c| c == Card(3)).count(), 0);
    }

    #[test]
    fn test_positions_follow_seats() {
        let duel = DuelBuilder::new()
            .first_player(PlayerId::P2)
            .positions(15, 4)
            .build(Idle, Idle)
            .unwrap();

        assert_eq!(duel.board().position(PlayerId::P1), 15);
        assert_eq!(duel.board().position(PlayerId::P2), 4);
        assert_eq!(duel.board().low_player(), PlayerId::P2);
    }

    #[test]
    fn test_bad_positions_rejected() {
        assert!(DuelBuilder::new().positions(5, 5).build(Idle, Idle).is_err());
        assert!(DuelBuilder::new().positions(0, 5).build(Idle, Idle).is_err());
    }

    #[test]
    fn test_preset_deck_is_dealt() {
        let cards: Vec<u8> = (0..15).map(|i| i % 5 + 1).collect();
        let duel = DuelBuilder::new()
            .deck(cards)
            .build(Idle, Idle)
            .unwrap();

        assert_eq!(duel.deck().len(), 5);
        assert_eq!(duel.hand(PlayerId::P1).len(), 5);
        assert_eq!(duel.hand(PlayerId::P2).len(), 5);
    }

    #[test]
    #[should_panic(expected = "First player must be p1 or p2")]
    fn test_unseated_first_player() {
        let _ = DuelBuilder::new().first_player(PlayerId::new(3));
    }
}
