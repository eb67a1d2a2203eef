//! Cards, hands and the shared deck.
//!
//! Every card is just a value from 1 to 5. The deck holds five copies of
//! each value; cards move from the deck into hands and from hands into the
//! discard pile, so the 25-card multiset is conserved for the whole match.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::GameRng;

/// Lowest card value.
pub const MIN_VALUE: u8 = 1;
/// Highest card value.
pub const MAX_VALUE: u8 = 5;
/// Copies of each value in a fresh deck.
pub const COPIES: usize = 5;
/// Cards in a fresh deck.
pub const DECK_SIZE: usize = (MAX_VALUE - MIN_VALUE + 1) as usize * COPIES;
/// Cards a player holds at rest between turns.
pub const HAND_SIZE: usize = 5;

/// A single card, identified only by its value.
///
/// Values are not validated on construction: players may name any value,
/// and the engine rejects whatever they do not actually hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(pub u8);

impl Card {
    /// The card's value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Card {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered run of cards, as played or returned by a player.
///
/// Inline up to a full hand, so normal play never allocates.
pub type Cards = SmallVec<[Card; HAND_SIZE]>;

/// Normalisation of whatever a player hands back into a card sequence.
///
/// A single card becomes a one-element sequence.
pub trait IntoCards {
    fn into_cards(self) -> Cards;
}

impl IntoCards for Card {
    fn into_cards(self) -> Cards {
        smallvec::smallvec![self]
    }
}

impl IntoCards for u8 {
    fn into_cards(self) -> Cards {
        smallvec::smallvec![Card(self)]
    }
}

impl IntoCards for Cards {
    fn into_cards(self) -> Cards {
        self
    }
}

impl IntoCards for Vec<Card> {
    fn into_cards(self) -> Cards {
        Cards::from_vec(self)
    }
}

impl IntoCards for Vec<u8> {
    fn into_cards(self) -> Cards {
        self.into_iter().map(Card).collect()
    }
}

impl IntoCards for &[Card] {
    fn into_cards(self) -> Cards {
        Cards::from_slice(self)
    }
}

impl IntoCards for &[u8] {
    fn into_cards(self) -> Cards {
        self.iter().copied().map(Card).collect()
    }
}

impl<const N: usize> IntoCards for [u8; N] {
    fn into_cards(self) -> Cards {
        self.into_iter().map(Card).collect()
    }
}

impl<const N: usize> IntoCards for [Card; N] {
    fn into_cards(self) -> Cards {
        self.into_iter().collect()
    }
}

/// Count how many copies of each value appear.
pub fn card_counts<'a>(cards: impl IntoIterator<Item = &'a Card>) -> FxHashMap<Card, usize> {
    let mut counts = FxHashMap::default();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

/// Can these cards produce an attack at `distance`?
///
/// True if one card equals the distance, or two different cards (a dash
/// step plus a strike) sum to it.
pub fn can_reach(cards: &[Card], distance: u8) -> bool {
    let distance = u16::from(distance);
    cards.iter().any(|c| u16::from(c.0) == distance)
        || cards.iter().enumerate().any(|(i, a)| {
            cards[i + 1..]
                .iter()
                .any(|b| u16::from(a.0) + u16::from(b.0) == distance)
        })
}

/// A player's hand: an unordered multiset of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Cards,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hand holding the given cards.
    pub fn from_cards(cards: impl IntoCards) -> Self {
        Self {
            cards: cards.into_cards(),
        }
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the hand empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Does the hand hold a full complement of cards?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= HAND_SIZE
    }

    /// The cards, in the order they were received.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over the cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// The cards sorted by ascending value.
    #[must_use]
    pub fn sorted(&self) -> Cards {
        let mut sorted = self.cards.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Copies of `card` held.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|&&c| c == card).count()
    }

    /// Does the hand hold every card in `cards`, counting duplicates?
    ///
    /// ```
    /// use flash_duel::core::{Card, Hand};
    ///
    /// let hand = Hand::from_cards([1, 5, 3]);
    /// assert!(hand.contains_all(&[Card(5), Card(1)]));
    /// assert!(!hand.contains_all(&[Card(5), Card(5)]));
    /// ```
    #[must_use]
    pub fn contains_all(&self, cards: &[Card]) -> bool {
        let held = card_counts(&self.cards);
        card_counts(cards)
            .into_iter()
            .all(|(card, wanted)| held.get(&card).copied().unwrap_or(0) >= wanted)
    }

    /// Remove one copy of `card`, returning it if it was held.
    pub fn remove(&mut self, card: Card) -> Option<Card> {
        let index = self.cards.iter().position(|&c| c == card)?;
        Some(self.cards.remove(index))
    }

    /// Add a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Can this hand produce an attack at `distance`? See [`can_reach`].
    #[must_use]
    pub fn can_attack(&self, distance: u8) -> bool {
        can_reach(&self.cards, distance)
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

/// The shared draw pile. The top of the deck is the back of the vector.
///
/// Backed by `im::Vector`, so the engine can take a scratch copy per turn
/// in O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// The unshuffled 25-card set: five copies of each value.
    #[must_use]
    pub fn standard_cards() -> Vec<Card> {
        (MIN_VALUE..=MAX_VALUE)
            .flat_map(|value| std::iter::repeat(Card(value)).take(COPIES))
            .collect()
    }

    /// A standard deck shuffled with `rng`.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards = Self::standard_cards();
        rng.shuffle(&mut cards);
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// A deck in a fixed order. The last card is drawn first.
    pub fn from_cards(cards: impl IntoCards) -> Self {
        Self {
            cards: cards.into_cards().into_iter().collect(),
        }
    }

    /// Draw the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck exhausted?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_cards() {
        let cards = Deck::standard_cards();
        assert_eq!(cards.len(), DECK_SIZE);
        assert_eq!(DECK_SIZE, 25);

        let counts = card_counts(&cards);
        for value in MIN_VALUE..=MAX_VALUE {
            assert_eq!(counts[&Card(value)], COPIES);
        }
    }

    #[test]
    fn test_shuffled_deck_is_permutation() {
        let mut rng = GameRng::new(7);
        let deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);

        let mut cards: Vec<_> = deck.iter().copied().collect();
        assert_ne!(cards, Deck::standard_cards());
        cards.sort_unstable();
        assert_eq!(cards, Deck::standard_cards());
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a = Deck::shuffled(&mut GameRng::new(99));
        let b = Deck::shuffled(&mut GameRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_deck_pops_from_top() {
        let mut deck = Deck::from_cards([1, 2, 3]);
        assert_eq!(deck.pop(), Some(Card(3)));
        assert_eq!(deck.pop(), Some(Card(2)));
        assert_eq!(deck.pop(), Some(Card(1)));
        assert_eq!(deck.pop(), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_into_cards_normalises_single_card() {
        assert_eq!(3u8.into_cards().as_slice(), &[Card(3)]);
        assert_eq!(Card(4).into_cards().as_slice(), &[Card(4)]);
        assert_eq!([5u8, 5].into_cards().as_slice(), &[Card(5), Card(5)]);
        assert_eq!(vec![1u8, 2].into_cards().as_slice(), &[Card(1), Card(2)]);
        assert!(Vec::<u8>::new().into_cards().is_empty());
    }

    #[test]
    fn test_hand_multiset_membership() {
        let hand = Hand::from_cards([1, 2, 4, 5, 5]);

        assert!(hand.contains_all(&[Card(5), Card(5)]));
        assert!(hand.contains_all(&[]));
        assert!(!hand.contains_all(&[Card(5), Card(5), Card(5)]));
        assert!(!hand.contains_all(&[Card(3)]));
        assert!(!hand.contains_all(&[Card(0)]));
        assert_eq!(hand.count(Card(5)), 2);
    }

    #[test]
    fn test_hand_remove_one_copy() {
        let mut hand = Hand::from_cards([5, 1, 5]);

        assert_eq!(hand.remove(Card(5)), Some(Card(5)));
        assert_eq!(hand.count(Card(5)), 1);
        assert_eq!(hand.len(), 2);
        assert_eq!(hand.remove(Card(3)), None);
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn test_hand_sorted_and_display() {
        let hand = Hand::from_cards([4, 1, 3]);
        assert_eq!(hand.sorted().as_slice(), &[Card(1), Card(3), Card(4)]);
        assert_eq!(hand.to_string(), "[4, 1, 3]");
    }

    #[test]
    fn test_can_attack_single_card() {
        let hand = Hand::from_cards([1, 2, 3, 4, 5]);
        assert!(hand.can_attack(3));
        assert!(hand.can_attack(5));
    }

    #[test]
    fn test_can_attack_with_pair() {
        let hand = Hand::from_cards([4, 5]);
        assert!(hand.can_attack(9));
        assert!(!hand.can_attack(8));
    }

    #[test]
    fn test_can_attack_needs_two_physical_cards() {
        // A lone 4 cannot pair with itself to reach 8
        assert!(!Hand::from_cards([4, 1]).can_attack(8));
        assert!(Hand::from_cards([4, 4]).can_attack(8));
    }

    #[test]
    fn test_can_attack_out_of_reach() {
        assert!(!Hand::from_cards([3, 3, 3, 3, 3]).can_attack(17));
        assert!(!Hand::new().can_attack(1));
    }
}
