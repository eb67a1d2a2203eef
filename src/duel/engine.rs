//! The match engine: one turn per `step`, until someone wins or it's a draw.

use im::Vector;
use tracing::{debug, info, warn};

use super::config::DuelConfig;
use super::table::{Players, Table};
use crate::board::Board;
use crate::core::{Deck, GameRng, Hand, PlayerId, PlayerMap, TurnRecord, HAND_SIZE};
use crate::rules::{resolve_time_over, DuelError, Duelist, Ending, GameResult};

/// A match between two duelists.
///
/// ## Lifecycle
///
/// The first player, the board, the deck and both hands are settled when
/// the match is created and stay fixed for its duration. Each `step` plays
/// one full turn. The match is over once a winner is set or it is drawn;
/// further steps do nothing.
///
/// ## Example
///
/// ```
/// use flash_duel::bots::Thug;
/// use flash_duel::duel::{Duel, DuelConfig};
///
/// let mut duel = Duel::new(DuelConfig::default().with_seed(3), Thug::new(), Thug::new());
/// let result = duel.run();
///
/// assert!(duel.is_over());
/// assert_eq!(Some(result), duel.result());
/// ```
pub struct Duel {
    players: Players,
    table: Table,
    first_player: PlayerId,
    current: PlayerId,
    turn: u32,
    winner: Option<PlayerId>,
    draw: bool,
    ending: Option<Ending>,
    history: Vector<TurnRecord>,
}

impl Duel {
    /// Set up a match: draw the first player, shuffle, deal five cards each.
    pub fn new(config: DuelConfig, p1: impl Duelist + 'static, p2: impl Duelist + 'static) -> Self {
        let rng = GameRng::new(config.seed);
        let first = config
            .first_player
            .unwrap_or_else(|| draw_first_player(&rng));

        let mut deck = Deck::shuffled(&mut rng.for_context("deck"));
        let hands = deal(&mut deck);

        let p1: Box<dyn Duelist> = Box::new(p1);
        let p2: Box<dyn Duelist> = Box::new(p2);
        Self::assemble(
            PlayerMap::from_pair(p1, p2),
            Table::new(Board::new(first), deck, hands),
            first,
        )
    }

    pub(crate) fn assemble(players: Players, table: Table, first_player: PlayerId) -> Self {
        Self {
            players,
            table,
            first_player,
            current: first_player,
            turn: 0,
            winner: None,
            draw: false,
            ending: None,
            history: Vector::new(),
        }
    }

    /// Play one full turn.
    ///
    /// On a rule violation the offending player loses: the opponent is set
    /// as winner and the error is returned. The board, deck and hands stay
    /// as they were before the turn.
    pub fn step(&mut self) -> Result<(), DuelError> {
        if self.is_over() {
            return Ok(());
        }

        let current = self.current;
        let hand = &self.table.hands()[current];
        debug!(
            turn = self.turn + 1,
            player = %current,
            hand = %hand,
            board = %self.table.board(),
            "turn"
        );

        let mut scratch = self.table.clone();
        let resolved = match scratch.play_turn(&mut self.players, current) {
            Ok(resolved) => resolved,
            Err(err) => {
                self.forfeit(err.clone());
                return Err(err);
            }
        };
        self.table = scratch;
        self.turn += 1;

        self.history.push_back(TurnRecord {
            turn: self.turn,
            player: current,
            play: resolved.play,
            response: resolved.response,
            positions: self.table.board().positions().clone(),
        });

        if resolved.deck_exhausted {
            self.time_over();
        } else {
            self.current = current.other();
        }
        Ok(())
    }

    /// Step until the match is over and return the result.
    pub fn run(&mut self) -> GameResult {
        info!(
            p1 = self.players[PlayerId::P1].name(),
            p2 = self.players[PlayerId::P2].name(),
            first = %self.first_player,
            "match started"
        );

        while !self.is_over() {
            if self.step().is_err() {
                break;
            }
        }

        // Set by either the forfeit or the time-over path
        self.result().unwrap_or(GameResult::Draw)
    }

    fn forfeit(&mut self, err: DuelError) {
        let winner = err.player().other();
        warn!(player = %err.player(), error = %err, "forfeit");
        info!(winner = %winner, turns = self.turn, "match over");

        self.winner = Some(winner);
        self.ending = Some(Ending::Forfeit(err));
    }

    fn time_over(&mut self) {
        let (result, rule) = resolve_time_over(self.table.board(), self.table.hands());
        info!(result = ?result, rule = ?rule, turns = self.turn, "time over");

        match result {
            GameResult::Winner(player) => self.winner = Some(player),
            GameResult::Draw => self.draw = true,
        }
        self.ending = Some(Ending::TimeOver(rule));
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        self.table.board()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        self.table.deck()
    }

    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Hand> {
        self.table.hands()
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.table.hands()[player]
    }

    /// Cards across deck, hands and discard pile. Always 25 for a match
    /// dealt from a full deck.
    #[must_use]
    pub fn card_total(&self) -> usize {
        self.table.card_total()
    }

    /// Name a seated player reported.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        self.players[player].name()
    }

    #[must_use]
    pub fn first_player(&self) -> PlayerId {
        self.first_player
    }

    /// Whose turn it is (or was, once the match is over).
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Turns fully resolved so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.draw
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.draw
    }

    /// `None` while the match is running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match (self.winner, self.draw) {
            (Some(player), _) => Some(GameResult::Winner(player)),
            (None, true) => Some(GameResult::Draw),
            (None, false) => None,
        }
    }

    #[must_use]
    pub fn ending(&self) -> Option<&Ending> {
        self.ending.as_ref()
    }

    /// Every resolved turn, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }
}

pub(crate) fn draw_first_player(rng: &GameRng) -> PlayerId {
    rng.for_context("first-player").pick_seat()
}

/// Five cards to p1, then five to p2.
pub(crate) fn deal(deck: &mut Deck) -> PlayerMap<Hand> {
    PlayerMap::new(|_| {
        let mut hand = Hand::new();
        for card in std::iter::from_fn(|| deck.pop()).take(HAND_SIZE) {
            hand.push(card);
        }
        hand
    })
}
