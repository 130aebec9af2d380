//! Game engine and state management.

use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::sync::Mutex;

use crate::card::{Card, build_deck};
use crate::error::RoundError;
use crate::options::GameOptions;
use crate::result::HistoryEntry;
use crate::shuffle::shuffle;

mod round;
pub mod state;

pub use state::{RoundPhase, RoundState, RoundTicket};

/// Round state plus the epoch that names it.
#[derive(Debug, Default)]
struct Round {
    state: RoundState,
    epoch: u64,
}

/// A card battle game engine.
///
/// The game owns the deck, the random number generator, the current round
/// and the history of completed rounds. Every operation takes `&self`, so a
/// timer running elsewhere can drive the delayed steps of a round.
///
/// Lock order is round, then deck, then rng, then history.
pub struct Game<R = ChaCha8Rng> {
    /// Cards in their current shuffled order.
    ///
    /// Drawn cards stay in the deck; only a reshuffle changes it.
    pub(crate) deck: Mutex<Vec<Card>>,
    /// Game options.
    pub options: GameOptions,
    /// Unshuffled deck every reshuffle starts from.
    template: Vec<Card>,
    /// Current round.
    round: Mutex<Round>,
    /// Completed rounds, most recent first.
    history: Mutex<Vec<HistoryEntry>>,
    /// Random number generator.
    rng: Mutex<R>,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cardbattle::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.deck().len(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new game drawing randomness from `rng`.
    #[must_use]
    pub fn with_rng(options: GameOptions, mut rng: R) -> Self {
        let template = build_deck();
        let deck = shuffle(&template, &mut rng);

        Self {
            deck: Mutex::new(deck),
            options,
            template,
            round: Mutex::new(Round::default()),
            history: Mutex::new(Vec::new()),
            rng: Mutex::new(rng),
        }
    }

    /// Replaces the deck with a fresh shuffle of the full 52 cards.
    fn reshuffle(&self) {
        let mut deck = self.deck.lock();
        let mut rng = self.rng.lock();
        *deck = shuffle(&self.template, &mut *rng);
        debug!("deck reshuffled");
    }

    /// Draws a uniformly random card from the current deck.
    ///
    /// The draw does not remove the card and does not avoid the player's
    /// card. Returns `None` only when the deck is empty.
    pub fn draw_computer_card(&self) -> Option<Card> {
        let deck = self.deck.lock();
        if deck.is_empty() {
            return None;
        }
        let index = self.rng.lock().random_range(0..deck.len());
        let card = deck.get(index).copied();
        drop(deck);

        debug!(card = ?card, "computer drew");
        card
    }

    /// Replaces the deck until the next reshuffle, so tests can fix the
    /// computer's draws.
    #[doc(hidden)]
    pub fn stack_deck(&self, cards: Vec<Card>) {
        *self.deck.lock() = cards;
    }

    /// Returns the deck in its current order.
    pub fn deck(&self) -> Vec<Card> {
        self.deck.with(|deck| deck.clone())
    }

    /// Returns a snapshot of the current round.
    pub fn round_state(&self) -> RoundState {
        self.round.with(|round| round.state)
    }

    /// Returns the current round phase.
    pub fn phase(&self) -> RoundPhase {
        self.round.lock().state.phase
    }

    /// Returns whether a card can be selected right now.
    pub fn can_select(&self) -> bool {
        let round = self.round.lock();
        round.state.phase == RoundPhase::Idle && !round.state.is_over
    }

    /// Returns the completed rounds, most recent first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.with(|history| history.clone())
    }

    /// Starts the next round.
    ///
    /// Clears the selections and the outcome and reshuffles the deck. History
    /// is kept.
    ///
    /// # Errors
    ///
    /// Returns an error while a selection is still being revealed or compared.
    pub fn next_round(&self) -> Result<(), RoundError> {
        let mut round = self.round.lock();
        if matches!(
            round.state.phase,
            RoundPhase::PlayerSelecting | RoundPhase::ComputerDrawing
        ) {
            return Err(RoundError::InProgress);
        }

        round.state = RoundState::default();
        round.epoch += 1;
        self.reshuffle();
        drop(round);

        debug!("next round");
        Ok(())
    }

    /// Restarts the game from any phase.
    ///
    /// Performs the same reset as [`next_round`](Self::next_round), also
    /// dropping a card that is still being revealed. Tickets issued before the
    /// restart become stale. History is kept unless
    /// [`GameOptions::clear_history_on_restart`] is set.
    pub fn restart(&self) {
        let mut round = self.round.lock();
        round.state = RoundState::default();
        round.epoch += 1;
        self.reshuffle();
        if self.options.clear_history_on_restart {
            self.history.lock().clear();
        }
        drop(round);

        debug!("game restarted");
    }
}
