//! Round state types.

use crate::card::{Card, CardId};
use crate::result::Outcome;

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// Waiting for the player to pick a card.
    #[default]
    Idle,
    /// The picked card is face up; the computer has not drawn yet.
    PlayerSelecting,
    /// The computer has drawn; the outcome is not in yet.
    ComputerDrawing,
    /// The outcome is known and recorded.
    Resolved,
}

/// Snapshot of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundState {
    /// Current phase.
    pub phase: RoundPhase,
    /// The card turned face up while the reveal delay runs.
    pub revealed_card: Option<Card>,
    /// The card the player selected, once committed.
    pub player_card: Option<Card>,
    /// The computer's card currently on display.
    pub computer_card: Option<Card>,
    /// Outcome of the round, once resolved.
    pub outcome: Option<Outcome>,
    /// Whether the round has been resolved.
    pub is_over: bool,
}

/// Names the round a selection was made in.
///
/// Returned by [`Game::select_card`](crate::Game::select_card) and handed back
/// to the delayed steps. Resetting the round invalidates every ticket issued
/// before the reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTicket {
    pub(crate) epoch: u64,
    pub(crate) card: CardId,
}

impl RoundTicket {
    /// The selected card.
    #[must_use]
    pub const fn card(&self) -> CardId {
        self.card
    }
}
