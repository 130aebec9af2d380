//! Round outcome types.

use core::fmt;

use crate::card::Card;

/// Outcome of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player's card beats the computer's.
    Win,
    /// The computer's card beats or matches the player's.
    Lose,
    /// No decision: a card was missing when the comparison ran.
    Pending,
}

impl Outcome {
    /// Message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Win => "You Win",
            Self::Lose => "You Lose",
            Self::Pending => "Select a card first",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A completed round, as recorded in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    /// 1-based round number.
    pub round: usize,
    /// The card the player selected.
    pub player_card: Card,
    /// The computer's first draw, which the outcome was scored against.
    pub computer_card: Option<Card>,
    /// The outcome of the round.
    pub outcome: Outcome,
}

/// Everything that happened when a round was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResolution {
    /// 1-based round number.
    pub round: usize,
    /// The card the player selected.
    pub player_card: Card,
    /// The computer's first draw.
    pub computer_card: Option<Card>,
    /// Second draw made when the first draw was the player's own card.
    ///
    /// This card replaces the displayed computer card, but the outcome is
    /// still scored against [`computer_card`](Self::computer_card).
    pub redraw: Option<Card>,
    /// The outcome of the round.
    pub outcome: Outcome,
}

impl RoundResolution {
    /// History record for this round.
    #[must_use]
    pub const fn history_entry(&self) -> HistoryEntry {
        HistoryEntry {
            round: self.round,
            player_card: self.player_card,
            computer_card: self.computer_card,
            outcome: self.outcome,
        }
    }
}
