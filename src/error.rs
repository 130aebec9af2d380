//! Error types for game operations.

use thiserror::Error;

/// Reasons a card selection is turned away.
///
/// A rejected selection leaves the game untouched; presentation layers
/// usually treat these as a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// A card has already been selected this round.
    #[error("a card has already been selected this round")]
    AlreadySelected,
    /// The round is over; start the next round first.
    #[error("the round is over")]
    RoundOver,
    /// The card id is outside 1..=52.
    #[error("unknown card id")]
    UnknownCard,
}

/// Errors that can occur while advancing a round through its delayed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// Invalid round phase for this step.
    #[error("invalid round phase for this step")]
    InvalidState,
    /// The ticket belongs to a round that was reset or restarted.
    #[error("the round this ticket belongs to is no longer active")]
    StaleRound,
}

/// Errors that can occur when starting the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A selection is still being revealed or compared.
    #[error("a round is still in progress")]
    InProgress,
}

/// Errors that can occur when parsing a card label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The label is empty.
    #[error("empty card label")]
    Empty,
    /// The rank part is not 2-10, J, Q, K or A.
    #[error("invalid rank")]
    InvalidRank,
    /// The suit part is not a known suit symbol or letter.
    #[error("invalid suit")]
    InvalidSuit,
}

/// Errors that can occur while playing a whole round with [`Game::play`](crate::Game::play).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The selection was turned away.
    #[error(transparent)]
    Select(#[from] SelectError),
    /// A delayed step could not run.
    #[error(transparent)]
    Step(#[from] StepError),
}
