//! Card comparison rule.

use crate::card::Card;
use crate::result::Outcome;

/// Compares the player's card against the computer's.
///
/// Higher rank wins. Equal ranks fall back to suit power. Both comparisons
/// are strict, so a card compared against itself loses. If either card is
/// missing the result is [`Outcome::Pending`].
///
/// # Example
///
/// ```
/// use cardbattle::{Card, Outcome, Rank, Suit, compare};
///
/// let ace = Card::new(Rank::Ace, Suit::Spades);
/// let king = Card::new(Rank::King, Suit::Spades);
/// assert_eq!(compare(Some(&ace), Some(&king)), Outcome::Win);
/// assert_eq!(compare(None, Some(&king)), Outcome::Pending);
/// ```
#[must_use]
pub fn compare(player: Option<&Card>, computer: Option<&Card>) -> Outcome {
    let (Some(player), Some(computer)) = (player, computer) else {
        return Outcome::Pending;
    };

    let wins = if player.rank_value() == computer.rank_value() {
        player.suit_power() > computer.suit_power()
    } else {
        player.rank_value() > computer.rank_value()
    };

    if wins { Outcome::Win } else { Outcome::Lose }
}

/// Returns `true` when both draws are the same physical card.
#[must_use]
pub fn is_identity_tie(player: &Card, computer: &Card) -> bool {
    player.id() == computer.id()
}
