//! Card types and deck utilities.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
///
/// Suits break ties between cards of equal rank. The declaration order is the
/// order of the suit table: Spades first, Clubs last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in table order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Tie-break power of the suit (Spades = 4 down to Clubs = 1).
    #[must_use]
    pub const fn power(self) -> u8 {
        match self {
            Self::Spades => 4,
            Self::Hearts => 3,
            Self::Diamonds => 2,
            Self::Clubs => 1,
        }
    }

    /// Position of the suit in the suit table.
    const fn index(self) -> u8 {
        match self {
            Self::Spades => 0,
            Self::Hearts => 1,
            Self::Diamonds => 2,
            Self::Clubs => 3,
        }
    }

    /// Suit symbol used in card labels.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }

    /// English name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }

    /// Returns `true` for the red suits (Hearts and Diamonds).
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

/// Card rank, ordered from Two (lowest) to Ace (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in table order, Ace first.
    pub const TABLE: [Self; 13] = [
        Self::Ace,
        Self::King,
        Self::Queen,
        Self::Jack,
        Self::Ten,
        Self::Nine,
        Self::Eight,
        Self::Seven,
        Self::Six,
        Self::Five,
        Self::Four,
        Self::Three,
        Self::Two,
    ];

    /// Comparison value of the rank (Two = 1 up to Ace = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Looks up a rank by its comparison value.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value == 0 || value > 13 {
            return None;
        }
        Some(Self::TABLE[13 - value as usize])
    }

    /// Short label printed on the card face.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

/// Identity of one of the 52 physical cards (1..=52).
///
/// Distinct from [`Rank::value`], which is shared by the four cards of a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(u8);

impl CardId {
    /// Wraps a raw id, returning `None` outside 1..=52.
    #[must_use]
    pub const fn new(raw: u8) -> Option<Self> {
        if raw == 0 || raw as usize > DECK_SIZE {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Raw id value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Unique identity of the card: rank value plus 13 per suit table position.
    #[must_use]
    pub const fn id(&self) -> CardId {
        CardId(self.rank.value() + self.suit.index() * 13)
    }

    /// Rebuilds the card carrying the given identity.
    #[must_use]
    pub const fn from_id(id: CardId) -> Self {
        let zero_based = id.0 - 1;
        let suit = Suit::ALL[(zero_based / 13) as usize];
        let rank = Self::rank_of(zero_based % 13 + 1);
        Self { rank, suit }
    }

    const fn rank_of(value: u8) -> Rank {
        match Rank::from_value(value) {
            Some(rank) => rank,
            None => Rank::Two,
        }
    }

    /// Rank comparison value (Two = 1 up to Ace = 13).
    #[must_use]
    pub const fn rank_value(&self) -> u8 {
        self.rank.value()
    }

    /// Suit tie-break power.
    #[must_use]
    pub const fn suit_power(&self) -> u8 {
        self.suit.power()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses labels such as `A♠`, `A♠️`, `10h` or `QS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Emoji-style suit symbols carry a trailing variation selector.
        let s = s.trim().trim_end_matches('\u{FE0F}');
        let suit_char = s.chars().next_back().ok_or(ParseCardError::Empty)?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];

        let suit = match suit_char {
            '♠' | 's' | 'S' => Suit::Spades,
            '♥' | 'h' | 'H' => Suit::Hearts,
            '♦' | 'd' | 'D' => Suit::Diamonds,
            '♣' | 'c' | 'C' => Suit::Clubs,
            _ => return Err(ParseCardError::InvalidSuit),
        };

        let rank = Rank::TABLE
            .into_iter()
            .find(|rank| rank.label().eq_ignore_ascii_case(rank_part))
            .ok_or(ParseCardError::InvalidRank)?;

        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Builds the unshuffled 52-card deck.
///
/// Cards come suit-major in suit table order, and within each suit in rank
/// table order (Ace down to Two).
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::TABLE {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_values_run_from_two_to_ace() {
        assert_eq!(Rank::Two.value(), 1);
        assert_eq!(Rank::Seven.value(), 6);
        assert_eq!(Rank::Ten.value(), 9);
        assert_eq!(Rank::Ace.value(), 13);
        assert!(Rank::Ace > Rank::King);
        assert_eq!(Rank::from_value(12), Some(Rank::King));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn ids_follow_suit_table() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).id().get(), 13);
        assert_eq!(Card::new(Rank::Two, Suit::Spades).id().get(), 1);
        assert_eq!(Card::new(Rank::Two, Suit::Hearts).id().get(), 14);
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).id().get(), 52);
    }

    #[test]
    fn from_id_inverts_id() {
        for card in build_deck() {
            assert_eq!(Card::from_id(card.id()), card);
        }
        assert!(CardId::new(0).is_none());
        assert!(CardId::new(53).is_none());
    }

    #[test]
    fn deck_order_is_suit_major() {
        let deck = build_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(deck[12], Card::new(Rank::Two, Suit::Spades));
        assert_eq!(deck[13], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(deck[51], Card::new(Rank::Two, Suit::Clubs));
    }

    #[test]
    fn labels_and_parsing() {
        let ten = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(ten.to_string(), "10♥");
        assert_eq!("10♥".parse::<Card>(), Ok(ten));
        assert_eq!("10h".parse::<Card>(), Ok(ten));
        assert_eq!("qs".parse::<Card>(), Ok(Card::new(Rank::Queen, Suit::Spades)));
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!("1S".parse::<Card>(), Err(ParseCardError::InvalidRank));
        assert_eq!("AX".parse::<Card>(), Err(ParseCardError::InvalidSuit));
    }

    #[test]
    fn parses_emoji_suit_labels() {
        assert_eq!(
            "A\u{2660}\u{FE0F}".parse::<Card>(),
            Ok(Card::new(Rank::Ace, Suit::Spades))
        );
        assert_eq!(
            "10\u{2666}\u{FE0F}".parse::<Card>(),
            Ok(Card::new(Rank::Ten, Suit::Diamonds))
        );
        assert_eq!("\u{FE0F}".parse::<Card>(), Err(ParseCardError::Empty));
    }

    #[test]
    fn red_suits() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Spades.is_red());
        assert!(!Suit::Clubs.is_red());
    }
}
