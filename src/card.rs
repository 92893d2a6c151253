//! Card types for the 40-card Spanish-suited Truco deck.

use core::fmt;

/// Card suit.
///
/// Declaration order is the manilha hierarchy, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Diamonds (ouros).
    Diamonds,
    /// Spades (espadas).
    Spades,
    /// Hearts (copas).
    Hearts,
    /// Clubs (paus).
    Clubs,
}

impl Suit {
    /// All suits, weakest first.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Spades, Self::Hearts, Self::Clubs];

    /// Position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Suit at position `index` of [`Suit::ALL`].
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Diamonds),
            1 => Some(Self::Spades),
            2 => Some(Self::Hearts),
            3 => Some(Self::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Diamonds => "Diamonds",
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
        })
    }
}

/// Card rank, in Truco strength order (weakest first).
///
/// Eights, nines and tens are not part of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Queen.
    Queen,
    /// Jack.
    Jack,
    /// King.
    King,
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
}

impl Rank {
    /// All ranks, weakest first.
    pub const ALL: [Self; 10] = [
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Queen,
        Self::Jack,
        Self::King,
        Self::Ace,
        Self::Two,
        Self::Three,
    ];

    /// Number of distinct ranks.
    pub const COUNT: u8 = 10;

    /// Position of the rank in [`Rank::ALL`].
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rank at position `index` of [`Rank::ALL`].
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Four),
            1 => Some(Self::Five),
            2 => Some(Self::Six),
            3 => Some(Self::Seven),
            4 => Some(Self::Queen),
            5 => Some(Self::Jack),
            6 => Some(Self::King),
            7 => Some(Self::Ace),
            8 => Some(Self::Two),
            9 => Some(Self::Three),
            _ => None,
        }
    }

    /// The next rank up, wrapping from Three back to Four.
    #[must_use]
    pub const fn next(self) -> Self {
        match Self::from_index((self.index() + 1) % Self::COUNT) {
            Some(rank) => rank,
            None => Self::Four,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Queen => "Queen",
            Self::Jack => "Jack",
            Self::King => "King",
            Self::Ace => "Ace",
            Self::Two => "2",
            Self::Three => "3",
        })
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Base identity of the card, `1..=40`.
    ///
    /// Ids are rank-major and suit-minor: `4 * rank + suit + 1`.
    #[must_use]
    pub const fn id(self) -> u8 {
        4 * self.rank.index() + self.suit.index() + 1
    }

    /// Looks up the card with the given base id.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        if id == 0 || id as usize > DECK_SIZE {
            return None;
        }
        let offset = id - 1;
        match (Rank::from_index(offset / 4), Suit::from_index(offset % 4)) {
            (Some(rank), Some(suit)) => Some(Self::new(rank, suit)),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 40;
