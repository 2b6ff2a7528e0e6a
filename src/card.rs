//! Card types and notation.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the lowercase notation character for the suit.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
            Self::Hearts => 'h',
            Self::Spades => 's',
        }
    }

    /// Parses a suit from its notation character, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCardError::InvalidSuit`] if `c` is not one of `c d h s`.
    pub const fn from_char(c: char) -> Result<Self, ParseCardError> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Self::Clubs),
            'd' => Ok(Self::Diamonds),
            'h' => Ok(Self::Hearts),
            's' => Ok(Self::Spades),
            _ => Err(ParseCardError::InvalidSuit(c)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Card value, ordered from [`Value::Two`] (lowest) to [`Value::Ace`] (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
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

impl Value {
    /// All values in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns whether the value can be part of a royal flush (Ten through Ace).
    #[must_use]
    pub fn is_royal(self) -> bool {
        self > Self::Nine
    }

    /// Returns the notation character for the value (`2`-`9`, `T`, `J`, `Q`, `K`, `A`).
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    /// Parses a value from its notation character, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCardError::InvalidValue`] for any other character.
    pub const fn from_char(c: char) -> Result<Self, ParseCardError> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Self::Two),
            '3' => Ok(Self::Three),
            '4' => Ok(Self::Four),
            '5' => Ok(Self::Five),
            '6' => Ok(Self::Six),
            '7' => Ok(Self::Seven),
            '8' => Ok(Self::Eight),
            '9' => Ok(Self::Nine),
            'T' => Ok(Self::Ten),
            'J' => Ok(Self::Jack),
            'Q' => Ok(Self::Queen),
            'K' => Ok(Self::King),
            'A' => Ok(Self::Ace),
            _ => Err(ParseCardError::InvalidValue(c)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The value of the card.
    pub value: Value,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, value: Value) -> Self {
        Self { suit, value }
    }
}

/// Formats the card as value then suit, e.g. `Ah` or `Ts`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

/// Parses the two-character notation produced by [`Card`]'s `Display`.
///
/// ```
/// use handrank::{Card, Suit, Value};
///
/// let card: Card = "Qd".parse().unwrap();
/// assert_eq!(card, Card::new(Suit::Diamonds, Value::Queen));
/// ```
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(value), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::InvalidLength);
        };

        let value = Value::from_char(value)?;
        let suit = Suit::from_char(suit)?;
        Ok(Self::new(suit, value))
    }
}
