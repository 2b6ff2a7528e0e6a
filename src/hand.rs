//! Hand representation and ranking.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::HandError;
use crate::rank::HandRank;

/// A hand of cards.
///
/// Cards are only ever appended, one at a time, with [`Hand::draw`]. The hand
/// does not check for duplicates or limit its size.
///
/// The flush checks quantify over every card in the hand, so on an empty hand
/// [`has_flush`](Hand::has_flush) and [`has_royal_flush`](Hand::has_royal_flush)
/// are vacuously `true` and [`hand_rank`](Hand::hand_rank) reports
/// [`HandRank::RoyalFlush`]. Use [`evaluate`](Hand::evaluate) to reject empty
/// hands instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in draw order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn draw(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card with the highest value.
    ///
    /// When several cards share the highest value, the one drawn first wins.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::EmptyHand`] if the hand holds no cards.
    pub fn high_card(&self) -> Result<Card, HandError> {
        let (first, rest) = self.cards.split_first().ok_or(HandError::EmptyHand)?;

        // Only a strictly greater value replaces the running maximum.
        Ok(rest.iter().fold(*first, |high, &next| {
            if next.value > high.value { next } else { high }
        }))
    }

    /// Returns whether every card has the suit of the first card.
    ///
    /// `true` for an empty hand.
    #[must_use]
    pub fn has_flush(&self) -> bool {
        self.cards
            .first()
            .is_none_or(|first| self.cards.iter().all(|c| c.suit == first.suit))
    }

    /// Returns whether the hand is a flush made only of Ten through Ace.
    ///
    /// `true` for an empty hand.
    #[must_use]
    pub fn has_royal_flush(&self) -> bool {
        self.has_flush() && self.cards.iter().all(|c| c.value.is_royal())
    }

    /// Classifies the hand, checking the highest category first.
    ///
    /// # Example
    ///
    /// ```
    /// use handrank::{Card, Hand, HandRank, Suit, Value};
    ///
    /// let hand: Hand = [
    ///     Card::new(Suit::Clubs, Value::Two),
    ///     Card::new(Suit::Clubs, Value::Nine),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// assert_eq!(hand.hand_rank(), HandRank::Flush);
    /// ```
    #[must_use]
    pub fn hand_rank(&self) -> HandRank {
        if self.has_royal_flush() {
            return HandRank::RoyalFlush;
        }
        if self.has_flush() {
            return HandRank::Flush;
        }
        HandRank::HighCard
    }

    /// Classifies the hand like [`hand_rank`](Hand::hand_rank), but rejects
    /// an empty hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::EmptyHand`] if the hand holds no cards.
    pub fn evaluate(&self) -> Result<HandRank, HandError> {
        if self.is_empty() {
            return Err(HandError::EmptyHand);
        }
        Ok(self.hand_rank())
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        for card in iter {
            self.draw(card);
        }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut hand = Self::new();
        hand.extend(iter);
        hand
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
