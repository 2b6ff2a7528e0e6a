//! Error types for hand and card operations.

use thiserror::Error;

/// Errors that can occur when evaluating a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand holds no cards.
    #[error("hand has no cards")]
    EmptyHand,
}

/// Errors that can occur when parsing a card from its notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is not exactly two characters.
    #[error("card notation must be exactly two characters")]
    InvalidLength,
    /// Unknown value character.
    #[error("invalid card value `{0}`")]
    InvalidValue(char),
    /// Unknown suit character.
    #[error("invalid card suit `{0}`")]
    InvalidSuit(char),
}
