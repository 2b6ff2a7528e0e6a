//! A playing-card hand with a simplified ranking, with optional `no_std` support.
//!
//! The crate provides a [`Hand`] that cards are drawn into one at a time and
//! that classifies its contents as a [`HandRank`]: high card, flush or royal
//! flush.
//!
//! # Example
//!
//! ```
//! use handrank::{Card, Hand, HandRank, Suit, Value};
//!
//! let mut hand = Hand::new();
//! hand.draw(Card::new(Suit::Spades, Value::Ten));
//! hand.draw(Card::new(Suit::Spades, Value::Ace));
//!
//! assert_eq!(hand.hand_rank(), HandRank::RoyalFlush);
//! assert_eq!(hand.high_card(), Ok(Card::new(Suit::Spades, Value::Ace)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod rank;

// Re-export main types
pub use card::{Card, Suit, Value};
pub use error::{HandError, ParseCardError};
pub use hand::Hand;
pub use rank::HandRank;
