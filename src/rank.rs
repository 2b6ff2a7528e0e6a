//! Hand ranking categories.

use core::fmt;

/// Ranking category of a hand.
///
/// Variants are ordered by priority, so `HighCard < Flush < RoyalFlush`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// No better category applies.
    HighCard,
    /// All cards share one suit.
    Flush,
    /// A flush made only of Ten through Ace.
    RoyalFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HighCard => "high card",
            Self::Flush => "flush",
            Self::RoyalFlush => "royal flush",
        })
    }
}
