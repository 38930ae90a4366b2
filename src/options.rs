//! Deck configuration options.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::{SUITS, VALUES};

/// Algorithm used to shuffle a deck in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ShuffleMode {
    /// Unbiased Fisher-Yates shuffle.
    #[default]
    FisherYates,
    /// Swap every position with a target drawn from `[0, len - 1)`.
    ///
    /// The last position is never drawn as a target, so the resulting
    /// permutations are not uniformly distributed. Use it when decks must
    /// be shuffled exactly like decks produced by older tooling.
    Legacy,
}

/// Configuration for building and shuffling decks.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::{DeckOptions, ShuffleMode};
///
/// let options = DeckOptions::default()
///     .with_values(["Jack", "Queen", "King"])
///     .with_suits(["Hearts", "Spades"])
///     .with_shuffle(ShuffleMode::Legacy);
/// assert_eq!(options.card_count(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Card values, in generation order (inner loop).
    pub values: Vec<String>,
    /// Card suits, in generation order (outer loop).
    pub suits: Vec<String>,
    /// Shuffle algorithm.
    pub shuffle: ShuffleMode,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            values: VALUES.iter().map(ToString::to_string).collect(),
            suits: SUITS.iter().map(ToString::to_string).collect(),
            shuffle: ShuffleMode::default(),
        }
    }
}

impl DeckOptions {
    /// Sets the card values.
    ///
    /// Values are not validated; a value containing `,` cannot survive a
    /// serialization round trip.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_values(["Ace", "King"]);
    /// assert_eq!(options.values, ["Ace", "King"]);
    /// ```
    #[must_use]
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the card suits.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_suits(["Hearts"]);
    /// assert_eq!(options.suits, ["Hearts"]);
    /// ```
    #[must_use]
    pub fn with_suits<I, S>(mut self, suits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suits = suits.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the shuffle algorithm.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, ShuffleMode};
    ///
    /// let options = DeckOptions::default().with_shuffle(ShuffleMode::Legacy);
    /// assert_eq!(options.shuffle, ShuffleMode::Legacy);
    /// ```
    #[must_use]
    pub fn with_shuffle(mut self, mode: ShuffleMode) -> Self {
        self.shuffle = mode;
        self
    }

    /// Number of cards a deck built from these options contains.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.values.len() * self.suits.len()
    }
}
