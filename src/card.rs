//! Card types and the canonical card string.

use alloc::format;
use alloc::string::String;
use core::fmt;

/// Separator between the value and the suit in a canonical card string.
///
/// The doubled spaces are part of the persisted format.
pub const SEPARATOR: &str = "  of  ";

/// A playing card, identified by its canonical string `"<value>  of  <suit>"`.
///
/// Equality, ordering, and hashing are structural over the canonical string.
/// Cards read back from text are not validated, so a card may lack the
/// separator entirely (for example the empty card produced by decoding an
/// empty blob). Such a card has no [`value`](Self::value) or
/// [`suit`](Self::suit).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    canonical: String,
}

impl Card {
    /// Creates a card from a value and a suit.
    ///
    /// ```
    /// use deckrs::Card;
    ///
    /// let card = Card::new("Ace", "Spades");
    /// assert_eq!(card.as_str(), "Ace  of  Spades");
    /// ```
    #[must_use]
    pub fn new(value: &str, suit: &str) -> Self {
        Self {
            canonical: format!("{value}{SEPARATOR}{suit}"),
        }
    }

    /// Wraps an already rendered card string without inspecting it.
    #[must_use]
    pub fn from_canonical(canonical: impl Into<String>) -> Self {
        Self {
            canonical: canonical.into(),
        }
    }

    /// Returns the canonical string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Returns the value part, or `None` if the separator is missing.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.parts().map(|(value, _)| value)
    }

    /// Returns the suit part, or `None` if the separator is missing.
    #[must_use]
    pub fn suit(&self) -> Option<&str> {
        self.parts().map(|(_, suit)| suit)
    }

    fn parts(&self) -> Option<(&str, &str)> {
        self.canonical.split_once(SEPARATOR)
    }

    /// Consumes the card, returning its canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.canonical
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl AsRef<str> for Card {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl From<&str> for Card {
    fn from(canonical: &str) -> Self {
        Self::from_canonical(canonical)
    }
}

impl From<String> for Card {
    fn from(canonical: String) -> Self {
        Self::from_canonical(canonical)
    }
}

impl PartialEq<str> for Card {
    fn eq(&self, other: &str) -> bool {
        self.canonical == other
    }
}

impl PartialEq<&str> for Card {
    fn eq(&self, other: &&str) -> bool {
        self.canonical == *other
    }
}

/// Default card values, in generation order.
pub const VALUES: [&str; 4] = ["Ace", "Two", "Three", "Four"];

/// Default card suits, in generation order.
pub const SUITS: [&str; 4] = ["Spades", "Diamonds", "Hearts", "Clubs"];

/// Number of cards in a deck built from [`VALUES`] and [`SUITS`].
pub const DECK_SIZE: usize = VALUES.len() * SUITS.len();
