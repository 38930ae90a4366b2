//! Comma-delimited text form of a deck.
//!
//! A deck is written as its canonical card strings joined by [`DELIMITER`],
//! with no trailing delimiter and no escaping.

use alloc::string::String;
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::deck::Deck;

/// Delimiter between cards.
pub const DELIMITER: char = ',';

/// Encodes `deck` as a single comma-delimited string.
///
/// ```
/// use deckrs::{Deck, codec};
///
/// let text = codec::encode(&Deck::new());
/// assert!(text.starts_with("Ace  of  Spades,Two  of  Spades,"));
/// assert!(text.ends_with("Four  of  Clubs"));
/// ```
#[must_use]
pub fn encode(deck: &Deck) -> String {
    let capacity = deck.iter().map(|card| card.as_str().len() + 1).sum();
    let mut text = String::with_capacity(capacity);
    for (i, card) in deck.iter().enumerate() {
        if i > 0 {
            text.push(DELIMITER);
        }
        text.push_str(card.as_str());
    }
    text
}

/// Decodes a comma-delimited string into a deck, one card per segment.
///
/// Segments are not validated. An empty string decodes to a deck holding
/// a single empty card, and a trailing delimiter yields a trailing empty
/// card.
#[must_use]
pub fn decode(text: &str) -> Deck {
    text.split(DELIMITER).map(Card::from_canonical).collect()
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "{DELIMITER}")?;
            }
            f.write_str(card.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for Deck {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(decode(text))
    }
}

impl From<&str> for Deck {
    fn from(text: &str) -> Self {
        decode(text)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_matches_encode() {
        let deck = Deck::new();
        assert_eq!(deck.to_string(), encode(&deck));
    }

    #[test]
    fn empty_text_yields_one_empty_card() {
        let deck = decode("");
        assert_eq!(deck.len(), 1);
        assert_eq!(deck[0], "");
    }

    #[test]
    fn empty_deck_encodes_to_empty_text() {
        assert_eq!(encode(&Deck::default()), "");
    }

    #[test]
    fn trailing_delimiter_keeps_empty_segment() {
        let deck = decode("Ace  of  Spades,");
        assert_eq!(deck.len(), 2);
        assert_eq!(deck[1], "");
    }

    #[test]
    fn comma_inside_card_splits_it() {
        let deck = Deck::from_cards(alloc::vec![Card::new("Ace, high", "Spades")]);
        assert_eq!(decode(&encode(&deck)).len(), 2);
    }
}
