//! Ordered decks: generation, dealing, and the diagnostic listing.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::slice;

use crate::card::Card;
use crate::error::DealError;
use crate::options::DeckOptions;

/// An ordered sequence of cards.
///
/// Order is meaningful: it is the deal order and the shuffle output. A deck
/// is plain data with no interior synchronization; mutation goes through
/// `&mut`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the default deck of 16 cards.
    ///
    /// Suits form the outer loop and values the inner loop, so the deck
    /// starts with `Ace  of  Spades` and ends with `Four  of  Clubs`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), 16);
    /// assert_eq!(deck[0], "Ace  of  Spades");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_options(&DeckOptions::default())
    }

    /// Creates a deck from the vocabularies in `options`.
    ///
    /// Card `i * values.len() + j` is `(values[j], suits[i])`.
    #[must_use]
    pub fn from_options(options: &DeckOptions) -> Self {
        let mut cards = Vec::with_capacity(options.card_count());

        for suit in &options.suits {
            for value in &options.values {
                cards.push(Card::new(value, suit));
            }
        }

        Self { cards }
    }

    /// Creates a deck holding `cards` in the given order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterates over the cards in order.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Consumes the deck, returning its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Splits the deck into a hand of `hand_size` cards and the remainder.
    ///
    /// The hand holds indices `[0, hand_size)` and the remainder the rest,
    /// both in the original order.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::HandSizeOutOfRange`] if `hand_size` exceeds the
    /// number of cards.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let (hand, rest) = Deck::new().deal(5).unwrap();
    /// assert_eq!(hand.len(), 5);
    /// assert_eq!(rest.len(), 11);
    /// ```
    pub fn deal(mut self, hand_size: usize) -> Result<(Self, Self), DealError> {
        self.check_hand_size(hand_size)?;
        let remainder = self.cards.split_off(hand_size);
        log::debug!("dealt {} cards, {} remain", hand_size, remainder.len());
        Ok((self, Self { cards: remainder }))
    }

    /// Borrowing variant of [`deal`](Self::deal).
    ///
    /// # Errors
    ///
    /// Returns [`DealError::HandSizeOutOfRange`] if `hand_size` exceeds the
    /// number of cards.
    pub fn deal_ref(&self, hand_size: usize) -> Result<(&[Card], &[Card]), DealError> {
        self.check_hand_size(hand_size)?;
        Ok(self.cards.split_at(hand_size))
    }

    fn check_hand_size(&self, hand_size: usize) -> Result<(), DealError> {
        if hand_size > self.cards.len() {
            return Err(DealError::HandSizeOutOfRange {
                requested: hand_size,
                available: self.cards.len(),
            });
        }
        Ok(())
    }

    /// Returns the index-prefixed listing printed by [`print`](Self::print).
    #[must_use]
    pub const fn listing(&self) -> Listing<'_> {
        Listing { deck: self }
    }

    /// Prints each card prefixed by its zero-based index to stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        std::print!("{}", self.listing());
    }
}

/// Splits `deck` into a hand of `hand_size` cards and the remainder.
///
/// # Errors
///
/// Returns [`DealError::HandSizeOutOfRange`] if `hand_size` exceeds the
/// number of cards.
pub fn deal(deck: Deck, hand_size: usize) -> Result<(Deck, Deck), DealError> {
    deck.deal(hand_size)
}

/// Index-prefixed card listing, one card per line.
#[derive(Debug, Clone, Copy)]
pub struct Listing<'a> {
    deck: &'a Deck,
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.deck.iter().enumerate() {
            writeln!(f, "{i} {card}")?;
        }
        Ok(())
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}
