//! A playing-card deck library with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that can be generated, dealt,
//! shuffled, encoded to a comma-delimited text form, and (with `std`)
//! saved to and loaded from files.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, ShuffleMode, Shuffler, codec};
//!
//! let mut deck = Deck::new();
//! Shuffler::new(ShuffleMode::FisherYates, 42).shuffle(&mut deck);
//!
//! let (hand, rest) = deck.clone().deal(5).unwrap();
//! assert_eq!(hand.len() + rest.len(), deck.len());
//! assert_eq!(codec::decode(&codec::encode(&deck)), deck);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod codec;
pub mod deck;
pub mod error;
pub mod options;
pub mod shuffle;
#[cfg(feature = "std")]
pub mod store;

// Re-export main types
pub use card::{Card, DECK_SIZE, SEPARATOR, SUITS, VALUES};
pub use deck::{Deck, Listing, deal};
pub use error::DealError;
#[cfg(feature = "std")]
pub use error::StoreError;
pub use options::{DeckOptions, ShuffleMode};
pub use shuffle::Shuffler;
#[cfg(feature = "std")]
pub use store::{load, save};
