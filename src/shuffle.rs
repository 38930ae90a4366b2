//! In-place deck shuffling.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::options::{DeckOptions, ShuffleMode};

/// Shuffles decks in place using its own random number generator.
///
/// The generator is seeded once, when the shuffler is created, and advances
/// with every shuffle.
///
/// # Example
///
/// ```
/// use deckrs::{Deck, ShuffleMode, Shuffler};
///
/// let mut deck = Deck::new();
/// let mut shuffler = Shuffler::new(ShuffleMode::FisherYates, 42);
/// shuffler.shuffle(&mut deck);
/// assert_eq!(deck.len(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct Shuffler {
    mode: ShuffleMode,
    rng: ChaCha8Rng,
}

impl Shuffler {
    /// Creates a shuffler with the given algorithm and seed.
    #[must_use]
    pub fn new(mode: ShuffleMode, seed: u64) -> Self {
        Self {
            mode,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a shuffler using the default algorithm and the given seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ShuffleMode::default(), seed)
    }

    /// Creates a shuffler using the algorithm configured in `options`.
    #[must_use]
    pub fn from_options(options: &DeckOptions, seed: u64) -> Self {
        Self::new(options.shuffle, seed)
    }

    /// Creates a shuffler seeded from the current wall-clock time in
    /// nanoseconds.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn from_clock(mode: ShuffleMode) -> Self {
        Self::new(mode, clock_seed())
    }

    /// Returns the configured algorithm.
    #[must_use]
    pub const fn mode(&self) -> ShuffleMode {
        self.mode
    }

    /// Shuffles `deck` in place. Decks of zero or one card are left as is.
    pub fn shuffle(&mut self, deck: &mut Deck) {
        let cards = deck.cards_mut();
        if cards.len() <= 1 {
            return;
        }

        match self.mode {
            ShuffleMode::FisherYates => cards.shuffle(&mut self.rng),
            ShuffleMode::Legacy => legacy_shuffle(cards, &mut self.rng),
        }
        log::debug!("shuffled {} cards ({:?})", cards.len(), self.mode);
    }
}

/// Swaps each position with a target drawn from `[0, len - 1)`.
///
/// Requires `cards.len() >= 2`.
fn legacy_shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    let bound = cards.len() - 1;
    for i in 0..cards.len() {
        let j = rng.random_range(0..bound);
        cards.swap(i, j);
    }
}

#[cfg(feature = "std")]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

#[cfg(feature = "std")]
impl Deck {
    /// Shuffles the deck in place with a freshly clock-seeded, unbiased
    /// shuffler.
    ///
    /// Use [`Shuffler`] directly for a deterministic seed or the
    /// [`ShuffleMode::Legacy`] algorithm.
    pub fn shuffle(&mut self) {
        Shuffler::from_clock(ShuffleMode::default()).shuffle(self);
    }
}
