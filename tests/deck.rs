//! Deck integration tests.

use std::io::ErrorKind;

use deckrs::{
    Card, DECK_SIZE, DealError, Deck, DeckOptions, SEPARATOR, ShuffleMode, Shuffler, StoreError,
    codec, deal,
};

fn sorted(deck: &Deck) -> Vec<Card> {
    let mut cards = deck.cards().to_vec();
    cards.sort();
    cards
}

#[test]
fn new_deck_has_sixteen_cards_in_order() {
    let deck = Deck::new();

    assert_eq!(deck.len(), 16);
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck[0], "Ace  of  Spades");
    assert_eq!(deck[1], "Two  of  Spades");
    assert_eq!(deck[4], "Ace  of  Diamonds");
    assert_eq!(deck[15], "Four  of  Clubs");
}

#[test]
fn new_deck_cards_are_unique() {
    let deck = Deck::new();
    let mut cards = sorted(&deck);
    cards.dedup();
    assert_eq!(cards.len(), deck.len());
}

#[test]
fn custom_vocabulary_is_row_major_over_suits() {
    let options = DeckOptions::default()
        .with_values(["Jack", "Queen", "King"])
        .with_suits(["Hearts", "Spades"]);
    let deck = Deck::from_options(&options);

    assert_eq!(deck.len(), options.card_count());
    for (i, suit) in options.suits.iter().enumerate() {
        for (j, value) in options.values.iter().enumerate() {
            let card = &deck[i * options.values.len() + j];
            assert_eq!(card.value(), Some(value.as_str()));
            assert_eq!(card.suit(), Some(suit.as_str()));
        }
    }
}

#[test]
fn default_options_match_new_deck() {
    assert_eq!(Deck::from_options(&DeckOptions::default()), Deck::new());
    assert_eq!(DeckOptions::default().shuffle, ShuffleMode::FisherYates);
}

#[test]
fn deal_partitions_by_index_for_every_hand_size() {
    let deck = Deck::new();

    for hand_size in 0..=deck.len() {
        let (hand, rest) = deal(deck.clone(), hand_size).unwrap();
        assert_eq!(hand.len(), hand_size);
        assert_eq!(rest.len(), deck.len() - hand_size);

        let rejoined: Deck = hand.into_iter().chain(rest).collect();
        assert_eq!(rejoined, deck);
    }
}

#[test]
fn deal_rejects_oversized_hand() {
    let err = Deck::new().deal(17).unwrap_err();
    assert_eq!(
        err,
        DealError::HandSizeOutOfRange {
            requested: 17,
            available: 16,
        }
    );
    assert_eq!(err.to_string(), "cannot deal 17 cards from a deck of 16");

    assert!(Deck::default().deal_ref(1).is_err());
    assert!(Deck::default().deal(0).is_ok());
}

#[test]
fn encode_joins_with_single_commas() {
    let deck = Deck::from_options(
        &DeckOptions::default()
            .with_values(["Ace", "Two"])
            .with_suits(["Clubs"]),
    );
    assert_eq!(codec::encode(&deck), "Ace  of  Clubs,Two  of  Clubs");
    assert_eq!(deck.to_string(), "Ace  of  Clubs,Two  of  Clubs");
}

#[test]
fn text_round_trip_preserves_order() {
    let mut deck = Deck::new();
    Shuffler::from_seed(3).shuffle(&mut deck);

    assert_eq!(codec::decode(&codec::encode(&deck)), deck);
    assert_eq!(deck.to_string().parse::<Deck>().unwrap(), deck);
}

#[test]
fn decoded_cards_keep_separator_parts() {
    let deck = codec::decode("Ace  of  Spades,Joker");
    assert_eq!(deck[0].value(), Some("Ace"));
    assert_eq!(deck[0].suit(), Some("Spades"));
    assert_eq!(deck[1].value(), None);
    assert!(!deck[1].as_str().contains(SEPARATOR));
}

#[test]
fn file_round_trip_preserves_deck() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("_decktesting");

    let mut deck = Deck::new();
    Shuffler::new(ShuffleMode::Legacy, 11).shuffle(&mut deck);
    deck.save_to_file(&path).unwrap();

    let loaded = Deck::from_file(&path).unwrap();
    assert_eq!(loaded.len(), 16);
    assert_eq!(loaded, deck);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), codec::encode(&deck));
}

#[test]
fn save_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck");

    deckrs::save(&Deck::new(), &path).unwrap();
    let (hand, _) = Deck::new().deal(2).unwrap();
    deckrs::save(&hand, &path).unwrap();

    assert_eq!(deckrs::load(&path).unwrap(), hand);
}

#[test]
fn load_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing");

    let err = deckrs::load(&path).unwrap_err();
    assert!(matches!(err, StoreError::Read { .. }));
    assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
    assert_eq!(err.path(), path);
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn save_into_missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("deck");
    let deck = Deck::new();

    let err = deck.save_to_file(&path).unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
    assert_eq!(deck, Deck::new());
}

#[test]
fn empty_file_loads_one_empty_card() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty");
    std::fs::write(&path, "").unwrap();

    let deck = deckrs::load(&path).unwrap();
    assert_eq!(deck.len(), 1);
    assert_eq!(deck[0], "");
}

#[test]
fn shuffle_preserves_multiset() {
    for mode in [ShuffleMode::FisherYates, ShuffleMode::Legacy] {
        let original = Deck::new();
        let mut shuffler = Shuffler::new(mode, 5);

        for _ in 0..20 {
            let mut deck = original.clone();
            shuffler.shuffle(&mut deck);
            assert_eq!(deck.len(), original.len());
            assert_eq!(sorted(&deck), sorted(&original));
        }
    }
}

#[test]
fn clock_shuffle_preserves_multiset() {
    let original = Deck::new();
    let mut deck = original.clone();
    deck.shuffle();
    assert_eq!(sorted(&deck), sorted(&original));
}

#[test]
fn same_seed_gives_same_order() {
    for mode in [ShuffleMode::FisherYates, ShuffleMode::Legacy] {
        let mut a = Deck::new();
        let mut b = Deck::new();
        Shuffler::new(mode, 99).shuffle(&mut a);
        Shuffler::new(mode, 99).shuffle(&mut b);
        assert_eq!(a, b);
    }
}

#[test]
fn shuffler_state_advances_between_calls() {
    let mut shuffler = Shuffler::from_options(&DeckOptions::default(), 8);
    let mut first = Deck::new();
    let mut second = Deck::new();
    shuffler.shuffle(&mut first);
    shuffler.shuffle(&mut second);

    assert_eq!(shuffler.mode(), ShuffleMode::FisherYates);
    assert_ne!(first, second);
}

#[test]
fn shuffling_empty_deck_is_a_no_op() {
    let mut deck = Deck::default();
    Shuffler::new(ShuffleMode::Legacy, 1).shuffle(&mut deck);
    assert!(deck.is_empty());
}
