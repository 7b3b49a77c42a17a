use std::collections::HashSet;

use headsup_engine::cards::full_deck;
use headsup_engine::deck::Deck;

#[test]
fn full_deck_has_52_unique_cards() {
    let cards: HashSet<_> = full_deck().into_iter().collect();
    assert_eq!(cards.len(), 52);
}

#[test]
fn deal_draws_nine_distinct_cards() {
    let mut deck = Deck::new_with_seed(3);
    let deal = deck.deal().unwrap();
    let mut seen = HashSet::new();
    for c in deal.hand.iter().chain(&deal.opp_hand).chain(&deal.board) {
        assert!(seen.insert(*c), "duplicate card {}", c);
    }
    assert_eq!(seen.len(), 9);
    assert_eq!(deck.remaining(), 43);
}

#[test]
fn same_seed_replays_the_same_deals() {
    let mut a = Deck::new_with_seed(42);
    let mut b = Deck::new_with_seed(42);
    for _ in 0..5 {
        assert_eq!(a.deal().unwrap(), b.deal().unwrap());
    }
}

#[test]
fn consecutive_deals_reshuffle() {
    let mut deck = Deck::new_with_seed(42);
    let first = deck.deal().unwrap();
    let second = deck.deal().unwrap();
    assert_ne!(first, second);
    assert_eq!(deck.remaining(), 43);
}

#[test]
fn deal_card_stops_when_empty() {
    let mut deck = Deck::new_with_seed(1);
    deck.shuffle();
    let drawn: Vec<_> = std::iter::from_fn(|| deck.deal_card()).collect();
    assert_eq!(drawn.len(), 52);
    assert_eq!(deck.deal_card(), None);
}
