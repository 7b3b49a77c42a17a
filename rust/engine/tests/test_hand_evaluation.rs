use std::cmp::Ordering;

use headsup_engine::cards::{parse_cards, Card};
use headsup_engine::hand::{compare, evaluate, evaluate_categories, Category, HandRank};

fn hand(s: &str) -> [Card; 2] {
    parse_cards(s).unwrap().try_into().unwrap()
}

fn board(s: &str) -> [Card; 5] {
    parse_cards(s).unwrap().try_into().unwrap()
}

#[test]
fn board_straight_is_eleven_high() {
    let b = board("7C 8H 9D TD JH");
    assert_eq!(evaluate(&hand("2s 3s"), &b), HandRank::Straight { high: 11 });
}

#[test]
fn wheel_is_five_high_and_loses_to_six_high() {
    let b = board("2c 3h 4s 5d Kc");
    let wheel = hand("As Qd");
    let six_high = hand("6h 9c");
    assert_eq!(evaluate(&wheel, &b), HandRank::Straight { high: 5 });
    assert_eq!(evaluate(&six_high, &b), HandRank::Straight { high: 6 });
    assert_eq!(compare(&wheel, &six_high, &b), Ordering::Less);
}

#[test]
fn same_straight_splits_and_higher_straight_wins() {
    let b = board("7c 8h 9d Td Jh");
    assert_eq!(compare(&hand("2s 3s"), &hand("2h 4c"), &b), Ordering::Equal);
    assert_eq!(compare(&hand("Qs 4c"), &hand("2h 4d"), &b), Ordering::Greater);
}

#[test]
fn flush_uses_the_five_highest_suited_cards() {
    let b = board("Kh 9h 4h 3h Qc");
    let ace_flush = hand("Ah 2h");
    assert_eq!(evaluate(&ace_flush, &b), HandRank::Flush([14, 13, 9, 4, 3]));
    assert_eq!(compare(&ace_flush, &hand("5h 6c"), &b), Ordering::Greater);
}

#[test]
fn board_flush_is_a_split() {
    let b = board("Ah Kh 9h 4h 3h");
    let small_pair = hand("2c 2d");
    assert_eq!(evaluate(&small_pair, &b).category(), Category::Flush);
    assert_eq!(compare(&small_pair, &hand("5c 6d"), &b), Ordering::Equal);
}

#[test]
fn full_house_outranks_flush() {
    let b = board("Kh Kd 9h 4h 2c");
    let boat = hand("9c 9s");
    assert_eq!(
        evaluate(&boat, &b),
        HandRank::FullHouse {
            trips: 9,
            pair: 13
        }
    );
    assert_eq!(compare(&boat, &hand("Ah 3h"), &b), Ordering::Greater);
}

#[test]
fn second_trips_plays_as_the_pair() {
    let b = board("8h 5s 5c 5d Kc");
    assert_eq!(
        evaluate(&hand("8c 8d"), &b),
        HandRank::FullHouse { trips: 8, pair: 5 }
    );
}

#[test]
fn two_pair_keeps_the_two_highest_pairs() {
    let b = board("5s 5h 3c 3d Ac");
    let queens = hand("Qc Qd");
    assert_eq!(
        evaluate(&queens, &b),
        HandRank::TwoPair {
            high: 12,
            low: 5,
            kicker: 14
        }
    );
    assert_eq!(compare(&queens, &hand("Kc 2s"), &b), Ordering::Greater);
}

#[test]
fn pair_kickers_break_ties() {
    let b = board("Kh Ks 9d 4c 2h");
    assert_eq!(
        evaluate(&hand("Ad 7c"), &b),
        HandRank::OnePair {
            pair: 13,
            kickers: [14, 9, 7]
        }
    );
    assert_eq!(compare(&hand("Ad 7c"), &hand("Ac 6d"), &b), Ordering::Greater);
}

#[test]
fn quads_on_board_play_the_best_kicker() {
    let b = board("9c 9d 9h 9s Ac");
    assert_eq!(compare(&hand("2c 3d"), &hand("Kh Qh"), &b), Ordering::Equal);
}

#[test]
fn suited_run_ranks_as_a_flush() {
    let b = board("7h 6h 5h Kc Kd");
    let run = hand("9h 8h");
    assert_eq!(evaluate(&run, &b), HandRank::Flush([9, 8, 7, 6, 5]));
    assert_eq!(compare(&run, &hand("Kh 2c"), &b), Ordering::Greater);
}

#[test]
fn categories_are_reported_independently() {
    let ranks = evaluate_categories(&hand("As Ad"), &board("Ac Kd Kh 2s 3c"));
    assert_eq!(ranks.full_house, Some((14, 13)));
    assert_eq!(ranks.three_of_a_kind, Some((14, 13, 3)));
    assert_eq!(ranks.flush, None);
    assert_eq!(ranks.straight, None);
    assert_eq!(ranks.four_of_a_kind, None);
    assert_eq!(ranks.high_card, [14, 13, 3, 2, 0]);
    assert_eq!(ranks.best().category(), Category::FullHouse);
}

#[test]
fn comparison_is_mirrored() {
    let cases = [
        ("As Qd", "6h 9c", "2c 3h 4s 5d Kc"),
        ("9c 9s", "Ah 3h", "Kh Kd 9h 4h 2c"),
        ("Ad 7c", "Ac 6d", "Kh Ks 9d 4c 2h"),
        ("2c 3d", "Kh Qh", "9c 9d 9h 9s Ac"),
    ];
    for (a, b, brd) in cases {
        let (a, b, brd) = (hand(a), hand(b), board(brd));
        assert_eq!(compare(&a, &b, &brd), compare(&b, &a, &brd).reverse());
    }
}
