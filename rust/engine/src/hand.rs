//! Seven-card hand evaluation.
//!
//! Every category is computed independently from the two hole cards plus the
//! five board cards ([`evaluate_categories`]); the best category present, with its
//! tie-break tuple, becomes a [`HandRank`]. Ranks are plain `u8` values 2..=14.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Hand categories in ascending precedence.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "high card",
            Category::OnePair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
        };
        f.write_str(name)
    }
}

/// The best category a hand makes, carrying its tie-break tuple.
///
/// Variants are declared in ascending precedence, so the derived `Ord` compares
/// category first and then the tuple lexicographically, higher-first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandRank {
    HighCard([u8; 5]),
    OnePair { pair: u8, kickers: [u8; 3] },
    TwoPair { high: u8, low: u8, kicker: u8 },
    ThreeOfAKind { trips: u8, kickers: [u8; 2] },
    Straight { high: u8 },
    Flush([u8; 5]),
    FullHouse { trips: u8, pair: u8 },
    FourOfAKind { quads: u8, kicker: u8 },
}

impl HandRank {
    pub fn category(&self) -> Category {
        match self {
            HandRank::HighCard(_) => Category::HighCard,
            HandRank::OnePair { .. } => Category::OnePair,
            HandRank::TwoPair { .. } => Category::TwoPair,
            HandRank::ThreeOfAKind { .. } => Category::ThreeOfAKind,
            HandRank::Straight { .. } => Category::Straight,
            HandRank::Flush(_) => Category::Flush,
            HandRank::FullHouse { .. } => Category::FullHouse,
            HandRank::FourOfAKind { .. } => Category::FourOfAKind,
        }
    }
}

/// One ranking tuple per category; `None` means the category is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRanks {
    /// (quad rank, kicker)
    pub four_of_a_kind: Option<(u8, u8)>,
    /// (trips rank, pair rank)
    pub full_house: Option<(u8, u8)>,
    /// Top five ranks of the flush suit, descending
    pub flush: Option<[u8; 5]>,
    /// High card of the best straight (5 for the wheel)
    pub straight: Option<u8>,
    /// (trips rank, kicker1, kicker2)
    pub three_of_a_kind: Option<(u8, u8, u8)>,
    /// (high pair, low pair, kicker)
    pub two_pair: Option<(u8, u8, u8)>,
    /// (pair rank, kicker1, kicker2, kicker3)
    pub one_pair: Option<(u8, u8, u8, u8)>,
    /// Top five distinct ranks, descending
    pub high_card: [u8; 5],
}

impl CategoryRanks {
    /// The first category present in precedence order.
    pub fn best(&self) -> HandRank {
        if let Some((quads, kicker)) = self.four_of_a_kind {
            return HandRank::FourOfAKind { quads, kicker };
        }
        if let Some((trips, pair)) = self.full_house {
            return HandRank::FullHouse { trips, pair };
        }
        if let Some(ranks) = self.flush {
            return HandRank::Flush(ranks);
        }
        if let Some(high) = self.straight {
            return HandRank::Straight { high };
        }
        if let Some((trips, k1, k2)) = self.three_of_a_kind {
            return HandRank::ThreeOfAKind {
                trips,
                kickers: [k1, k2],
            };
        }
        if let Some((high, low, kicker)) = self.two_pair {
            return HandRank::TwoPair { high, low, kicker };
        }
        if let Some((pair, k1, k2, k3)) = self.one_pair {
            return HandRank::OnePair {
                pair,
                kickers: [k1, k2, k3],
            };
        }
        HandRank::HighCard(self.high_card)
    }
}

pub fn seven_cards(hand: &[Card; 2], board: &[Card; 5]) -> [Card; 7] {
    [
        hand[0], hand[1], board[0], board[1], board[2], board[3], board[4],
    ]
}

pub fn evaluate_categories(hand: &[Card; 2], board: &[Card; 5]) -> CategoryRanks {
    let cards = seven_cards(hand, board);
    let counts = rank_counts(&cards);

    CategoryRanks {
        four_of_a_kind: detect_quads(&counts),
        full_house: detect_full_house(&counts),
        flush: detect_flush(&cards),
        straight: straight_high_from_mask(rank_mask(&cards)),
        three_of_a_kind: detect_trips(&counts),
        two_pair: detect_two_pair(&counts),
        one_pair: detect_pair(&counts),
        high_card: top_n::<5>(&counts, &[]),
    }
}

pub fn evaluate(hand: &[Card; 2], board: &[Card; 5]) -> HandRank {
    evaluate_categories(hand, board).best()
}

/// Compares two hands on a shared board: `Greater` means `a` wins, `Less`
/// means `b` wins, `Equal` is a split.
pub fn compare(a: &[Card; 2], b: &[Card; 2], board: &[Card; 5]) -> Ordering {
    evaluate(a, board).cmp(&evaluate(b, board))
}

fn rank_counts(cards: &[Card; 7]) -> [u8; 15] {
    let mut counts = [0u8; 15]; // 2..14 used
    for c in cards {
        counts[c.rank.value() as usize] += 1;
    }
    counts
}

fn rank_mask(cards: &[Card]) -> u16 {
    cards
        .iter()
        .fold(0u16, |m, c| m | (1u16 << c.rank.value()))
}

/// Highest rank with exactly `n` copies, excluding `skip`.
fn highest_with(counts: &[u8; 15], n: u8, skip: &[u8]) -> Option<u8> {
    (2..=14u8)
        .rev()
        .find(|&r| counts[r as usize] == n && !skip.contains(&r))
}

/// The `N` highest distinct ranks present, skipping `skip`, zero padded.
fn top_n<const N: usize>(counts: &[u8; 15], skip: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    let ranks = (2..=14u8)
        .rev()
        .filter(|&r| counts[r as usize] > 0 && !skip.contains(&r));
    for (slot, r) in out.iter_mut().zip(ranks) {
        *slot = r;
    }
    out
}

fn detect_quads(counts: &[u8; 15]) -> Option<(u8, u8)> {
    let quad = highest_with(counts, 4, &[])?;
    let [kicker] = top_n::<1>(counts, &[quad]);
    Some((quad, kicker))
}

fn detect_full_house(counts: &[u8; 15]) -> Option<(u8, u8)> {
    let trips = highest_with(counts, 3, &[])?;
    // a second set of trips plays as the pair
    let pair = (2..=14u8)
        .rev()
        .find(|&r| r != trips && counts[r as usize] >= 2)?;
    Some((trips, pair))
}

fn detect_flush(cards: &[Card; 7]) -> Option<[u8; 5]> {
    let mut by_suit: [Vec<u8>; 4] = [vec![], vec![], vec![], vec![]];
    for c in cards {
        by_suit[c.suit.index()].push(c.rank.value());
    }
    let mut ranks = by_suit.into_iter().find(|ranks| ranks.len() >= 5)?;
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    let mut k = [0u8; 5];
    k.copy_from_slice(&ranks[..5]);
    Some(k)
}

fn straight_high_from_mask(mask: u16) -> Option<u8> {
    // Treat Ace as 14 and optionally as 1
    let mut m = mask;
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    // Sliding 5-bit window from Ace(14) down to 5
    (5..=14u8).rev().find(|&high| {
        let window = 0b1_1111u16 << (high - 4);
        (m & window) == window
    })
}

fn detect_trips(counts: &[u8; 15]) -> Option<(u8, u8, u8)> {
    let trips = highest_with(counts, 3, &[])?;
    let [k1, k2] = top_n::<2>(counts, &[trips]);
    Some((trips, k1, k2))
}

fn detect_two_pair(counts: &[u8; 15]) -> Option<(u8, u8, u8)> {
    let high = highest_with(counts, 2, &[])?;
    let low = highest_with(counts, 2, &[high])?;
    let [kicker] = top_n::<1>(counts, &[high, low]);
    Some((high, low, kicker))
}

fn detect_pair(counts: &[u8; 15]) -> Option<(u8, u8, u8, u8)> {
    let pair = highest_with(counts, 2, &[])?;
    let [k1, k2, k3] = top_n::<3>(counts, &[pair]);
    Some((pair, k1, k2, k3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_mask_finds_best_window() {
        // 5..9 plus an Ace: best straight is 9 high
        let mask = (1 << 5) | (1 << 6) | (1 << 7) | (1 << 8) | (1 << 9) | (1 << 14);
        assert_eq!(straight_high_from_mask(mask), Some(9));
    }

    #[test]
    fn straight_mask_wheel_with_broadway_cards() {
        // A K Q plus 2 3 4 5
        let mask = (1 << 14) | (1 << 13) | (1 << 12) | (1 << 2) | (1 << 3) | (1 << 4) | (1 << 5);
        assert_eq!(straight_high_from_mask(mask), Some(5));
    }

    #[test]
    fn four_gap_is_not_a_straight() {
        let mask = (1 << 2) | (1 << 3) | (1 << 4) | (1 << 5) | (1 << 7);
        assert_eq!(straight_high_from_mask(mask), None);
    }

    #[test]
    fn top_n_pads_with_zero() {
        let mut counts = [0u8; 15];
        counts[9] = 3;
        counts[4] = 4;
        assert_eq!(top_n::<2>(&counts, &[9]), [4, 0]);
    }
}
