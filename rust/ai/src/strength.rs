//! Hand-strength estimation by full enumeration.
//!
//! The bot's two cards are compared against every two-card hand the human
//! could hold on the fully dealt board. Strength is the share of those hands
//! the bot beats, with splits counting half.

use std::cmp::Ordering;

use headsup_engine::cards::{full_deck, Card};
use headsup_engine::hand::compare;
use tracing::debug;

/// Which cards may appear in the enumerated candidate hands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CandidatePool {
    /// Every card except the known hand (1225 hands)
    Baseline,
    /// Also drops the board cards, which cannot be in the human's hand (990 hands)
    #[default]
    ExcludeBoard,
}

/// Every unordered two-card hand drawable from the pool.
pub fn candidate_hands(known: &[Card; 2], board: &[Card; 5], pool: CandidatePool) -> Vec<[Card; 2]> {
    let deck: Vec<Card> = full_deck()
        .into_iter()
        .filter(|c| !known.contains(c))
        .filter(|c| pool == CandidatePool::Baseline || !board.contains(c))
        .collect();

    let mut hands = Vec::with_capacity(deck.len() * (deck.len() - 1) / 2);
    for (i, &first) in deck.iter().enumerate() {
        for &second in &deck[i + 1..] {
            hands.push([first, second]);
        }
    }
    hands
}

/// Probability in `[0, 1]` that `known` beats a random candidate hand.
///
/// Recomputed on every call; nothing is cached between streets.
pub fn estimate_strength(known: &[Card; 2], board: &[Card; 5], pool: CandidatePool) -> f64 {
    let candidates = candidate_hands(known, board, pool);
    let score: f64 = candidates
        .iter()
        .map(|candidate| match compare(known, candidate, board) {
            Ordering::Greater => 1.0,
            Ordering::Equal => 0.5,
            Ordering::Less => 0.0,
        })
        .sum();
    let strength = score / candidates.len() as f64;
    debug!(
        hand = %format!("{}{}", known[0], known[1]),
        candidates = candidates.len(),
        strength,
        "estimated hand strength"
    );
    strength
}

#[cfg(test)]
mod tests {
    use super::*;
    use headsup_engine::cards::parse_cards;

    fn hand(s: &str) -> [Card; 2] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    fn board(s: &str) -> [Card; 5] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn pool_sizes() {
        let known = hand("As Ah");
        let b = board("Ad Kc 7h 4s 2d");
        assert_eq!(candidate_hands(&known, &b, CandidatePool::Baseline).len(), 1225);
        assert_eq!(candidate_hands(&known, &b, CandidatePool::ExcludeBoard).len(), 990);
    }

    #[test]
    fn excluded_pool_never_reuses_a_board_card() {
        let known = hand("As Ah");
        let b = board("Ad Kc 7h 4s 2d");
        let hands = candidate_hands(&known, &b, CandidatePool::ExcludeBoard);
        assert!(hands.iter().flatten().all(|c| !b.contains(c) && !known.contains(c)));
    }

    #[test]
    fn trip_aces_are_strong() {
        let s = estimate_strength(&hand("As Ah"), &board("Ad Kc 7h 4s 2d"), CandidatePool::default());
        assert!(s >= 0.9, "strength {}", s);
        assert!(s <= 1.0);
    }

    #[test]
    fn seven_deuce_on_a_high_board_is_weak() {
        let s = estimate_strength(&hand("7c 2d"), &board("Ah Kh Qs 9c 4d"), CandidatePool::default());
        assert!(s < 0.4, "strength {}", s);
        assert!(s >= 0.0);
    }

    #[test]
    fn board_straight_splits_with_everyone() {
        // no pair and only two hearts on board: nothing beats the broadway run
        let s = estimate_strength(&hand("2c 3d"), &board("Ah Kh Qs Jc Td"), CandidatePool::default());
        assert_eq!(s, 0.5);
    }
}
