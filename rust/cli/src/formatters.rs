//! Card, hand and table formatters for terminal display.
//!
//! Suits are drawn with Unicode symbols (♥ ♦ ♣ ♠) where the terminal is
//! expected to support them and with letters (h d c s) otherwise.
//!
//! ```rust
//! use headsup_engine::cards::{Card, Rank, Suit};
//! use headsup_cli::formatters::{format_card, format_cards};
//!
//! let ace = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace) == "A♠" || format_card(&ace) == "As");
//! assert!(format_cards(&[ace]).starts_with("[A"));
//! ```

use headsup_engine::cards::{Card, Rank, Suit};
use headsup_engine::engine::TableConfig;
use headsup_engine::game::GameState;
use headsup_engine::hand::HandRank;
use headsup_engine::player::Position;

/// Windows consoles only render the suit symbols in modern terminals; other
/// platforms are assumed to.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> &'static str {
    match (suit, supports_unicode()) {
        (Suit::Hearts, true) => "♥",
        (Suit::Diamonds, true) => "♦",
        (Suit::Clubs, true) => "♣",
        (Suit::Spades, true) => "♠",
        (Suit::Hearts, false) => "h",
        (Suit::Diamonds, false) => "d",
        (Suit::Clubs, false) => "c",
        (Suit::Spades, false) => "s",
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank, format_suit(card.suit))
}

/// Cards in brackets, e.g. `[A♠ K♠]`; `[]` for none.
pub fn format_cards(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", inner.join(" "))
}

fn rank_name(value: u8) -> String {
    Rank::from_u8(value)
        .map(|r| r.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Human-readable hand rank, e.g. `two pair, K and 7 (kicker 9)`.
pub fn describe_rank(rank: &HandRank) -> String {
    let category = rank.category();
    match *rank {
        HandRank::HighCard(cards) | HandRank::Flush(cards) => {
            format!("{}, {} high", category, rank_name(cards[0]))
        }
        HandRank::OnePair { pair, kickers } => {
            format!(
                "{}, {}s (kicker {})",
                category,
                rank_name(pair),
                rank_name(kickers[0])
            )
        }
        HandRank::TwoPair { high, low, kicker } => format!(
            "{}, {} and {} (kicker {})",
            category,
            rank_name(high),
            rank_name(low),
            rank_name(kicker)
        ),
        HandRank::ThreeOfAKind { trips, .. } => format!("{}, {}s", category, rank_name(trips)),
        HandRank::Straight { high } => format!("{}, {} high", category, rank_name(high)),
        HandRank::FullHouse { trips, pair } => format!(
            "{}, {}s full of {}s",
            category,
            rank_name(trips),
            rank_name(pair)
        ),
        HandRank::FourOfAKind { quads, .. } => format!("{}, {}s", category, rank_name(quads)),
    }
}

pub fn position_name(position: Position) -> &'static str {
    match position {
        Position::SmallBlind => "small blind",
        Position::BigBlind => "big blind",
    }
}

pub fn format_stakes(config: &TableConfig) -> String {
    format!(
        "Blinds {}/{}, starting stack {}",
        config.small_blind, config.big_blind, config.starting_stack
    )
}

/// Status block shown before each prompt: board, hole cards, stacks and bets.
pub fn format_status(state: &GameState, player_name: &str, opponent_name: &str) -> Vec<String> {
    vec![
        format!("Board: {}", format_cards(state.visible_board())),
        format!(
            "Your hand: {} ({})",
            format_cards(&state.hand),
            position_name(state.position)
        ),
        format!(
            "{}: {} chips, bet {} | {}: {} chips, bet {} | Pot: {}",
            player_name,
            state.chips,
            state.bet,
            opponent_name,
            state.opp_chips,
            state.opp_bet,
            state.pot
        ),
    ]
}
