//! # headsup-engine: Heads-Up Hold'em Core
//!
//! Rules, hand evaluation and the betting state machine for a single human
//! playing no-limit Texas Hold'em against one bot. Hands are dealt from a
//! seeded ChaCha20 RNG, so a match replays exactly from its seed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - Seeded shuffling and dealing of a whole hand
//! - [`hand`] - Seven-card evaluation and comparison
//! - [`player`] - Positions, sides and betting actions
//! - [`game`] - Per-hand state and chip movement
//! - [`rules`] - Action validation
//! - [`engine`] - The state machine driving human and bot turns
//! - [`opponent`] - The bot seam
//! - [`store`] / [`table`] - Session persistence around the engine
//! - [`logger`] - Human-readable action log lines
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cmp::Ordering;
//! use headsup_engine::cards::parse_cards;
//! use headsup_engine::hand::{compare, evaluate, Category};
//!
//! let board: [_; 5] = parse_cards("7c 8h 9d Td Jh").unwrap().try_into().unwrap();
//! let low: [_; 2] = parse_cards("2s 3s").unwrap().try_into().unwrap();
//! let high: [_; 2] = parse_cards("Qs 4c").unwrap().try_into().unwrap();
//!
//! assert_eq!(evaluate(&low, &board).category(), Category::Straight);
//! assert_eq!(compare(&high, &low, &board), Ordering::Greater);
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use headsup_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! assert_eq!(a.deal().unwrap(), b.deal().unwrap());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod opponent;
pub mod player;
pub mod rules;
pub mod store;
pub mod table;
