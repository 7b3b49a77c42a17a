use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// The cards for one hand: two hole cards per side and the full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub hand: [Card; 2],
    pub opp_hand: [Card; 2],
    pub board: [Card; 5],
}

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Shuffles a fresh 52-card deck and deals both hands and the whole board.
    pub fn deal(&mut self) -> Result<Deal, GameError> {
        self.shuffle();
        let hand = [self.draw()?, self.draw()?];
        let opp_hand = [self.draw()?, self.draw()?];
        let board = [
            self.draw()?,
            self.draw()?,
            self.draw()?,
            self.draw()?,
            self.draw()?,
        ];
        Ok(Deal {
            hand,
            opp_hand,
            board,
        })
    }

    fn draw(&mut self) -> Result<Card, GameError> {
        self.deal_card().ok_or(GameError::DeckExhausted)
    }
}
