use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deal;
use crate::player::{Position, Side};

/// Represents a betting street in Texas Hold'em poker.
/// Streets only move forward within a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    /// Log header announcing the street.
    pub fn label(self) -> &'static str {
        match self {
            Street::Preflop => "Preflop:",
            Street::Flop => "Flop:",
            Street::Turn => "Turn:",
            Street::River => "River:",
        }
    }

    /// Number of board cards visible on this street.
    pub fn visible_board(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }
}

/// Final result of a match, from the human's point of view.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Win,
    Loss,
}

/// Chips and current-street bets as seen from one side.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Stakes {
    pub chips: u32,
    pub bet: u32,
    pub opp_chips: u32,
    pub opp_bet: u32,
}

impl Stakes {
    /// Chips needed to match the other side's bet.
    pub fn to_call(&self) -> u32 {
        self.opp_bet.saturating_sub(self.bet)
    }

    /// The largest total bet this side can make.
    pub fn available(&self) -> u32 {
        self.chips + self.bet
    }

    pub fn opp_available(&self) -> u32 {
        self.opp_chips + self.opp_bet
    }
}

/// One hand of heads-up poker between the human (`chips`, `bet`, `hand`) and
/// the bot (`opp_*`).
///
/// Mutated only through the state machine; `chips + opp_chips + pot + bet +
/// opp_bet` stays constant for the whole match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub chips: u32,
    pub opp_chips: u32,
    /// Chips swept in from finished streets
    pub pot: u32,
    /// Human's contribution on the current street
    pub bet: u32,
    /// Bot's contribution on the current street
    pub opp_bet: u32,
    /// The blind the human posted this hand
    pub position: Position,
    pub street: Street,
    pub hand: [Card; 2],
    pub opp_hand: [Card; 2],
    pub board: [Card; 5],
    /// The showdown has been shown; the next request starts a new hand
    pub displayed: bool,
}

impl GameState {
    /// Starts a hand: installs the deal and posts both blinds. A blind larger
    /// than the remaining stack is posted all-in.
    pub fn new_hand(
        deal: Deal,
        chips: u32,
        opp_chips: u32,
        position: Position,
        small_blind: u32,
        big_blind: u32,
    ) -> Self {
        let mut state = Self {
            chips,
            opp_chips,
            pot: 0,
            bet: 0,
            opp_bet: 0,
            position,
            street: Street::Preflop,
            hand: deal.hand,
            opp_hand: deal.opp_hand,
            board: deal.board,
            displayed: false,
        };
        let (blind, opp_blind) = match position {
            Position::SmallBlind => (small_blind, big_blind),
            Position::BigBlind => (big_blind, small_blind),
        };
        state.commit(Side::Player, blind);
        state.commit(Side::Opponent, opp_blind);
        state
    }

    pub fn chips_of(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.chips,
            Side::Opponent => self.opp_chips,
        }
    }

    pub fn bet_of(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.bet,
            Side::Opponent => self.opp_bet,
        }
    }

    pub fn stakes(&self, side: Side) -> Stakes {
        Stakes {
            chips: self.chips_of(side),
            bet: self.bet_of(side),
            opp_chips: self.chips_of(side.other()),
            opp_bet: self.bet_of(side.other()),
        }
    }

    pub fn small_blind_side(&self) -> Side {
        match self.position {
            Position::SmallBlind => Side::Player,
            Position::BigBlind => Side::Opponent,
        }
    }

    /// Every chip in play: both stacks, both bets and the pot.
    pub fn total_chips(&self) -> u32 {
        self.chips + self.opp_chips + self.committed()
    }

    /// Chips on the table for this hand.
    pub fn committed(&self) -> u32 {
        self.pot + self.bet + self.opp_bet
    }

    pub fn is_all_in(&self) -> bool {
        self.chips == 0 || self.opp_chips == 0
    }

    /// Board cards visible on the current street.
    pub fn visible_board(&self) -> &[Card] {
        &self.board[..self.street.visible_board()]
    }

    fn seat_mut(&mut self, side: Side) -> (&mut u32, &mut u32) {
        match side {
            Side::Player => (&mut self.chips, &mut self.bet),
            Side::Opponent => (&mut self.opp_chips, &mut self.opp_bet),
        }
    }

    /// Moves up to `amount` from the side's stack into its bet; returns what moved.
    fn commit(&mut self, side: Side, amount: u32) -> u32 {
        let (chips, bet) = self.seat_mut(side);
        let paid = amount.min(*chips);
        *chips -= paid;
        *bet += paid;
        paid
    }

    /// Matches the other side's bet.
    pub fn call(&mut self, side: Side) -> u32 {
        let to_call = self.stakes(side).to_call();
        self.commit(side, to_call)
    }

    /// Raises the side's bet for this street to `total`.
    pub fn raise_to(&mut self, side: Side, total: u32) -> u32 {
        let extra = total.saturating_sub(self.bet_of(side));
        self.commit(side, extra)
    }

    /// Hands back the part of a bet the other side cannot match because it is
    /// all-in for less. Returns the refunded amount.
    pub fn return_uncalled(&mut self) -> u32 {
        for side in [Side::Player, Side::Opponent] {
            let short = side.other();
            if self.chips_of(short) == 0 && self.bet_of(side) > self.bet_of(short) {
                let excess = self.bet_of(side) - self.bet_of(short);
                let (chips, bet) = self.seat_mut(side);
                *bet -= excess;
                *chips += excess;
                return excess;
            }
        }
        0
    }

    pub fn sweep_bets(&mut self) {
        self.pot += self.bet + self.opp_bet;
        self.bet = 0;
        self.opp_bet = 0;
    }

    /// Sweeps bets into the pot and moves to the next street.
    /// Returns `None` on the river, where there is no next street.
    pub fn advance_street(&mut self) -> Option<Street> {
        let next = self.street.next()?;
        self.sweep_bets();
        self.street = next;
        Some(next)
    }

    /// Gives the pot and both bets to `winner`; returns the amount won.
    pub fn award(&mut self, winner: Side) -> u32 {
        let total = self.take_committed();
        match winner {
            Side::Player => self.chips += total,
            Side::Opponent => self.opp_chips += total,
        }
        total
    }

    /// Splits the pot and both bets; an odd chip goes to the human.
    /// Returns (human share, bot share).
    pub fn split_pot(&mut self) -> (u32, u32) {
        let total = self.take_committed();
        let mine = total.div_ceil(2);
        let theirs = total - mine;
        self.chips += mine;
        self.opp_chips += theirs;
        (mine, theirs)
    }

    fn take_committed(&mut self) -> u32 {
        let total = self.committed();
        self.pot = 0;
        self.bet = 0;
        self.opp_bet = 0;
        total
    }

    /// The match is over once a side has no chips and nothing is left on the table.
    pub fn match_outcome(&self) -> Option<MatchOutcome> {
        if self.committed() != 0 {
            return None;
        }
        if self.chips == 0 {
            Some(MatchOutcome::Loss)
        } else if self.opp_chips == 0 {
            Some(MatchOutcome::Win)
        } else {
            None
        }
    }
}
