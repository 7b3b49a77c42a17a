//! Deals one hand from a seeded deck and shows every card.

use std::io::Write;

use headsup_engine::deck::Deck;

use crate::error::CliError;
use crate::formatters::format_cards;

/// The seed is printed so a random deal can be repeated with `--seed`.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    let deal = deck.deal()?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Player: {}", format_cards(&deal.hand))?;
    writeln!(out, "Opponent: {}", format_cards(&deal.opp_hand))?;
    writeln!(out, "Board: {}", format_cards(&deal.board))?;
    Ok(())
}
