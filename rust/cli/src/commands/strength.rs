//! Hand-strength estimate for a known hand, as the bot computes it.

use std::io::Write;

use headsup_ai::baseline::{MEDIUM_THRESHOLD, RAISE_THRESHOLD, STRONG_THRESHOLD};
use headsup_ai::strength::{CandidatePool, candidate_hands, estimate_strength};

use crate::error::CliError;
use crate::formatters::format_cards;
use crate::validation::{ensure_distinct, parse_board, parse_hand};

/// What the bot does with a hand of this strength.
pub fn tendency(strength: f64) -> &'static str {
    if strength >= RAISE_THRESHOLD {
        "raises unless already covered"
    } else if strength >= STRONG_THRESHOLD {
        "calls or raises on a coin flip"
    } else if strength >= MEDIUM_THRESHOLD {
        "calls or folds on a coin flip"
    } else {
        "folds, bluffing one time in five"
    }
}

pub fn handle_strength_command(
    hand: &str,
    board: &str,
    pool: CandidatePool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hand = parse_hand(hand)?;
    let board = parse_board(board)?;
    ensure_distinct(&[&hand, &board])?;

    let candidates = candidate_hands(&hand, &board, pool).len();
    let strength = estimate_strength(&hand, &board, pool);
    writeln!(out, "Hand: {}", format_cards(&hand))?;
    writeln!(out, "Board: {}", format_cards(&board))?;
    writeln!(
        out,
        "Strength: {:.4} against {} candidate hands",
        strength, candidates
    )?;
    writeln!(out, "Bot: {}", tendency(strength))?;
    Ok(())
}
