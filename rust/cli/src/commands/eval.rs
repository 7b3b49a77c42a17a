//! Head-to-head comparison of two hands on a full board.

use std::cmp::Ordering;
use std::io::Write;

use headsup_engine::hand::{compare, evaluate};

use crate::error::CliError;
use crate::formatters::{describe_rank, format_cards};
use crate::validation::{ensure_distinct, parse_board, parse_hand};

pub fn handle_eval_command(
    hand_a: &str,
    hand_b: &str,
    board: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let a = parse_hand(hand_a)?;
    let b = parse_hand(hand_b)?;
    let board = parse_board(board)?;
    ensure_distinct(&[&a, &b, &board])?;

    writeln!(out, "Board: {}", format_cards(&board))?;
    writeln!(
        out,
        "Hand A: {} {}",
        format_cards(&a),
        describe_rank(&evaluate(&a, &board))
    )?;
    writeln!(
        out,
        "Hand B: {} {}",
        format_cards(&b),
        describe_rank(&evaluate(&b, &board))
    )?;
    let verdict = match compare(&a, &b, &board) {
        Ordering::Greater => "Hand A wins",
        Ordering::Less => "Hand B wins",
        Ordering::Equal => "Split pot",
    };
    writeln!(out, "Result: {}", verdict)?;
    Ok(())
}
