//! # headsup CLI Library
//!
//! Terminal front-end for heads-up no-limit hold'em against the bot.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand and returns the
//! process exit code; [`run_with_input`] does the same with an explicit input
//! stream for the interactive `play` command.
//!
//! ## Available Subcommands
//!
//! - `play`: Play a match against the bot
//! - `eval`: Compare two hands on a full board
//! - `strength`: Estimate how often a hand wins, as the bot sees it
//! - `deal`: Deal a single hand for inspection
//! - `cfg`: Display the resolved configuration

use std::io::{BufRead, Write};

use clap::Parser;
use headsup_ai::strength::CandidatePool;

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HeadsupCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
    handle_strength_command,
};
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "eval", "strength", "deal", "cfg"];

/// Runs the CLI with stdin as the input stream.
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions.
///
/// ```
/// use std::io;
/// let args = vec!["headsup", "deal", "--seed", "42"];
/// let code = headsup_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HeadsupCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: headsup <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: headsup --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            seed,
            name,
            stack,
            ai,
        } => handle_play_command(seed, name, stack, &ai, input, out, err),
        Commands::Eval {
            hand_a,
            hand_b,
            board,
        } => handle_eval_command(&hand_a, &hand_b, &board, out),
        Commands::Strength { hand, board, pool } => match resolve_pool(pool) {
            Ok(pool) => handle_strength_command(&hand, &board, pool, out),
            Err(e) => Err(e),
        },
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            write_or_exit!(err, "Interrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

/// `--pool` wins over the `exclude_board` setting.
fn resolve_pool(flag: Option<cli::Pool>) -> Result<CandidatePool, CliError> {
    if let Some(pool) = flag {
        return Ok(pool.into());
    }
    let cfg = config::load()?;
    Ok(if cfg.exclude_board {
        CandidatePool::ExcludeBoard
    } else {
        CandidatePool::Baseline
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_args(args: &[&str], input: &str) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let code = run_with_input(args.iter().copied(), &mut input, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, err) = run_args(&["headsup", "--help"], "");
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("strength"));
        assert!(err.is_empty());
    }

    #[test]
    fn bad_board_is_an_error_exit() {
        let (code, _, err) = run_args(&["headsup", "eval", "AsKs", "2c2d", "--board", "3h4h"], "");
        assert_eq!(code, exit_code::ERROR);
        assert!(err.contains("Expected 5 cards, got 2"));
    }

    #[test]
    fn explicit_pool_flag_is_used() {
        assert_eq!(
            resolve_pool(Some(cli::Pool::Baseline)).unwrap(),
            CandidatePool::Baseline
        );
    }
}
