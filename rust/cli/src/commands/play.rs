//! # Play Command
//!
//! A match against the bot on an in-memory table. The human types actions at
//! the prompt; the engine runs the bot and prints every line of the action
//! log. After a showdown both hands are shown and Enter deals the next hand.
//! The match ends when a side is out of chips, on `q`, or when input closes.

use std::io::{BufRead, Write};

use headsup_ai::strength::CandidatePool;
use headsup_ai::{AI_TYPES, create_ai};
use headsup_engine::engine::{ShowdownSummary, Step, StepOutcome, TableConfig};
use headsup_engine::game::{GameState, MatchOutcome};
use headsup_engine::opponent::Opponent;
use headsup_engine::player::Side;
use headsup_engine::store::MemoryStore;
use headsup_engine::table::Table;
use tracing::info;

use crate::config;
use crate::error::CliError;
use crate::formatters::{describe_rank, format_cards, format_stakes, format_status};
use crate::io_utils::read_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};

/// The CLI plays a single session against a fresh store.
pub const SESSION: &str = "local";

/// Label used for the bot in the status line, matching the action log.
const OPPONENT_LABEL: &str = headsup_engine::logger::OPPONENT_NAME;

/// Handle the play command.
///
/// `seed`, `name` and `stack` override the resolved configuration. An unknown
/// `ai` type is an input error.
pub fn handle_play_command(
    seed: Option<u64>,
    name: Option<String>,
    stack: Option<u32>,
    ai: &str,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut cfg = config::load()?;
    if let Some(name) = name {
        cfg.player_name = name;
    }
    if let Some(stack) = stack {
        cfg.starting_stack = stack;
    }
    config::validate(&cfg)?;

    let seed = match seed.or(cfg.seed) {
        Some(seed) => seed,
        None => {
            let seed = rand::random();
            ui::display_warning(err, &format!("No seed given; using random seed {}", seed))?;
            seed
        }
    };
    let pool = if cfg.exclude_board {
        CandidatePool::ExcludeBoard
    } else {
        CandidatePool::Baseline
    };
    let opponent = create_ai(ai, Some(bot_seed(seed)), pool).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "Unknown AI type '{}'. Available: {}",
            ai,
            AI_TYPES.join(", ")
        ))
    })?;

    let table_config = TableConfig {
        starting_stack: cfg.starting_stack,
        player_name: cfg.player_name,
        ..TableConfig::default()
    };
    info!(seed, stack = table_config.starting_stack, ai, "play session");
    let stakes = format_stakes(&table_config);
    let mut table = Table::new(table_config, Some(seed), opponent, MemoryStore::new());
    writeln!(
        out,
        "headsup: {} vs {} seed={}",
        table.engine().config().player_name,
        table.engine().opponent().name(),
        seed
    )?;
    writeln!(out, "{}", stakes)?;
    run_session(&mut table, input, out, err)?;

    let record = table.store().record(SESSION);
    writeln!(
        out,
        "Record: {} wins, {} losses",
        record.wins, record.losses
    )?;
    Ok(())
}

/// The bot draws from its own stream so its choices are not tied to the deck.
pub fn bot_seed(seed: u64) -> u64 {
    seed.wrapping_add(1)
}

fn run_session<O: Opponent>(
    table: &mut Table<MemoryStore, O>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut step = table.open(SESSION)?;
    loop {
        print_log(&step, out)?;
        match step.outcome {
            StepOutcome::AwaitingAction => {
                let name = table.engine().config().player_name.clone();
                for line in format_status(&step.state, &name, OPPONENT_LABEL) {
                    writeln!(out, "{}", line)?;
                }
                step = match prompt_action(table, input, out, err)? {
                    Some(next) => next,
                    None => return Ok(()),
                };
            }
            StepOutcome::Showdown(summary) => {
                let name = &table.engine().config().player_name;
                print_showdown(&step.state, &summary, name, out)?;
                write!(out, "Press Enter for the next hand (q to quit): ")?;
                out.flush()?;
                match read_line(input)? {
                    Some(line) if parse_player_action(&line) != ParseResult::Quit => {}
                    _ => return Ok(()),
                }
                step = table.next_hand(SESSION)?;
            }
            StepOutcome::MatchOver(outcome) => {
                match outcome {
                    MatchOutcome::Win => writeln!(out, "You win the match!")?,
                    MatchOutcome::Loss => writeln!(out, "{} wins the match.", OPPONENT_LABEL)?,
                }
                return Ok(());
            }
        }
    }
}

/// Prompts until an action is accepted. `None` means the player quit or
/// input closed.
fn prompt_action<O: Opponent>(
    table: &mut Table<MemoryStore, O>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Option<Step>, CliError> {
    loop {
        write!(out, "Action (check/call/fold/raise <size>/q): ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            writeln!(out, "Input closed.")?;
            return Ok(None);
        };
        match parse_player_action(&line) {
            ParseResult::Action(action) => match table.act(SESSION, action) {
                Ok(step) => return Ok(Some(step)),
                Err(e) if e.is_recoverable() => ui::write_error(err, &e.to_string())?,
                Err(e) => return Err(e.into()),
            },
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

fn print_log(step: &Step, out: &mut dyn Write) -> Result<(), CliError> {
    for line in &step.log {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn print_showdown(
    state: &GameState,
    summary: &ShowdownSummary,
    player_name: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    writeln!(out, "Board: {}", format_cards(&state.board))?;
    writeln!(
        out,
        "{} shows {}: {}",
        player_name,
        format_cards(&state.hand),
        describe_rank(&summary.player_rank)
    )?;
    writeln!(
        out,
        "{} shows {}: {}",
        OPPONENT_LABEL,
        format_cards(&state.opp_hand),
        describe_rank(&summary.opponent_rank)
    )?;
    let verdict = match summary.winner {
        Some(Side::Player) => format!("{} wins {}", player_name, summary.pot),
        Some(Side::Opponent) => format!("{} wins {}", OPPONENT_LABEL, summary.pot),
        None => format!("Split pot of {}", summary.pot),
    };
    writeln!(out, "{}", verdict)?;
    writeln!(
        out,
        "Stacks: {} {} | {} {}",
        player_name, state.chips, OPPONENT_LABEL, state.opp_chips
    )?;
    Ok(())
}
