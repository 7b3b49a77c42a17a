//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use headsup_ai::strength::CandidatePool;

#[derive(Parser, Debug)]
#[command(
    name = "headsup",
    version,
    about = "Heads-up no-limit hold'em against a bot"
)]
pub struct HeadsupCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a match against the bot
    Play {
        /// Seed for the deck and the bot (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Name shown in the action log
        #[arg(long)]
        name: Option<String>,
        /// Starting stack for each side
        #[arg(long)]
        stack: Option<u32>,
        #[arg(long, default_value = "baseline")]
        ai: String,
    },
    /// Compare two hands on a full board
    Eval {
        /// First hand, e.g. "AsKs"
        hand_a: String,
        /// Second hand
        hand_b: String,
        /// Five board cards, e.g. "Qs Js Ts 2d 3c"
        #[arg(long)]
        board: String,
    },
    /// Estimate how often a hand wins on a full board
    Strength {
        hand: String,
        #[arg(long)]
        board: String,
        /// Which cards the enumerated opponent hands may use
        #[arg(long, value_enum)]
        pool: Option<Pool>,
    },
    /// Deal a single hand and show every card
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Candidate pool as spelled on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Pool {
    /// Every card except the hand under test
    Baseline,
    /// Also leave out the board cards
    ExcludeBoard,
}

impl From<Pool> for CandidatePool {
    fn from(pool: Pool) -> Self {
        match pool {
            Pool::Baseline => CandidatePool::Baseline,
            Pool::ExcludeBoard => CandidatePool::ExcludeBoard,
        }
    }
}
