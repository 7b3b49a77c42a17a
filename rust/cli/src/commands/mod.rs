//! One module per subcommand. Each exposes a `handle_*_command` function that
//! takes its output streams as `&mut dyn Write` and returns
//! `Result<(), CliError>`.

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod play;
pub mod strength;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use strength::handle_strength_command;
