//! Command handlers, one module per subcommand.
//!
//! Every handler takes its output streams as `&mut dyn Write` (and, for
//! `play`, its input as `&mut dyn BufRead`) and returns `Result<(), CliError>`;
//! `run` maps the result to an exit code.

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
