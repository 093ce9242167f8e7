//! # todo - single-screen to-do list
//!
//! A quick terminal to-do list: type a task, press Enter to add it, toggle
//! it done, delete it. Tasks live in memory only and are gone when the
//! program exits.
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the interactive screen
//! todo
//!
//! # Drive the list from a script
//! printf 'add Buy milk\ntoggle #1\n' | todo script --format json
//! ```
//!
//! ## Key Bindings
//!
//! - Input field: type, `Enter` to add, `Tab`/`Down` to reach the list
//! - Task list: `Space`/`Enter` toggle, `d`/`Delete` delete, `Tab` back
//! - `F1` help, `Esc`/`Ctrl+C` quit
//!
//! Set `--log-file` (or `TODO_LOG_FILE`) to capture tracing output; the
//! interactive screen never logs to the terminal.

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod ids;
pub mod list;
pub mod logging;
pub mod script;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod row;
    pub mod run;
    pub mod utils;
}

use cli::Cli;
use cmd::*;
use logging::LogTarget;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    let command = cli.command.unwrap_or(Commands::Ui);

    let target = LogTarget::for_command(cli.log_file.as_deref(), &command);
    logging::init(&cli.log_level, target)?;

    match command {
        Commands::Ui => cmd_ui(&config),
        Commands::Script { format, strict } => cmd_script(&config, format, strict),
        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
    }
}
