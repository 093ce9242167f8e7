//! Command implementations for the CLI interface.
//!
//! `ui` runs the interactive screen, `script` drives the same list from
//! stdin, and `completions` prints shell completion scripts.

use std::io;

use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use tracing::info;

use crate::config::Config;
use crate::script;
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive to-do screen (the default).
    Ui,

    /// Read commands from stdin and print the resulting list.
    ///
    /// One command per line: `add <title>`, `toggle <ref>`, `delete <ref>`,
    /// `list`. A ref is a task id or `#N` for the Nth task.
    Script {
        /// Output format for listings.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Stop at the first line that fails to parse.
        #[arg(long)]
        strict: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Listing format for script mode.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Launch the interactive screen.
pub fn cmd_ui(config: &Config) -> anyhow::Result<()> {
    info!("starting interactive session");
    let list = run_tui(config).context("UI error")?;
    info!(tasks = list.len(), done = list.completed_count(), "session closed");
    Ok(())
}

/// Run a script read from stdin.
pub fn cmd_script(config: &Config, format: OutputFormat, strict: bool) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    script::run(
        config,
        stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
        format,
        strict,
    )
    .context("script failed")?;
    Ok(())
}

/// Print shell completions for `shell` to stdout.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut io::stdout());
}
