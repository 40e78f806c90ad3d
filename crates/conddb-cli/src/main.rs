//! CondDB fixture generator CLI
//!
//! Regenerates the versioned and static test fixtures from scratch. Any
//! external-tool failure terminates the run with that tool's exit code;
//! partial output is never a valid terminal state.

mod cli;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use conddb_fs::Workspace;
use conddb_git::GitDriver;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> conddb_scenarios::Result<()> {
    let workspace = Workspace::new(cli.output.as_path());
    let git = GitDriver::new();
    conddb_scenarios::generate(&git, &workspace)
}
