//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// CondDB fixture generator - deterministic, version-controlled test data
#[derive(Parser, Debug)]
#[command(name = "conddb-fixtures")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to (re)generate the fixture tree in
    ///
    /// Any previous content is deleted wholesale before regeneration.
    #[arg(short, long, default_value = "test_data")]
    pub output: PathBuf,

    /// Enable verbose output
    ///
    /// Raises logging detail only; generated content is unaffected.
    #[arg(
        short,
        long,
        env = "VERBOSE",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub verbose: bool,
}
