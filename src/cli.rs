//! CLI argument definitions for envsplit.

use clap::Parser;
use std::path::PathBuf;

/// Envsplit - split an environment definition file into config and secrets.
///
/// Prints `ENV_VARS` / `SECRET_VARS` associative-array assignments on stdout
/// for a calling shell script to `eval`.
#[derive(Parser, Debug)]
#[command(name = "envsplit")]
#[command(author, version, about = "Split an env file into regular variables and secrets", long_about = None)]
pub struct Cli {
    /// Path to the environment file to split
    pub env_file: PathBuf,

    /// Report skipped lines on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
