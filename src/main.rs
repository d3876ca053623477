//! Envsplit CLI - split a deployment env file into config and secrets.

use clap::Parser;
use clap::error::ErrorKind;
use envsplit::classify::{self, Policy};
use envsplit::cli::Cli;
use envsplit::{emit, parser};
use std::process;

fn main() {
    // Callers distinguish success solely by exit code, so usage errors must
    // exit 1 like every other failure (clap defaults to 2). Help and version
    // requests still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), envsplit::Error> {
    let outcome = parser::parse_file(&cli.env_file)?;

    if cli.verbose {
        for skip in &outcome.skipped {
            eprintln!("Warning: line {}: skipped ({})", skip.line, skip.reason);
        }
    }

    let store = classify::classify(outcome.entries, &Policy::default());
    print!("{}", emit::render(&store));
    Ok(())
}
