//! Envsplit - split environment definition files into config and secrets.
//!
//! This library provides the core functionality for the `envsplit` CLI tool:
//! parsing `KEY=VALUE` lines from a deployment env file, classifying each key
//! as a regular variable or a secret, and rendering the result as shell
//! associative-array assignments that a calling script can `eval`.

pub mod classify;
pub mod cli;
pub mod emit;
pub mod parser;

/// Library-level error type for envsplit operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File not found: {}", .0.display())]
    FileNotFound(std::path::PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for envsplit operations.
pub type Result<T> = std::result::Result<T, Error>;
