//! Line-oriented parsing of environment definition files.
//!
//! The parser is deliberately permissive: lines that do not look like a
//! `KEY=VALUE` assignment are skipped rather than treated as errors, so a
//! partially hand-edited file never aborts a deployment. Every dropped
//! candidate line is recorded with its line number so the CLI can surface
//! it in verbose mode.

use crate::{Error, Result};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// A key/value pair extracted from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Variable name, matching `[A-Z_][A-Z0-9_]*`.
    pub key: String,

    /// Normalized value: surrounding quotes and trailing inline comment removed.
    pub value: String,

    /// 1-based line number in the source file.
    pub line: usize,
}

/// Why a candidate line produced no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No `=` separator, or the key side does not match `[A-Z_][A-Z0-9_]*`.
    Malformed,
    /// The value was empty after quote and comment stripping.
    EmptyValue,
    /// The value was an unexpanded `${KEY}` reference to its own key.
    Placeholder,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Malformed => write!(f, "not a KEY=VALUE line"),
            SkipReason::EmptyValue => write!(f, "empty value"),
            SkipReason::Placeholder => write!(f, "unexpanded placeholder"),
        }
    }
}

/// A candidate line that was dropped, and why.
///
/// Blank lines and full-line comments are structural and never recorded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// 1-based line number in the source file.
    pub line: usize,
    pub reason: SkipReason,
}

/// Everything the parser extracted from one file, in file order.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub entries: Vec<Entry>,
    pub skipped: Vec<Skipped>,
}

/// Read an environment file and parse it.
///
/// The file is read to completion in one synchronous call; the handle is
/// released before parsing begins. A missing file maps to
/// [`Error::FileNotFound`], any other read or decode failure to
/// [`Error::Read`].
pub fn parse_file(path: &Path) -> Result<ParseOutcome> {
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::FileNotFound(path.to_path_buf())
        } else {
            Error::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    Ok(parse_str(&text))
}

/// Parse environment definitions from a string. Infallible: malformed input
/// produces skip records, never errors.
pub fn parse_str(input: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;

        // Skip empty lines and full-line comments
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Split KEY=VALUE at the first '='; the value may itself contain '='
        let Some((key, rest)) = trimmed.split_once('=') else {
            outcome.skipped.push(Skipped {
                line,
                reason: SkipReason::Malformed,
            });
            continue;
        };
        if !is_valid_key(key) {
            outcome.skipped.push(Skipped {
                line,
                reason: SkipReason::Malformed,
            });
            continue;
        }

        // Quotes come off before comment stripping, so a '#' that was inside
        // a quoted value truncates it. Known limitation of the format.
        let value = strip_inline_comment(strip_quotes(rest));

        if value.is_empty() {
            outcome.skipped.push(Skipped {
                line,
                reason: SkipReason::EmptyValue,
            });
            continue;
        }
        // Interpolation-placeholder guard: a value that is exactly the
        // unexpanded template for its own key carries no information.
        if value == format!("${{{key}}}") {
            outcome.skipped.push(Skipped {
                line,
                reason: SkipReason::Placeholder,
            });
            continue;
        }

        outcome.entries.push(Entry {
            key: key.to_string(),
            value: value.to_string(),
            line,
        });
    }

    outcome
}

/// Check that a key matches `[A-Z_][A-Z0-9_]*`.
fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Strip one symmetric layer of surrounding quotes, if present.
///
/// Only a matching pair of the same quote character counts; mismatched or
/// lone quotes are left intact.
fn strip_quotes(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Truncate the value at the first `#` and trim the whitespace left behind.
fn strip_inline_comment(value: &str) -> &str {
    match value.find('#') {
        Some(pos) => value[..pos].trim_end(),
        None => value,
    }
}
