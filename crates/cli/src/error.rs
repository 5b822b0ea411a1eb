//! crates/cli/src/error.rs
//! Failures reported by the `vecho` front-end.

use std::io;

use thiserror::Error;

/// Exit status for usage errors.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Exit status when standard output cannot be written.
pub const IO_EXIT_CODE: i32 = 2;

/// Error produced while parsing arguments or writing output.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line could not be interpreted.
    #[error("{0}")]
    Usage(String),

    /// Writing to standard output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Returns the process exit status associated with the error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => USAGE_EXIT_CODE,
            Self::Io(_) => IO_EXIT_CODE,
        }
    }

    pub(crate) fn from_clap(error: &clap::Error) -> Self {
        let rendered = error.to_string();
        let first_line = rendered.lines().next().unwrap_or_default();
        let message = first_line.strip_prefix("error: ").unwrap_or(first_line);
        Self::Usage(message.to_owned())
    }
}
