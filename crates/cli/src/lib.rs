#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end of `vecho`, a small echo tool
//! that prints its words through a [`verbose::LeveledWriter`]. It shows how a
//! tool maps its own verbosity switches onto the writer's [`Level`] scale:
//! repeated `-v` flags count up from [`Level::None`], and `--log-level`
//! accepts a level name or number that overrides the count.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for
//! standard output and error, so tests drive it with in-memory buffers. A
//! [`clap`](https://docs.rs/clap/) command performs the parse; the resolved
//! threshold, tier and prefix flag then configure a leveled writer over the
//! supplied standard output. Output goes through the fallible
//! [`LeveledWriter::try_write_line`] and [`LeveledWriter::try_write_fmt`]
//! calls so a closed pipe is reported instead of silently lost.
//!
//! # Errors
//!
//! Usage problems print `vecho: <message>` to standard error and return `1`.
//! Failing to write standard output returns `2`.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(["vecho", "-vv", "--tier", "debug", "--prefix", "ready"], &mut stdout, &mut stderr);
//!
//! assert_eq!(status, 0);
//! assert_eq!(stdout, b"[DEBUG] ready\n");
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::fmt::Display;
use std::io::Write;

use verbose::{Level, LeveledWriter, Options};

mod args;
mod error;

pub use args::{PROGRAM_NAME, ParsedArgs, parse_args};
pub use error::{CliError, IO_EXIT_CODE, USAGE_EXIT_CODE};

/// Environment variable holding the filter for `vecho`'s own diagnostics.
pub const LOG_ENV_VAR: &str = "VECHO_LOG";

/// Highest status [`exit_code_from`] passes through unchanged.
const MAX_EXIT_CODE: i32 = 255;

/// Runs `vecho` with `arguments` (program name first) and returns its exit status.
pub fn run<I, T>(arguments: I, stdout: &mut dyn Write, stderr: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match execute(arguments, stdout) {
        Ok(()) => 0,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            error.exit_code()
        }
    }
}

fn execute<I, T>(arguments: I, stdout: &mut dyn Write) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let parsed = parse_args(arguments)?;

    if parsed.show_help {
        stdout.write_all(args::render_help().as_bytes())?;
        return Ok(());
    }
    if parsed.show_version {
        stdout.write_all(args::render_version().as_bytes())?;
        return Ok(());
    }

    tracing::debug!(
        level = %parsed.level,
        tier = %parsed.tier,
        prefix = parsed.prefix,
        no_newline = parsed.no_newline,
        "resolved verbosity"
    );

    let options = Options::new(&mut *stdout).with_level_prefix_enabled(parsed.prefix);
    let mut out = LeveledWriter::with_options(parsed.level, options);

    let written = if parsed.no_newline {
        let joined = parsed.words.join(" ");
        out.try_write_fmt(parsed.tier, format_args!("{joined}"))?
    } else {
        let items: Vec<&dyn Display> = parsed
            .words
            .iter()
            .map(|word| word as &dyn Display)
            .collect();
        out.try_write_line(parsed.tier, &items)?
    };
    if !written {
        tracing::debug!(tier = %parsed.tier, "output suppressed by the verbosity threshold");
    }

    out.flush()?;
    Ok(())
}

/// Installs a stderr subscriber for `vecho`'s own diagnostics.
///
/// Does nothing unless [`LOG_ENV_VAR`] holds a valid filter directive. Returns
/// whether a subscriber was installed.
pub fn init_diagnostics() -> bool {
    use tracing_subscriber::EnvFilter;

    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) else {
        return false;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}

/// Returns the threshold `vecho` would use for `arguments`.
///
/// Convenience for embedding tools that reuse `vecho`'s flag conventions.
pub fn level_from_args<I, T>(arguments: I) -> Result<Level, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    parse_args(arguments).map(|parsed| parsed.level)
}
