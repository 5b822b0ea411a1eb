#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `verbose` provides leveled text output for command-line tools: normal,
//! verbose, debug and trace tiers gated by a single threshold, written to any
//! [`io::Write`](std::io::Write) destination. It is meant for tools that want
//! `-v`/`-vv`/`-vvv` style diagnostics without adopting a full logging
//! framework.
//!
//! # Design
//!
//! [`LeveledWriter`] holds a [`Level`] threshold, the destination, and a flag
//! that tags output with its tier. The threshold and flag are chosen once via
//! [`Options`] and never change. Six emission methods, a formatted and a line
//! variant per tier, decide per call whether anything reaches the sink:
//!
//! | tier | formatted | line |
//! |---|---|---|
//! | [`Level::Verbose`] | [`verbosef`](LeveledWriter::verbosef) | [`verbose`](LeveledWriter::verbose) |
//! | [`Level::Debug`] | [`debugf`](LeveledWriter::debugf) | [`debug`](LeveledWriter::debug) |
//! | [`Level::Trace`] | [`tracef`](LeveledWriter::tracef) | [`trace`](LeveledWriter::trace) |
//!
//! The same surface is available as the object-safe [`Verbose`] trait and as
//! the [`verbosef!`], [`verbose!`], [`debugf!`], [`debug!`], [`tracef!`] and
//! [`trace!`] macros.
//!
//! # Invariants
//!
//! - A call at tier `T` writes iff the threshold is at least `T`; a threshold
//!   of [`Level::None`] silences everything.
//! - Integer thresholds are clamped into `None..=Trace`; construction never
//!   fails.
//! - Formatted output is written verbatim. Line output is space-joined and ends
//!   in exactly one newline.
//! - With the level prefix, formatted output starts with `"[TIER] "` and line
//!   output has `"[TIER]"` as its first item. Without it, no tag appears.
//! - Every accepted call reaches the sink as a single `write_all`.
//!
//! # Errors
//!
//! The six emission methods never report errors: a failing sink loses the
//! output and nothing else happens. Callers that need to know use
//! [`LeveledWriter::try_write_fmt`] and [`LeveledWriter::try_write_line`],
//! which return the sink's [`std::io::Error`]. With the `tracing` feature,
//! dropped errors are recorded as `WARN` events under the `verbose::sink`
//! target.
//!
//! # Examples
//!
//! ```
//! use verbose::{Level, LeveledWriter, Options, debug, debugf};
//!
//! let options = Options::new(Vec::new()).with_level_prefix();
//! let mut out = LeveledWriter::with_options(Level::Debug, options);
//!
//! debugf!(out, "x");
//! debug!(out, "y");
//! out.trace(&[&"too detailed"]);
//!
//! assert_eq!(out.into_inner(), b"[DEBUG] x[DEBUG] y\n");
//! ```
//!
//! Map a repeated `-v` switch onto the scale:
//!
//! ```
//! use verbose::{Level, LeveledWriter};
//!
//! let count = 2; // -vv
//! let out = LeveledWriter::new(Level::from_verbose_count(count));
//! assert!(out.enabled(Level::Debug));
//! assert!(!out.enabled(Level::Trace));
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialise [`Level`] as its lower-case name.
//! - `tracing`: `VerboseLayer`, `init_tracing` and
//!   `init_tracing_with_filter` route `tracing` events through a leveled
//!   writer.

mod level;
mod macros;
mod options;
mod verbose;
mod writer;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use level::{Level, ParseLevelError};
pub use options::Options;
pub use verbose::Verbose;
pub use writer::LeveledWriter;

#[cfg(feature = "tracing")]
pub use tracing_bridge::{VerboseLayer, init_tracing, init_tracing_with_filter};
