//! crates/verbose/src/writer/mod.rs
//! The leveled writer: a threshold, a destination and a prefix flag.

use std::fmt;
use std::io::{self, Stdout, Write};

use crate::level::Level;
use crate::options::Options;

mod emit;

/// Gates text by verbosity and forwards accepted output to an [`io::Write`] sink.
///
/// The threshold and the prefix flag are fixed at construction. Each emission
/// call is compared against the threshold on its own; nothing a call does
/// affects a later one. Rejected calls write nothing.
///
/// Two shapes are available per tier:
///
/// - formatted (`verbosef`, `debugf`, `tracef`) writes the rendered
///   [`fmt::Arguments`] verbatim, with no newline added;
/// - line (`verbose`, `debug`, `trace`) joins its items with single spaces and
///   appends exactly one newline.
///
/// With the level prefix enabled, formatted output starts with `"[TIER] "` and
/// line output carries `"[TIER]"` as its first space-joined item.
///
/// # Examples
///
/// Collect output in memory:
///
/// ```
/// use verbose::{Level, LeveledWriter};
///
/// let mut out = LeveledWriter::with_writer(Level::Verbose, Vec::new());
/// out.verbosef(format_args!("a{}", "b"));
/// out.verbose(&[&"c", &"d"]);
/// out.debug(&[&"hidden"]);
///
/// assert_eq!(out.into_inner(), b"abc d\n");
/// ```
///
/// Borrow the caller's sink instead of taking ownership of it:
///
/// ```
/// use verbose::{Level, LeveledWriter, Options};
///
/// let mut buffer = Vec::new();
/// {
///     let options = Options::new(&mut buffer).with_level_prefix();
///     let mut out = LeveledWriter::with_options(Level::Debug, options);
///     out.debugf(format_args!("x"));
///     out.debug(&[&"y"]);
/// }
/// assert_eq!(buffer, b"[DEBUG] x[DEBUG] y\n");
/// ```
#[derive(Clone)]
pub struct LeveledWriter<W> {
    writer: W,
    level: Level,
    level_prefix: bool,
}

impl LeveledWriter<Stdout> {
    /// Creates a writer on standard output with the default options.
    ///
    /// `level` may be a [`Level`] or any integer; integers are clamped into
    /// the scale.
    #[must_use]
    pub fn new(level: impl Into<Level>) -> Self {
        Self::with_options(level, Options::default())
    }
}

impl<W> LeveledWriter<W> {
    /// Creates a writer from explicit [`Options`].
    #[must_use]
    pub fn with_options(level: impl Into<Level>, options: Options<W>) -> Self {
        Self {
            writer: options.writer,
            level: level.into(),
            level_prefix: options.level_prefix,
        }
    }

    /// Creates a writer on `writer` without a level prefix.
    #[must_use]
    pub fn with_writer(level: impl Into<Level>, writer: W) -> Self {
        Self::with_options(level, Options::new(writer))
    }

    /// Returns the configured threshold.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Reports whether emitted output is tagged with its tier.
    #[must_use]
    pub const fn level_prefix(&self) -> bool {
        self.level_prefix
    }

    /// Reports whether a call at `tier` would reach the sink.
    ///
    /// Useful to skip building expensive arguments for output that would be
    /// discarded anyway.
    #[must_use]
    pub fn enabled(&self, tier: Level) -> bool {
        self.level.allows(tier)
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    ///
    /// Bytes written here bypass the threshold and the prefix.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the leveled writer and returns the wrapped sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> LeveledWriter<W>
where
    W: Write,
{
    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W> fmt::Debug for LeveledWriter<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeveledWriter")
            .field("writer", &self.writer)
            .field("level", &self.level)
            .field("level_prefix", &self.level_prefix)
            .finish()
    }
}
