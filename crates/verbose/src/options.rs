//! crates/verbose/src/options.rs
//! Construction-time configuration for [`LeveledWriter`](crate::LeveledWriter).

use std::io::{self, Stdout};

/// Configuration applied when building a [`LeveledWriter`](crate::LeveledWriter).
///
/// Defaults write to standard output without a level prefix. Setters consume
/// and return the options so they apply left to right; calling a setter twice
/// leaves the last value in effect.
///
/// # Examples
///
/// ```
/// use verbose::{Level, LeveledWriter, Options};
///
/// let options = Options::default()
///     .with_writer(Vec::new())
///     .with_level_prefix();
/// let mut out = LeveledWriter::with_options(Level::Debug, options);
///
/// out.debug(&[&"ready"]);
/// assert_eq!(out.into_inner(), b"[DEBUG] ready\n");
/// ```
#[derive(Clone, Debug)]
pub struct Options<W> {
    pub(crate) writer: W,
    pub(crate) level_prefix: bool,
}

impl Default for Options<Stdout> {
    fn default() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> Options<W> {
    /// Creates options that write to `writer` without a level prefix.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            level_prefix: false,
        }
    }

    /// Replaces the destination, keeping every other setting.
    #[must_use]
    pub fn with_writer<W2>(self, writer: W2) -> Options<W2> {
        Options {
            writer,
            level_prefix: self.level_prefix,
        }
    }

    /// Tags every emitted unit with its bracketed tier name.
    #[must_use]
    pub const fn with_level_prefix(self) -> Self {
        self.with_level_prefix_enabled(true)
    }

    /// Sets the level prefix flag explicitly.
    #[must_use]
    pub const fn with_level_prefix_enabled(mut self, enabled: bool) -> Self {
        self.level_prefix = enabled;
        self
    }

    /// Borrows the configured destination.
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Reports whether the level prefix is enabled.
    #[must_use]
    pub const fn level_prefix(&self) -> bool {
        self.level_prefix
    }
}
