//! crates/verbose/src/writer/emit.rs
//! Threshold gating and rendering of the two output shapes.

use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};

use super::LeveledWriter;
use crate::level::Level;

impl<W> LeveledWriter<W>
where
    W: Write,
{
    /// Writes formatted output at `tier`, surfacing sink failures.
    ///
    /// Returns `Ok(false)` when the threshold rejects `tier` and nothing was
    /// written, `Ok(true)` once the rendered text has been handed to the sink.
    /// The text is written as-is; no newline is appended. A `tier` of
    /// [`Level::None`] is always admitted and carries no tag.
    pub fn try_write_fmt(&mut self, tier: Level, args: fmt::Arguments<'_>) -> io::Result<bool> {
        if !self.enabled(tier) {
            return Ok(false);
        }

        let mut rendered = String::new();
        if let Some(tag) = self.tag_for(tier) {
            rendered.push_str(tag);
            rendered.push(' ');
        }
        rendered.write_fmt(args).map_err(formatter_error)?;

        self.emit(rendered, Terminator::None)
    }

    /// Writes a space-joined line at `tier`, surfacing sink failures.
    ///
    /// Items are rendered with [`Display`], separated by one space and
    /// terminated by a single `\n`; with the level prefix enabled the tag is
    /// the first item. An empty `items` slice still produces the newline.
    pub fn try_write_line(&mut self, tier: Level, items: &[&dyn Display]) -> io::Result<bool> {
        if !self.enabled(tier) {
            return Ok(false);
        }

        let mut rendered = String::new();
        let mut separator = "";
        if let Some(tag) = self.tag_for(tier) {
            rendered.push_str(tag);
            separator = " ";
        }
        for item in items {
            rendered.push_str(separator);
            write!(rendered, "{item}").map_err(formatter_error)?;
            separator = " ";
        }

        self.emit(rendered, Terminator::Newline)
    }

    /// Writes formatted verbose output.
    pub fn verbosef(&mut self, args: fmt::Arguments<'_>) {
        absorb(Level::Verbose, self.try_write_fmt(Level::Verbose, args));
    }

    /// Writes a verbose line.
    pub fn verbose(&mut self, items: &[&dyn Display]) {
        absorb(Level::Verbose, self.try_write_line(Level::Verbose, items));
    }

    /// Writes formatted debug output.
    pub fn debugf(&mut self, args: fmt::Arguments<'_>) {
        absorb(Level::Debug, self.try_write_fmt(Level::Debug, args));
    }

    /// Writes a debug line.
    pub fn debug(&mut self, items: &[&dyn Display]) {
        absorb(Level::Debug, self.try_write_line(Level::Debug, items));
    }

    /// Writes formatted trace output.
    pub fn tracef(&mut self, args: fmt::Arguments<'_>) {
        absorb(Level::Trace, self.try_write_fmt(Level::Trace, args));
    }

    /// Writes a trace line.
    pub fn trace(&mut self, items: &[&dyn Display]) {
        absorb(Level::Trace, self.try_write_line(Level::Trace, items));
    }

    fn tag_for(&self, tier: Level) -> Option<&'static str> {
        if self.level_prefix { tier.tag() } else { None }
    }

    // One write_all per accepted call so a shared sink sees whole units.
    fn emit(&mut self, mut rendered: String, terminator: Terminator) -> io::Result<bool> {
        if let Terminator::Newline = terminator {
            rendered.push('\n');
        }
        self.writer.write_all(rendered.as_bytes())?;
        Ok(true)
    }
}

/// What follows the rendered text of an accepted call.
#[derive(Clone, Copy)]
enum Terminator {
    /// Formatted output: written verbatim.
    None,
    /// Line output: exactly one `\n`.
    Newline,
}

fn formatter_error(_: fmt::Error) -> io::Error {
    io::Error::other("a Display implementation returned an error")
}

fn absorb(tier: Level, result: io::Result<bool>) {
    if let Err(error) = result {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            target: "verbose::sink",
            tier = %tier,
            error = %error,
            "dropped leveled output after a failed write"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = (tier, error);
    }
}
