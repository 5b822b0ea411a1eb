//! crates/verbose/src/verbose.rs
//! The six-method emission surface as an object-safe trait.

use std::fmt::{self, Display};
use std::io::Write;

use crate::writer::LeveledWriter;

/// Leveled output surface shared by every writer.
///
/// Tools that accept "something to print diagnostics to" can take
/// `&mut dyn Verbose` or `impl Verbose` instead of a concrete
/// [`LeveledWriter`], and embed it in their own state. The trait is object
/// safe; line methods take their items as a slice of [`Display`] trait objects
/// and formatted methods take [`fmt::Arguments`]. The crate's macros
/// ([`verbosef!`](crate::verbosef), [`verbose!`](crate::verbose), ...) build
/// both argument shapes.
///
/// # Examples
///
/// ```
/// use verbose::{Level, LeveledWriter, Verbose};
///
/// fn report(out: &mut dyn Verbose, copied: usize) {
///     out.verbose(&[&"copied", &copied, &"files"]);
///     out.tracef(format_args!("done\n"));
/// }
///
/// let mut out = LeveledWriter::with_writer(Level::Verbose, Vec::new());
/// report(&mut out, 3);
/// assert_eq!(out.into_inner(), b"copied 3 files\n");
/// ```
pub trait Verbose {
    /// Writes formatted output when verbose output is enabled.
    fn verbosef(&mut self, args: fmt::Arguments<'_>);

    /// Writes a space-joined line when verbose output is enabled.
    fn verbose(&mut self, items: &[&dyn Display]);

    /// Writes formatted output when debug output is enabled.
    fn debugf(&mut self, args: fmt::Arguments<'_>);

    /// Writes a space-joined line when debug output is enabled.
    fn debug(&mut self, items: &[&dyn Display]);

    /// Writes formatted output when trace output is enabled.
    fn tracef(&mut self, args: fmt::Arguments<'_>);

    /// Writes a space-joined line when trace output is enabled.
    fn trace(&mut self, items: &[&dyn Display]);
}

impl<W> Verbose for LeveledWriter<W>
where
    W: Write,
{
    fn verbosef(&mut self, args: fmt::Arguments<'_>) {
        Self::verbosef(self, args);
    }

    fn verbose(&mut self, items: &[&dyn Display]) {
        Self::verbose(self, items);
    }

    fn debugf(&mut self, args: fmt::Arguments<'_>) {
        Self::debugf(self, args);
    }

    fn debug(&mut self, items: &[&dyn Display]) {
        Self::debug(self, items);
    }

    fn tracef(&mut self, args: fmt::Arguments<'_>) {
        Self::tracef(self, args);
    }

    fn trace(&mut self, items: &[&dyn Display]) {
        Self::trace(self, items);
    }
}

macro_rules! forward_verbose {
    ($($target:ty),* $(,)?) => {
        $(
            impl<T> Verbose for $target
            where
                T: Verbose + ?Sized,
            {
                fn verbosef(&mut self, args: fmt::Arguments<'_>) {
                    (**self).verbosef(args);
                }

                fn verbose(&mut self, items: &[&dyn Display]) {
                    (**self).verbose(items);
                }

                fn debugf(&mut self, args: fmt::Arguments<'_>) {
                    (**self).debugf(args);
                }

                fn debug(&mut self, items: &[&dyn Display]) {
                    (**self).debug(items);
                }

                fn tracef(&mut self, args: fmt::Arguments<'_>) {
                    (**self).tracef(args);
                }

                fn trace(&mut self, items: &[&dyn Display]) {
                    (**self).trace(items);
                }
            }
        )*
    };
}

forward_verbose!(&mut T, Box<T>);
