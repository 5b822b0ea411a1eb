//! crates/verbose/src/macros.rs
//! Call-site macros for the six emission methods.
//!
//! Formatted macros take a format string and arguments exactly like
//! [`format!`]. Line macros take comma-separated [`Display`](std::fmt::Display)
//! expressions that are joined with spaces. The first argument is anything
//! implementing [`Verbose`](crate::Verbose), owned or behind `&mut`.

/// Writes formatted verbose output.
///
/// ```
/// use verbose::{Level, LeveledWriter, verbosef};
///
/// let mut out = LeveledWriter::with_writer(Level::Verbose, Vec::new());
/// verbosef!(out, "a{}", "b");
/// assert_eq!(out.into_inner(), b"ab");
/// ```
#[macro_export]
macro_rules! verbosef {
    ($out:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Verbose as _;
        $out.verbosef(::core::format_args!($($arg)+))
    }};
}

/// Writes a verbose line.
///
/// ```
/// use verbose::{Level, LeveledWriter, verbose};
///
/// let mut out = LeveledWriter::with_writer(Level::Verbose, Vec::new());
/// verbose!(out, "c", "d");
/// assert_eq!(out.into_inner(), b"c d\n");
/// ```
#[macro_export]
macro_rules! verbose {
    ($out:expr $(, $item:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::Verbose as _;
        $out.verbose(&[$(&$item as &dyn ::core::fmt::Display),*])
    }};
}

/// Writes formatted debug output.
#[macro_export]
macro_rules! debugf {
    ($out:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Verbose as _;
        $out.debugf(::core::format_args!($($arg)+))
    }};
}

/// Writes a debug line.
#[macro_export]
macro_rules! debug {
    ($out:expr $(, $item:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::Verbose as _;
        $out.debug(&[$(&$item as &dyn ::core::fmt::Display),*])
    }};
}

/// Writes formatted trace output.
#[macro_export]
macro_rules! tracef {
    ($out:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Verbose as _;
        $out.tracef(::core::format_args!($($arg)+))
    }};
}

/// Writes a trace line.
///
/// ```
/// use verbose::{Level, LeveledWriter, Options, trace};
///
/// let options = Options::new(Vec::new()).with_level_prefix();
/// let mut out = LeveledWriter::with_options(Level::Trace, options);
/// trace!(out, "step", 1);
/// assert_eq!(out.into_inner(), b"[TRACE] step 1\n");
/// ```
#[macro_export]
macro_rules! trace {
    ($out:expr $(, $item:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::Verbose as _;
        $out.trace(&[$(&$item as &dyn ::core::fmt::Display),*])
    }};
}
