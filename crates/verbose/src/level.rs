//! crates/verbose/src/level.rs
//! The ordered verbosity scale and the threshold rule.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Verbosity level, ordered from quietest to noisiest.
///
/// The same four values serve as the threshold a [`LeveledWriter`] is built
/// with and as the tier an emission call is gated on. A call at tier `T` is
/// emitted when the configured threshold is at least `T`, so
/// [`Level::None`] silences every call and [`Level::Trace`] admits all of
/// them.
///
/// Integer conversions clamp instead of failing: anything below zero maps to
/// [`Level::None`] and anything above three maps to [`Level::Trace`].
///
/// # Examples
///
/// ```
/// use verbose::Level;
///
/// assert!(Level::None < Level::Verbose);
/// assert!(Level::Debug.allows(Level::Verbose));
/// assert!(!Level::Debug.allows(Level::Trace));
///
/// assert_eq!(Level::from(-1), Level::None);
/// assert_eq!(Level::from(42_u8), Level::Trace);
/// ```
///
/// [`LeveledWriter`]: crate::LeveledWriter
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Level {
    /// No leveled output at all.
    #[default]
    None = 0,
    /// Additional progress detail, typically `-v`.
    Verbose = 1,
    /// Diagnostics aimed at the tool's developers, typically `-vv`.
    Debug = 2,
    /// Step-by-step tracing, typically `-vvv`.
    Trace = 3,
}

impl Level {
    /// Every level in ascending order.
    pub const ALL: [Self; 4] = [Self::None, Self::Verbose, Self::Debug, Self::Trace];

    /// The levels that carry emission methods, in ascending order.
    pub const EMISSION_TIERS: [Self; 3] = [Self::Verbose, Self::Debug, Self::Trace];

    /// The lowest level.
    pub const MIN: Self = Self::None;

    /// The highest level.
    pub const MAX: Self = Self::Trace;

    /// Maps an arbitrary integer onto the scale, clamping out-of-range values.
    #[must_use]
    pub const fn clamp(value: i64) -> Self {
        match value {
            i64::MIN..=0 => Self::None,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Maps the number of repeated `-v` switches onto the scale.
    ///
    /// ```
    /// use verbose::Level;
    ///
    /// assert_eq!(Level::from_verbose_count(0), Level::None);
    /// assert_eq!(Level::from_verbose_count(2), Level::Debug);
    /// assert_eq!(Level::from_verbose_count(7), Level::Trace);
    /// ```
    #[must_use]
    pub const fn from_verbose_count(count: u8) -> Self {
        Self::clamp(count as i64)
    }

    /// Returns the ordinal of the level.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self as i64
    }

    /// Reports whether a threshold of `self` admits output at `tier`.
    #[must_use]
    pub fn allows(self, tier: Self) -> bool {
        self >= tier
    }

    /// Lower-case name used by [`Display`](fmt::Display) and [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Bracketed tag written in front of output when the level prefix is on.
    ///
    /// [`Level::None`] never gates an emission and therefore has no tag.
    #[must_use]
    pub const fn tag(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Verbose => Some("[VERBOSE]"),
            Self::Debug => Some("[DEBUG]"),
            Self::Trace => Some("[TRACE]"),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Level {
                fn from(value: $ty) -> Self {
                    let fallback = if value < 0 { i64::MIN } else { i64::MAX };
                    Self::clamp(i64::try_from(value).unwrap_or(fallback))
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Level {
                fn from(value: $ty) -> Self {
                    Self::clamp(i64::try_from(value).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<Level> for i64 {
    fn from(level: Level) -> Self {
        level.as_i64()
    }
}

/// Error returned when a string names no verbosity level.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error(
    "unrecognised verbosity level '{input}'; expected none, verbose, debug, trace or an integer"
)]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// The rejected input, untrimmed.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name (ASCII case-insensitive) or an integer.
    ///
    /// Integers clamp exactly like the [`From`] conversions, including values
    /// too large for `i64`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(level) = Self::ALL
            .into_iter()
            .find(|level| trimmed.eq_ignore_ascii_case(level.name()))
        {
            return Ok(level);
        }

        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Self::clamp(value));
        }

        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(if negative { Self::MIN } else { Self::MAX });
        }

        Err(ParseLevelError {
            input: s.to_owned(),
        })
    }
}
