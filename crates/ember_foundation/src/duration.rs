//! Non-negative durations with suffix-scaled parsing.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Recognized unit suffixes and their scale in seconds.
///
/// Checked in order: the two-character suffixes `ms` and `us` must come
/// before the single-character `s`, or the one-character check would consume
/// part of them. `mo` and `yr` do not end in a shorter suffix's character,
/// so their position is not load-bearing, but they stay grouped with their
/// single-character partners.
const SUFFIXES: [(&str, f64); 9] = [
    ("ms", 1e-3),
    ("us", 1e-6),
    ("s", 1.0),
    ("m", 60.0),
    ("h", 3600.0),
    ("d", 86_400.0),
    ("mo", 30.0 * 86_400.0),
    ("y", 365.0 * 86_400.0),
    ("yr", 365.0 * 86_400.0),
];

/// A non-negative span of time, measured in seconds.
///
/// This is a transient parse result, not a wall-clock type: command
/// arguments like `90s`, `1.5h`, or `250ms` coerce into one of these and the
/// dispatch layer reads the scaled seconds back out.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Duration(f64);

impl Duration {
    /// A zero-length duration.
    pub const ZERO: Self = Self(0.0);

    /// Creates a duration from a number of seconds.
    ///
    /// Returns `None` if the value is negative or non-finite.
    #[must_use]
    pub fn from_seconds(seconds: f64) -> Option<Self> {
        if seconds.is_finite() && seconds >= 0.0 {
            Some(Self(seconds))
        } else {
            None
        }
    }

    /// Parses a duration literal of the form `<number><suffix>?`.
    ///
    /// The suffix is one of `ms`, `us`, `s`, `m`, `h`, `d`, `mo`, `y`, `yr`
    /// (case-sensitive, no whitespace between number and suffix); a bare
    /// number is taken as seconds. Composite literals such as `4h30m` are
    /// not supported.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let (number, scale) = match SUFFIXES.iter().find(|(suffix, _)| input.ends_with(suffix)) {
            Some((suffix, scale)) => (&input[..input.len() - suffix.len()], *scale),
            None => (input, 1.0),
        };

        let value: f64 = number.parse().ok()?;
        Self::from_seconds(value * scale)
    }

    /// The length of this duration in seconds.
    #[must_use]
    pub fn seconds(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
