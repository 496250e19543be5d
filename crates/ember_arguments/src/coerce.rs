//! Per-type token coercion.
//!
//! The set of argument types a command can ask for is closed on purpose:
//! [`ArgumentType`] is sealed and implemented once per supported type, so a
//! request for anything else is a compile error rather than a runtime
//! defect, and adding a type means adding exactly one impl here.

use ember_foundation::{Duration, Error};
use ember_worldtime::{TIME_MAX, TIME_MIN, WorldTime};

use crate::tokens::ArgumentList;

/// Boolean literals accepted as true (matched case-insensitively).
const TRUTHY: [&str; 7] = ["true", "yes", "+", "1", "enable", "enabled", "on"];

/// Boolean literals accepted as false (matched case-insensitively).
const FALSY: [&str; 7] = ["false", "no", "-", "0", "disable", "disabled", "off"];

/// Why a token failed to coerce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoerceError {
    /// The token is not a value of the requested type.
    Mismatch,
    /// The token parsed as a time-of-day whose derived game time falls
    /// outside the valid day range.
    InvalidTime,
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for i32 {}
    impl Sealed for u8 {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
    impl Sealed for ember_foundation::Duration {}
    impl Sealed for ember_worldtime::WorldTime {}
}

/// A value type that command arguments can coerce into.
///
/// Sealed: the supported set is `String`, `i32`, `u8`, `f64`, `bool`,
/// [`Duration`], and [`WorldTime`].
pub trait ArgumentType: Sized + sealed::Sealed {
    /// Human-readable description used in error messages and usage strings.
    const DESCRIPTION: &'static str;

    /// Attempts to coerce a single token into this type.
    fn coerce(token: &str) -> Result<Self, CoerceError>;
}

impl ArgumentType for String {
    const DESCRIPTION: &'static str = "a string";

    fn coerce(token: &str) -> Result<Self, CoerceError> {
        Ok(token.to_string())
    }
}

impl ArgumentType for i32 {
    const DESCRIPTION: &'static str = "an integer number";

    fn coerce(token: &str) -> Result<Self, CoerceError> {
        token.parse().map_err(|_| CoerceError::Mismatch)
    }
}

impl ArgumentType for u8 {
    const DESCRIPTION: &'static str = "a byte value [0-255]";

    fn coerce(token: &str) -> Result<Self, CoerceError> {
        token.parse().map_err(|_| CoerceError::Mismatch)
    }
}

impl ArgumentType for f64 {
    const DESCRIPTION: &'static str = "a number";

    fn coerce(token: &str) -> Result<Self, CoerceError> {
        token.parse().map_err(|_| CoerceError::Mismatch)
    }
}

impl ArgumentType for bool {
    const DESCRIPTION: &'static str = "a boolean value";

    fn coerce(token: &str) -> Result<Self, CoerceError> {
        let lower = token.to_ascii_lowercase();
        if TRUTHY.contains(&lower.as_str()) {
            Ok(true)
        } else if FALSY.contains(&lower.as_str()) {
            Ok(false)
        } else {
            Err(CoerceError::Mismatch)
        }
    }
}

impl ArgumentType for Duration {
    const DESCRIPTION: &'static str = "a duration";

    fn coerce(token: &str) -> Result<Self, CoerceError> {
        Self::parse(token).ok_or(CoerceError::Mismatch)
    }
}

impl ArgumentType for WorldTime {
    const DESCRIPTION: &'static str = "a time of day";

    fn coerce(token: &str) -> Result<Self, CoerceError> {
        let time = Self::parse(token).ok_or(CoerceError::Mismatch)?;

        // Unreachable given the parse rules, but checked anyway.
        if (TIME_MIN..TIME_MAX).contains(&time.game_time()) {
            Ok(time)
        } else {
            Err(CoerceError::InvalidTime)
        }
    }
}

impl ArgumentList {
    /// Attempts to coerce the token at remaining position `at`.
    ///
    /// Never errors: out-of-bounds positions and failed coercions (including
    /// the defensive invalid-time case) all yield `None`.
    #[must_use]
    pub fn try_get_at<T: ArgumentType>(&self, at: usize) -> Option<T> {
        T::coerce(self.get(at)?).ok()
    }

    /// Coerces the token at remaining position `at`, or reports why not.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::TooFewArguments`](ember_foundation::ErrorKind::TooFewArguments)
    /// if the position is past the end;
    /// [`ErrorKind::TypeMismatch`](ember_foundation::ErrorKind::TypeMismatch)
    /// naming the 1-based position if the token does not coerce;
    /// [`ErrorKind::InvalidTime`](ember_foundation::ErrorKind::InvalidTime)
    /// for an out-of-range time-of-day.
    pub fn get_at<T: ArgumentType>(&self, at: usize) -> Result<T, Error> {
        let Some(token) = self.get(at) else {
            return Err(Error::too_few_arguments());
        };

        T::coerce(token).map_err(|err| match err {
            CoerceError::Mismatch => Error::type_mismatch(at + 1, T::DESCRIPTION),
            CoerceError::InvalidTime => Error::invalid_time(),
        })
    }
}
