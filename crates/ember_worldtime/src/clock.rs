//! The 12-hour world clock and its game-time conversions.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The minimum game time.
pub const TIME_MIN: f64 = 0.0;

/// The exclusive upper bound on game time (seconds in a day).
pub const TIME_MAX: f64 = 86_400.0;

/// Half a day in seconds.
const HALF_DAY: f64 = 43_200.0;

/// Game time zero falls at 4:30 AM on the wall clock.
const DAWN_OFFSET: f64 = 16_200.0;

/// Morning or afternoon half of the 12-hour clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Meridiem {
    /// Ante meridiem, midnight through 11:59.
    Am,
    /// Post meridiem, noon through 11:59.
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Am => write!(f, "AM"),
            Self::Pm => write!(f, "PM"),
        }
    }
}

/// A time-of-day on the 12-hour world clock.
///
/// Hours run 1-12 and minutes 0-59; the fields are private so every value
/// in circulation satisfies those ranges, which in turn keeps
/// [`game_time`](WorldTime::game_time) inside `[0, 86400)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldTime {
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

impl WorldTime {
    /// Creates a world time, validating the hour and minute ranges.
    #[must_use]
    pub fn new(hour: u8, minute: u8, meridiem: Meridiem) -> Option<Self> {
        if (1..=12).contains(&hour) && minute < 60 {
            Some(Self {
                hour,
                minute,
                meridiem,
            })
        } else {
            None
        }
    }

    /// Parses a time literal of the form `H:MMam` / `H:MMpm`.
    ///
    /// `H` is one or two digits in 1-12, `MM` is exactly two digits in
    /// 00-59, and the meridiem marker is case-insensitive. Any other shape
    /// yields `None`; this feeds the try-coercion path, where a non-matching
    /// token simply is not a time-of-day.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let (hour_part, rest) = input.split_once(':')?;

        if hour_part.is_empty()
            || hour_part.len() > 2
            || !hour_part.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        let hour: u8 = hour_part.parse().ok()?;
        if !(1..=12).contains(&hour) {
            return None;
        }

        let bytes = rest.as_bytes();
        if bytes.len() != 4 || !bytes[0].is_ascii_digit() || !bytes[1].is_ascii_digit() {
            return None;
        }
        let minute = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        if minute > 59 {
            return None;
        }

        // The first two bytes are ASCII digits, so index 2 is a char boundary.
        let meridiem = match &rest[2..] {
            marker if marker.eq_ignore_ascii_case("am") => Meridiem::Am,
            marker if marker.eq_ignore_ascii_case("pm") => Meridiem::Pm,
            _ => return None,
        };

        Some(Self {
            hour,
            minute,
            meridiem,
        })
    }

    /// Converts a game-time coordinate back to the 12-hour clock.
    ///
    /// The input is expected to lie in `[0, 86400)`; this is the exact left
    /// inverse of [`game_time`](WorldTime::game_time) over that range. The
    /// wrap boundary (a shifted value of exactly 86400 seconds) classifies
    /// as midnight, 12:00 AM.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_game_time(game_time: f64) -> Self {
        let mut time = game_time + DAWN_OFFSET;
        if time > TIME_MAX {
            time -= TIME_MAX;
        }

        let meridiem = if time < HALF_DAY || time == TIME_MAX {
            Meridiem::Am
        } else {
            Meridiem::Pm
        };
        if meridiem == Meridiem::Pm {
            time -= HALF_DAY;
        }

        let mut hour = (time / 3600.0).floor() as u8;
        let minute = ((time - f64::from(hour) * 3600.0) / 60.0).floor() as u8;

        if hour == 0 {
            hour = 12;
        }
        if hour > 12 {
            hour -= 12;
        }

        Self {
            hour,
            minute,
            meridiem,
        }
    }

    /// The game-time coordinate for this clock reading.
    ///
    /// Hours and minutes become seconds-of-half-day, the PM half shifts
    /// forward twelve hours (and 12 AM shifts back), and the whole thing is
    /// rebased onto the dawn epoch, wrapping negative results into the day.
    /// The result always lies in `[0, 86400)`.
    #[must_use]
    pub fn game_time(&self) -> f64 {
        let mut time = f64::from(self.hour) * 3600.0 + f64::from(self.minute) * 60.0;

        match self.meridiem {
            Meridiem::Pm if self.hour < 12 => time += HALF_DAY,
            Meridiem::Am if self.hour == 12 => time -= HALF_DAY,
            _ => {}
        }

        time -= DAWN_OFFSET;
        if time < 0.0 {
            time += TIME_MAX;
        }

        time
    }

    /// The hour on the 12-hour clock (1-12).
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// The minute (0-59).
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Which half of the day this time falls in.
    #[must_use]
    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }
}

impl fmt::Display for WorldTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}
