//! Bidirectional 12-hour clock / game-time codec.
//!
//! The simulated world measures time-of-day as a continuous coordinate in
//! `[0, 86400)`, offset from the wall clock by a fixed dawn epoch: game time
//! zero is 4:30 AM. [`WorldTime`] is the human-facing 12-hour representation
//! and converts losslessly to and from that coordinate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clock;

pub use clock::{Meridiem, TIME_MAX, TIME_MIN, WorldTime};
