//! Error taxonomy and core value types for ember command parsing.
//!
//! This crate provides:
//! - [`Error`] - The single user-facing error type for argument parsing
//! - [`Duration`] - A non-negative span of seconds with suffix-scaled parsing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod duration;
pub mod error;

pub use duration::Duration;
pub use error::{Error, ErrorKind};
