//! Ember - typed command-argument parsing for game servers
//!
//! This crate re-exports the ember member crates for convenient access.
//! For detailed documentation, see the individual crates.
//!
//! # Architecture
//!
//! ```text
//! ember_arguments  — argument lists, coercion, pattern matching, pops
//! ember_worldtime  — 12-hour clock / game-time codec
//! ember_foundation — error taxonomy, Duration
//! ```

pub use ember_arguments as arguments;
pub use ember_foundation as foundation;
pub use ember_worldtime as worldtime;
