//! Typed command-argument lists with literal-pattern matching.
//!
//! This crate turns a command's raw token sequence into strongly-typed
//! values, or a user-facing syntax error for the dispatch layer to relay.
//!
//! # Architecture
//!
//! ```text
//! "time set 4:30am"
//!          │  (tokenized at the input boundary)
//!          ▼
//! ┌─────────────────┐
//! │ ArgumentList    │  → ["time", "set", "4:30am"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ POPS / PATTERNS │  → try_pop_literal("time"), parse_one_with("set", ..)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COERCION        │  → WorldTime { 4:30 AM }, or "expected syntax: ..."
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokens`] - The argument list itself: cursor, checked access, escaping
//! - [`coerce`] - Per-type token coercion (the closed set of argument types)
//! - [`pattern`] - Positional and literal-interleaved multi-slot matching
//! - [`pop`] - Destructive variants that consume matched tokens

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coerce;
pub mod pattern;
pub mod pop;
pub mod tokens;

pub use coerce::{ArgumentType, CoerceError};
pub use tokens::ArgumentList;
