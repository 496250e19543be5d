//! Error types for command-argument parsing.
//!
//! Uses `thiserror` for ergonomic error definition. Every error carries a
//! finished, user-facing message; the dispatch layer is expected to catch
//! these at its boundary and relay them to the invoking console or player.

use thiserror::Error;

/// The error type surfaced by all asserting argument operations.
///
/// The `try_*` family of operations never constructs one of these; callers
/// opting into try-semantics branch on `Option`/`bool` results instead.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a too-few-arguments error.
    #[must_use]
    pub fn too_few_arguments() -> Self {
        Self::new(ErrorKind::TooFewArguments)
    }

    /// Creates a type mismatch error for the given 1-based argument position.
    #[must_use]
    pub fn type_mismatch(position: usize, expected: &'static str) -> Self {
        Self::new(ErrorKind::TypeMismatch { position, expected })
    }

    /// Creates a syntax error rendering the full expected grammar.
    #[must_use]
    pub fn syntax(usage: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax {
            usage: usage.into(),
        })
    }

    /// Creates a no-arguments-expected error.
    #[must_use]
    pub fn no_arguments_expected() -> Self {
        Self::new(ErrorKind::NoArgumentsExpected)
    }

    /// Creates an invalid-time error.
    #[must_use]
    pub fn invalid_time() -> Self {
        Self::new(ErrorKind::InvalidTime)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An argument position beyond the current token count was requested.
    #[error("too few arguments given")]
    TooFewArguments,

    /// A token was present but failed the expected type's coercion rule.
    #[error("expected {expected} for argument {position}")]
    TypeMismatch {
        /// The 1-based argument position.
        position: usize,
        /// Human-readable description of the expected type.
        expected: &'static str,
    },

    /// The token sequence did not match the expected command grammar.
    ///
    /// Literal mismatches fold into this kind; the rendered usage shows the
    /// full expected pattern, not which part failed.
    #[error("expected syntax: {usage}")]
    Syntax {
        /// The rendered expected grammar, e.g. `at <an integer number>`.
        usage: String,
    },

    /// Arguments were supplied to a command that takes none.
    #[error("no arguments expected")]
    NoArgumentsExpected,

    /// A syntactically valid time-of-day whose game time falls outside the
    /// valid day range. The parse rules make this unreachable in practice,
    /// but the coercion path checks it anyway.
    #[error("invalid time")]
    InvalidTime,
}
