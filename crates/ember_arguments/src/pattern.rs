//! Positional and literal-interleaved multi-slot pattern matching.
//!
//! A command grammar is one to four typed value slots, optionally separated
//! by fixed keyword tokens ("literals"). The `try_parse_*` family matches
//! without touching the sequence and reports failure as `None`; the
//! `parse_*` family wraps the same matching and renders the full expected
//! grammar into a syntax error on failure.
//!
//! Matching is all-or-nothing: the remaining token count must equal the
//! slot count plus the number of present literals, every literal must match
//! exactly (case-sensitive), and every slot must coerce.

use ember_foundation::Error;

use crate::coerce::ArgumentType;
use crate::tokens::ArgumentList;

/// One element of an expected grammar, for usage rendering.
pub(crate) enum UsagePart<'a> {
    /// A fixed keyword token, rendered verbatim.
    Literal(&'a str),
    /// A typed value slot, rendered as `<description>`.
    Value(&'static str),
}

/// Renders an expected grammar as `literal <description> literal ...`.
///
/// Absent literal positions are passed as `None` and skipped, so callers
/// can hand over their literal arguments unchanged.
pub(crate) fn render_usage(parts: &[Option<UsagePart<'_>>]) -> String {
    let mut usage = String::new();
    for part in parts.iter().flatten() {
        if !usage.is_empty() {
            usage.push(' ');
        }
        match part {
            UsagePart::Literal(literal) => usage.push_str(literal),
            UsagePart::Value(description) => {
                usage.push('<');
                usage.push_str(description);
                usage.push('>');
            }
        }
    }
    usage
}

impl ArgumentList {
    /// Whether the remaining token at `at` equals the given literal exactly.
    fn literal_at(&self, at: usize, literal: &str) -> bool {
        self.get(at) == Some(literal)
    }

    /// Asserts that no arguments remain.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::NoArgumentsExpected`](ember_foundation::ErrorKind::NoArgumentsExpected)
    /// if any unconsumed token remains.
    pub fn parse_none(&self) -> Result<(), Error> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::no_arguments_expected())
        }
    }

    /// Matches a single value slot against the whole remaining sequence.
    #[must_use]
    pub fn try_parse_one<T: ArgumentType>(&self) -> Option<T> {
        if self.len() != 1 {
            return None;
        }
        self.try_get_at(0)
    }

    /// Matches a single value slot with optional literals before and after.
    #[must_use]
    pub fn try_parse_one_with<T: ArgumentType>(
        &self,
        literal1: Option<&str>,
        literal2: Option<&str>,
    ) -> Option<T> {
        let slot = usize::from(literal1.is_some());
        let expected = 1 + slot + usize::from(literal2.is_some());

        if self.len() != expected {
            return None;
        }
        if let Some(literal) = literal1 {
            if !self.literal_at(0, literal) {
                return None;
            }
        }
        if let Some(literal) = literal2 {
            if !self.literal_at(slot + 1, literal) {
                return None;
            }
        }

        self.try_get_at(slot)
    }

    /// Matches two value slots against the whole remaining sequence.
    #[must_use]
    pub fn try_parse_two<T: ArgumentType, U: ArgumentType>(&self) -> Option<(T, U)> {
        if self.len() != 2 {
            return None;
        }
        Some((self.try_get_at(0)?, self.try_get_at(1)?))
    }

    /// Matches two value slots with up to three interleaved literals.
    #[must_use]
    pub fn try_parse_two_with<T: ArgumentType, U: ArgumentType>(
        &self,
        literal1: Option<&str>,
        literal2: Option<&str>,
        literal3: Option<&str>,
    ) -> Option<(T, U)> {
        let slot1 = usize::from(literal1.is_some());
        let slot2 = slot1 + usize::from(literal2.is_some()) + 1;
        let expected = slot2 + usize::from(literal3.is_some()) + 1;

        if self.len() != expected {
            return None;
        }
        if let Some(literal) = literal1 {
            if !self.literal_at(0, literal) {
                return None;
            }
        }
        if let Some(literal) = literal2 {
            if !self.literal_at(slot1 + 1, literal) {
                return None;
            }
        }
        if let Some(literal) = literal3 {
            if !self.literal_at(slot2 + 1, literal) {
                return None;
            }
        }

        Some((self.try_get_at(slot1)?, self.try_get_at(slot2)?))
    }

    /// Matches three value slots against the whole remaining sequence.
    #[must_use]
    pub fn try_parse_three<T: ArgumentType, U: ArgumentType, V: ArgumentType>(
        &self,
    ) -> Option<(T, U, V)> {
        if self.len() != 3 {
            return None;
        }
        Some((
            self.try_get_at(0)?,
            self.try_get_at(1)?,
            self.try_get_at(2)?,
        ))
    }

    /// Matches three value slots with up to four interleaved literals.
    #[must_use]
    pub fn try_parse_three_with<T: ArgumentType, U: ArgumentType, V: ArgumentType>(
        &self,
        literal1: Option<&str>,
        literal2: Option<&str>,
        literal3: Option<&str>,
        literal4: Option<&str>,
    ) -> Option<(T, U, V)> {
        let slot1 = usize::from(literal1.is_some());
        let slot2 = slot1 + usize::from(literal2.is_some()) + 1;
        let slot3 = slot2 + usize::from(literal3.is_some()) + 1;
        let expected = slot3 + usize::from(literal4.is_some()) + 1;

        if self.len() != expected {
            return None;
        }
        if let Some(literal) = literal1 {
            if !self.literal_at(0, literal) {
                return None;
            }
        }
        if let Some(literal) = literal2 {
            if !self.literal_at(slot1 + 1, literal) {
                return None;
            }
        }
        if let Some(literal) = literal3 {
            if !self.literal_at(slot2 + 1, literal) {
                return None;
            }
        }
        if let Some(literal) = literal4 {
            if !self.literal_at(slot3 + 1, literal) {
                return None;
            }
        }

        Some((
            self.try_get_at(slot1)?,
            self.try_get_at(slot2)?,
            self.try_get_at(slot3)?,
        ))
    }

    /// Matches four value slots against the whole remaining sequence.
    #[must_use]
    pub fn try_parse_four<T: ArgumentType, U: ArgumentType, V: ArgumentType, W: ArgumentType>(
        &self,
    ) -> Option<(T, U, V, W)> {
        if self.len() != 4 {
            return None;
        }
        Some((
            self.try_get_at(0)?,
            self.try_get_at(1)?,
            self.try_get_at(2)?,
            self.try_get_at(3)?,
        ))
    }

    /// Asserting form of [`try_parse_one`](ArgumentList::try_parse_one).
    ///
    /// # Errors
    ///
    /// A syntax error rendering the expected grammar.
    pub fn parse_one<T: ArgumentType>(&self) -> Result<T, Error> {
        self.try_parse_one().ok_or_else(|| {
            Error::syntax(render_usage(&[Some(UsagePart::Value(T::DESCRIPTION))]))
        })
    }

    /// Asserting form of [`try_parse_one_with`](ArgumentList::try_parse_one_with).
    ///
    /// # Errors
    ///
    /// A syntax error rendering the expected grammar, literals included.
    pub fn parse_one_with<T: ArgumentType>(
        &self,
        literal1: Option<&str>,
        literal2: Option<&str>,
    ) -> Result<T, Error> {
        self.try_parse_one_with(literal1, literal2).ok_or_else(|| {
            Error::syntax(render_usage(&[
                literal1.map(UsagePart::Literal),
                Some(UsagePart::Value(T::DESCRIPTION)),
                literal2.map(UsagePart::Literal),
            ]))
        })
    }

    /// Asserting form of [`try_parse_two`](ArgumentList::try_parse_two).
    ///
    /// # Errors
    ///
    /// A syntax error rendering the expected grammar.
    pub fn parse_two<T: ArgumentType, U: ArgumentType>(&self) -> Result<(T, U), Error> {
        self.try_parse_two().ok_or_else(|| {
            Error::syntax(render_usage(&[
                Some(UsagePart::Value(T::DESCRIPTION)),
                Some(UsagePart::Value(U::DESCRIPTION)),
            ]))
        })
    }

    /// Asserting form of [`try_parse_two_with`](ArgumentList::try_parse_two_with).
    ///
    /// # Errors
    ///
    /// A syntax error rendering the expected grammar, literals included.
    pub fn parse_two_with<T: ArgumentType, U: ArgumentType>(
        &self,
        literal1: Option<&str>,
        literal2: Option<&str>,
        literal3: Option<&str>,
    ) -> Result<(T, U), Error> {
        self.try_parse_two_with(literal1, literal2, literal3)
            .ok_or_else(|| {
                Error::syntax(render_usage(&[
                    literal1.map(UsagePart::Literal),
                    Some(UsagePart::Value(T::DESCRIPTION)),
                    literal2.map(UsagePart::Literal),
                    Some(UsagePart::Value(U::DESCRIPTION)),
                    literal3.map(UsagePart::Literal),
                ]))
            })
    }

    /// Asserting form of [`try_parse_three`](ArgumentList::try_parse_three).
    ///
    /// # Errors
    ///
    /// A syntax error rendering the expected grammar.
    pub fn parse_three<T: ArgumentType, U: ArgumentType, V: ArgumentType>(
        &self,
    ) -> Result<(T, U, V), Error> {
        self.try_parse_three().ok_or_else(|| {
            Error::syntax(render_usage(&[
                Some(UsagePart::Value(T::DESCRIPTION)),
                Some(UsagePart::Value(U::DESCRIPTION)),
                Some(UsagePart::Value(V::DESCRIPTION)),
            ]))
        })
    }

    /// Asserting form of [`try_parse_three_with`](ArgumentList::try_parse_three_with).
    ///
    /// # Errors
    ///
    /// A syntax error rendering the expected grammar, literals included.
    pub fn parse_three_with<T: ArgumentType, U: ArgumentType, V: ArgumentType>(
        &self,
        literal1: Option<&str>,
        literal2: Option<&str>,
        literal3: Option<&str>,
        literal4: Option<&str>,
    ) -> Result<(T, U, V), Error> {
        self.try_parse_three_with(literal1, literal2, literal3, literal4)
            .ok_or_else(|| {
                Error::syntax(render_usage(&[
                    literal1.map(UsagePart::Literal),
                    Some(UsagePart::Value(T::DESCRIPTION)),
                    literal2.map(UsagePart::Literal),
                    Some(UsagePart::Value(U::DESCRIPTION)),
                    literal3.map(UsagePart::Literal),
                    Some(UsagePart::Value(V::DESCRIPTION)),
                    literal4.map(UsagePart::Literal),
                ]))
            })
    }

    /// Asserting form of [`try_parse_four`](ArgumentList::try_parse_four).
    ///
    /// # Errors
    ///
    /// A syntax error rendering the expected grammar.
    pub fn parse_four<T: ArgumentType, U: ArgumentType, V: ArgumentType, W: ArgumentType>(
        &self,
    ) -> Result<(T, U, V, W), Error> {
        self.try_parse_four().ok_or_else(|| {
            Error::syntax(render_usage(&[
                Some(UsagePart::Value(T::DESCRIPTION)),
                Some(UsagePart::Value(U::DESCRIPTION)),
                Some(UsagePart::Value(V::DESCRIPTION)),
                Some(UsagePart::Value(W::DESCRIPTION)),
            ]))
        })
    }
}
