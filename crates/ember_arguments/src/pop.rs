//! Destructive variants that consume matched tokens.
//!
//! These mutate the list on success and leave it untouched on failure. The
//! front pops use prefix semantics (at-least the required token count, not
//! exactly), so a command can peel off leading flags and keep parsing what
//! remains; [`try_pop_any`](crate::ArgumentList::try_pop_any) is the one
//! operation that searches the whole sequence instead of the front.

use crate::coerce::ArgumentType;
use crate::tokens::ArgumentList;

impl ArgumentList {
    /// Consumes the front token if it equals the given literal exactly.
    pub fn try_pop_literal(&mut self, literal: &str) -> bool {
        if self.get(0) == Some(literal) {
            self.advance(1);
            true
        } else {
            false
        }
    }

    /// Consumes and returns the front token if it coerces to `T`.
    pub fn try_pop_one<T: ArgumentType>(&mut self) -> Option<T> {
        let value = self.try_get_at(0)?;
        self.advance(1);
        Some(value)
    }

    /// Consumes a literal-framed value from the front of the sequence.
    ///
    /// The shape is the single-slot literal-interleaved pattern, matched as
    /// a prefix: the sequence needs at least `slots + literals` tokens, the
    /// literals must match exactly at their fixed positions, and the slot
    /// must coerce. On success all consumed tokens are removed from the
    /// front.
    pub fn try_pop_one_with<T: ArgumentType>(
        &mut self,
        literal1: Option<&str>,
        literal2: Option<&str>,
    ) -> Option<T> {
        let slot = usize::from(literal1.is_some());
        let count = 1 + slot + usize::from(literal2.is_some());

        if self.len() < count {
            return None;
        }
        if let Some(literal) = literal1 {
            if self.get(0) != Some(literal) {
                return None;
            }
        }
        if let Some(literal) = literal2 {
            if self.get(slot + 1) != Some(literal) {
                return None;
            }
        }

        let value = self.try_get_at(slot)?;
        self.advance(count);
        Some(value)
    }

    /// Searches the whole sequence for `literal` followed by a `T` value,
    /// removes the first such pair, and returns the value.
    ///
    /// The scan runs left to right over every remaining position before
    /// declaring failure; a literal whose following token does not coerce is
    /// skipped, not fatal. Order of the surrounding tokens is preserved.
    pub fn try_pop_any<T: ArgumentType>(&mut self, literal: &str) -> Option<T> {
        for at in 0..self.len() {
            if self.get(at) == Some(literal) {
                if let Some(value) = self.try_get_at::<T>(at + 1) {
                    self.remove_pair(at);
                    return Some(value);
                }
            }
        }
        None
    }
}
