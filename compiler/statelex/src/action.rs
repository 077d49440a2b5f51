//! Scanning actions: the states of a grammar.
//!
//! An action runs against the [`Scanner`], reading characters and emitting
//! tokens, then names the action to run next. Returning `None` ends the
//! scan. Grammars express their states in one of two ways:
//!
//! - an enum of named states implementing [`Action`], dispatched with a
//!   `match` in [`Action::step`];
//! - plain functions wrapped in [`StateFn`], each returning the next
//!   function.

use std::fmt;

use crate::scanner::Scanner;

/// A state of a grammar.
pub trait Action: Sized {
    /// Grammar token kinds carried by [`Token::User`](crate::Token::User).
    type Kind;

    /// Run this state once and return the next state, or `None` to stop.
    fn step(self, scanner: &mut Scanner<'_, Self::Kind>) -> Option<Self>;
}

/// A grammar state written as a function returning the next state.
///
/// ```text
/// fn text(s: &mut Scanner<'_, Kind>) -> Option<StateFn<Kind>> {
///     if s.skip_until("{{") {
///         s.emit_if_pending(Kind::Text);
///         return Some(StateFn(open_block));
///     }
///     s.emit_if_pending(Kind::Text);
///     s.finish()
/// }
/// ```
pub struct StateFn<K>(pub fn(&mut Scanner<'_, K>) -> Option<StateFn<K>>);

impl<K> Clone for StateFn<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for StateFn<K> {}

impl<K> fmt::Debug for StateFn<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateFn({:p})", self.0 as *const ())
    }
}

impl<K> Action for StateFn<K> {
    type Kind = K;

    #[inline]
    fn step(self, scanner: &mut Scanner<'_, K>) -> Option<Self> {
        (self.0)(scanner)
    }
}
