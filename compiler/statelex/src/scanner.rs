//! The surface scanning actions work against.
//!
//! A [`Scanner`] pairs the [`Cursor`] with the token delivery of one scan.
//! Cursor primitives are forwarded so grammars call `s.read()` directly;
//! emission moves the pending region into a token.
//!
//! Once a terminal token (end-of-stream or error) has been delivered the
//! scanner is halted: later emits are dropped and the runner stops after the
//! current action returns, whatever that action names as its successor.

use std::fmt;

use crate::cursor::Cursor;
use crate::delivery::Delivery;
use crate::error::{DeliveryError, ScanError};
use crate::token::Token;

/// Cursor and token sink handed to every [`Action`](crate::Action).
pub struct Scanner<'src, K> {
    name: String,
    cursor: Cursor<'src>,
    delivery: Delivery<'src, K>,
    delivered: usize,
    terminal_sent: bool,
    disconnected: bool,
}

impl<'src, K> Scanner<'src, K> {
    pub(crate) fn new(name: String, input: &'src str, delivery: Delivery<'src, K>) -> Self {
        Self {
            name,
            cursor: Cursor::new(input),
            delivery,
            delivered: 0,
            terminal_sent: false,
            disconnected: false,
        }
    }

    /// Diagnostic name given to [`Lexer::new`](crate::Lexer::new).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying cursor, for snapshots and offsets.
    #[inline]
    pub fn cursor(&self) -> &Cursor<'src> {
        &self.cursor
    }

    /// Restore a cursor taken from [`cursor()`](Self::cursor) during the
    /// current action.
    ///
    /// Restoring a snapshot taken before the last emit would re-cover
    /// text that was already delivered. A snapshot of another input is
    /// ignored and `false` is returned.
    pub fn restore(&mut self, snapshot: Cursor<'src>) -> bool {
        if !std::ptr::eq(snapshot.input(), self.cursor.input()) {
            tracing::warn!(name = %self.name, "cursor snapshot of another input ignored");
            return false;
        }
        self.cursor = snapshot;
        true
    }

    // ─── Cursor primitives ─────────────────────────────────────────

    #[inline]
    pub fn read(&mut self) -> Option<char> {
        self.cursor.read()
    }

    #[inline]
    pub fn backtrack(&mut self) {
        self.cursor.backtrack();
    }

    #[inline]
    pub fn peek(&mut self) -> Option<char> {
        self.cursor.peek()
    }

    #[inline]
    pub fn accept_one_of(&mut self, set: &str) -> bool {
        self.cursor.accept_one_of(set)
    }

    #[inline]
    pub fn accept_run(&mut self, set: &str) {
        self.cursor.accept_run(set);
    }

    #[inline]
    pub fn accept_char(&mut self, expected: char) -> bool {
        self.cursor.accept_char(expected)
    }

    #[inline]
    pub fn accept_while(&mut self, pred: impl FnMut(char) -> bool) -> usize {
        self.cursor.accept_while(pred)
    }

    #[inline]
    pub fn discard(&mut self) {
        self.cursor.discard();
    }

    #[inline]
    pub fn has_upcoming_literal(&self, literal: &str) -> bool {
        self.cursor.has_upcoming_literal(literal)
    }

    #[inline]
    pub fn consume_literal(&mut self, literal: &str) -> bool {
        self.cursor.consume_literal(literal)
    }

    #[inline]
    pub fn skip_until(&mut self, literal: &str) -> bool {
        self.cursor.skip_until(literal)
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    #[inline]
    pub fn pending(&self) -> &'src str {
        self.cursor.pending()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    // ─── Emission ──────────────────────────────────────────────────

    /// Deliver the pending region as a `kind` token and clear it.
    ///
    /// Zero-length tokens are allowed; see
    /// [`emit_if_pending()`](Self::emit_if_pending) to skip them.
    pub fn emit(&mut self, kind: K) {
        let text = self.cursor.take_pending();
        self.deliver(Token::User { kind, text });
    }

    /// Emit only if the pending region is non-empty.
    pub fn emit_if_pending(&mut self, kind: K) -> bool {
        if self.cursor.pending().is_empty() {
            return false;
        }
        self.emit(kind);
        true
    }

    /// Deliver an error token and stop the scan.
    ///
    /// Returns `None` so an action can end with `return s.fail(..)`.
    pub fn fail<A>(&mut self, message: impl fmt::Display) -> Option<A> {
        self.deliver(Token::Error(ScanError::new(message.to_string())));
        None
    }

    /// Deliver the end-of-stream token and stop the scan.
    ///
    /// The runner delivers end-of-stream on its own when an action returns
    /// `None` without a terminal token, so this is only needed to stop from
    /// a position the grammar considers complete.
    pub fn finish<A>(&mut self) -> Option<A> {
        self.deliver(Token::EndOfStream);
        None
    }

    // ─── Runner interface ──────────────────────────────────────────

    pub(crate) fn deliver(&mut self, token: Token<'src, K>) {
        if self.disconnected {
            return;
        }
        if self.terminal_sent {
            tracing::warn!(name = %self.name, "token after terminal token dropped");
            return;
        }
        let terminal = token.is_terminal();
        match self.delivery.send(token) {
            Ok(()) => {
                self.delivered += 1;
                self.terminal_sent = terminal;
            }
            Err(DeliveryError::Disconnected) => {
                tracing::debug!(name = %self.name, "consumer went away, stopping scan");
                self.disconnected = true;
            }
            Err(err @ DeliveryError::Closed) => {
                tracing::warn!(name = %self.name, %err, "token dropped");
            }
        }
    }

    /// A terminal token was delivered or nobody is listening anymore.
    #[inline]
    pub(crate) fn is_halted(&self) -> bool {
        self.terminal_sent || self.disconnected
    }

    #[inline]
    pub(crate) fn terminal_sent(&self) -> bool {
        self.terminal_sent
    }

    #[inline]
    pub(crate) fn delivered(&self) -> usize {
        self.delivered
    }

    pub(crate) fn delivery_mut(&mut self) -> &mut Delivery<'src, K> {
        &mut self.delivery
    }
}
