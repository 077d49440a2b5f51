//! Character cursor with single-step backtracking.
//!
//! The cursor tracks three byte offsets into the borrowed input:
//!
//! ```text
//! input:  < d i v > { { n a m e } } ...
//!                   ^       ^
//!                 start   current
//! ```
//!
//! - `start` marks the beginning of the pending (not yet emitted) region.
//! - `current` is the offset of the next unread byte.
//! - `width` is the byte length of the most recently read character.
//!
//! `0 <= start <= current <= input.len()` holds after every operation, and
//! both offsets always sit on a `char` boundary.
//!
//! # Backtracking
//!
//! [`backtrack()`](Cursor::backtrack) undoes exactly one
//! [`read()`](Cursor::read). It consumes the recorded width, so a second
//! backtrack without an intervening read leaves the position unchanged
//! instead of stepping back into unrelated text.

/// Read position over the input of a single scan.
///
/// The cursor is [`Copy`], so grammars can snapshot it for multi-character
/// lookahead and restore it on mismatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'src> {
    input: &'src str,
    start: usize,
    current: usize,
    width: usize,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at offset 0 with an empty pending region.
    pub fn new(input: &'src str) -> Self {
        Self {
            input,
            start: 0,
            current: 0,
            width: 0,
        }
    }

    /// The full input this cursor scans.
    #[inline]
    pub fn input(&self) -> &'src str {
        self.input
    }

    /// Offset where the pending region begins.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset of the next unread byte.
    #[inline]
    pub fn pos(&self) -> usize {
        self.current
    }

    /// Byte width of the last character read, or 0 if it was consumed.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns `true` once every byte of the input has been read.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current >= self.input.len()
    }

    /// Text read since the last emit or discard.
    #[inline]
    pub fn pending(&self) -> &'src str {
        &self.input[self.start..self.current]
    }

    /// Unread remainder of the input.
    #[inline]
    pub fn remaining(&self) -> &'src str {
        &self.input[self.current..]
    }

    /// Read the next character and advance past it.
    ///
    /// Returns `None` at end of input, the end-of-stream character. The
    /// recorded width is then 0, so a following backtrack is a no-op.
    pub fn read(&mut self) -> Option<char> {
        let Some(ch) = self.remaining().chars().next() else {
            self.width = 0;
            return None;
        };
        self.width = ch.len_utf8();
        self.current += self.width;
        Some(ch)
    }

    /// Step back over the character returned by the last [`read()`](Self::read).
    #[inline]
    pub fn backtrack(&mut self) {
        self.current -= self.width;
        self.width = 0;
    }

    /// Returns the next character without moving.
    pub fn peek(&mut self) -> Option<char> {
        let ch = self.read();
        self.backtrack();
        ch
    }

    /// Read the next character if it is one of the characters in `set`.
    pub fn accept_one_of(&mut self, set: &str) -> bool {
        match self.read() {
            Some(ch) if set.contains(ch) => true,
            _ => {
                self.backtrack();
                false
            }
        }
    }

    /// Read characters for as long as they belong to `set`.
    pub fn accept_run(&mut self, set: &str) {
        while self.accept_one_of(set) {}
    }

    /// Read the next character if it equals `expected`.
    pub fn accept_char(&mut self, expected: char) -> bool {
        match self.read() {
            Some(ch) if ch == expected => true,
            _ => {
                self.backtrack();
                false
            }
        }
    }

    /// Read characters while `pred` holds; returns how many were read.
    pub fn accept_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        loop {
            match self.read() {
                Some(ch) if pred(ch) => count += 1,
                _ => {
                    self.backtrack();
                    return count;
                }
            }
        }
    }

    /// Drop the pending region without emitting it.
    ///
    /// This commits the last read: a backtrack right after it is a no-op.
    #[inline]
    pub fn discard(&mut self) {
        self.start = self.current;
        self.width = 0;
    }

    /// Returns `true` if the unread input begins with `literal`.
    #[inline]
    pub fn has_upcoming_literal(&self, literal: &str) -> bool {
        self.remaining().starts_with(literal)
    }

    /// Advance past `literal` if it is upcoming.
    ///
    /// The jump is not a single read, so it cannot be backtracked.
    pub fn consume_literal(&mut self, literal: &str) -> bool {
        if !self.has_upcoming_literal(literal) {
            return false;
        }
        self.current += literal.len();
        self.width = 0;
        true
    }

    /// Advance to the next occurrence of `literal`, leaving it unread.
    ///
    /// Returns `false` and moves to end of input when `literal` does not
    /// occur in the remainder. Uses `memchr::memmem` so long text runs
    /// are skipped without decoding every character.
    pub fn skip_until(&mut self, literal: &str) -> bool {
        self.width = 0;
        match memchr::memmem::find(self.remaining().as_bytes(), literal.as_bytes()) {
            Some(offset) => {
                self.current += offset;
                true
            }
            None => {
                self.current = self.input.len();
                false
            }
        }
    }

    /// Clear the pending region, returning its text.
    pub(crate) fn take_pending(&mut self) -> &'src str {
        let text = self.pending();
        self.discard();
        text
    }
}
