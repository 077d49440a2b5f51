//! Tokens delivered to the consumer.
//!
//! Grammar-defined kinds live in the open [`Token::User`] variant. The two
//! terminal markers are separate variants, so a grammar kind can never be
//! mistaken for end-of-stream or error.

use std::fmt;

use crate::error::ScanError;

/// Longest user token text [`Display`](fmt::Display) prints verbatim.
const DISPLAY_LIMIT: usize = 200;

/// A token produced by a scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'src, K> {
    /// A grammar token covering `text`, a slice of the input.
    User { kind: K, text: &'src str },
    /// The input was fully scanned.
    EndOfStream,
    /// A scanning action gave up; no tokens follow.
    Error(ScanError),
}

impl<'src, K> Token<'src, K> {
    /// Token text for user tokens, the message for errors, and `""` for
    /// end-of-stream.
    pub fn value(&self) -> &str {
        match self {
            Token::User { text, .. } => *text,
            Token::EndOfStream => "",
            Token::Error(err) => err.message(),
        }
    }

    /// The input slice of a user token.
    pub fn text(&self) -> Option<&'src str> {
        match self {
            Token::User { text, .. } => Some(*text),
            Token::EndOfStream | Token::Error(_) => None,
        }
    }

    /// The grammar kind of a user token.
    pub fn kind(&self) -> Option<&K> {
        match self {
            Token::User { kind, .. } => Some(kind),
            Token::EndOfStream | Token::Error(_) => None,
        }
    }

    /// Returns `true` for end-of-stream and error tokens.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Token::User { .. })
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Token::Error(_))
    }
}

impl<K> fmt::Display for Token<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::EndOfStream => f.write_str("EOF"),
            Token::Error(err) => write!(f, "{err}"),
            Token::User { text, .. } if text.len() > DISPLAY_LIMIT => {
                let cut = text
                    .char_indices()
                    .nth(DISPLAY_LIMIT)
                    .map_or(text.len(), |(cut, _)| cut);
                write!(f, "{:?}...", &text[..cut])
            }
            Token::User { text, .. } => f.write_str(text),
        }
    }
}
