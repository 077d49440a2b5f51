//! Error types.
//!
//! A scan can fail in exactly one way visible to grammars: an action calls
//! [`Scanner::fail`](crate::Scanner::fail), which delivers a [`ScanError`]
//! inside the terminal [`Token::Error`](crate::Token::Error). The other
//! types here describe host-side failures that never reach the token stream.

use thiserror::Error;

/// Diagnostic raised by a scanning action. Always fatal to the scan.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ScanError {
    message: String,
}

impl ScanError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Failure of a background scan, reported by
/// [`PushStream::finish`](crate::PushStream::finish).
#[derive(Debug, Error)]
pub enum EngineError {
    /// A scanning action panicked on the worker thread.
    #[error("scan worker for `{name}` panicked")]
    WorkerPanicked { name: String },
}

/// Why a token could not be delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub(crate) enum DeliveryError {
    #[error("delivery already closed")]
    Closed,
    #[error("token receiver disconnected")]
    Disconnected,
}
