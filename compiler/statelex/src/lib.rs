//! State-function lexing engine.
//!
//! A grammar is a graph of scanning actions. Each action reads characters
//! through the [`Scanner`], emits [`Token`]s for the text it recognized, and
//! names the action to run next; returning `None` ends the scan. The engine
//! owns the cursor bookkeeping, guarantees that every scan ends with exactly
//! one terminal token, and delivers tokens through one of three protocols
//! chosen when the scan starts (see [`Lexer`]).
//!
//! # Usage
//!
//! ```text
//! #[derive(Debug)]
//! enum Kind { Text, Open, Close }
//!
//! fn text(s: &mut Scanner<'_, Kind>) -> Option<StateFn<Kind>> {
//!     let found = s.skip_until("{{");
//!     s.emit_if_pending(Kind::Text);
//!     if found { Some(StateFn(open)) } else { s.finish() }
//! }
//!
//! let mut stream = Lexer::new("page", "<p>{{x}}</p>", StateFn(text)).pull();
//! while let Some((token, done)) = stream.next_token() {
//!     println!("{token}");
//! }
//!
//! // Or on a worker thread:
//! std::thread::scope(|scope| {
//!     let mut stream = Lexer::new("page", input, StateFn(text)).spawn(scope);
//!     while let Some((token, _)) = stream.listen() { /* ... */ }
//! });
//! ```
//!
//! # Logging
//!
//! Each scan runs inside a `scan` tracing span carrying its name and mode.
//! Transitions are logged at `trace`, completion at `debug`.

mod action;
mod cursor;
mod delivery;
mod error;
mod lexer;
mod options;
mod runner;
mod scanner;
mod token;

pub use action::{Action, StateFn};
pub use cursor::Cursor;
pub use error::{EngineError, ScanError};
pub use lexer::{Lexer, PullStream, PushStream, ScanSummary};
pub use options::{ChannelCapacity, LexerOptions, MIN_CAPACITY};
pub use scanner::Scanner;
pub use token::Token;
