//! Lexer construction and the consumption protocols.
//!
//! A [`Lexer`] is consumed by exactly one start method, which fixes how the
//! grammar executes for the rest of the scan:
//!
//! | Method | Execution | Consumer call |
//! |--------|-----------|---------------|
//! | [`Lexer::pull`] | inline, one transition per empty queue | [`PullStream::next_token`] |
//! | [`Lexer::spawn`] | scoped worker thread, bounded channel | [`PushStream::listen`] |
//! | [`Lexer::run_sync`] | to completion before returning | [`PullStream::next_token`] |
//!
//! All three deliver the same tokens in the same order. Because the lexer
//! is moved into the stream, a scan can neither be restarted nor consumed
//! through two protocols at once.

use std::thread::{Scope, ScopedJoinHandle};

use crossbeam::channel::Receiver;

use crate::action::Action;
use crate::delivery::Delivery;
use crate::error::EngineError;
use crate::options::LexerOptions;
use crate::runner::Runner;
use crate::scanner::Scanner;
use crate::token::Token;

/// A scan that has not started yet.
pub struct Lexer<'src, A> {
    name: String,
    input: &'src str,
    initial: A,
    options: LexerOptions,
}

impl<'src, A: Action> Lexer<'src, A> {
    /// Prepare a scan of `input` starting in state `initial`.
    ///
    /// `name` only labels logs and the [`ScanSummary`].
    pub fn new(name: impl Into<String>, input: &'src str, initial: A) -> Self {
        Self {
            name: name.into(),
            input,
            initial,
            options: LexerOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: LexerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input(&self) -> &'src str {
        self.input
    }

    /// Scan inline: each [`PullStream::next_token`] call advances the
    /// grammar only as far as needed to produce one token.
    pub fn pull(self) -> PullStream<'src, A> {
        let span = tracing::debug_span!("scan", name = %self.name, mode = "pull");
        let scanner = Scanner::new(self.name.clone(), self.input, Delivery::local());
        PullStream {
            name: self.name,
            runner: Runner::new(scanner, self.initial),
            span,
            received: 0,
            errored: false,
            done: false,
        }
    }

    /// Scan the whole input on the calling thread, then hand back a stream
    /// that only drains the buffered tokens.
    pub fn run_sync(self) -> PullStream<'src, A> {
        let mut stream = self.pull();
        stream.span.in_scope(|| {
            tracing::debug!("running to completion");
            stream.runner.run();
        });
        stream
    }

    /// Run the grammar on a worker thread of `scope`.
    ///
    /// Tokens travel through a bounded channel sized by
    /// [`LexerOptions::capacity`]; a slow consumer stalls the worker rather
    /// than losing tokens. Dropping the stream early stops the worker at its
    /// next emit.
    pub fn spawn<'scope, 'env>(
        self,
        scope: &'scope Scope<'scope, 'env>,
    ) -> PushStream<'scope, 'src, A::Kind>
    where
        'src: 'scope,
        A: Send + 'scope,
        A::Kind: Send + 'scope,
    {
        let capacity = self.options.capacity.resolve(self.input.len());
        let span = tracing::debug_span!("scan", name = %self.name, mode = "push", capacity);
        let (delivery, receiver) = Delivery::channel(capacity);
        let mut runner = Runner::new(
            Scanner::new(self.name.clone(), self.input, delivery),
            self.initial,
        );
        let worker = scope.spawn(move || span.in_scope(|| runner.run()));
        PushStream {
            name: self.name,
            receiver,
            worker,
            received: 0,
            errored: false,
            done: false,
        }
    }

    /// Scan inline and collect every token, the terminal one included.
    pub fn tokenize(self) -> Vec<Token<'src, A::Kind>> {
        self.pull().collect()
    }
}

/// Counts reported once a stream has been consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanSummary {
    pub name: String,
    /// Tokens received, the terminal token included.
    pub tokens: usize,
    /// The scan ended with an error token.
    pub errored: bool,
}

/// Tokens of a scan that runs on the consumer's thread.
pub struct PullStream<'src, A: Action> {
    name: String,
    runner: Runner<'src, A>,
    span: tracing::Span,
    received: usize,
    errored: bool,
    done: bool,
}

impl<'src, A: Action> PullStream<'src, A> {
    /// Next token and whether it is the terminal one.
    ///
    /// Runs grammar transitions until a token is queued. Returns `None`
    /// after the terminal token has been returned.
    pub fn next_token(&mut self) -> Option<(Token<'src, A::Kind>, bool)> {
        if self.done {
            return None;
        }
        let span = self.span.clone();
        let _enter = span.enter();
        loop {
            if let Some(token) = self.runner.pop_token() {
                return Some(self.record(token));
            }
            if !self.runner.is_active() {
                self.done = true;
                return None;
            }
            self.runner.step();
        }
    }

    /// Returns `true` once the terminal token has been handed out.
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            name: self.name.clone(),
            tokens: self.received,
            errored: self.errored,
        }
    }

    fn record(&mut self, token: Token<'src, A::Kind>) -> (Token<'src, A::Kind>, bool) {
        let terminal = token.is_terminal();
        self.received += 1;
        self.errored |= token.is_error();
        self.done = terminal;
        (token, terminal)
    }
}

impl<'src, A: Action> Iterator for PullStream<'src, A> {
    type Item = Token<'src, A::Kind>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().map(|(token, _)| token)
    }
}

/// Tokens of a scan running on a worker thread.
pub struct PushStream<'scope, 'src, K> {
    name: String,
    receiver: Receiver<Token<'src, K>>,
    worker: ScopedJoinHandle<'scope, ()>,
    received: usize,
    errored: bool,
    done: bool,
}

impl<'src, K> PushStream<'_, 'src, K> {
    /// Block until the next token arrives; the flag marks the terminal one.
    ///
    /// Returns `None` after the terminal token, or if the worker stopped
    /// without sending one (a panicking action; see [`finish`](Self::finish)).
    pub fn listen(&mut self) -> Option<(Token<'src, K>, bool)> {
        if self.done {
            return None;
        }
        let Ok(token) = self.receiver.recv() else {
            self.done = true;
            return None;
        };
        let terminal = token.is_terminal();
        self.received += 1;
        self.errored |= token.is_error();
        self.done = terminal;
        Some((token, terminal))
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Drain anything left, wait for the worker and summarize the scan.
    pub fn finish(mut self) -> Result<ScanSummary, EngineError> {
        while self.listen().is_some() {}
        if self.worker.join().is_err() {
            return Err(EngineError::WorkerPanicked { name: self.name });
        }
        Ok(ScanSummary {
            name: self.name,
            tokens: self.received,
            errored: self.errored,
        })
    }
}

impl<'src, K> Iterator for PushStream<'_, 'src, K> {
    type Item = Token<'src, K>;

    fn next(&mut self) -> Option<Self::Item> {
        self.listen().map(|(token, _)| token)
    }
}
