//! State-machine runner.
//!
//! Drives the grammar one transition at a time: the active action runs
//! against the scanner and its return value becomes the next state. The
//! runner becomes terminal when an action returns `None` or the scanner is
//! halted, then guarantees exactly one terminal token and closes delivery.

use crate::action::Action;
use crate::scanner::Scanner;
use crate::token::Token;

pub(crate) struct Runner<'src, A: Action> {
    scanner: Scanner<'src, A::Kind>,
    state: Option<A>,
    steps: usize,
}

impl<'src, A: Action> Runner<'src, A> {
    pub(crate) fn new(scanner: Scanner<'src, A::Kind>, initial: A) -> Self {
        Self {
            scanner,
            state: Some(initial),
            steps: 0,
        }
    }

    #[inline]
    pub(crate) fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Run exactly one transition. Returns whether the runner is still active.
    pub(crate) fn step(&mut self) -> bool {
        let Some(action) = self.state.take() else {
            return false;
        };
        self.steps += 1;
        tracing::trace!(step = self.steps, pos = self.scanner.pos(), "transition");

        let next = action.step(&mut self.scanner);
        if !self.scanner.is_halted() {
            self.state = next;
        }
        if self.state.is_none() {
            self.terminate();
        }
        self.state.is_some()
    }

    /// Run transitions until the grammar stops.
    pub(crate) fn run(&mut self) {
        while self.step() {}
    }

    /// Next token queued by a local delivery.
    pub(crate) fn pop_token(&mut self) -> Option<Token<'src, A::Kind>> {
        self.scanner.delivery_mut().pop()
    }

    fn terminate(&mut self) {
        if self.scanner.delivery_mut().is_closed() {
            return;
        }
        if !self.scanner.terminal_sent() {
            self.scanner.deliver(Token::EndOfStream);
        }
        self.scanner.delivery_mut().close();
        tracing::debug!(
            steps = self.steps,
            tokens = self.scanner.delivered(),
            "scan complete"
        );
    }
}
