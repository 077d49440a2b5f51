//! Token delivery from the running grammar to the consumer.
//!
//! Uses enum dispatch instead of a trait object: the variant is fixed when
//! the scan starts and every emit goes through a single `match`.
//!
//! - [`Delivery::Local`] is an in-thread queue for pull and sync mode. The
//!   producer and consumer share a thread, so it grows instead of blocking.
//! - [`Delivery::Channel`] is a bounded crossbeam channel for push mode. A
//!   full channel blocks the worker until the consumer catches up.

use std::collections::VecDeque;

use crossbeam::channel::{self, Receiver, Sender};

use crate::error::DeliveryError;
use crate::token::Token;

pub(crate) enum Delivery<'src, K> {
    Local {
        queue: VecDeque<Token<'src, K>>,
        closed: bool,
    },
    /// `None` once closed; dropping the sender disconnects the receiver.
    Channel(Option<Sender<Token<'src, K>>>),
}

impl<'src, K> Delivery<'src, K> {
    pub(crate) fn local() -> Self {
        Delivery::Local {
            queue: VecDeque::new(),
            closed: false,
        }
    }

    /// Bounded channel delivery and the receiving end for the consumer.
    pub(crate) fn channel(capacity: usize) -> (Self, Receiver<Token<'src, K>>) {
        let (sender, receiver) = channel::bounded(capacity);
        (Delivery::Channel(Some(sender)), receiver)
    }

    /// Hand a token to the consumer, blocking while a bounded channel is full.
    pub(crate) fn send(&mut self, token: Token<'src, K>) -> Result<(), DeliveryError> {
        match self {
            Delivery::Local { closed: true, .. } | Delivery::Channel(None) => {
                Err(DeliveryError::Closed)
            }
            Delivery::Local { queue, .. } => {
                queue.push_back(token);
                Ok(())
            }
            Delivery::Channel(Some(sender)) => sender
                .send(token)
                .map_err(|_| DeliveryError::Disconnected),
        }
    }

    /// Next queued token of a local delivery. Always `None` for channels,
    /// whose tokens are taken from the receiver.
    pub(crate) fn pop(&mut self) -> Option<Token<'src, K>> {
        match self {
            Delivery::Local { queue, .. } => queue.pop_front(),
            Delivery::Channel(_) => None,
        }
    }

    /// Refuse further sends. Tokens already queued stay available.
    pub(crate) fn close(&mut self) {
        match self {
            Delivery::Local { closed, .. } => *closed = true,
            Delivery::Channel(sender) => *sender = None,
        }
    }

    pub(crate) fn is_closed(&self) -> bool {
        matches!(
            self,
            Delivery::Local { closed: true, .. } | Delivery::Channel(None)
        )
    }
}

#[cfg(test)]
mod tests;
