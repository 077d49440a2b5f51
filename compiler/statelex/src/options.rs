//! Per-scan configuration.

/// Smallest channel capacity chosen by [`ChannelCapacity::Proportional`].
pub const MIN_CAPACITY: usize = 2;

/// Capacity of the bounded channel used in push mode.
///
/// Pull and sync modes deliver through an in-thread queue and ignore it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelCapacity {
    /// Half the input length in bytes, at least [`MIN_CAPACITY`].
    #[default]
    Proportional,
    /// Exactly this many tokens. `0` makes every send a rendezvous.
    Fixed(usize),
}

impl ChannelCapacity {
    /// Resolve the capacity for an input of `input_len` bytes.
    pub fn resolve(self, input_len: usize) -> usize {
        match self {
            ChannelCapacity::Proportional => (input_len / 2).max(MIN_CAPACITY),
            ChannelCapacity::Fixed(n) => n,
        }
    }
}

/// Options applied to a [`Lexer`](crate::Lexer) before it starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexerOptions {
    pub capacity: ChannelCapacity,
}

impl LexerOptions {
    #[must_use]
    pub fn with_capacity(mut self, capacity: ChannelCapacity) -> Self {
        self.capacity = capacity;
        self
    }
}
