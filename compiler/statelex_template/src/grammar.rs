//! States of the template grammar.
//!
//! ```text
//! Text ──"{{"──▶ OpenBlock ──▶ Block ──"}}"──▶ CloseBlock ──▶ Text
//!   │                            │
//!   └──"\n"──▶ NewLine ──▶ Text  └── EOF or "\n" ──▶ error
//! ```

use std::fmt;

use statelex::{Action, Scanner};

pub const OPEN_BLOCK: &str = "{{";
pub const CLOSE_BLOCK: &str = "}}";
pub const NEWLINE: &str = "\n";

/// Token kinds of the template grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Literal text outside blocks, or the contents of a block.
    Text,
    OpenBlock,
    CloseBlock,
    NewLine,
}

impl TemplateKind {
    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Text => "Text",
            TemplateKind::OpenBlock => "OpenBlock",
            TemplateKind::CloseBlock => "CloseBlock",
            TemplateKind::NewLine => "NewLine",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Diagnostic for a block that reaches end of input or a line break before
/// its closing `}}`.
pub fn unclosed_block_message(opened_at: usize) -> String {
    format!("unclosed block opened at offset {opened_at}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateState {
    /// Outside any block.
    Text,
    /// At `{{`.
    OpenBlock,
    /// Between `{{` (at `opened_at`) and `}}`.
    Block { opened_at: usize },
    /// At `}}`.
    CloseBlock,
    /// At a line break outside a block.
    NewLine,
}

impl Action for TemplateState {
    type Kind = TemplateKind;

    fn step(self, s: &mut Scanner<'_, TemplateKind>) -> Option<Self> {
        match self {
            TemplateState::Text => text(s),
            TemplateState::OpenBlock => {
                let opened_at = s.pos();
                s.consume_literal(OPEN_BLOCK);
                s.emit(TemplateKind::OpenBlock);
                Some(TemplateState::Block { opened_at })
            }
            TemplateState::Block { opened_at } => block(s, opened_at),
            TemplateState::CloseBlock => {
                s.consume_literal(CLOSE_BLOCK);
                s.emit(TemplateKind::CloseBlock);
                Some(TemplateState::Text)
            }
            TemplateState::NewLine => {
                s.consume_literal(NEWLINE);
                s.emit(TemplateKind::NewLine);
                Some(TemplateState::Text)
            }
        }
    }
}

fn text(s: &mut Scanner<'_, TemplateKind>) -> Option<TemplateState> {
    loop {
        if s.has_upcoming_literal(OPEN_BLOCK) {
            s.emit_if_pending(TemplateKind::Text);
            return Some(TemplateState::OpenBlock);
        }
        if s.has_upcoming_literal(NEWLINE) {
            s.emit_if_pending(TemplateKind::Text);
            return Some(TemplateState::NewLine);
        }
        if s.read().is_none() {
            s.emit_if_pending(TemplateKind::Text);
            return s.finish();
        }
    }
}

fn block(s: &mut Scanner<'_, TemplateKind>, opened_at: usize) -> Option<TemplateState> {
    loop {
        if s.has_upcoming_literal(CLOSE_BLOCK) {
            s.emit_if_pending(TemplateKind::Text);
            return Some(TemplateState::CloseBlock);
        }
        match s.read() {
            None | Some('\n') => return s.fail(unclosed_block_message(opened_at)),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests;
