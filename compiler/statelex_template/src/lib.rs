//! Tokenizer for text templates with `{{ ... }}` blocks.
//!
//! Splits input into literal text, block delimiters, block contents and
//! line breaks. A block must close on the line it opens; otherwise the scan
//! ends with an error token.
//!
//! ```text
//! <div>{{name}}</div>
//! Text("<div>") OpenBlock("{{") Text("name") CloseBlock("}}") Text("</div>") EOF
//! ```

mod grammar;
mod tracing_setup;

pub use grammar::{
    unclosed_block_message, TemplateKind, TemplateState, CLOSE_BLOCK, NEWLINE, OPEN_BLOCK,
};
pub use tracing_setup::init_tracing;

use statelex::{Lexer, Token};

/// A lexer for `input` starting outside any block.
pub fn lexer<'src>(name: &str, input: &'src str) -> Lexer<'src, TemplateState> {
    Lexer::new(name, input, TemplateState::Text)
}

/// Tokenize `input` inline, the terminal token included.
pub fn tokenize<'src>(name: &str, input: &'src str) -> Vec<Token<'src, TemplateKind>> {
    lexer(name, input).tokenize()
}
