use super::*;
use pretty_assertions::assert_eq;
use statelex::Token;

use crate::tokenize;

/// `(kind name, value)` pairs, terminal token rendered as `EOF` / `Error`.
fn scan(input: &str) -> Vec<(&'static str, String)> {
    tokenize("test", input)
        .into_iter()
        .map(|token| match &token {
            Token::User { kind, text } => (kind.name(), (*text).to_owned()),
            Token::EndOfStream => ("EOF", String::new()),
            Token::Error(err) => ("Error", err.message().to_owned()),
        })
        .collect()
}

fn pairs(expected: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    expected
        .iter()
        .map(|(kind, value)| (*kind, (*value).to_owned()))
        .collect()
}

#[test]
fn plain_text_is_one_token() {
    assert_eq!(scan("hello"), pairs(&[("Text", "hello"), ("EOF", "")]));
}

#[test]
fn block_in_markup() {
    assert_eq!(
        scan("<div>{{name}}</div>"),
        pairs(&[
            ("Text", "<div>"),
            ("OpenBlock", "{{"),
            ("Text", "name"),
            ("CloseBlock", "}}"),
            ("Text", "</div>"),
            ("EOF", ""),
        ])
    );
}

#[test]
fn adjacent_blocks() {
    assert_eq!(
        scan("{{a}}{{b}}"),
        pairs(&[
            ("OpenBlock", "{{"),
            ("Text", "a"),
            ("CloseBlock", "}}"),
            ("OpenBlock", "{{"),
            ("Text", "b"),
            ("CloseBlock", "}}"),
            ("EOF", ""),
        ])
    );
}

#[test]
fn empty_block_has_no_text_token() {
    assert_eq!(
        scan("{{}}"),
        pairs(&[("OpenBlock", "{{"), ("CloseBlock", "}}"), ("EOF", "")])
    );
}

#[test]
fn newlines_outside_blocks() {
    assert_eq!(
        scan("a\n\nb"),
        pairs(&[
            ("Text", "a"),
            ("NewLine", "\n"),
            ("NewLine", "\n"),
            ("Text", "b"),
            ("EOF", ""),
        ])
    );
}

#[test]
fn single_braces_are_text() {
    assert_eq!(
        scan("{a} }"),
        pairs(&[("Text", "{a} }"), ("EOF", "")])
    );
}

#[test]
fn multibyte_text_and_block() {
    assert_eq!(
        scan("héllo {{wörld}}"),
        pairs(&[
            ("Text", "héllo "),
            ("OpenBlock", "{{"),
            ("Text", "wörld"),
            ("CloseBlock", "}}"),
            ("EOF", ""),
        ])
    );
}

#[test]
fn unclosed_block_at_end_of_input() {
    assert_eq!(
        scan("<p>{{name"),
        pairs(&[
            ("Text", "<p>"),
            ("OpenBlock", "{{"),
            ("Error", "unclosed block opened at offset 3"),
        ])
    );
}

#[test]
fn newline_inside_block_is_an_error() {
    assert_eq!(
        scan("{{a\nb}}"),
        pairs(&[
            ("OpenBlock", "{{"),
            ("Error", "unclosed block opened at offset 0"),
        ])
    );
}

#[test]
fn empty_input() {
    assert_eq!(scan(""), pairs(&[("EOF", "")]));
}

#[test]
fn kind_display_uses_name() {
    assert_eq!(TemplateKind::CloseBlock.to_string(), "CloseBlock");
}
