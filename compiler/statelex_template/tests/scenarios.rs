//! End-to-end scans of the template grammar through every protocol.

use pretty_assertions::assert_eq;
use statelex::{ChannelCapacity, LexerOptions, Token};
use statelex_template::{lexer, tokenize, unclosed_block_message, TemplateKind};

const FIXTURE: &str = include_str!("fixtures/plaintext");

fn user(kind: TemplateKind, text: &str) -> Token<'_, TemplateKind> {
    Token::User { kind, text }
}

fn listen_all(input: &str, options: LexerOptions) -> Vec<Token<'_, TemplateKind>> {
    std::thread::scope(|scope| {
        let mut stream = lexer("push", input).with_options(options).spawn(scope);
        let mut tokens = Vec::new();
        while let Some((token, done)) = stream.listen() {
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    })
}

fn next_all(input: &str) -> Vec<Token<'_, TemplateKind>> {
    let mut stream = lexer("pull", input).pull();
    let mut tokens = Vec::new();
    while let Some((token, done)) = stream.next_token() {
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

#[test]
fn block_delimiters_around_text() {
    let tokens = next_all("<div>{{name}}</div>");
    assert_eq!(
        tokens,
        vec![
            user(TemplateKind::Text, "<div>"),
            user(TemplateKind::OpenBlock, "{{"),
            user(TemplateKind::Text, "name"),
            user(TemplateKind::CloseBlock, "}}"),
            user(TemplateKind::Text, "</div>"),
            Token::EndOfStream,
        ]
    );
    let visible: String = tokens[..5].iter().map(Token::value).collect();
    assert_eq!(visible, "<div>{{name}}</div>");
}

#[test]
fn unterminated_block_yields_one_error() {
    let input = "<p>{{name</p>";
    for tokens in [
        next_all(input),
        listen_all(input, LexerOptions::default()),
        lexer("sync", input).run_sync().collect(),
    ] {
        let errors: Vec<_> = tokens.iter().filter(|t| t.is_error()).collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].value(), unclosed_block_message(3));
        assert!(tokens.last().is_some_and(Token::is_error));
    }
}

#[test]
fn unterminated_block_at_line_break() {
    let tokens = tokenize("t", "ok\n{{ a\n}}");
    assert_eq!(
        tokens,
        vec![
            user(TemplateKind::Text, "ok"),
            user(TemplateKind::NewLine, "\n"),
            user(TemplateKind::OpenBlock, "{{"),
            Token::Error(statelex::ScanError::new(unclosed_block_message(3))),
        ]
    );
}

#[test]
fn empty_input_yields_only_end_of_stream() {
    assert_eq!(next_all(""), vec![Token::EndOfStream]);
    assert_eq!(listen_all("", LexerOptions::default()), vec![Token::EndOfStream]);
}

#[test]
fn fixture_round_trips() {
    let tokens = tokenize("plaintext", FIXTURE);
    assert_eq!(tokens.last(), Some(&Token::EndOfStream));
    let text: String = tokens.iter().filter_map(Token::text).collect();
    assert_eq!(text, FIXTURE);
}

#[test]
fn fixture_block_count() {
    let opens = tokenize("plaintext", FIXTURE)
        .iter()
        .filter(|t| t.kind() == Some(&TemplateKind::OpenBlock))
        .count();
    assert_eq!(opens, 6);
}

#[test]
fn fixture_same_through_every_protocol() {
    let pulled = next_all(FIXTURE);
    let synced: Vec<_> = lexer("sync", FIXTURE).run_sync().collect();
    assert_eq!(synced, pulled);
    for capacity in [
        ChannelCapacity::Proportional,
        ChannelCapacity::Fixed(0),
        ChannelCapacity::Fixed(1),
        ChannelCapacity::Fixed(64),
    ] {
        let options = LexerOptions::default().with_capacity(capacity);
        assert_eq!(listen_all(FIXTURE, options), pulled, "capacity {capacity:?}");
    }
}

#[test]
fn push_summary_matches_token_count() {
    let expected = tokenize("plaintext", FIXTURE).len();
    let summary = std::thread::scope(|scope| lexer("plaintext", FIXTURE).spawn(scope).finish());
    let summary = summary.ok();
    assert_eq!(summary.as_ref().map(|s| s.tokens), Some(expected));
    assert_eq!(summary.map(|s| s.errored), Some(false));
}
