//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, type names and identifiers
//! - Numeric literals (integers and floats)
//! - String literals, terminated and not
//! - Operators and punctuation
//! - Comments
//! - EOF behaviour

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), None)
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize(
        "if else while for loop in fn func return typeof break continue".to_string(),
        Some("test.lang".to_string()),
    );

    assert_eq!(tokens[0].kind, TokenKind::If);
    assert_eq!(tokens[1].kind, TokenKind::Else);
    assert_eq!(tokens[2].kind, TokenKind::While);
    assert_eq!(tokens[3].kind, TokenKind::For);
    assert_eq!(tokens[4].kind, TokenKind::Loop);
    assert_eq!(tokens[5].kind, TokenKind::In);
    assert_eq!(tokens[6].kind, TokenKind::Fn);
    assert_eq!(tokens[7].kind, TokenKind::Fn);
    assert_eq!(tokens[7].value, "func");
    assert_eq!(tokens[8].kind, TokenKind::Return);
    assert_eq!(tokens[9].kind, TokenKind::Typeof);
    assert_eq!(tokens[10].kind, TokenKind::Break);
    assert_eq!(tokens[11].kind, TokenKind::Continue);
    assert_eq!(tokens[12].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_types_and_literals() {
    let tokens = tokenize("int string float void true false null nil".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Type);
    assert_eq!(tokens[0].value, "int");
    assert_eq!(tokens[1].kind, TokenKind::Type);
    assert_eq!(tokens[1].value, "string");
    assert_eq!(tokens[2].kind, TokenKind::Type);
    assert_eq!(tokens[2].value, "float");
    assert_eq!(tokens[3].kind, TokenKind::Void);
    assert_eq!(tokens[4].kind, TokenKind::Bool);
    assert_eq!(tokens[5].kind, TokenKind::Bool);
    assert_eq!(tokens[6].kind, TokenKind::Nil);
    assert_eq!(tokens[7].kind, TokenKind::Nil);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar _underscore CamelCase iffy".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].value, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "iffy");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_identifiers_stop_at_digits() {
    let tokens = tokenize("baz_123".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "baz_");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].value, "123");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5 7.".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::Float);
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::Float);
    assert_eq!(tokens[4].value, "7.");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_second_dot_is_illegal() {
    let tokens = tokenize("1.2.3".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Float);
    assert_eq!(tokens[0].value, "1.2");
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, ".");
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[2].value, "3");
}

#[test]
fn test_negative_numbers_are_two_tokens() {
    assert_eq!(kinds("-5"), vec![TokenKind::Dash, TokenKind::Int, TokenKind::EOF]);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" """#.to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_strings_are_verbatim() {
    let tokens = tokenize(r#""tab\there""#.to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "tab\\there");
}

#[test]
fn test_unterminated_string_is_illegal() {
    let tokens = tokenize(r#"x = "never closed"#.to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Assignment);
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].value, "\"never closed");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / % == != < > <= >= = ! && ||"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::Not,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("(){},;"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_lone_ampersand_and_pipe_are_illegal() {
    let tokens = tokenize("a & b | c".to_string(), None);

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "&");
    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "|");
}

#[test]
fn test_unknown_bytes_are_illegal() {
    let tokens = tokenize("@ # é".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, "@");
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "#");
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].value, "é");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_comments_and_whitespace_are_skipped() {
    let source = "int x = 1; // trailing comment\n\t\r\n// whole line\nx";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Type,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.value, "");
    }
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("   \n\t  "), vec![TokenKind::EOF]);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("int  count = \"ab\";".to_string(), Some("spans.lang".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 10);
    assert_eq!(tokens[3].span.start.0, 13);
    assert_eq!(tokens[3].span.end.0, 17);
    assert_eq!(*tokens[3].span.start.1, "spans.lang");
}

#[test]
fn test_tokenize_function() {
    assert_eq!(
        kinds("int main(int x) { return x + 42; }"),
        vec![
            TokenKind::Type,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Type,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Return,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}
