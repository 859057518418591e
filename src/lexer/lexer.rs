use std::rc::Rc;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z_]+").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+(\\.[0-9]*)?").unwrap();
}

/// Scans a source buffer into tokens on demand.
///
/// Every call to [`Lexer::next_token`] moves forward; once the input is
/// exhausted every further call yields an `EOF` token with empty text.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    pub fn at(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos + 1).copied()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    /// Produces the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.at() {
            None => MK_TOKEN!(TokenKind::EOF, String::new(), MK_SPAN!(self, self.pos, self.pos)),
            Some(b'(') => self.single(TokenKind::OpenParen),
            Some(b')') => self.single(TokenKind::CloseParen),
            Some(b'{') => self.single(TokenKind::OpenCurly),
            Some(b'}') => self.single(TokenKind::CloseCurly),
            Some(b',') => self.single(TokenKind::Comma),
            Some(b';') => self.single(TokenKind::Semicolon),
            Some(b'+') => self.single(TokenKind::Plus),
            Some(b'-') => self.single(TokenKind::Dash),
            Some(b'*') => self.single(TokenKind::Star),
            Some(b'/') => self.single(TokenKind::Slash),
            Some(b'%') => self.single(TokenKind::Percent),
            Some(b'<') => self.either(b'=', TokenKind::LessEquals, TokenKind::Less),
            Some(b'>') => self.either(b'=', TokenKind::GreaterEquals, TokenKind::Greater),
            Some(b'=') => self.either(b'=', TokenKind::Equals, TokenKind::Assignment),
            Some(b'!') => self.either(b'=', TokenKind::NotEquals, TokenKind::Not),
            Some(b'&') => self.either(b'&', TokenKind::And, TokenKind::Illegal),
            Some(b'|') => self.either(b'|', TokenKind::Or, TokenKind::Illegal),
            Some(b'"') => self.string(),
            Some(ch) if ch.is_ascii_alphabetic() || ch == b'_' => self.symbol(),
            Some(ch) if ch.is_ascii_digit() => self.number(),
            Some(_) => self.illegal(),
        };

        trace!("lexed {:?} {:?} at {}", token.kind, token.value, token.span.start.0);
        token
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.at() {
                Some(b' ' | b'\t' | b'\n' | b'\r') => self.advance_n(1),
                Some(b'/') if self.peek() == Some(b'/') => {
                    let line_length = self.remainder().find('\n').unwrap_or(self.remainder().len());
                    self.advance_n(line_length);
                }
                _ => break,
            }
        }
    }

    fn emit(&mut self, kind: TokenKind, length: usize) -> Token {
        let start = self.pos;
        self.advance_n(length);
        MK_TOKEN!(kind, self.source[start..self.pos].to_string(), MK_SPAN!(self, start, self.pos))
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        self.emit(kind, 1)
    }

    /// Emits `double` when the next byte is `second`, `single` otherwise.
    fn either(&mut self, second: u8, double: TokenKind, single: TokenKind) -> Token {
        if self.peek() == Some(second) {
            self.emit(double, 2)
        } else {
            self.emit(single, 1)
        }
    }

    fn symbol(&mut self) -> Token {
        let length = SYMBOL_PATTERN.find(self.remainder()).map_or(1, |m| m.end());
        let value = &self.remainder()[..length];
        let kind = RESERVED_LOOKUP.get(value).copied().unwrap_or(TokenKind::Identifier);

        self.emit(kind, length)
    }

    fn number(&mut self) -> Token {
        let matched = NUMBER_PATTERN.find(self.remainder()).map_or("", |m| m.as_str());
        let kind = if matched.contains('.') { TokenKind::Float } else { TokenKind::Int };
        let length = matched.len().max(1);

        self.emit(kind, length)
    }

    /// Reads a string literal verbatim, without escape processing.
    ///
    /// A string missing its closing quote becomes a single `Illegal` token
    /// holding the rest of the input, opening quote included.
    fn string(&mut self) -> Token {
        let start = self.pos;

        match self.remainder()[1..].find('"') {
            Some(length) => {
                let value = self.source[start + 1..start + 1 + length].to_string();
                self.advance_n(length + 2);
                MK_TOKEN!(TokenKind::String, value, MK_SPAN!(self, start, self.pos))
            }
            None => {
                let length = self.remainder().len();
                self.emit(TokenKind::Illegal, length)
            }
        }
    }

    fn illegal(&mut self) -> Token {
        let length = self.remainder().chars().next().map_or(1, char::len_utf8);
        self.emit(TokenKind::Illegal, length)
    }
}

/// Collects every token of `source`, ending with (and including) `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
