use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("loop", TokenKind::Loop);
        map.insert("in", TokenKind::In);
        map.insert("fn", TokenKind::Fn);
        map.insert("func", TokenKind::Fn);
        map.insert("return", TokenKind::Return);
        map.insert("typeof", TokenKind::Typeof);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("true", TokenKind::Bool);
        map.insert("false", TokenKind::Bool);
        map.insert("null", TokenKind::Nil);
        map.insert("nil", TokenKind::Nil);
        map.insert("int", TokenKind::Type);
        map.insert("string", TokenKind::Type);
        map.insert("float", TokenKind::Type);
        map.insert("void", TokenKind::Void);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,

    Identifier,
    Int,
    Float,
    String,
    Bool,
    Nil,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Comma,
    Semicolon,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    Assignment, // =

    Equals,    // ==
    NotEquals, // !=
    Less,
    Greater,
    LessEquals,
    GreaterEquals,

    Not,
    And,
    Or,

    // Reserved
    If,
    Else,
    While,
    For,
    Loop,
    In,
    Fn,
    Return,
    Type, // int, string, float
    Void,
    Typeof,
    Break,
    Continue,
}

impl TokenKind {
    /// Symbolic name used in diagnostics, e.g. `(` or `IDENT`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EOF => "EOF",
            TokenKind::Identifier => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Bool => "BOOL",
            TokenKind::Nil => "NIL",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::LessEquals => "<=",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Not => "!",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::Loop => "loop",
            TokenKind::In => "in",
            TokenKind::Fn => "fn",
            TokenKind::Return => "return",
            TokenKind::Type => "TYPE",
            TokenKind::Void => "void",
            TokenKind::Typeof => "typeof",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
        }
    }

    /// Whether a token of this kind always begins a statement.
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Loop
                | TokenKind::Fn
                | TokenKind::Return
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::Type
                | TokenKind::Void
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<10} {}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
