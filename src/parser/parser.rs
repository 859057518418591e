//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the Parser struct and the program-level entry
//! points. The parser pulls tokens from a [`Lexer`] on demand and keeps a
//! three-token window: the current token plus two tokens of lookahead.
//! The second lookahead token is only consulted to tell function
//! declarations apart from variable declarations.
//!
//! Parse functions return `Result`; the statement loops record failures
//! in the parser's diagnostics list and resynchronise, so one parse can
//! report several problems.

use std::mem;

use log::debug;

use crate::{
    ast::ast::{Expr, Program},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    expr::parse_expr,
    lookups::{BindingPower, LOOKUPS},
    stmt::parse_stmt,
};

/// The parser state: the token window and the recorded diagnostics.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// The token being parsed
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Two tokens of lookahead
    peek2_token: Token,
    /// Diagnostics in the order they were recorded
    errors: Vec<Error>,
}

impl Parser {
    /// Creates a new Parser and fills its lookahead window.
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();
        let peek2_token = lexer.next_token();

        Parser {
            lexer,
            current_token,
            peek_token,
            peek2_token,
            errors: vec![],
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn peek2_token_kind(&self) -> TokenKind {
        self.peek2_token.kind
    }

    /// Shifts the window one token forward.
    pub fn advance(&mut self) {
        let incoming = self.lexer.next_token();
        let peek2 = mem::replace(&mut self.peek2_token, incoming);
        let peek = mem::replace(&mut self.peek_token, peek2);
        self.current_token = peek;
    }

    /// Advances onto the next token if it has the expected kind.
    ///
    /// Otherwise nothing is consumed and an `UnexpectedPeek` error describing
    /// the mismatch is returned.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek_token.kind == expected_kind {
            self.advance();
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedPeek {
                    expected: expected_kind,
                    found: self.peek_token.kind,
                },
                self.peek_token.span.start.clone(),
            ))
        }
    }

    pub fn current_binding_power(&self) -> BindingPower {
        LOOKUPS.binding_power(self.current_token.kind)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        LOOKUPS.binding_power(self.peek_token.kind)
    }

    /// Returns the start position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start.clone()
    }

    pub fn push_error(&mut self, error: Error) {
        debug!(
            "parse error at {}:{}: {}",
            error.get_position().1,
            error.get_position().0,
            error
        );
        self.errors.push(error);
    }

    /// Diagnostics recorded so far, oldest first.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Skips what remains of a statement that failed to parse.
    ///
    /// Stops on a `;` or on the `}` closing a block opened inside the broken
    /// statement, or just before a statement keyword or the enclosing block's
    /// `}`. The current token is left on the last skipped token, matching
    /// where a successfully parsed statement leaves it.
    ///
    /// Returns `true` when the current token is the enclosing block's `}`,
    /// which the caller must not step over.
    pub fn synchronize(&mut self) -> bool {
        let mut depth = 0usize;

        loop {
            match self.current_token_kind() {
                TokenKind::EOF => return false,
                TokenKind::OpenCurly => depth += 1,
                TokenKind::CloseCurly if depth == 0 => return true,
                TokenKind::CloseCurly => {
                    depth -= 1;
                    if depth == 0 {
                        return false;
                    }
                }
                TokenKind::Semicolon if depth == 0 => return false,
                _ => {}
            }

            if depth == 0
                && (self.peek_token_kind() == TokenKind::CloseCurly
                    || self.peek_token_kind().starts_statement())
            {
                return false;
            }

            self.advance();
        }
    }

    /// Parses statements until EOF.
    ///
    /// Always produces a program; statements that failed to parse are left
    /// out and their diagnostics are available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current_token_kind() != TokenKind::EOF {
            if self.current_token_kind() == TokenKind::CloseCurly {
                self.push_error(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: self.current_token.value.clone(),
                    },
                    self.get_position(),
                ));
            } else {
                match parse_stmt(self) {
                    Ok(Some(stmt)) => program.statements.push(stmt),
                    Ok(None) => {}
                    Err(error) => {
                        self.push_error(error);
                        self.synchronize();
                    }
                }
            }

            self.advance();
        }

        debug!(
            "parsed {} statements with {} errors",
            program.statements.len(),
            self.errors.len()
        );

        program
    }

    /// Parses a single expression spanning the whole input.
    ///
    /// A trailing `;` is accepted; anything else left over is reported.
    pub fn parse_standalone_expression(&mut self) -> Option<Expr> {
        let expr = match parse_expr(self, BindingPower::Default) {
            Ok(expr) => expr,
            Err(error) => {
                self.push_error(error);
                return None;
            }
        };

        if self.peek_token_kind() == TokenKind::Semicolon {
            self.advance();
        }

        if self.peek_token_kind() != TokenKind::EOF {
            self.push_error(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: self.peek_token.value.clone(),
                },
                self.peek_token.span.start.clone(),
            ));
            return None;
        }

        Some(expr)
    }
}

/// Parses `source` into a program.
///
/// This is the main entry point for parsing. It returns the parser, whose
/// diagnostics must be checked before the program is trusted, along with
/// the (possibly partial) program.
pub fn parse(source: String, file: Option<String>) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (parser, program)
}
