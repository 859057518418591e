use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A diagnostic with the source position it was raised at.
///
/// Displays as the bare message; the position is kept separately so the
/// reporting layer can decide how to show it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedPeek { .. } => "UnexpectedPeek",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEof => "UnexpectedEof",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::FloatParseError { .. } => "FloatParseError",
            ErrorImpl::ExpectedParameterType { .. } => "ExpectedParameterType",
            ErrorImpl::ExpectedType { .. } => "ExpectedType",
            ErrorImpl::ExpectedStatement { .. } => "ExpectedStatement",
            ErrorImpl::IdentifierNotFound { .. } => "IdentifierNotFound",
            ErrorImpl::UnknownPrefixOperator { .. } => "UnknownPrefixOperator",
            ErrorImpl::UnknownInfixOperator { .. } => "UnknownInfixOperator",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::IntegerOverflow { .. } => "IntegerOverflow",
            ErrorImpl::UnsupportedExpression { .. } => "UnsupportedExpression",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedPeek { expected, found } => match (expected, found) {
                (_, TokenKind::EOF) => ErrorTip::Suggestion(format!(
                    "Input ended while `{}` was still expected",
                    expected
                )),
                (TokenKind::Assignment, _) => ErrorTip::Suggestion(String::from(
                    "Declarations need an initializer, e.g. `int x = 0;`",
                )),
                _ => ErrorTip::None,
            },
            ErrorImpl::NoPrefixParseFn { kind, token } => match kind {
                TokenKind::Illegal if token.starts_with('"') => {
                    ErrorTip::Suggestion(String::from("Unterminated string literal"))
                }
                TokenKind::Illegal => {
                    ErrorTip::Suggestion(format!("`{}` is not valid in this language", token))
                }
                _ => ErrorTip::Suggestion(format!(
                    "`{}` cannot start an expression",
                    token
                )),
            },
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedEof => ErrorTip::Suggestion(String::from(
                "The source ends in the middle of an expression",
            )),
            ErrorImpl::IntegerParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::FloatParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid float: `{}`", token))
            }
            ErrorImpl::ExpectedParameterType { .. } => ErrorTip::Suggestion(String::from(
                "Parameters are written as `type name`, e.g. `int x`",
            )),
            ErrorImpl::ExpectedType { .. } => ErrorTip::None,
            ErrorImpl::ExpectedStatement { .. } => ErrorTip::Suggestion(String::from(
                "A condition must be followed by a statement or a `{ }` block",
            )),
            ErrorImpl::IdentifierNotFound { name } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", name))
            }
            ErrorImpl::UnknownPrefixOperator { .. }
            | ErrorImpl::UnknownInfixOperator { .. }
            | ErrorImpl::DivisionByZero => ErrorTip::None,
            ErrorImpl::IntegerOverflow { .. } => ErrorTip::Suggestion(String::from(
                "Integers are 64-bit signed; use a float for larger values",
            )),
            ErrorImpl::UnsupportedExpression { .. } => ErrorTip::Suggestion(String::from(
                "This expression parses, but cannot be evaluated yet",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedPeek { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind, token: String },
    #[error("unexpected token: {token}")]
    UnexpectedToken { token: String },
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("could not parse {token:?} as integer")]
    IntegerParseError { token: String },
    #[error("could not parse {token:?} as float")]
    FloatParseError { token: String },
    #[error("expected parameter type, got {found}")]
    ExpectedParameterType { found: TokenKind },
    #[error("expected type, got {found}")]
    ExpectedType { found: TokenKind },
    #[error("expected a statement, got {token} instead")]
    ExpectedStatement { token: String },
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },
    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator { operator: String, operand: String },
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        left: String,
        operator: String,
        right: String,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },
    #[error("unsupported expression: {expression}")]
    UnsupportedExpression { expression: String },
}
