use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanLiteral, CallExpression, FloatLiteral, Identifier, InfixExpression,
            IntegerLiteral, NilLiteral, PrefixExpression, StringLiteral, TypeOfExpression,
            VoidLiteral,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BindingPower, LOOKUPS},
    parser::Parser,
};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// On return the current token is the last token of the expression.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match LOOKUPS.get_nud(token_kind) {
        Some(nud) => nud,
        None if token_kind == TokenKind::EOF => {
            return Err(Error::new(ErrorImpl::UnexpectedEof, parser.get_position()));
        }
        None => {
            return Err(Error::new(
                ErrorImpl::NoPrefixParseFn {
                    kind: token_kind,
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ));
        }
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than bp, fold it into lhs
    while parser.peek_token_kind() != TokenKind::Semicolon
        && parser.peek_token_kind() != TokenKind::EOF
        && bp < parser.peek_binding_power()
    {
        let led = match LOOKUPS.get_led(parser.peek_token_kind()) {
            Some(led) => led,
            None => return Ok(left),
        };

        parser.advance();
        left = led(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::Identifier(Identifier::new(parser.current_token().clone())))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Ok(Expr::Integer(IntegerLiteral { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::IntegerParseError { token: token.value },
            token.span.start,
        )),
    }
}

pub fn parse_float_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.value.parse::<f64>() {
        Ok(value) => Ok(Expr::Float(FloatLiteral { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::FloatParseError { token: token.value },
            token.span.start,
        )),
    }
}

pub fn parse_string_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::String(StringLiteral {
        value: token.value.clone(),
        token,
    }))
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::Boolean(BooleanLiteral {
        value: token.value == "true",
        token,
    }))
}

pub fn parse_nil_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::Nil(NilLiteral {
        token: parser.current_token().clone(),
    }))
}

pub fn parse_void_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::Void(VoidLiteral {
        token: parser.current_token().clone(),
    }))
}

/// `( expr )`; the parentheses leave no node behind.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpression {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    let bp = parser.current_binding_power();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpression {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// `callee(a, b)`; the current token is the opening parenthesis.
pub fn parse_call_expr(parser: &mut Parser, callee: Expr) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    let mut arguments = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
    } else {
        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Default)?);

        while parser.peek_token_kind() == TokenKind::Comma {
            parser.advance();
            parser.advance();
            arguments.push(parse_expr(parser, BindingPower::Default)?);
        }

        parser.expect_peek(TokenKind::CloseParen)?;
    }

    Ok(Expr::Call(CallExpression {
        token,
        callee: Box::new(callee),
        arguments,
    }))
}

pub fn parse_typeof_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();

    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(Expr::TypeOf(TypeOfExpression {
        token,
        expr: Box::new(expr),
    }))
}
