use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::Identifier,
        statements::{
            BlockStatement, BreakStatement, ContinueStatement, ElseIfClause, ExpressionStatement,
            ForStatement, FunctionStatement, IfStatement, LoopStatement, Parameter,
            ReturnStatement, VariableDeclaration, WhileStatement,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{lookups::LOOKUPS, parser::Parser};

/// Parses the statement starting at the current token.
///
/// `Ok(None)` means there was no statement to parse: the current token is
/// `;`, `}` or EOF. On success the current token is the statement's last
/// token.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    if let Some(handler) = LOOKUPS.get_stmt(parser.current_token_kind()) {
        return handler(parser).map(Some);
    }

    match parser.current_token_kind() {
        TokenKind::CloseCurly | TokenKind::Semicolon | TokenKind::EOF => Ok(None),
        _ => parse_expression_stmt(parser).map(Some),
    }
}

fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    if LOOKUPS.get_nud(token.kind).is_none() {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            token.span.start,
        ));
    }

    let expression = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Stmt::Expression(ExpressionStatement { token, expression }))
}

/// Parses a `{ ... }` block; the current token is the opening brace.
///
/// Statements that fail are reported and skipped. The block ends with the
/// current token on its `}`. Running into EOF first is reported, and the
/// statements parsed so far are kept.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStatement, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly
        && parser.current_token_kind() != TokenKind::EOF
    {
        match parse_stmt(parser) {
            Ok(Some(stmt)) => statements.push(stmt),
            Ok(None) => {}
            Err(error) => {
                parser.push_error(error);
                if parser.synchronize() {
                    break;
                }
            }
        }

        parser.advance();
    }

    if parser.current_token_kind() == TokenKind::EOF {
        let error = Error::new(
            ErrorImpl::UnexpectedPeek {
                expected: TokenKind::CloseCurly,
                found: TokenKind::EOF,
            },
            parser.get_position(),
        );
        parser.push_error(error);
    }

    Ok(BlockStatement { token, statements })
}

/// A nested `{ ... }` block in statement position.
pub fn parse_block_as_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block_stmt(parser)?))
}

/// Parses a body that is either a braced block or a single statement.
///
/// The current token is the one before the body. A single statement is
/// wrapped in a one-statement block.
fn parse_body(parser: &mut Parser) -> Result<BlockStatement, Error> {
    if parser.peek_token_kind() == TokenKind::OpenCurly {
        parser.advance();
        return parse_block_stmt(parser);
    }

    parser.advance();
    let token = parser.current_token().clone();

    match parse_stmt(parser)? {
        Some(stmt) => Ok(BlockStatement {
            token,
            statements: vec![stmt],
        }),
        None => Err(Error::new(
            ErrorImpl::ExpectedStatement {
                token: if token.kind == TokenKind::EOF {
                    token.kind.to_string()
                } else {
                    token.value.clone()
                },
            },
            token.span.start,
        )),
    }
}

/// Parses `( condition )`; the current token is the one before `(`.
fn parse_condition(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(condition)
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let condition = parse_condition(parser)?;
    let then_block = parse_body(parser)?;

    let mut else_ifs = vec![];
    let mut else_block = None;

    while parser.peek_token_kind() == TokenKind::Else {
        parser.advance();

        if parser.peek_token_kind() == TokenKind::If {
            parser.advance();

            let condition = parse_condition(parser)?;
            let block = parse_body(parser)?;
            else_ifs.push(ElseIfClause { condition, block });
        } else {
            // A plain else ends the chain
            else_block = Some(parse_body(parser)?);
            break;
        }
    }

    Ok(Stmt::If(IfStatement {
        token,
        condition,
        then_block,
        else_ifs,
        else_block,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    match parser.peek_token_kind() {
        TokenKind::Semicolon => {
            parser.advance();
            return Ok(Stmt::Return(ReturnStatement { token, value: None }));
        }
        TokenKind::CloseCurly | TokenKind::EOF => {
            return Ok(Stmt::Return(ReturnStatement { token, value: None }));
        }
        _ => {}
    }

    parser.advance();
    let value = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Stmt::Return(ReturnStatement {
        token,
        value: Some(value),
    }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Stmt::Break(BreakStatement { token }))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Stmt::Continue(ContinueStatement { token }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let condition = parse_condition(parser)?;
    parser.expect_peek(TokenKind::OpenCurly)?;
    let block = parse_block_stmt(parser)?;

    Ok(Stmt::While(WhileStatement {
        token,
        condition,
        block,
    }))
}

pub fn parse_loop_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenCurly)?;
    let block = parse_block_stmt(parser)?;

    Ok(Stmt::Loop(LoopStatement { token, block }))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.expect_peek(TokenKind::Identifier)?;
    let identifier = Identifier::new(parser.current_token().clone());

    parser.expect_peek(TokenKind::In)?;
    parser.advance();
    let iterable = parse_expr(parser, BindingPower::Default)?;

    parser.expect_peek(TokenKind::CloseParen)?;
    parser.expect_peek(TokenKind::OpenCurly)?;
    let block = parse_block_stmt(parser)?;

    Ok(Stmt::For(ForStatement {
        token,
        identifier,
        iterable,
        block,
    }))
}

/// Dispatches a statement that starts with a type name or `void`.
///
/// `type name (` and `type fn` start a function declaration; anything else
/// is parsed as a variable declaration, which reports what is missing.
pub fn parse_typed_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match (parser.peek_token_kind(), parser.peek2_token_kind()) {
        (TokenKind::Identifier, TokenKind::OpenParen) | (TokenKind::Fn, _) => {
            parse_fn_decl_stmt(parser)
        }
        _ => parse_var_decl_stmt(parser),
    }
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    if !token.is_one_of_many(&[TokenKind::Type, TokenKind::Void]) {
        return Err(Error::new(
            ErrorImpl::ExpectedType { found: token.kind },
            token.span.start,
        ));
    }

    parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier::new(parser.current_token().clone());

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();
    let value = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Stmt::VarDecl(VariableDeclaration { token, name, value }))
}

/// Parses a function declaration.
///
/// Accepts `fn name(...)`, `type name(...)` and `type fn name(...)`. The
/// `fn` form without a leading type returns `void`.
pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let return_type = if token.kind == TokenKind::Fn {
        Token {
            kind: TokenKind::Void,
            value: String::from("void"),
            span: token.span.clone(),
        }
    } else {
        if parser.peek_token_kind() == TokenKind::Fn {
            parser.advance();
        }
        token.clone()
    };

    parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier::new(parser.current_token().clone());

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_fn_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Stmt::Function(FunctionStatement {
        token,
        return_type,
        name,
        parameters,
        body,
    }))
}

/// Parses `type name, ...` up to and including `)`; the current token is `(`.
fn parse_fn_parameters(parser: &mut Parser) -> Result<Vec<Parameter>, Error> {
    let mut parameters = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(parameters);
    }

    parser.advance();
    parameters.push(parse_parameter(parser)?);

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.advance();
        parameters.push(parse_parameter(parser)?);
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}

fn parse_parameter(parser: &mut Parser) -> Result<Parameter, Error> {
    let param_type = parser.current_token().clone();

    if !param_type.is_one_of_many(&[TokenKind::Type, TokenKind::Void]) {
        return Err(Error::new(
            ErrorImpl::ExpectedParameterType {
                found: param_type.kind,
            },
            param_type.span.start,
        ));
    }

    parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier::new(parser.current_token().clone());

    Ok(Parameter { param_type, name })
}
