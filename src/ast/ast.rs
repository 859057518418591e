use std::fmt::Display;

use crate::{lexer::tokens::Token, Span};

use super::{
    expressions::{
        BooleanLiteral, CallExpression, FloatLiteral, Identifier, InfixExpression, IntegerLiteral,
        NilLiteral, PrefixExpression, StringLiteral, TypeOfExpression, VoidLiteral,
    },
    statements::{
        BlockStatement, BreakStatement, ContinueStatement, ExpressionStatement, ForStatement,
        FunctionStatement, IfStatement, LoopStatement, ReturnStatement, VariableDeclaration,
        WhileStatement,
    },
};

/// Expression
///
/// Every expression kind the parser can produce. Consumers match on this
/// exhaustively, so a new kind has to be handled everywhere it is used.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Float(FloatLiteral),
    String(StringLiteral),
    Boolean(BooleanLiteral),
    Nil(NilLiteral),
    Void(VoidLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    TypeOf(TypeOfExpression),
    Call(CallExpression),
}

impl Expr {
    /// The token the expression was built from.
    pub fn token(&self) -> &Token {
        match self {
            Expr::Identifier(expr) => &expr.token,
            Expr::Integer(expr) => &expr.token,
            Expr::Float(expr) => &expr.token,
            Expr::String(expr) => &expr.token,
            Expr::Boolean(expr) => &expr.token,
            Expr::Nil(expr) => &expr.token,
            Expr::Void(expr) => &expr.token,
            Expr::Prefix(expr) => &expr.token,
            Expr::Infix(expr) => &expr.token,
            Expr::TypeOf(expr) => &expr.token,
            Expr::Call(expr) => &expr.token,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.token().span
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier(expr) => expr.fmt(f),
            Expr::Integer(expr) => expr.fmt(f),
            Expr::Float(expr) => expr.fmt(f),
            Expr::String(expr) => expr.fmt(f),
            Expr::Boolean(expr) => expr.fmt(f),
            Expr::Nil(expr) => expr.fmt(f),
            Expr::Void(expr) => expr.fmt(f),
            Expr::Prefix(expr) => expr.fmt(f),
            Expr::Infix(expr) => expr.fmt(f),
            Expr::TypeOf(expr) => expr.fmt(f),
            Expr::Call(expr) => expr.fmt(f),
        }
    }
}

/// Statement
///
/// Every statement kind the parser can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStatement),
    VarDecl(VariableDeclaration),
    Return(ReturnStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    Block(BlockStatement),
    If(IfStatement),
    While(WhileStatement),
    Loop(LoopStatement),
    For(ForStatement),
    Function(FunctionStatement),
}

impl Stmt {
    pub fn token(&self) -> &Token {
        match self {
            Stmt::Expression(stmt) => &stmt.token,
            Stmt::VarDecl(stmt) => &stmt.token,
            Stmt::Return(stmt) => &stmt.token,
            Stmt::Break(stmt) => &stmt.token,
            Stmt::Continue(stmt) => &stmt.token,
            Stmt::Block(stmt) => &stmt.token,
            Stmt::If(stmt) => &stmt.token,
            Stmt::While(stmt) => &stmt.token,
            Stmt::Loop(stmt) => &stmt.token,
            Stmt::For(stmt) => &stmt.token,
            Stmt::Function(stmt) => &stmt.token,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.token().span
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Expression(stmt) => stmt.fmt(f),
            Stmt::VarDecl(stmt) => stmt.fmt(f),
            Stmt::Return(stmt) => stmt.fmt(f),
            Stmt::Break(stmt) => stmt.fmt(f),
            Stmt::Continue(stmt) => stmt.fmt(f),
            Stmt::Block(stmt) => stmt.fmt(f),
            Stmt::If(stmt) => stmt.fmt(f),
            Stmt::While(stmt) => stmt.fmt(f),
            Stmt::Loop(stmt) => stmt.fmt(f),
            Stmt::For(stmt) => stmt.fmt(f),
            Stmt::Function(stmt) => stmt.fmt(f),
        }
    }
}

/// The root of a parsed source: its top-level statements in order.
///
/// Renders one statement per line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{}", statement)?;
        }
        Ok(())
    }
}
