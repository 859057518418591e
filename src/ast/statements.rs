use std::{fmt::Display, slice::Iter};

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, Stmt},
    expressions::Identifier,
};

/// An expression used as a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expr,
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// `type name = value;`
///
/// The token is the declared type (`int`, `string`, `float` or `void`).
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub token: Token,
    pub name: Identifier,
    pub value: Expr,
}

impl Display for VariableDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {};", self.token.value, self.name, self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Option<Expr>,
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "return {};", value),
            None => write!(f, "return;"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStatement {
    pub token: Token,
}

impl Display for BreakStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "break;")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStatement {
    pub token: Token,
}

impl Display for ContinueStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "continue;")
    }
}

/// A sequence of statements, braced or synthesised from a single
/// unbraced statement. Rendered as `{ a b }`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub token: Token,
    pub statements: Vec<Stmt>,
}

impl BlockStatement {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ ")?;
        for statement in &self.statements {
            write!(f, "{} ", statement)?;
        }
        write!(f, "}}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseIfClause {
    pub condition: Expr,
    pub block: BlockStatement,
}

/// `if (c) a else if (d) b else e`
///
/// Else-if clauses keep source order.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub token: Token,
    pub condition: Expr,
    pub then_block: BlockStatement,
    pub else_ifs: Vec<ElseIfClause>,
    pub else_block: Option<BlockStatement>,
}

impl Display for IfStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if ({}) {}", self.condition, self.then_block)?;

        for clause in &self.else_ifs {
            write!(f, " else if ({}) {}", clause.condition, clause.block)?;
        }

        if let Some(else_block) = &self.else_block {
            write!(f, " else {}", else_block)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub token: Token,
    pub condition: Expr,
    pub block: BlockStatement,
}

impl Display for WhileStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "while ({}) {}", self.condition, self.block)
    }
}

/// `loop { ... }`, with no condition.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopStatement {
    pub token: Token,
    pub block: BlockStatement,
}

impl Display for LoopStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "loop {}", self.block)
    }
}

/// `for (item in items) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub token: Token,
    pub identifier: Identifier,
    pub iterable: Expr,
    pub block: BlockStatement,
}

impl Display for ForStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "for ({} in {}) {}",
            self.identifier, self.iterable, self.block
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub param_type: Token,
    pub name: Identifier,
}

impl Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.param_type.value, self.name)
    }
}

/// A function declaration.
///
/// `return_type` is the leading type token, or a synthesised `void` for
/// declarations introduced by `fn`/`func`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionStatement {
    pub token: Token,
    pub return_type: Token,
    pub name: Identifier,
    pub parameters: Vec<Parameter>,
    pub body: BlockStatement,
}

impl Display for FunctionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|parameter| parameter.to_string())
            .collect::<Vec<String>>();

        write!(
            f,
            "{} {}({}) {}",
            self.return_type.value,
            self.name,
            parameters.join(", "),
            self.body
        )
    }
}
