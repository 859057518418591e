use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr) -> Result<Expr, Error>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

/// Handler tables consulted by the parser.
///
/// Built once and never mutated afterwards, so every parser shares them.
pub struct Lookups {
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
}

impl Lookups {
    fn new() -> Self {
        Lookups {
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Registers an infix handler and its binding power.
    fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn get_stmt(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Binding power of `kind`; tokens that are not operators bind at `Default`.
    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }
}

lazy_static! {
    pub static ref LOOKUPS: Lookups = create_token_lookups();
}

pub fn create_token_lookups() -> Lookups {
    let mut lookups = Lookups::new();

    // Logical
    lookups.led(TokenKind::Or, BindingPower::LogicalOr, parse_infix_expr);
    lookups.led(TokenKind::And, BindingPower::LogicalAnd, parse_infix_expr);

    // Equality and relational
    lookups.led(TokenKind::Equals, BindingPower::Equality, parse_infix_expr);
    lookups.led(TokenKind::NotEquals, BindingPower::Equality, parse_infix_expr);
    lookups.led(TokenKind::Less, BindingPower::Relational, parse_infix_expr);
    lookups.led(TokenKind::Greater, BindingPower::Relational, parse_infix_expr);
    lookups.led(TokenKind::LessEquals, BindingPower::Relational, parse_infix_expr);
    lookups.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_infix_expr);

    // Additive and multiplicative
    lookups.led(TokenKind::Plus, BindingPower::Additive, parse_infix_expr);
    lookups.led(TokenKind::Dash, BindingPower::Additive, parse_infix_expr);
    lookups.led(TokenKind::Star, BindingPower::Multiplicative, parse_infix_expr);
    lookups.led(TokenKind::Slash, BindingPower::Multiplicative, parse_infix_expr);
    lookups.led(TokenKind::Percent, BindingPower::Multiplicative, parse_infix_expr);

    lookups.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    lookups.nud(TokenKind::Identifier, parse_identifier_expr);
    lookups.nud(TokenKind::Int, parse_integer_expr);
    lookups.nud(TokenKind::Float, parse_float_expr);
    lookups.nud(TokenKind::String, parse_string_expr);
    lookups.nud(TokenKind::Bool, parse_boolean_expr);
    lookups.nud(TokenKind::Nil, parse_nil_expr);
    lookups.nud(TokenKind::Void, parse_void_expr);
    lookups.nud(TokenKind::OpenParen, parse_grouping_expr);
    lookups.nud(TokenKind::Plus, parse_prefix_expr);
    lookups.nud(TokenKind::Dash, parse_prefix_expr);
    lookups.nud(TokenKind::Not, parse_prefix_expr);
    lookups.nud(TokenKind::Typeof, parse_typeof_expr);

    // Statements
    lookups.stmt(TokenKind::If, parse_if_stmt);
    lookups.stmt(TokenKind::Return, parse_return_stmt);
    lookups.stmt(TokenKind::Break, parse_break_stmt);
    lookups.stmt(TokenKind::Continue, parse_continue_stmt);
    lookups.stmt(TokenKind::While, parse_while_stmt);
    lookups.stmt(TokenKind::Loop, parse_loop_stmt);
    lookups.stmt(TokenKind::For, parse_for_stmt);
    lookups.stmt(TokenKind::Fn, parse_fn_decl_stmt);
    lookups.stmt(TokenKind::Type, parse_typed_stmt);
    lookups.stmt(TokenKind::Void, parse_typed_stmt);
    lookups.stmt(TokenKind::OpenCurly, parse_block_as_stmt);

    lookups
}
