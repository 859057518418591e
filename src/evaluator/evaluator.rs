use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{Identifier, InfixExpression, PrefixExpression, TypeOfExpression},
    },
    errors::errors::{Error, ErrorImpl},
    types::types::Type,
    Position,
};

use super::{environment::Environment, object::Object};

/// Evaluates `expr` against the bindings in `env`.
///
/// The first failing sub-expression aborts evaluation and its error is
/// returned, positioned at the offending node.
pub fn eval(expr: &Expr, env: &Environment) -> Result<Object, Error> {
    trace!("eval {}", expr);

    match expr {
        Expr::Integer(literal) => Ok(Object::Integer(literal.value)),
        Expr::Float(literal) => Ok(Object::Float(literal.value)),
        Expr::String(literal) => Ok(Object::String(literal.value.clone())),
        Expr::Boolean(literal) => Ok(Object::from_bool(literal.value)),
        Expr::Nil(_) | Expr::Void(_) => Ok(Object::Null),
        Expr::Identifier(identifier) => eval_identifier(identifier, env),
        Expr::Prefix(prefix) => {
            let right = eval(&prefix.right, env)?;
            eval_prefix_expr(prefix, right)
        }
        Expr::Infix(infix) => eval_infix_expr(infix, env),
        Expr::TypeOf(type_of) => eval_typeof_expr(type_of, env),
        Expr::Call(_) => Err(Error::new(
            ErrorImpl::UnsupportedExpression {
                expression: expr.to_string(),
            },
            expr.get_span().start.clone(),
        )),
    }
}

fn eval_identifier(identifier: &Identifier, env: &Environment) -> Result<Object, Error> {
    env.get(&identifier.value).ok_or_else(|| {
        Error::new(
            ErrorImpl::IdentifierNotFound {
                name: identifier.value.clone(),
            },
            identifier.token.span.start.clone(),
        )
    })
}

fn eval_prefix_expr(expr: &PrefixExpression, right: Object) -> Result<Object, Error> {
    let position = expr.token.span.start.clone();

    match (expr.operator.as_str(), &right) {
        ("-", Object::Integer(value)) => {
            value.checked_neg().map(Object::Integer).ok_or_else(|| {
                Error::new(
                    ErrorImpl::IntegerOverflow {
                        operation: format!("-{}", value),
                    },
                    position,
                )
            })
        }
        ("-", Object::Float(value)) => Ok(Object::Float(-value)),
        ("+", Object::Integer(_)) | ("+", Object::Float(_)) => Ok(right),
        ("!", _) => Ok(Object::from_bool(!right.is_truthy())),
        _ => Err(Error::new(
            ErrorImpl::UnknownPrefixOperator {
                operator: expr.operator.clone(),
                operand: right.get_type().to_string(),
            },
            position,
        )),
    }
}

fn eval_infix_expr(expr: &InfixExpression, env: &Environment) -> Result<Object, Error> {
    let position = expr.token.span.start.clone();

    // `&&` and `||` short-circuit
    match expr.operator.as_str() {
        "&&" => {
            if !eval(&expr.left, env)?.is_truthy() {
                return Ok(Object::from_bool(false));
            }
            return Ok(Object::from_bool(eval(&expr.right, env)?.is_truthy()));
        }
        "||" => {
            if eval(&expr.left, env)?.is_truthy() {
                return Ok(Object::from_bool(true));
            }
            return Ok(Object::from_bool(eval(&expr.right, env)?.is_truthy()));
        }
        _ => {}
    }

    let left = eval(&expr.left, env)?;
    let right = eval(&expr.right, env)?;
    let operator = expr.operator.as_str();

    match (&left, &right) {
        (Object::Integer(a), Object::Integer(b)) => {
            eval_integer_infix_expr(operator, *a, *b, position)
        }
        (Object::Integer(_) | Object::Float(_), Object::Integer(_) | Object::Float(_)) => {
            eval_float_infix_expr(operator, as_float(&left), as_float(&right), position)
        }
        (Object::String(a), Object::String(b)) => match operator {
            "+" => Ok(Object::String(format!("{}{}", a, b))),
            "==" => Ok(Object::from_bool(a == b)),
            "!=" => Ok(Object::from_bool(a != b)),
            _ => Err(unknown_infix_operator(&left, operator, &right, position)),
        },
        _ => match operator {
            "==" => Ok(Object::from_bool(left == right)),
            "!=" => Ok(Object::from_bool(left != right)),
            _ => Err(unknown_infix_operator(&left, operator, &right, position)),
        },
    }
}

fn eval_integer_infix_expr(
    operator: &str,
    left: i64,
    right: i64,
    position: Position,
) -> Result<Object, Error> {
    let checked = match operator {
        "+" => left.checked_add(right),
        "-" => left.checked_sub(right),
        "*" => left.checked_mul(right),
        "/" | "%" if right == 0 => {
            return Err(Error::new(ErrorImpl::DivisionByZero, position));
        }
        "/" => left.checked_div(right),
        "%" => left.checked_rem(right),
        "<" => return Ok(Object::from_bool(left < right)),
        ">" => return Ok(Object::from_bool(left > right)),
        "<=" => return Ok(Object::from_bool(left <= right)),
        ">=" => return Ok(Object::from_bool(left >= right)),
        "==" => return Ok(Object::from_bool(left == right)),
        "!=" => return Ok(Object::from_bool(left != right)),
        _ => {
            return Err(Error::new(
                ErrorImpl::UnknownInfixOperator {
                    left: Type::Int.to_string(),
                    operator: operator.to_string(),
                    right: Type::Int.to_string(),
                },
                position,
            ));
        }
    };

    checked.map(Object::Integer).ok_or_else(|| {
        Error::new(
            ErrorImpl::IntegerOverflow {
                operation: format!("{} {} {}", left, operator, right),
            },
            position,
        )
    })
}

fn eval_float_infix_expr(
    operator: &str,
    left: f64,
    right: f64,
    position: Position,
) -> Result<Object, Error> {
    match operator {
        "+" => Ok(Object::Float(left + right)),
        "-" => Ok(Object::Float(left - right)),
        "*" => Ok(Object::Float(left * right)),
        "/" | "%" if right == 0.0 => Err(Error::new(ErrorImpl::DivisionByZero, position)),
        "/" => Ok(Object::Float(left / right)),
        "%" => Ok(Object::Float(left % right)),
        "<" => Ok(Object::from_bool(left < right)),
        ">" => Ok(Object::from_bool(left > right)),
        "<=" => Ok(Object::from_bool(left <= right)),
        ">=" => Ok(Object::from_bool(left >= right)),
        "==" => Ok(Object::from_bool(left == right)),
        "!=" => Ok(Object::from_bool(left != right)),
        _ => Err(Error::new(
            ErrorImpl::UnknownInfixOperator {
                left: Type::Float.to_string(),
                operator: operator.to_string(),
                right: Type::Float.to_string(),
            },
            position,
        )),
    }
}

/// `typeof(e)` as a string object.
///
/// Literals are typed without being evaluated and identifiers by their
/// bound value. Anything else is evaluated first.
fn eval_typeof_expr(expr: &TypeOfExpression, env: &Environment) -> Result<Object, Error> {
    let found = match expr.expr.as_ref() {
        Expr::Integer(_) | Expr::Boolean(_) => Type::Int,
        Expr::Float(_) => Type::Float,
        Expr::String(_) => Type::String,
        Expr::Nil(_) | Expr::Void(_) => Type::Void,
        Expr::Identifier(identifier) => eval_identifier(identifier, env)?.get_type(),
        inner => eval(inner, env)?.get_type(),
    };

    Ok(Object::String(found.to_string()))
}

fn as_float(object: &Object) -> f64 {
    match object {
        Object::Integer(value) => *value as f64,
        Object::Float(value) => *value,
        _ => f64::NAN,
    }
}

fn unknown_infix_operator(
    left: &Object,
    operator: &str,
    right: &Object,
    position: Position,
) -> Error {
    Error::new(
        ErrorImpl::UnknownInfixOperator {
            left: left.get_type().to_string(),
            operator: operator.to_string(),
            right: right.get_type().to_string(),
        },
        position,
    )
}
