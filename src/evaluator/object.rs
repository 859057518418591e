use std::fmt::Display;

use crate::types::types::Type;

/// Runtime values produced by the evaluator.
///
/// Booleans have no value of their own: comparisons and logic produce
/// `Integer(1)` or `Integer(0)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Integer(i64),
    Float(f64),
    String(String),
    Null,
}

impl Object {
    pub fn from_bool(value: bool) -> Self {
        Object::Integer(if value { 1 } else { 0 })
    }

    /// Interprets command-line text: an integer if it parses as one, then a
    /// float, otherwise the text itself.
    pub fn from_input(text: &str) -> Self {
        if let Ok(value) = text.parse::<i64>() {
            Object::Integer(value)
        } else if let Ok(value) = text.parse::<f64>() {
            Object::Float(value)
        } else {
            Object::String(text.to_string())
        }
    }

    pub fn get_type(&self) -> Type {
        match self {
            Object::Integer(_) => Type::Int,
            Object::Float(_) => Type::Float,
            Object::String(_) => Type::String,
            Object::Null => Type::Void,
        }
    }

    /// Zero, `0.0`, the empty string and null are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Object::Integer(value) => *value != 0,
            Object::Float(value) => *value != 0.0,
            Object::String(value) => !value.is_empty(),
            Object::Null => false,
        }
    }

    pub fn inspect(&self) -> String {
        match self {
            Object::Integer(value) => value.to_string(),
            Object::Float(value) => format!("{:?}", value),
            Object::String(value) => value.clone(),
            Object::Null => String::from("null"),
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inspect())
    }
}
