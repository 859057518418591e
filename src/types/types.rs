use std::{collections::HashMap, fmt::Display};

use crate::ast::ast::{Program, Stmt};

/// Represents the primitive types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    String,
    Void,
    Float,
    /// Fallback for names and values with no known type
    Unknown,
}

impl Type {
    /// Resolves a type keyword; unrecognised names are `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "int" => Type::Int,
            "string" => Type::String,
            "void" => Type::Void,
            "float" => Type::Float,
            _ => Type::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::String => "string",
            Type::Void => "void",
            Type::Float => "float",
            Type::Unknown => "unknown",
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maps names to their declared types.
#[derive(Debug, Clone, Default)]
pub struct TypeEnv {
    types: HashMap<String, Type>,
}

impl TypeEnv {
    pub fn new() -> Self {
        TypeEnv::default()
    }

    /// Builds an environment from a program's top-level declarations.
    ///
    /// Variables map to their declared type and functions to their return
    /// type. A later declaration of the same name replaces an earlier one.
    pub fn from_program(program: &Program) -> Self {
        let mut env = TypeEnv::new();

        for statement in &program.statements {
            match statement {
                Stmt::VarDecl(declaration) => {
                    env.set(
                        &declaration.name.value,
                        Type::from_name(&declaration.token.value),
                    );
                }
                Stmt::Function(function) => {
                    env.set(
                        &function.name.value,
                        Type::from_name(&function.return_type.value),
                    );
                }
                _ => {}
            }
        }

        env
    }

    /// Type of `name`, or `Unknown` when it was never declared.
    pub fn get(&self, name: &str) -> Type {
        self.types.get(name).copied().unwrap_or(Type::Unknown)
    }

    pub fn set(&mut self, name: &str, declared: Type) {
        self.types.insert(name.to_string(), declared);
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
