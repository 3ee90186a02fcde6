//! Runtime values for the Lispy interpreter.
//!
//! The variant set is closed and matched exhaustively everywhere. Values form
//! a strict tree: every s-expression owns its children, nothing is shared,
//! and dropping a value releases everything beneath it.

mod scalar_int;
mod sexpr;

use crate::errors::{ErrorKind, ErrorValue};
use std::fmt;

pub use scalar_int::ScalarInt;
pub use sexpr::SExpr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// 64-bit integer, the only numeric type.
    Number(ScalarInt),
    /// Error produced by reading or evaluation.
    Error(ErrorValue),
    /// Operator token, stored as its text.
    Symbol(String),
    /// Parenthesised sequence of values.
    SExpr(SExpr),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn number(n: i64) -> Self {
        Value::Number(ScalarInt::new(n))
    }

    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Value::Error(ErrorValue::new(kind, message))
    }

    pub fn symbol(text: impl Into<String>) -> Self {
        Value::Symbol(text.into())
    }

    /// Empty s-expression, `()`.
    #[inline]
    pub fn sexpr() -> Self {
        Value::SExpr(SExpr::new())
    }

    /// S-expression owning `cells` in order.
    pub fn sexpr_of(cells: impl IntoIterator<Item = Value>) -> Self {
        Value::SExpr(cells.into_iter().collect())
    }
}

// Inspection

impl Value {
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    pub fn as_number(&self) -> Option<ScalarInt> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Kind of the error, if this is an error value.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Value::Error(err) => Some(err.kind()),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Error(_) => "error",
            Value::Symbol(_) => "symbol",
            Value::SExpr(_) => "s-expression",
        }
    }
}

impl From<ErrorValue> for Value {
    fn from(err: ErrorValue) -> Self {
        Value::Error(err)
    }
}

impl From<ScalarInt> for Value {
    fn from(n: ScalarInt) -> Self {
        Value::Number(n)
    }
}

/// The printer. Read-only: formatting never consumes or mutates the value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(err) => write!(f, "{err}"),
            Value::Symbol(sym) => f.write_str(sym),
            Value::SExpr(cells) => write!(f, "{cells}"),
        }
    }
}

#[cfg(test)]
mod tests;
