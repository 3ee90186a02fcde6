//! Error values produced while reading and evaluating.
//!
//! Errors are ordinary [`Value`](crate::Value)s: they evaluate to
//! themselves and propagate by the first-error-wins rule of s-expression
//! evaluation. Factory functions below are the only place message text is
//! written.

use std::fmt;

/// Category of an error value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Literal text that is not an in-range integer.
    BadNumber,
    /// Operator symbol with no builtin behind it.
    BadOperator,
    /// Non-numeric operand, or a compound form not headed by a symbol.
    TypeMismatch,
    /// Division whose divisor is zero.
    DivisionByZero,
    /// Arithmetic result outside the 64-bit range.
    IntegerOverflow,
}

impl ErrorKind {
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::BadNumber => "bad number",
            ErrorKind::BadOperator => "bad operator",
            ErrorKind::TypeMismatch => "type mismatch",
            ErrorKind::DivisionByZero => "division by zero",
            ErrorKind::IntegerOverflow => "integer overflow",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ErrorValue {
    kind: ErrorKind,
    message: String,
}

impl ErrorValue {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ErrorValue {
            kind,
            message: message.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.message)
    }
}

// Factory functions

/// Literal text that failed to parse as a 64-bit integer.
pub fn bad_number(text: &str) -> ErrorValue {
    ErrorValue::new(ErrorKind::BadNumber, format!("invalid number: {text}"))
}

/// Operator symbol not recognised by the builtin dispatcher.
pub fn bad_operator(op: &str) -> ErrorValue {
    ErrorValue::new(ErrorKind::BadOperator, format!("invalid operator: {op}"))
}

/// A builtin received an operand that is not a number.
pub fn non_number_operand() -> ErrorValue {
    ErrorValue::new(ErrorKind::TypeMismatch, "cannot operate on non-number")
}

/// A compound form of two or more elements whose head is not a symbol.
pub fn missing_operator_symbol() -> ErrorValue {
    ErrorValue::new(
        ErrorKind::TypeMismatch,
        "S-expression does not start with symbol",
    )
}

/// A builtin applied to an empty operand list.
pub fn no_operands(op: &str) -> ErrorValue {
    ErrorValue::new(
        ErrorKind::TypeMismatch,
        format!("operator {op} applied to no operands"),
    )
}

pub fn division_by_zero() -> ErrorValue {
    ErrorValue::new(ErrorKind::DivisionByZero, "division by zero")
}

/// `operation` names the step that overflowed, e.g. `"addition"`.
pub fn integer_overflow(operation: &str) -> ErrorValue {
    ErrorValue::new(
        ErrorKind::IntegerOverflow,
        format!("integer overflow in {operation}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn factories_set_kind() {
        assert_eq!(bad_number("99999999999999999999").kind(), ErrorKind::BadNumber);
        assert_eq!(bad_operator("%").kind(), ErrorKind::BadOperator);
        assert_eq!(non_number_operand().kind(), ErrorKind::TypeMismatch);
        assert_eq!(missing_operator_symbol().kind(), ErrorKind::TypeMismatch);
        assert_eq!(no_operands("+").kind(), ErrorKind::TypeMismatch);
        assert_eq!(division_by_zero().kind(), ErrorKind::DivisionByZero);
        assert_eq!(integer_overflow("addition").kind(), ErrorKind::IntegerOverflow);
    }

    #[test]
    fn display_prefixes_error() {
        assert_eq!(division_by_zero().to_string(), "Error: division by zero");
        assert_eq!(bad_operator("%").to_string(), "Error: invalid operator: %");
        assert_eq!(
            integer_overflow("negation").to_string(),
            "Error: integer overflow in negation"
        );
    }
}
