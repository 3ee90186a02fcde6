#![deny(clippy::arithmetic_side_effects)]
//! Lispy Value - the runtime value model of the Lispy interpreter.
//!
//! This crate provides:
//! - [`Value`]: number, error, symbol, or s-expression
//! - [`SExpr`]: the owned child sequence with `push`/`pop_at`/`take_at`
//! - [`ScalarInt`]: 64-bit integer exposing only checked arithmetic
//! - [`errors`]: error kinds and the factory functions that build them
//! - [`print`]: the printer (also available as `Display`)

pub mod errors;
mod value;

pub use errors::{ErrorKind, ErrorValue};
pub use value::{SExpr, ScalarInt, Value};

/// Render `value` as text without consuming it.
///
/// Numbers print in decimal, errors as `Error: <message>`, symbols as their
/// text, and s-expressions as `(a b c)`.
pub fn print(value: &Value) -> String {
    value.to_string()
}

/// Release `value` and everything it owns.
pub fn destroy(value: Value) {
    drop(value);
}
