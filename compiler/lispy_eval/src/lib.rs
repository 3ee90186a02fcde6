#![deny(clippy::arithmetic_side_effects)]
//! Lispy Eval - reader and tree-walking evaluator for Lispy.
//!
//! # Architecture
//!
//! ```text
//! ParseNode ──read──► Value ──eval──► Value ──print──► String
//!                                │
//!                                └─► apply (builtin dispatch)
//! ```
//!
//! - [`read`]: parse tree to value tree, dropping punctuation
//! - [`eval`]: recursive reduction, first error wins
//! - [`apply`]: arithmetic folds for `+ - * / !`
//!
//! Evaluation keeps no state between calls: there are no bindings, and each
//! input produces one independently owned value tree.

mod builtins;
mod evaluator;
mod reader;

pub use builtins::{apply, Builtin};
pub use evaluator::eval;
pub use reader::read;

// Re-export the value model for convenience
pub use lispy_value::{destroy, errors, print, ErrorKind, ErrorValue, SExpr, ScalarInt, Value};

#[cfg(test)]
mod tests;
