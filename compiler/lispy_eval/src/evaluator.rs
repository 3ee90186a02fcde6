//! Tree-walking evaluator.

use crate::builtins::apply;
use lispy_stack::ensure_sufficient_stack;
use lispy_value::errors::missing_operator_symbol;
use lispy_value::{SExpr, Value};

/// Reduce `value` to its result.
///
/// Atoms and errors evaluate to themselves, so `eval` is idempotent. An
/// s-expression reduces as follows:
///
/// 1. Every child is evaluated, left to right, and replaced in place.
/// 2. The first error among the children becomes the result; every other
///    child is dropped.
/// 3. `()` evaluates to itself.
/// 4. A single child is unwrapped: `(5)` is `5`.
/// 5. Otherwise the head must be a symbol naming a builtin, which is applied
///    to the remaining children.
pub fn eval(value: Value) -> Value {
    match value {
        Value::SExpr(cells) => ensure_sufficient_stack(|| eval_sexpr(cells)),
        atom => atom,
    }
}

#[tracing::instrument(level = "trace", skip_all, fields(len = cells.len()))]
fn eval_sexpr(mut cells: SExpr) -> Value {
    cells.map_in_place(eval);

    if let Some(index) = cells.iter().position(Value::is_error) {
        return cells.take_at(index);
    }

    match cells.len() {
        0 => Value::SExpr(cells),
        1 => cells.take_at(0),
        _ => {
            let Value::Symbol(op) = cells.pop_at(0) else {
                return missing_operator_symbol().into();
            };
            tracing::trace!(%op, operands = cells.len(), "dispatch");
            apply(&op, cells)
        }
    }
}
