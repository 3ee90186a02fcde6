//! Arithmetic builtins.
//!
//! Direct enum-based dispatch: the operator set is fixed, so a `match`
//! replaces any registry. Each builtin is a left fold over its operands with
//! checked arithmetic.

use lispy_value::errors::{
    bad_operator, division_by_zero, integer_overflow, no_operands, non_number_operand,
};
use lispy_value::{ErrorValue, SExpr, ScalarInt, Value};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `+`: sum.
    Add,
    /// `-`: difference, or negation with a single operand.
    Sub,
    /// `*`: product.
    Mul,
    /// `/`: truncating quotient.
    Div,
    /// `!`: each step computes `acc * x * acc`. Not a factorial.
    Bang,
}

impl Builtin {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Builtin::Add),
            "-" => Some(Builtin::Sub),
            "*" => Some(Builtin::Mul),
            "/" => Some(Builtin::Div),
            "!" => Some(Builtin::Bang),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Bang => "!",
        }
    }

    /// One fold step.
    fn step(self, acc: ScalarInt, operand: ScalarInt) -> Result<ScalarInt, ErrorValue> {
        match self {
            Builtin::Add => acc
                .checked_add(operand)
                .ok_or_else(|| integer_overflow("addition")),
            Builtin::Sub => acc
                .checked_sub(operand)
                .ok_or_else(|| integer_overflow("subtraction")),
            Builtin::Mul => acc
                .checked_mul(operand)
                .ok_or_else(|| integer_overflow("multiplication")),
            Builtin::Div => {
                if operand.is_zero() {
                    Err(division_by_zero())
                } else {
                    acc.checked_div(operand)
                        .ok_or_else(|| integer_overflow("division"))
                }
            }
            Builtin::Bang => acc
                .checked_mul(operand)
                .and_then(|n| n.checked_mul(acc))
                .ok_or_else(|| integer_overflow("multiplication")),
        }
    }
}

/// Apply the operator named `op` to `args`, consuming them.
///
/// Every operand must be a number. The first operand seeds the accumulator
/// and the rest are folded in left to right; `-` with a single operand
/// negates it. The operator is looked up only when there is something to
/// fold, so a lone operand is returned whatever `op` names. The first failing
/// step ends the fold and becomes the result. Operands not yet consumed are
/// dropped along with `args`.
pub fn apply(op: &str, mut args: SExpr) -> Value {
    if let Some(operand) = args.iter().find(|arg| !arg.is_number()) {
        tracing::trace!(op, found = operand.type_name(), "non-number operand");
        return non_number_operand().into();
    }
    if args.is_empty() {
        return no_operands(op).into();
    }

    let Some(mut acc) = args.pop_at(0).as_number() else {
        return non_number_operand().into();
    };

    if op == Builtin::Sub.symbol() && args.is_empty() {
        return acc
            .checked_neg()
            .map_or_else(|| integer_overflow("negation").into(), Value::Number);
    }
    if args.is_empty() {
        return Value::Number(acc);
    }

    let Some(builtin) = Builtin::from_symbol(op) else {
        return bad_operator(op).into();
    };
    while !args.is_empty() {
        let Some(operand) = args.pop_at(0).as_number() else {
            return non_number_operand().into();
        };
        match builtin.step(acc, operand) {
            Ok(next) => acc = next,
            Err(err) => {
                tracing::trace!(
                    op = builtin.symbol(),
                    remaining = args.len(),
                    "fold stopped on error"
                );
                return err.into();
            }
        }
    }
    Value::Number(acc)
}
