//! Conversion from the generic parse tree to a [`Value`] tree.
//!
//! This is the only place syntax is filtered: parentheses, braces and the
//! start/end anchors are dropped here, so the evaluator only ever sees
//! numbers, symbols, and nested s-expressions.

use lispy_parse::{tags, ParseNode};
use lispy_stack::ensure_sufficient_stack;
use lispy_value::errors::bad_number;
use lispy_value::{SExpr, ScalarInt, Value};

/// Read a parse node into a value, classifying it by its tag.
///
/// - `number` nodes become numbers, or a `BadNumber` error when the literal
///   does not fit in 64 bits.
/// - `symbol` nodes become symbols.
/// - Everything else (the root, `sexpr` nodes) becomes an s-expression of its
///   non-punctuation children, in order.
pub fn read(node: &ParseNode) -> Value {
    if node.tag.contains("number") {
        return read_number(&node.contents);
    }
    if node.tag.contains("symbol") {
        return Value::symbol(node.contents.as_str());
    }
    if node.tag != tags::ROOT && !node.tag.contains("sexpr") {
        tracing::trace!(tag = %node.tag, "reading unrecognised node as a group");
    }
    ensure_sufficient_stack(|| read_group(node))
}

fn read_number(text: &str) -> Value {
    match text.parse::<ScalarInt>() {
        Ok(n) => Value::Number(n),
        Err(_) => bad_number(text).into(),
    }
}

fn read_group(node: &ParseNode) -> Value {
    let cells: SExpr = node
        .children
        .iter()
        .filter(|child| !is_syntax(child))
        .map(read)
        .collect();
    Value::SExpr(cells)
}

/// Punctuation and anchors carry no value.
fn is_syntax(node: &ParseNode) -> bool {
    matches!(node.contents.as_str(), "(" | ")" | "{" | "}") || node.tag == tags::ANCHOR
}
