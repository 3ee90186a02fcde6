//! Tests for the reader, the evaluator, and the builtins.


use crate::{eval, read, Value};
use lispy_parse::parse;

/// Parse, read and evaluate one line.
fn run(source: &str) -> Value {
    match parse(source) {
        Ok(tree) => eval(read(&tree)),
        Err(err) => panic!("`{source}` failed to parse: {err}"),
    }
}

/// Parse and read one line without evaluating.
fn read_line(source: &str) -> Value {
    match parse(source) {
        Ok(tree) => read(&tree),
        Err(err) => panic!("`{source}` failed to parse: {err}"),
    }
}
