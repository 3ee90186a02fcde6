//! Stack growth guard for Lispy's recursive tree walks.
//!
//! Parsing, reading, evaluating and printing all recurse once per level of
//! parenthesis nesting. Input such as `((((((...))))))` typed or piped into
//! the REPL can be arbitrarily deep, so each of those walks wraps its
//! recursive step in [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown on demand with `stacker`. On WASM the
//! guard is a passthrough.

/// If less than this much stack remains, grow before recursing (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red
/// zone.
///
/// ```text
/// fn depth(value: &Value) -> usize {
///     ensure_sufficient_stack(|| match value {
///         Value::SExpr(cells) => 1 + cells.iter().map(depth).max().unwrap_or(0),
///         _ => 0,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
