//! Owned, ordered child sequence of an s-expression.

use super::Value;
use lispy_stack::ensure_sufficient_stack;
use std::fmt;

/// Children of an s-expression, in source order.
///
/// The sequence exclusively owns its children; the count is always the
/// length of the backing vector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SExpr {
    cells: Vec<Value>,
}

impl SExpr {
    #[inline]
    pub fn new() -> Self {
        SExpr { cells: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Move `child` onto the end of the sequence.
    #[inline]
    pub fn push(&mut self, child: Value) {
        self.cells.push(child);
    }

    /// Remove and return the child at `index`, shifting later children left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Callers establish the bound first.
    #[inline]
    pub fn pop_at(&mut self, index: usize) -> Value {
        self.cells.remove(index)
    }

    /// Remove the child at `index` and drop the rest of the sequence.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn take_at(mut self, index: usize) -> Value {
        self.pop_at(index)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.cells.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.cells.iter()
    }

    /// Replace every child, left to right, with `f(child)`.
    pub fn map_in_place(&mut self, f: impl FnMut(Value) -> Value) {
        let cells = std::mem::take(&mut self.cells);
        self.cells = cells.into_iter().map(f).collect();
    }
}

impl FromIterator<Value> for SExpr {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        SExpr {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SExpr {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

// Children are released with a work list rather than recursion, so a value
// nested hundreds of thousands of levels deep drops in constant stack.
impl Drop for SExpr {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.cells);
        while let Some(mut value) = pending.pop() {
            if let Value::SExpr(inner) = &mut value {
                pending.append(&mut inner.cells);
            }
        }
    }
}

/// `(` children separated by single spaces `)`.
impl fmt::Display for SExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.write_str("(")?;
            for (i, cell) in self.cells.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                fmt::Display::fmt(cell, f)?;
            }
            f.write_str(")")
        })
    }
}
