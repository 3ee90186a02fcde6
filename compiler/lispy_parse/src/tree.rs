//! Generic tagged parse tree.
//!
//! The parser does not build a typed AST. Every node carries the name of the
//! grammar rule(s) that matched it as a `|`-separated tag, its literal text,
//! and its children in source order, punctuation included:
//!
//! ```text
//! >
//!   regex
//!   expr|sexpr|>
//!     char '('
//!     expr|symbol|char '+'
//!     expr|number|regex '1'
//!     expr|number|regex '2'
//!     char ')'
//!   regex
//! ```
//!
//! Consumers classify nodes by substring matches on the tag, so the tag
//! strings below are part of the contract with the reader.

use crate::Span;
use lispy_stack::ensure_sufficient_stack;
use std::fmt;

/// Tag strings produced by the parser.
pub mod tags {
    /// Root of a parsed line.
    pub const ROOT: &str = ">";
    /// Start/end-of-input anchors surrounding the root's expressions.
    pub const ANCHOR: &str = "regex";
    /// Literal punctuation such as `(` and `)`.
    pub const CHAR: &str = "char";
    /// Integer literal, `-?[0-9]+`.
    pub const NUMBER: &str = "expr|number|regex";
    /// Operator symbol, one of `+ - * / !`.
    pub const SYMBOL: &str = "expr|symbol|char";
    /// Parenthesised form, `'(' expr* ')'`.
    pub const SEXPR: &str = "expr|sexpr|>";
}

/// Grammar the parser implements, kept as data for `--help` and docs.
pub const GRAMMAR: &str = "\
number : /-?[0-9]+/ ;
symbol : '+' | '-' | '*' | '/' | '!' ;
sexpr  : '(' <expr>* ')' ;
expr   : <number> | <symbol> | <sexpr> ;
lispy  : /^/ <expr>* /$/ ;";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseNode {
    pub tag: String,
    pub contents: String,
    pub span: Span,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    /// Leaf node with literal contents.
    pub fn leaf(tag: &str, contents: impl Into<String>, span: Span) -> Self {
        ParseNode {
            tag: tag.to_owned(),
            contents: contents.into(),
            span,
            children: Vec::new(),
        }
    }

    /// Interior node; branches carry no contents of their own.
    pub fn branch(tag: &str, span: Span, children: Vec<ParseNode>) -> Self {
        ParseNode {
            tag: tag.to_owned(),
            contents: String::new(),
            span,
            children,
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        ensure_sufficient_stack(|| {
            write!(f, "{:indent$}{}", "", self.tag, indent = depth * 2)?;
            if self.children.is_empty() && !self.contents.is_empty() {
                write!(f, " '{}'", self.contents)?;
            }
            writeln!(f)?;
            for child in &self.children {
                child.write_indented(f, depth + 1)?;
            }
            Ok(())
        })
    }
}

// Drop iteratively so deeply nested trees cannot exhaust the stack.
impl Drop for ParseNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Indented dump, one node per line.
impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
