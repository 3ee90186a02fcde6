//! Parse errors.
//!
//! A line that fails to parse never reaches the reader or the evaluator; the
//! REPL renders the error against the offending line and prompts again.

use crate::Span;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Text that is not a number, an operator symbol, or a parenthesis.
    #[error("unexpected character `{text}`")]
    UnexpectedCharacter { text: String, span: Span },

    /// End of input reached while an s-expression was still open.
    #[error("unclosed s-expression")]
    UnclosedSExpr { open: Span, end: Span },

    /// A `)` with no matching `(`.
    #[error("unexpected `)`")]
    UnexpectedClose { span: Span },

    /// Source longer than spans can address.
    #[error("input of {len} bytes is too large to parse")]
    SourceTooLarge { len: usize },
}

impl ParseError {
    /// Primary location of the error.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedCharacter { span, .. }
            | ParseError::UnexpectedClose { span } => *span,
            ParseError::UnclosedSExpr { open, .. } => *open,
            ParseError::SourceTooLarge { .. } => Span::point(0),
        }
    }

    /// Short label shown under the primary span.
    pub fn label(&self) -> &'static str {
        match self {
            ParseError::UnexpectedCharacter { .. } => {
                "expected a number, one of `+ - * / !`, or a parenthesis"
            }
            ParseError::UnclosedSExpr { .. } => "this `(` is never closed",
            ParseError::UnexpectedClose { .. } => "no `(` to close",
            ParseError::SourceTooLarge { .. } => "input starts here",
        }
    }
}
