//! Lispy Parse - the grammar front end of the Lispy interpreter.
//!
//! Turns one line of text into a generic [`ParseNode`] tree tagged with the
//! grammar rules that matched (see [`tree`] for the exact shape):
//!
//! ```text
//! number : /-?[0-9]+/ ;
//! symbol : '+' | '-' | '*' | '/' | '!' ;
//! sexpr  : '(' <expr>* ')' ;
//! expr   : <number> | <symbol> | <sexpr> ;
//! lispy  : /^/ <expr>* /$/ ;
//! ```
//!
//! Tokens come from a `logos` lexer; a small recursive-descent parser
//! assembles them. The tree keeps punctuation nodes so that the reader, not
//! the parser, decides what is structural.

mod error;
mod lexer;
mod parser;
mod span;
pub mod tree;

pub use error::ParseError;
pub use parser::parse;
pub use span::Span;
pub use tree::{tags, ParseNode, GRAMMAR};
