//! Recursive-descent parser over the token stream.

use crate::lexer::{lex, Token, TokenKind};
use crate::tree::{tags, ParseNode};
use crate::{ParseError, Span};
use lispy_stack::ensure_sufficient_stack;

/// Parse one line of input into a tagged parse tree.
///
/// The root always has an anchor child at each end; the expressions of the
/// line sit between them. Empty input is accepted.
pub fn parse(source: &str) -> Result<ParseNode, ParseError> {
    if u32::try_from(source.len()).is_err() {
        return Err(ParseError::SourceTooLarge { len: source.len() });
    }
    let tokens = lex(source)?;
    let end = Span::from_range(source.len()..source.len());
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        end,
    };
    parser.parse_root()
}

struct Parser<'a, 'src> {
    tokens: &'a [Token<'src>],
    pos: usize,
    end: Span,
}

impl<'src> Parser<'_, 'src> {
    fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn parse_root(&mut self) -> Result<ParseNode, ParseError> {
        let mut children = vec![ParseNode::leaf(tags::ANCHOR, "", Span::point(0))];
        while let Some(token) = self.peek() {
            if token.kind == TokenKind::RParen {
                return Err(ParseError::UnexpectedClose { span: token.span });
            }
            children.push(self.parse_expr()?);
        }
        children.push(ParseNode::leaf(tags::ANCHOR, "", self.end));
        Ok(ParseNode::branch(
            tags::ROOT,
            Span::new(0, self.end.end),
            children,
        ))
    }

    /// `expr : <number> | <symbol> | <sexpr>`. Callers guarantee a token is
    /// available and is not `)`.
    fn parse_expr(&mut self) -> Result<ParseNode, ParseError> {
        let Some(token) = self.peek() else {
            return Err(ParseError::UnclosedSExpr {
                open: self.end,
                end: self.end,
            });
        };
        match token.kind {
            TokenKind::Number => {
                self.bump();
                Ok(ParseNode::leaf(tags::NUMBER, token.text, token.span))
            }
            TokenKind::Symbol => {
                self.bump();
                Ok(ParseNode::leaf(tags::SYMBOL, token.text, token.span))
            }
            TokenKind::LParen => ensure_sufficient_stack(|| self.parse_sexpr()),
            TokenKind::RParen => Err(ParseError::UnexpectedClose { span: token.span }),
        }
    }

    /// `sexpr : '(' <expr>* ')'`, positioned on the `(`.
    fn parse_sexpr(&mut self) -> Result<ParseNode, ParseError> {
        let Some(open) = self.peek() else {
            return Err(ParseError::UnclosedSExpr {
                open: self.end,
                end: self.end,
            });
        };
        self.bump();
        let mut children = vec![ParseNode::leaf(tags::CHAR, open.text, open.span)];
        loop {
            match self.peek() {
                None => {
                    return Err(ParseError::UnclosedSExpr {
                        open: open.span,
                        end: self.end,
                    })
                }
                Some(close) if close.kind == TokenKind::RParen => {
                    self.bump();
                    children.push(ParseNode::leaf(tags::CHAR, close.text, close.span));
                    return Ok(ParseNode::branch(
                        tags::SEXPR,
                        open.span.merge(close.span),
                        children,
                    ));
                }
                Some(_) => children.push(self.parse_expr()?),
            }
        }
    }
}
