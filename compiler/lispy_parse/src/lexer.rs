//! Lexer for Lispy using logos.

use crate::{ParseError, Span};
use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Copy, Clone, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum TokenKind {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // Longest match keeps `-5` a number and `- 5` a symbol then a number.
    #[regex(r"-?[0-9]+")]
    Number,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("!")]
    Symbol,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

/// Tokenize a whole line, stopping at the first unrecognised character.
pub(crate) fn lex(source: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();
    while let Some(kind) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let text = lexer.slice();
        match kind {
            Ok(kind) => tokens.push(Token { kind, text, span }),
            Err(()) => {
                return Err(ParseError::UnexpectedCharacter {
                    text: text.to_owned(),
                    span,
                })
            }
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source)
            .unwrap_or_default()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn negative_literal_is_one_number() {
        assert_eq!(kinds("-5"), vec![TokenKind::Number]);
    }

    #[test]
    fn minus_then_space_is_symbol() {
        assert_eq!(kinds("- 5"), vec![TokenKind::Symbol, TokenKind::Number]);
    }

    #[test]
    fn adjacent_numbers_split_on_sign() {
        let tokens = lex("1-2").unwrap_or_default();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["1", "-2"]);
    }

    #[test]
    fn every_operator_symbol() {
        assert_eq!(kinds("+ - * / !"), vec![TokenKind::Symbol; 5]);
    }

    #[test]
    fn whitespace_including_newlines_is_skipped() {
        assert_eq!(
            kinds("(\t1\r\n)"),
            vec![TokenKind::LParen, TokenKind::Number, TokenKind::RParen]
        );
    }

    #[test]
    fn unknown_character_reports_span() {
        assert_eq!(
            lex("(+ 1 x)"),
            Err(ParseError::UnexpectedCharacter {
                text: "x".to_owned(),
                span: Span::new(5, 6),
            })
        );
    }
}
