//! Lexer for pattern text.
//!
//! Every token is one byte, except `Escape` which is a backslash plus the
//! escaped byte. Tokens carry spans; text is sliced from the source only
//! when the parser needs the byte a token stands for.
//!
//! Lexing stops at the first byte that is not 7-bit ASCII and at a trailing
//! backslash.

use logos::Logos;
use std::ops::Range;

use super::error::{SyntaxError, SyntaxErrorKind};
use crate::{Error, Result};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Question,

    #[token(".")]
    Dot,

    #[token("|")]
    Pipe,

    /// Range operator inside classes, a literal elsewhere.
    #[token("-")]
    Dash,

    /// Negation at the start of a class, a literal elsewhere.
    #[token("^")]
    Caret,

    /// Backslash and the ASCII byte it makes literal.
    #[regex(r"\\[\x00-\x7F]")]
    Escape,

    /// Any other ASCII byte. Excludes the backslash so that a trailing one
    /// surfaces as an error. Ranks below the single-byte tokens above.
    #[regex(r"[\x00-\x5B\x5D-\x7F]", priority = 1)]
    Literal,
}

impl TokenKind {
    #[inline]
    pub fn is_quantifier(self) -> bool {
        matches!(self, TokenKind::Star | TokenKind::Plus | TokenKind::Question)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.span.start
    }

    /// The byte this token denotes when read as a literal.
    #[inline]
    pub fn byte(&self, source: &str) -> u8 {
        let bytes = source.as_bytes();
        match self.kind {
            TokenKind::Escape => bytes[self.span.start + 1],
            _ => bytes[self.span.start],
        }
    }
}

/// Tokenize pattern text.
pub fn lex(source: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::with_capacity(source.len());
    let mut lexer = TokenKind::lexer(source);

    while let Some(next) = lexer.next() {
        let span = lexer.span();
        match next {
            Ok(kind) => tokens.push(Token::new(kind, span)),
            Err(()) => return Err(lex_error(source, span.start)),
        }
    }

    Ok(tokens)
}

fn lex_error(source: &str, offset: usize) -> Error {
    let rest = &source[offset..];
    if let Some(after) = rest.strip_prefix('\\') {
        return match after.chars().next() {
            Some(ch) => Error::UnsupportedCharacter {
                ch,
                offset: offset + 1,
            },
            None => SyntaxError::new(SyntaxErrorKind::DanglingEscape, offset).into(),
        };
    }

    match rest.chars().next() {
        Some(ch) => Error::UnsupportedCharacter { ch, offset },
        None => SyntaxError::new(SyntaxErrorKind::DanglingEscape, offset).into(),
    }
}
