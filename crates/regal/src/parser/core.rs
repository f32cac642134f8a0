//! Parser state and low-level token operations.

use regal_automata::NfaBuilder;

use super::error::{SyntaxError, SyntaxErrorKind};
use super::lexer::{Token, TokenKind};
use crate::{Error, Result};

/// Recursive-descent parser emitting NFA fragments into a shared builder.
pub struct Parser<'src, 'b> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) builder: &'b mut NfaBuilder,
    depth: u32,
    recursion_limit: u32,
}

impl<'src, 'b> Parser<'src, 'b> {
    pub fn new(
        source: &'src str,
        tokens: Vec<Token>,
        builder: &'b mut NfaBuilder,
        recursion_limit: u32,
    ) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            builder,
            depth: 0,
            recursion_limit,
        }
    }

    #[inline]
    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub(super) fn current(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    #[inline]
    pub(super) fn nth(&self, lookahead: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + lookahead).map(|t| t.kind)
    }

    #[inline]
    pub(super) fn currently_is(&self, kind: TokenKind) -> bool {
        self.current() == Some(kind)
    }

    /// Offset of the current token, or the end of the source at EOF.
    pub(super) fn current_offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map_or(self.source.len(), Token::offset)
    }

    /// Literal byte of the current token. Callers check for EOF first.
    pub(super) fn current_byte(&self) -> u8 {
        self.ensure_not_eof();
        self.tokens[self.pos].byte(self.source)
    }

    pub(super) fn bump(&mut self) {
        self.ensure_not_eof();
        self.pos += 1;
    }

    pub(super) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(super) fn error<T>(&self, kind: SyntaxErrorKind, offset: usize) -> Result<T> {
        Err(SyntaxError::new(kind, offset).into())
    }

    pub(super) fn enter_recursion(&mut self) -> Result<()> {
        if self.depth >= self.recursion_limit {
            return Err(Error::RecursionLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    /// Whether the parser is inside at least one group.
    #[inline]
    pub(super) fn in_group(&self) -> bool {
        self.depth > 0
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
