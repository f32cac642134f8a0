//! Grammar productions.
//!
//! ```text
//! root   = union? EOF
//! union  = concat ("|" concat)*
//! concat = repeat+
//! repeat = atom ("*" | "+" | "?")*
//! atom   = "(" union ")" | class | "." | literal | escape
//! class  = "[" "^"? item+ "]"
//! item   = byte ("-" byte)?
//! ```
//!
//! `-` and `^` are ordinary literals outside classes.

use regal_automata::{ByteSet, Fragment};

use super::core::Parser;
use super::error::SyntaxErrorKind;
use super::lexer::TokenKind;
use crate::Result;

impl Parser<'_, '_> {
    pub fn parse_root(&mut self) -> Result<Fragment> {
        if self.eof() {
            return Ok(self.builder.empty());
        }

        let fragment = self.parse_union()?;

        // `parse_union` only stops early at a `)` it did not open.
        if !self.eof() {
            return self.error(SyntaxErrorKind::UnmatchedParen, self.current_offset());
        }

        Ok(fragment)
    }

    fn parse_union(&mut self) -> Result<Fragment> {
        let mut fragment = self.parse_concat()?;
        while self.eat(TokenKind::Pipe) {
            let right = self.parse_concat()?;
            fragment = self.builder.union(fragment, right);
        }
        Ok(fragment)
    }

    fn parse_concat(&mut self) -> Result<Fragment> {
        let mut fragment: Option<Fragment> = None;

        while let Some(kind) = self.current() {
            if matches!(kind, TokenKind::Pipe | TokenKind::ParenClose) {
                break;
            }
            let next = self.parse_repeat()?;
            fragment = Some(match fragment {
                Some(prev) => self.builder.concat(prev, next),
                None => next,
            });
        }

        match fragment {
            Some(fragment) => Ok(fragment),
            None if self.currently_is(TokenKind::ParenClose) && !self.in_group() => {
                self.error(SyntaxErrorKind::UnmatchedParen, self.current_offset())
            }
            None => self.error(SyntaxErrorKind::EmptyExpression, self.current_offset()),
        }
    }

    fn parse_repeat(&mut self) -> Result<Fragment> {
        let mut fragment = self.parse_atom()?;

        loop {
            fragment = match self.current() {
                Some(TokenKind::Star) => self.builder.closure(fragment),
                Some(TokenKind::Plus) => self.builder.one_or_more(fragment),
                Some(TokenKind::Question) => self.builder.optional(fragment),
                _ => return Ok(fragment),
            };
            self.bump();
        }
    }

    fn parse_atom(&mut self) -> Result<Fragment> {
        let offset = self.current_offset();
        let Some(kind) = self.current() else {
            return self.error(SyntaxErrorKind::EmptyExpression, offset);
        };

        match kind {
            TokenKind::ParenOpen => self.parse_group(),
            TokenKind::BracketOpen => self.parse_class(),
            TokenKind::Dot => {
                self.bump();
                Ok(self.builder.any())
            }
            TokenKind::Escape | TokenKind::Literal | TokenKind::Dash | TokenKind::Caret => {
                let byte = self.current_byte();
                self.bump();
                Ok(self.builder.symbol(byte))
            }
            TokenKind::BracketClose => self.error(SyntaxErrorKind::UnmatchedBracket, offset),
            kind if kind.is_quantifier() => self.error(SyntaxErrorKind::NothingToRepeat, offset),
            _ => self.error(SyntaxErrorKind::EmptyExpression, offset),
        }
    }

    fn parse_group(&mut self) -> Result<Fragment> {
        let open = self.current_offset();
        self.bump();

        if self.eof() {
            return self.error(SyntaxErrorKind::UnclosedGroup, open + 1);
        }

        self.enter_recursion()?;
        let inner = self.parse_union();
        self.exit_recursion();
        let inner = inner?;

        if !self.eat(TokenKind::ParenClose) {
            return self.error(SyntaxErrorKind::UnclosedGroup, open + 1);
        }

        Ok(inner)
    }

    /// Every token inside a class is literal except `]`, a leading `^`,
    /// and a `-` with an item on both sides.
    fn parse_class(&mut self) -> Result<Fragment> {
        let open = self.current_offset();
        self.bump();

        let negated = self.eat(TokenKind::Caret);
        let mut set = ByteSet::empty();
        let mut items = 0usize;

        loop {
            match self.current() {
                None => return self.error(SyntaxErrorKind::UnclosedClass, open + 1),
                Some(TokenKind::BracketClose) => {
                    if items == 0 {
                        return self.error(SyntaxErrorKind::EmptyClass, self.current_offset());
                    }
                    self.bump();
                    break;
                }
                Some(_) => {
                    self.parse_class_item(&mut set)?;
                    items += 1;
                }
            }
        }

        Ok(self.builder.class(set, negated))
    }

    fn parse_class_item(&mut self, set: &mut ByteSet) -> Result<()> {
        let start = self.current_offset();
        let lo = self.current_byte();
        self.bump();

        let is_range = self.currently_is(TokenKind::Dash)
            && !matches!(self.nth(1), None | Some(TokenKind::BracketClose));
        if !is_range {
            set.insert(lo);
            return Ok(());
        }

        self.bump();
        let hi = self.current_byte();
        self.bump();

        if hi < lo {
            return self.error(SyntaxErrorKind::InvalidRange, start);
        }
        set.insert_range(lo, hi);
        Ok(())
    }
}
