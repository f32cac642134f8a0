//! Pattern parser.
//!
//! # Architecture
//!
//! Pattern text is tokenized by a logos lexer and consumed by a
//! recursive-descent parser that emits Thompson NFA fragments straight into
//! an [`NfaBuilder`]. There is no intermediate syntax tree: each production
//! returns the fragment for the text it consumed.
//!
//! - Zero-copy lexing: tokens carry spans, bytes are read from the source on demand
//! - Fail-fast: the first problem aborts with a [`SyntaxError`] carrying a byte offset
//! - Group nesting is bounded by a recursion limit; the default
//!   ([`DEFAULT_RECURSION_LIMIT`](crate::config::DEFAULT_RECURSION_LIMIT))
//!   fits a 2 MiB thread stack, larger limits need a larger stack

pub mod lexer;

mod core;
mod error;
mod grammar;
mod invariants;

#[cfg(test)]
mod grammar_tests;

pub use self::core::Parser;
pub use error::{SyntaxError, SyntaxErrorKind};

use regal_automata::{Nfa, NfaBuilder};

use crate::Result;
use lexer::lex;

/// Compile pattern text into an NFA.
///
/// The empty pattern denotes the language containing only the empty string.
pub fn parse(source: &str, recursion_limit: u32) -> Result<Nfa> {
    let tokens = lex(source)?;
    let mut builder = NfaBuilder::new();

    let fragment = {
        let mut parser = Parser::new(source, tokens, &mut builder, recursion_limit);
        parser.parse_root()?
    };

    Ok(builder.finish(fragment))
}
