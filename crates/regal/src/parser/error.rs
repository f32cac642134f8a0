//! Syntax errors and their rendering.

use std::fmt;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

/// What went wrong while parsing a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    /// `(` without a matching `)`.
    UnclosedGroup,
    /// `)` without an open group.
    UnmatchedParen,
    /// `]` outside a character class.
    UnmatchedBracket,
    /// An alternative or group with nothing in it.
    EmptyExpression,
    /// `*`, `+` or `?` where an atom was expected.
    NothingToRepeat,
    /// `\` at the end of the pattern.
    DanglingEscape,
    /// `[` without a matching `]`.
    UnclosedClass,
    /// `[]` or `[^]`.
    EmptyClass,
    /// A class range whose end sorts before its start.
    InvalidRange,
}

impl SyntaxErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnclosedGroup => "missing closing `)`",
            Self::UnmatchedParen => "unmatched `)`",
            Self::UnmatchedBracket => "unmatched `]`",
            Self::EmptyExpression => "expected an expression",
            Self::NothingToRepeat => "quantifier has nothing to repeat",
            Self::DanglingEscape => "dangling `\\` at end of pattern",
            Self::UnclosedClass => "missing closing `]`",
            Self::EmptyClass => "empty character class",
            Self::InvalidRange => "character class range is out of order",
        }
    }

    /// Hint shown next to the offending position.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::UnmatchedParen | Self::UnmatchedBracket | Self::NothingToRepeat => {
                Some("escape it with `\\` to match it literally")
            }
            Self::DanglingEscape => Some("use `\\\\` to match a backslash"),
            Self::InvalidRange => Some("write the smaller byte first, e.g. `a-z`"),
            _ => None,
        }
    }
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A malformed pattern. `offset` is a byte offset into the pattern text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub offset: usize,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Render the error against the pattern it came from.
    pub fn render(&self, source: &str) -> String {
        let start = self.offset.min(source.len());
        let range = start..(start + 1).min(source.len());
        let label = self.kind.hint().unwrap_or(self.kind.message());

        let snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(label));
        let report: Vec<Group> = vec![
            Level::ERROR
                .primary_title(self.kind.message())
                .element(snippet),
        ];

        Renderer::plain().render(&report).to_string()
    }
}
