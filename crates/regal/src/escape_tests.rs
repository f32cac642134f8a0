use crate::escape::{escape, is_metacharacter};
use crate::{Error, parser};

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(escape("hello world").unwrap(), "hello world");
    assert_eq!(escape("").unwrap(), "");
}

#[test]
fn metacharacters_get_a_backslash() {
    insta::assert_snapshot!(escape(r"a.b*(c|d)[e]+f?-\").unwrap(), @r"a\.b\*\(c\|d\)\[e\]\+f\?\-\\");
}

#[test]
fn caret_needs_no_escape() {
    assert!(!is_metacharacter(b'^'));
    assert_eq!(escape("^a").unwrap(), "^a");
}

#[test]
fn non_ascii_reports_byte_offset() {
    assert_eq!(
        escape("ab\u{2603}c").unwrap_err(),
        Error::UnsupportedCharacter {
            ch: '\u{2603}',
            offset: 2
        }
    );
}

#[test]
fn escaped_text_matches_itself_only() {
    for text in ["a.b", "(x|y)*", r"\", "[^-]", "1+1?"] {
        let escaped = escape(text).unwrap();
        let nfa = parser::parse(&escaped, 64).unwrap();
        assert!(nfa.matches(text), "{escaped:?} should match {text:?}");
        assert!(!nfa.matches(format!("{text}x")));
    }
}
