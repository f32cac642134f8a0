use super::{SyntaxError, SyntaxErrorKind, parse};
use crate::Error;
use crate::config::DEFAULT_RECURSION_LIMIT;

const LIMIT: u32 = DEFAULT_RECURSION_LIMIT;

fn syntax_error(source: &str) -> (SyntaxErrorKind, usize) {
    match parse(source, LIMIT) {
        Err(Error::Syntax(SyntaxError { kind, offset })) => (kind, offset),
        other => panic!("expected a syntax error for {source:?}, got {other:?}"),
    }
}

#[track_caller]
fn check(source: &str, accepted: &[&str], rejected: &[&str]) {
    let nfa = parse(source, LIMIT).unwrap();
    for input in accepted {
        assert!(nfa.matches(input), "{source:?} should match {input:?}");
    }
    for input in rejected {
        assert!(!nfa.matches(input), "{source:?} should not match {input:?}");
    }
}

#[test]
fn empty_pattern_matches_only_empty_string() {
    check("", &[""], &["a", " "]);
}

#[test]
fn concatenation_and_union() {
    check("ab|cd", &["ab", "cd"], &["", "a", "abcd", "ad"]);
    check("a(b|c)d", &["abd", "acd"], &["ad", "abcd"]);
}

#[test]
fn quantifiers() {
    check("ab*", &["a", "ab", "abbb"], &["", "b", "aba"]);
    check("ab+", &["ab", "abbb"], &["a", ""]);
    check("ab?", &["a", "ab"], &["abb", ""]);
    check("(ab)*", &["", "ab", "abab"], &["a", "aba"]);
}

#[test]
fn stacked_quantifiers() {
    check("a*?", &["", "a", "aaa"], &["b"]);
    check("a+*", &["", "a", "aa"], &["b"]);
    check("a?+", &["", "a", "aa"], &["ab"]);
}

#[test]
fn dot_matches_any_byte() {
    check(".", &["a", "\n", "\u{7f}"], &["", "ab"]);
    check("a.c", &["abc", "a.c", "a c"], &["ac"]);
}

#[test]
fn escapes_are_literal() {
    check(r"a\*", &["a*"], &["", "a", "aa"]);
    check(r"\(\)", &["()"], &[""]);
    check(r"\\", &["\\"], &["", "\\\\"]);
    check(r"\.", &["."], &["a"]);
}

#[test]
fn dash_and_caret_are_literal_outside_classes() {
    check("a-b", &["a-b"], &["ab", "a"]);
    check("^a", &["^a"], &["a"]);
}

#[test]
fn character_classes() {
    check("[abc]", &["a", "b", "c"], &["", "d", "ab"]);
    check("[a-c0-2]+", &["a1b2", "cc", "0"], &["d", "3", ""]);
    check("[^ab]", &["c", "z", "\n"], &["a", "b", ""]);
    check("[-a]", &["-", "a"], &["b"]);
    check("[a-]", &["-", "a"], &["b"]);
    check("[a^]", &["a", "^"], &["b"]);
    check("[^^]", &["a"], &["^"]);
}

#[test]
fn metacharacters_in_classes_are_literal() {
    check("[.*(|]", &[".", "*", "(", "|"], &["a"]);
    check(r"[\]]", &["]"], &["\\"]);
    check(r"[\-a]", &["-", "a"], &["b"]);
}

#[test]
fn unclosed_group() {
    assert_eq!(syntax_error("(a"), (SyntaxErrorKind::UnclosedGroup, 1));
    assert_eq!(syntax_error("x(a|b"), (SyntaxErrorKind::UnclosedGroup, 2));
    assert_eq!(syntax_error("("), (SyntaxErrorKind::UnclosedGroup, 1));
}

#[test]
fn unmatched_closers() {
    assert_eq!(syntax_error("a)"), (SyntaxErrorKind::UnmatchedParen, 1));
    assert_eq!(syntax_error(")"), (SyntaxErrorKind::UnmatchedParen, 0));
    assert_eq!(syntax_error("a]"), (SyntaxErrorKind::UnmatchedBracket, 1));
}

#[test]
fn empty_alternatives_and_groups() {
    assert_eq!(syntax_error("|"), (SyntaxErrorKind::EmptyExpression, 0));
    assert_eq!(syntax_error("a|"), (SyntaxErrorKind::EmptyExpression, 2));
    assert_eq!(syntax_error("a||b"), (SyntaxErrorKind::EmptyExpression, 2));
    assert_eq!(syntax_error("()"), (SyntaxErrorKind::EmptyExpression, 1));
}

#[test]
fn nothing_to_repeat() {
    assert_eq!(syntax_error("*"), (SyntaxErrorKind::NothingToRepeat, 0));
    assert_eq!(syntax_error("a|+"), (SyntaxErrorKind::NothingToRepeat, 2));
    assert_eq!(syntax_error("(?)"), (SyntaxErrorKind::NothingToRepeat, 1));
}

#[test]
fn class_errors() {
    assert_eq!(syntax_error("[ab"), (SyntaxErrorKind::UnclosedClass, 1));
    assert_eq!(syntax_error("x[^"), (SyntaxErrorKind::UnclosedClass, 2));
    assert_eq!(syntax_error("[]"), (SyntaxErrorKind::EmptyClass, 1));
    assert_eq!(syntax_error("[^]"), (SyntaxErrorKind::EmptyClass, 2));
    assert_eq!(syntax_error("[az-a]"), (SyntaxErrorKind::InvalidRange, 2));
}

#[test]
fn dangling_escape() {
    assert_eq!(syntax_error("ab\\"), (SyntaxErrorKind::DanglingEscape, 2));
}

#[test]
fn recursion_limit() {
    let source = "((((a))))";
    assert!(parse(source, 4).is_ok());
    assert_eq!(parse(source, 3).unwrap_err(), Error::RecursionLimitExceeded);
}

#[test]
fn nesting_up_to_default_limit() {
    let depth = DEFAULT_RECURSION_LIMIT as usize;
    let source = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
    let nfa = parse(&source, LIMIT).unwrap();
    assert!(nfa.matches("a"));

    let deeper = format!("({source})");
    assert_eq!(parse(&deeper, LIMIT).unwrap_err(), Error::RecursionLimitExceeded);
}

#[test]
fn stacked_quantifiers_stay_linear() {
    let source = format!("(ab){}", "+".repeat(30));
    let nfa = parse(&source, LIMIT).unwrap();

    assert!(nfa.len() < 10);
    check(&source, &["ab", "abab"], &["", "a", "aba"]);
    check("((a+)+)+", &["a", "aaa"], &["", "b"]);
}

#[test]
fn error_display() {
    let err = parse("a(b", LIMIT).unwrap_err();
    insta::assert_snapshot!(err, @"missing closing `)` at offset 2");
}

#[test]
fn error_render_points_at_offset() {
    let source = "a||b";
    let Err(Error::Syntax(err)) = parse(source, LIMIT) else {
        panic!("expected a syntax error");
    };
    let rendered = err.render(source);

    assert!(rendered.contains("error: expected an expression"));
    assert!(rendered.contains("a||b"));
}

#[test]
fn error_render_with_hint() {
    let source = "a)";
    let Err(Error::Syntax(err)) = parse(source, LIMIT) else {
        panic!("expected a syntax error");
    };
    let rendered = err.render(source);

    assert!(rendered.contains("unmatched `)`"));
    assert!(rendered.contains("escape it with `\\` to match it literally"));
}
