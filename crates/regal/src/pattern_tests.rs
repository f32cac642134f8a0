use std::sync::Arc;

use crate::PatternCache;

#[test]
fn concatenate() {
    let cache = PatternCache::new();
    let ab = cache.create("ab").unwrap();
    let cd = cache.create("cd").unwrap();

    let abcd = ab.concatenate(&cd, &cache).unwrap();

    assert_eq!(abcd.text(), "(ab)(cd)");
    assert!(abcd.matches("abcd"));
    assert!(!abcd.matches("ab"));
    assert!(!abcd.matches("cd"));
}

#[test]
fn concatenate_is_canonical() {
    let cache = PatternCache::new();
    let a = cache.create("a|b").unwrap();
    let b = cache.create("c*").unwrap();

    let first = a.concatenate(&b, &cache).unwrap();
    let second = cache.create("(a|b)(c*)").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn concatenate_with_empty_is_identity() {
    let cache = PatternCache::new();
    let empty = cache.create("").unwrap();
    let p = cache.create("x+").unwrap();

    assert!(Arc::ptr_eq(&empty.concatenate(&p, &cache).unwrap(), &p));
    assert!(Arc::ptr_eq(&p.concatenate(&empty, &cache).unwrap(), &p));
}

#[test]
fn union() {
    let cache = PatternCache::new();
    let a = cache.create("a").unwrap();
    let b = cache.create("b").unwrap();

    let either = a.union(&b, &cache).unwrap();

    assert_eq!(either.text(), "(a)|(b)");
    assert!(either.matches("a"));
    assert!(either.matches("b"));
    assert!(!either.matches("c"));
    assert!(!either.matches(""));
}

#[test]
fn union_with_empty_makes_optional() {
    let cache = PatternCache::new();
    let empty = cache.create("").unwrap();
    let a = cache.create("ab").unwrap();

    let left = empty.union(&a, &cache).unwrap();
    let right = a.union(&empty, &cache).unwrap();

    assert_eq!(left.text(), "(ab)?");
    assert!(Arc::ptr_eq(&left, &right));
    assert!(left.matches(""));
    assert!(left.matches("ab"));
    assert!(!left.matches("a"));
}

#[test]
fn union_with_empty_keeps_nullable_operand() {
    let cache = PatternCache::new();
    let empty = cache.create("").unwrap();
    let star = cache.create("a*").unwrap();

    assert!(Arc::ptr_eq(&empty.union(&star, &cache).unwrap(), &star));
    assert!(Arc::ptr_eq(&star.union(&empty, &cache).unwrap(), &star));
    assert!(Arc::ptr_eq(&empty.union(&empty, &cache).unwrap(), &empty));
}

#[test]
fn relations_through_facade() {
    let cache = PatternCache::new();
    let a = cache.create("a").unwrap();
    let a_or_b = cache.create("a|b").unwrap();
    let b_or_a = cache.create("b|a").unwrap();

    assert!(a.is_sublanguage_of(&a_or_b, &cache).unwrap());
    assert!(!a_or_b.is_sublanguage_of(&a, &cache).unwrap());
    assert!(a_or_b.is_equivalent_to(&b_or_a, &cache).unwrap());
    assert!(!a.is_equivalent_to(&a_or_b, &cache).unwrap());
}

#[test]
fn union_contains_operands() {
    let cache = PatternCache::new();
    let x = cache.create("x[0-9]*").unwrap();
    let y = cache.create("(yz)+").unwrap();
    let both = x.union(&y, &cache).unwrap();

    assert!(x.is_sublanguage_of(&both, &cache).unwrap());
    assert!(y.is_sublanguage_of(&both, &cache).unwrap());
    assert!(!both.is_sublanguage_of(&x, &cache).unwrap());
}

#[test]
fn language_queries() {
    let cache = PatternCache::new();

    assert!(cache.create("a*").unwrap().accepts_empty());
    assert!(!cache.create("a+").unwrap().accepts_empty());
    assert!(!cache.create("a").unwrap().is_empty_language());
    assert!(!cache.create("").unwrap().is_empty_language());
}

#[test]
fn accessors() {
    let cache = PatternCache::new();
    let p = cache.create("ab").unwrap();
    let q = cache.create("cd").unwrap();

    assert_eq!(p.text(), "ab");
    assert!(!p.is_literal());
    assert_eq!(p.literal(), None);
    assert_ne!(p.id(), q.id());
    assert_eq!(p.dfa().len(), 4);
    assert!(p.nfa().len() >= 3);
}

#[test]
fn debug_output() {
    let cache = PatternCache::new();
    let p = cache.literal("a+").unwrap();
    let rendered = format!("{p:?}").replace(&format!("{:?}", p.id()), "PatternId(..)");

    insta::assert_snapshot!(rendered, @r#"Pattern { id: PatternId(..), text: "a\\+", literal: Some("a+"), dfa_states: 4 }"#);
}
