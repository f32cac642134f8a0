use crate::alphabet::{ByteClassBuilder, ByteClasses, ByteSet, DisplayByte};

#[test]
fn byte_set_membership() {
    let mut set = ByteSet::empty();
    set.insert(b'a');
    set.insert(200);

    assert!(set.contains(b'a'));
    assert!(set.contains(200));
    assert!(!set.contains(b'b'));
    assert_eq!(set.len(), 2);
}

#[test]
fn byte_set_complement_covers_everything_else() {
    let set = ByteSet::range(b'a', b'c');
    let complement = set.complement();

    assert_eq!(complement.len(), 253);
    assert!(!complement.contains(b'b'));
    assert!(complement.contains(b'd'));
    assert_eq!(set.union(complement), ByteSet::full());
}

#[test]
fn byte_set_ranges_merge_adjacent_bytes() {
    let mut set = ByteSet::range(b'a', b'c');
    set.insert(b'x');
    set.insert(255);

    assert_eq!(set.ranges(), vec![(b'a', b'c'), (b'x', b'x'), (255, 255)]);
    insta::assert_snapshot!(format!("{set:?}"), @r"[a-cx\xFF]");
}

#[test]
fn display_byte_escapes_non_graphic() {
    assert_eq!(DisplayByte(b'a').to_string(), "a");
    assert_eq!(DisplayByte(b' ').to_string(), "\\x20");
    assert_eq!(DisplayByte(0).to_string(), "\\x00");
}

#[test]
fn singleton_classes() {
    let classes = ByteClasses::singleton();

    assert_eq!(classes.len(), 1);
    assert_eq!(classes.get(0), 0);
    assert_eq!(classes.get(255), 0);
    assert_eq!(classes.representative(0), 0);
}

#[test]
fn single_byte_splits_into_three_classes() {
    let mut builder = ByteClassBuilder::new();
    builder.add_byte(b'a');
    let classes = builder.build();

    assert_eq!(classes.len(), 3);
    assert_eq!(classes.get(b'a' - 1), 0);
    assert_eq!(classes.get(b'a'), 1);
    assert_eq!(classes.get(b'a' + 1), 2);
    assert_eq!(
        classes.representatives().collect::<Vec<_>>(),
        vec![(0, 0), (1, b'a'), (2, b'b')]
    );
}

#[test]
fn edge_bytes_do_not_create_empty_classes() {
    let mut builder = ByteClassBuilder::new();
    builder.add_byte(0);
    builder.add_byte(255);
    let classes = builder.build();

    assert_eq!(classes.len(), 3);
    assert_eq!(classes.members(0), ByteSet::singleton(0));
    assert_eq!(classes.members(2), ByteSet::singleton(255));
}

#[test]
fn sets_become_unions_of_classes() {
    let mut builder = ByteClassBuilder::new();
    builder.add_set(&ByteSet::range(b'a', b'z'));
    builder.add_byte(b'm');
    let classes = builder.build();

    // [\x00-`] [a-l] [m] [n-z] [{-\xFF]
    assert_eq!(classes.len(), 5);
    assert_eq!(classes.get(b'a'), classes.get(b'l'));
    assert_ne!(classes.get(b'l'), classes.get(b'm'));
    assert_eq!(classes.members(classes.get(b'n')), ByteSet::range(b'n', b'z'));
}

#[test]
fn refine_keeps_boundaries_of_both() {
    let mut left = ByteClassBuilder::new();
    left.add_byte(b'a');
    let mut right = ByteClassBuilder::new();
    right.add_byte(b'c');

    let refined = left.build().refine(&right.build());

    // [\x00-`] [a] [b] [c] [d-\xFF]
    assert_eq!(refined.len(), 5);
    assert_eq!(refined.get(b'b'), 2);
    assert_eq!(refined.representative(4), b'd');
}
