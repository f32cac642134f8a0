//! Byte sets and byte classes.
//!
//! Automata run over raw bytes, but transition tables are indexed by byte
//! *class*: a maximal run of bytes that no label in the automaton tells
//! apart. The classes of an automaton are its effective alphabet; bytes a
//! pattern never mentions all fall into "any other symbol" classes.

use std::fmt;

/// A set of bytes, stored as a 256-bit bitmap.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteSet {
    bits: [u128; 2],
}

impl ByteSet {
    pub const fn empty() -> Self {
        Self { bits: [0; 2] }
    }

    pub const fn full() -> Self {
        Self {
            bits: [u128::MAX; 2],
        }
    }

    pub fn singleton(byte: u8) -> Self {
        let mut set = Self::empty();
        set.insert(byte);
        set
    }

    /// Set containing every byte in `lo..=hi`.
    pub fn range(lo: u8, hi: u8) -> Self {
        let mut set = Self::empty();
        set.insert_range(lo, hi);
        set
    }

    #[inline]
    pub fn insert(&mut self, byte: u8) {
        let (word, bit) = Self::locate(byte);
        self.bits[word] |= 1 << bit;
    }

    pub fn insert_range(&mut self, lo: u8, hi: u8) {
        for byte in lo..=hi {
            self.insert(byte);
        }
    }

    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        let (word, bit) = Self::locate(byte);
        self.bits[word] & (1 << bit) != 0
    }

    pub fn complement(self) -> Self {
        Self {
            bits: [!self.bits[0], !self.bits[1]],
        }
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            bits: [self.bits[0] | other.bits[0], self.bits[1] | other.bits[1]],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bits == [0; 2]
    }

    pub fn len(&self) -> usize {
        (self.bits[0].count_ones() + self.bits[1].count_ones()) as usize
    }

    /// Iterate over members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&b| self.contains(b))
    }

    /// Members grouped into inclusive ascending ranges.
    pub fn ranges(&self) -> Vec<(u8, u8)> {
        let mut ranges: Vec<(u8, u8)> = Vec::new();
        for byte in self.iter() {
            match ranges.last_mut() {
                Some((_, hi)) if *hi as u16 + 1 == byte as u16 => *hi = byte,
                _ => ranges.push((byte, byte)),
            }
        }
        ranges
    }

    #[inline]
    fn locate(byte: u8) -> (usize, u32) {
        ((byte >> 7) as usize, (byte & 0x7f) as u32)
    }
}

impl fmt::Debug for ByteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (lo, hi) in self.ranges() {
            if lo == hi {
                write!(f, "{}", DisplayByte(lo))?;
            } else {
                write!(f, "{}-{}", DisplayByte(lo), DisplayByte(hi))?;
            }
        }
        write!(f, "]")
    }
}

/// Printable form of a byte: graphic ASCII as-is, everything else as `\xNN`.
#[derive(Clone, Copy)]
pub struct DisplayByte(pub u8);

impl fmt::Display for DisplayByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_ascii_graphic() {
            write!(f, "{}", self.0 as char)
        } else {
            write!(f, "\\x{:02X}", self.0)
        }
    }
}

/// Partition of all 256 bytes into contiguous classes.
#[derive(Clone, PartialEq, Eq)]
pub struct ByteClasses {
    /// Class of each byte.
    map: [u8; 256],
    /// First byte of each class, in class order.
    representatives: Vec<u8>,
}

impl ByteClasses {
    /// A single class holding every byte.
    pub fn singleton() -> Self {
        ByteClassBuilder::new().build()
    }

    #[inline]
    pub fn get(&self, byte: u8) -> usize {
        self.map[byte as usize] as usize
    }

    /// Number of classes. Always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.representatives.len()
    }

    /// Never true; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.representatives.is_empty()
    }

    /// Smallest byte of `class`.
    #[inline]
    pub fn representative(&self, class: usize) -> u8 {
        self.representatives[class]
    }

    /// `(class, representative byte)` for every class.
    pub fn representatives(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.representatives.iter().copied().enumerate()
    }

    /// All bytes belonging to `class`.
    pub fn members(&self, class: usize) -> ByteSet {
        let mut set = ByteSet::empty();
        for byte in 0..=u8::MAX {
            if self.get(byte) == class {
                set.insert(byte);
            }
        }
        set
    }

    /// Common refinement of two partitions.
    ///
    /// Two bytes share a refined class only if they share a class in both
    /// inputs, so a single representative byte drives both automata of a
    /// product consistently.
    pub fn refine(&self, other: &ByteClasses) -> ByteClasses {
        let mut builder = ByteClassBuilder::new();
        for byte in 0..u8::MAX {
            let next = byte + 1;
            if self.get(byte) != self.get(next) || other.get(byte) != other.get(next) {
                builder.boundary_after(byte);
            }
        }
        builder.build()
    }
}

impl fmt::Debug for ByteClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for class in 0..self.len() {
            list.entry(&self.members(class));
        }
        list.finish()
    }
}

/// Collects label boundaries and produces [`ByteClasses`].
#[derive(Clone, Debug, Default)]
pub struct ByteClassBuilder {
    /// A set bit at `b` means a class ends after byte `b`.
    boundaries: ByteSet,
}

impl ByteClassBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split classes so that `set` is a union of whole classes.
    pub fn add_set(&mut self, set: &ByteSet) {
        for byte in 0..u8::MAX {
            if set.contains(byte) != set.contains(byte + 1) {
                self.boundary_after(byte);
            }
        }
    }

    pub fn add_byte(&mut self, byte: u8) {
        if byte > 0 {
            self.boundary_after(byte - 1);
        }
        if byte < u8::MAX {
            self.boundary_after(byte);
        }
    }

    fn boundary_after(&mut self, byte: u8) {
        self.boundaries.insert(byte);
    }

    pub fn build(&self) -> ByteClasses {
        let mut map = [0u8; 256];
        let mut representatives = vec![0u8];
        let mut class = 0u8;
        for byte in 0..=u8::MAX {
            map[byte as usize] = class;
            if byte < u8::MAX && self.boundaries.contains(byte) {
                class += 1;
                representatives.push(byte + 1);
            }
        }
        ByteClasses {
            map,
            representatives,
        }
    }
}
