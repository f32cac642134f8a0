//! Escaping literal text into pattern syntax.

use crate::{Error, Result};

/// Bytes with a meaning in pattern syntax outside character classes.
const METACHARACTERS: &[u8] = b"-()[]*+.?|\\";

/// Escape `text` so that it compiles to a pattern matching exactly `text`.
///
/// Fails on the first character outside 7-bit ASCII.
pub fn escape(text: &str) -> Result<String> {
    let mut escaped = String::with_capacity(text.len() * 2);

    for (offset, ch) in text.char_indices() {
        if !ch.is_ascii() {
            return Err(Error::UnsupportedCharacter { ch, offset });
        }
        if is_metacharacter(ch as u8) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }

    Ok(escaped)
}

#[inline]
pub fn is_metacharacter(byte: u8) -> bool {
    METACHARACTERS.contains(&byte)
}
