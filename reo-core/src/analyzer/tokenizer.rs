//! Word splitter for mangled text.
//!
//! The n-gram pass works word by word. Mangled text only ever contains
//! single ASCII spaces between words, plus one leading and one trailing
//! space when padded, so a byte scan for 0x20 is all the splitting needed.
//!
//! ```ignore
//! " ŋaa hau " -> "ŋaa", "hau"
//! ```
//!
//! Words are slices of the input; nothing is allocated.

use core::str;
use memchr::memchr_iter;

/// Splits `text` on ASCII spaces and emits each non-empty word.
///
/// Empty runs (leading, trailing or doubled spaces) are skipped, so padded
/// and unpadded views yield the same words.
///
/// # Example
///
/// ```
/// use reo_core::analyzer::tokenizer::split_words;
///
/// let mut words = Vec::new();
/// split_words(" kia  ora ", |word| words.push(word));
/// assert_eq!(words, ["kia", "ora"]);
/// ```
#[inline]
pub fn split_words<'n, F>(text: &'n str, mut emit: F)
where
    F: FnMut(&'n str),
{
    let bytes = text.as_bytes();
    let mut start = 0usize;

    for i in memchr_iter(b' ', bytes) {
        if start < i {
            // SAFETY: `text` is valid UTF-8 and 0x20 is never a continuation
            // byte, so `bytes[start..i]` is a valid UTF-8 subslice.
            let word = unsafe { str::from_utf8_unchecked(&bytes[start..i]) };
            emit(word);
        }
        start = i + 1;
    }

    if start < bytes.len() {
        // SAFETY: as above; `start` follows an ASCII space byte.
        let word = unsafe { str::from_utf8_unchecked(&bytes[start..]) };
        emit(word);
    }
}
