use reo_types::symbols::{NG, WH};
use unicode_normalization::UnicodeNormalization;

/// Word characters survive normalization; everything else is a separator.
#[inline(always)]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lowercases with 1:1 simple case mapping: when the full mapping expands
/// (`İ` → `i̇`), only its first character is kept.
#[inline(always)]
fn simple_lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Folds raw text into the canonical phonemic spelling.
///
/// Performs the following operations, in order:
/// - Unicode canonical composition (NFC), so "a" + U+0304 and "ā" agree
/// - Lowercasing (Unicode-aware, one char per char)
/// - Replacing each run of non-word characters with a single space
/// - Folding "ng" to `ŋ`, then "wh" to `f`
///
/// Leading and trailing separators collapse to one space but are kept;
/// trimming is left to the mangler.
///
/// The two digraphs share no letters, so folding both in one left-to-right
/// pass gives the same result as two separate passes.
///
/// # Examples
///
/// ```
/// use reo_core::analyzer::normalizer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("Ko Whanga-nui!"), "ko faŋa nui ");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let mut prev_space = false;
        // An 'n' or 'w' held back until we know whether it starts a digraph.
        let mut pending: Option<char> = None;

        for composed in input.nfc() {
            let c = simple_lowercase(composed);
            if !is_word_char(c) {
                if let Some(p) = pending.take() {
                    out.push(p);
                }
                if !prev_space {
                    out.push(' ');
                    prev_space = true;
                }
                continue;
            }

            prev_space = false;

            if let Some(p) = pending.take() {
                match (p, c) {
                    ('n', 'g') => {
                        out.push(NG);
                        continue;
                    }
                    ('w', 'h') => {
                        out.push(WH);
                        continue;
                    }
                    _ => out.push(p),
                }
            }

            if c == 'n' || c == 'w' {
                pending = Some(c);
            } else {
                out.push(c);
            }
        }

        if let Some(p) = pending {
            out.push(p);
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

/// Normalizes `input` with the default normalizer.
#[inline]
pub fn normalize(input: &str) -> String {
    TextNormalizer::new().normalize(input)
}

/// Light clean-up for displaying raw corpus text.
///
/// Composes to NFC, turns every paragraph break (a newline, some
/// whitespace, and at least one more newline) into `". "`, and every other
/// newline plus the whitespace after it into a single space. Whitespace
/// after the last newline of a paragraph break is left alone.
pub fn partially_normalize(input: &str) -> String {
    let chars: Vec<char> = input.nfc().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];
        if c != '\n' {
            out.push(c);
            i += 1;
            continue;
        }

        let mut run_end = i + 1;
        let mut last_newline = None;
        while run_end < chars.len() && chars[run_end].is_whitespace() {
            if chars[run_end] == '\n' {
                last_newline = Some(run_end);
            }
            run_end += 1;
        }

        match last_newline {
            Some(last) => {
                out.push_str(". ");
                i = last + 1;
            }
            None => {
                out.push(' ');
                i = run_end;
            }
        }
    }

    out
}
