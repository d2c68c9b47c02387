use reo_types::symbols::{diphthong_spelling, NG, WH};

/// Spells canonical symbols back out in standard orthography.
///
/// `ŋ` → "ng", `f` → "wh", and each diphthong symbol → its two letters.
/// Macronised vowels are already standard and pass through, as does
/// anything outside the alphabet. Used for display only.
pub fn denormalize_into(text: &str, out: &mut String) {
    out.clear();
    out.reserve(text.len() + text.len() / 4);

    for c in text.chars() {
        match c {
            NG => out.push_str("ng"),
            WH => out.push_str("wh"),
            _ => match diphthong_spelling(c) {
                Some(spelling) => out.push_str(spelling),
                None => out.push(c),
            },
        }
    }
}

/// Denormalizes and returns a new String.
#[inline]
pub fn denormalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    denormalize_into(text, &mut out);
    out
}
