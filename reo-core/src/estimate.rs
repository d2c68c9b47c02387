use reo_types::symbols::{CONSONANTS, DIPHTHONGS, LONG_VOWELS, VOWELS};

/// What the previous symbol was, for the two-state estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phone {
    /// After a vowel (or at the start): anything may follow.
    Vowel,
    /// After a consonant: only a vowel may follow.
    Consonant,
}

/// Very rough count of the n-grams a vowel/consonant language allows.
///
/// Assumes ten vowels (`a e i o u ā ē ī ō ū`) and ten consonants
/// (`h k m n ng p r t w wh`), no consonant clusters, and nothing else.
/// Saturates instead of overflowing.
pub fn possible_n_grams(n: u32, state: Phone) -> u128 {
    // Counts for k remaining symbols from each state, built up to k = n.
    let (mut after_vowel, mut after_consonant) = (1u128, 1u128);
    for _ in 0..n {
        let vowel_next = 10u128
            .saturating_mul(after_consonant)
            .saturating_add(10u128.saturating_mul(after_vowel));
        after_consonant = 10u128.saturating_mul(after_vowel);
        after_vowel = vowel_next;
    }

    match state {
        Phone::Vowel => after_vowel,
        Phone::Consonant => after_consonant,
    }
}

/// Lists every n-gram of `n` more symbols after `prefix` that avoids
/// consonant clusters.
///
/// Vowels can always follow. Diphthong symbols and long vowels join the
/// vowel set when enabled. Consonants can follow only at the very start
/// or after a symbol from that vowel set.
pub fn generate_n_grams(n: usize, prefix: &str, diphthongs: bool, macrons: bool) -> Vec<String> {
    let mut vocalic: Vec<char> = VOWELS.to_vec();
    if diphthongs {
        vocalic.extend(DIPHTHONGS.iter().map(|&(_, symbol)| symbol));
    }
    if macrons {
        vocalic.extend(LONG_VOWELS);
    }

    let mut out = Vec::new();
    let mut buf = String::from(prefix);
    generate_into(n, &mut buf, &vocalic, &mut out);
    out
}

fn generate_into(n: usize, buf: &mut String, vocalic: &[char], out: &mut Vec<String>) {
    if n == 0 {
        out.push(buf.clone());
        return;
    }

    let open = buf.chars().last().is_none_or(|c| vocalic.contains(&c));
    let consonants: &[char] = if open { &CONSONANTS } else { &[] };

    for &c in vocalic.iter().chain(consonants) {
        buf.push(c);
        generate_into(n - 1, buf, vocalic, out);
        buf.pop();
    }
}
