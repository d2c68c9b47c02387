//! Mangler: derives the unigram and n-gram views of normalized text.
//!
//! Steps, each optional except trimming:
//!
//! 1. Drop English words ([`EnglishFilter`])
//! 2. Expand long vowels to doubled plain vowels (`ā` → `aa`)
//! 3. Fold diphthong spellings to their symbols (`ai` → `ȧ`)
//! 4. Trim
//! 5. Pad with one space on each side
//!
//! Expansion runs before folding, so with both enabled "āe" becomes "aae"
//! and then "aæ".

use reo_types::symbols::{macron_spelling, FOLD_ORDER};
use reo_types::{ClusterPolicy, MangleOptions};

use super::filter::EnglishFilter;

/// Applies [`MangleOptions`] to normalized text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mangler {
    filter: EnglishFilter,
}

impl Mangler {
    /// Creates a mangler whose English filter uses `policy`.
    pub const fn new(policy: ClusterPolicy) -> Self {
        Self {
            filter: EnglishFilter::new(policy),
        }
    }

    /// The English filter used when `no_english` is set.
    #[inline(always)]
    pub const fn filter(&self) -> &EnglishFilter {
        &self.filter
    }

    /// Produces the view of `text` selected by `options`.
    pub fn mangle(&self, text: &str, options: &MangleOptions) -> String {
        let mut text = if options.no_english {
            self.filter.filter_words(text)
        } else {
            text.to_owned()
        };

        if !options.macrons {
            text = demacronise(&text);
        }

        if options.diphthongs {
            text = fold_diphthongs(&text);
        }

        let trimmed = text.trim();
        if options.space_padding {
            let mut padded = String::with_capacity(trimmed.len() + 2);
            padded.push(' ');
            padded.push_str(trimmed);
            padded.push(' ');
            padded
        } else {
            trimmed.to_owned()
        }
    }
}

/// Expands each macronised vowel to its doubled plain spelling.
pub fn demacronise(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        match macron_spelling(c) {
            Some(doubled) => out.push_str(doubled),
            None => out.push(c),
        }
    }
    out
}

/// Replaces diphthong spellings with their symbols.
///
/// One pass per [`FOLD_ORDER`] entry, each replacing non-overlapping
/// occurrences left to right. The result differs from a single greedy scan:
/// "aei" becomes "aė" because `ei` is folded before `ae`.
pub fn fold_diphthongs(text: &str) -> String {
    let mut text = text.to_owned();
    let mut buf = [0u8; 4];
    for (spelling, symbol) in FOLD_ORDER {
        if text.contains(spelling) {
            text = text.replace(spelling, symbol.encode_utf8(&mut buf));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mangle(text: &str, options: MangleOptions) -> String {
        Mangler::default().mangle(text, &options)
    }

    #[test]
    fn unigram_view_folds_diphthongs_keeps_macrons() {
        assert_eq!(mangle("ko wai au ", MangleOptions::unigrams()), "ko wȧ ä");
        assert_eq!(mangle("ŋā fare", MangleOptions::unigrams()), "ŋā fare");
    }

    #[test]
    fn ngram_view_spells_everything_out_and_pads() {
        assert_eq!(mangle("ŋā hau", MangleOptions::ngrams()), " ŋaa hau ");
    }

    #[test]
    fn macrons_expand_before_diphthongs_fold() {
        let options = MangleOptions {
            diphthongs: true,
            macrons: false,
            no_english: false,
            space_padding: false,
        };
        assert_eq!(mangle("āe", options), "aæ");
        assert_eq!(mangle("māui", options), "maäi");
    }

    #[test]
    fn diphthong_fold_follows_fold_order() {
        assert_eq!(fold_diphthongs("oae"), "oæ");
        assert_eq!(fold_diphthongs("aoe"), "aœ");
        assert_eq!(fold_diphthongs("aei"), "aė");
        assert_eq!(fold_diphthongs("eai"), "eȧ");
        assert_eq!(fold_diphthongs("oui"), "öi");
        assert_eq!(fold_diphthongs("aotearoa"), "åtearoa");
    }

    #[test]
    fn overlapping_diphthongs_in_real_words() {
        assert_eq!(fold_diphthongs("haere maeiŋa"), "hære maėŋa");
        assert_eq!(mangle("kaoe tāoi", MangleOptions::unigrams()), "kaœ tāȯ");
    }

    #[test]
    fn every_diphthong_folds() {
        for (spelling, symbol) in FOLD_ORDER {
            assert_eq!(fold_diphthongs(spelling), symbol.to_string());
        }
    }

    #[test]
    fn demacronise_all_vowels() {
        assert_eq!(demacronise("āēīōū"), "aaeeiioouu");
        assert_eq!(demacronise("kōrero"), "koorero");
        assert_eq!(demacronise(""), "");
    }

    #[test]
    fn english_stripped_when_requested() {
        assert_eq!(mangle("kia ora hello", MangleOptions::unigrams()), "kia ora");
        assert_eq!(mangle("kai hello", MangleOptions::unigrams()), "kȧ");
        let keep = MangleOptions {
            no_english: false,
            ..MangleOptions::unigrams()
        };
        assert_eq!(mangle(" hello ", keep), "hello");
    }

    #[test]
    fn policy_reaches_the_filter() {
        let adjacent = Mangler::new(ClusterPolicy::Adjacent);
        assert_eq!(adjacent.mangle("kat ora", &MangleOptions::unigrams()), "kat ora");
        assert_eq!(mangle("kat ora", MangleOptions::unigrams()), "ora");
    }

    #[test]
    fn empty_input() {
        assert_eq!(mangle("", MangleOptions::unigrams()), "");
        assert_eq!(mangle("", MangleOptions::ngrams()), "  ");
    }

    #[test]
    fn trims_without_padding() {
        let raw = MangleOptions {
            diphthongs: false,
            macrons: true,
            no_english: false,
            space_padding: false,
        };
        assert_eq!(mangle("  ora  ", raw), "ora");
        assert_eq!(mangle("ora", raw), "ora");
    }
}
