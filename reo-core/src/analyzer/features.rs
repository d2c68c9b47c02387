//! Phonemic n-gram feature extraction.
//!
//! Features come from two views of the same normalized document:
//!
//! - **Unigrams** are counted over the view with diphthongs folded and
//!   macrons kept, so `ȧ` ("ai") and `ā` are single units. Spaces count.
//! - **Bigrams and trigrams** are counted word by word over the view with
//!   everything spelled out ("ngā hau" → `ŋaa hau`), optionally with each
//!   word wrapped in `«` `»`.
//!
//! A document that fails the English filter as a whole yields an empty
//! table. That is indistinguishable from an empty document.

use smallvec::SmallVec;
use tracing::{debug, trace};

use reo_types::{FeatureConfig, MangleOptions, TrigramMode, WORD_END, WORD_START};

use super::mangler::Mangler;
use super::normalizer::TextNormalizer;
use super::tokenizer::split_words;
use crate::table::FeatureTable;

/// Extracts weighted n-gram counts from raw text.
///
/// # Example
///
/// ```
/// use reo_core::analyzer::features::FeatureExtractor;
/// use reo_core::FeatureConfig;
///
/// let table = FeatureExtractor::new(FeatureConfig::default()).extract("ngā hau");
/// assert_eq!(table.get("ŋa"), 1);
/// assert_eq!(table.get("hau"), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor {
    config: FeatureConfig,
    normalizer: TextNormalizer,
    mangler: Mangler,
}

impl FeatureExtractor {
    /// Creates an extractor for `config`.
    pub const fn new(config: FeatureConfig) -> Self {
        Self {
            config,
            normalizer: TextNormalizer::new(),
            mangler: Mangler::new(config.cluster_policy),
        }
    }

    /// The configuration in use.
    #[inline(always)]
    pub const fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Normalizes `raw` and counts its features.
    pub fn extract(&self, raw: &str) -> FeatureTable {
        let normalized = self.normalizer.normalize(raw);
        self.extract_normalized(&normalized)
    }

    /// Counts the features of already normalized text.
    pub fn extract_normalized(&self, text: &str) -> FeatureTable {
        let mut table = FeatureTable::new();

        if self.mangler.filter().is_non_maori(text) {
            debug!(
                bytes = text.len(),
                policy = %self.config.cluster_policy,
                "document rejected by English filter"
            );
            return table;
        }

        let unigram_view = self.mangler.mangle(text, &MangleOptions::unigrams());
        self.count_unigrams(&unigram_view, &mut table);

        let ngram_view = self.mangler.mangle(text, &MangleOptions::ngrams());
        self.count_ngrams(&ngram_view, &mut table);

        trace!(distinct = table.len(), total = table.total(), "features extracted");
        table
    }

    fn count_unigrams(&self, view: &str, table: &mut FeatureTable) {
        let mut buf = [0u8; 4];
        for c in view.chars() {
            table.bump(c.encode_utf8(&mut buf));
        }
    }

    fn count_ngrams(&self, view: &str, table: &mut FeatureTable) {
        let trigrams = self.config.trigram_mode;
        let mut symbols: SmallVec<[char; 24]> = SmallVec::new();
        let mut key = String::with_capacity(12);

        split_words(view, |word| {
            symbols.clear();
            if self.config.word_boundaries {
                symbols.push(WORD_START);
                symbols.extend(word.chars());
                symbols.push(WORD_END);
            } else {
                symbols.extend(word.chars());
            }

            if symbols.len() < 2 {
                return;
            }

            for pair in symbols.windows(2) {
                key.clear();
                key.extend(pair);
                table.bump(&key);
            }

            if trigrams == TrigramMode::None {
                return;
            }

            for triple in symbols.windows(3) {
                if trigrams.accepts([triple[0], triple[1], triple[2]]) {
                    key.clear();
                    key.extend(triple);
                    table.bump(&key);
                }
            }
        });
    }
}

/// Normalizes `raw` and counts its features under `config`.
pub fn extract_features(raw: &str, config: &FeatureConfig) -> FeatureTable {
    FeatureExtractor::new(*config).extract(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reo_types::ClusterPolicy;

    fn features(raw: &str, word_boundaries: bool, trigram_mode: &str) -> FeatureTable {
        let config = FeatureConfig {
            word_boundaries,
            trigram_mode: trigram_mode.parse().unwrap(),
            cluster_policy: ClusterPolicy::default(),
        };
        extract_features(raw, &config)
    }

    fn grams(table: &FeatureTable, n: usize) -> Vec<(String, u32)> {
        let mut out: Vec<_> = table.by_order(n).map(|(g, c)| (g.to_owned(), c)).collect();
        out.sort();
        out
    }

    fn expect(pairs: &[(&str, u32)]) -> Vec<(String, u32)> {
        let mut out: Vec<_> = pairs.iter().map(|&(g, c)| (g.to_owned(), c)).collect();
        out.sort();
        out
    }

    #[test]
    fn unigrams_of_ko_wai_au() {
        let table = features("ko wai au?", false, "none");
        assert_eq!(
            grams(&table, 1),
            expect(&[("k", 1), ("o", 1), (" ", 2), ("w", 1), ("ȧ", 1), ("ä", 1)])
        );
    }

    #[test]
    fn unigrams_of_overlapping_diphthongs() {
        let table = features("maeinga haere", false, "none");
        assert_eq!(
            grams(&table, 1),
            expect(&[
                ("m", 1),
                ("a", 2),
                ("ė", 1),
                ("ŋ", 1),
                (" ", 1),
                ("h", 1),
                ("æ", 1),
                ("r", 1),
                ("e", 1),
            ])
        );
    }

    #[test]
    fn unigram_total_matches_view_length() {
        let raw = "Ko te reo Māori tōku reo";
        let table = features(raw, true, "all");
        let view = Mangler::default().mangle(
            &TextNormalizer::new().normalize(raw),
            &MangleOptions::unigrams(),
        );
        let total: u32 = table.by_order(1).map(|(_, c)| c).sum();
        assert_eq!(total as usize, view.chars().count());
    }

    #[test]
    fn bigrams_of_nga_hau() {
        let table = features("ngā hau", false, "none");
        assert_eq!(
            grams(&table, 2),
            expect(&[("ŋa", 1), ("aa", 1), ("ha", 1), ("au", 1)])
        );
    }

    #[test]
    fn trigrams_all() {
        let table = features("ngā hau", false, "all");
        assert_eq!(grams(&table, 3), expect(&[("ŋaa", 1), ("hau", 1)]));
    }

    #[test]
    fn trigrams_none() {
        let table = features("ngā hau", false, "none");
        assert!(grams(&table, 3).is_empty());
    }

    #[test]
    fn trigram_template_filters() {
        let table = features("kaka ora", false, "vcv");
        assert_eq!(grams(&table, 3), expect(&[("aka", 1), ("ora", 1)]));

        let table = features("ngā hau", false, "cvv");
        assert_eq!(grams(&table, 3), expect(&[("ŋaa", 1), ("hau", 1)]));

        let table = features("ngā hau", false, "vvv");
        assert!(grams(&table, 3).is_empty());
    }

    #[test]
    fn word_boundaries_wrap_each_word() {
        let table = features("ngā hau", true, "all");
        assert_eq!(
            grams(&table, 2),
            expect(&[
                ("«ŋ", 1),
                ("ŋa", 1),
                ("aa", 1),
                ("a»", 1),
                ("«h", 1),
                ("ha", 1),
                ("au", 1),
                ("u»", 1),
            ])
        );
        assert_eq!(
            grams(&table, 3),
            expect(&[
                ("«ŋa", 1),
                ("ŋaa", 1),
                ("aa»", 1),
                ("«ha", 1),
                ("hau", 1),
                ("au»", 1),
            ])
        );
    }

    #[test]
    fn boundary_markers_are_not_vowels() {
        let table = features("ora", true, "vcv");
        assert_eq!(grams(&table, 3), expect(&[("ora", 1)]));
    }

    #[test]
    fn single_letter_words_need_boundaries() {
        let table = features("a e i", false, "all");
        assert!(grams(&table, 2).is_empty());

        let table = features("a", true, "all");
        assert_eq!(grams(&table, 2), expect(&[("«a", 1), ("a»", 1)]));
        assert_eq!(grams(&table, 3), expect(&[("«a»", 1)]));
    }

    #[test]
    fn counts_accumulate() {
        let table = features("kaka kaka", false, "all");
        assert_eq!(table.get("ka"), 4);
        assert_eq!(table.get("ak"), 2);
        assert_eq!(table.get("kak"), 2);
        assert_eq!(table.get("aka"), 2);
    }

    #[test]
    fn diphthongs_spelled_out_for_bigrams() {
        let table = features("wai", false, "none");
        assert_eq!(table.get("ȧ"), 1);
        assert_eq!(table.get("ai"), 1);
        assert_eq!(table.get("wa"), 1);
    }

    #[test]
    fn english_document_yields_nothing() {
        assert!(features("hello", false, "all").is_empty());
        assert!(features("kia ora hello", true, "all").is_empty());
    }

    #[test]
    fn trailing_consonant_policy_decides_rejection() {
        let strict = extract_features("kat ora", &FeatureConfig::default());
        assert!(strict.is_empty());

        let lenient = extract_features(
            "kat ora",
            &FeatureConfig {
                cluster_policy: ClusterPolicy::Adjacent,
                ..FeatureConfig::default()
            },
        );
        assert_eq!(lenient.get("at"), 1);
        assert_eq!(lenient.get("t"), 1);
    }

    #[test]
    fn empty_document_yields_nothing() {
        assert!(features("", true, "all").is_empty());
        assert!(features("?!", true, "all").is_empty());
    }

    #[test]
    fn extractor_is_reusable() {
        let extractor = FeatureExtractor::new(FeatureConfig::bigrams());
        let first = extractor.extract("kia ora");
        let second = extractor.extract("kia ora");
        assert_eq!(first, second);
        assert_eq!(extractor.config().trigram_mode, TrigramMode::None);
    }
}
