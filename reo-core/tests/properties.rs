//! Pipeline properties checked over generated text.

use proptest::prelude::*;
use proptest::sample::select;

use reo_core::analyzer::filter::EnglishFilter;
use reo_core::analyzer::mangler::Mangler;
use reo_core::analyzer::normalizer::TextNormalizer;
use reo_core::{denormalize, extract_features, normalize, ClusterPolicy, FeatureConfig, MangleOptions};

/// Mixed Māori and English letters, macrons in both forms, punctuation.
fn corpus_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("([a-zA-Zāēīōū]|a\u{0304}|[ .,!?\n\t-]){0,40}").unwrap()
}

/// Lowercase Māori words in standard spelling, single spaces.
fn maori_text() -> impl Strategy<Value = String> {
    let onsets = vec!["", "h", "k", "m", "n", "ng", "p", "r", "t", "w", "wh"];
    let nuclei = vec!["a", "e", "i", "o", "u", "ā", "ē", "ī", "ō", "ū"];
    let syllable = (select(onsets), select(nuclei))
        .prop_map(|(onset, nucleus)| format!("{}{}", onset, nucleus));
    let word = proptest::collection::vec(syllable, 1..5).prop_map(|s| s.concat());
    proptest::collection::vec(word, 0..6).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in corpus_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn denormalize_inverts_normalize(text in maori_text()) {
        prop_assert_eq!(denormalize(&normalize(&text)), text);
    }

    #[test]
    fn filter_keeps_only_legal_words(text in corpus_text(), adjacent in any::<bool>()) {
        let policy = if adjacent { ClusterPolicy::Adjacent } else { ClusterPolicy::AdjacentOrTrailing };
        let filter = EnglishFilter::new(policy);
        let normalized = normalize(&text);
        let kept = filter.filter_words(&normalized);
        let source: Vec<&str> = normalized.split_whitespace().collect();
        for word in kept.split_whitespace() {
            prop_assert!(source.contains(&word));
            prop_assert!(!filter.is_non_maori(word));
        }
    }

    #[test]
    fn unigram_total_is_view_length(text in maori_text()) {
        let table = extract_features(&text, &FeatureConfig::default());
        let view = Mangler::default().mangle(
            &TextNormalizer::new().normalize(&text),
            &MangleOptions::unigrams(),
        );
        let total: u64 = table.by_order(1).map(|(_, c)| u64::from(c)).sum();
        prop_assert_eq!(total, view.chars().count() as u64);
    }

    #[test]
    fn counts_are_positive(text in corpus_text()) {
        let table = extract_features(&text, &FeatureConfig::bounded());
        for (_, count) in table.iter() {
            prop_assert!(count >= 1);
        }
    }
}
