//! Phonemic n-gram features for te reo Māori text.
//!
//! This crate turns raw text into weighted unigram, bigram and trigram
//! counts over a canonical phonemic alphabet:
//! - Macronised vowels and diphthongs as single units for unigrams
//! - "ng" and "wh" folded to `ŋ` and `f`
//! - English words filtered out, English documents rejected outright
//!
//! Every stage is a pure function of its input. Nothing is shared between
//! calls, so documents can be processed on as many threads as the caller
//! likes.
//!
//! ```
//! use reo_core::{extract_features, FeatureConfig};
//!
//! let table = extract_features("Ko wai au?", &FeatureConfig::default());
//! assert_eq!(table.get("k"), 1);
//! assert_eq!(table.get("ȧ"), 1); // "ai"
//! assert_eq!(table.get("wa"), 1);
//! ```

/// Normalization, filtering, mangling and n-gram extraction.
pub mod analyzer;

/// Rough counts and listings of possible n-grams.
///
/// Diagnostic only; the extraction pipeline never calls into it.
pub mod estimate;

/// Corpus loading.
pub mod io;

/// The n-gram count table.
pub mod table;

pub use analyzer::{
    denormalize, extract_features, normalize, EnglishFilter, FeatureExtractor, Mangler,
    TextNormalizer,
};
pub use reo_types::symbols;
pub use reo_types::{ClusterPolicy, ConfigError, FeatureConfig, MangleOptions, TrigramMode};
pub use table::{FeatureStats, FeatureTable};
