//! Text analysis pipeline.
//!
//! Raw text flows through these stages in order:
//! - **Normalizer**: NFC, lowercase, punctuation to spaces, "ng"/"wh" folded
//! - **Filter**: classifies and drops English words
//! - **Mangler**: derives the unigram and n-gram views
//! - **Tokenizer**: splits a view into words
//! - **Features**: counts n-grams into a [`FeatureTable`](crate::FeatureTable)
//!
//! The **Denormalizer** is off the main path and only spells symbols back
//! out for display.

pub mod denormalizer;
pub mod features;
pub mod filter;
pub mod mangler;
pub mod normalizer;
pub mod tokenizer;

pub use denormalizer::denormalize;
pub use features::{extract_features, FeatureExtractor};
pub use filter::{has_english, remove_english, EnglishFilter};
pub use mangler::{demacronise, fold_diphthongs, Mangler};
pub use normalizer::{normalize, partially_normalize, TextNormalizer};
