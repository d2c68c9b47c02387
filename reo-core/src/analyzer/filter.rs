//! English word filter.
//!
//! Te reo Māori has a small closed alphabet, no consonant clusters, and
//! (under the default policy) no word ending in a consonant. Anything that
//! breaks those rules is treated as a borrowed or English word.
//!
//! The filter expects normalized input: "ng" and "wh" already folded to
//! `ŋ` and `f`, otherwise "whare" would look like a `w`+`h` cluster.

use reo_types::symbols::{classify, SymbolClass};
use reo_types::ClusterPolicy;

/// Classifies words as Māori or not, and strips the ones that are not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishFilter {
    policy: ClusterPolicy,
}

impl EnglishFilter {
    /// Creates a filter with the given cluster policy.
    pub const fn new(policy: ClusterPolicy) -> Self {
        Self { policy }
    }

    /// The cluster policy in use.
    #[inline(always)]
    pub const fn policy(&self) -> ClusterPolicy {
        self.policy
    }

    /// Returns true if `text` holds anything a Māori word cannot.
    ///
    /// Works on a single word or on a whole space-separated document. Flags:
    /// - a character outside `a e i o u ā ē ī ō ū f h k m n ŋ p r t w` and space
    /// - two consonants in a row
    /// - with [`ClusterPolicy::AdjacentOrTrailing`], a consonant followed by
    ///   a space or the end of the text
    pub fn is_non_maori(&self, text: &str) -> bool {
        let trailing = self.policy.rejects_trailing();
        let mut prev_consonant = false;

        for c in text.chars() {
            let class = match classify(c) {
                // Diphthong symbols only appear after mangling, never in
                // normalized text, so meeting one here means foreign input.
                Some(SymbolClass::Diphthong) | None => return true,
                Some(class) => class,
            };

            match class {
                SymbolClass::Consonant if prev_consonant => return true,
                SymbolClass::Space if prev_consonant && trailing => return true,
                _ => {}
            }

            prev_consonant = class == SymbolClass::Consonant;
        }

        prev_consonant && trailing
    }

    /// Removes every word for which [`is_non_maori`](Self::is_non_maori)
    /// holds, rejoining survivors with single spaces.
    ///
    /// Splits on any whitespace, so the result is also trimmed.
    pub fn filter_words(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for word in text.split_whitespace() {
            if self.is_non_maori(word) {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
        out
    }
}

/// [`EnglishFilter::is_non_maori`] with the default policy.
#[inline]
pub fn has_english(text: &str) -> bool {
    EnglishFilter::default().is_non_maori(text)
}

/// [`EnglishFilter::filter_words`] with the default policy.
#[inline]
pub fn remove_english(text: &str) -> String {
    EnglishFilter::default().filter_words(text)
}
