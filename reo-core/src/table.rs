//! Feature table: n-gram occurrence counts for one document.

use core::fmt;

use rustc_hash::FxHashMap;

/// Mapping from n-gram to occurrence count.
///
/// Every stored count is at least 1; absent n-grams have count 0.
/// Unigrams, bigrams and trigrams share one table and are told apart by
/// their length in symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureTable {
    counts: FxHashMap<String, u32>,
}

/// A snapshot of table statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureStats {
    /// Distinct one-symbol n-grams.
    pub unigrams: usize,
    /// Distinct two-symbol n-grams.
    pub bigrams: usize,
    /// Distinct three-symbol n-grams.
    pub trigrams: usize,
    /// Sum of all counts.
    pub total: u64,
}

impl FeatureTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `gram`.
    #[inline]
    pub fn bump(&mut self, gram: &str) {
        match self.counts.get_mut(gram) {
            Some(count) => *count = count.saturating_add(1),
            None => {
                self.counts.insert(gram.to_owned(), 1);
            }
        }
    }

    /// Occurrence count of `gram`, 0 if never seen.
    #[inline]
    pub fn get(&self, gram: &str) -> u32 {
        self.counts.get(gram).copied().unwrap_or(0)
    }

    /// Number of distinct n-grams.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if nothing was counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Iterates over `(n-gram, count)` in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// N-grams of exactly `n` symbols (boundary markers count as symbols).
    pub fn by_order(&self, n: usize) -> impl Iterator<Item = (&str, u32)> {
        self.iter().filter(move |(gram, _)| gram.chars().count() == n)
    }

    /// All entries sorted by n-gram, for stable output.
    pub fn sorted(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Returns table statistics.
    pub fn stats(&self) -> FeatureStats {
        let mut stats = FeatureStats::default();
        for (gram, count) in self.iter() {
            match gram.chars().count() {
                1 => stats.unigrams += 1,
                2 => stats.bigrams += 1,
                3 => stats.trigrams += 1,
                _ => {}
            }
            stats.total += u64::from(count);
        }
        stats
    }
}

impl fmt::Display for FeatureStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unigrams={} bigrams={} trigrams={} total={}",
            self.unigrams, self.bigrams, self.trigrams, self.total
        )
    }
}
