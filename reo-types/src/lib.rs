//! Core types and tables for te reo Māori phonemic feature extraction.
//!
//! This crate holds everything the pipeline shares but does not compute:
//!
//! - **Symbol table**: the closed phonemic alphabet, the diphthong and macron
//!   folding tables, and constant-time symbol classification
//! - **Configuration**: the small `Copy` option structs that select how text
//!   is mangled and which n-grams are counted
//! - **Errors**: parse errors for configuration values supplied as strings
//!
//! Keeping the tables in a leaf crate means the normalizer, the mangler and
//! the denormalizer all read the same data, so folding and unfolding cannot
//! drift apart.

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

/// Left word-boundary marker.
pub const WORD_START: char = '«';

/// Right word-boundary marker.
pub const WORD_END: char = '»';

/// Errors produced when parsing configuration values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A trigram template did not have exactly three positions.
    BadTemplate {
        /// Number of characters in the rejected template.
        length: usize,
    },
    /// An unrecognised consonant-cluster policy name.
    UnknownPolicy {
        /// The rejected input.
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BadTemplate { length } => {
                write!(
                    f,
                    "trigram template must have 3 positions, got {}",
                    length
                )
            }
            ConfigError::UnknownPolicy { name } => {
                write!(
                    f,
                    "unknown cluster policy '{}' (expected 'adjacent' or 'trailing')",
                    name
                )
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Which consonant sequences make a word non-Māori.
///
/// Every policy rejects letters outside the alphabet and two adjacent
/// consonants. They differ on a consonant that ends a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClusterPolicy {
    /// Only adjacent consonant pairs are illegal.
    Adjacent,
    /// Adjacent pairs and a consonant immediately before a word boundary.
    #[default]
    AdjacentOrTrailing,
}

impl ClusterPolicy {
    /// Whether a consonant at the end of a word is rejected.
    #[inline(always)]
    pub const fn rejects_trailing(self) -> bool {
        matches!(self, ClusterPolicy::AdjacentOrTrailing)
    }
}

impl FromStr for ClusterPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adjacent" => Ok(ClusterPolicy::Adjacent),
            "trailing" => Ok(ClusterPolicy::AdjacentOrTrailing),
            other => Err(ConfigError::UnknownPolicy {
                name: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ClusterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterPolicy::Adjacent => f.write_str("adjacent"),
            ClusterPolicy::AdjacentOrTrailing => f.write_str("trailing"),
        }
    }
}

/// Selects which trigrams are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrigramMode {
    /// No trigrams.
    None,
    /// Every trigram.
    #[default]
    All,
    /// Only trigrams with a plain vowel at each `true` position.
    Template([bool; 3]),
}

impl TrigramMode {
    /// Returns true if the trigram `[a, b, c]` should be counted.
    #[inline]
    pub fn accepts(self, gram: [char; 3]) -> bool {
        match self {
            TrigramMode::None => false,
            TrigramMode::All => true,
            TrigramMode::Template(mask) => mask
                .iter()
                .zip(gram)
                .all(|(&vowel, c)| !vowel || symbols::is_plain_vowel(c)),
        }
    }
}

impl FromStr for TrigramMode {
    type Err = ConfigError;

    /// Parses `"none"`, `"all"`, or a template such as `"vcv"`.
    ///
    /// In a template, `v` demands a plain vowel and any other character
    /// leaves the position unconstrained.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(TrigramMode::None),
            "all" => Ok(TrigramMode::All),
            template => {
                let length = template.chars().count();
                if length != 3 {
                    return Err(ConfigError::BadTemplate { length });
                }
                let mut mask = [false; 3];
                for (slot, c) in mask.iter_mut().zip(template.chars()) {
                    *slot = c == 'v';
                }
                Ok(TrigramMode::Template(mask))
            }
        }
    }
}

impl fmt::Display for TrigramMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrigramMode::None => f.write_str("none"),
            TrigramMode::All => f.write_str("all"),
            TrigramMode::Template(mask) => {
                for &vowel in mask {
                    f.write_str(if vowel { "v" } else { "c" })?;
                }
                Ok(())
            }
        }
    }
}

/// Options for turning normalized text into one of the mangled views.
///
/// Note the sense of `macrons`: when it is false, long vowels are expanded
/// to doubled plain vowels, never dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MangleOptions {
    /// Fold two-letter diphthongs into their single symbols.
    pub diphthongs: bool,
    /// Keep macronised vowels as single symbols.
    pub macrons: bool,
    /// Drop words that fail the English filter before anything else.
    pub no_english: bool,
    /// Wrap the trimmed result in one leading and one trailing space.
    pub space_padding: bool,
}

impl Default for MangleOptions {
    fn default() -> Self {
        Self {
            diphthongs: true,
            macrons: true,
            no_english: true,
            space_padding: false,
        }
    }
}

impl MangleOptions {
    /// The view unigrams are counted over: diphthongs folded, macrons kept.
    pub const fn unigrams() -> Self {
        Self {
            diphthongs: true,
            macrons: true,
            no_english: true,
            space_padding: false,
        }
    }

    /// The view bigrams and trigrams are counted over: everything spelled
    /// out in plain letters, padded with spaces.
    pub const fn ngrams() -> Self {
        Self {
            diphthongs: false,
            macrons: false,
            no_english: true,
            space_padding: true,
        }
    }
}

/// Feature extraction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureConfig {
    /// Wrap each word in `«` `»` before taking bigrams and trigrams.
    pub word_boundaries: bool,
    /// Which trigrams to count.
    pub trigram_mode: TrigramMode,
    /// Rule set used by the English filter.
    pub cluster_policy: ClusterPolicy,
}

impl FeatureConfig {
    /// Unigrams and bigrams only.
    pub const fn bigrams() -> Self {
        Self {
            word_boundaries: false,
            trigram_mode: TrigramMode::None,
            cluster_policy: ClusterPolicy::AdjacentOrTrailing,
        }
    }

    /// Every n-gram up to three, with word-boundary markers.
    pub const fn bounded() -> Self {
        Self {
            word_boundaries: true,
            trigram_mode: TrigramMode::All,
            cluster_policy: ClusterPolicy::AdjacentOrTrailing,
        }
    }
}

/// The phonemic alphabet and its folding tables.
///
/// Every symbol is a single `char`. Diphthong symbols are otherwise unused
/// Latin letters, picked only because they are one code point each.
pub mod symbols {
    /// Diphthong spellings and their symbols, for lookups.
    pub const DIPHTHONGS: [(&str, char); 9] = [
        ("ae", 'æ'),
        ("ai", 'ȧ'),
        ("ao", 'å'),
        ("au", 'ä'),
        ("oi", 'ȯ'),
        ("oe", 'œ'),
        ("ou", 'ö'),
        ("ei", 'ė'),
        ("eu", 'ë'),
    ];

    /// [`DIPHTHONGS`] in folding order.
    ///
    /// Folding walks this table, one non-overlapping left-to-right pass per
    /// entry, so the order decides overlapping spellings: `aei` folds `ei`
    /// first (`aė`), `aoe` folds `oe` before `ao` (`aœ`).
    pub const FOLD_ORDER: [(&str, char); 9] = [
        ("eu", 'ë'),
        ("ei", 'ė'),
        ("ae", 'æ'),
        ("oi", 'ȯ'),
        ("ai", 'ȧ'),
        ("au", 'ä'),
        ("oe", 'œ'),
        ("ou", 'ö'),
        ("ao", 'å'),
    ];

    /// Long vowels and their doubled spellings.
    pub const MACRONS: [(char, &str); 5] = [
        ('ā', "aa"),
        ('ē', "ee"),
        ('ī', "ii"),
        ('ō', "oo"),
        ('ū', "uu"),
    ];

    /// Plain vowels.
    pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

    /// Macronised vowels.
    pub const LONG_VOWELS: [char; 5] = ['ā', 'ē', 'ī', 'ō', 'ū'];

    /// Consonants, with `ŋ` for "ng" and `f` for "wh".
    pub const CONSONANTS: [char; 10] = ['f', 'h', 'k', 'm', 'n', 'ŋ', 'p', 'r', 't', 'w'];

    /// Symbol stand-in for the digraph "ng".
    pub const NG: char = 'ŋ';

    /// Symbol stand-in for the digraph "wh".
    pub const WH: char = 'f';

    /// Broad class of a phonemic symbol.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum SymbolClass {
        /// `a e i o u`
        Vowel,
        /// `ā ē ī ō ū`
        LongVowel,
        /// One of the nine diphthong symbols.
        Diphthong,
        /// `f h k m n ŋ p r t w`
        Consonant,
        /// The word separator.
        Space,
    }

    /// Classifies `c`, or returns `None` if it is not part of the alphabet.
    #[inline]
    pub const fn classify(c: char) -> Option<SymbolClass> {
        match c {
            'a' | 'e' | 'i' | 'o' | 'u' => Some(SymbolClass::Vowel),
            'ā' | 'ē' | 'ī' | 'ō' | 'ū' => Some(SymbolClass::LongVowel),
            'æ' | 'ȧ' | 'å' | 'ä' | 'ȯ' | 'œ' | 'ö' | 'ė' | 'ë' => Some(SymbolClass::Diphthong),
            'f' | 'h' | 'k' | 'm' | 'n' | 'ŋ' | 'p' | 'r' | 't' | 'w' => {
                Some(SymbolClass::Consonant)
            }
            ' ' => Some(SymbolClass::Space),
            _ => None,
        }
    }

    /// True for `a e i o u`.
    #[inline(always)]
    pub const fn is_plain_vowel(c: char) -> bool {
        matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
    }

    /// Looks up the two-letter spelling of a diphthong symbol.
    pub fn diphthong_spelling(symbol: char) -> Option<&'static str> {
        DIPHTHONGS
            .iter()
            .find(|&&(_, sym)| sym == symbol)
            .map(|&(s, _)| s)
    }

    /// Looks up the doubled spelling of a macronised vowel.
    pub fn macron_spelling(c: char) -> Option<&'static str> {
        MACRONS.iter().find(|&&(m, _)| m == c).map(|&(_, s)| s)
    }
}
