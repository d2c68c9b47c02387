//! Māori Corpus Feature Tool
//!
//! Command-line front end for the feature pipeline. Loads one or more corpus
//! files (joined with a blank line, as one document), runs them through the
//! analyzer and prints the result.
//!
//! ## Usage
//!
//! ```bash
//! # Sorted n-gram counts, every trigram
//! ./target/release/reo_features features corpus/*.txt
//!
//! # Word-boundary markers, vowel-consonant-vowel trigrams only
//! ./target/release/reo_features features --word-boundaries --trigrams vcv corpus.txt
//!
//! # Let words end in a consonant, print n-grams in standard spelling
//! ./target/release/reo_features features --policy adjacent --denormalise corpus.txt
//!
//! # The n-gram view of the text itself
//! ./target/release/reo_features mangle --pad corpus.txt
//!
//! # Raw text with line breaks tidied
//! ./target/release/reo_features clean corpus.txt
//!
//! # How many trigrams could there be?
//! ./target/release/reo_features estimate 3 --list
//! ```
//!
//! ## Output
//!
//! `features` prints one `ngram, count` line per n-gram, sorted by n-gram:
//!
//! ```text
//! ŋa, 1
//! ŋaa, 1
//! ```
//!
//! Logs go to stderr; `--verbose` adds timing and table statistics.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use reo_core::analyzer::denormalizer::denormalize;
use reo_core::analyzer::normalizer::partially_normalize;
use reo_core::estimate::{generate_n_grams, possible_n_grams, Phone};
use reo_core::io::{load_raw_text, load_text};
use reo_core::{ClusterPolicy, FeatureConfig, FeatureExtractor, MangleOptions, TrigramMode};

/// Phonemic n-gram features for te reo Māori corpora
#[derive(Parser, Debug)]
#[command(name = "reo_features", version, about)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count unigrams, bigrams and trigrams
    Features {
        #[command(flatten)]
        corpus: Corpus,

        /// Wrap each word in « » before taking bigrams and trigrams
        #[arg(short, long)]
        word_boundaries: bool,

        /// "none", "all", or a template such as "vcv"
        #[arg(short, long, default_value = "all")]
        trigrams: TrigramMode,

        /// Print n-grams in standard spelling instead of symbols
        #[arg(short, long)]
        denormalise: bool,
    },
    /// Print the normalized and mangled text
    Mangle {
        #[command(flatten)]
        corpus: Corpus,

        /// Keep diphthongs as letter pairs
        #[arg(long)]
        split_diphthongs: bool,

        /// Expand macronised vowels to doubled vowels
        #[arg(long)]
        split_macrons: bool,

        /// Keep English words
        #[arg(long)]
        keep_english: bool,

        /// Pad with a space on each side
        #[arg(long)]
        pad: bool,
    },
    /// Print the raw text with line breaks tidied
    Clean {
        /// Corpus files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Estimate how many n-grams are possible
    Estimate {
        /// N-gram length
        n: u32,

        /// Count diphthongs as vowels when listing
        #[arg(long)]
        diphthongs: bool,

        /// Count macronised vowels as vowels when listing
        #[arg(long)]
        macrons: bool,

        /// List every generated n-gram
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Args, Debug)]
struct Corpus {
    /// Corpus files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// English filter policy: "adjacent" or "trailing"
    #[arg(short, long, default_value = "trailing")]
    policy: ClusterPolicy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Command::Features {
            corpus,
            word_boundaries,
            trigrams,
            denormalise,
        } => run_features(&corpus, word_boundaries, trigrams, denormalise),
        Command::Mangle {
            corpus,
            split_diphthongs,
            split_macrons,
            keep_english,
            pad,
        } => {
            let options = MangleOptions {
                diphthongs: !split_diphthongs,
                macrons: !split_macrons,
                no_english: !keep_english,
                space_padding: pad,
            };
            let text = load_text(&corpus.files, &options, corpus.policy)
                .context("failed to load corpus")?;
            println!("{}", text);
            Ok(())
        }
        Command::Clean { files } => {
            let raw = load_raw_text(&files).context("failed to load corpus")?;
            println!("{}", partially_normalize(&raw));
            Ok(())
        }
        Command::Estimate {
            n,
            diphthongs,
            macrons,
            list,
        } => {
            println!("{}", fmt_count(possible_n_grams(n, Phone::Vowel)));
            if list {
                for gram in generate_n_grams(n as usize, "", diphthongs, macrons) {
                    println!("{}", gram);
                }
            }
            Ok(())
        }
    }
}

fn run_features(
    corpus: &Corpus,
    word_boundaries: bool,
    trigram_mode: TrigramMode,
    denormalise: bool,
) -> Result<()> {
    let raw = load_raw_text(&corpus.files).context("failed to load corpus")?;
    info!(files = corpus.files.len(), bytes = raw.len(), "corpus loaded");

    let config = FeatureConfig {
        word_boundaries,
        trigram_mode,
        cluster_policy: corpus.policy,
    };

    let start = Instant::now();
    let table = FeatureExtractor::new(config).extract(&raw);
    let elapsed = start.elapsed();

    if table.is_empty() {
        warn!("no features: corpus is empty or was rejected as non-Māori");
    }
    debug!(
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        stats = %table.stats(),
        "extraction finished"
    );

    for (gram, count) in table.sorted() {
        if denormalise {
            println!("{}, {}", denormalize(gram), count);
        } else {
            println!("{}, {}", gram, count);
        }
    }

    Ok(())
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")
}

fn fmt_count(n: u128) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
