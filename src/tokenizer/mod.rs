//! Text normalization into significant terms.
//!
//! Text is lowercased, split into maximal runs of letters, digits and `_` plus
//! `+` and `#` (so "c++" and "c#" survive as single runs), and then filtered:
//! stop words and terms shorter than the configured floor are dropped.

pub mod stop_words;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::MIN_TERM_CHARS;
use crate::vectorizer::term::TermFrequency;

pub use stop_words::StopWords;

/// Unicode letters and numbers, underscore, `+` and `#`.
/// Combining marks and connector punctuation other than `_` split terms.
pub const TERM_PATTERN: &str = r"[\p{L}\p{N}_+#]+";

static TERM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TERM_PATTERN).expect("term pattern is a valid regex"));

/// Tokenizer policy.
///
/// The default reproduces the fixed policy: the built-in English stop words
/// and a minimum term length of three characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Terms with fewer characters than this are dropped
    pub min_term_chars: usize,
    /// Words appended to the built-in stop word list
    pub extra_stop_words: Vec<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            min_term_chars: MIN_TERM_CHARS,
            extra_stop_words: Vec::new(),
        }
    }
}

/// Splits raw text into an ordered sequence of lowercase terms.
///
/// # Examples
/// ```
/// use cv_rank::tokenizer::Tokenizer;
///
/// let tokenizer = Tokenizer::default();
/// let terms = tokenizer.tokenize("The C++ and C# developer, with Rust!");
/// assert_eq!(terms, vec!["c++", "developer", "rust"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: StopWords,
    min_term_chars: usize,
}

impl Tokenizer {
    /// Create a tokenizer from a config.
    pub fn new(config: &TokenizerConfig) -> Self {
        let stop_words = if config.extra_stop_words.is_empty() {
            StopWords::english()
        } else {
            StopWords::english().with_extra(&config.extra_stop_words)
        };
        Tokenizer {
            stop_words,
            min_term_chars: config.min_term_chars,
        }
    }

    /// Tokenize text into terms, keeping duplicates and order.
    ///
    /// # Arguments
    /// * `text` - raw document text
    ///
    /// # Returns
    /// * `Vec<String>` - significant terms, empty if none qualify
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        TERM_REGEX
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|term| self.is_significant(term))
            .map(str::to_owned)
            .collect()
    }

    /// Tokenize text and count the terms.
    pub fn term_frequency(&self, text: &str) -> TermFrequency {
        let mut freq = TermFrequency::new();
        freq.add_terms(&self.tokenize(text));
        freq
    }

    #[inline]
    fn is_significant(&self, term: &str) -> bool {
        term.chars().count() >= self.min_term_chars && !self.stop_words.contains(term)
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn min_term_chars(&self) -> usize {
        self.min_term_chars
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&TokenizerConfig::default())
    }
}
