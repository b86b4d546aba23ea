//! Stop word set.
//!
//! The built-in list holds the English function words that carry no signal
//! when comparing a CV with a job description. It is exposed as an immutable
//! [`StopWords`] value; extending it yields a new set and never touches the
//! shared default.
//!
//! # Examples
//!
//! ```
//! use cv_rank::tokenizer::stop_words::StopWords;
//!
//! let stop = StopWords::english();
//! assert!(stop.contains("the"));
//! assert!(!stop.contains("python"));
//!
//! let extended = stop.with_extra(["responsibilities"]);
//! assert!(extended.contains("responsibilities"));
//! assert!(!StopWords::english().contains("responsibilities"));
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use ahash::RandomState;

/// Default English stop words.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "should", "could", "can", "may", "might", "must", "this",
    "that", "these", "those", "i", "you", "he", "she", "it", "we", "they", "am", "your", "my",
    "our", "their",
];

static ENGLISH: LazyLock<StopWords> = LazyLock::new(|| StopWords::from_words(ENGLISH_STOP_WORDS));

/// An immutable set of lowercase stop words.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<Box<str>, RandomState>,
}

impl StopWords {
    /// The built-in English list.
    pub fn english() -> Self {
        ENGLISH.clone()
    }

    /// An empty set (no term is dropped as a stop word).
    pub fn empty() -> Self {
        StopWords {
            words: HashSet::with_hasher(RandomState::new()),
        }
    }

    /// Build a set from arbitrary words.
    /// Words are lowercased so lookups against tokenizer output match.
    pub fn from_words<I, T>(words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut set = HashSet::with_hasher(RandomState::new());
        for word in words {
            set.insert(word.as_ref().to_lowercase().into_boxed_str());
        }
        StopWords { words: set }
    }

    /// Return a new set holding these words plus `extra`.
    pub fn with_extra<I, T>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut words = self.words.clone();
        for word in extra {
            words.insert(word.as_ref().to_lowercase().into_boxed_str());
        }
        StopWords { words }
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}
