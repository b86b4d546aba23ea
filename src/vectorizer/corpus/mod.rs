use std::collections::HashMap;

use ahash::RandomState;
use serde::{Deserialize, Serialize};

use crate::vectorizer::term::TermFrequency;

/// keep the document count and per-term document frequency of one batch
///
/// Built fresh for every batch; the numbers are only meaningful relative to
/// the documents that were added.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Corpus {
    /// number of documents added
    pub doc_num: u64,
    /// number of documents each term appears in
    pub term_counts: HashMap<Box<str>, u64, RandomState>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Build a corpus from the term frequencies of a batch
    pub fn from_frequencies(freqs: &[TermFrequency]) -> Self {
        let mut corpus = Self::new();
        for freq in freqs {
            corpus.add_doc(freq);
        }
        corpus
    }

    /// Add a document's distinct terms to the corpus
    /// Each term is counted at most once per document
    pub fn add_doc(&mut self, freq: &TermFrequency) {
        self.doc_num += 1;
        for term in freq.term_set_iter() {
            if let Some(count) = self.term_counts.get_mut(term) {
                *count += 1;
            } else {
                self.term_counts.insert(term.into(), 1);
            }
        }
    }

    /// Get the number of documents in the corpus
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the number of documents containing `term`
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Get the number of distinct terms in the corpus
    pub fn term_num(&self) -> usize {
        self.term_counts.len()
    }
}
