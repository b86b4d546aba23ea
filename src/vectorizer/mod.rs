pub mod compute;
pub mod corpus;
pub mod evaluate;
pub mod term;
pub mod tfidf;

use std::marker::PhantomData;

use crate::tokenizer::Tokenizer;
use crate::vectorizer::{
    corpus::Corpus,
    term::TermFrequency,
    tfidf::{DefaultTFIDFEngine, TFIDFEngine, TermWeights},
};

/// Batch TF-IDF weighting
///
/// Every call to [`weigh_batch`](Self::weigh_batch) builds its own corpus
/// from the documents it receives, so a weight is only meaningful next to
/// the other weights of the same batch.
///
/// `TFIDFVectorizer<E>` is generic over the tf/idf formulas:
/// - `E`: TF-IDF calculation engine (defaults to `DefaultTFIDFEngine`)
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    tokenizer: Tokenizer,
    _marker: PhantomData<E>,
}

impl<E> TFIDFVectorizer<E>
where
    E: TFIDFEngine,
{
    /// Create a new TFIDFVectorizer instance
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            _marker: PhantomData,
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Weigh every document of a batch
    ///
    /// # Arguments
    /// * `documents` - raw document texts
    ///
    /// # Returns
    /// * `Vec<TermWeights>` - one weight vector per document, in input order
    pub fn weigh_batch<S>(&self, documents: &[S]) -> Vec<TermWeights>
    where
        S: AsRef<str>,
    {
        let freqs: Vec<TermFrequency> = documents
            .iter()
            .map(|doc| self.tokenizer.term_frequency(doc.as_ref()))
            .collect();
        Self::weigh_frequencies(&freqs)
    }

    /// Weigh already tokenized documents
    pub fn weigh_frequencies(freqs: &[TermFrequency]) -> Vec<TermWeights> {
        let corpus = Corpus::from_frequencies(freqs);
        freqs
            .iter()
            .map(|freq| E::tfidf_vec(freq, &corpus))
            .collect()
    }
}

impl Default for TFIDFVectorizer {
    fn default() -> Self {
        Self::new(Tokenizer::default())
    }
}
