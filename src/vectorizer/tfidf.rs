use ahash::RandomState;
use indexmap::IndexMap;

use crate::vectorizer::{corpus::Corpus, term::TermFrequency};

/// Term -> weight for one document, in first-occurrence order
pub type TermWeights = IndexMap<String, f64, RandomState>;

/// TF-IDF calculation engine
///
/// Supplies the tf and idf formulas used by
/// [`TFIDFVectorizer`](crate::vectorizer::TFIDFVectorizer).
pub trait TFIDFEngine {
    /// term frequency of `term` within one document
    fn tf(freq: &TermFrequency, term: &str) -> f64;

    /// inverse document frequency of `term` within the batch
    fn idf(corpus: &Corpus, term: &str) -> f64;

    /// weight vector of one document
    /// Only terms present in the document appear as keys
    fn tfidf_vec(freq: &TermFrequency, corpus: &Corpus) -> TermWeights {
        let mut weights = TermWeights::with_capacity_and_hasher(freq.term_num(), RandomState::new());
        for term in freq.term_set_iter() {
            weights.insert(term.to_string(), Self::tf(freq, term) * Self::idf(corpus, term));
        }
        weights
    }
}

/// Default TF-IDF engine
///
/// - `tf = count(term) / len(tokens)`, 0 for an empty document
/// - `idf = ln(N / df(term))`, 0 when the term is unknown to the corpus
///
/// A term present in every document gets idf 0 and therefore weight 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    #[inline]
    fn tf(freq: &TermFrequency, term: &str) -> f64 {
        freq.probability(term)
    }

    #[inline]
    fn idf(corpus: &Corpus, term: &str) -> f64 {
        let doc_freq = corpus.get_term_count(term);
        if doc_freq == 0 {
            return 0.0;
        }
        (corpus.get_doc_num() as f64 / doc_freq as f64).ln()
    }
}
