//! This crate ranks CVs against a job description by lexical similarity.

pub mod config;
pub mod error;
pub mod protocol;
pub mod tokenizer;
pub mod vectorizer;

use std::sync::LazyLock;

/// Similarity Ranker
/// The top-level struct of this crate.
/// It tokenizes a query and a batch of candidates, scores every candidate by
/// cosine similarity of raw term counts, and returns the best `top_k` as
/// `Match` records carrying the candidate's original index.
///
/// Candidates shorter than ten characters after trimming are skipped and
/// never appear in the output. Scores are percentages rounded to two decimal
/// places; an empty term set on either side scores exactly 0.0.
pub use vectorizer::evaluate::scoring::SimilarityRanker;

/// Ranking result structures
/// - `Match`: one scored candidate (original index, score in [0, 100])
/// - `Hits`: ordered list of matches with sorting and truncation helpers
/// - `Ranking`: matches plus the supplied and scored candidate counts
/// - `RankerConfig`: candidate length floor, default top-K, score precision
pub use vectorizer::evaluate::scoring::{Hits, Match, RankerConfig, Ranking};

/// TF-IDF Vectorizer
/// Computes per-document term weights over a batch:
/// `tf = count / len(tokens)`, `idf = ln(N / df)`.
/// A term present in every document of the batch weighs 0.
///
/// `TFIDFVectorizer<E>` is generic over the calculation engine `E`
/// (`DefaultTFIDFEngine` by default).
pub use vectorizer::TFIDFVectorizer;

/// TF IDF Calculation Engine Trait
/// Plug a different tf/idf formula into `TFIDFVectorizer<E>`.
/// `DefaultTFIDFEngine` implements the textbook formulas above.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine, TermWeights};

/// Term Frequency structure
/// Counts term occurrences within one document, in first-occurrence order.
pub use vectorizer::term::TermFrequency;

/// Corpus
/// Document count and per-term document frequency of one batch.
pub use vectorizer::corpus::Corpus;

/// Tokenizer
/// Lowercases, splits on anything but word characters, `+` and `#`, and
/// drops stop words and terms shorter than three characters.
pub use tokenizer::{StopWords, Tokenizer, TokenizerConfig};

pub use config::MatcherConfig;
pub use error::{MatchError, Result};

static DEFAULT_RANKER: LazyLock<SimilarityRanker> = LazyLock::new(SimilarityRanker::default);
static DEFAULT_VECTORIZER: LazyLock<TFIDFVectorizer> = LazyLock::new(TFIDFVectorizer::default);

/// Tokenize text with the default policy.
pub fn tokenize(text: &str) -> Vec<String> {
    DEFAULT_RANKER.tokenizer().tokenize(text)
}

/// Score one candidate against a query with the default policy, in [0, 100].
pub fn score(query: &str, candidate: &str) -> f64 {
    DEFAULT_RANKER.score(query, candidate)
}

/// Rank candidates against a query with the default policy.
///
/// `top_k` defaults to 10 when `None`.
///
/// # Errors
/// `MatchError::MissingInput` when the query is empty or there are no candidates.
pub fn rank<S: AsRef<str>>(query: &str, candidates: &[S], top_k: Option<usize>) -> Result<Vec<Match>> {
    DEFAULT_RANKER.rank(query, candidates, top_k)
}

/// Compute TF-IDF weights for a batch with the default policy.
/// One weight vector per document, in input order.
pub fn weigh_batch<S: AsRef<str>>(documents: &[S]) -> Vec<TermWeights> {
    DEFAULT_VECTORIZER.weigh_batch(documents)
}
