use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_TOP_K, MIN_CANDIDATE_CHARS, SCORE_DECIMALS};
use crate::error::{MatchError, Result};
use crate::tokenizer::Tokenizer;
use crate::vectorizer::compute::compare::{Compare, DefaultCompare};
use crate::vectorizer::term::TermFrequency;

/// One scored candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// position of the candidate in the caller's input sequence
    pub index: usize,
    /// similarity in [0, 100]
    pub score: f64,
}

/// Structure to store ranking results
#[derive(Clone, Default, PartialEq)]
pub struct Hits {
    pub list: Vec<Match>,
}

impl Hits {
    /// Create a new Hits instance
    pub fn new(list: Vec<Match>) -> Self {
        Hits { list }
    }

    /// Sort results by descending score
    /// Stable: equal scores keep their input order
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        self.list.sort_by(|a, b| b.score.total_cmp(&a.score));
        self
    }

    /// Keep only the first `k` results
    pub fn top_k(&mut self, k: usize) -> &mut Self {
        self.list.truncate(k);
        self
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.list.iter()
    }

    pub fn into_vec(self) -> Vec<Match> {
        self.list
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for m in &self.list {
                writeln!(f, "    #{}: {:.2}", m.index, m.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl Display for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, m) in self.list.iter().enumerate() {
            writeln!(f, "{:>3}. #{} {:.2}%", rank + 1, m.index, m.score)?;
        }
        Ok(())
    }
}

/// Ranked matches plus the candidate counts the caller reports alongside them
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// top-K matches, best first
    pub matches: Hits,
    /// number of candidates supplied
    pub total: usize,
    /// number of candidates that passed the length filter and were scored
    pub matched: usize,
}

/// Ranker policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    /// candidates shorter than this after trimming are skipped
    pub min_candidate_chars: usize,
    /// top-K used when the caller passes none
    pub default_top_k: usize,
    /// decimal places kept in scores
    pub score_decimals: u32,
}

impl Default for RankerConfig {
    fn default() -> Self {
        RankerConfig {
            min_candidate_chars: MIN_CANDIDATE_CHARS,
            default_top_k: DEFAULT_TOP_K,
            score_decimals: SCORE_DECIMALS,
        }
    }
}

/// Scores candidates against a query by cosine similarity of raw term counts
///
/// Stateless between calls: every call tokenizes its own inputs and drops
/// the vectors when it returns.
///
/// # Examples
/// ```
/// use cv_rank::SimilarityRanker;
///
/// let ranker = SimilarityRanker::default();
/// let matches = ranker
///     .rank(
///         "Senior Python Backend Engineer with REST API experience",
///         &["Python developer with Flask and REST APIs", "x", "Graphic designer with Adobe Photoshop skills"],
///         None,
///     )
///     .unwrap();
/// assert_eq!(matches[0].index, 0);
/// assert!(matches.iter().all(|m| m.index != 1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimilarityRanker {
    tokenizer: Tokenizer,
    config: RankerConfig,
}

impl SimilarityRanker {
    pub fn new(tokenizer: Tokenizer, config: RankerConfig) -> Self {
        SimilarityRanker { tokenizer, config }
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Cosine similarity of two count vectors, in [0, 1]
    /// 0.0 when either side has no terms
    #[inline]
    pub fn similarity(query: &TermFrequency, candidate: &TermFrequency) -> f64 {
        if query.is_empty() || candidate.is_empty() {
            return 0.0;
        }
        <DefaultCompare as Compare<u64>>::cosine_similarity(query, candidate)
    }

    /// Score one candidate against a query, in [0, 100]
    /// No length filtering is applied.
    pub fn score(&self, query: &str, candidate: &str) -> f64 {
        let query = self.tokenizer.term_frequency(query);
        self.score_freq(&query, candidate)
    }

    fn score_freq(&self, query: &TermFrequency, candidate: &str) -> f64 {
        let candidate = self.tokenizer.term_frequency(candidate);
        let cos = Self::similarity(query, &candidate);
        round_to(cos * 100.0, self.config.score_decimals).clamp(0.0, 100.0)
    }

    /// Whether a candidate is long enough to be scored
    #[inline]
    pub fn is_rankable(&self, candidate: &str) -> bool {
        !candidate.is_empty() && candidate.trim().chars().count() >= self.config.min_candidate_chars
    }

    /// Rank candidates against a query
    ///
    /// # Arguments
    /// * `query` - the job description
    /// * `candidates` - CV texts, referenced by position
    /// * `top_k` - maximum number of matches, the configured default when `None`
    ///
    /// # Returns
    /// * `Vec<Match>` - at most `top_k` matches, best first
    ///
    /// # Errors
    /// `MissingInput` when the query is empty or there are no candidates
    pub fn rank<S>(&self, query: &str, candidates: &[S], top_k: Option<usize>) -> Result<Vec<Match>>
    where
        S: AsRef<str>,
    {
        Ok(self.rank_report(query, candidates, top_k)?.matches.into_vec())
    }

    /// Rank candidates and report how many were supplied and scored
    pub fn rank_report<S>(
        &self,
        query: &str,
        candidates: &[S],
        top_k: Option<usize>,
    ) -> Result<Ranking>
    where
        S: AsRef<str>,
    {
        if query.is_empty() {
            return Err(MatchError::missing_input("job_description"));
        }
        if candidates.is_empty() {
            return Err(MatchError::missing_input("cv_texts"));
        }

        let query_freq = self.tokenizer.term_frequency(query);
        let scored: Vec<Match> = candidates
            .iter()
            .enumerate()
            .filter(|(_, text)| self.is_rankable(text.as_ref()))
            .map(|(index, text)| Match {
                index,
                score: self.score_freq(&query_freq, text.as_ref()),
            })
            .collect();
        let matched = scored.len();

        let mut hits = Hits::new(scored);
        hits.sort_by_score_desc()
            .top_k(top_k.unwrap_or(self.config.default_top_k));

        Ok(Ranking {
            matches: hits,
            total: candidates.len(),
            matched,
        })
    }
}

/// Round half away from zero to `decimals` places
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
