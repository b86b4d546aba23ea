//! Configuration defaults and the runtime configuration file.
//!
//! The constants below are the fixed matching policy. A [`MatcherConfig`]
//! loaded from JSON can override them per run; any field left out of the
//! file keeps its default.
//!
//! ```json
//! {
//!   "tokenizer": { "min_term_chars": 3, "extra_stop_words": ["responsibilities"] },
//!   "ranker": { "min_candidate_chars": 10, "default_top_k": 10, "score_decimals": 2 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::tokenizer::{Tokenizer, TokenizerConfig};
use crate::vectorizer::evaluate::scoring::{RankerConfig, SimilarityRanker};
use crate::vectorizer::TFIDFVectorizer;

/// Minimum term length in characters; shorter terms are dropped by the tokenizer.
pub const MIN_TERM_CHARS: usize = 3;

/// Minimum candidate length in characters after trimming whitespace.
///
/// Shorter candidates are skipped by the ranker and never appear in its output.
pub const MIN_CANDIDATE_CHARS: usize = 10;

/// Number of matches returned when the caller does not ask for a specific top-K.
pub const DEFAULT_TOP_K: usize = 10;

/// Decimal places kept in a similarity score.
pub const SCORE_DECIMALS: u32 = 2;

/// Largest accepted `score_decimals`; beyond this f64 rounding is meaningless.
pub const MAX_SCORE_DECIMALS: u32 = 12;

/// Complete runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherConfig {
    pub tokenizer: TokenizerConfig,
    pub ranker: RankerConfig,
}

impl MatcherConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: MatcherConfig = serde_json::from_str(json)
            .map_err(|e| MatchError::config(format!("invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json).map_err(|e| match e {
            MatchError::Config(msg) => MatchError::config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.tokenizer.min_term_chars == 0 {
            return Err(MatchError::config("tokenizer.min_term_chars must be at least 1"));
        }
        if self.ranker.score_decimals > MAX_SCORE_DECIMALS {
            return Err(MatchError::config(format!(
                "ranker.score_decimals must be at most {MAX_SCORE_DECIMALS}"
            )));
        }
        Ok(())
    }

    pub fn build_tokenizer(&self) -> Tokenizer {
        Tokenizer::new(&self.tokenizer)
    }

    pub fn build_ranker(&self) -> SimilarityRanker {
        SimilarityRanker::new(self.build_tokenizer(), self.ranker.clone())
    }

    pub fn build_vectorizer(&self) -> TFIDFVectorizer {
        TFIDFVectorizer::new(self.build_tokenizer())
    }
}
