//! JSON request/response adapter around the ranking core.
//!
//! Decodes a request, checks the required fields, runs the core, and encodes
//! the result. Field names follow the backend that calls the matcher; in
//! particular every encoded match carries its candidate index twice, as
//! `cv_index` and as `job_index`.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::vectorizer::evaluate::scoring::{Match, SimilarityRanker};
use crate::vectorizer::tfidf::TermWeights;
use crate::vectorizer::TFIDFVectorizer;

/// Rank request: one job description against many CVs
///
/// An absent or `null` `job_description` or `cv_texts` is reported as
/// missing input, the same as an empty one. An absent or `null` `top_k`
/// falls back to the caller's default (10 unless configured); it never
/// means "return every match".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub job_description: Option<String>,
    /// `null` entries are treated as empty text
    #[serde(default)]
    pub cv_texts: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub top_k: Option<usize>,
}

/// One encoded match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    /// same value as `cv_index`, kept for backend compatibility
    pub job_index: usize,
    pub cv_index: usize,
    pub similarity_score: f64,
}

impl From<&Match> for MatchEntry {
    fn from(m: &Match) -> Self {
        MatchEntry {
            job_index: m.index,
            cv_index: m.index,
            similarity_score: m.score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankResponse {
    pub success: bool,
    pub matches: Vec<MatchEntry>,
    pub total_cvs: usize,
    pub matched_cvs: usize,
}

/// Weigh request: TF-IDF weights over a batch of documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeighRequest {
    /// `null` or absent means an empty batch
    #[serde(default)]
    pub documents: Option<Vec<Option<String>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeighResponse {
    pub success: bool,
    pub weights: Vec<TermWeights>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl From<&MatchError> for ErrorResponse {
    fn from(err: &MatchError) -> Self {
        ErrorResponse {
            success: false,
            error: err.to_string(),
        }
    }
}

impl RankRequest {
    /// Decode a request from JSON text
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Check the fields the core needs
    pub fn validate(&self) -> Result<()> {
        if self.query().is_empty() {
            return Err(MatchError::missing_input("job_description"));
        }
        if self.cv_texts.as_ref().map_or(true, Vec::is_empty) {
            return Err(MatchError::missing_input("cv_texts"));
        }
        Ok(())
    }

    /// Job description, empty when absent
    pub fn query(&self) -> &str {
        self.job_description.as_deref().unwrap_or("")
    }

    /// CV texts with `null` entries replaced by empty text
    pub fn candidates(&self) -> Vec<&str> {
        self.cv_texts
            .iter()
            .flatten()
            .map(|cv| cv.as_deref().unwrap_or(""))
            .collect()
    }
}

impl WeighRequest {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn documents(&self) -> Vec<&str> {
        self.documents
            .iter()
            .flatten()
            .map(|doc| doc.as_deref().unwrap_or(""))
            .collect()
    }
}

/// Run a decoded rank request
///
/// `top_k` in the request wins over `fallback_top_k`, which wins over the
/// ranker's configured default.
pub fn rank(
    ranker: &SimilarityRanker,
    request: &RankRequest,
    fallback_top_k: Option<usize>,
) -> Result<RankResponse> {
    request.validate()?;
    let candidates = request.candidates();
    tracing::info!(
        query_chars = request.query().chars().count(),
        candidates = candidates.len(),
        "Matching CVs to job"
    );

    let ranking = ranker.rank_report(
        request.query(),
        &candidates,
        request.top_k.or(fallback_top_k),
    )?;

    if !ranking.matches.is_empty() {
        let top: Vec<String> = ranking
            .matches
            .iter()
            .take(3)
            .map(|m| format!("{:.1}%", m.score))
            .collect();
        tracing::info!(top = %top.join(", "), "Top matches");
    }
    tracing::debug!(
        total = ranking.total,
        matched = ranking.matched,
        returned = ranking.matches.len(),
        "Ranking complete"
    );

    Ok(RankResponse {
        success: true,
        matches: ranking.matches.iter().map(MatchEntry::from).collect(),
        total_cvs: ranking.total,
        matched_cvs: ranking.matched,
    })
}

/// Decode and run a rank request given as JSON text
pub fn rank_json(
    ranker: &SimilarityRanker,
    input: &str,
    fallback_top_k: Option<usize>,
) -> Result<RankResponse> {
    let request = RankRequest::from_json(input)?;
    rank(ranker, &request, fallback_top_k)
}

/// Run a decoded weigh request
pub fn weigh(vectorizer: &TFIDFVectorizer, request: &WeighRequest) -> Result<WeighResponse> {
    let documents = request.documents();
    tracing::info!(documents = documents.len(), "Weighing batch");
    let weights = vectorizer.weigh_batch(&documents);
    Ok(WeighResponse {
        success: true,
        weights,
    })
}

/// Decode and run a weigh request given as JSON text
pub fn weigh_json(vectorizer: &TFIDFVectorizer, input: &str) -> Result<WeighResponse> {
    let request = WeighRequest::from_json(input)?;
    weigh(vectorizer, &request)
}

/// Serialize a response, optionally pretty-printed
pub fn encode<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(|e| MatchError::Io(std::io::Error::other(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn ranker() -> SimilarityRanker {
        SimilarityRanker::default()
    }

    #[test]
    fn test_rank_json_worked_example() {
        let input = json!({
            "job_description": "Senior Python Backend Engineer with REST API experience",
            "cv_texts": [
                "Python developer with Flask and REST APIs",
                "x",
                "Graphic designer with Adobe Photoshop skills"
            ],
            "top_k": 5
        })
        .to_string();
        let response = rank_json(&ranker(), &input, None).unwrap();
        assert!(response.success);
        assert_eq!(response.total_cvs, 3);
        assert_eq!(response.matched_cvs, 2);
        assert_eq!(response.matches.len(), 2);
        assert_eq!(response.matches[0].cv_index, 0);
        assert_eq!(response.matches[1].cv_index, 2);
        for m in &response.matches {
            assert_eq!(m.job_index, m.cv_index);
        }
    }

    #[test]
    fn test_encoded_shape() {
        let input = r#"{"job_description": "python backend engineer", "cv_texts": ["python backend engineer"]}"#;
        let response = rank_json(&ranker(), input, None).unwrap();
        let value: Value = serde_json::from_str(&encode(&response, false).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "matches": [{"job_index": 0, "cv_index": 0, "similarity_score": 100.0}],
                "total_cvs": 1,
                "matched_cvs": 1
            })
        );
    }

    #[test]
    fn test_null_cv_is_skipped() {
        let input = r#"{"job_description": "python", "cv_texts": [null, "python developer"]}"#;
        let response = rank_json(&ranker(), input, None).unwrap();
        assert_eq!(response.total_cvs, 2);
        assert_eq!(response.matched_cvs, 1);
        assert_eq!(response.matches[0].cv_index, 1);
    }

    #[test]
    fn test_missing_fields_are_missing_input() {
        let err = rank_json(&ranker(), r#"{"cv_texts": ["python developer"]}"#, None).unwrap_err();
        assert_eq!(err.to_string(), "Missing job_description");
        let err = rank_json(&ranker(), r#"{"job_description": "python"}"#, None).unwrap_err();
        assert_eq!(err.to_string(), "Missing cv_texts");
        let err = rank_json(&ranker(), r#"{"job_description": "python", "cv_texts": []}"#, None)
            .unwrap_err();
        assert!(matches!(err, MatchError::MissingInput(_)));

        let input = r#"{"job_description": null, "cv_texts": ["python developer"]}"#;
        let err = rank_json(&ranker(), input, None).unwrap_err();
        assert_eq!(err.to_string(), "Missing job_description");
        let input = r#"{"job_description": "python", "cv_texts": null}"#;
        let err = rank_json(&ranker(), input, None).unwrap_err();
        assert_eq!(err.to_string(), "Missing cv_texts");
    }

    #[test]
    fn test_bad_json_is_malformed_request() {
        for input in [
            "not json",
            r#"{"job_description": 42, "cv_texts": ["x"]}"#,
            r#"{"job_description": "python", "cv_texts": ["python developer"], "top_k": -1}"#,
            "\"python developer\"",
        ] {
            let err = rank_json(&ranker(), input, None).unwrap_err();
            assert!(matches!(err, MatchError::MalformedRequest(_)), "{input}");
        }
    }

    #[test]
    fn test_top_k_precedence() {
        let cvs = json!(["python developer one", "python developer two", "python developer three"]);
        let with_k = json!({"job_description": "python", "cv_texts": cvs.clone(), "top_k": 1}).to_string();
        let without_k = json!({"job_description": "python", "cv_texts": cvs}).to_string();
        assert_eq!(rank_json(&ranker(), &with_k, Some(2)).unwrap().matches.len(), 1);
        assert_eq!(rank_json(&ranker(), &without_k, Some(2)).unwrap().matches.len(), 2);
        assert_eq!(rank_json(&ranker(), &without_k, None).unwrap().matches.len(), 3);
    }

    #[test]
    fn test_null_top_k_uses_default() {
        let cvs: Vec<String> = (0..15).map(|i| format!("python developer number {i}")).collect();
        let input = json!({"job_description": "python", "cv_texts": cvs, "top_k": null}).to_string();
        let response = rank_json(&ranker(), &input, None).unwrap();
        assert_eq!(response.matched_cvs, 15);
        assert_eq!(response.matches.len(), 10);
    }

    #[test]
    fn test_weigh_json() {
        let vectorizer = TFIDFVectorizer::default();
        let input = r#"{"documents": ["python developer", "python designer", null]}"#;
        let response = weigh_json(&vectorizer, input).unwrap();
        assert!(response.success);
        assert_eq!(response.weights.len(), 3);
        assert!(response.weights[2].is_empty());
        let expected = 0.5 * 1.5f64.ln();
        assert!((response.weights[0]["python"] - expected).abs() < 1e-12);
        assert!(weigh_json(&vectorizer, r#"{"documents": null}"#).unwrap().weights.is_empty());
        let value: Value = serde_json::from_str(&encode(&response, true).unwrap()).unwrap();
        assert!(value["weights"][0]["developer"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_error_response() {
        let err = MatchError::missing_input("cv_texts");
        let value = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(value, json!({"success": false, "error": "Missing cv_texts"}));
    }
}
