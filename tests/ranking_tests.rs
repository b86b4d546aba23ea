//! End-to-end checks of the public ranking and weighting API.

use cv_rank::{
    rank, score, tokenize, weigh_batch, MatchError, MatcherConfig, SimilarityRanker,
};

const JOB: &str = "Senior Python Backend Engineer with REST API experience";

#[test]
fn test_worked_example_through_crate_api() {
    let candidates = [
        "Python developer with Flask and REST APIs",
        "x",
        "Graphic designer with Adobe Photoshop skills",
    ];
    let matches = rank(JOB, &candidates, None).unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].index, 0);
    assert_eq!(matches[1].index, 2);
    assert!(matches[0].score > matches[1].score);
    assert!(matches.iter().all(|m| (0.0..=100.0).contains(&m.score)));
}

#[test]
fn test_realistic_cv_batch() {
    let job = "We are hiring a Rust engineer to build async network services with Tokio. \
               Experience with PostgreSQL, Docker and Kubernetes is a plus.";
    let cvs = vec![
        "Backend engineer: Rust, Tokio, async networking, PostgreSQL. Shipped services on Kubernetes.".to_string(),
        "Marketing lead with a decade of brand strategy and campaign management.".to_string(),
        "Java engineer, Spring Boot, PostgreSQL, Docker.".to_string(),
        "ok".to_string(),
        "Rust hobbyist".to_string(),
    ];
    let ranker = SimilarityRanker::default();
    let report = ranker.rank_report(job, &cvs, Some(3)).unwrap();

    assert_eq!(report.total, 5);
    assert_eq!(report.matched, 4);
    assert_eq!(report.matches.len(), 3);
    assert_eq!(report.matches.list[0].index, 0);
    assert!(report.matches.iter().all(|m| m.index != 3));
    let scores: Vec<f64> = report.matches.iter().map(|m| m.score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_scores_have_two_decimals() {
    let s = score(JOB, "Python developer with Flask and REST APIs");
    assert_eq!((s * 100.0).round() / 100.0, s);
    assert_eq!(s, 33.81);
}

#[test]
fn test_tokenize_is_deterministic() {
    let text = "C++ / Python / Rust developer; the C# guy";
    assert_eq!(tokenize(text), tokenize(text));
    assert_eq!(tokenize(text), vec!["c++", "python", "rust", "developer", "guy"]);
    assert!(tokenize("").is_empty());
}

#[test]
fn test_weigh_batch_matches_definition() {
    let docs = ["rust tokio rust", "python django", "python flask"];
    let weights = weigh_batch(&docs);
    assert_eq!(weights.len(), 3);

    let ln3 = 3f64.ln();
    assert!((weights[0]["rust"] - (2.0 / 3.0) * ln3).abs() < 1e-12);
    assert!((weights[0]["tokio"] - (1.0 / 3.0) * ln3).abs() < 1e-12);
    assert!((weights[1]["python"] - 0.5 * 1.5f64.ln()).abs() < 1e-12);
    assert!((weights[2]["flask"] - 0.5 * ln3).abs() < 1e-12);
}

#[test]
fn test_weigh_batch_is_independent_of_ranking() {
    let docs = [JOB, JOB];
    for w in weigh_batch(&docs) {
        assert!(w.values().all(|&v| v == 0.0));
    }
    assert_eq!(score(JOB, JOB), 100.0);
}

#[test]
fn test_missing_input_propagates() {
    let err = rank::<&str>("", &["Python developer with Flask"], None).unwrap_err();
    assert!(matches!(err, MatchError::MissingInput(_)));
    let err = rank::<&str>(JOB, &[], None).unwrap_err();
    assert!(matches!(err, MatchError::MissingInput(_)));
}

#[test]
fn test_configured_ranker_respects_candidate_floor() {
    let config = MatcherConfig::from_json_str(r#"{"ranker": {"min_candidate_chars": 3}}"#).unwrap();
    let ranker = config.build_ranker();
    let matches = ranker.rank("rust developer", &["rust", "x"], None).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].index, 0);
    assert!(matches[0].score > 0.0);
}
