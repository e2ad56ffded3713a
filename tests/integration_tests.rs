// Integration tests for Lume Similarity

use actix_web::{test as actix_test, web, App};
use lume_similarity::core::SimilarityEngine;
use lume_similarity::models::{MatchTier, SchemeKind};
use lume_similarity::routes::{self, similarity::AppState};
use lume_similarity::{classify, similarity};

const FULL_ADDRESS: &str = "1730 7th St NW Apt 411, Washington, DC 20001";

fn engine(scheme: SchemeKind) -> SimilarityEngine {
    SimilarityEngine::new(scheme, 2, true).expect("valid engine settings")
}

#[test]
fn test_integration_partial_address_four_metric() {
    let result = engine(SchemeKind::FourMetric).classify("Apt 411 Washington DC 20001", FULL_ADDRESS);
    let scores = result.scores.rounded();

    assert_eq!(scores.levenshtein, 61.36);
    assert_eq!(scores.jaro_winkler, 71.07);
    assert_eq!(scores.cosine, Some(44.72));
    assert_eq!(scores.n_gram, Some(54.76));

    // 0.20*61.36 + 0.45*71.07 + 0.15*44.72 + 0.20*54.76 ≈ 61.9
    assert!(result.weighted_score >= 60.0 && result.weighted_score < 75.0,
        "weighted score {}", result.weighted_score);
    assert_eq!(result.tier, MatchTier::PartialMatch);
}

#[test]
fn test_integration_street_address_two_metric() {
    let result = engine(SchemeKind::TwoMetric).classify("1730 7th st nw washington dc 20001", FULL_ADDRESS);

    assert!(result.weighted_score >= 80.0 && result.weighted_score < 95.0,
        "weighted score {}", result.weighted_score);
    assert_eq!(result.tier, MatchTier::StrongPartialMatch);
    assert_eq!(result.scheme, SchemeKind::TwoMetric);
    assert!(result.scores.cosine.is_none());
}

#[test]
fn test_integration_street_address_four_metric() {
    let result = classify("1730 7th st nw washington dc 20001", FULL_ADDRESS);

    assert!(result.weighted_score >= 75.0 && result.weighted_score < 95.0);
    assert_eq!(result.tier, MatchTier::StrongPartialMatch);
}

#[test]
fn test_integration_identical_both_schemes() {
    for scheme in [SchemeKind::FourMetric, SchemeKind::TwoMetric] {
        let result = engine(scheme).classify("hello", "hello");
        assert_eq!(result.tier, MatchTier::FullMatch, "{} scheme", scheme);
        assert_eq!(result.scores.levenshtein, 100.0);
        assert_eq!(result.scores.jaro_winkler, 100.0);
    }

    let scores = similarity("hello", "hello").rounded();
    assert_eq!(scores.cosine, Some(100.0));
    assert_eq!(scores.n_gram, Some(100.0));
}

#[test]
fn test_integration_empty_strings() {
    let scores = similarity("", "");
    assert_eq!(scores.levenshtein, 100.0);
    assert_eq!(scores.cosine, Some(0.0));
    assert_eq!(scores.n_gram, Some(0.0));

    let four = engine(SchemeKind::FourMetric).classify("", "");
    assert_eq!(four.tier, MatchTier::PartialMatch);

    let two = engine(SchemeKind::TwoMetric).classify("", "");
    assert_eq!(two.tier, MatchTier::FullMatch);
}

#[test]
fn test_integration_classify_symmetric() {
    let pairs = [
        ("Apt 411 Washington DC 20001", FULL_ADDRESS),
        ("Washington Apt 411", "Apt 411 Washington"),
        ("kitten", "sitting"),
    ];

    for scheme in [SchemeKind::FourMetric, SchemeKind::TwoMetric] {
        let engine = engine(scheme);
        for (a, b) in pairs {
            assert_eq!(engine.classify(a, b), engine.classify(b, a));
        }
    }
}

#[test]
fn test_integration_word_order_only_affects_char_metrics() {
    let scores = similarity("Washington Apt 411", "Apt 411 Washington");

    assert!((scores.cosine.unwrap() - 100.0).abs() < 1e-9);
    assert!(scores.levenshtein < 50.0);
}

#[test]
fn test_integration_display_output() {
    let text = classify("hello", "hello").to_string();
    assert!(text.starts_with("Match Type: Full Match"));
    assert!(text.contains("nGram=100.00"));
}

fn app_state(scheme: SchemeKind) -> web::Data<AppState> {
    web::Data::new(AppState { engine: engine(scheme) })
}

#[actix_web::test]
async fn test_route_health() {
    let app = actix_test::init_service(
        App::new()
            .app_data(app_state(SchemeKind::FourMetric))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_route_similarity() {
    let app = actix_test::init_service(
        App::new()
            .app_data(app_state(SchemeKind::FourMetric))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/similarity")
        .set_json(serde_json::json!({"a": "Apt 411 Washington DC 20001", "b": FULL_ADDRESS}))
        .to_request();
    let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["scores"]["levenshtein"], 61.36);
    assert_eq!(body["scores"]["jaroWinkler"], 71.07);
    assert_eq!(body["scores"]["cosine"], 44.72);
    assert_eq!(body["scores"]["nGram"], 54.76);
}

#[actix_web::test]
async fn test_route_classify_uses_default_scheme() {
    let app = actix_test::init_service(
        App::new()
            .app_data(app_state(SchemeKind::TwoMetric))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/classify")
        .set_json(serde_json::json!({"a": "1730 7th st nw washington dc 20001", "b": FULL_ADDRESS}))
        .to_request();
    let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["matchType"], "Strong Partial Match");
    assert_eq!(body["scheme"], "two-metric");
    assert!(body["scores"].get("cosine").is_none());
}

#[actix_web::test]
async fn test_route_classify_explicit_scheme() {
    let app = actix_test::init_service(
        App::new()
            .app_data(app_state(SchemeKind::TwoMetric))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/classify")
        .set_json(serde_json::json!({"a": "hello", "b": "HELLO", "scheme": "four-metric"}))
        .to_request();
    let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["matchType"], "Full Match");
    assert_eq!(body["scheme"], "four-metric");
    assert_eq!(body["scores"]["nGram"], 100.0);
}

#[actix_web::test]
async fn test_route_classify_rejects_unknown_scheme() {
    let app = actix_test::init_service(
        App::new()
            .app_data(app_state(SchemeKind::FourMetric))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/classify")
        .set_json(serde_json::json!({"a": "x", "b": "y", "scheme": "three-metric"}))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}
