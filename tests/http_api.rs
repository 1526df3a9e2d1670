use ad_analyzer::analyzer::{SUMMARY_UNAVAILABLE, UNSUPPORTED_GOAL_MESSAGE};
use ad_analyzer::image::NO_SIGNALS_ADVICE;
use ad_analyzer::llm::{AdReviewer, AiReview};
use ad_analyzer::server::build_router;
use ad_analyzer::{AdAnalyzer, LlmError};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

struct EchoReviewer;

#[async_trait]
impl AdReviewer for EchoReviewer {
    async fn analyze(&self, _prompt: &str) -> Result<AiReview, LlmError> {
        Ok(AiReview {
            summary: "Looks good.".to_string(),
            rewrite: "Sign up now.".to_string(),
        })
    }
}

fn offline_router() -> axum::Router {
    build_router(AdAnalyzer::offline(), "./missing-web-root")
}

async fn post_json(app: axum::Router, uri: &str, body: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn health_reports_running() {
    let response = offline_router()
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "Ad Analyzer backend is running");
}

#[tokio::test]
async fn analyze_returns_full_result() {
    let reviewer: Arc<dyn AdReviewer> = Arc::new(EchoReviewer);
    let app = build_router(
        AdAnalyzer::new(Some(reviewer), Duration::from_secs(2)),
        "./missing-web-root",
    );
    let (status, body) = post_json(
        app,
        "/analyzeAd",
        r#"{
            "adText": "Click now for a limited time secret offer!",
            "goal": "clicks",
            "imgSignals": {"hasOfferText": true}
        }"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["goalAnalyzed"], "clicks");
    assert_eq!(json["score"], 65);
    assert_eq!(json["breakdown"]["CTA"], 50);
    assert_eq!(json["breakdown"]["Urgency"], 100);
    assert_eq!(json["breakdown"]["Curiosity"], 50);
    assert_eq!(json["aiSummary"], "Looks good.");
    assert_eq!(json["rewrite"], "Sign up now.");
    assert!(json["message"].is_null());
    assert!(json["imageAdvice"]
        .as_str()
        .unwrap()
        .starts_with("Great for clicks"));
    assert_eq!(json["suggestions"].as_array().unwrap().len(), 1);

    let cta = body.find("\"CTA\"").unwrap();
    let urgency = body.find("\"Urgency\"").unwrap();
    let curiosity = body.find("\"Curiosity\"").unwrap();
    assert!(cta < urgency && urgency < curiosity);
}

#[tokio::test]
async fn alias_route_matches() {
    let (status, body) = post_json(
        offline_router(),
        "/api/analyze",
        r#"{"adText": "Buy our product.", "goal": "conversions"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["score"], 0);
    assert_eq!(json["aiSummary"], SUMMARY_UNAVAILABLE);
    assert_eq!(json["imageAdvice"], NO_SIGNALS_ADVICE);
    assert_eq!(json["suggestions"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn missing_fields_are_bad_requests() {
    for body in [
        r#"{"adText": "", "goal": "clicks"}"#,
        r#"{"adText": "Tap now"}"#,
        r#"{"goal": "awareness"}"#,
        r#"{}"#,
    ] {
        let (status, response) = post_json(offline_router(), "/analyzeAd", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", body);
        let json: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(json["error"], "Please provide adText and goal");
    }
}

#[tokio::test]
async fn undecodable_body_is_bad_request() {
    let (status, response) = post_json(offline_router(), "/analyzeAd", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_str(&response).unwrap();
    assert!(json["error"].as_str().unwrap().starts_with("invalid request body"));
}

#[tokio::test]
async fn unsupported_goal_is_informational() {
    let (status, body) = post_json(
        offline_router(),
        "/analyzeAd",
        r#"{"adText": "Join the club", "goal": "loyalty"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["goalAnalyzed"], "loyalty");
    assert_eq!(json["message"], UNSUPPORTED_GOAL_MESSAGE);
    assert!(json["score"].is_null());
    assert!(json["breakdown"].is_null());
    assert!(json["aiSummary"].is_null());
    assert!(json["rewrite"].is_null());
    assert!(json["imageAdvice"].is_null());
    assert_eq!(json["suggestions"], serde_json::json!([]));
}

#[tokio::test]
async fn capitalized_goal_is_echoed_as_unsupported() {
    let (status, body) = post_json(
        offline_router(),
        "/analyzeAd",
        r#"{"adText": "Tap now", "goal": "Clicks"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["goalAnalyzed"], "Clicks");
    assert_eq!(json["message"], UNSUPPORTED_GOAL_MESSAGE);
    assert!(json["score"].is_null());
}

#[tokio::test]
async fn numeric_signal_flags_are_truthy() {
    let (status, body) = post_json(
        offline_router(),
        "/analyzeAd",
        r#"{"adText": "Tap now", "goal": "clicks", "imgSignals": {"hasOfferText": 1}}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["imageAdvice"]
        .as_str()
        .unwrap()
        .starts_with("Great for clicks"));
}

#[tokio::test]
async fn malformed_signals_do_not_fail() {
    let (status, body) = post_json(
        offline_router(),
        "/analyzeAd",
        r#"{"adText": "We are bold.", "goal": "awareness", "imgSignals": "yes"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["imageAdvice"], NO_SIGNALS_ADVICE);
}
