use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::analyzer::AdAnalyzer;
use crate::api::{ApiAnalyzeRequest, ApiError, ApiStatus};
use crate::config::ServerConfig;
use crate::error::ValidationError;
use crate::AnalysisResult;

#[derive(Clone)]
struct AppState {
    analyzer: Arc<AdAnalyzer>,
}

pub fn build_router(analyzer: AdAnalyzer, web_root: &str) -> Router {
    let state = AppState {
        analyzer: Arc::new(analyzer),
    };

    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    Router::new()
        .route("/api/health", get(health))
        .route("/analyzeAd", post(analyze_handler))
        .route("/api/analyze", post(analyze_handler))
        .fallback_service(static_service)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(config: &ServerConfig, analyzer: AdAnalyzer) -> Result<(), String> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    let app = build_router(analyzer, &config.web_root);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| format!("failed to bind server: {}", err))?;

    tracing::info!(%addr, web_root = %config.web_root, "ad analyzer listening");
    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> Json<ApiStatus> {
    Json(ApiStatus {
        message: "Ad Analyzer backend is running".to_string(),
    })
}

async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<ApiAnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(payload) =
        payload.map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))?;
    let request = payload.into_request()?;
    let result = state.analyzer.analyze(&request).await;
    Ok(Json(result))
}
