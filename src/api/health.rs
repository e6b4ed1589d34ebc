use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use super::AppState;

/// 健康检查端点
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let genres = state.media_service.genres().status();

    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "genres": genres,
    }))
}
