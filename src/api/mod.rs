pub mod error;
pub mod health;
pub mod search;
pub mod trending;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::services::MediaService;

#[derive(Clone)]
pub struct AppState {
    pub media_service: MediaService,
}

/// 构建全部路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "BoolFlix Backend API v1.0" }))
        .route("/api", get(search::search_media))
        .route("/api/trending", get(trending::get_trending))
        // 旧版接口，前端迁移完成后删除
        .route("/api/movies", get(search::search_movies_legacy))
        .route("/api/health", get(health::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
