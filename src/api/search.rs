use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use super::error::ApiResult;
use super::AppState;
use crate::models::MediaItem;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// 电影 + 电视剧联合搜索
pub async fn search_media(
    Query(params): Query<SearchParams>,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<MediaItem>>> {
    let results = state.media_service.search(params.query.as_deref()).await?;
    Ok(Json(results))
}

/// 仅电影搜索（已废弃），返回未经转换的 TMDB 记录
pub async fn search_movies_legacy(
    Query(params): Query<SearchParams>,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Value>>> {
    tracing::warn!("Deprecated endpoint /api/movies called, use /api instead");
    let results = state
        .media_service
        .search_movies_raw(params.query.as_deref())
        .await?;
    Ok(Json(results))
}
