use axum::{extract::State, Json};

use super::error::ApiResult;
use super::AppState;
use crate::models::MediaItem;

pub async fn get_trending(State(state): State<AppState>) -> ApiResult<Json<Vec<MediaItem>>> {
    let items = state.media_service.trending().await?;
    Ok(Json(items))
}
