// 搜索与热门服务
//
// 把上游返回的电影 / 电视剧记录统一成 MediaItem 并补上类型名

use serde_json::Value;
use std::sync::Arc;

use super::GenreDirectory;
use crate::api::error::{ApiError, ApiResult};
use crate::external::{MediaCatalog, TmdbConverter};
use crate::models::{MediaItem, MediaType};

/// 热门列表最多返回的条目数
pub const TRENDING_LIMIT: usize = 8;

#[derive(Clone)]
pub struct MediaService {
    catalog: Arc<dyn MediaCatalog>,
    genres: Arc<GenreDirectory>,
}

impl MediaService {
    pub fn new(catalog: Arc<dyn MediaCatalog>, genres: Arc<GenreDirectory>) -> Self {
        Self { catalog, genres }
    }

    pub fn genres(&self) -> &GenreDirectory {
        &self.genres
    }

    /// 同时搜索电影和电视剧，电影在前
    ///
    /// 任一上游调用失败则整体失败，不返回部分结果
    pub async fn search(&self, query: Option<&str>) -> ApiResult<Vec<MediaItem>> {
        let query = require_query(query)?;

        let (movies, tv_shows) = tokio::try_join!(
            self.catalog.search_movies(query),
            self.catalog.search_tv_shows(query)
        )?;

        tracing::debug!(
            "Search '{}' returned {} movies and {} TV shows",
            query,
            movies.len(),
            tv_shows.len()
        );

        let mut results = Vec::with_capacity(movies.len() + tv_shows.len());
        for movie in movies {
            let genres = self.genres.resolve(MediaType::Movie, movie.genre_ids.as_deref());
            results.push(TmdbConverter::movie_to_media_item(movie, genres));
        }
        for show in tv_shows {
            let genres = self.genres.resolve(MediaType::Tv, show.genre_ids.as_deref());
            results.push(TmdbConverter::tv_show_to_media_item(show, genres));
        }

        Ok(results)
    }

    /// 今日热门，去掉没有封面的条目，最多 8 条
    pub async fn trending(&self) -> ApiResult<Vec<MediaItem>> {
        let entries = self.catalog.trending().await?;

        let items = entries
            .into_iter()
            .filter(|entry| entry.poster_path.as_deref().is_some_and(|p| !p.is_empty()))
            .filter_map(|entry| match entry.kind() {
                Some(media_type) => Some((media_type, entry)),
                None => {
                    tracing::debug!("Skipping trending entry {} of type '{}'", entry.id, entry.media_type);
                    None
                }
            })
            .take(TRENDING_LIMIT)
            .map(|(media_type, entry)| {
                let genres = self.genres.resolve(media_type, entry.genre_ids.as_deref());
                TmdbConverter::trending_to_media_item(entry, media_type, genres)
            })
            .collect();

        Ok(items)
    }

    /// 旧版仅电影搜索，原样返回上游记录
    pub async fn search_movies_raw(&self, query: Option<&str>) -> ApiResult<Vec<Value>> {
        let query = require_query(query)?;
        Ok(self.catalog.search_movies_raw(query).await?)
    }
}

/// 只有空白的查询视为缺失，非空时原样转发给上游
fn require_query(query: Option<&str>) -> ApiResult<&str> {
    match query {
        Some(q) if !q.trim().is_empty() => Ok(q),
        _ => Err(ApiError::BadRequest(
            "Missing \"query\" parameter for the search.".to_string(),
        )),
    }
}
