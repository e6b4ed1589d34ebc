use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{CatalogError, MediaCatalog};
use crate::config::TmdbConfig;
use crate::models::media::first_non_empty;
use crate::models::{MediaItem, MediaType};

/// TMDB API客户端
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
    language: String,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Request(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
        })
    }

    /// 发送 GET 请求并解析 JSON，所有请求都带上 api_key 和固定的 language
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.get(&url).query(&[("language", self.language.as_str())]);
        if !self.api_key.is_empty() {
            request = request.query(&[("api_key", self.api_key.as_str())]);
        }

        let response = request.query(params).send().await.map_err(|e| {
            tracing::warn!("TMDB request to {} failed: {}", path, e);
            CatalogError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("Failed to read TMDB error body from {}: {}", path, e);
                    status.canonical_reason().unwrap_or_default().to_string()
                }
            };
            tracing::warn!("TMDB API {} returned error status: {}", path, status);
            return Err(CatalogError::from_status(status.as_u16(), &body));
        }

        // 读取 body 的超时、断连仍按 reqwest 的分类处理，只有解析失败才算 Decode
        let bytes = response.bytes().await.map_err(|e| {
            tracing::warn!("Failed to read TMDB response from {}: {}", path, e);
            CatalogError::from(e)
        })?;

        serde_json::from_slice::<T>(&bytes)
            .map_err(|e| CatalogError::Decode(format!("{}: {}", path, e)))
    }
}

#[async_trait]
impl MediaCatalog for TmdbClient {
    async fn search_movies(&self, query: &str) -> Result<Vec<TmdbMovie>, CatalogError> {
        tracing::debug!(query = %query, "Searching TMDB movies");
        let page: TmdbPage<TmdbMovie> = self.get_json("/search/movie", &[("query", query)]).await?;
        Ok(page.results)
    }

    async fn search_movies_raw(&self, query: &str) -> Result<Vec<Value>, CatalogError> {
        tracing::debug!(query = %query, "Searching TMDB movies (raw records)");
        let page: TmdbPage<Value> = self.get_json("/search/movie", &[("query", query)]).await?;
        Ok(page.results)
    }

    async fn search_tv_shows(&self, query: &str) -> Result<Vec<TmdbTvShow>, CatalogError> {
        tracing::debug!(query = %query, "Searching TMDB TV shows");
        let page: TmdbPage<TmdbTvShow> = self.get_json("/search/tv", &[("query", query)]).await?;
        Ok(page.results)
    }

    async fn trending(&self) -> Result<Vec<TmdbTrendingItem>, CatalogError> {
        let page: TmdbPage<TmdbTrendingItem> = self.get_json("/trending/all/day", &[]).await?;
        Ok(page.results)
    }

    async fn genres(&self, media_type: MediaType) -> Result<Vec<TmdbGenre>, CatalogError> {
        let path = format!("/genre/{}/list", media_type);
        let list: TmdbGenreList = self.get_json(&path, &[]).await?;
        Ok(list.genres)
    }
}

/// TMDB分页响应（只使用第一页）
#[derive(Debug, Deserialize)]
pub struct TmdbPage<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// 缺失或为 null 的字段都取默认值
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// TMDB电影搜索结果
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TmdbMovie {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_language: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_ids: Option<Vec<u32>>,
}

/// TMDB电视剧搜索结果
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TmdbTvShow {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_language: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_ids: Option<Vec<u32>>,
}

/// TMDB热门条目，电影和电视剧混在一起
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TmdbTrendingItem {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media_type: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_language: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_ids: Option<Vec<u32>>,
}

impl TmdbTrendingItem {
    /// 条目类型，person 等其他类型返回 None
    pub fn kind(&self) -> Option<MediaType> {
        self.media_type.parse().ok()
    }
}

/// TMDB类型列表响应
#[derive(Debug, Deserialize)]
pub struct TmdbGenreList {
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
}

/// TMDB类型
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbGenre {
    pub id: u32,
    pub name: String,
}

/// 转换器：将TMDB数据转换为 MediaItem
pub struct TmdbConverter;

impl TmdbConverter {
    /// 将TMDB电影转换为MediaItem
    pub fn movie_to_media_item(movie: TmdbMovie, genres: Vec<String>) -> MediaItem {
        MediaItem {
            id: movie.id,
            title: movie.title,
            original_title: movie.original_title,
            original_language: movie.original_language,
            vote_average: movie.vote_average,
            poster_path: movie.poster_path,
            overview: movie.overview.unwrap_or_default(),
            release_date: non_empty(movie.release_date),
            media_type: MediaType::Movie,
            genres,
        }
    }

    /// 将TMDB电视剧转换为MediaItem（name → title, first_air_date → release_date）
    pub fn tv_show_to_media_item(show: TmdbTvShow, genres: Vec<String>) -> MediaItem {
        MediaItem {
            id: show.id,
            title: show.name,
            original_title: show.original_name,
            original_language: show.original_language,
            vote_average: show.vote_average,
            poster_path: show.poster_path,
            overview: show.overview.unwrap_or_default(),
            release_date: non_empty(show.first_air_date),
            media_type: MediaType::Tv,
            genres,
        }
    }

    /// 将热门条目转换为MediaItem，标题和日期取第一个非空字段
    pub fn trending_to_media_item(
        item: TmdbTrendingItem,
        media_type: MediaType,
        genres: Vec<String>,
    ) -> MediaItem {
        let title = first_non_empty(&[item.title.as_deref(), item.name.as_deref()]);
        let original_title = first_non_empty(&[
            item.original_title.as_deref(),
            item.original_name.as_deref(),
        ]);
        let release_date = first_non_empty(&[
            item.release_date.as_deref(),
            item.first_air_date.as_deref(),
        ]);

        MediaItem {
            id: item.id,
            title: title.unwrap_or_default().to_string(),
            original_title: original_title.unwrap_or_default().to_string(),
            release_date: release_date.map(str::to_string),
            original_language: item.original_language,
            vote_average: item.vote_average,
            poster_path: item.poster_path,
            overview: item.overview.unwrap_or_default(),
            media_type,
            genres,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
