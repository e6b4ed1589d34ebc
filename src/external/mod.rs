pub mod error;
pub mod tmdb;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;
use serde_json::Value;

pub use error::CatalogError;
pub use tmdb::{TmdbClient, TmdbConverter, TmdbGenre, TmdbMovie, TmdbTrendingItem, TmdbTvShow};

use crate::models::MediaType;

/// 上游媒体目录接口
///
/// 生产环境由 [`TmdbClient`] 实现，测试中可以替换为内存实现
#[async_trait]
pub trait MediaCatalog: Send + Sync {
    /// 按标题搜索电影（第一页）
    async fn search_movies(&self, query: &str) -> Result<Vec<TmdbMovie>, CatalogError>;

    /// 按标题搜索电影，记录保持上游 JSON 原样
    async fn search_movies_raw(&self, query: &str) -> Result<Vec<Value>, CatalogError>;

    /// 按标题搜索电视剧（第一页）
    async fn search_tv_shows(&self, query: &str) -> Result<Vec<TmdbTvShow>, CatalogError>;

    /// 今日热门（电影和电视剧混合）
    async fn trending(&self) -> Result<Vec<TmdbTrendingItem>, CatalogError>;

    /// 指定类型的完整类型列表
    async fn genres(&self, media_type: MediaType) -> Result<Vec<TmdbGenre>, CatalogError>;
}
