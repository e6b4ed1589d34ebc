// 单元测试用的内存媒体目录

use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{CatalogError, MediaCatalog, TmdbGenre, TmdbMovie, TmdbTrendingItem, TmdbTvShow};
use crate::models::MediaType;

pub(crate) struct FakeCatalog {
    pub movies: Result<Vec<TmdbMovie>, CatalogError>,
    pub raw_movies: Result<Vec<Value>, CatalogError>,
    pub tv_shows: Result<Vec<TmdbTvShow>, CatalogError>,
    pub trending: Result<Vec<TmdbTrendingItem>, CatalogError>,
    pub movie_genres: Result<Vec<TmdbGenre>, CatalogError>,
    pub tv_genres: Result<Vec<TmdbGenre>, CatalogError>,
    pub calls: AtomicUsize,
    pub queries: Mutex<Vec<String>>,
}

impl Default for FakeCatalog {
    fn default() -> Self {
        Self {
            movies: Ok(Vec::new()),
            raw_movies: Ok(Vec::new()),
            tv_shows: Ok(Vec::new()),
            trending: Ok(Vec::new()),
            movie_genres: Ok(Vec::new()),
            tv_genres: Ok(Vec::new()),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }
}

impl FakeCatalog {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 搜索类调用收到的查询串，按调用顺序
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    fn record_query(&self, query: &str) {
        self.queries.lock().unwrap().push(query.to_string());
    }

    fn record<T: Clone>(&self, reply: &Result<T, CatalogError>) -> Result<T, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        reply.clone()
    }
}

#[async_trait]
impl MediaCatalog for FakeCatalog {
    async fn search_movies(&self, query: &str) -> Result<Vec<TmdbMovie>, CatalogError> {
        self.record_query(query);
        self.record(&self.movies)
    }

    async fn search_movies_raw(&self, query: &str) -> Result<Vec<Value>, CatalogError> {
        self.record_query(query);
        self.record(&self.raw_movies)
    }

    async fn search_tv_shows(&self, query: &str) -> Result<Vec<TmdbTvShow>, CatalogError> {
        self.record_query(query);
        self.record(&self.tv_shows)
    }

    async fn trending(&self) -> Result<Vec<TmdbTrendingItem>, CatalogError> {
        self.record(&self.trending)
    }

    async fn genres(&self, media_type: MediaType) -> Result<Vec<TmdbGenre>, CatalogError> {
        match media_type {
            MediaType::Movie => self.record(&self.movie_genres),
            MediaType::Tv => self.record(&self.tv_genres),
        }
    }
}

pub(crate) fn genre(id: u32, name: &str) -> TmdbGenre {
    TmdbGenre {
        id,
        name: name.to_string(),
    }
}

pub(crate) fn movie(id: u64, title: &str, genre_ids: &[u32]) -> TmdbMovie {
    TmdbMovie {
        id,
        title: title.to_string(),
        original_title: title.to_string(),
        original_language: "en".to_string(),
        poster_path: Some(format!("/movie-{}.jpg", id)),
        genre_ids: Some(genre_ids.to_vec()),
        ..Default::default()
    }
}

pub(crate) fn tv_show(id: u64, name: &str, genre_ids: &[u32]) -> TmdbTvShow {
    TmdbTvShow {
        id,
        name: name.to_string(),
        original_name: name.to_string(),
        original_language: "en".to_string(),
        poster_path: Some(format!("/tv-{}.jpg", id)),
        genre_ids: Some(genre_ids.to_vec()),
        ..Default::default()
    }
}

pub(crate) fn trending_entry(id: u64, media_type: &str, poster_path: Option<&str>) -> TmdbTrendingItem {
    let label = format!("{}-{}", media_type, id);
    let (title, name) = if media_type == "movie" {
        (Some(label), None)
    } else {
        (None, Some(label))
    };

    TmdbTrendingItem {
        id,
        media_type: media_type.to_string(),
        title,
        name,
        poster_path: poster_path.map(str::to_string),
        ..Default::default()
    }
}
