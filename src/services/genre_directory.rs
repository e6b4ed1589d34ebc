// 类型目录
//
// 启动时从 TMDB 拉取电影和电视剧两套类型列表，之后只读。
// 加载失败不影响服务，只是类型名解析不到。

use serde::Serialize;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::external::{MediaCatalog, TmdbGenre};
use crate::models::MediaType;

pub type GenreId = u32;

/// 两套类型映射表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreTables {
    pub movie: HashMap<GenreId, String>,
    pub tv: HashMap<GenreId, String>,
}

impl GenreTables {
    fn table(&self, media_type: MediaType) -> &HashMap<GenreId, String> {
        match media_type {
            MediaType::Movie => &self.movie,
            MediaType::Tv => &self.tv,
        }
    }

    fn table_mut(&mut self, media_type: MediaType) -> &mut HashMap<GenreId, String> {
        match media_type {
            MediaType::Movie => &mut self.movie,
            MediaType::Tv => &mut self.tv,
        }
    }
}

/// 类型目录的加载状态
#[derive(Debug, Clone)]
pub enum GenreState {
    Unloaded,
    Loaded(GenreTables),
    /// 至少一套列表加载失败，保留上一次可用的数据
    LoadFailed {
        last_known_good: GenreTables,
        reason: String,
    },
}

impl GenreState {
    fn tables(&self) -> Option<&GenreTables> {
        match self {
            GenreState::Unloaded => None,
            GenreState::Loaded(tables) => Some(tables),
            GenreState::LoadFailed { last_known_good, .. } => Some(last_known_good),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            GenreState::Unloaded => "unloaded",
            GenreState::Loaded(_) => "loaded",
            GenreState::LoadFailed { .. } => "load_failed",
        }
    }
}

/// 健康检查用的状态快照
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenreStatus {
    pub state: &'static str,
    pub movie_genres: usize,
    pub tv_genres: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

#[derive(Debug)]
pub struct GenreDirectory {
    state: RwLock<GenreState>,
}

impl Default for GenreDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl GenreDirectory {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(GenreState::Unloaded),
        }
    }

    /// 使用现成的映射表创建已加载的目录
    pub fn with_tables(tables: GenreTables) -> Self {
        Self {
            state: RwLock::new(GenreState::Loaded(tables)),
        }
    }

    /// 从上游加载两套类型列表
    ///
    /// 成功的那一套整体替换，失败的保留原数据并记录警告，不会返回错误
    pub async fn load(&self, catalog: &dyn MediaCatalog) {
        let (movie, tv) = tokio::join!(
            catalog.genres(MediaType::Movie),
            catalog.genres(MediaType::Tv)
        );

        let mut tables = self.current_tables();
        let mut failures = Vec::new();

        for (media_type, result) in [(MediaType::Movie, movie), (MediaType::Tv, tv)] {
            match result {
                Ok(genres) => {
                    *tables.table_mut(media_type) = into_table(genres);
                }
                Err(e) => {
                    tracing::warn!("Failed to load {} genres: {}", media_type, e);
                    failures.push(format!("{}: {}", media_type, e));
                }
            }
        }

        let new_state = if failures.is_empty() {
            tracing::info!(
                "Loaded {} movie genres and {} TV genres",
                tables.movie.len(),
                tables.tv.len()
            );
            GenreState::Loaded(tables)
        } else {
            GenreState::LoadFailed {
                last_known_good: tables,
                reason: failures.join("; "),
            }
        };

        *self.state.write().unwrap_or_else(PoisonError::into_inner) = new_state;
    }

    /// 把类型 id 解析为名称，未知 id 直接丢弃，保持输入顺序
    pub fn resolve(&self, media_type: MediaType, genre_ids: Option<&[GenreId]>) -> Vec<String> {
        let ids = match genre_ids {
            Some(ids) if !ids.is_empty() => ids,
            _ => return Vec::new(),
        };

        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let Some(tables) = state.tables() else {
            return Vec::new();
        };

        let table = tables.table(media_type);
        ids.iter().filter_map(|id| table.get(id).cloned()).collect()
    }

    pub fn status(&self) -> GenreStatus {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let (movie_genres, tv_genres) = state
            .tables()
            .map(|t| (t.movie.len(), t.tv.len()))
            .unwrap_or((0, 0));
        let last_error = match &*state {
            GenreState::LoadFailed { reason, .. } => Some(reason.clone()),
            _ => None,
        };

        GenreStatus {
            state: state.label(),
            movie_genres,
            tv_genres,
            last_error,
        }
    }

    fn current_tables(&self) -> GenreTables {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .tables()
            .cloned()
            .unwrap_or_default()
    }
}

fn into_table(genres: Vec<TmdbGenre>) -> HashMap<GenreId, String> {
    genres.into_iter().map(|g| (g.id, g.name)).collect()
}
