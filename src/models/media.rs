use serde::{Deserialize, Serialize};

/// 媒体类型（与 TMDB 的 media_type 字段取值一致）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(MediaType::Movie),
            "tv" => Ok(MediaType::Tv),
            _ => Err(format!("Invalid media type: {}", s)),
        }
    }
}

/// 返回给前端的统一媒体记录（电影和电视剧共用）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaItem {
    pub id: u64,
    pub title: String,
    pub original_title: String,
    pub original_language: String, // ISO 639-1
    pub vote_average: f64,
    pub poster_path: Option<String>,
    pub overview: String,
    pub release_date: Option<String>,
    pub media_type: MediaType,
    pub genres: Vec<String>,
}

impl MediaItem {
    /// 是否有封面图
    pub fn has_poster(&self) -> bool {
        self.poster_path.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// 取第一个非空字符串
pub(crate) fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|s| !s.is_empty())
}
