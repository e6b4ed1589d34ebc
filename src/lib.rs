// BoolFlix 后端库
//
// TMDB 的轻量代理：
// - 电影 / 电视剧联合搜索
// - 今日热门
// - 类型名补全

pub mod api;
pub mod config;
pub mod external;
pub mod models;
pub mod services;
