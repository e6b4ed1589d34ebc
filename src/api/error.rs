use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::fmt;

use crate::external::CatalogError;

/// 统一的API错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 请求参数错误
    BadRequest(String),
    /// 上游返回了错误状态码，状态码和 body 原样透传
    Upstream { status: u16, body: Value },
    /// 上游没有响应
    UpstreamUnreachable(String),
    /// 内部服务器错误
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Upstream { status, .. } => write!(f, "Upstream error: status {}", status),
            ApiError::UpstreamUnreachable(msg) => write!(f, "Upstream unreachable: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// 从CatalogError转换
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Status { status, body } => ApiError::Upstream { status, body },
            CatalogError::Unreachable(msg) => ApiError::UpstreamUnreachable(msg),
            CatalogError::Request(msg) | CatalogError::Decode(msg) => ApiError::Internal(msg),
        }
    }
}

/// 实现IntoResponse，将错误转换为HTTP响应
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::Upstream { status, body } => {
                tracing::error!("TMDB API responded with status {}: {}", status, body);
                // 非法状态码（或上游返回 2xx 以外的奇怪值）统一按 502 处理
                let status = StatusCode::from_u16(status)
                    .ok()
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                (
                    status,
                    json!({ "error": "Error from the TMDB API", "details": body }),
                )
            }
            ApiError::UpstreamUnreachable(msg) => {
                tracing::error!("No response from TMDB API: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "No response from the TMDB API", "details": msg }),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Generic error while handling the request", "details": msg }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result类型别名
pub type ApiResult<T> = Result<T, ApiError>;
