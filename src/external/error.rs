// 媒体目录（TMDB）调用错误类型定义

use serde_json::Value;
use thiserror::Error;

/// 上游媒体目录调用的统一错误类型
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// 上游返回了非 2xx 状态码，body 原样保留
    #[error("TMDB API error: status {status}")]
    Status { status: u16, body: Value },

    /// 请求已发出但没有收到响应（连接失败、超时等）
    #[error("no response from TMDB API: {0}")]
    Unreachable(String),

    /// 请求无法构建
    #[error("failed to build TMDB request: {0}")]
    Request(String),

    /// 响应体无法解析
    #[error("failed to decode TMDB response: {0}")]
    Decode(String),
}

impl CatalogError {
    /// 根据上游错误响应体构建错误，非 JSON 的 body 按字符串保留
    pub fn from_status(status: u16, body: &str) -> Self {
        let body = serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()));
        CatalogError::Status { status, body }
    }
}

// 发送阶段的 reqwest::Error：除构建错误外都视为上游不可达
impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            CatalogError::Request(err.to_string())
        } else if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Unreachable(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_keeps_json_body() {
        let err = CatalogError::from_status(401, r#"{"status_code":7,"status_message":"Invalid API key"}"#);
        match err {
            CatalogError::Status { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body["status_code"], 7);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_status_keeps_plain_body() {
        let err = CatalogError::from_status(502, "Bad Gateway");
        match err {
            CatalogError::Status { body, .. } => assert_eq!(body, Value::String("Bad Gateway".to_string())),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::Unreachable("connection refused".to_string());
        assert_eq!(err.to_string(), "no response from TMDB API: connection refused");
    }
}
