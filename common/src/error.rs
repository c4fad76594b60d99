//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 通信失敗とHTTPステータス異常は画面上では区別しない。
/// 区別が必要なのはコンソールログだけ。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed payload: {0}")]
    Malformed(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_network() {
        let error = Error::Network("TypeError: Failed to fetch".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Network error"));
        assert!(display.contains("Failed to fetch"));
    }

    #[test]
    fn test_error_display_status() {
        let error = Error::Status(503);
        assert_eq!(format!("{}", error), "HTTP status 503");
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Malformed("match_percentage out of range".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Malformed"));
        assert!(debug.contains("out of range"));
    }
}
