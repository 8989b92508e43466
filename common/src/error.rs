//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.starts_with("Invalid JSON response"));
    }

    #[test]
    fn test_error_display_invalid_response() {
        let error = Error::InvalidResponse("confidence out of range: 1.5".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid response: confidence out of range: 1.5"
        );
    }

    #[test]
    fn test_error_display_config() {
        let error = "socks".parse::<crate::types::Category>().unwrap_err();
        assert!(error
            .to_string()
            .starts_with("Config error: unknown category: socks"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
