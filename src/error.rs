use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmartSizeError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    /// 非2xxレスポンス（表示文言はWeb版と共通）
    #[error("Request failed: {0}")]
    RequestFailed(u16),

    #[error("通信エラー: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] smart_size_common::Error),
}

pub type Result<T> = std::result::Result<T, SmartSizeError>;
