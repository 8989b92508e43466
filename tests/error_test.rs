//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use smart_size::config::Config;
use smart_size::error::SmartSizeError;
use smart_size::photo;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない画像を選択した場合
#[test]
fn test_load_nonexistent_image() {
    let result = photo::load_image(Path::new("/nonexistent/path/me.jpg"));
    let err = result.unwrap_err();
    assert!(matches!(err, SmartSizeError::FileNotFound(_)));
}

/// ディレクトリは画像として扱わない
#[test]
fn test_load_directory_as_image() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = photo::load_image(dir.path());
    assert!(matches!(result, Err(SmartSizeError::FileNotFound(_))));
}

/// 非2xxのメッセージはステータスコードを含む
#[test]
fn test_request_failed_message() {
    let err = SmartSizeError::RequestFailed(500);
    assert_eq!(err.to_string(), "Request failed: 500");
}

/// 共通エラーは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let common_err = smart_size_common::parse_recommendation("{").unwrap_err();
    let expected = common_err.to_string();
    let err: SmartSizeError = common_err.into();

    assert!(matches!(err, SmartSizeError::Common(_)));
    assert_eq!(err.to_string(), expected);
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: SmartSizeError = io_err.into();

    assert!(matches!(err, SmartSizeError::Io(_)));
    assert!(err.to_string().contains("IO"));
}

/// 設定ファイルの保存と読み込み
#[test]
fn test_config_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        backend_url: Some("https://size.example.com".into()),
    };
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.resolve_backend_url_with(None, None).unwrap(),
        "https://size.example.com"
    );
}

/// 設定ファイルがなければ既定値
#[test]
fn test_config_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let loaded = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(loaded, Config::default());
}

/// 壊れた設定ファイル
#[test]
fn test_config_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ invalid").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(SmartSizeError::JsonParse(_))));
}
