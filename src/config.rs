use crate::error::{Result, SmartSizeError};
use serde::{Deserialize, Serialize};
use smart_size_common::DEFAULT_BACKEND_URL;
use std::path::{Path, PathBuf};
use tracing::warn;
use url::Url;

/// バックエンドURLを指定する環境変数
pub const BACKEND_URL_ENV: &str = "SMART_SIZE_BACKEND_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub backend_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 読み込めない場合は警告を出して既定値を返す（`config` サブコマンドでの修復用）
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                warn!(error = %e, "設定ファイルの場所を特定できません。既定値を使用します");
                Self::default()
            }
        }
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            warn!(error = %e, path = %path.display(), "設定ファイルを読み込めません。既定値を使用します");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SmartSizeError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("smart-size").join("config.json"))
    }

    pub fn set_backend_url(&mut self, url: &str) -> Result<()> {
        self.backend_url = Some(validate_backend_url(url)?);
        self.save()
    }

    /// 使用するバックエンドURLを決定する（起動時に一度だけ呼ぶ）
    ///
    /// 優先順位: コマンドライン引数 > 環境変数 > 設定ファイル > 既定値
    pub fn resolve_backend_url(&self, cli_override: Option<&str>) -> Result<String> {
        let env = std::env::var(BACKEND_URL_ENV).ok();
        self.resolve_backend_url_with(cli_override, env.as_deref())
    }

    pub fn resolve_backend_url_with(
        &self,
        cli_override: Option<&str>,
        env: Option<&str>,
    ) -> Result<String> {
        let candidate = cli_override
            .or(env.filter(|v| !v.trim().is_empty()))
            .or(self.backend_url.as_deref())
            .unwrap_or(DEFAULT_BACKEND_URL);
        validate_backend_url(candidate)
    }
}

/// http(s) のURLか検証し、末尾スラッシュを除いて返す
pub fn validate_backend_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed)
        .map_err(|e| SmartSizeError::Config(format!("不正なURL: {} ({})", trimmed, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(trimmed.trim_end_matches('/').to_string()),
        other => Err(SmartSizeError::Config(format!(
            "未対応のスキーム: {} (http/httpsのみ)",
            other
        ))),
    }
}
