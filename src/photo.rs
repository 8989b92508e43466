//! 選択画像の読み込み
//!
//! 画像の内容・サイズは検証しない（Recommendation Serviceに委ねる）。
//! プレビューは寸法の取得のみで、失敗しても送信は妨げない

use crate::error::{Result, SmartSizeError};
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Arc<[u8]>,
}

/// プレビュー情報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
}

const MIME_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
];

pub fn load_image(path: &Path) -> Result<SelectedImage> {
    if !path.is_file() {
        return Err(SmartSizeError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());

    Ok(SelectedImage {
        file_name,
        mime_type: mime_type_for(path),
        bytes: bytes.into(),
    })
}

/// 拡張子からMIMEタイプを推定（不明ならoctet-stream）
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    MIME_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or("application/octet-stream")
}

impl SelectedImage {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// 画像ヘッダから寸法を読む。デコードできなければNone
    pub fn preview(&self) -> Option<Preview> {
        let reader = image::ImageReader::new(Cursor::new(&self.bytes[..]))
            .with_guessed_format()
            .ok()?;
        let (width, height) = reader.into_dimensions().ok()?;
        Some(Preview { width, height })
    }
}
