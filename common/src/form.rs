//! 送信フォームの組み立て
//!
//! multipartのテキストフィールドと送信先URL。画像パートの扱いは
//! クライアントごと（reqwest / FormData）に異なるため、ここではフィールド名のみ定義する

use crate::types::FormInputs;

/// 開発用の既定バックエンド
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// 解析エンドポイントのパス
pub const ANALYZE_PATH: &str = "/analyze";

/// 画像パートのフィールド名
pub const IMAGE_FIELD: &str = "image";

/// multipartのテキストフィールド
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub value: String,
}

impl FormField {
    fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self { name, value: value.into() }
    }
}

/// テキストフィールドを送信順に組み立てる
///
/// `height_cm` は身長が空文字列の場合のみ含めない。値は入力のまま送り、
/// 検証は行わない（サービス側に委ねる）
pub fn text_fields(inputs: &FormInputs) -> Vec<FormField> {
    let mut fields = Vec::with_capacity(4);

    if !inputs.height.is_empty() {
        fields.push(FormField::new("height_cm", inputs.height.as_str()));
    }
    fields.push(FormField::new("brand", inputs.brand.as_str()));
    fields.push(FormField::new("category", inputs.category.key()));
    fields.push(FormField::new("consent", inputs.consent.to_string()));

    fields
}

/// `{base}/analyze` を返す（末尾スラッシュは1つに正規化）
pub fn analyze_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), ANALYZE_PATH)
}
