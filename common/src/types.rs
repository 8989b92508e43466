//! 共通型定義
//!
//! フォーム入力とRecommendation Serviceのレスポンス型

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// ブランド未指定時の既定値
pub const DEFAULT_BRAND: &str = "generic";

/// 衣類カテゴリ（固定セット）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    TShirt,
    Shirt,
    Hoodie,
    Jacket,
    Pants,
    Jeans,
    Dress,
    Skirt,
}

impl Category {
    /// 表示順の全カテゴリ
    pub const ALL: [Category; 8] = [
        Category::TShirt,
        Category::Shirt,
        Category::Hoodie,
        Category::Jacket,
        Category::Pants,
        Category::Jeans,
        Category::Dress,
        Category::Skirt,
    ];

    /// 送信時のキー
    pub fn key(&self) -> &'static str {
        match self {
            Category::TShirt => "tshirt",
            Category::Shirt => "shirt",
            Category::Hoodie => "hoodie",
            Category::Jacket => "jacket",
            Category::Pants => "pants",
            Category::Jeans => "jeans",
            Category::Dress => "dress",
            Category::Skirt => "skirt",
        }
    }

    /// 表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Category::TShirt => "T\u{2011}Shirt",
            Category::Shirt => "Shirt",
            Category::Hoodie => "Hoodie",
            Category::Jacket => "Jacket",
            Category::Pants => "Pants",
            Category::Jeans => "Jeans",
            Category::Dress => "Dress",
            Category::Skirt => "Skirt",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tshirt" | "t-shirt" | "t_shirt" => Ok(Category::TShirt),
            "shirt" => Ok(Category::Shirt),
            "hoodie" => Ok(Category::Hoodie),
            "jacket" => Ok(Category::Jacket),
            "pants" => Ok(Category::Pants),
            "jeans" => Ok(Category::Jeans),
            "dress" => Ok(Category::Dress),
            "skirt" => Ok(Category::Skirt),
            _ => Err(Error::Config(format!(
                "unknown category: {}. Use one of tshirt, shirt, hoodie, jacket, pants, jeans, dress, skirt",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// フォーム入力
#[derive(Debug, Clone, PartialEq)]
pub struct FormInputs {
    /// 身長(cm)。自由入力、空なら送信しない
    pub height: String,
    pub category: Category,
    pub brand: String,
    /// 派生データ保存への同意。既定は未同意
    pub consent: bool,
}

impl Default for FormInputs {
    fn default() -> Self {
        Self {
            height: String::new(),
            category: Category::default(),
            brand: DEFAULT_BRAND.to_string(),
            consent: false,
        }
    }
}

/// 解析結果（Recommendation Serviceのレスポンス）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub recommendation: Recommendation,
    pub privacy: Privacy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub suggested_size: String,
    /// 0..1
    pub confidence: f64,
    pub details: RecommendationDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationDetails {
    pub metric: String,
    pub value_cm: f64,
    /// [low, high]
    pub range_cm: [f64; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Privacy {
    pub image_stored: bool,
    pub derived_data_stored: bool,
}
