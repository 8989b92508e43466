//! 対話式フォーム入力
//!
//! コマンドラインで指定されなかった項目をWeb版フォームと同じ順で尋ねる

use crate::error::{Result, SmartSizeError};
use dialoguer::{Confirm, Input, Select};
use smart_size_common::{Category, FormInputs, DEFAULT_BRAND};

/// 同意文（Web版のチェックボックスと同じ文言）
pub const CONSENT_TEXT: &str = "I agree to the processing of this photo solely to compute measurements and receive size recommendations. Save derived measurements to improve future suggestions. You can request deletion at any time.";

/// コマンドラインで指定済みの項目
#[derive(Debug, Clone, Default)]
pub struct GivenInputs {
    pub height: Option<String>,
    pub category: Option<Category>,
    pub brand: Option<String>,
    pub consent: bool,
}

impl GivenInputs {
    /// 非対話時: 未指定項目は既定値
    pub fn into_inputs(self) -> FormInputs {
        let defaults = FormInputs::default();
        FormInputs {
            height: self.height.unwrap_or(defaults.height),
            category: self.category.unwrap_or(defaults.category),
            brand: self.brand.unwrap_or(defaults.brand),
            consent: self.consent,
        }
    }
}

/// 未指定項目を対話で入力
pub fn prompt_inputs(given: GivenInputs) -> Result<FormInputs> {
    let height = match given.height {
        Some(h) => h,
        None => Input::<String>::new()
            .with_prompt("Your height (cm, optional)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| SmartSizeError::Prompt(e.to_string()))?,
    };

    let category = match given.category {
        Some(c) => c,
        None => {
            let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
            let selected = Select::new()
                .with_prompt("Category")
                .items(&labels)
                .default(category_index(Category::default()))
                .interact()
                .map_err(|e| SmartSizeError::Prompt(e.to_string()))?;
            Category::ALL[selected]
        }
    };

    let brand = match given.brand {
        Some(b) => b,
        None => Input::<String>::new()
            .with_prompt("Brand (optional)")
            .default(DEFAULT_BRAND.to_string())
            .interact_text()
            .map_err(|e| SmartSizeError::Prompt(e.to_string()))?,
    };

    let consent = if given.consent {
        true
    } else {
        println!("{}", CONSENT_TEXT);
        Confirm::new()
            .with_prompt("Save derived measurements?")
            .default(false)
            .interact()
            .map_err(|e| SmartSizeError::Prompt(e.to_string()))?
    };

    Ok(FormInputs {
        height,
        category,
        brand,
        consent,
    })
}

fn category_index(category: Category) -> usize {
    Category::ALL
        .iter()
        .position(|c| *c == category)
        .unwrap_or(0)
}
