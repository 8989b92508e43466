//! APIレスポンスパーサー
//!
//! `/analyze` のレスポンスボディをパースし、境界で値を検証する

use crate::error::{Error, Result};
use crate::types::RecommendationResult;

/// レスポンスボディをパースして検証する
///
/// # Arguments
/// * `body` - 2xxレスポンスのボディ文字列
///
/// # Returns
/// * `Ok(RecommendationResult)` - 必須フィールドが揃い、値が妥当な場合
/// * `Err(Error::Json)` - JSONとして不正、またはフィールド欠落・型不一致
/// * `Err(Error::InvalidResponse)` - 値の範囲が不正
///
/// # Examples
/// ```
/// use smart_size_common::parse_recommendation;
///
/// let body = r#"{"recommendation":{"suggested_size":"M","confidence":0.82,
///   "details":{"metric":"chest","value_cm":96,"range_cm":[94,99]}},
///   "privacy":{"image_stored":false,"derived_data_stored":true}}"#;
/// let result = parse_recommendation(body).unwrap();
/// assert_eq!(result.recommendation.suggested_size, "M");
/// ```
pub fn parse_recommendation(body: &str) -> Result<RecommendationResult> {
    let result: RecommendationResult = serde_json::from_str(body)?;
    validate(&result)?;
    Ok(result)
}

fn validate(result: &RecommendationResult) -> Result<()> {
    let rec = &result.recommendation;

    if !rec.confidence.is_finite() || !(0.0..=1.0).contains(&rec.confidence) {
        return Err(Error::InvalidResponse(format!(
            "confidence out of range: {}",
            rec.confidence
        )));
    }

    if !rec.details.value_cm.is_finite() {
        return Err(Error::InvalidResponse(format!(
            "value_cm is not a number: {}",
            rec.details.value_cm
        )));
    }

    let [low, high] = rec.details.range_cm;
    if !low.is_finite() || !high.is_finite() || low > high {
        return Err(Error::InvalidResponse(format!(
            "range_cm is not a valid range: [{}, {}]",
            low, high
        )));
    }

    Ok(())
}
