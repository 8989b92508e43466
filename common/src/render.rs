//! 結果表示テキスト
//!
//! CLIとWebで同じ文言を出すための整形関数

use crate::flow::SubmissionState;
use crate::types::RecommendationResult;

pub const SUBMIT_LABEL: &str = "Get my size";
pub const LOADING_LABEL: &str = "Analyzing\u{2026}";

/// 送信ボタンの表示
pub fn submit_label(state: &SubmissionState) -> &'static str {
    if state.is_loading() {
        LOADING_LABEL
    } else {
        SUBMIT_LABEL
    }
}

/// 信頼度を整数パーセントに丸める
pub fn confidence_percent(confidence: f64) -> i64 {
    (confidence * 100.0).round() as i64
}

/// 結果の表示行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLines {
    pub size: String,
    pub confidence: String,
    pub metric: String,
    pub range: String,
    pub privacy: String,
}

impl ResultLines {
    pub fn new(result: &RecommendationResult) -> Self {
        let rec = &result.recommendation;
        let [low, high] = rec.details.range_cm;
        Self {
            size: format!("Suggested size: {}", rec.suggested_size),
            confidence: format!("Confidence: {}%", confidence_percent(rec.confidence)),
            metric: format!(
                "Metric used: {} = {} cm",
                rec.details.metric, rec.details.value_cm
            ),
            range: format!("Range matched: {} \u{2013} {} cm", low, high),
            privacy: format!(
                "Privacy: image stored: {}, derived saved: {}",
                result.privacy.image_stored, result.privacy.derived_data_stored
            ),
        }
    }

    pub fn to_vec(&self) -> Vec<&str> {
        vec![
            self.size.as_str(),
            self.confidence.as_str(),
            self.metric.as_str(),
            self.range.as_str(),
            self.privacy.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_recommendation;

    fn parse(body: &str) -> RecommendationResult {
        parse_recommendation(body).unwrap()
    }

    #[test]
    fn test_result_lines_example() {
        let result = parse(
            r#"{"recommendation":{"suggested_size":"M","confidence":0.82,
            "details":{"metric":"chest","value_cm":96,"range_cm":[94,99]}},
            "privacy":{"image_stored":false,"derived_data_stored":true}}"#,
        );
        let lines = ResultLines::new(&result);
        assert_eq!(lines.size, "Suggested size: M");
        assert_eq!(lines.confidence, "Confidence: 82%");
        assert_eq!(lines.metric, "Metric used: chest = 96 cm");
        assert_eq!(lines.range, "Range matched: 94 \u{2013} 99 cm");
        assert_eq!(
            lines.privacy,
            "Privacy: image stored: false, derived saved: true"
        );
        assert_eq!(lines.to_vec().len(), 5);
    }

    #[test]
    fn test_result_lines_fractional_values() {
        let result = parse(
            r#"{"recommendation":{"suggested_size":"32/34","confidence":0.675,
            "details":{"metric":"waist","value_cm":84.5,"range_cm":[82.5,86]}},
            "privacy":{"image_stored":false,"derived_data_stored":false}}"#,
        );
        let lines = ResultLines::new(&result);
        assert_eq!(lines.confidence, "Confidence: 68%");
        assert_eq!(lines.metric, "Metric used: waist = 84.5 cm");
        assert_eq!(lines.range, "Range matched: 82.5 \u{2013} 86 cm");
    }

    #[test]
    fn test_confidence_percent_bounds() {
        assert_eq!(confidence_percent(0.0), 0);
        assert_eq!(confidence_percent(1.0), 100);
        assert_eq!(confidence_percent(0.996), 100);
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(&SubmissionState::Idle), "Get my size");
        assert_eq!(submit_label(&SubmissionState::Loading), "Analyzing\u{2026}");
        assert_eq!(
            submit_label(&SubmissionState::Failed("x".into())),
            "Get my size"
        );
    }
}
